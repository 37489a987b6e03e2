//! Caller-facing edge of the orchestrator: request validation and the
//! rendering of failures into structured error responses.

use serde::{Deserialize, Serialize};
use tracing::{error, info_span, warn, Instrument};
use uuid::Uuid;
use crate::domain::{Order, OrderRequest};
use crate::orchestrator::{OrderError, OrderOrchestrator};

pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;
pub const STATUS_BAD_GATEWAY: u16 = 502;

/// One rejected request field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Structured failure returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub error_message: String,
    pub operation_id: String,
}

impl OrderError {
    /// Status code the boundary reports for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            OrderError::EmptyRequest | OrderError::UnknownProducts(_) => STATUS_UNPROCESSABLE_ENTITY,
            OrderError::CatalogUnavailable(_) => STATUS_INTERNAL_SERVER_ERROR,
            OrderError::OrderSubmission(_) => STATUS_BAD_GATEWAY,
        }
    }
}

/// Checks field presence and format before the request reaches the core.
pub fn validate_request(request: &OrderRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    let customer = &request.customer;

    if customer.name.trim().is_empty() {
        errors.push(FieldError { field: "customer.name", message: "must not be blank" });
    }
    if customer.surname.trim().is_empty() {
        errors.push(FieldError { field: "customer.surname", message: "must not be blank" });
    }
    if customer.email.trim().is_empty() {
        errors.push(FieldError { field: "customer.email", message: "must not be blank" });
    } else if !is_well_formed_email(&customer.email) {
        errors.push(FieldError { field: "customer.email", message: "must be a well-formed email address" });
    }
    if request.product_ids.is_empty() {
        errors.push(FieldError { field: "products-to-buy", message: "must not be empty" });
    } else if request.product_ids.iter().any(|id| id.trim().is_empty()) {
        errors.push(FieldError { field: "products-to-buy", message: "must not contain blank identifiers" });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// `field: message` lines, one per error.
pub fn render_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validates the request, runs the orchestrator, and maps any failure to an
/// [`ErrorResponse`] tagged with a fresh operation id.
pub async fn place_order(orchestrator: &OrderOrchestrator, request: OrderRequest) -> Result<Order, ErrorResponse> {
    let operation_id = Uuid::new_v4().to_string();
    let span = info_span!("place_order", operation_id = %operation_id);

    async {
        if let Err(errors) = validate_request(&request) {
            let message = render_field_errors(&errors);
            warn!(%message, "Order request failed validation");
            return Err(ErrorResponse {
                status: STATUS_BAD_REQUEST,
                error_message: message,
                operation_id: operation_id.clone(),
            });
        }

        orchestrator.create_order(request).await.map_err(|e| {
            let status = e.status_code();
            if e.is_client_error() {
                warn!(status, error = %e, "Order rejected");
            } else {
                error!(status, error = %e, "Order failed");
            }
            ErrorResponse {
                status,
                error_message: e.to_string(),
                operation_id: operation_id.clone(),
            }
        })
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::CatalogError;
    use crate::domain::Customer;
    use crate::order_backend::OrderBackendError;

    fn request(customer: Customer, ids: &[&str]) -> OrderRequest {
        OrderRequest::new(customer, ids.iter().copied())
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request(Customer::new("Jane", "Doe", "jane@x.com"), &["p1"]);
        assert_eq!(validate_request(&req), Ok(()));
    }

    #[test]
    fn test_collects_every_field_error() {
        let req = request(Customer::new(" ", "", "not-an-email"), &[]);
        let errors = validate_request(&req).unwrap_err();
        assert_eq!(
            render_field_errors(&errors),
            "customer.name: must not be blank\n\
             customer.surname: must not be blank\n\
             customer.email: must be a well-formed email address\n\
             products-to-buy: must not be empty"
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_well_formed_email("jane@x.com"));
        assert!(is_well_formed_email("jane.doe+orders@mail.example.org"));
        assert!(!is_well_formed_email("jane@x"));
        assert!(!is_well_formed_email("@x.com"));
        assert!(!is_well_formed_email("jane@@x.com"));
        assert!(!is_well_formed_email("jane@x..com"));
        assert!(!is_well_formed_email("ja ne@x.com"));
    }

    #[test]
    fn test_blank_identifier_rejected() {
        let req = request(Customer::new("Jane", "Doe", "jane@x.com"), &["p1", " "]);
        let errors = validate_request(&req).unwrap_err();
        assert_eq!(errors[0].field, "products-to-buy");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderError::EmptyRequest.status_code(), 422);
        assert_eq!(OrderError::UnknownProducts(vec!["p4".into()]).status_code(), 422);
        assert_eq!(
            OrderError::CatalogUnavailable(CatalogError::ActorCommunicationError("x".into())).status_code(),
            500
        );
        assert_eq!(
            OrderError::OrderSubmission(OrderBackendError::Rejected("x".into())).status_code(),
            502
        );
    }

    #[test]
    fn test_client_errors_map_to_4xx() {
        let errors = [
            OrderError::EmptyRequest,
            OrderError::UnknownProducts(vec!["p4".into()]),
            OrderError::CatalogUnavailable(CatalogError::InconsistentTotal { page: 1, total_count: 5 }),
            OrderError::OrderSubmission(OrderBackendError::ActorCommunicationError("x".into())),
        ];
        for err in errors {
            assert_eq!(err.is_client_error(), (400..500).contains(&err.status_code()), "{:?}", err);
        }
    }

    #[test]
    fn test_error_response_wire_names() {
        let response = ErrorResponse {
            status: 422,
            error_message: "boom".to_string(),
            operation_id: "op".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["errorMessage"], "boom");
        assert_eq!(value["operationId"], "op");
        assert_eq!(value["status"], 422);
    }
}
