//! # Mock Framework
//!
//! Utilities for testing clients and the orchestrator in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_create`] to assert behavior
//! and script the service's reply, including failures.

use crate::actor_framework::{Entity, FrameworkError, Page, PageRequest, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test controls instead of a running
/// `ResourceActor`, so each reply (success, failure, or never) is decided
/// by the test.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(PageRequest, oneshot::Sender<Result<Page<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { page, respond_to }) => Some((page, respond_to)),
        _ => None,
    }
}

/// Answers List requests from a fixed set of records until the channel closes.
///
/// `declared_total` is what every page reports as the total count, which lets
/// tests simulate a service whose total disagrees with what it actually holds.
/// Requests for a page listed in `failing_pages` get `ActorDropped` instead.
/// Returns the number of List requests received.
pub async fn serve_pages<T: Entity>(
    mut receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: Vec<T>,
    declared_total: u64,
    failing_pages: Vec<u32>,
) -> usize {
    let mut calls = 0;
    while let Some((request, responder)) = expect_list(&mut receiver).await {
        calls += 1;
        if failing_pages.contains(&request.page()) {
            let _ = responder.send(Err(FrameworkError::ActorDropped));
            continue;
        }
        let offset = (request.page() as usize - 1) * request.page_size() as usize;
        let items = records.iter().skip(offset).take(request.page_size() as usize).cloned().collect();
        let _ = responder.send(Ok(Page {
            items,
            page: request.page(),
            page_size: request.page_size(),
            total_count: declared_total,
        }));
    }
    calls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogItem, CatalogItemCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<CatalogItem>(10);

        let create_task = tokio::spawn(async move {
            client.create(CatalogItemCreate::new("Phone A", 100.0)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Phone A");
        responder.send(Ok(CatalogItem::new("p1", "Phone A", 100.0))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.map(|item| item.product_id), Ok("p1".to_string()));
    }
}
