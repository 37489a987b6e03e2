use std::collections::{HashMap, HashSet};
use crate::domain::{CatalogItem, ReconciledLineItem};
use crate::orchestrator::OrderError;

/// Matches every requested identifier against the catalog.
///
/// Line items come out in catalog order. Each occurrence of an identifier in
/// the request yields its own line item, so listing an identifier twice
/// orders (and prices) that product twice. Should the catalog hold the same
/// identifier more than once, only its first entry is used.
///
/// # Errors
/// [`OrderError::UnknownProducts`] with every unmatched identifier, once
/// each, in request order.
pub fn reconcile(requested: &[String], catalog: &[CatalogItem]) -> Result<Vec<ReconciledLineItem>, OrderError> {
    let known: HashSet<&str> = catalog.iter().map(|item| item.product_id.as_str()).collect();

    let mut reported = HashSet::new();
    let missing: Vec<String> = requested
        .iter()
        .filter(|id| !known.contains(id.as_str()))
        .filter(|id| reported.insert(id.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(OrderError::UnknownProducts(missing));
    }

    let mut wanted: HashMap<&str, usize> = HashMap::new();
    for id in requested {
        *wanted.entry(id.as_str()).or_default() += 1;
    }

    let mut line_items = Vec::with_capacity(requested.len());
    for item in catalog {
        if let Some(count) = wanted.remove(item.product_id.as_str()) {
            line_items.extend(std::iter::repeat(ReconciledLineItem::from(item)).take(count));
        }
    }
    Ok(line_items)
}

/// Sum of the line item prices; zero for no items.
pub fn total_price(line_items: &[ReconciledLineItem]) -> f64 {
    line_items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new("p1", "Phone A", 100.0),
            CatalogItem::new("p2", "Phone B", 600.0),
            CatalogItem::new("p3", "Phone C", 50.0),
        ]
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn product_ids(items: &[ReconciledLineItem]) -> Vec<&str> {
        items.iter().map(|item| item.product_id.as_str()).collect()
    }

    #[test]
    fn test_follows_catalog_order() {
        let items = reconcile(&ids(&["p3", "p1"]), &catalog()).unwrap();
        assert_eq!(product_ids(&items), vec!["p1", "p3"]);
        assert_eq!(total_price(&items), 150.0);
    }

    #[test]
    fn test_missing_ids_in_request_order() {
        let err = reconcile(&ids(&["p9", "p1", "p4", "p9"]), &catalog()).unwrap_err();
        assert_eq!(err, OrderError::UnknownProducts(ids(&["p9", "p4"])));
    }

    #[test]
    fn test_duplicate_request_ids_are_separate_line_items() {
        // Repeating an identifier buys the product twice.
        let items = reconcile(&ids(&["p2", "p1", "p2"]), &catalog()).unwrap();
        assert_eq!(product_ids(&items), vec!["p1", "p2", "p2"]);
        assert_eq!(total_price(&items), 1300.0);
    }

    #[test]
    fn test_duplicate_catalog_entries_do_not_inflate() {
        let mut catalog = catalog();
        catalog.push(CatalogItem::new("p1", "Phone A (again)", 1.0));

        let items = reconcile(&ids(&["p1"]), &catalog).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Phone A");
    }

    #[test]
    fn test_ids_match_exactly() {
        let err = reconcile(&ids(&["P1", "p1 "]), &catalog()).unwrap_err();
        assert_eq!(err, OrderError::UnknownProducts(ids(&["P1", "p1 "])));
    }

    #[test]
    fn test_total_of_nothing_is_zero() {
        assert_eq!(total_price(&[]), 0.0);
    }
}
