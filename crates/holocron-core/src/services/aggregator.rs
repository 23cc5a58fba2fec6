//! Fetch-all aggregation over a paginated collection.

use crate::domain::{AggregatedCollection, CollectionResource, MAX_COLLECTION_COUNT, total_pages};
use crate::ports::{PageSource, SwapiPortError, SwapiPortResult};

/// Fetch every page of a collection into one ordered collection.
///
/// Page 1 is fetched first to learn the total `count`; the result is sized to
/// it and pages `2..=ceil(count / 10)` are fetched one at a time, in order.
///
/// A page 1 failure is returned as an error, as is a reported `count` above
/// [`MAX_COLLECTION_COUNT`]. A failure on any later page is
/// logged, recorded in [`AggregatedCollection::failed_pages`], and its slots
/// are left empty; aggregation continues with the next page.
pub async fn aggregate_collection<T, S>(source: &S) -> SwapiPortResult<AggregatedCollection<T>>
where
    T: CollectionResource,
    S: PageSource<T> + ?Sized,
{
    let collection_name = T::COLLECTION;

    let first = source.fetch_page(1).await?;
    let count = first.count;
    if count > MAX_COLLECTION_COUNT {
        return Err(SwapiPortError::Decode {
            message: format!(
                "reported count {count} exceeds the limit of {MAX_COLLECTION_COUNT} records"
            ),
        });
    }
    let last_page = u32::try_from(total_pages(count)).map_err(|_| SwapiPortError::Decode {
        message: format!("reported count {count} is out of range"),
    })?;

    tracing::debug!(
        collection = collection_name,
        count,
        pages = last_page,
        "Fetched first page"
    );

    let mut collection = AggregatedCollection::with_count(count);
    discard_overflow(collection_name, 1, collection.place_page(1, first.results));

    for page in 2..=last_page {
        match source.fetch_page(page).await {
            Ok(response) => {
                if response.count != count {
                    tracing::warn!(
                        collection = collection_name,
                        page,
                        expected = count,
                        reported = response.count,
                        "Upstream count changed during aggregation"
                    );
                }
                let discarded = collection.place_page(page, response.results);
                discard_overflow(collection_name, page, discarded);
            }
            Err(e) => {
                tracing::warn!(
                    collection = collection_name,
                    page,
                    error = %e,
                    "Page fetch failed, leaving its slots empty"
                );
                collection.mark_failed(page);
            }
        }
    }

    tracing::info!(
        collection = collection_name,
        count,
        filled = collection.filled(),
        failed_pages = ?collection.failed_pages(),
        "Aggregated collection"
    );

    Ok(collection)
}

fn discard_overflow(collection: &str, page: u32, discarded: usize) {
    if discarded > 0 {
        tracing::warn!(
            collection,
            page,
            discarded,
            "Discarded records beyond the reported count"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Page;
    use async_trait::async_trait;
    use serde::Deserialize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item(usize);

    impl CollectionResource for Item {
        const COLLECTION: &'static str = "items";
    }

    /// Serves canned pages and records the order they were requested in.
    struct ScriptedSource {
        pages: HashMap<u32, SwapiPortResult<Page<Item>>>,
        requested: Mutex<Vec<u32>>,
    }

    impl ScriptedSource {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn with_page(mut self, page: u32, count: usize, items: std::ops::Range<usize>) -> Self {
            self.pages.insert(
                page,
                Ok(Page {
                    count,
                    next: None,
                    previous: None,
                    results: items.map(Item).collect(),
                }),
            );
            self
        }

        fn with_failure(mut self, page: u32) -> Self {
            self.pages.insert(
                page,
                Err(SwapiPortError::RetriesExhausted {
                    attempts: 4,
                    message: "connection refused".to_string(),
                }),
            );
            self
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageSource<Item> for ScriptedSource {
        async fn fetch_page(&self, page: u32) -> SwapiPortResult<Page<Item>> {
            self.requested.lock().unwrap().push(page);
            self.pages
                .get(&page)
                .cloned()
                .unwrap_or(Err(SwapiPortError::UpstreamStatus {
                    status: 404,
                    url: format!("https://swapi.test/api/items/?page={page}"),
                }))
        }
    }

    #[tokio::test]
    async fn test_single_page_collection() {
        let source = ScriptedSource::new().with_page(1, 3, 0..3);

        let collection = aggregate_collection(&source).await.unwrap();

        assert_eq!(
            collection.slots(),
            &[Some(Item(0)), Some(Item(1)), Some(Item(2))]
        );
        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_multi_page_collection_preserves_order() {
        let source = ScriptedSource::new()
            .with_page(1, 23, 0..10)
            .with_page(2, 23, 10..20)
            .with_page(3, 23, 20..23);

        let collection = aggregate_collection(&source).await.unwrap();

        assert_eq!(collection.len(), 23);
        assert!(collection.is_complete());
        for i in 0..23 {
            assert_eq!(collection.get(i), Some(&Item(i)));
        }
        assert_eq!(source.requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_failed_middle_page_leaves_gap() {
        // Current behavior: the gap is kept and reported, not retried.
        let source = ScriptedSource::new()
            .with_page(1, 23, 0..10)
            .with_failure(2)
            .with_page(3, 23, 20..23);

        let collection = aggregate_collection(&source).await.unwrap();

        assert_eq!(collection.len(), 23);
        assert_eq!(collection.failed_pages(), &[2]);
        assert!(!collection.is_complete());
        for i in 0..10 {
            assert_eq!(collection.get(i), Some(&Item(i)));
        }
        for i in 10..20 {
            assert!(collection.get(i).is_none(), "slot {i} should be empty");
        }
        for i in 20..23 {
            assert_eq!(collection.get(i), Some(&Item(i)));
        }
        assert_eq!(source.requested(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_first_page_failure_is_an_error() {
        let source = ScriptedSource::new().with_failure(1);

        let result = aggregate_collection(&source).await;

        assert!(matches!(
            result,
            Err(SwapiPortError::RetriesExhausted { attempts: 4, .. })
        ));
        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_oversized_count_is_rejected_before_allocation() {
        let source = ScriptedSource::new().with_page(1, 4_000_000_000, 0..0);

        let result = aggregate_collection(&source).await;

        assert!(matches!(result, Err(SwapiPortError::Decode { .. })));
        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_count_just_over_limit_is_rejected() {
        let source = ScriptedSource::new().with_page(1, MAX_COLLECTION_COUNT + 1, 0..0);

        let result = aggregate_collection(&source).await;

        match result {
            Err(SwapiPortError::Decode { message }) => {
                assert!(message.contains(&MAX_COLLECTION_COUNT.to_string()));
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_collection_fetches_one_page() {
        let source = ScriptedSource::new().with_page(1, 0, 0..0);

        let collection = aggregate_collection(&source).await.unwrap();

        assert!(collection.is_empty());
        assert_eq!(source.requested(), vec![1]);
    }

    #[tokio::test]
    async fn test_short_page_leaves_trailing_slots_empty() {
        let source = ScriptedSource::new()
            .with_page(1, 15, 0..10)
            .with_page(2, 15, 10..13);

        let collection = aggregate_collection(&source).await.unwrap();

        assert_eq!(collection.filled(), 13);
        assert!(collection.failed_pages().is_empty());
        assert!(!collection.is_complete());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let source: Box<dyn PageSource<Item>> =
            Box::new(ScriptedSource::new().with_page(1, 2, 0..2));

        let collection = aggregate_collection(source.as_ref()).await.unwrap();

        assert_eq!(collection.len(), 2);
    }
}
