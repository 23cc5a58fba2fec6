//! Fixed-size collection assembled from paginated fetches.

/// Records per page, fixed by the upstream API.
pub const PAGE_SIZE: usize = 10;

/// Largest upstream `count` accepted before any slots are allocated.
pub const MAX_COLLECTION_COUNT: usize = 100_000;

/// Number of pages needed to hold `count` records.
pub const fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// All records of a collection resource, in upstream document order.
///
/// The collection is pre-sized to the `count` reported by the first page and
/// filled by absolute index, so order does not depend on fetch order. A slot
/// is `None` when the page that should have filled it failed to fetch (or came
/// back short); failed pages are recorded so consumers can tell a gap from a
/// complete collection.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCollection<T> {
    slots: Vec<Option<T>>,
    failed_pages: Vec<u32>,
}

impl<T> AggregatedCollection<T> {
    /// Create an empty collection with `count` unfilled slots.
    pub fn with_count(count: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(count).collect(),
            failed_pages: Vec::new(),
        }
    }

    /// Build a fully populated collection from records already in order.
    pub fn from_records(records: Vec<T>) -> Self {
        Self {
            slots: records.into_iter().map(Some).collect(),
            failed_pages: Vec::new(),
        }
    }

    /// Copy the records of a one-based `page` into their absolute slots.
    ///
    /// Record `i` of page `p` lands at `(p - 1) * PAGE_SIZE + i`. Records that
    /// fall outside the collection are discarded; the number discarded is
    /// returned.
    pub fn place_page(&mut self, page: u32, records: Vec<T>) -> usize {
        let offset = (page as usize).saturating_sub(1) * PAGE_SIZE;
        let mut discarded = 0;

        for (i, record) in records.into_iter().enumerate() {
            match self.slots.get_mut(offset + i) {
                Some(slot) => *slot = Some(record),
                None => discarded += 1,
            }
        }

        discarded
    }

    /// Record that `page` could not be fetched. Its slots stay empty.
    pub fn mark_failed(&mut self, page: u32) {
        if !self.failed_pages.contains(&page) {
            self.failed_pages.push(page);
        }
    }

    /// Total number of slots (the upstream `count`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record at absolute `index`, if that slot was filled.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// All slots in order, including empty ones.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Pages whose fetch failed during aggregation, in the order they failed.
    pub fn failed_pages(&self) -> &[u32] {
        &self.failed_pages
    }

    /// Number of filled slots.
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot holds a record.
    pub fn is_complete(&self) -> bool {
        self.failed_pages.is_empty() && self.slots.iter().all(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
        assert_eq!(total_pages(23), 3);
        assert_eq!(total_pages(82), 9);
    }

    #[test]
    fn test_with_count_is_all_empty() {
        let collection: AggregatedCollection<u32> = AggregatedCollection::with_count(5);
        assert_eq!(collection.len(), 5);
        assert_eq!(collection.filled(), 0);
        assert!(!collection.is_complete());
        assert!(collection.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_pages_land_at_absolute_offsets() {
        let mut collection = AggregatedCollection::with_count(23);

        // Out-of-order placement still yields document order
        collection.place_page(3, (20..23).collect());
        collection.place_page(1, (0..10).collect());
        collection.place_page(2, (10..20).collect());

        assert!(collection.is_complete());
        for i in 0..23 {
            assert_eq!(collection.get(i), Some(&(i as u32)));
        }
    }

    #[test]
    fn test_overflowing_records_are_discarded() {
        let mut collection = AggregatedCollection::with_count(12);
        let discarded = collection.place_page(2, vec![10, 11, 12, 13]);

        assert_eq!(discarded, 2);
        assert_eq!(collection.get(10), Some(&10));
        assert_eq!(collection.get(11), Some(&11));
        assert_eq!(collection.len(), 12);
    }

    #[test]
    fn test_failed_page_leaves_gap() {
        let mut collection = AggregatedCollection::with_count(15);
        collection.place_page(1, (0..10).collect::<Vec<u32>>());
        collection.mark_failed(2);
        collection.mark_failed(2);

        assert_eq!(collection.failed_pages(), &[2]);
        assert_eq!(collection.filled(), 10);
        assert!(collection.get(10).is_none());
        assert!(!collection.is_complete());
    }

    #[test]
    fn test_from_records() {
        let collection = AggregatedCollection::from_records(vec!["a", "b"]);
        assert_eq!(collection.len(), 2);
        assert!(collection.is_complete());
        assert_eq!(collection.get(1), Some(&"b"));
    }

    #[test]
    fn test_empty_collection_is_complete() {
        let collection: AggregatedCollection<u32> = AggregatedCollection::with_count(0);
        assert!(collection.is_empty());
        assert!(collection.is_complete());
    }
}
