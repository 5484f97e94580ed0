//! Product-type filter and fixed-size pagination for fetched collections

/// Filter key that disables filtering
pub const ALL_PRODUCT_TYPES: &str = "All";

/// Rows that can be narrowed down by product type
pub trait HasProductType {
    fn product_type(&self) -> &str;
}

/// `"All"` keeps every row; any other key is an exact match on `product_type`
pub fn filter_by_product_type<T: HasProductType + Clone>(rows: &[T], key: &str) -> Vec<T> {
    if key == ALL_PRODUCT_TYPES {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.product_type() == key)
        .cloned()
        .collect()
}

/// Returns the `[(page-1)*page_size, page*page_size)` slice of `rows`.
///
/// Pages are 1-based. Pages past the end (and page 0) give an empty slice;
/// clamping is up to the caller.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// `ceil(len / page_size)`
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Filter dropdown options: `"All"` followed by product types in first-seen order
pub fn unique_product_types<T: HasProductType>(rows: &[T]) -> Vec<String> {
    let mut types = vec![ALL_PRODUCT_TYPES.to_string()];
    for row in rows {
        let product_type = row.product_type();
        if !types.iter().any(|t| t == product_type) {
            types.push(product_type.to_string());
        }
    }
    types
}

/// One visible page of a filtered collection
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

/// Filter key and current page of a table view.
///
/// The page is reset whenever the filter changes, so a page number from the
/// unfiltered set never survives into a shorter filtered one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    filter: String,
    page: usize,
    page_size: usize,
}

impl ListView {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: ALL_PRODUCT_TYPES.to_string(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_filter(&mut self, key: impl Into<String>) {
        self.filter = key.into();
        self.page = 1;
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Jump to `page`, kept within `1..=total_pages`
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Pull a page left past the end back onto the last page.
    ///
    /// Returns `true` when the page moved.
    pub fn clamp_to(&mut self, total_pages: usize) -> bool {
        let before = self.page;
        self.go_to(before, total_pages);
        self.page != before
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Filter `rows` by the current key and cut out the current page
    pub fn apply<T: HasProductType + Clone>(&self, rows: &[T]) -> ListPage<T> {
        let filtered = filter_by_product_type(rows, &self.filter);
        self.page_of(filtered)
    }

    /// Cut the current page out of rows that need no filtering.
    ///
    /// A page beyond the end (the collection shrank since it was chosen)
    /// is read as the last page.
    pub fn page_of<T: Clone>(&self, rows: Vec<T>) -> ListPage<T> {
        let total_pages = total_pages(rows.len(), self.page_size);
        let page = self.page.clamp(1, total_pages.max(1));
        ListPage {
            page,
            total_pages,
            total_count: rows.len(),
            rows: paginate(&rows, page, self.page_size).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, usize);

    impl HasProductType for Row {
        fn product_type(&self) -> &str {
            self.0
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row(if i % 3 == 0 { "Wig" } else { "Bundle" }, i))
            .collect()
    }

    #[test]
    fn test_paginate_twelve_by_ten() {
        let data = rows(12);
        assert_eq!(paginate(&data, 1, 10).len(), 10);
        assert_eq!(paginate(&data, 2, 10).len(), 2);
        assert_eq!(paginate(&data, 2, 10)[0].1, 10);
        assert!(paginate(&data, 3, 10).is_empty());
        assert!(paginate(&data, 0, 10).is_empty());
        assert_eq!(total_pages(data.len(), 10), 2);
    }

    #[test]
    fn pages_cover_every_row_once() {
        for len in [0usize, 1, 5, 9, 10, 11, 23] {
            let data = rows(len);
            for size in [1usize, 5, 10] {
                let pages = total_pages(len, size);
                let collected: Vec<usize> = (1..=pages)
                    .flat_map(|p| {
                        let page = paginate(&data, p, size);
                        assert!(page.len() <= size);
                        page.iter().map(|r| r.1).collect::<Vec<_>>()
                    })
                    .collect();
                assert_eq!(collected, (0..len).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let data = rows(7);
        assert_eq!(filter_by_product_type(&data, ALL_PRODUCT_TYPES), data);
    }

    #[test]
    fn test_filter_exact_match() {
        let data = rows(7);
        let wigs = filter_by_product_type(&data, "Wig");
        assert_eq!(wigs.len(), 3);
        assert!(wigs.iter().all(|r| r.0 == "Wig"));
        assert!(filter_by_product_type(&data, "wig").is_empty());
    }

    #[test]
    fn changing_filter_resets_page() {
        let data = rows(30);
        let mut view = ListView::new(10);
        view.go_to(3, total_pages(data.len(), 10));
        assert_eq!(view.page(), 3);

        view.set_filter("Wig");
        assert_eq!(view.page(), 1);
        let page = view.apply(&data);
        assert_eq!(page.total_count, 10);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut view = ListView::new(5);
        view.prev();
        assert_eq!(view.page(), 1);
        view.next(2);
        view.next(2);
        assert_eq!(view.page(), 2);
        view.go_to(9, 2);
        assert_eq!(view.page(), 2);
        view.go_to(4, 0);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn shrinking_collection_pulls_page_back() {
        let mut view = ListView::new(5);
        view.next(total_pages(6, 5));
        assert_eq!(view.page(), 2);

        let page = view.page_of(rows(5));
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.rows.len(), 5);

        let empty = view.page_of(Vec::<Row>::new());
        assert_eq!(empty.page, 1);
        assert!(empty.rows.is_empty());

        assert!(view.clamp_to(page.total_pages));
        assert_eq!(view.page(), 1);
        assert!(!view.clamp_to(page.total_pages));
        // growing back does not resurrect the old page
        assert_eq!(view.page_of(rows(6)).page, 1);
    }

    #[test]
    fn page_numbers_jump_directly() {
        let data = rows(23);
        let total = total_pages(data.len(), 5);
        let mut view = ListView::new(5);
        for n in 1..=total {
            view.go_to(n, total);
            let page = view.page_of(data.clone());
            assert_eq!(page.page, n);
            assert_eq!(page.rows[0].1, (n - 1) * 5);
        }
        view.go_to(0, total);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_unique_product_types() {
        let data = vec![Row("Wig", 0), Row("Bundle", 1), Row("Wig", 2), Row("Closure", 3)];
        assert_eq!(
            unique_product_types(&data),
            vec!["All", "Wig", "Bundle", "Closure"]
        );
    }
}
