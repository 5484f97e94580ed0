//! Local state of a fetched collection

/// Items plus loading and error flags for one fetched collection.
///
/// A failed reload keeps the previous items so the table stays usable.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub loaded: bool,
    pub offline: bool,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            loaded: false,
            offline: false,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request is about to be sent
    pub fn begin(&mut self) {
        self.loading = true;
        self.offline = false;
    }

    pub fn succeed(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
        self.loading = false;
        self.loaded = true;
    }

    /// Keep the prior items, remember the error
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.loading = false;
    }

    /// No request was made because the browser is offline
    pub fn go_offline(&mut self) {
        self.offline = true;
        self.loading = false;
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_stale_items() {
        let mut state = CollectionState::new();
        state.begin();
        assert!(state.loading);
        state.succeed(vec![1, 2, 3]);
        assert!(state.loaded);

        state.begin();
        state.fail("Server error: 500");
        assert!(!state.loading);
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.error.as_deref(), Some("Server error: 500"));

        state.begin();
        state.succeed(vec![4]);
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec![4]);
    }

    #[test]
    fn offline_short_circuits() {
        let mut state: CollectionState<u8> = CollectionState::new();
        state.go_offline();
        assert!(state.offline);
        assert!(!state.loading);
        state.begin();
        assert!(!state.offline);
    }
}
