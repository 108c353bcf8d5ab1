//! Customer List State
//!
//! Holds the load lifecycle and the search query for one list view. The
//! visible rows are always recomputed from `(LoadState, query)`; nothing
//! derived is cached between query changes.

use crate::domain::{Customer, LoadState};

/// Customers whose name or email contains `query`, case-insensitively
///
/// Load order is preserved. An empty query keeps every customer.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    if query.is_empty() {
        customers.iter().collect()
    } else {
        customers.iter().filter(|c| c.matches(query)).collect()
    }
}

/// State for a single customer list view
#[derive(Debug, Clone, Default)]
pub struct CustomerListState {
    /// Fetch lifecycle
    load_state: LoadState,
    /// Search text as typed
    query: String,
}

impl CustomerListState {
    /// Create a new state in `Initial`
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    /// Get the current loading state
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// Whether the loading indicator replaces the list
    pub fn is_loading(&self) -> bool {
        self.load_state.is_loading()
    }

    /// Customers matching the current query
    ///
    /// Empty while loading and after a failed load.
    pub fn visible_customers(&self) -> Vec<&Customer> {
        match &self.load_state {
            LoadState::Ready(customers) => filter_customers(customers, &self.query),
            _ => Vec::new(),
        }
    }

    /// Rows handed to the renderer
    pub fn items(&self) -> Vec<Customer> {
        self.visible_customers().into_iter().cloned().collect()
    }

    /// Number of loaded customers, ignoring the query
    pub fn total_count(&self) -> usize {
        self.load_state.customers().len()
    }

    // ==================== Setters ====================

    /// Move `Initial -> Loading`
    ///
    /// Returns `false` when a load was already started, so a view never has
    /// two requests in flight.
    pub fn begin_load(&mut self) -> bool {
        if matches!(self.load_state, LoadState::Initial) {
            self.load_state = LoadState::Loading;
            true
        } else {
            tracing::warn!("Customer load already started, ignoring");
            false
        }
    }

    /// Store the terminal outcome of the load
    pub fn finish_load(&mut self, outcome: LoadState) {
        self.load_state = outcome;
    }

    /// Replace the search query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Customer> {
        vec![
            Customer::new(1, "Alice Smith", "alice@x.com"),
            Customer::new(2, "Bob Jones", "bob@y.com"),
        ]
    }

    fn ready_state() -> CustomerListState {
        let mut state = CustomerListState::new();
        assert!(state.begin_load());
        state.finish_load(LoadState::Ready(sample()));
        state
    }

    fn visible_ids(state: &CustomerListState) -> Vec<i64> {
        state.visible_customers().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_query_matches_name() {
        let mut state = ready_state();
        state.set_query("alice");
        assert_eq!(visible_ids(&state), vec![1]);
    }

    #[test]
    fn test_query_matches_email() {
        let mut state = ready_state();
        state.set_query("y.com");
        assert_eq!(visible_ids(&state), vec![2]);
    }

    #[test]
    fn test_empty_query_keeps_all_in_order() {
        let mut state = ready_state();
        state.set_query("");
        assert_eq!(visible_ids(&state), vec![1, 2]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let mut state = ready_state();
        state.set_query("JONES");
        assert_eq!(visible_ids(&state), vec![2]);
    }

    #[test]
    fn test_query_without_match_is_empty() {
        let mut state = ready_state();
        state.set_query("carol");
        assert!(state.visible_customers().is_empty());
        assert_eq!(state.total_count(), 2);
    }

    #[test]
    fn test_set_query_is_idempotent() {
        let mut state = ready_state();
        state.set_query("o");
        let first = state.items();
        state.set_query("o");
        assert_eq!(state.items(), first);
    }

    #[test]
    fn test_filter_preserves_load_order() {
        let customers = vec![
            Customer::new(3, "Zed", "zed@a.com"),
            Customer::new(1, "Amy", "amy@a.com"),
            Customer::new(2, "Max", "max@b.com"),
        ];
        let ids: Vec<_> = filter_customers(&customers, "A.COM")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_filter_matches_every_substring_of_fields() {
        let customers = sample();
        for customer in &customers {
            for field in [&customer.name, &customer.email] {
                for start in 0..field.len() {
                    let needle = &field[start..];
                    let hits = filter_customers(&customers, needle);
                    assert!(hits.iter().any(|c| c.id == customer.id), "{needle:?}");
                }
            }
        }
    }

    #[test]
    fn test_loading_shows_indicator_and_no_rows() {
        let mut state = CustomerListState::new();
        assert!(state.is_loading());
        assert!(state.begin_load());
        assert!(state.is_loading());
        assert!(state.visible_customers().is_empty());
    }

    #[test]
    fn test_query_change_does_not_reenter_loading() {
        let mut state = ready_state();
        state.set_query("bob");
        assert!(state.load_state().is_ready());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_failed_yields_empty_list_without_indicator() {
        let mut state = CustomerListState::new();
        state.begin_load();
        state.finish_load(LoadState::Failed("connection refused".into()));
        state.set_query("");
        assert!(!state.is_loading());
        assert!(state.visible_customers().is_empty());
    }

    #[test]
    fn test_begin_load_only_once() {
        let mut state = CustomerListState::new();
        assert!(state.begin_load());
        assert!(!state.begin_load());
        state.finish_load(LoadState::Ready(sample()));
        assert!(!state.begin_load());
        assert!(state.load_state().is_ready());
    }
}
