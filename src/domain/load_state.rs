//! LoadState - Lifecycle of the Customer Fetch

use std::sync::Arc;

use crate::domain::customer::Customer;

/// Lifecycle state of one customer load
///
/// Transitions run `Initial -> Loading -> Ready | Failed` exactly once per
/// view instance. Query changes never move the state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// View created, no request issued yet
    #[default]
    Initial,
    /// Request in flight
    Loading,
    /// Full decoded collection in load order
    Ready(Vec<Customer>),
    /// Transport or decode failure description
    Failed(Arc<str>),
}

impl LoadState {
    /// Whether the loading indicator should be shown instead of a list
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Initial | Self::Loading)
    }

    /// Check if the collection is available
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Loaded customers, empty unless `Ready`
    pub fn customers(&self) -> &[Customer] {
        match self {
            Self::Ready(customers) => customers,
            _ => &[],
        }
    }
}
