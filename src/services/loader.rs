//! Data Loader
//!
//! Runs the single customer fetch and folds its outcome into a terminal
//! [`LoadState`]. Failures stop here: they are logged and never returned as
//! errors, retried, or surfaced past the state.

use crate::domain::LoadState;
use crate::services::CustomerSource;

/// One-shot loader over a customer source
#[derive(Debug, Clone)]
pub struct DataLoader<S> {
    source: S,
}

impl<S: CustomerSource> DataLoader<S> {
    /// Create a loader for the given source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the collection and return `Ready` or `Failed`
    pub async fn load(&self) -> LoadState {
        match self.source.fetch_customers().await {
            Ok(customers) => {
                tracing::info!(count = customers.len(), "Customers loaded");
                LoadState::Ready(customers)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching customers");
                LoadState::Failed(e.to_string().into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Customer;
    use crate::error::{Error, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory source returning a fixed outcome
    struct StubSource {
        status: Option<u16>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok() -> Self {
            Self {
                status: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                status: Some(status),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl CustomerSource for StubSource {
        async fn fetch_customers(&self) -> Result<Vec<Customer>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.status {
                Some(status) => Err(Error::Status { status }),
                None => Ok(vec![
                    Customer::new(1, "Alice Smith", "alice@x.com"),
                    Customer::new(2, "Bob Jones", "bob@y.com"),
                ]),
            }
        }
    }

    #[tokio::test]
    async fn test_load_success_is_ready() {
        let loader = DataLoader::new(StubSource::ok());

        let state = loader.load().await;

        assert!(state.is_ready());
        assert_eq!(state.customers().len(), 2);
        assert_eq!(state.customers()[0].name, "Alice Smith");
    }

    #[tokio::test]
    async fn test_load_failure_is_failed_without_retry() {
        let loader = DataLoader::new(StubSource::failing(500));

        let state = loader.load().await;

        assert_eq!(state, LoadState::Failed("Unexpected HTTP status 500".into()));
        assert_eq!(loader.source.calls.load(Ordering::SeqCst), 1);
    }
}
