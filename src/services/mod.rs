//! Service Layer
//!
//! The service layer owns everything that talks to the outside world: the
//! HTTP client for the records endpoint, the one-shot loader built on it, and
//! the tokio bridge that lets GPUI tasks await reqwest futures.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      DataLoader                              │
//! │  ┌──────────────────┐            ┌──────────────────────┐   │
//! │  │  CustomerClient  │ ─────────▶ │  LoadState (Ready |  │   │
//! │  │  (reqwest GET)   │            │  Failed)             │   │
//! │  └──────────────────┘            └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼ run_in_tokio
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      State Layer                             │
//! │                 (CustomerListState)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod customer_api;
mod loader;
mod runtime;

pub use customer_api::*;
pub use loader::*;
pub use runtime::*;
