//! State Management Layer
//!
//! Application state owned by views and the global store.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! View opens → begin_load → spawn DataLoader → LoadState → finish_load → notify → UI Refresh
//! Keystroke  → set_query  → notify → visible_customers recomputed on render
//! ```

mod app;
mod customers;
mod i18n;

pub use app::*;
pub use customers::*;
pub use i18n::*;
