//! View Components
//!
//! UI components for the Customer List application.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Customer List                               │
//! │ [ Search by name or email            ]      │
//! │ 2 of 2 customers                            │
//! ├─────────────────────────────────────────────┤
//! │ Alice Smith - alice@x.com                   │
//! │ Bob Jones - bob@y.com                       │
//! │ ...                                         │
//! └─────────────────────────────────────────────┘
//! ```

mod customer_list;

pub use customer_list::*;
