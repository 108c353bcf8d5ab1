//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::GlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "customers" namespace
pub fn i18n_customers(cx: &App, key: &str) -> SharedString {
    let locale = GlobalStore::read(cx).locale();
    t!(format!("customers.{key}"), locale = locale).into()
}

/// Get translated "visible of total" counter for the list header
pub fn i18n_customer_count(cx: &App, visible: usize, total: usize) -> SharedString {
    let locale = GlobalStore::read(cx).locale();
    t!(
        "customers.count",
        visible = visible,
        total = total,
        locale = locale
    )
    .into()
}
