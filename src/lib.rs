//! Customer List Client Library
//!
//! This crate provides the application logic for the Customer List GUI
//! client: it fetches customer records from a local HTTP endpoint once and
//! lets the user narrow them with a case-insensitive name/email search.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod services;
pub mod states;
pub mod views;
