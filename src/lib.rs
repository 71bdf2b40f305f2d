//! Filterable, paginated upload history table (Leptos CSR).

pub mod api;
pub mod app;
pub mod autocomplete;
pub mod components;
pub mod config;
pub mod download;
pub mod filters;
pub mod history;
pub mod i18n;
pub mod logging;
pub mod pages;
pub mod pagination;
pub mod timers;
