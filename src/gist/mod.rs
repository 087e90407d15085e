//! GitHub gist API client module
//!
//! This module provides the gist client, selector resolution and the
//! delete command workflow.

mod api;
mod client;
pub mod commands;
mod credentials;
mod host;
pub mod models;
pub mod resolver;

pub use client::{build_http_client, GistClient};
pub use commands::{report_error, run_delete, ConfigFactory, DeleteOptions, HttpClientFactory};
pub use credentials::TokenResolver;
pub use host::HostResolver;
pub use models::{Gist, GistFile};
pub use resolver::{fuzzy_ago, gist_label, resolve_selector};
