//! Console dashboard for a Valorant esports statistics API.
//!
//! [`ApiClient`] issues one GET per resource kind and unwraps the
//! `{success, data}` envelope. [`Dashboard`] wraps it with a best-effort
//! policy (failures become empty results plus a logged warning) and gathers
//! a [`DashboardSnapshot`], which the [`render`] functions turn into text.

pub use client::ApiClient;
pub use config::Config;
pub use dashboard::{Dashboard, DashboardOptions, DashboardSnapshot};
pub use error::{DashboardError, Result};
pub use model::*;

pub(crate) mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod raw;
pub mod render;
