//! # showcase
//!
//! Project catalog for a personal portfolio site. The [`project`] module
//! holds the embedded, ordered table of showcased projects; [`server`]
//! hands that table to the site's rendering layer over HTTP.

pub mod project;
pub mod prom_metrics;
pub mod server;
