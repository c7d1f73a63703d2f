//! HTTP API: server, routing, form binding and HTML views.

pub mod app;
pub mod config;
