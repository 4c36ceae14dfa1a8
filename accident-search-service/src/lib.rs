//! accident-search-service: answers questions about workplace accidents via
//! an LLM provider, optionally grounded on counts from the OSHA dataset.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod startup;
