//! Core types and trait definitions for the clubdesk record service.
//!
//! This crate is deliberately free of HTTP dependencies. The API layer and
//! the storage backend both depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod dates;
pub mod error;
pub mod event;
pub mod record;
pub mod service;
pub mod store;
pub mod story;

pub use error::{Error, Result};
