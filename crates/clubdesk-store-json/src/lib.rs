//! Flat-file JSON backend for the clubdesk record store.
//!
//! One pretty-printed JSON document per record kind, named `<kind>.json`
//! under a data directory. Reads tolerate a missing or corrupt document by
//! degrading to an empty collection; writes go through a temp-file rename so
//! concurrent readers never observe a partial document.

mod store;

pub use store::JsonStore;
