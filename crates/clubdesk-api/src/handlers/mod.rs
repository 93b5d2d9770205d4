//! Route handlers, one module per resource.

pub mod contact;
pub mod events;
pub mod session;
pub mod stories;
