//! Domain types and helpers shared by the database and API layers.
//!
//! This crate has no internal dependencies so it can be used from
//! repositories, handlers, and any future CLI tooling alike.

pub mod contact_status;
pub mod error;
pub mod pagination;
pub mod slug;
pub mod types;
