//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod client;
pub mod contact;
pub mod image;
pub mod project;
pub mod service;
pub mod testimonial;
pub mod user;
