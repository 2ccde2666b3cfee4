//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod contact_repo;
pub mod project_repo;
pub mod service_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use client_repo::ClientRepo;
pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use service_repo::ServiceRepo;
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
