//! Request handlers, one module per resource.

pub mod client;
pub mod contact;
pub mod intake;
pub mod project;
pub mod service;
pub mod testimonial;
