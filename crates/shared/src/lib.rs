//! Activity records, impact scoring and form validation rules shared by every client surface.

pub mod domain;
pub mod error;
pub mod protocol;
pub mod scoring;
