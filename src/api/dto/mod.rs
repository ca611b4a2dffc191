//! Data Transfer Objects for REST request/response serialization.

pub mod enquiry_dto;

pub use enquiry_dto::*;
