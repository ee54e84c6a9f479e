//! Data Transfer Objects for API requests and responses.
//!
//! DTOs only shape JSON. Field rules live on the entity, so request types
//! carry no validation of their own.

pub mod company;
pub mod health;
pub mod logo;
