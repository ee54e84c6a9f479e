//! Domain layer containing business entities and logic.
//!
//! This module defines entities, the error taxonomy and the collaborator traits
//! the application layer depends on, independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures and their rules
//! - [`errors`] - Typed domain errors
//! - [`repositories`] - Data access trait definitions
//! - [`storage`] - Object storage trait for company logos
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Store-specific errors never cross the trait boundary

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod storage;
