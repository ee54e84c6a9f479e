//! Core domain entities.
//!
//! Entities own their validation and mutation rules and perform no I/O.
//!
//! # Entity Types
//!
//! - [`Company`] - A company record
//!
//! # Design Pattern
//!
//! Separate structs describe the inputs for each lifecycle step:
//! - [`CreateCompanyInput`] - For constructing new records
//! - [`UpdateCompanyInput`] - For partial updates

pub mod company;

pub use company::{Company, CreateCompanyInput, UpdateCompanyInput};
