//! Object storage for company logos.

pub mod s3_storage;

pub use s3_storage::S3Storage;
