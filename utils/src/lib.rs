//! Free helper functions shared by every part of the scaffold: price
//! formatting, contact classification, short human-friendly IDs, and
//! best-effort media file handling.

use thiserror::Error;

pub mod contact;
pub mod id;
pub mod media;
pub mod price;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{field}: invalid phone number or email: {value}")]
    Validation {
        field: &'static str,
        value: String,
    },
    #[error("max media file size is 10MB, got {size} bytes")]
    MaxMediaFileSize { size: u64 },
}
