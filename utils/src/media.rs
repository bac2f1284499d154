use std::{fs, path::Path};

use crate::Error;

pub const MAX_MEDIA_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Records carrying named file-path fields ("image", "attachment", ...).
pub trait MediaFields {
    fn media_path(&self, field: &str) -> Option<&Path>;
}

/// Best-effort removal of the file referenced by `field` on `instance`.
/// Returns `true` only when a file existed and was removed; unknown or
/// empty fields, missing paths, and filesystem failures all yield `false`.
pub fn delete_file<T: MediaFields>(instance: &T, field: &str) -> bool {
    match instance.media_path(field) {
        Some(path) => path.is_file() && fs::remove_file(path).is_ok(),
        None => false,
    }
}

pub fn max_media_file_size_validator(size: &u64) -> Result<(), Error> {
    if *size > MAX_MEDIA_FILE_SIZE {
        return Err(Error::MaxMediaFileSize { size: *size });
    }
    Ok(())
}
