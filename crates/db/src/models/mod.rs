//! Row models and form DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A raw `Deserialize` form struct holding fields exactly as submitted
//! - A typed, `Validate`-checked input struct the repositories write from

use fyyur_core::error::CoreError;
use validator::Validate;

pub mod artist;
pub mod show;
pub mod venue;

/// Run `validator` checks, reporting failures as a domain validation error.
pub(crate) fn validated<T: Validate>(input: T) -> Result<T, CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    Ok(input)
}
