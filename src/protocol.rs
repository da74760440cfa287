//! Free-function form of the accumulation protocol, for decoders that thread
//! an `Option<Errors>` through their loops instead of holding an accumulator.

use std::error::Error as StdError;

use crate::collection::Errors;
use crate::named::NamedError;

/// Appends `err`, creating the collection if none exists yet. The returned
/// collection replaces `existing` at the call site.
pub fn append(existing: Option<Errors>, err: impl Into<NamedError>) -> Errors {
    let mut errors = existing.unwrap_or_default();
    errors.add(err);
    errors
}

/// Like [`append`], for errors of unknown type. Non-named errors get an empty
/// name.
pub fn append_error(
    existing: Option<Errors>,
    err: Box<dyn StdError + Send + Sync + 'static>,
) -> Errors {
    let mut errors = existing.unwrap_or_default();
    errors.add_error(err);
    errors
}

/// Ends a decode pass. Absent and empty collections both mean success.
pub fn drain(errors: Option<Errors>) -> Result<(), Errors> {
    match errors {
        Some(errors) => errors.finish(),
        None => Ok(()),
    }
}
