use std::error::Error as StdError;
use std::fmt;

use crate::named::NamedError;

/// Every field-level failure recorded during one decode pass.
///
/// `Errors` is the accumulator a decoder holds from the start of a pass. It
/// only grows, and is consumed at the end by [`Errors::finish`], which yields
/// `Ok(())` when nothing was recorded.
///
/// The `Display` form lists every failure as a sorted bullet line:
///
/// ```text
/// 2 error(s) decoding:
/// 	* 'a': bad
/// 	* 'b': bad
/// ```
///
/// Lines are sorted by their rendered text so the message does not depend on
/// the order failures were detected in.
#[derive(Debug, Default)]
pub struct Errors {
    errors: Vec<NamedError>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, err: impl Into<NamedError>) {
        let err = err.into();
        tracing::trace!(name = err.name(), count = self.errors.len() + 1, "recorded decode error");
        self.errors.push(err);
    }

    /// Records an arbitrary error. A boxed [`NamedError`] keeps its name; any
    /// other error is recorded with an empty name.
    pub fn add_error(&mut self, err: Box<dyn StdError + Send + Sync + 'static>) {
        match err.downcast::<NamedError>() {
            Ok(named) => self.add(*named),
            Err(other) => self.add(NamedError::unnamed(other)),
        }
    }

    /// Moves every error of `other` to the end of this collection.
    pub fn merge(&mut self, other: Errors) {
        for err in other {
            self.add(err);
        }
    }

    /// Prefixes every recorded name with `parent`, see [`NamedError::nest`].
    pub fn nest(self, parent: &str) -> Self {
        self.errors.into_iter().map(|e| e.nest(parent)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedError> {
        self.errors.iter()
    }

    /// The recorded errors in the order they were added.
    pub fn wrapped_errors(&self) -> Vec<&NamedError> {
        self.errors.iter().collect()
    }

    pub fn error_or_none(&self) -> Option<&Self> {
        if self.is_empty() {
            return None;
        }
        Some(self)
    }

    pub fn finish(self) -> Result<(), Self> {
        if self.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = self.errors.len(), "decode pass finished with errors");
        Err(self)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut points: Vec<String> = self.errors.iter().map(|e| format!("* {e}")).collect();
        points.sort();
        write!(
            f,
            "{} error(s) decoding:\n\t{}",
            self.errors.len(),
            points.join("\n\t")
        )
    }
}

impl StdError for Errors {}

impl FromIterator<NamedError> for Errors {
    fn from_iter<I: IntoIterator<Item = NamedError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<NamedError> for Errors {
    fn extend<I: IntoIterator<Item = NamedError>>(&mut self, iter: I) {
        for err in iter {
            self.add(err);
        }
    }
}

impl IntoIterator for Errors {
    type Item = NamedError;
    type IntoIter = std::vec::IntoIter<NamedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a NamedError;
    type IntoIter = std::slice::Iter<'a, NamedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
