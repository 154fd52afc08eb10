//! The validation contract shared by model values.

use crate::error::AppError;
use crate::model::MetaData;

/// A value that knows whether it is empty and whether its stored form is
/// well-formed.
///
/// Validation runs against stored data and never panics: a missing required
/// value yields [`AppError::Required`], a malformed one yields the
/// implementor's [`FieldValue::format_error`].
pub trait FieldValue {
    fn is_empty(&self) -> bool;

    fn is_valid(&self) -> bool;

    /// Error reported when [`FieldValue::is_valid`] is false.
    fn format_error(&self) -> AppError;

    fn required(&self, meta: &MetaData) -> bool {
        meta.bool_attrib("required")
    }

    fn validate(&self, meta: &MetaData) -> Result<(), AppError> {
        if self.required(meta) && self.is_empty() {
            return Err(AppError::required(meta));
        }
        if !self.is_valid() {
            return Err(self.format_error());
        }
        Ok(())
    }
}
