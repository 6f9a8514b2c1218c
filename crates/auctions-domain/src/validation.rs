//! Write-time field constraints shared by every entity kind.

use url::Url;

/// A field constraint violated by a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("{field} allows at most {max_digits} digits, {decimal_places} after the point")]
    DecimalDigits {
        field: &'static str,
        max_digits: u32,
        decimal_places: u32,
    },
    #[error("{field} is not a valid http(s) URL")]
    InvalidUrl { field: &'static str },
    #[error("closing bid belongs to another listing")]
    ClosingBidMismatch,
    #[error("no fields to update")]
    NothingToUpdate,
}

impl ValidationError {
    /// Name of the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field }
            | Self::TooLong { field, .. }
            | Self::Negative { field }
            | Self::DecimalDigits { field, .. }
            | Self::InvalidUrl { field } => Some(field),
            Self::ClosingBidMismatch | Self::NothingToUpdate => None,
        }
    }
}

/// Reject empty or whitespace-only values for a required text field.
pub fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Length limit counted in characters, not bytes.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Required text field with a length limit.
pub fn required_text(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    required(field, value)?;
    max_chars(field, value, max)
}

/// Absolute `http`/`https` URL.
pub fn http_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::InvalidUrl { field }),
    }
}

/// Normalize an optional text field: blank becomes `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
