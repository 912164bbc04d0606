use thiserror::Error;

/// Reasons the precision arithmetic refuses to produce a value or layout.
///
/// Every variant corresponds to a zero (or non-finite) denominator somewhere in
/// the remapping. Callers treat these as "skip this move" rather than as hard
/// failures.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("control bounds have zero width")]
    ZeroWidth,
    #[error("control bounds have zero height")]
    ZeroHeight,
    #[error("value range is empty (minimum {minimum}, maximum {maximum})")]
    EmptyRange { minimum: f32, maximum: f32 },
    #[error("non-finite {0} in precision arithmetic")]
    NonFinite(&'static str),
}

/// Result alias for the precision arithmetic.
pub type GeometryResult<T> = Result<T, GeometryError>;

pub(crate) fn finite(value: f32, what: &'static str) -> GeometryResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite(what))
    }
}
