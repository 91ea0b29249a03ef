use thiserror::Error;

/// Errors raised while preparing a fractal generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractalError {
    /// A parameter value would make the recursion ill-defined, or falls outside the
    /// bounds checked by [`FractalParameters::validate_ui_bounds`](crate::FractalParameters::validate_ui_bounds).
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, FractalError>;
