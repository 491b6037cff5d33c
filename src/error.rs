use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a color, palette or gradient precondition fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid HEX code: {hex}")]
    InvalidHexCode { hex: String },

    #[error("at least {required} values are needed, got {got}")]
    TooFewValues { required: usize, got: usize },

    #[error("{what} requires at least {required} colors, got {got}")]
    TooFewColors { what: &'static str, required: usize, got: usize },

    #[error("invalid gradient values: {reason}")]
    InvalidGradientValues { reason: &'static str },

    #[error("the number of colors ({colors}) and values ({values}) must be the same")]
    LengthMismatch { colors: usize, values: usize },

    #[error("lightness must be monotonically increasing or decreasing")]
    NonMonotonicLightness,

    #[error("lightness range is degenerate (first {first}, last {last})")]
    DegenerateLightness { first: f64, last: f64 },

    #[error("max_value ({max}) must be greater than min_value ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("unknown color vision deficiency {0:?}: choose 'd' (deuteranomaly), \
             'p' (protanomaly) or 't' (tritanomaly)")]
    UnknownCvdType(String),

    #[error("unknown figure size {0:?}")]
    UnknownFigureSize(String),

    #[error("colormap {name:?} is already registered")]
    AlreadyRegistered { name: String },
}
