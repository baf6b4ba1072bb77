use std::fmt;

/// The main error type for the modhalftone crate
#[derive(Debug)]
pub enum ModHalftoneError {
    /// Error occurred while reading or decoding the input image
    ImageDecode(image::ImageError),

    /// Error occurred while encoding or writing the output image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// The process config is not valid JSON
    Json(json::Error),

    /// The process config parsed but holds unusable values
    Config(String),

    /// A provided noise field holds a value outside [0, 254]
    InvalidNoise { index: usize, value: u8 },
}

impl fmt::Display for ModHalftoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModHalftoneError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            ModHalftoneError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            ModHalftoneError::Io(e) => write!(f, "I/O error: {}", e),
            ModHalftoneError::Json(e) => write!(f, "Config parse error: {}", e),
            ModHalftoneError::Config(msg) => write!(f, "Config error: {}", msg),
            ModHalftoneError::InvalidNoise { index, value } => write!(
                f,
                "Noise value {} at index {} is outside [0, 254]",
                value, index
            ),
        }
    }
}

impl std::error::Error for ModHalftoneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModHalftoneError::ImageDecode(e) | ModHalftoneError::ImageEncode(e) => Some(e),
            ModHalftoneError::Io(e) => Some(e),
            ModHalftoneError::Json(e) => Some(e),
            ModHalftoneError::Config(_) | ModHalftoneError::InvalidNoise { .. } => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for ModHalftoneError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between decode and encode errors based on the error kind
        match &err {
            image::ImageError::Encoding(_) => ModHalftoneError::ImageEncode(err),
            _ => ModHalftoneError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for ModHalftoneError {
    fn from(err: std::io::Error) -> Self {
        ModHalftoneError::Io(err)
    }
}

impl From<json::Error> for ModHalftoneError {
    fn from(err: json::Error) -> Self {
        ModHalftoneError::Json(err)
    }
}

// Convenience type alias for Results using ModHalftoneError
pub type Result<T = ()> = std::result::Result<T, ModHalftoneError>;
