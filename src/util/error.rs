/// Error type for gda-rs operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GdaError {
    /// Latitude or longitude is not a finite number.
    InvalidCoordinate { lat: f64, lon: f64 },
    /// The requested subdivision depth is zero.
    InvalidLevels(u32),
    /// The code is empty, or empty after stripping group separators.
    InvalidCode,
    /// A character in the code does not exist in the symbol table.
    UnknownSymbol(char),
}

impl std::fmt::Display for GdaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GdaError::InvalidCoordinate { lat, lon } => {
                write!(f, "Invalid coordinate: lat {} lon {} must be finite", lat, lon)
            }
            GdaError::InvalidLevels(levels) => {
                write!(f, "Invalid levels: {} (must be at least 1)", levels)
            }
            GdaError::InvalidCode => write!(f, "Invalid code: empty"),
            GdaError::UnknownSymbol(c) => write!(f, "Unknown symbol '{}' in code", c),
        }
    }
}

impl std::error::Error for GdaError {}
