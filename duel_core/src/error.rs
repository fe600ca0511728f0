use core::fmt;

/// Reasons a [`GameConfig`](crate::config::GameConfig) cannot be used to build a game
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A size or speed that has to be strictly positive was not
    NonPositive { field: &'static str, value: f64 },
    /// A value that has to be a real number was NaN or infinite
    NotFinite { field: &'static str },
    /// A counter threshold was zero
    ZeroThreshold { field: &'static str },
    /// The field is too narrow to hold a single tank
    ScreenTooNarrow { screen_width: f64, tank_width: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            Self::NotFinite { field } => write!(f, "{field} must be a finite number"),
            Self::ZeroThreshold { field } => write!(f, "{field} must be at least 1"),
            Self::ScreenTooNarrow {
                screen_width,
                tank_width,
            } => write!(
                f,
                "screen width {screen_width} cannot fit a tank of width {tank_width}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
