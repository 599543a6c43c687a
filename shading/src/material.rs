//! Material

use std::fmt;
use thiserror::Error;

// Light transport mode enumeration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Indicates incident ray that intersected a point started at the camera.
    Radiance,

    /// Indicates incident ray that intersected a point started at the light
    /// source.
    Importance,
}

impl fmt::Display for TransportMode {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radiance => write!(f, "Radiance"),
            Self::Importance => write!(f, "Importance"),
        }
    }
}

/// Errors raised while building materials from parameters.
#[derive(Debug, Error, PartialEq)]
pub enum MaterialError {
    #[error("parameter '{param}' references undefined texture '{texture}'")]
    MissingTexture { param: String, texture: String },

    #[error("unknown material type '{0}'")]
    UnknownMaterial(String),

    #[error("invalid value for parameter '{param}': {reason}")]
    InvalidParameter { param: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = MaterialError::MissingTexture {
            param: "Kd".to_string(),
            texture: "wood".to_string(),
        };
        assert_eq!(e.to_string(), "parameter 'Kd' references undefined texture 'wood'");
        assert_eq!(
            MaterialError::UnknownMaterial("velvet".to_string()).to_string(),
            "unknown material type 'velvet'"
        );
    }
}
