//! Coordinate value object and permissive degree parsing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses a coordinate pair from decimal-degree strings.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` when either value is not numeric.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, DomainError> {
        Ok(Self {
            latitude: parse_degrees("latitude", latitude)?,
            longitude: parse_degrees("longitude", longitude)?,
        })
    }
}

/// Parses one decimal-degree value, trimming surrounding whitespace.
///
/// # Errors
///
/// `InvalidCoordinate` naming the field when the text is not a number.
pub fn parse_degrees(field: &str, raw: &str) -> Result<f64, DomainError> {
    raw.trim().parse::<f64>().map_err(|_| {
        DomainError::new(ErrorCode::InvalidCoordinate, "Coordinate is not a number")
            .with_detail("field", field)
            .with_detail("value", raw)
    })
}
