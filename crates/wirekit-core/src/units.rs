//! Measurement units for floorplan documents.
//!
//! Floorplans are captured in one of five drawing units; routing itself is
//! unit-agnostic, but consumers use the millimeter factor together with the
//! document scale to recover real-world wire lengths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing units declared by a floorplan document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Millimeters
    Mm,
    /// Centimeters
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Feet
    Ft,
}

impl Default for Units {
    fn default() -> Self {
        Self::Mm
    }
}

impl Units {
    /// Conversion factor from one drawing unit to millimeters.
    pub fn to_millimeters(&self) -> f64 {
        match self {
            Self::Mm => 1.0,
            Self::Cm => 10.0,
            Self::M => 1000.0,
            Self::In => 25.4,
            Self::Ft => 304.8,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mm => write!(f, "mm"),
            Self::Cm => write!(f, "cm"),
            Self::M => write!(f, "m"),
            Self::In => write!(f, "in"),
            Self::Ft => write!(f, "ft"),
        }
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mm" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "in" | "inch" => Ok(Self::In),
            "ft" | "feet" => Ok(Self::Ft),
            _ => Err(format!("Unknown units: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeter_factors() {
        assert_eq!(Units::Mm.to_millimeters(), 1.0);
        assert_eq!(Units::M.to_millimeters(), 1000.0);
        assert_eq!(Units::In.to_millimeters(), 25.4);
        assert_eq!(Units::Ft.to_millimeters(), 304.8);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("mm".parse::<Units>().unwrap(), Units::Mm);
        assert_eq!("FT".parse::<Units>().unwrap(), Units::Ft);
        assert_eq!(Units::Cm.to_string(), "cm");
        assert!("furlong".parse::<Units>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Units::In).unwrap(), "\"in\"");
        assert_eq!(
            serde_json::from_str::<Units>("\"ft\"").unwrap(),
            Units::Ft
        );
    }
}
