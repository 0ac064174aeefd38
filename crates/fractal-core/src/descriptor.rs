use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::FractalConfig;
use crate::error::{FractalError, FractalResult};

/// Selectable figure. Selector strings are the ones the page's `<select>`
/// sends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractalKind {
    #[serde(rename = "snowflake")]
    Snowflake,
    #[serde(rename = "koch")]
    Koch,
    #[serde(rename = "kochHex")]
    KochHex,
    #[serde(rename = "generateSnowflakeWithLayers")]
    LayeredSnowflake,
    #[serde(rename = "fractalSnowflake")]
    FractalSnowflake,
    #[serde(rename = "dragon")]
    Dragon,
    #[serde(rename = "levy")]
    Levy,
    #[serde(rename = "spiky")]
    Spiky,
    #[serde(rename = "hexSticks")]
    HexSticks,
    #[serde(rename = "bush")]
    Bush,
}

impl FractalKind {
    pub const ALL: [Self; 10] = [
        Self::Snowflake,
        Self::Koch,
        Self::KochHex,
        Self::LayeredSnowflake,
        Self::FractalSnowflake,
        Self::Dragon,
        Self::Levy,
        Self::Spiky,
        Self::HexSticks,
        Self::Bush,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            Self::Snowflake => "snowflake",
            Self::Koch => "koch",
            Self::KochHex => "kochHex",
            Self::LayeredSnowflake => "generateSnowflakeWithLayers",
            Self::FractalSnowflake => "fractalSnowflake",
            Self::Dragon => "dragon",
            Self::Levy => "levy",
            Self::Spiky => "spiky",
            Self::HexSticks => "hexSticks",
            Self::Bush => "bush",
        }
    }

    /// Figures that draw from the random source on every build.
    pub fn is_randomized(&self) -> bool {
        matches!(self, Self::KochHex | Self::LayeredSnowflake | Self::FractalSnowflake | Self::Bush)
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.selector() == s)
            .ok_or_else(|| FractalError::UnknownFractal(s.to_string()))
    }
}

/// One regeneration request. Built fresh by the UI for every change and
/// never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractalDescriptor {
    pub kind: FractalKind,
    pub iterations: u32,
    pub layers: u32,
}

impl FractalDescriptor {
    pub fn new(kind: FractalKind, iterations: u32, layers: u32) -> Self {
        Self { kind, iterations, layers }
    }

    /// Parse the selector and build a descriptor.
    pub fn parse(selector: &str, iterations: u32, layers: u32) -> FractalResult<Self> {
        Ok(Self::new(selector.parse()?, iterations, layers))
    }

    /// Check iterations and layers against the config ceilings. The bush
    /// has its own lower depth ceiling since it grows `factor^depth`.
    pub fn validate(&self, config: &FractalConfig) -> FractalResult<()> {
        let max_depth = match self.kind {
            FractalKind::Bush => config.bush_max_depth,
            _ => config.max_depth,
        };
        if self.iterations > max_depth {
            return Err(FractalError::DepthTooLarge { depth: self.iterations, max: max_depth });
        }
        if self.layers > config.max_layers {
            return Err(FractalError::TooManyLayers {
                layers: self.layers,
                max: config.max_layers,
            });
        }
        Ok(())
    }
}
