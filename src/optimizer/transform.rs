use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::Error;


/// Function applied to the linear combination before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transform {
    /// `x ↦ x`.
    #[default]
    #[serde(alias = "None")]
    Identity,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Arcsine. `NaN` outside `[-1, 1]`.
    #[serde(alias = "arcsin")]
    Asin,
    /// Arccosine. `NaN` outside `[-1, 1]`.
    #[serde(alias = "arccos")]
    Acos,
    /// Arctangent.
    #[serde(alias = "arctan")]
    Atan,
}


impl Transform {
    /// Every transform, in menu order.
    pub const ALL: [Transform; 7] = [
        Self::Identity,
        Self::Cos,
        Self::Sin,
        Self::Tan,
        Self::Acos,
        Self::Asin,
        Self::Atan,
    ];


    /// Applies the transform.
    #[inline(always)]
    pub fn apply(&self, x: f64) -> f64 {
        match self {
            Self::Identity => x,
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
        }
    }


    /// Name used in menus and column names.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "None",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "arcsin",
            Self::Acos => "arccos",
            Self::Atan => "arctan",
        }
    }
}


impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


impl FromStr for Transform {
    type Err = Error;

    /// Parses menu names (`None`, `sin`, `arccos`, ...)
    /// as well as `identity`, `asin`, `acos` and `atan`,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let transform = match s.trim().to_ascii_lowercase().as_str() {
            "none" | "identity" | "" => Self::Identity,
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "arcsin" | "asin" => Self::Asin,
            "arccos" | "acos" => Self::Acos,
            "arctan" | "atan" => Self::Atan,
            _ => { return Err(Error::UnknownTransform(s.to_string())); },
        };
        Ok(transform)
    }
}
