use std::fmt::Display;

use crate::{arg_parse_err::ArgParseErr, utils::fraction::Fraction};

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

/// Desired width:height ratio of the padded canvas.
/// Both components are positive; only their quotient matters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    pub fn new(width: u32, height: u32) -> Result<Self, ArgParseErr> {
        if width == 0 || height == 0 {
            return Err(ArgParseErr::with_msg(format!(
                "ratio components must be positive, got {width}:{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_fraction(&self) -> Fraction {
        Fraction::new(self.width, self.height)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self {
            width: 2,
            height: 1,
        }
    }
}

impl Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Parses the `W H` pair passed on the command line
impl TryFrom<&[i64]> for AspectRatio {
    type Error = ArgParseErr;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let [width, height] = values else {
            return Err(ArgParseErr::with_msg(format!(
                "expected 2 values (width height), got {}",
                values.len()
            )));
        };
        let component = |v: i64| {
            u32::try_from(v).map_err(|_| {
                ArgParseErr::with_msg(format!(
                    "ratio components must be positive integers, got {width}:{height}"
                ))
            })
        };
        Self::new(component(*width)?, component(*height)?)
    }
}

#[cfg(test)]
impl Arbitrary for AspectRatio {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            width: arbitrary::ratio_component(g),
            height: arbitrary::ratio_component(g),
        }
    }
}
