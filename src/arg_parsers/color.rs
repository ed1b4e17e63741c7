use image::Rgba;

use crate::arg_parse_err::ArgParseErr;

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

/// Color of the added margins. Defaults to fully transparent black.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FillColor {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<FillColor> for Rgba<u8> {
    fn from(c: FillColor) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

/// Parses the `R G B A` quadruple passed on the command line
impl TryFrom<&[i64]> for FillColor {
    type Error = ArgParseErr;

    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let [r, g, b, a] = values else {
            return Err(ArgParseErr::with_msg(format!(
                "expected 4 values (R G B A), got {}",
                values.len()
            )));
        };
        let channel = |name: &str, v: i64| {
            u8::try_from(v).map_err(|_| {
                ArgParseErr::with_msg(format!(
                    "{name} channel must be between 0 and 255, got {v}"
                ))
            })
        };
        Ok(Self::new(
            channel("red", *r)?,
            channel("green", *g)?,
            channel("blue", *b)?,
            channel("alpha", *a)?,
        ))
    }
}

#[cfg(test)]
impl Arbitrary for FillColor {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self::new(
            arbitrary::channel(g),
            arbitrary::channel(g),
            arbitrary::channel(g),
            arbitrary::channel(g),
        )
    }
}
