use crate::arg_parse_err::ArgParseErr;

/// Imagemagick-style `-quality` value for PNG output.
/// The tens digit selects the zlib level and the units digit the row filter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quality(u64);

impl Quality {
    pub fn compression_level(&self) -> u64 {
        self.0 / 10
    }

    pub fn filter_selector(&self) -> u64 {
        self.0 % 10
    }
}

impl TryFrom<f64> for Quality {
    type Error = ArgParseErr;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() || value.is_sign_negative() {
            return Err(ArgParseErr::with_msg("PNG quality cannot be negative"));
        }
        // fractional quality is truncated, like imagemagick does
        Ok(Self(value as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        let q = Quality::try_from(75.0).unwrap();
        assert_eq!(q.compression_level(), 7);
        assert_eq!(q.filter_selector(), 5);
    }

    #[test]
    fn test_truncates_fraction() {
        assert_eq!(Quality::try_from(11.9).unwrap(), Quality(11));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(Quality::try_from(-1.0).is_err());
        assert!(Quality::try_from(f64::NAN).is_err());
    }
}
