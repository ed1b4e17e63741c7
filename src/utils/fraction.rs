use std::cmp::Ordering;

/// A non-negative rational number, compared without floating-point arithmetic.
#[derive(Debug, Copy, Clone)]
pub struct Fraction {
    numerator: u32,
    denominator: u32,
}

impl Fraction {
    /// `denominator` must be non-zero; callers validate this before construction.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn reciprocal(&self) -> Self {
        Fraction {
            numerator: self.denominator,
            denominator: self.numerator,
        }
    }

    /// Computes `floor(value * self)` exactly.
    pub fn scale_floor(&self, value: u32) -> u64 {
        u64::from(value) * u64::from(self.numerator) / u64::from(self.denominator)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.cross_multiply(other);
        a == b
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.cross_multiply(other);
        a.cmp(&b)
    }
}

impl Fraction {
    /// Cross-multiplication to compare fractions without using floating-point arithmetic
    /// `a/b < c/d` is equivalent to `a * d < c * b`
    fn cross_multiply(&self, other: &Self) -> (u64, u64) {
        (
            u64::from(self.numerator) * u64::from(other.denominator),
            u64::from(other.numerator) * u64::from(self.denominator),
        )
    }

    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_equality() {
        let frac1 = Fraction::new(1, 2);
        let frac2 = Fraction::new(2, 4);
        assert_eq!(frac1, frac2);

        let frac3 = Fraction::new(3, 4);
        assert_ne!(frac1, frac3);
    }

    #[test]
    fn test_fraction_comparison() {
        let frac1 = Fraction::new(1, 2);
        let frac2 = Fraction::new(3, 4);
        assert!(frac1 < frac2);
        assert!(frac2 > frac1);

        let frac3 = Fraction::new(2, 3);
        assert!(frac1 < frac3);
        assert!(frac3 < frac2);
    }

    #[test]
    fn test_aspect_ratios_of_image_dimensions() {
        // 100x200 is narrower than 2:1, 300x100 is wider, 200x100 is exactly 2:1
        let target = Fraction::new(2, 1);
        assert!(Fraction::new(100, 200) < target);
        assert!(Fraction::new(300, 100) > target);
        assert_eq!(Fraction::new(200, 100).cmp(&target), Ordering::Equal);
    }

    #[test]
    fn test_scale_floor() {
        assert_eq!(Fraction::new(2, 1).scale_floor(200), 400);
        assert_eq!(Fraction::new(1, 2).scale_floor(300), 150);
        // 7 * 2/3 = 4.67
        assert_eq!(Fraction::new(2, 3).scale_floor(7), 4);
        assert_eq!(Fraction::new(3, 2).reciprocal().scale_floor(7), 4);
        // does not overflow for the largest inputs
        assert_eq!(
            Fraction::new(u32::MAX, 1).scale_floor(u32::MAX),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_to_float() {
        assert_eq!(Fraction::new(3, 4).to_float(), 0.75);
    }
}
