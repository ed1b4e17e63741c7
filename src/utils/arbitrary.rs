//! Helper functions for using `quickcheck`'s `Arbitrary` trait

use quickcheck::Arbitrary;

/// A positive ratio component; kept below 16 so that extreme ratios
/// do not blow up the canvas size in property tests
#[must_use]
pub fn ratio_component(gen: &mut quickcheck::Gen) -> u32 {
    u32::from(u8::arbitrary(gen) % 15) + 1
}

#[must_use]
pub fn channel(gen: &mut quickcheck::Gen) -> u8 {
    u8::arbitrary(gen)
}
