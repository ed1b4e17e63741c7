#![no_main]

use std::num::NonZeroU8;

use libfuzzer_sys::fuzz_target;
use picture_padding_fuzz::{pad_and_check, StructuredImage};

fuzz_target!(|input: (StructuredImage, NonZeroU8, NonZeroU8, [u8; 4])| {
    let (image, ratio_width, ratio_height, fill) = input;
    pad_and_check(&image, (ratio_width, ratio_height), fill);
});
