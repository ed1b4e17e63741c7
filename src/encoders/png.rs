use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::arg_parsers::Quality;
use crate::plan::Modifiers;
use crate::{error::PadError, pad_try};

/// Writes `pixels` as an RGBA PNG.
/// The alpha channel is always kept, even for fully opaque results.
pub fn encode<W: Write>(
    pixels: &RgbaImage,
    icc: Option<&[u8]>,
    writer: &mut W,
    modifiers: &Modifiers,
) -> Result<(), PadError> {
    let (compression, filter) = quality_to_compression_parameters(modifiers.quality);
    let mut encoder = PngEncoder::new_with_quality(writer, compression, filter);
    if let Some(icc) = icc {
        if !modifiers.strip {
            let _ = encoder.set_icc_profile(icc.to_vec()); // ignore UnsupportedError
        }
    }
    pad_try!(
        Output,
        encoder.write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
    );
    Ok(())
}

// for documentation on conversion of quality to encoding parameters see
// https://www.imagemagick.org/script/command-line-options.php#quality
fn quality_to_compression_parameters(quality: Option<Quality>) -> (CompressionType, FilterType) {
    let Some(quality) = quality else {
        // default is 75 as per https://legacy.imagemagick.org/script/command-line-options.php#quality
        return (CompressionType::Level(7), FilterType::Adaptive);
    };

    let compression = match quality.compression_level() {
        n @ 0..=9 => CompressionType::Level(n as u8),
        10.. => CompressionType::Level(9), // in imagemagick large values are treated as 9
    };
    let filter = match quality.filter_selector() {
        0 => FilterType::NoFilter,
        1 => FilterType::Sub,
        2 => FilterType::Up,
        3 => FilterType::Avg,
        4 => FilterType::Paeth,
        // 7 is documented as MNG-only, in practice maps to 5 or 6
        5..=7 => FilterType::Adaptive,
        // filters 8 and 9 override compression level selection
        8 => return (CompressionType::Fast, FilterType::Adaptive),
        // our Fast mode needs filtering to deliver reasonable compression,
        // so use the fastest filter instead of none
        _ => return (CompressionType::Fast, FilterType::Up),
    };

    (compression, filter)
}
