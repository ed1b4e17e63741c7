use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::{error::PadError, image::Image, pad_err, pad_try};

/// Decodes `file`, guessing the format from its contents rather than its extension.
pub fn decode(file: &Path) -> Result<Image, PadError> {
    let reader = pad_try!(Input, ImageReader::open(file));
    let reader = pad_try!(Input, reader.with_guessed_format());
    let format = reader.format();

    let mut decoder = reader.into_decoder().map_err(|e| {
        pad_err!(Input, "unable to decode image `{}': {e}", file.display())
    })?;
    // a broken ICC profile should not prevent padding the pixels
    let icc = decoder.icc_profile().unwrap_or_else(|e| {
        log::warn!("ignoring unreadable ICC profile in `{}': {e}", file.display());
        None
    });
    let pixels = DynamicImage::from_decoder(decoder)
        .map_err(|e| pad_err!(Input, "unable to decode image `{}': {e}", file.display()))?;

    log::info!(
        "decoded `{}': {}x{} {:?} ({})",
        file.display(),
        pixels.width(),
        pixels.height(),
        pixels.color(),
        format.map_or("unknown format", |f| f.extensions_str()[0]),
    );

    Ok(Image {
        format,
        icc,
        pixels,
    })
}
