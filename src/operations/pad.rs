//! Padding an image's canvas out to a target aspect ratio.
//!
//! Exactly one axis grows: the one that falls short of the target ratio.
//! The source is centered along that axis and flush with the edges of the other.

use std::borrow::Cow;

use image::{DynamicImage, RgbaImage};

use crate::{
    arg_parsers::{AspectRatio, FillColor},
    error::PadError,
    operations::composite::{centered_offset, paste_with_alpha_mask},
    pad_err,
    utils::fraction::Fraction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PadAxis {
    /// Margins are added on the left and right
    Width,
    /// Margins are added on the top and bottom
    Height,
}

/// Size of the padded canvas and where the source goes on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadGeometry {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
    pub axis: PadAxis,
}

/// Computes the padded canvas for a `width`x`height` source.
///
/// An image narrower than `ratio` gets wider; anything else, including an image
/// that already matches `ratio` exactly, gets taller (possibly by zero pixels).
pub fn pad_geometry(
    width: u32,
    height: u32,
    ratio: AspectRatio,
) -> Result<PadGeometry, PadError> {
    if width == 0 || height == 0 {
        return Err(pad_err!(
            Validation,
            "cannot pad an image with zero width or height ({width}x{height})"
        ));
    }

    let target = ratio.as_fraction();
    let current = Fraction::new(width, height);

    let geometry = if current < target {
        let new_width = fit_u32(target.scale_floor(height), height)?;
        PadGeometry {
            width: new_width,
            height,
            x: centered_offset(new_width, width),
            y: 0,
            axis: PadAxis::Width,
        }
    } else {
        let new_height = fit_u32(target.reciprocal().scale_floor(width), width)?;
        PadGeometry {
            width,
            height: new_height,
            x: 0,
            y: centered_offset(new_height, height),
            axis: PadAxis::Height,
        }
    };
    check_canvas_budget(geometry.width, geometry.height)?;

    log::debug!(
        "{width}x{height} (ratio {:.4}) vs target {ratio} ({:.4}): padding {}, canvas {}x{}, offset +{}+{}",
        current.to_float(),
        target.to_float(),
        geometry.axis,
        geometry.width,
        geometry.height,
        geometry.x,
        geometry.y,
    );
    Ok(geometry)
}

fn fit_u32(padded: u64, other: u32) -> Result<u32, PadError> {
    u32::try_from(padded).map_err(|_| {
        pad_err!(
            Validation,
            "padded canvas would be {padded} pixels along one side (other side {other}), which is too large"
        )
    })
}

/// Refuses canvases whose RGBA8 buffer exceeds the allocation limit `image` applies by default
fn check_canvas_budget(width: u32, height: u32) -> Result<(), PadError> {
    let budget = image::Limits::default().max_alloc.unwrap_or(u64::MAX);
    let bytes = u128::from(width) * u128::from(height) * 4;
    if bytes > u128::from(budget) {
        return Err(pad_err!(
            Validation,
            "padded canvas {width}x{height} would need {bytes} bytes, more than the {budget} byte limit"
        ));
    }
    Ok(())
}

/// Pads `source` to `ratio`, filling the new margins with `fill`.
///
/// The source is composited with its alpha channel as the mask.
/// Images without alpha are treated as fully opaque. The source is not modified.
pub fn pad(
    source: &DynamicImage,
    ratio: AspectRatio,
    fill: FillColor,
) -> Result<RgbaImage, PadError> {
    let geometry = pad_geometry(source.width(), source.height(), ratio)?;

    let rgba: Cow<'_, RgbaImage> = match source {
        DynamicImage::ImageRgba8(pixels) => Cow::Borrowed(pixels),
        other => Cow::Owned(other.to_rgba8()),
    };

    let mut canvas = RgbaImage::from_pixel(geometry.width, geometry.height, fill.into());
    paste_with_alpha_mask(&mut canvas, &rgba, geometry.x, geometry.y);
    Ok(canvas)
}
