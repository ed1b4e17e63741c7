use image::{Rgba, RgbaImage};

/// Offset that centers `inner` within `outer`.
/// When the leftover space is odd, the extra pixel ends up after the inner span.
pub fn centered_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Pastes `source` onto `canvas` at `(x, y)`, using the source's own alpha channel as the mask.
///
/// Every channel, alpha included, is interpolated between the canvas and the source
/// by the mask value, so opaque pixels replace the canvas exactly
/// and fully transparent pixels leave it untouched.
/// The parts of `source` that would land outside the canvas are skipped.
pub fn paste_with_alpha_mask(canvas: &mut RgbaImage, source: &RgbaImage, x: u32, y: u32) {
    let (canvas_width, canvas_height) = canvas.dimensions();
    for (sx, sy, src) in source.enumerate_pixels() {
        let (Some(dx), Some(dy)) = (x.checked_add(sx), y.checked_add(sy)) else {
            continue;
        };
        if dx >= canvas_width || dy >= canvas_height {
            continue;
        }
        let dst = canvas.get_pixel_mut(dx, dy);
        *dst = blend_with_mask(*src, *dst, src[3]);
    }
}

fn blend_with_mask(src: Rgba<u8>, dst: Rgba<u8>, mask: u8) -> Rgba<u8> {
    match mask {
        255 => src,
        0 => dst,
        _ => Rgba(std::array::from_fn(|c| mix(src[c], dst[c], mask))),
    }
}

/// `round((src * mask + dst * (255 - mask)) / 255)` in integer arithmetic
#[inline]
fn mix(src: u8, dst: u8, mask: u8) -> u8 {
    let mask = u32::from(mask);
    let tmp = u32::from(src) * mask + u32::from(dst) * (255 - mask) + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}
