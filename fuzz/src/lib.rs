use std::num::NonZeroU8;

use arbitrary::Unstructured;
use image::{DynamicImage, RgbaImage};
use picture_padding::arg_parsers::{AspectRatio, FillColor};
use picture_padding::operations::{pad, pad_geometry, PadAxis};

#[derive(Debug)]
pub struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    pub fn to_dynamic_image(&self) -> DynamicImage {
        let img = RgbaImage::from_fn(self.width.get() as u32, self.height.get() as u32, |x, y| {
            let idx = (y * self.width.get() as u32 + x) as usize * 4;
            image::Rgba([
                self.rgba_data[idx],
                self.rgba_data[idx + 1],
                self.rgba_data[idx + 2],
                self.rgba_data[idx + 3],
            ])
        });
        DynamicImage::ImageRgba8(img)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}

/// Pads `image` and checks the canvas geometry and the pixels outside and inside the footprint.
pub fn pad_and_check(image: &StructuredImage, ratio: (NonZeroU8, NonZeroU8), fill: [u8; 4]) {
    let source = image.to_dynamic_image();
    let ratio = AspectRatio::new(ratio.0.get() as u32, ratio.1.get() as u32)
        .expect("non-zero components are valid");
    let fill = FillColor::new(fill[0], fill[1], fill[2], fill[3]);
    let (w, h) = (source.width(), source.height());

    let geometry = pad_geometry(w, h, ratio).expect("small images always fit");
    let padded = pad(&source, ratio, fill).expect("small images always pad");
    assert_eq!(padded.dimensions(), (geometry.width, geometry.height));

    let (rw, rh) = (u64::from(ratio.width()), u64::from(ratio.height()));
    match geometry.axis {
        PadAxis::Width => {
            assert_eq!(geometry.height, h);
            assert_eq!(u64::from(geometry.width), u64::from(h) * rw / rh);
            assert!(geometry.width >= w);
        }
        PadAxis::Height => {
            assert_eq!(geometry.width, w);
            assert_eq!(u64::from(geometry.height), u64::from(w) * rh / rw);
            assert!(geometry.height >= h);
        }
    }

    let source = source.to_rgba8();
    for (x, y, pixel) in padded.enumerate_pixels() {
        let inside = x >= geometry.x && x < geometry.x + w && y >= geometry.y && y < geometry.y + h;
        if !inside {
            assert_eq!(*pixel, image::Rgba::from(fill), "margin pixel at {x},{y}");
            continue;
        }
        let src = source.get_pixel(x - geometry.x, y - geometry.y);
        match src[3] {
            255 => assert_eq!(pixel, src, "opaque pixel at {x},{y}"),
            0 => assert_eq!(*pixel, image::Rgba::from(fill), "transparent pixel at {x},{y}"),
            _ => {}
        }
    }
}
