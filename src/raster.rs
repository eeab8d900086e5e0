// Raster surface: a fixed-size straight-alpha RGBA8 buffer that distance
// fields are applied to, then blitted into the window frame buffer.

use image::RgbaImage;
use rayon::prelude::*;

use crate::color::{Color, quantize};
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::FrameBuffer;
use crate::vector::Vector2;

pub struct Raster {
    image: RgbaImage, // width * height * 4 bytes, row-major, top-left origin
}

impl Raster {
    /// New surface, every pixel (0,0,0,0).
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        Ok(Self { image: RgbaImage::new(width, height) })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Raw RGBA bytes.
    #[allow(dead_code)]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    #[allow(dead_code)]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    #[cfg(test)]
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.image.put_pixel(x, y, image::Rgba(rgba));
    }

    /// Back to fully transparent black.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        let buf: &mut [u8] = &mut self.image;
        buf.fill(0);
    }

    /// Evaluate `field` at every pixel coordinate. A returned color replaces
    /// the pixel; `None` keeps whatever is already there, so applying several
    /// fields in sequence paints them over each other.
    ///
    /// `parallel` scans rows on the rayon pool; each pixel is still written
    /// by exactly one task and the result is identical to the serial scan.
    pub fn apply_field<F>(&mut self, field: F, parallel: bool)
    where
        F: Fn(Vector2) -> Option<Color> + Sync,
    {
        let row_bytes = self.image.width() as usize * 4;
        let buf: &mut [u8] = &mut self.image;

        if parallel {
            buf.par_chunks_exact_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| shade_row(&field, y, row));
        } else {
            for (y, row) in buf.chunks_exact_mut(row_bytes).enumerate() {
                shade_row(&field, y, row);
            }
        }
    }

    /// Composite this straight-alpha surface over `background` into `target`
    /// (0x00RRGGBB). With `lut`, mixing happens in linear light.
    pub fn blit(
        &self,
        target: &mut FrameBuffer,
        background: Color,
        lut: Option<&GammaLut>,
    ) -> Result<(), Error> {
        let src = (self.width() as usize, self.height() as usize);
        if (target.width, target.height) != src {
            return Err(Error::BlitSize { src, dst: (target.width, target.height) });
        }

        let [br, bg, bb, _] = background.to_rgba8();
        for (px, out) in self.image.pixels().zip(target.pixels.iter_mut()) {
            let [r, g, b, a] = px.0;
            let (r, g, b) = match a {
                0 => (br, bg, bb),
                255 => (r, g, b),
                _ => {
                    let t = a as f32 / 255.0;
                    match lut {
                        Some(lut) => (
                            lut.mix(br, r, t),
                            lut.mix(bg, g, t),
                            lut.mix(bb, b, t),
                        ),
                        None => (mix_srgb(br, r, t), mix_srgb(bg, g, t), mix_srgb(bb, b, t)),
                    }
                }
            };
            *out = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
        }
        Ok(())
    }
}

#[inline]
fn shade_row<F>(field: &F, y: usize, row: &mut [u8])
where
    F: Fn(Vector2) -> Option<Color>,
{
    for (x, px) in row.chunks_exact_mut(4).enumerate() {
        if let Some(c) = field(Vector2::new(x as f64, y as f64)) {
            px.copy_from_slice(&c.to_rgba8());
        }
    }
}

#[inline]
fn mix_srgb(under: u8, over: u8, t: f32) -> u8 {
    quantize(under as f64 + (over as f64 - under as f64) * t as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[test]
    fn new_is_zeroed_and_sized() {
        let r = Raster::new(7, 3).unwrap();
        assert_eq!(r.as_raw().len(), 7 * 3 * 4);
        assert!(r.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(Raster::new(0, 4), Err(Error::InvalidSize { .. })));
        assert!(matches!(Raster::new(4, 0), Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn visits_every_coordinate_once() {
        for parallel in [false, true] {
            let mut r = Raster::new(13, 9).unwrap();
            let seen = Mutex::new(Vec::new());
            r.apply_field(
                |p: Vector2| {
                    seen.lock().unwrap().push((p.x as u32, p.y as u32));
                    None
                },
                parallel,
            );
            let seen = seen.into_inner().unwrap();
            assert_eq!(seen.len(), 13 * 9);
            let unique: HashSet<_> = seen.iter().copied().collect();
            assert_eq!(unique.len(), 13 * 9);
            assert!(unique.iter().all(|&(x, y)| x < 13 && y < 9));
        }
    }

    #[test]
    fn serial_scan_is_row_major() {
        let mut r = Raster::new(3, 2).unwrap();
        let seen = Mutex::new(Vec::new());
        r.apply_field(
            |p: Vector2| {
                seen.lock().unwrap().push((p.x, p.y));
                None
            },
            false,
        );
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]
        );
    }

    #[test]
    fn uncovered_pixels_keep_previous_value() {
        let mut r = Raster::new(40, 40).unwrap();
        r.apply_field(|_| Some(Color::rgba(1.0, 2.0, 3.0, 4.0)), false);
        r.apply_field(sdf::circle(Vector2::new(20.0, 20.0), 5.0, Color::WHITE, 2.0), true);
        assert_eq!(r.pixel(20, 20), [255, 255, 255, 255]);
        assert_eq!(r.pixel(0, 0), [1, 2, 3, 4]);
        // Band pixel: white RGB, partial alpha.
        let band = r.pixel(26, 20);
        assert_eq!(&band[..3], &[255, 255, 255]);
        assert!(band[3] > 0 && band[3] < 255);
    }

    #[test]
    fn parallel_and_serial_agree() {
        let color = Color::rgb(200.0, 40.0, 90.0);
        let field = || sdf::line(Vector2::new(3.0, 4.0), Vector2::new(50.0, 30.0), 6.0, color, 5.0);
        let mut a = Raster::new(64, 48).unwrap();
        let mut b = Raster::new(64, 48).unwrap();
        a.apply_field(field(), false);
        b.apply_field(field(), true);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn blit_composites_over_background() {
        let mut r = Raster::new(3, 1).unwrap();
        r.put_pixel(1, 0, [255, 0, 0, 255]);
        r.put_pixel(2, 0, [255, 255, 255, 51]);
        let mut fb = FrameBuffer::new(3, 1);
        r.blit(&mut fb, Color::rgb(0.0, 0.0, 0.0), None).unwrap();
        assert_eq!(fb.pixels[0], 0x00_00_00_00);
        assert_eq!(fb.pixels[1], 0x00_FF_00_00);
        assert_eq!(fb.pixels[2], 0x00_33_33_33);
    }

    #[test]
    fn blit_rejects_size_mismatch() {
        let r = Raster::new(3, 3).unwrap();
        let mut fb = FrameBuffer::new(2, 3);
        assert!(matches!(r.blit(&mut fb, Color::BLACK, None), Err(Error::BlitSize { .. })));
    }

    #[test]
    fn clear_resets_pixels() {
        let mut r = Raster::new(2, 2).unwrap();
        r.apply_field(|_| Some(Color::WHITE), true);
        r.clear();
        assert!(r.as_raw().iter().all(|&b| b == 0));
    }
}
