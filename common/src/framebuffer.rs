//! RGB565 framebuffer `DrawTarget` over a borrowed byte slice.
//!
//! Pixels are stored big-endian, two bytes each, row-major, which is the
//! byte order the ST7789 expects on the wire after `RAMWR`. The firmware
//! renders into a static buffer and streams it to the panel in one DMA
//! transfer; host tests render into a `Vec<u8>` and read pixels back.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Bytes per RGB565 pixel.
pub const BYTES_PER_PIXEL: usize = 2;

/// Buffer size in bytes for a `width` x `height` frame.
pub const fn buffer_len(
    width: usize,
    height: usize,
) -> usize {
    width * height * BYTES_PER_PIXEL
}

/// Draw target writing into a caller-owned framebuffer.
pub struct FrameBuffer<'a> {
    buffer: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap `buffer` as a `width` x `height` frame.
    ///
    /// Returns `None` if the buffer is smaller than the frame.
    pub fn new(
        buffer: &'a mut [u8],
        width: usize,
        height: usize,
    ) -> Option<Self> {
        if buffer.len() < buffer_len(width, height) {
            return None;
        }
        Some(Self { buffer, width, height })
    }

    /// Raw bytes of the frame, ready to stream to the panel.
    pub fn as_bytes(&self) -> &[u8] { &self.buffer[..buffer_len(self.width, self.height)] }

    /// Read back one pixel, or `None` outside the frame.
    pub fn pixel(
        &self,
        point: Point,
    ) -> Option<Rgb565> {
        let idx = self.index(point)?;
        let raw = u16::from_be_bytes([self.buffer[idx], self.buffer[idx + 1]]);
        Some(Rgb565::from(RawU16::new(raw)))
    }

    #[inline]
    fn index(
        &self,
        point: Point,
    ) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * BYTES_PER_PIXEL)
    }

    #[inline]
    fn write(
        &mut self,
        idx: usize,
        color: Rgb565,
    ) {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        self.buffer[idx] = bytes[0];
        self.buffer[idx + 1] = bytes[1];
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size { Size::new(self.width as u32, self.height as u32) }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point) {
                self.write(idx, color);
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = (y as usize * self.width + x_start) * BYTES_PER_PIXEL;
            let row = &mut self.buffer[row_start..row_start + width * BYTES_PER_PIXEL];
            for pixel in row.chunks_exact_mut(BYTES_PER_PIXEL) {
                pixel.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        let len = buffer_len(self.width, self.height);
        for pixel in self.buffer[..len].chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_buffer() {
        let mut buf = vec![0u8; buffer_len(4, 4) - 1];
        assert!(FrameBuffer::new(&mut buf, 4, 4).is_none());
    }

    #[test]
    fn test_pixel_round_trip_big_endian() {
        let mut buf = vec![0u8; buffer_len(4, 3)];
        let mut fb = FrameBuffer::new(&mut buf, 4, 3).unwrap();
        Pixel(Point::new(1, 2), Rgb565::RED).draw(&mut fb).ok();
        assert_eq!(fb.pixel(Point::new(1, 2)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(Rgb565::BLACK));

        // RED is 0xF800: high byte first
        let idx = (2 * 4 + 1) * BYTES_PER_PIXEL;
        assert_eq!(&fb.as_bytes()[idx..idx + 2], &[0xF8, 0x00]);
    }

    #[test]
    fn test_out_of_bounds_pixels_ignored() {
        let mut buf = vec![0u8; buffer_len(4, 4)];
        let mut fb = FrameBuffer::new(&mut buf, 4, 4).unwrap();
        fb.draw_iter([Pixel(Point::new(-1, 0), Rgb565::WHITE), Pixel(Point::new(4, 0), Rgb565::WHITE)])
            .ok();
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
        assert_eq!(fb.pixel(Point::new(4, 0)), None);
    }

    #[test]
    fn test_fill_solid_clips_to_frame() {
        let mut buf = vec![0u8; buffer_len(4, 4)];
        let mut fb = FrameBuffer::new(&mut buf, 4, 4).unwrap();
        fb.fill_solid(&Rectangle::new(Point::new(2, 2), Size::new(10, 10)), Rgb565::GREEN)
            .ok();
        assert_eq!(fb.pixel(Point::new(3, 3)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(2, 2)), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(Point::new(1, 3)), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut buf = vec![0u8; buffer_len(3, 5)];
        let mut fb = FrameBuffer::new(&mut buf, 3, 5).unwrap();
        fb.clear(Rgb565::WHITE).ok();
        for y in 0..5 {
            for x in 0..3 {
                assert_eq!(fb.pixel(Point::new(x, y)), Some(Rgb565::WHITE));
            }
        }
    }
}
