use glam::DVec2;
use std::ops::{Deref, DerefMut};
use thiserror::Error;

/// Width and height of the square marker stamped for each body, in pixels.
pub const MARKER_SIZE: u32 = 2;

const BYTES_PER_PIXEL: usize = 4;

/// Errors raised when wrapping an existing pixel buffer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TrailError {
    /// The buffer does not hold exactly one RGBA pixel per canvas pixel.
    #[error("a {width}x{height} RGBA canvas needs {expected} bytes, the buffer holds {actual}")]
    SizeMismatch {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Expected length of the buffer.
        expected: usize,
        /// Actual length of the buffer.
        actual: usize,
    },
}

/// `TrailCanvas` is an RGBA8 raster in window space that accumulates the path of bodies.
///
/// It is never cleared: every [`plot`](TrailCanvas::plot) adds to the markers already drawn. The
/// pixels can be owned (`Vec<u8>`) or borrowed from a texture, in which case they are drawn in
/// place.
///
/// # Example
///
/// ```
/// use moonsim::trail::TrailCanvas;
/// use glam::DVec2;
///
/// let mut canvas = TrailCanvas::new(900, 650);
/// canvas.plot(DVec2::new(450.0, 52.3), [128, 128, 128]);
///
/// assert_eq!(canvas.pixel(451, 53), Some([128, 128, 128, 255]));
/// assert_eq!(canvas.pixel(452, 53), Some([0, 0, 0, 255]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrailCanvas<C> {
    width: u32,
    height: u32,
    data: C,
}

impl TrailCanvas<Vec<u8>> {
    /// Creates an opaque black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: [0, 0, 0, u8::MAX].repeat(width as usize * height as usize),
        }
    }

    /// Returns the underlying pixels, row by row.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

impl<C: Deref<Target = [u8]>> TrailCanvas<C> {
    /// Wraps an existing buffer of `width * height` RGBA pixels, row by row.
    pub fn from_raw(width: u32, height: u32, data: C) -> Result<Self, TrailError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(TrailError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width of the canvas, in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the canvas, in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at the given coordinates, if it is on the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = self.to_data_index(x, y);
        let mut pixel = [0; BYTES_PER_PIXEL];
        pixel.copy_from_slice(&self.data[index..index + BYTES_PER_PIXEL]);
        Some(pixel)
    }

    /// The underlying pixels, row by row.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn to_data_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl<C: DerefMut<Target = [u8]>> TrailCanvas<C> {
    /// Stamps a [`MARKER_SIZE`] square marker whose top-left pixel contains `position`.
    ///
    /// The position is floored, so coordinates in `(-1, 0)` land on pixel `-1` rather than `0`.
    /// Pixels falling outside the canvas are skipped. Returns the number of pixels drawn.
    pub fn plot(&mut self, position: DVec2, color: [u8; 3]) -> usize {
        let [r, g, b] = color;
        let (left, top) = (position.x.floor(), position.y.floor());
        let mut drawn = 0;

        for dy in 0..MARKER_SIZE {
            for dx in 0..MARKER_SIZE {
                let (x, y) = (left + dx as f64, top + dy as f64);
                // Also rejects NaN.
                if !(0.0..self.width as f64).contains(&x)
                    || !(0.0..self.height as f64).contains(&y)
                {
                    continue;
                }

                let index = self.to_data_index(x as u32, y as u32);
                self.data[index..index + BYTES_PER_PIXEL].copy_from_slice(&[r, g, b, u8::MAX]);
                drawn += 1;
            }
        }

        drawn
    }
}
