//! Bitmap collision masks

use glam::IVec2;

use crate::sim::Mask;

/// Alpha values above this are solid
pub const ALPHA_THRESHOLD: u8 = 127;

/// A width x height grid of solid/empty pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BitMask {
    /// All pixels empty
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// All pixels solid
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width as usize * height as usize],
        }
    }

    /// Build from a row-major alpha channel. `None` if the buffer size does
    /// not match the dimensions.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8]) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            bits: alpha.iter().map(|&a| a > ALPHA_THRESHOLD).collect(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        let (width, height) = (self.width as usize, self.height as usize);
        (x < width && y < height).then(|| y * width + x)
    }

    /// Solid pixel test; out of bounds is empty
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.bits[i])
    }

    /// Set a pixel; out of bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(i) = self.index(x, y) {
            self.bits[i] = solid;
        }
    }

    /// Fill an axis-aligned rectangle (clipped to the mask)
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) {
        for py in y..y + height as i32 {
            for px in x..x + width as i32 {
                self.set(px, py, true);
            }
        }
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl Mask for BitMask {
    /// Scans the intersection row by row, top to bottom, left to right.
    ///
    /// Masks that walk 64-pixel column strips can report a different first
    /// hit for irregular shapes spanning a strip edge. Solid rectangles agree
    /// under either order.
    fn overlap(&self, other: &Self, offset: IVec2) -> Option<IVec2> {
        let y_start = offset.y.max(0);
        let y_end = (offset.y + other.height as i32).min(self.height as i32);
        let x_start = offset.x.max(0);
        let x_end = (offset.x + other.width as i32).min(self.width as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }
}
