//! Line concatenation strategy

use super::strategy::{traversal_length, Linearizer, Traversal};

/// Concatenates the lines of the image, top to bottom
///
/// The pixels of a 5x5 image are ordered like:
///
/// ```text
///  1  2  3  4  5
///  6  7  8  9 10
/// 11 12 13 14 15
/// 16 17 18 19 20
/// 21 22 23 24 25
/// ```
pub struct Lines;

impl Linearizer for Lines {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn description(&self) -> &'static str {
        "Concatenate the image lines, top to bottom"
    }

    fn traversal(&self, width: u32, height: u32) -> Traversal {
        Box::new(LinesTraversal::new(width, height))
    }
}

/// Row-major walk over a grid
struct LinesTraversal {
    width: u32,
    x: u32,
    y: u32,
    remaining: u64,
}

impl LinesTraversal {
    fn new(width: u32, height: u32) -> Self {
        LinesTraversal {
            width,
            x: 0,
            y: 0,
            remaining: traversal_length(width, height),
        }
    }
}

impl Iterator for LinesTraversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = (self.x, self.y);
        self.x += 1;
        if self.x == self.width {
            self.x = 0;
            self.y += 1;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
