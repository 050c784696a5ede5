//! Line-by-line zig-zag strategy

use super::strategy::{traversal_length, Linearizer, Traversal};

/// Zig-zags through the image line by line (boustrophedon)
///
/// Unlike [`ZigZag`](super::ZigZag), which reverses direction along the
/// diagonals, this strategy reverses at the end of every line. The pixels of
/// a 5x5 image are ordered like:
///
/// ```text
///  1  2  3  4  5
/// 10  9  8  7  6
/// 11 12 13 14 15
/// 20 19 18 17 16
/// 21 22 23 24 25
/// ```
pub struct HorizontalZigZag;

impl Linearizer for HorizontalZigZag {
    fn name(&self) -> &'static str {
        "horizontal-zigzag"
    }

    fn description(&self) -> &'static str {
        "Zig-zag line by line, reversing direction on every line"
    }

    fn traversal(&self, width: u32, height: u32) -> Traversal {
        Box::new(HorizontalZigZagTraversal::new(width, height))
    }
}

struct HorizontalZigZagTraversal {
    width: u32,
    x: u32,
    y: u32,
    /// +1 while moving right, -1 while moving left
    delta_x: i64,
    remaining: u64,
}

impl HorizontalZigZagTraversal {
    fn new(width: u32, height: u32) -> Self {
        HorizontalZigZagTraversal {
            width,
            x: 0,
            y: 0,
            delta_x: 1,
            remaining: traversal_length(width, height),
        }
    }
}

impl Iterator for HorizontalZigZagTraversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = (self.x, self.y);
        let next_x = self.x as i64 + self.delta_x;
        if next_x < 0 || next_x >= self.width as i64 {
            // Stay in the same column and drop to the next line
            self.delta_x = -self.delta_x;
            self.y += 1;
        } else {
            self.x = next_x as u32;
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
