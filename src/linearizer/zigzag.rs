//! Diagonal zig-zag strategy

use super::strategy::{traversal_length, Linearizer, Traversal};

/// Zig-zags along the anti-diagonals, as done in block transform coding
///
/// The pixels of a 5x5 image are ordered like:
///
/// ```text
///  1  2  6  7 15
///  3  5  8 14 16
///  4  9 13 17 22
/// 10 12 18 21 23
/// 11 19 20 24 25
/// ```
///
/// This is the ordering of the JPEG coefficient scan generalized to
/// rectangular grids. The stripe rules run on `(col, row)`: an even stripe
/// first tries to move right and an odd one first tries to move down, so the
/// walk leaves the top-left corner to the right, not downwards.
pub struct ZigZag;

impl Linearizer for ZigZag {
    fn name(&self) -> &'static str {
        "zigzag"
    }

    fn description(&self) -> &'static str {
        "Zig-zag along the anti-diagonals, starting to the right"
    }

    fn traversal(&self, width: u32, height: u32) -> Traversal {
        Box::new(ZigZagTraversal::new(width, height))
    }
}

/// Closed-form state machine over the anti-diagonals
///
/// Works in 1-based coordinates. The parity of `col + row` tells which way
/// the current stripe runs: even stripes climb up and to the right, odd
/// stripes fall down and to the left. Reaching an edge reflects the walk
/// onto the next stripe, so no cell is ever revisited or skipped.
struct ZigZagTraversal {
    width: u64,
    height: u64,
    col: u64,
    row: u64,
    remaining: u64,
}

impl ZigZagTraversal {
    fn new(width: u32, height: u32) -> Self {
        ZigZagTraversal {
            width: width as u64,
            height: height as u64,
            col: 1,
            row: 1,
            remaining: traversal_length(width, height),
        }
    }

    fn advance(&mut self) {
        if (self.col + self.row) % 2 == 0 {
            // Even stripe
            if self.col < self.width {
                self.col += 1;
            } else {
                self.row += 2;
            }
            if self.row > 1 {
                self.row -= 1;
            }
        } else {
            // Odd stripe
            if self.row < self.height {
                self.row += 1;
            } else {
                self.col += 2;
            }
            if self.col > 1 {
                self.col -= 1;
            }
        }
    }
}

impl Iterator for ZigZagTraversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = ((self.col - 1) as u32, (self.row - 1) as u32);
        self.advance();
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
