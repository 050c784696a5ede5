//! Clockwise spiral strategy

use super::strategy::{traversal_length, Linearizer, Traversal};

/// Walks the image in a clockwise spiral, from the top-left corner inwards
///
/// The pixels of a 5x5 image are ordered like:
///
/// ```text
///  1  2  3  4  5
/// 16 17 18 19  6
/// 15 24 25 20  7
/// 14 23 22 21  8
/// 13 12 11 10  9
/// ```
pub struct Spiral;

impl Linearizer for Spiral {
    fn name(&self) -> &'static str {
        "spiral"
    }

    fn description(&self) -> &'static str {
        "Clockwise spiral from the top-left corner inwards"
    }

    fn traversal(&self, width: u32, height: u32) -> Traversal {
        Box::new(SpiralTraversal::new(width, height))
    }
}

/// Spiral walk that turns on grid edges and on cells it already visited
///
/// Turns cannot be derived from the position alone once the walk has
/// wrapped around, hence the visited markers. They live as long as the
/// iterator, one flag per cell indexed `y * width + x`.
struct SpiralTraversal {
    width: i64,
    height: i64,
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    visited: Vec<bool>,
    remaining: u64,
}

impl SpiralTraversal {
    fn new(width: u32, height: u32) -> Self {
        let remaining = traversal_length(width, height);
        SpiralTraversal {
            width: width as i64,
            height: height as i64,
            x: 0,
            y: 0,
            dx: 1,
            dy: 0,
            visited: vec![false; remaining as usize],
            remaining,
        }
    }

    fn index(&self, x: i64, y: i64) -> usize {
        (y * self.width + x) as usize
    }

    /// Whether the walk may step onto `(x, y)`
    fn is_open(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height && !self.visited[self.index(x, y)]
    }
}

impl Iterator for SpiralTraversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let cell = (self.x as u32, self.y as u32);
        let index = self.index(self.x, self.y);
        self.visited[index] = true;

        if !self.is_open(self.x + self.dx, self.y + self.dy) {
            // Rotate 90 degrees clockwise
            let dy = self.dx;
            self.dx = -self.dy;
            self.dy = dy;
        }
        self.x += self.dx;
        self.y += self.dy;

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}
