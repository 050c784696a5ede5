//! Tests pinning each strategy to its documented 5x5 ordering

extern crate std;

use crate::linearizer::{delinearize_buffer, linearize_buffer, HorizontalZigZag, Lines, Linearizer, Spiral, ZigZag};
use super::test_utils::{luma_grid, numbered_grid, values};

const LINES_5X5: [u16; 25] = [
    1, 2, 3, 4, 5,
    6, 7, 8, 9, 10,
    11, 12, 13, 14, 15,
    16, 17, 18, 19, 20,
    21, 22, 23, 24, 25,
];

const HORIZONTAL_ZIGZAG_5X5: [u16; 25] = [
    1, 2, 3, 4, 5,
    10, 9, 8, 7, 6,
    11, 12, 13, 14, 15,
    20, 19, 18, 17, 16,
    21, 22, 23, 24, 25,
];

const ZIGZAG_5X5: [u16; 25] = [
    1, 2, 6, 7, 15,
    3, 5, 8, 14, 16,
    4, 9, 13, 17, 22,
    10, 12, 18, 21, 23,
    11, 19, 20, 24, 25,
];

const SPIRAL_5X5: [u16; 25] = [
    1, 2, 3, 4, 5,
    16, 17, 18, 19, 6,
    15, 24, 25, 20, 7,
    14, 23, 22, 21, 8,
    13, 12, 11, 10, 9,
];

/// Each fixture lists, cell by cell, the position at which the strategy
/// visits that cell. Folding the row 1..=25 must reproduce it, and
/// unfolding the fixture must give back 1..=25.
fn check_fixture(linearizer: &dyn Linearizer, fixture: &[u16; 25]) {
    let sequence: Vec<u16> = (1..=25).collect();
    let row = luma_grid(25, 1, &sequence);

    let folded = delinearize_buffer(linearizer, &row, 5, 5).unwrap();
    std::assert_eq!(values(&folded), fixture.to_vec(), "{} fold order", linearizer.name());

    let grid = luma_grid(5, 5, fixture);
    let unfolded = linearize_buffer(linearizer, &grid).unwrap();
    std::assert_eq!(values(&unfolded), sequence, "{} unfold order", linearizer.name());

    let restored = delinearize_buffer(linearizer, &unfolded, 5, 5).unwrap();
    std::assert_eq!(restored, grid);
}

#[test]
fn test_lines_fixture() {
    check_fixture(&Lines, &LINES_5X5);
}

#[test]
fn test_horizontal_zigzag_fixture() {
    check_fixture(&HorizontalZigZag, &HORIZONTAL_ZIGZAG_5X5);
}

#[test]
fn test_zigzag_fixture() {
    check_fixture(&ZigZag, &ZIGZAG_5X5);
}

#[test]
fn test_spiral_fixture() {
    check_fixture(&Spiral, &SPIRAL_5X5);
}

#[test]
fn test_spiral_reads_numbered_grid_along_the_edges() {
    let row = linearize_buffer(&Spiral, &numbered_grid(5, 5)).unwrap();
    std::assert_eq!(
        values(&row),
        vec![1, 2, 3, 4, 5, 10, 15, 20, 25, 24, 23, 22, 21, 16, 11, 6, 7, 8, 9, 14, 19, 18, 17, 12, 13]
    );
}

#[test]
fn test_zigzag_rectangular_orders() {
    let wide: Vec<(u32, u32)> = ZigZag.traversal(3, 2).collect();
    std::assert_eq!(wide, vec![(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (2, 1)]);

    let tall: Vec<(u32, u32)> = ZigZag.traversal(2, 3).collect();
    std::assert_eq!(tall, vec![(0, 0), (1, 0), (0, 1), (0, 2), (1, 1), (1, 2)]);
}

#[test]
fn test_spiral_rectangular_order() {
    let cells: Vec<(u32, u32)> = Spiral.traversal(4, 3).collect();
    std::assert_eq!(cells, vec![
        (0, 0), (1, 0), (2, 0), (3, 0),
        (3, 1), (3, 2),
        (2, 2), (1, 2), (0, 2),
        (0, 1),
        (1, 1), (2, 1),
    ]);
}

#[test]
fn test_horizontal_zigzag_single_column_goes_straight_down() {
    let cells: Vec<(u32, u32)> = HorizontalZigZag.traversal(1, 4).collect();
    std::assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_zigzag_leaves_the_corner_to_the_right() {
    for (width, height) in [(2, 2), (5, 5), (2, 9), (9, 2)] {
        let first: Vec<(u32, u32)> = ZigZag.traversal(width, height).take(3).collect();
        std::assert_eq!(first, vec![(0, 0), (1, 0), (0, 1)], "{}x{}", width, height);
    }
}
