//! Round-trip, shape and edge-case tests shared by every strategy

extern crate std;

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Rgb, Rgb32FImage};

use crate::errors::LinearizeError;
use crate::linearizer::{delinearize_buffer, linearize_buffer, row_length, LinearizerFactory, Lines, Spiral};
use super::test_utils::{assert_bijective, distinct_rgba_grid, numbered_grid};

#[test]
fn test_every_strategy_is_bijective() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        for width in 1..=9 {
            for height in 1..=9 {
                assert_bijective(linearizer, width, height);
            }
        }
        assert_bijective(linearizer, 31, 2);
        assert_bijective(linearizer, 2, 31);
        assert_bijective(linearizer, 64, 48);
    }
}

#[test]
fn test_every_strategy_round_trips() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        for (width, height) in [(1, 1), (1, 7), (7, 1), (2, 2), (3, 5), (5, 3), (8, 8), (13, 4), (4, 13)] {
            let grid = distinct_rgba_grid(width, height);

            let row = linearize_buffer(linearizer, &grid).unwrap();
            std::assert_eq!(row.dimensions(), (width * height, 1));

            let restored = delinearize_buffer(linearizer, &row, width, height).unwrap();
            std::assert_eq!(restored.dimensions(), (width, height));
            std::assert_eq!(restored, grid, "{} on {}x{}", linearizer.name(), width, height);
        }
    }
}

#[test]
fn test_single_pixel_round_trip() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        let grid = ImageBuffer::from_pixel(1, 1, Rgb([9u8, 8, 7]));
        let row = linearize_buffer(linearizer, &grid).unwrap();
        std::assert_eq!(row.get_pixel(0, 0), &Rgb([9, 8, 7]));
        std::assert_eq!(delinearize_buffer(linearizer, &row, 1, 1).unwrap(), grid);
    }
}

#[test]
fn test_single_row_and_column_keep_their_order() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        let row: Vec<(u32, u32)> = linearizer.traversal(6, 1).collect();
        std::assert_eq!(row, (0..6u32).map(|x| (x, 0u32)).collect::<Vec<_>>(), "{}", linearizer.name());

        let column: Vec<(u32, u32)> = linearizer.traversal(1, 6).collect();
        std::assert_eq!(column, (0..6u32).map(|y| (0u32, y)).collect::<Vec<_>>(), "{}", linearizer.name());
    }
}

#[test]
fn test_zero_area_grids_produce_empty_rows() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        for (width, height) in [(0, 0), (0, 5), (5, 0)] {
            std::assert_eq!(linearizer.traversal(width, height).count(), 0);

            let grid: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::new(width, height);
            let row = linearize_buffer(linearizer, &grid).unwrap();
            std::assert_eq!(row.dimensions(), (0, 1));

            let restored = delinearize_buffer(linearizer, &row, width, height).unwrap();
            std::assert_eq!(restored.dimensions(), (width, height));
        }
    }
}

#[test]
fn test_dynamic_image_keeps_pixel_type() {
    let images = vec![
        DynamicImage::ImageLuma16(numbered_grid(4, 3)),
        DynamicImage::ImageRgba8(distinct_rgba_grid(4, 3)),
        DynamicImage::ImageLumaA8(ImageBuffer::from_fn(4, 3, |x, y| LumaA([(x * 3 + y) as u8, 200]))),
        DynamicImage::ImageRgb32F(Rgb32FImage::from_fn(4, 3, |x, y| Rgb([x as f32, y as f32, 0.5]))),
    ];

    for linearizer in LinearizerFactory::get_available_linearizers() {
        for image in &images {
            let row = linearizer.linearize(image).unwrap();
            std::assert_eq!(row.color(), image.color());
            std::assert_eq!((row.width(), row.height()), (12, 1));

            let restored = linearizer.delinearize(&row, 4, 3).unwrap();
            std::assert_eq!(restored.color(), image.color());
            std::assert_eq!(&restored, image, "{}", linearizer.name());
        }
    }
}

#[test]
fn test_delinearize_rejects_wrong_row_length() {
    let row = linearize_buffer(&Spiral, &numbered_grid(5, 5)).unwrap();

    match delinearize_buffer(&Spiral, &row, 4, 5) {
        Err(LinearizeError::DimensionMismatch { expected, actual }) => {
            std::assert_eq!(expected, 20);
            std::assert_eq!(actual, 25);
        }
        other => panic!("expected a dimension mismatch, got {:?}", other.map(|i| i.dimensions())),
    }

    std::assert!(matches!(
        delinearize_buffer(&Lines, &row, 6, 5),
        Err(LinearizeError::DimensionMismatch { expected: 30, actual: 25 })
    ));
}

#[test]
fn test_delinearize_rejects_multi_row_source() {
    let grid = numbered_grid(5, 5);
    std::assert!(matches!(
        delinearize_buffer(&Lines, &grid, 5, 5),
        Err(LinearizeError::NotARow(5))
    ));
}

#[test]
fn test_row_length_detects_overflow() {
    std::assert_eq!(row_length(640, 480).unwrap(), 307_200);
    std::assert!(matches!(
        row_length(u32::MAX, 2),
        Err(LinearizeError::DimensionOverflow { width: u32::MAX, height: 2 })
    ));
}

#[test]
fn test_oversized_grids_traverse_nothing() {
    for linearizer in LinearizerFactory::get_available_linearizers() {
        std::assert_eq!(linearizer.traversal(u32::MAX, u32::MAX).next(), None, "{}", linearizer.name());
        std::assert_eq!(linearizer.traversal(u32::MAX, 2).count(), 0, "{}", linearizer.name());
    }
}
