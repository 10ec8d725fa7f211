//! Tests for grid and canvas size arithmetic

#[cfg(test)]
mod tests {
    use tessera::MosaicError;
    use tessera::math::Vector2;
    use tessera::mosaic::MosaicGeometry;

    // Tests canvas size equals round(S * T / C) and the grid scaled by T
    // Verified by computing the canvas from the unrounded grid
    #[test]
    fn test_canvas_matches_both_formulas_when_divisible() {
        let cases = [
            ((100, 60), 35, 2.0),
            ((640, 480), 10, 4.0),
            ((7, 3), 1, 1.0),
            ((90, 45), 16, 0.5),
        ];
        for ((w, h), edge, rate) in cases {
            let geometry = MosaicGeometry::new(Vector2::new(w, h), edge, rate).unwrap();

            let expected = Vector2::new(
                (f64::from(w) * f64::from(edge) / rate).round() as u32,
                (f64::from(h) * f64::from(edge) / rate).round() as u32,
            );
            assert_eq!(geometry.canvas, expected);
            assert_eq!(geometry.canvas, geometry.grid * edge);
        }
    }

    // Tests the documented example from the default settings
    // Verified by swapping width and height
    #[test]
    fn test_default_settings_example() {
        let geometry = MosaicGeometry::new(Vector2::new(100, 60), 35, 2.0).unwrap();
        assert_eq!(geometry.grid, Vector2::new(50, 30));
        assert_eq!(geometry.canvas, Vector2::new(1750, 1050));
        assert_eq!(geometry.cell_count(), 1500);
        assert!(!geometry.is_empty());
    }

    // Tests non-divisible sizes round each quantity independently
    // Verified by deriving the canvas from the grid
    #[test]
    fn test_non_divisible_sizes_round_independently() {
        let geometry = MosaicGeometry::new(Vector2::new(3, 5), 35, 2.0).unwrap();
        assert_eq!(geometry.grid, Vector2::new(2, 2));
        assert_eq!(geometry.canvas, Vector2::new(52, 88));
    }

    // Tests odd photo sizes at the default rate round halves to even
    // Verified by rounding halves away from zero
    #[test]
    fn test_odd_source_rounds_half_to_even() {
        let geometry = MosaicGeometry::new(Vector2::new(1001, 667), 35, 2.0).unwrap();
        assert_eq!(geometry.grid, Vector2::new(500, 334));
        assert_eq!(geometry.canvas, Vector2::new(17518, 11672));
        assert_eq!(geometry.cell_count(), 167_000);
    }

    // Tests a source smaller than the rate gives an empty grid
    // Verified by clamping the grid to one cell
    #[test]
    fn test_tiny_source_gives_empty_grid() {
        let geometry = MosaicGeometry::new(Vector2::new(1, 40), 35, 3.0).unwrap();
        assert_eq!(geometry.grid, Vector2::new(0, 13));
        assert!(geometry.is_empty());
        assert_eq!(geometry.cell_count(), 0);
        assert_eq!(geometry.cells().count(), 0);
    }

    // Tests invalid rates surface as domain errors
    // Verified by dividing without a zero check
    #[test]
    fn test_invalid_rates() {
        assert!(matches!(
            MosaicGeometry::new(Vector2::new(10, 10), 4, 0.0),
            Err(MosaicError::DivisionByZero { .. })
        ));
        assert!(matches!(
            MosaicGeometry::new(Vector2::new(10, 10), 4, -2.0),
            Err(MosaicError::TypeMismatch { .. })
        ));
    }

    // Tests cells run with x on the outer loop
    // Verified by swapping loop order
    #[test]
    fn test_cell_order_and_origins() {
        let geometry = MosaicGeometry::new(Vector2::new(2, 3), 5, 1.0).unwrap();
        let cells: Vec<(u32, u32)> = geometry.cells().map(Vector2::to_tuple).collect();
        assert_eq!(
            cells,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert_eq!(geometry.cell_origin(Vector2::new(1, 2)), Vector2::new(5, 10));
    }
}
