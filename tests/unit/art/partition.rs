//! Tests for entry point validation and the recursive partitioner

#[cfg(test)]
mod tests {
    use mondrian::art::palette::Color;
    use mondrian::art::partition::{
        Mode, PartitionStats, paint, paint_basic, paint_complex, split_point, validate_canvas,
    };
    use mondrian::io::configuration::MIN_CANVAS_DIMENSION;
    use mondrian::math::random::{ScriptedRandom, SeededRandom};
    use mondrian::spatial::{Canvas, PixelGrid};
    use mondrian::MondrianError;

    /// Canvas that remembers the order of every write
    struct RecordingCanvas {
        grid: PixelGrid,
        writes: Vec<(usize, usize)>,
    }

    impl Canvas for RecordingCanvas {
        fn width(&self) -> usize {
            self.grid.width()
        }

        fn height(&self) -> usize {
            self.grid.height()
        }

        fn get(&self, row: usize, col: usize) -> Option<Color> {
            self.grid.get(row, col)
        }

        fn set(&mut self, row: usize, col: usize, color: Color) {
            self.writes.push((row, col));
            self.grid.set(row, col, color);
        }
    }

    fn depth_bound(dimension: usize) -> usize {
        let quarter = dimension / 4;
        2 * ((dimension - quarter) / 10 + 1)
    }

    // Tests undersized canvases are rejected without being touched
    // Verified by validating only the width
    #[test]
    fn test_rejects_small_canvases() {
        for (width, height) in [(299, 300), (300, 299), (10, 1_000), (0, 0)] {
            let mut canvas = PixelGrid::new(width, height);
            let before = canvas.clone();
            let mut rng = ScriptedRandom::new([0.5]);

            let basic = paint_basic(&mut canvas, &mut rng);
            let complex = paint_complex(&mut canvas, &mut rng);

            assert!(matches!(
                basic,
                Err(MondrianError::InvalidArgument { minimum: 300, .. })
            ));
            assert!(matches!(
                complex,
                Err(MondrianError::InvalidArgument { minimum: 300, .. })
            ));
            assert_eq!(canvas, before, "canvas {width}x{height} was modified");
            assert_eq!(rng.draws(), 0);
        }
    }

    // Tests an empty canvas stands in for an absent one
    // Verified by skipping validation for empty grids
    #[test]
    fn test_rejects_empty_canvas() {
        let mut canvas = PixelGrid::empty();
        let err = paint(&mut canvas, &mut SeededRandom::new(1), Mode::Complex).unwrap_err();

        match err {
            MondrianError::InvalidArgument { width, height, .. } => {
                assert_eq!((width, height), (0, 0));
            }
            other => unreachable!("Expected InvalidArgument, got {other}"),
        }
    }

    // Tests the boundary size is accepted
    // Verified by using a strict comparison against the minimum
    #[test]
    fn test_validate_canvas_boundary() {
        let canvas = PixelGrid::new(MIN_CANVAS_DIMENSION, MIN_CANVAS_DIMENSION);
        assert!(validate_canvas(&canvas).is_ok());

        let canvas = PixelGrid::new(MIN_CANVAS_DIMENSION - 1, MIN_CANVAS_DIMENSION);
        assert!(validate_canvas(&canvas).is_err());
    }

    // Tests painted canvases hold palette colors plus black borders
    // Verified by skipping the border offset in rectangle fill
    #[test]
    fn test_painted_colors_and_borders() {
        for mode in [Mode::Basic, Mode::Complex] {
            let mut canvas = PixelGrid::new(400, 320);
            let stats = paint(&mut canvas, &mut SeededRandom::new(11), mode).unwrap();

            assert!(stats.leaves() > 0);
            assert!(canvas.count(Color::Black) > 0, "borders missing in {mode:?}");
            assert!(canvas.colors().any(Color::is_fill), "no fills in {mode:?}");
            // The outer ring of the canvas always belongs to some region border
            assert_eq!(canvas.get(0, 0), Some(Color::Black));
            assert_eq!(canvas.get(319, 399), Some(Color::Black));
        }
    }

    // Tests identical seeds paint identical canvases
    // Verified by drawing split points from a fresh thread RNG
    #[test]
    fn test_deterministic_with_seed() {
        for mode in [Mode::Basic, Mode::Complex] {
            let mut first = PixelGrid::new(360, 300);
            let mut second = PixelGrid::new(360, 300);

            let stats_a = paint(&mut first, &mut SeededRandom::new(2024), mode).unwrap();
            let stats_b = paint(&mut second, &mut SeededRandom::new(2024), mode).unwrap();

            assert_eq!(first, second);
            assert_eq!(stats_a, stats_b);
        }

        let mut a = PixelGrid::new(300, 300);
        let mut b = PixelGrid::new(300, 300);
        paint_complex(&mut a, &mut SeededRandom::new(1)).unwrap();
        paint_complex(&mut b, &mut SeededRandom::new(2)).unwrap();
        assert_ne!(a, b);
    }

    // Tests basic mode only ever paints rectangles
    // Verified by dispatching on a random strategy in basic mode
    #[test]
    fn test_basic_mode_rectangles_only() {
        for seed in 0..10 {
            let mut canvas = PixelGrid::new(300, 300);
            let stats = paint(&mut canvas, &mut SeededRandom::new(seed), Mode::Basic).unwrap();

            assert_eq!(stats.circles, 0);
            assert_eq!(stats.squares, 0);
            assert_eq!(stats.rectangles, stats.leaves());
        }
    }

    // Tests complex mode uses every strategy across a handful of artworks
    // Verified by always choosing the rectangle strategy
    #[test]
    fn test_complex_mode_mixes_strategies() {
        let mut total = PartitionStats::default();
        for seed in 0..10 {
            let mut canvas = PixelGrid::new(300, 300);
            let stats = paint(&mut canvas, &mut SeededRandom::new(seed), Mode::Complex).unwrap();
            total.rectangles += stats.rectangles;
            total.circles += stats.circles;
            total.squares += stats.squares;
        }

        assert!(total.rectangles > 0);
        assert!(total.circles > 0);
        assert!(total.squares > 0);
    }

    // Tests recursion depth stays under the quarter-threshold bound
    // Verified by splitting with a margin of zero
    #[test]
    fn test_recursion_depth_bounded() {
        let bound = depth_bound(300);
        assert_eq!(bound, 46);

        for seed in 0..25 {
            let mut canvas = PixelGrid::new(300, 300);
            let stats = paint(&mut canvas, &mut SeededRandom::new(seed), Mode::Complex).unwrap();
            assert!(stats.max_depth <= bound, "seed {seed}: depth {}", stats.max_depth);
            assert!(stats.max_depth >= 1);
        }

        // Always splitting at the minimum margin gives the deepest chains
        let mut canvas = PixelGrid::new(300, 300);
        let stats = paint(&mut canvas, &mut ScriptedRandom::new([0.0]), Mode::Basic).unwrap();
        assert!(stats.max_depth <= bound);
        assert_eq!(stats.max_depth, 23);
    }

    // Tests a scripted source pins the first leaf to the top-left corner
    // Verified by offsetting the split point by the full margin on both sides
    #[test]
    fn test_scripted_minimum_splits() {
        let mut canvas = PixelGrid::new(300, 300);
        paint_basic(&mut canvas, &mut ScriptedRandom::new([0.0])).unwrap();

        // First leaf is (0, 10, 0, 10); every draw is red
        for row in 1..=8 {
            for col in 1..=8 {
                assert_eq!(canvas.get(row, col), Some(Color::Red));
            }
        }
        assert_eq!(canvas.get(0, 0), Some(Color::Black));
        assert_eq!(canvas.get(9, 5), Some(Color::Black));
        assert_eq!(canvas.get(5, 9), Some(Color::Black));
        assert_eq!(canvas.get(5, 10), Some(Color::Black));
        assert_eq!(
            canvas.count(Color::Red) + canvas.count(Color::Black),
            300 * 300
        );
    }

    // Tests children are visited top-left, top-right, bottom-left, bottom-right
    // Verified by swapping the two bottom recursions
    #[test]
    fn test_child_visit_order() {
        let mut canvas = RecordingCanvas {
            grid: PixelGrid::new(300, 300),
            writes: Vec::new(),
        };
        paint_basic(&mut canvas, &mut ScriptedRandom::new([0.0])).unwrap();

        let first_write = |cell: (usize, usize)| canvas.writes.iter().position(|&w| w == cell);
        let top_left = first_write((1, 1));
        let top_right_first = first_write((1, 11));
        let top_right_last = first_write((1, 231));
        let bottom_left = first_write((11, 1));
        let bottom_right = first_write((11, 11));

        assert!(top_left.is_some());
        assert!(top_left < top_right_first);
        assert!(top_right_first < top_right_last);
        assert!(top_right_last < bottom_left);
        assert!(bottom_left < bottom_right);
    }

    // Tests a 4-way split draws the column before the row
    // Verified by drawing the row split point first
    #[test]
    fn test_four_way_split_draws_column_first() {
        let mut canvas = PixelGrid::new(300, 300);
        let script = std::iter::once(0.9).chain(std::iter::repeat_n(0.0, 100_000));
        paint_basic(&mut canvas, &mut ScriptedRandom::new(script)).unwrap();

        // Root cut lands at column 10 + floor(0.9 * 281) = 262 and row 10
        for row in 0..300 {
            assert_eq!(canvas.get(row, 261), Some(Color::Black), "row {row}");
            assert_eq!(canvas.get(row, 262), Some(Color::Black), "row {row}");
        }
        for col in 0..300 {
            assert_eq!(canvas.get(9, col), Some(Color::Black), "col {col}");
            assert_eq!(canvas.get(10, col), Some(Color::Black), "col {col}");
        }

        // Top-right leaf (262, 300, 0, 10)
        assert_eq!(canvas.get(1, 263), Some(Color::Red));
        assert_eq!(canvas.get(8, 298), Some(Color::Red));
        assert_eq!(canvas.get(1, 299), Some(Color::Black));
    }

    // Tests complex mode draws the fill strategy before the fill color
    // Verified by drawing the color first
    #[test]
    fn test_complex_strategy_drawn_before_color() {
        let mut canvas = PixelGrid::new(300, 300);
        let script = [0.0, 0.0, 0.5]
            .into_iter()
            .chain(std::iter::repeat_n(0.0, 100_000));
        let stats = paint(&mut canvas, &mut ScriptedRandom::new(script), Mode::Complex).unwrap();

        // First leaf (0, 10, 0, 10) is a red circle of radius 4 around (5, 5)
        assert_eq!(stats.circles, 1);
        assert_eq!(stats.squares, 0);
        assert_eq!(canvas.get(5, 5), Some(Color::Red));
        assert_eq!(canvas.get(5, 9), Some(Color::Red));
        assert_eq!(canvas.get(1, 1), Some(Color::Black));
        assert_eq!(canvas.count(Color::Cyan), 0);
    }

    // Tests split points keep the margin on both sides
    // Verified by dropping the margin from the near side
    #[test]
    fn test_split_point_margins() {
        let mut low = ScriptedRandom::new([0.0]);
        assert_eq!(split_point(40, 100, &mut low), 50);

        let mut high = ScriptedRandom::new([1.0]);
        let split = split_point(40, 100, &mut high);
        assert_eq!(split, 130);
        assert_eq!(40 + 100 - split, 10);

        let mut rng = SeededRandom::new(5);
        for _ in 0..1_000 {
            let split = split_point(0, 75, &mut rng);
            assert!((10..=65).contains(&split));
        }
    }

    // Tests mode names used for file naming
    // Verified by capitalizing the names
    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::Basic.name(), "basic");
        assert_eq!(Mode::Complex.name(), "complex");
        assert_eq!(Mode::default(), Mode::Complex);
    }

    // Tests leaf totals sum all strategies
    // Verified by omitting squares from the total
    #[test]
    fn test_partition_stats_leaves() {
        let stats = PartitionStats {
            rectangles: 3,
            circles: 2,
            squares: 1,
            max_depth: 4,
        };

        assert_eq!(stats.leaves(), 6);
    }
}
