#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use std::sync::Arc;

    use test_case::test_case;

    use abut_rs::geometry::ShapeTransform;
    use abut_rs::geometry::primitives::{Outline, Point, Rect};
    use abut_rs::placement::{
        BaselineMode, Composition, EdgeInset, PlacementConfig, PlacementInput, baseline_extent,
        place, silhouette_right_x,
    };
    use abut_rs::util::{FPA, assertions};

    const TOL: f64 = 1e-9;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }

    fn outline(points: &[(f64, f64)]) -> Arc<Outline> {
        let points = points.iter().map(|&(x, y)| Point(x, y)).collect();
        Arc::new(Outline::try_new(points).unwrap())
    }

    /// Axis-aligned square with side `s`, bottom-left corner at the origin.
    fn square(s: f64) -> Arc<Outline> {
        outline(&[(0.0, 0.0), (s, 0.0), (s, s), (0.0, s)])
    }

    /// Diamond with horizontal diagonal `w`, widest at y = 0.
    fn diamond(w: f64) -> Arc<Outline> {
        let h = w / 2.0;
        outline(&[(0.0, 0.0), (h, h), (w, 0.0), (h, -h)])
    }

    fn row(outlines: &[Arc<Outline>], config: &PlacementConfig) -> Composition {
        let inputs: Vec<PlacementInput> = outlines
            .iter()
            .map(|o| PlacementInput::new(o.clone(), ShapeTransform::identity()))
            .collect();
        place(&inputs, config)
    }

    #[test]
    fn single_square_starts_at_zero() {
        init_logger();
        let comp = row(&[square(100.0)], &PlacementConfig::default());
        assert!(comp.bounds.x_min.abs() < TOL);
        assert!((comp.width() - 100.0).abs() < TOL);
        assert!((comp.height() - 100.0).abs() < TOL);
    }

    #[test]
    fn vertical_center_straddles_baseline() {
        init_logger();
        let comp = row(&[square(100.0)], &PlacementConfig::default());
        let bbox = comp.placed[0].world_bbox();
        assert!((bbox.y_min + 50.0).abs() < TOL);
        assert!((bbox.y_max - 50.0).abs() < TOL);
    }

    #[test]
    fn origin_mode_keeps_local_origin_on_baseline() {
        init_logger();
        let config = PlacementConfig {
            baseline: BaselineMode::Origin,
            ..PlacementConfig::default()
        };
        let comp = row(&[square(100.0)], &config);
        let bbox = comp.placed[0].world_bbox();
        assert!(bbox.y_min.abs() < TOL);
        assert!((bbox.y_max - 100.0).abs() < TOL);
    }

    #[test_case(2; "two shapes")]
    #[test_case(4; "four shapes")]
    #[test_case(7; "seven shapes")]
    fn squares_overlap_by_exactly_the_bias(n: usize) {
        init_logger();
        let config = PlacementConfig::default();
        let outlines: Vec<_> = (0..n).map(|_| square(100.0)).collect();
        let comp = row(&outlines, &config);

        for pair in comp.placed.windows(2) {
            let prev = pair[0].world_bbox();
            let next = pair[1].world_bbox();
            assert!((prev.x_max - next.x_min - config.contact_bias).abs() < TOL);
        }
        let expected = n as f64 * 100.0 - (n - 1) as f64 * config.contact_bias;
        assert_eq!(FPA(comp.width()), FPA(expected));
    }

    #[test]
    fn zero_bias_squares_touch_exactly() {
        init_logger();
        let config = PlacementConfig {
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let comp = row(&[square(100.0), square(60.0), square(100.0)], &config);
        for pair in comp.placed.windows(2) {
            let prev = pair[0].world_bbox();
            let next = pair[1].world_bbox();
            assert!((prev.x_max - next.x_min).abs() < TOL);
        }
        assert!(assertions::no_residual_overlap(&comp.placed, 200, 1e-6));
    }

    #[test]
    fn diamonds_meet_at_their_widest_points() {
        init_logger();
        let config = PlacementConfig {
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let comp = row(&[diamond(100.0), diamond(100.0)], &config);
        let prev = comp.placed[0].world_bbox();
        let next = comp.placed[1].world_bbox();
        assert!((prev.x_max - next.x_min).abs() < TOL);
        assert!(assertions::no_residual_overlap(&comp.placed, 200, 1e-6));
    }

    #[test_case(0.0; "0 deg")]
    #[test_case(45.0; "45 deg")]
    #[test_case(90.0; "90 deg")]
    #[test_case(135.0; "135 deg")]
    #[test_case(180.0; "180 deg")]
    #[test_case(-135.0; "minus 135 deg")]
    #[test_case(-90.0; "minus 90 deg")]
    #[test_case(-45.0; "minus 45 deg")]
    fn rotated_rows_stay_bounded_and_nearly_contact(angle_deg: f64) {
        init_logger();
        let config = PlacementConfig {
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let t = ShapeTransform::from_rotation(angle_deg.to_radians());
        let inputs: Vec<_> = (0..4)
            .map(|_| PlacementInput {
                outline: square(100.0),
                transform: t,
                inset: EdgeInset::NONE,
            })
            .collect();
        let comp = place(&inputs, &config);

        // Identical parallel-edged squares meet exactly at their rotated
        // bbox edge at every snap angle, so the row spans four extents and
        // the dense rescan finds no residual overlap.
        let unit = comp.placed[0].world_bbox().width();
        assert!((comp.width() - 4.0 * unit).abs() < 1e-6);
        assert!(assertions::no_residual_overlap(&comp.placed, 200, 1e-6));
    }

    #[test_case(0.2; "min scale")]
    #[test_case(1.0; "unit scale")]
    #[test_case(5.0; "max scale")]
    fn scale_multiplies_extents(scale: f64) {
        init_logger();
        let input = PlacementInput {
            outline: square(100.0),
            transform: ShapeTransform::new(0.0, scale),
            inset: EdgeInset::NONE,
        };
        let comp = place(&[input], &PlacementConfig::default());
        assert!((comp.width() - 100.0 * scale).abs() < TOL);
        assert!((comp.height() - 100.0 * scale).abs() < TOL);
    }

    #[test_case(0.0; "0 deg")]
    #[test_case(45.0; "45 deg")]
    #[test_case(90.0; "90 deg")]
    #[test_case(135.0; "135 deg")]
    #[test_case(180.0; "180 deg")]
    #[test_case(-135.0; "minus 135 deg")]
    #[test_case(-90.0; "minus 90 deg")]
    #[test_case(-45.0; "minus 45 deg")]
    fn identical_pairs_keep_the_bias_at_any_snap_angle_and_scale(angle_deg: f64) {
        init_logger();
        let config = PlacementConfig::default();
        for scale in [0.2, 1.0, 5.0] {
            let t = ShapeTransform::new(angle_deg.to_radians(), scale);
            let inputs: Vec<_> = (0..2)
                .map(|_| PlacementInput {
                    outline: square(100.0),
                    transform: t,
                    inset: EdgeInset::NONE,
                })
                .collect();
            let comp = place(&inputs, &config);

            let prev = comp.placed[0].world_bbox();
            let next = comp.placed[1].world_bbox();
            assert!(
                (prev.x_max - next.x_min - config.contact_bias).abs() < 1e-6,
                "angle {angle_deg}, scale {scale}"
            );
            assert!((comp.width() - (2.0 * prev.width() - config.contact_bias)).abs() < 1e-6);
        }
    }

    #[test]
    fn full_turn_equals_no_rotation() {
        init_logger();
        let config = PlacementConfig::default();
        let plain = row(&[square(100.0), square(100.0)], &config);
        let t = ShapeTransform::from_rotation(2.0 * PI);

        // A full turn returns every sample point to where it started.
        let outline = square(100.0);
        for (orig, turned) in outline.points().iter().zip(outline.transformed_points(&t)) {
            assert!(orig.distance_to(&turned) < 1e-9);
        }

        let inputs: Vec<_> = (0..2)
            .map(|_| PlacementInput {
                outline: square(100.0),
                transform: t,
                inset: EdgeInset::NONE,
            })
            .collect();
        let turned = place(&inputs, &config);
        assert!((plain.width() - turned.width()).abs() < 1e-6);
        assert!((plain.height() - turned.height()).abs() < 1e-6);
    }

    #[test]
    fn rotated_square_spans_its_diagonal() {
        init_logger();
        let t = ShapeTransform::from_rotation(PI / 4.0);
        let input = PlacementInput {
            outline: square(100.0),
            transform: t,
            inset: EdgeInset::NONE,
        };
        let comp = place(&[input], &PlacementConfig::default());
        assert!((comp.width() - 100.0 * 2.0_f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn left_inset_shifts_the_first_shape_left() {
        init_logger();
        let input = PlacementInput {
            outline: square(100.0),
            transform: ShapeTransform::identity(),
            inset: EdgeInset {
                left_frac: 0.25,
                right_frac: 0.0,
            },
        };
        let comp = place(&[input], &PlacementConfig::default());
        assert!((comp.bounds.x_min + 25.0).abs() < TOL);
    }

    #[test]
    fn right_inset_pulls_a_clear_successor_closer() {
        init_logger();
        // The bar sits entirely above the square's vertical span, so the
        // correction pass finds nothing to push back out.
        let config = PlacementConfig {
            baseline: BaselineMode::Origin,
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let inputs = [
            PlacementInput {
                outline: square(100.0),
                transform: ShapeTransform::identity(),
                inset: EdgeInset {
                    left_frac: 0.0,
                    right_frac: 0.25,
                },
            },
            PlacementInput::new(
                outline(&[(0.0, 150.0), (80.0, 150.0), (80.0, 200.0), (0.0, 200.0)]),
                ShapeTransform::identity(),
            ),
        ];
        let comp = place(&inputs, &config);
        let next = comp.placed[1].world_bbox();
        assert!((next.x_min - 75.0).abs() < TOL);
    }

    #[test]
    fn overlap_correction_pushes_a_wide_claimant_out() {
        init_logger();
        // Left-notched bar: its baseline extent starts at the notch apex
        // (x = 50), well inside its true left boundary. The correction pass
        // must push it back out to the square's right face.
        let config = PlacementConfig {
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let notched = outline(&[
            (0.0, -50.0),
            (50.0, 0.0),
            (0.0, 50.0),
            (100.0, 50.0),
            (100.0, -50.0),
        ]);
        let inputs = [
            PlacementInput::new(square(100.0), ShapeTransform::identity()),
            PlacementInput::new(notched, ShapeTransform::identity()),
        ];
        let comp = place(&inputs, &config);
        let next = comp.placed[1].world_bbox();
        assert!((next.x_min - 100.0).abs() < TOL);
        assert!(assertions::no_residual_overlap(&comp.placed, 200, 1e-6));
    }

    #[test]
    fn above_baseline_shape_falls_back_to_bbox_extent() {
        init_logger();
        let config = PlacementConfig {
            baseline: BaselineMode::Origin,
            contact_bias: 0.0,
            ..PlacementConfig::default()
        };
        let floater = outline(&[(0.0, 10.0), (100.0, 10.0), (100.0, 110.0), (0.0, 110.0)]);
        let comp = row_with_config(&[floater.clone(), floater], &config);
        let next = comp.placed[1].world_bbox();
        assert!((next.x_min - 100.0).abs() < TOL);
    }

    fn row_with_config(outlines: &[Arc<Outline>], config: &PlacementConfig) -> Composition {
        let inputs: Vec<PlacementInput> = outlines
            .iter()
            .map(|o| PlacementInput::new(o.clone(), ShapeTransform::identity()))
            .collect();
        place(&inputs, config)
    }

    #[test]
    fn empty_outline_occupies_no_width() {
        init_logger();
        let config = PlacementConfig::default();
        let inputs = [
            PlacementInput::new(square(100.0), ShapeTransform::identity()),
            PlacementInput::new(Arc::new(Outline::empty()), ShapeTransform::identity()),
            PlacementInput::new(square(100.0), ShapeTransform::identity()),
        ];
        let comp = place(&inputs, &config);
        assert_eq!(comp.placed.len(), 3);
        let last = comp.placed[2].world_bbox();
        assert!((last.x_min - (100.0 - config.contact_bias)).abs() < TOL);
        assert_eq!(FPA(comp.width()), FPA(200.0 - config.contact_bias));
    }

    #[test]
    fn all_empty_outlines_yield_zero_bounds() {
        init_logger();
        let inputs = [
            PlacementInput::new(Arc::new(Outline::empty()), ShapeTransform::identity()),
            PlacementInput::new(Arc::new(Outline::empty()), ShapeTransform::identity()),
        ];
        let comp = place(&inputs, &PlacementConfig::default());
        assert_eq!(comp.bounds, Rect::ZERO);
    }

    #[test]
    fn no_inputs_yield_empty_composition() {
        init_logger();
        let comp = place(&[], &PlacementConfig::default());
        assert!(comp.placed.is_empty());
        assert_eq!(comp.bounds, Rect::ZERO);
    }

    #[test]
    fn four_shape_row_matches_the_reference_layout() {
        init_logger();
        let config = PlacementConfig::default();
        let first = ShapeTransform::from_rotation(45.0_f64.to_radians());
        let mut inputs = vec![PlacementInput {
            outline: square(100.0),
            transform: first,
            inset: EdgeInset::NONE,
        }];
        inputs.extend((0..3).map(|_| PlacementInput::new(square(100.0), ShapeTransform::identity())));
        let comp = place(&inputs, &config);

        // One diamond followed by three touching squares, each pulled back
        // by the bias.
        let expected = 100.0 * 2.0_f64.sqrt() + 3.0 * 100.0 - 3.0 * config.contact_bias;
        assert!(comp.bounds.x_min.abs() < 1e-6);
        assert!((comp.width() - expected).abs() < 1e-6);
        assert!(assertions::row_claims_in_order(
            &comp.placed,
            config.contact_bias,
            1e-6
        ));
    }

    #[test]
    fn reordering_the_row_keeps_every_pair_in_contact() {
        init_logger();
        let config = PlacementConfig::default();
        let forward = row(
            &[square(100.0), diamond(80.0), square(30.0)],
            &config,
        );
        let backward = row(
            &[square(30.0), diamond(80.0), square(100.0)],
            &config,
        );

        for comp in [&forward, &backward] {
            for pair in comp.placed.windows(2) {
                let prev = pair[0].world_bbox();
                let next = pair[1].world_bbox();
                assert!((prev.x_max - next.x_min - config.contact_bias).abs() < 1e-6);
            }
            assert!(assertions::row_claims_in_order(
                &comp.placed,
                config.contact_bias,
                1e-6
            ));
        }
        assert!((forward.width() - backward.width()).abs() < TOL);
    }

    #[test]
    fn bounds_grow_monotonically_with_each_shape() {
        init_logger();
        let config = PlacementConfig::default();
        let outlines = [square(100.0), diamond(80.0), square(30.0), diamond(200.0)];
        let mut prev_bounds = Rect::ZERO;
        for n in 1..=outlines.len() {
            let comp = row(&outlines[..n], &config);
            assert!(comp.bounds.encloses(&prev_bounds), "prefix of {n}");
            prev_bounds = comp.bounds;
        }
    }

    #[test]
    fn bounds_envelop_every_shape() {
        init_logger();
        let comp = row(
            &[square(100.0), diamond(80.0), square(30.0), diamond(200.0)],
            &PlacementConfig::default(),
        );
        assert!(assertions::bounds_envelop_shapes(
            &comp.placed,
            &comp.bounds,
            1e-9
        ));
        assert!((comp.height() - 200.0).abs() < TOL);
    }

    #[test]
    fn baseline_extent_interpolates_crossing_edges() {
        let points = [
            Point(0.0, -50.0),
            Point(100.0, -50.0),
            Point(100.0, 50.0),
            Point(0.0, 50.0),
        ];
        let bbox = Rect::try_new(0.0, -50.0, 100.0, 50.0).unwrap();
        let (left, right) = baseline_extent(&points, &bbox, 0.0, 1e-10);
        assert!((left - 0.0).abs() < TOL);
        assert!((right - 100.0).abs() < TOL);
    }

    #[test]
    fn silhouette_misses_outside_the_polygon() {
        let points = [Point(0.0, 0.0), Point(50.0, 50.0), Point(100.0, 0.0)];
        assert!(silhouette_right_x(&points, 60.0, 1e-10).is_none());
        let hit = silhouette_right_x(&points, 25.0, 1e-10).unwrap();
        assert!((hit - 75.0).abs() < TOL);
    }
}
