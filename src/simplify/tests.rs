use approx::assert_relative_eq;
use nalgebra::Point3;

use super::*;
use crate::misc::Circle3;
use crate::polyline::Polyline3;

fn simplifier(tolerance: f64) -> BiarcSimplifier<f64> {
    BiarcSimplifier::try_new(tolerance).unwrap()
}

fn unit_arc_points() -> Vec<Point3<f64>> {
    vec![
        Point3::new(-1., 0., 0.),
        Point3::new(0., 1., 0.),
        Point3::new(1., 0., 0.),
    ]
}

#[test]
fn arc_of_three_points_fits_a_single_circle() {
    let line = Polyline3::from_points(unit_arc_points());
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    assert_eq!(result.polyline().len(), 3);
    // endpoints are preserved, the interior point stays on the circle
    assert_relative_eq!(result.polyline().points()[0], Point3::new(-1., 0., 0.));
    assert_relative_eq!(result.polyline().points()[2], Point3::new(1., 0., 0.));
    assert_relative_eq!(
        result.polyline().points()[1].coords.norm(),
        1.,
        epsilon = 1e-12
    );
}

#[test]
fn four_point_compound_folds_into_a_single_run() {
    let mut points = unit_arc_points();
    points.push(Point3::new(2., 0., 0.));
    let line = Polyline3::from_points(points);
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
}

#[test]
fn mirrored_compound_yields_two_runs() {
    let mut points = unit_arc_points();
    points.extend([
        Point3::new(2., 0., 0.),
        Point3::new(3., 1., 0.),
        Point3::new(4., 0., 0.),
        Point3::new(3., -1., 0.),
        Point3::new(2., 0., 0.),
    ]);
    let line = Polyline3::from_points(points);
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 2);
}

#[test]
fn two_points_pass_through_unchanged() {
    let line = Polyline3::from_points(vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 2., 3.),
    ]);
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    assert_eq!(result.polyline(), &line);
}

#[test]
fn collinear_points_reduce_to_a_line() {
    let line = Polyline3::from_points(
        (0..5)
            .map(|i| Point3::new(i as f64, 0., 0.))
            .collect::<Vec<_>>(),
    );
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    assert_eq!(result.polyline().len(), 2);
    assert_relative_eq!(result.polyline().points()[0], Point3::new(0., 0., 0.));
    assert_relative_eq!(result.polyline().points()[1], Point3::new(4., 0., 0.));
}

#[test]
fn lines_are_preferred_over_circles_when_both_fit() {
    // a circle passes exactly through these, but the chord is within
    // tolerance of the middle point
    let line = Polyline3::from_points(vec![
        Point3::new(-1., 0., 0.),
        Point3::new(0., 0.01, 0.),
        Point3::new(1., 0., 0.),
    ]);
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    assert_eq!(result.polyline().len(), 2);
}

#[test]
fn coincident_points_do_not_produce_nan() {
    let p = Point3::new(1., 2., 3.);
    let line = Polyline3::from_points(vec![p; 4]);
    let result = simplifier(0.1).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    assert_eq!(result.polyline().len(), 2);
    for point in result.polyline().iter() {
        assert!(point.coords.iter().all(|c| c.is_finite()));
        assert_relative_eq!(*point, p);
    }
}

#[test]
fn dense_arc_simplifies_to_a_single_run_within_tolerance() {
    let circle = Circle3::try_from_points(
        &Point3::new(-1., 0., 0.),
        &Point3::new(0., 1., 0.),
        &Point3::new(1., 0., 0.),
    )
    .unwrap();
    let tolerance = 1e-3;
    // three quarters of the circle, densely sampled
    let samples = circle.sample(16).into_iter().take(13).collect::<Vec<_>>();
    let line = Polyline3::from_points(samples.clone());
    let result = simplifier(tolerance).simplify(&line).unwrap();
    assert_eq!(result.runs(), 1);
    for sample in &samples {
        let distance = result.polyline().squared_distance(sample).unwrap();
        assert!(distance <= tolerance * tolerance);
    }
}

#[test]
fn zigzag_terminates_with_bounded_runs() {
    let points = (0..10)
        .map(|i| Point3::new(i as f64, if i % 2 == 0 { 0. } else { 0.5 }, 0.))
        .collect::<Vec<_>>();
    let line = Polyline3::from_points(points);
    let result = simplifier(0.05).simplify(&line).unwrap();
    assert!(result.runs() >= 1);
    assert!(result.runs() <= line.len() - 1);
    assert_relative_eq!(
        *result.polyline().first_point().unwrap(),
        *line.first_point().unwrap()
    );
    assert_relative_eq!(
        *result.polyline().last_point().unwrap(),
        *line.last_point().unwrap()
    );
}

#[test]
fn tolerance_must_be_positive_and_finite() {
    assert!(BiarcSimplifier::try_new(0.).is_err());
    assert!(BiarcSimplifier::try_new(-0.1).is_err());
    assert!(BiarcSimplifier::try_new(f64::NAN).is_err());
    assert!(BiarcSimplifier::try_new(f64::INFINITY).is_err());
}

#[test]
fn inputs_without_a_segment_are_rejected() {
    let simplifier = simplifier(0.05);
    assert!(simplifier.simplify(&Polyline3::new()).is_err());
    let single = Polyline3::from_points(vec![Point3::new(0., 0., 0.)]);
    assert!(simplifier.simplify(&single).is_err());
}

mod wedge {
    use super::*;

    #[test]
    fn arc_run_yields_a_bounded_wedge_through_the_run_start() {
        let points = unit_arc_points();
        let wedge = find_wedge(&points, 0.05).unwrap();
        assert!(!wedge.is_degenerate());
        let (plane1, plane2) = wedge.boundaries();
        assert_relative_eq!(plane1.signed_distance(&points[0]), 0., epsilon = 1e-12);
        assert_relative_eq!(plane2.signed_distance(&points[0]), 0., epsilon = 1e-12);
    }

    #[test]
    fn coincident_endpoints_collapse_the_wedge() {
        let p = Point3::new(1., 1., 1.);
        let points = vec![p, Point3::new(2., 0., 0.), p];
        let wedge = find_wedge(&points, 0.05).unwrap();
        assert!(wedge.is_degenerate());
    }

    #[test]
    fn collinear_run_is_unconstrained() {
        let points = vec![
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(2., 0., 0.),
        ];
        let wedge = find_wedge(&points, 0.05).unwrap();
        assert!(!wedge.is_degenerate());
    }
}

mod circle_fit {
    use super::*;

    #[test]
    fn collinear_run_fits_a_line() {
        let points = (0..4)
            .map(|i| Point3::new(i as f64, 0., 0.))
            .collect::<Vec<_>>();
        let wedge = find_wedge(&points, 0.05).unwrap();
        let control = fit_run(&points, &wedge, 0.05).unwrap();
        assert_eq!(control.len(), 2);
        assert_relative_eq!(control[0], points[0]);
        assert_relative_eq!(control[1], points[3]);
    }

    #[test]
    fn arc_run_fits_a_circle_with_snapped_interior() {
        let points = unit_arc_points();
        let wedge = find_wedge(&points, 0.05).unwrap();
        let control = fit_run(&points, &wedge, 0.05).unwrap();
        assert_eq!(control.len(), 3);
        assert_relative_eq!(control[1].coords.norm(), 1., epsilon = 1e-12);
    }

    #[test]
    fn runs_outside_every_candidate_circle_do_not_fit() {
        let points = vec![
            Point3::new(0., 0., 0.),
            Point3::new(1., 5., 0.),
            Point3::new(2., -5., 0.),
            Point3::new(3., 0., 0.),
        ];
        let wedge = find_wedge(&points, 0.01).unwrap();
        assert!(fit_run(&points, &wedge, 0.01).is_none());
    }

    #[test]
    fn collapsed_runs_without_a_line_fit_fail() {
        let p = Point3::new(0., 0., 0.);
        let points = vec![p, Point3::new(5., 0., 0.), p];
        let wedge = find_wedge(&points, 0.1).unwrap();
        assert!(wedge.is_degenerate());
        assert!(fit_run(&points, &wedge, 0.1).is_none());
    }
}
