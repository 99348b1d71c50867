//! End-to-end checks of the frame-render operations against retained
//! figures, plus the active-figure registry lifecycle.

use approx::assert_relative_eq;
use framevis_plot::{
    new_plot2d, plot_arrow3d_on, plot_point2d, plot_pose2d_on, plot_pose3d_on, plot_rot2d_on,
    state, ArrowOptions, Figure2, Figure3, FigureConfig, FrameOptions, PlotElement2, PlotElement3,
    PlotError, PointOptions,
};
use glam::{DAffine2, DAffine3, DMat2, DQuat, DVec2, DVec3, Vec4};
use std::f64::consts::FRAC_PI_2;

const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

fn point_at(element: &PlotElement2) -> DVec2 {
    match element {
        PlotElement2::Point(marker) => marker.position,
        other => panic!("expected point, got {other:?}"),
    }
}

fn text_of(element: &PlotElement2) -> (&str, DVec2, Vec4) {
    match element {
        PlotElement2::Text(label) => (label.text.as_str(), label.position, label.color),
        other => panic!("expected text, got {other:?}"),
    }
}

fn arrow_of(element: &PlotElement2) -> (DVec2, DVec2) {
    match element {
        PlotElement2::Arrow(arrow) => (arrow.start, arrow.end),
        other => panic!("expected arrow, got {other:?}"),
    }
}

#[test]
fn identity_pose2d_submits_the_exact_primitive_sequence() {
    let mut fig = Figure2::new();
    let identity = DAffine2::IDENTITY;
    let opts = FrameOptions::new().with_frame("A").with_color("blue");
    plot_pose2d_on(&mut fig, &identity, &opts).unwrap();

    let elements = fig.elements();
    assert_eq!(elements.len(), 6);

    assert_eq!(point_at(&elements[0]), DVec2::ZERO);

    let (text, pos, color) = text_of(&elements[1]);
    assert_eq!(text, "{A}");
    assert_eq!(pos, DVec2::new(-0.25, -0.25));
    assert_eq!(color, BLUE);

    let (start, end) = arrow_of(&elements[2]);
    assert_eq!(start, DVec2::ZERO);
    assert_eq!(end, DVec2::new(1.0, 0.0));

    let (text, pos, _) = text_of(&elements[3]);
    assert_eq!(text, "X_A");
    assert_relative_eq!(pos.x, 1.1, epsilon = 1e-12);
    assert_relative_eq!(pos.y, -0.1, epsilon = 1e-12);

    let (start, end) = arrow_of(&elements[4]);
    assert_eq!(start, DVec2::ZERO);
    assert_eq!(end, DVec2::new(0.0, 1.0));

    let (text, pos, _) = text_of(&elements[5]);
    assert_eq!(text, "Y_A");
    assert_relative_eq!(pos.x, -0.1, epsilon = 1e-12);
    assert_relative_eq!(pos.y, 1.1, epsilon = 1e-12);
}

#[test]
fn rotated_pose2d_tips_equal_the_transformed_basis_vectors() {
    let mut fig = Figure2::new();
    let pose = DAffine2::from_angle_translation(FRAC_PI_2, DVec2::new(1.0, 2.0));
    plot_pose2d_on(&mut fig, &pose, &FrameOptions::new().with_frame("B")).unwrap();

    assert_eq!(point_at(&fig.elements()[0]), DVec2::new(1.0, 2.0));

    let (_, x_tip) = arrow_of(&fig.elements()[2]);
    assert_relative_eq!(x_tip.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(x_tip.y, 3.0, epsilon = 1e-12);

    let (_, y_tip) = arrow_of(&fig.elements()[4]);
    assert_relative_eq!(y_tip.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(y_tip.y, 2.0, epsilon = 1e-12);
}

#[test]
fn rotation_only_renders_at_the_origin() {
    let mut fig = Figure2::new();
    plot_rot2d_on(&mut fig, &DMat2::from_angle(FRAC_PI_2), &FrameOptions::new()).unwrap();
    assert_eq!(point_at(&fig.elements()[0]), DVec2::ZERO);
}

#[test]
fn pose3d_origin_lands_on_the_translation() {
    let mut fig = Figure3::new();
    let pose = DAffine3::from_rotation_translation(
        DQuat::from_rotation_z(FRAC_PI_2),
        DVec3::new(0.5, -1.0, 2.0),
    );
    plot_pose3d_on(&mut fig, &pose, &FrameOptions::new().with_frame("C")).unwrap();

    assert_eq!(fig.len(), 8);
    match &fig.elements()[0] {
        PlotElement3::Point(marker) => {
            assert_eq!(marker.position, DVec3::new(0.5, -1.0, 2.0));
        }
        other => panic!("expected point, got {other:?}"),
    }
    // Every arrow starts at the translated origin and ends 1 unit away.
    for element in fig.elements() {
        if let PlotElement3::Arrow(arrow) = element {
            assert_eq!(arrow.start, DVec3::new(0.5, -1.0, 2.0));
            assert_relative_eq!(arrow.length(), 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn identical_renders_produce_identical_primitive_sequences() {
    let pose = DAffine2::from_angle_translation(0.7, DVec2::new(-0.3, 0.9));
    let opts = FrameOptions::new().with_frame("A").with_color("r");

    let mut first = Figure2::new();
    let mut second = Figure2::new();
    plot_pose2d_on(&mut first, &pose, &opts).unwrap();
    plot_pose2d_on(&mut second, &pose, &opts).unwrap();

    assert_eq!(first.elements(), second.elements());
}

#[test]
fn zero_length_arrow3d_reports_the_offending_endpoints() {
    let mut fig = Figure3::new();
    let err =
        plot_arrow3d_on(&mut fig, DVec3::ONE, DVec3::ONE, &ArrowOptions::new()).unwrap_err();
    match &err {
        PlotError::DegenerateArrow { op, start, end } => {
            assert_eq!(*op, "plot_arrow3d");
            assert_eq!(*start, DVec3::ONE);
            assert_eq!(*end, DVec3::ONE);
        }
        other => panic!("expected degenerate-arrow error, got {other:?}"),
    }
    assert!(err.to_string().contains("plot_arrow3d"));
    assert!(fig.is_empty());
}

// The registry is process-wide, so its whole lifecycle lives in one test.
#[test]
fn active_figure_registry_lifecycle() {
    let first = new_plot2d(&FigureConfig::new());
    assert_eq!(state::active_figure2_handle(), first);

    let snapshot = state::active_figure2();
    assert_eq!(snapshot.x_limits, Some((-2.0, 2.0)));
    assert_eq!(snapshot.x_label.as_deref(), Some("X"));
    assert_eq!(snapshot.tick_step, Some(1.0));
    assert!(snapshot.is_empty());

    // Ops without an explicit surface land on the active figure.
    plot_point2d(DVec2::ZERO, &PointOptions::new()).unwrap();
    assert_eq!(state::figure2(first).unwrap().len(), 1);

    // A second figure becomes active; the first keeps its primitives.
    let second = new_plot2d(&FigureConfig::new().with_limits((-5.0, 5.0)));
    assert_ne!(first, second);
    assert_eq!(state::active_figure2_handle(), second);
    plot_point2d(DVec2::X, &PointOptions::new()).unwrap();
    assert_eq!(state::figure2(first).unwrap().len(), 1);
    assert_eq!(state::figure2(second).unwrap().len(), 1);

    // Selecting back and clearing empties only the first figure.
    state::select_figure2(first);
    state::clear_figure2(None).unwrap();
    assert!(state::figure2(first).unwrap().is_empty());
    assert_eq!(state::figure2(second).unwrap().len(), 1);

    // Unknown handles are reported, not invented.
    let bogus = framevis_plot::FigureHandle::from(9999);
    assert_eq!(
        state::clear_figure2(Some(bogus)).unwrap_err(),
        PlotError::UnknownFigure { handle: 9999 }
    );

    // Closing everything re-seeds a default figure so the active handle
    // still resolves.
    state::close_figure2(Some(first)).unwrap();
    state::close_figure2(Some(second)).unwrap();
    let reseeded = state::active_figure2_handle();
    assert!(state::figure2(reseeded).is_some());
}
