// Host-side tests for full frames drawn into a recording surface.

use lissajous_core::{
    CurveRenderer, DrawOp, FrameOutcome, FramePhase, Params, RecordingSurface, RenderError, Rgb,
    Rgba,
};

fn background_color(surface: &RecordingSurface) -> Option<Rgba> {
    surface.ops.iter().find_map(|op| match op {
        DrawOp::FillRoundRect { color, .. } => Some(*color),
        _ => None,
    })
}

fn stroke_color(surface: &RecordingSurface) -> Option<Rgba> {
    surface.ops.iter().find_map(|op| match op {
        DrawOp::SetStrokeStyle(style) => Some(style.color),
        _ => None,
    })
}

#[test]
fn every_frame_draws_points_count_segments() {
    let renderer = CurveRenderer::default();
    let mut params = Params::default();
    for n in [10, 11, 64, 500] {
        params.set_points_count(n);
        let mut surface = RecordingSurface::new();
        let outcome = renderer
            .draw_frame(&mut surface, &params, FramePhase::at(777.0, 20_000.0))
            .unwrap();
        assert_eq!(outcome, FrameOutcome::Drawn { segments: n as usize });
        assert_eq!(surface.segments().count(), n as usize);
        let (first_from, _, _) = surface.segments().next().unwrap();
        let (_, last_to, _) = surface.segments().last().unwrap();
        assert_eq!(first_from, last_to, "loop not closed for n={n}");
    }
}

#[test]
fn reversing_colors_swaps_fill_and_stroke() {
    let renderer = CurveRenderer::default();
    let mut params = Params::default();
    params.set_background(Rgb::new(10, 20, 30));
    params.set_foreground(Rgb::new(200, 100, 50));
    params.set_opacity(0.5);

    let mut before = RecordingSurface::new();
    renderer
        .draw_frame(&mut before, &params, FramePhase::default())
        .unwrap();
    params.reverse_colors();
    let mut after = RecordingSurface::new();
    renderer
        .draw_frame(&mut after, &params, FramePhase::default())
        .unwrap();

    assert_eq!(background_color(&before).unwrap().rgb, Rgb::new(10, 20, 30));
    assert_eq!(background_color(&after).unwrap().rgb, Rgb::new(200, 100, 50));
    assert_eq!(stroke_color(&after).unwrap().rgb, Rgb::new(10, 20, 30));
    // background is always opaque, the stroke carries the opacity
    assert_eq!(background_color(&after).unwrap().alpha, 1.0);
    assert_eq!(stroke_color(&after).unwrap().alpha, 0.5);
}

#[test]
fn failed_frame_does_not_poison_the_next() {
    let renderer = CurveRenderer::default();
    let params = Params::default();
    let mut surface = RecordingSurface::failing_at(0);
    let err = renderer.draw_frame(&mut surface, &params, FramePhase::default());
    assert!(matches!(err, Err(RenderError::Surface(_))));
    assert_eq!(surface.depth(), 0);

    surface.clear();
    surface.fail_stroke_at = None;
    let ok = renderer.draw_frame(&mut surface, &params, FramePhase::default());
    assert_eq!(ok, Ok(FrameOutcome::Drawn { segments: 500 }));
}

#[test]
fn zero_point_count_only_paints_background() {
    let params = Params::default().with_raw(2.0, 3.0, 0, 20_000.0);
    let mut surface = RecordingSurface::new();
    let outcome = CurveRenderer::default()
        .draw_frame(&mut surface, &params, FramePhase::default())
        .unwrap();
    assert_eq!(outcome, FrameOutcome::CurveSkipped);
    assert!(background_color(&surface).is_some());
    assert!(stroke_color(&surface).is_none());
}
