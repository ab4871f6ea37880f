use super::*;

fn drawn(dash_len: f64, delay_ms: u64, duration_ms: u64) -> OutlineStyle {
    OutlineStyle::Drawn {
        dash_len,
        delay_ms,
        duration_ms,
    }
}

#[test]
fn strokes_stay_hidden_until_animation_enabled() {
    let mut s = SceneSurface::new(Ease::Linear, Ease::Linear);
    s.apply_outline_style(ShapeId(0), &drawn(100.0, 0, 1000));
    s.apply_outline_style(ShapeId(1), &OutlineStyle::Hidden);

    let st = s.snapshot(5000);
    assert_eq!(st.strokes.len(), 1);
    assert_eq!(st.strokes[0].dash_offset, 100.0);
    assert_eq!(st.color_opacity, 0.0);
    assert_eq!(st.outline_opacity, 1.0);
}

#[test]
fn linear_draw_progress_honours_delay() {
    let mut s = SceneSurface::new(Ease::Linear, Ease::Linear);
    s.apply_outline_style(ShapeId(0), &drawn(100.0, 0, 1000));
    s.apply_outline_style(ShapeId(1), &drawn(50.0, 140, 800));
    s.enable_animation(16);

    let st = s.snapshot(516);
    assert!((st.strokes[0].dash_offset - 50.0).abs() < 1e-9);
    assert!((st.strokes[1].drawn_fraction() - 360.0 / 800.0).abs() < 1e-9);

    let st = s.snapshot(100);
    assert_eq!(st.strokes[1].dash_offset, 50.0);

    let done = s.snapshot(10_000);
    assert!(done.strokes.iter().all(|k| k.dash_offset == 0.0));
}

#[test]
fn cross_fade_with_and_without_outline_fade_out() {
    let mut s = SceneSurface::new(Ease::Linear, Ease::Linear);
    s.enable_color_fade(
        1000,
        ColorFade {
            fade_ms: 700,
            fade_outline_out: true,
        },
    );
    let mid = s.snapshot(1350);
    assert!((mid.color_opacity - 0.5).abs() < 1e-9);
    assert!((mid.outline_opacity - 0.5).abs() < 1e-9);
    let end = s.snapshot(1700);
    assert_eq!(end.color_opacity, 1.0);
    assert_eq!(end.outline_opacity, 0.0);

    s.enable_color_fade(
        1000,
        ColorFade {
            fade_ms: 700,
            fade_outline_out: false,
        },
    );
    assert_eq!(s.snapshot(5000).outline_opacity, 1.0);
}

#[test]
fn clear_classes_resets_timeline_but_keeps_styles() {
    let mut s = SceneSurface::default();
    s.apply_outline_style(ShapeId(3), &drawn(10.0, 0, 800));
    s.enable_animation(0);
    s.enable_color_fade(
        0,
        ColorFade {
            fade_ms: 0,
            fade_outline_out: true,
        },
    );
    s.clear_classes();
    s.flush_layout();

    assert_eq!(s.animate_at_ms(), None);
    assert_eq!(s.color_fade_at_ms(), None);
    assert_eq!(s.layout_flushes(), 1);
    assert!(s.style(ShapeId(3)).is_some());
    assert_eq!(s.snapshot(10_000).strokes[0].dash_offset, 10.0);
}
