use super::*;
use crate::foundation::core::{Rect, ShapeId};
use crate::illustration::geometry::Geometry;
use crate::render::scene::StrokeState;

const PINK: [u8; 4] = [0xff, 0x3b, 0x86, 0xff];

fn square() -> Illustration {
    Illustration::builder(100.0, 100.0)
        .filled(
            Geometry::Rect(Rect::new(20.0, 20.0, 80.0, 80.0)),
            Rgba8::new(255, 0, 0, 255),
        )
        .build()
        .unwrap()
}

fn renderer() -> CpuRenderer {
    let cfg = RevealConfig {
        size: 100,
        ..Default::default()
    };
    CpuRenderer::new(&cfg, CpuRendererOpts::default())
}

fn state(color: f64, outline: f64, offset: f64) -> RevealFrameState {
    RevealFrameState {
        t_ms: 0,
        color_opacity: color,
        outline_opacity: outline,
        strokes: vec![StrokeState {
            shape: ShapeId(0),
            dash_len: 240.0,
            dash_offset: offset,
        }],
    }
}

#[test]
fn nothing_visible_before_reveal() {
    let frame = renderer().render(&square(), &state(0.0, 1.0, 240.0)).unwrap();
    assert_eq!((frame.width, frame.height), (100, 100));
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn color_layer_draws_fills() {
    let frame = renderer().render(&square(), &state(1.0, 0.0, 0.0)).unwrap();
    assert_eq!(frame.pixel(50, 50), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(5, 5), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(100, 0), None);
}

#[test]
fn outline_dash_offset_controls_drawn_portion() {
    let full = renderer().render(&square(), &state(0.0, 1.0, 0.0)).unwrap();
    assert_eq!(full.pixel(20, 50), Some(PINK));
    assert_eq!(full.pixel(50, 50), Some([0, 0, 0, 0]));

    // Half drawn: the top and right edges only.
    let half = renderer().render(&square(), &state(0.0, 1.0, 120.0)).unwrap();
    assert_eq!(half.pixel(50, 20), Some(PINK));
    assert_eq!(half.pixel(80, 50), Some(PINK));
    assert_eq!(half.pixel(20, 50), Some([0, 0, 0, 0]));
}

#[test]
fn layer_opacity_scales_alpha() {
    let frame = renderer().render(&square(), &state(0.5, 0.0, 0.0)).unwrap();
    let [r, _, _, a] = frame.pixel(50, 50).unwrap();
    assert!((i32::from(a) - 128).abs() <= 1);
    assert!(r >= 250);
}

#[test]
fn background_and_svg_tree_color_layer() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect x="2" y="2" width="6" height="6" fill="#0000ff"/></svg>"##;
    let ill = Illustration::from_svg_data(svg).unwrap();
    let cfg = RevealConfig {
        size: 40,
        ..Default::default()
    };
    let r = CpuRenderer::new(
        &cfg,
        CpuRendererOpts {
            background: Some(Rgba8::new(255, 255, 255, 255)),
        },
    );
    let st = RevealFrameState {
        t_ms: 0,
        color_opacity: 1.0,
        outline_opacity: 0.0,
        strokes: vec![],
    };
    let frame = r.render(&ill, &st).unwrap();
    assert_eq!(frame.pixel(20, 20), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn unknown_stroke_shape_is_a_render_error() {
    let mut st = state(0.0, 1.0, 0.0);
    st.strokes[0].shape = ShapeId(42);
    let err = renderer().render(&square(), &st).unwrap_err();
    assert!(matches!(err, RevealError::Render(_)));
}

#[test]
fn pixel_lookup_does_not_overflow_on_large_frames() {
    let frame = FrameRGBA {
        width: 70_000,
        height: 70_000,
        data: vec![0; 16],
    };
    assert_eq!(frame.pixel(69_999, 69_999), None);
    assert_eq!(frame.pixel(1, 0), Some([0, 0, 0, 0]));
}
