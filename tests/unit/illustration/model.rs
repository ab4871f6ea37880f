use super::*;
use crate::foundation::core::Rect;
use kurbo::Line;

#[test]
fn builder_assigns_document_order_ids() {
    let ill = Illustration::builder(100.0, 100.0)
        .shape(Geometry::Line(Line::new((0.0, 0.0), (10.0, 0.0))))
        .filled(
            Geometry::Rect(Rect::new(0.0, 0.0, 5.0, 5.0)),
            Rgba8::new(255, 0, 0, 255),
        )
        .shape(Geometry::Text)
        .build()
        .unwrap();

    assert_eq!(ill.len(), 3);
    let ids: Vec<_> = ill.shapes().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![ShapeId(0), ShapeId(1), ShapeId(2)]);
    assert_eq!(ill.shape(ShapeId(1)).unwrap().kind(), ShapeKind::Rect);
    assert_eq!(
        ill.shape(ShapeId(1)).unwrap().fill,
        Some(Rgba8::new(255, 0, 0, 255))
    );
    assert!(ill.shape(ShapeId(9)).is_none());
    assert!(ill.svg_tree().is_none());
}

#[test]
fn builder_rejects_empty_canvas() {
    assert!(Illustration::builder(0.0, 10.0).build().is_err());
    assert!(Illustration::builder(10.0, f64::NAN).build().is_err());
    assert!(Illustration::builder(1.0, 1.0).build().unwrap().is_empty());
}

#[test]
fn missing_file_is_svg_error() {
    let err = Illustration::from_path("does/not/exist.svg").unwrap_err();
    assert!(err.to_string().contains("svg error:"));
}
