use super::*;
use crate::illustration::geometry::ShapeKind;

const SIMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
  <g transform="translate(10 0)">
    <rect id="box" x="0" y="0" width="50" height="20" fill="#ff0000"/>
    <line x1="0" y1="50" x2="30" y2="90" stroke="#000000"/>
  </g>
  <circle cx="150" cy="50" r="20" fill="#00ff00" fill-opacity="0.5"/>
</svg>"##;

#[test]
fn loads_shapes_in_document_order() {
    let ill = load_svg(SIMPLE.as_bytes()).unwrap();
    assert_eq!(ill.size().width, 200.0);
    assert_eq!(ill.size().height, 100.0);
    assert_eq!(ill.len(), 3);
    assert!(ill.shapes().iter().all(|s| s.kind() == ShapeKind::Path));
    assert!(ill.svg_tree().is_some());

    let first = &ill.shapes()[0];
    assert_eq!(first.id, ShapeId(0));
    assert_eq!(first.element_id.as_deref(), Some("box"));
    assert_eq!(first.fill, Some(Rgba8::new(255, 0, 0, 255)));
    assert_eq!(first.transform.translation().x, 10.0);

    let circle = &ill.shapes()[2];
    assert_eq!(circle.fill.map(|f| f.a), Some(128));
}

#[test]
fn measured_lengths_match_primitives() {
    let ill = load_svg(SIMPLE.as_bytes()).unwrap();
    let rect = ill.shapes()[0].geometry.arc_length(0.01).unwrap();
    let line = ill.shapes()[1].geometry.arc_length(0.01).unwrap();
    let circle = ill.shapes()[2].geometry.arc_length(0.001).unwrap();
    assert!((rect - 140.0).abs() < 1e-3);
    assert!((line - 50.0).abs() < 1e-3);
    assert!((circle - 2.0 * std::f64::consts::PI * 20.0).abs() < 0.5);
}

#[test]
fn invalid_svg_is_an_error() {
    let err = load_svg(b"<not-svg").unwrap_err();
    assert!(matches!(err, RevealError::Svg(_)));
}
