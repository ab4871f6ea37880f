use super::*;

const ALL: [Ease; 4] = [Ease::Linear, Ease::Css, Ease::OutCubic, Ease::InOutCubic];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9);
        assert!(ease.apply(-3.0).abs() < 1e-9);
        assert!((ease.apply(7.0) - 1.0).abs() < 1e-9);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn css_ease_matches_browser_reference_points() {
    // Reference values for cubic-bezier(0.25, 0.1, 0.25, 1).
    assert!((Ease::Css.apply(0.5) - 0.8024).abs() < 1e-3);
    assert!((Ease::Css.apply(0.25) - 0.4085).abs() < 1e-3);
}

#[test]
fn default_is_css_ease() {
    assert_eq!(Ease::default(), Ease::Css);
    let parsed: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
    assert_eq!(parsed, Ease::InOutCubic);
}
