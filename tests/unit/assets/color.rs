use super::*;

#[test]
fn hex_forms_parse() {
    assert_eq!(
        ColorDef::from_hex("#ff3b86").unwrap().rgba8(),
        Rgba8::new(0xff, 0x3b, 0x86, 255)
    );
    assert_eq!(
        ColorDef::from_hex("FF3B8680").unwrap().rgba8(),
        Rgba8::new(0xff, 0x3b, 0x86, 0x80)
    );
    assert!(ColorDef::from_hex("#fff").is_err());
    assert!(ColorDef::from_hex("#gg0000").is_err());
}

#[test]
fn deserializes_all_reprs() {
    let hex: ColorDef = serde_json::from_str("\"#102030\"").unwrap();
    let obj: ColorDef = serde_json::from_str(r#"{"r":16,"g":32,"b":48}"#).unwrap();
    let arr: ColorDef = serde_json::from_str("[16,32,48,255]").unwrap();
    assert_eq!(hex, obj);
    assert_eq!(obj, arr);
    assert!(serde_json::from_str::<ColorDef>("[1,2]").is_err());
}

#[test]
fn serializes_as_canonical_hex() {
    let c = ColorDef::from_hex("#FF3B86").unwrap();
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff3b86\"");
    let translucent = ColorDef(Rgba8::new(1, 2, 3, 4));
    assert_eq!(translucent.to_hex(), "#01020304");
}
