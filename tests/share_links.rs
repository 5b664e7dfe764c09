use base64::Engine as _;
use palettelink::share::{load_from_str, Source, QUERY_PARAM};
use palettelink::{
    compact, legacy, Components, ControllerConfig, Pattern, PatternController, PatternId,
    PatternUpdate, Space,
};

fn pattern(id: u32, name: &str, space: Space, values: Components, base: f64) -> Pattern {
    Pattern {
        id: PatternId(id),
        name: name.to_string(),
        space,
        values,
        base_modifier: base,
    }
}

#[test]
fn two_pattern_share_string() {
    let patterns = vec![
        pattern(1, "primary", Space::Oklch, Components(60.0, 0.1, 240.0), 0.05),
        pattern(2, "accent!", Space::Hsl, Components(10.0, 80.0, 50.0), 0.2),
    ];
    let encoded = compact::encode(&patterns);
    assert_eq!(encoded, "primary:ok:60,0.1,240:0.05|accent-:hs:10,80,50:0.2");

    let decoded = compact::decode(&encoded);
    assert_eq!(
        decoded,
        vec![
            pattern(1, "primary", Space::Oklch, Components(60.0, 0.1, 240.0), 0.05),
            pattern(2, "accent-", Space::Hsl, Components(10.0, 80.0, 50.0), 0.2),
        ]
    );
}

#[test]
fn unreadable_share_strings_give_the_primary_pattern() {
    for input in ["", "garbage:::"] {
        let decoded = compact::decode(input);
        assert_eq!(decoded.len(), 1, "{input:?}");
        let primary = &decoded[0];
        assert_eq!(primary.name, "primary");
        assert_eq!(primary.space, Space::Oklch);
        assert_eq!(primary.values, Space::Oklch.defaults());
        assert_eq!(primary.base_modifier, 0.05);
    }
}

#[test]
fn legacy_srgb_linear_is_reset_to_srgb_defaults() {
    let json = r#"[{"colorSpace":"srgb-linear","colorValues":{"r":10,"g":20,"b":30}}]"#;
    let fragment = base64::engine::general_purpose::STANDARD.encode(json);

    let patterns = legacy::load_legacy(&fragment);
    assert_eq!(patterns[0].space, Space::Srgb);
    assert_eq!(patterns[0].values, Components(0.0, 0.0, 255.0));

    let url = format!("https://example.com/#{fragment}");
    let (patterns, source) = load_from_str(&url, QUERY_PARAM);
    assert_eq!(source, Source::Fragment);
    assert_eq!(patterns[0].values, Space::Srgb.defaults());
}

#[test]
fn a_session_round_trips_through_its_share_url() {
    let base = url::Url::parse("https://example.com/generator").unwrap();
    let mut session = PatternController::from_url(&base, ControllerConfig::default());

    let accent = session.add().unwrap();
    session
        .update(accent, PatternUpdate::Name("accent".into()))
        .unwrap();
    session
        .update(accent, PatternUpdate::ColorSpace(Space::Lab))
        .unwrap();
    session
        .update(
            accent,
            PatternUpdate::ColorValue {
                key: "a".into(),
                value: 42.5,
            },
        )
        .unwrap();
    session.share_now();

    let shared = session.share_url(&base);
    let restored = PatternController::from_url(&shared, ControllerConfig::default());
    assert_eq!(restored.patterns(), session.patterns());
    assert_eq!(restored.stylesheet(), session.stylesheet());
    assert_eq!(
        restored.variables().get("--accent"),
        Some("lab(50.0% 42.5 127.0)")
    );
}
