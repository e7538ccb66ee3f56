use rplancharge::core::palette::{
    Breakpoint, Palette, Rgb, TextColor, text_color_for, text_color_for_hex,
};
use rplancharge::errors::AppError;

fn two_stop() -> Palette {
    Palette::new(vec![
        Breakpoint {
            threshold: 0,
            color: Rgb::from_hex("#FFFFFF").unwrap(),
        },
        Breakpoint {
            threshold: 10,
            color: Rgb::from_hex("#000000").unwrap(),
        },
    ])
    .unwrap()
}

#[test]
fn test_color_interpolates_between_breakpoints() {
    let p = two_stop();
    // 255 * 0.5 = 127.5, rounded half away from zero
    assert_eq!(p.color_for(5).to_hex(), "#808080");
    assert_eq!(p.color_for(0).to_hex(), "#ffffff");
}

#[test]
fn test_color_clamps_outside_the_table() {
    let p = two_stop();
    assert_eq!(p.color_for(-3).to_hex(), "#ffffff");
    assert_eq!(p.color_for(10).to_hex(), "#000000");
    assert_eq!(p.color_for(31).to_hex(), "#000000");
}

#[test]
fn test_color_on_exact_threshold_uses_that_breakpoint() {
    let p = Palette::from_json_str(r##"{"0": "#FFFFFF", "10": "#FF0000", "20": "#0000FF"}"##)
        .unwrap();
    assert_eq!(p.color_for(10).to_hex(), "#ff0000");
    assert_eq!(p.color_for(15).to_hex(), "#800080");
}

#[test]
fn test_color_moves_monotonically_towards_next_breakpoint() {
    let p = Palette::from_json_str(r##"{"0": "#102030", "31": "#F0E0D0"}"##).unwrap();
    let mut prev = p.color_for(0);
    for load in 1..=31 {
        let c = p.color_for(load);
        assert!(c.r >= prev.r && c.g >= prev.g && c.b >= prev.b, "load {load}");
        prev = c;
    }
    assert_eq!(prev.to_hex(), "#f0e0d0");
}

#[test]
fn test_color_handles_thresholds_at_integer_extremes() {
    let p = Palette::from_json_str(r##"{"-2147483648": "#000000", "2147483647": "#FFFFFF"}"##)
        .unwrap();
    assert_eq!(p.color_for(i32::MIN).to_hex(), "#000000");
    assert_eq!(p.color_for(0).to_hex(), "#808080");
    assert_eq!(p.color_for(31).to_hex(), "#808080");
    assert_eq!(p.color_for(i32::MAX).to_hex(), "#ffffff");
}

#[test]
fn test_single_breakpoint_palette_is_constant() {
    let p = Palette::from_json_str(r##"{"5": "#123456"}"##).unwrap();
    assert_eq!(p.color_for(0).to_hex(), "#123456");
    assert_eq!(p.color_for(31).to_hex(), "#123456");
    assert!(p.coverage_warning().is_some());
}

#[test]
fn test_palette_json_rejects_bad_tables() {
    for json in [
        r##"{}"##,
        r##"{"10": "#FFFFFF", "5": "#000000"}"##,
        r##"{"0": "#FFFFFF", "10": "#000000", "10 ": "#111111"}"##,
        r##"{"x": "#FFFFFF"}"##,
        r##"{"0": "white"}"##,
        r##"{"0": 12}"##,
        r##"["#FFFFFF"]"##,
        "not json",
    ] {
        let err = Palette::from_json_str(json).unwrap_err();
        assert!(matches!(err, AppError::Palette(_)), "{json}: {err}");
    }
}

#[test]
fn test_default_palette_spans_every_load() {
    let p = Palette::default();
    assert!(p.coverage_warning().is_none());
    assert_eq!(p.color_for(0), Rgb::WHITE);
    assert_eq!(p.breakpoints().last().unwrap().threshold, 31);
}

#[test]
fn test_text_color_follows_luminance() {
    assert_eq!(text_color_for(Rgb::WHITE), TextColor::Black);
    assert_eq!(text_color_for(Rgb::BLACK), TextColor::White);
    assert_eq!(text_color_for_hex("#ffff00").unwrap(), "#000000");
    assert_eq!(text_color_for_hex("#00008B").unwrap(), "#FFFFFF");
}

#[test]
fn test_text_color_rejects_bad_hex() {
    assert!(matches!(
        text_color_for_hex("123456"),
        Err(AppError::InvalidColor(_))
    ));
    assert!(matches!(
        text_color_for_hex("#12345"),
        Err(AppError::InvalidColor(_))
    ));
}

#[test]
fn test_hex_round_trip_is_lowercase() {
    let c = Rgb::from_hex("#A8DC8C").unwrap();
    assert_eq!(c, Rgb::new(0xA8, 0xDC, 0x8C));
    assert_eq!(c.to_string(), "#a8dc8c");
}

#[test]
fn test_cell_colors_pairs_background_and_text() {
    let p = Palette::default();
    let (bg, fg) = p.cell_colors(31);
    assert_eq!(bg.to_hex(), "#8b0000");
    assert_eq!(fg, TextColor::White);
}
