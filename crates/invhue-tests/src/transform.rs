//! Integration tests for the public transform API.

use invhue_core::{
    encode_hex, hsl_to_rgb, invert_hue_rotate, parse_hex, rgb_to_hsl, ColorError, FilterChain,
    Hsl, Rgb8,
};
use proptest::prelude::*;

// ── Helpers ────────────────────────────────────────────────────

/// Step-by-step transform straight from the HSL primitives, without the
/// filter chain.
fn stepwise(hex: &str) -> String {
    let color = parse_hex(hex).unwrap().inverted().to_unit();
    let hsl = rgb_to_hsl(color.r, color.g, color.b);
    let h = (hsl.h + 180.0) % 360.0;
    let rgb = hsl_to_rgb(h, hsl.s, hsl.l);
    encode_hex(rgb.to_rgb8())
}

fn is_output_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
}

// ── Transform ──────────────────────────────────────────────────

#[test]
fn known_color_matches_stepwise_computation() {
    let out = invert_hue_rotate("#123456").unwrap();
    assert_eq!(out, stepwise("#123456"));
    assert_ne!(out, "#123456");
    assert_eq!(invert_hue_rotate(&out).unwrap(), "#123456");
}

#[test]
fn prefix_and_case_are_normalized() {
    let outputs: Vec<String> = ["ABCDEF", "#abcdef", "#ABCDEF", "abcdef"]
        .iter()
        .map(|c| invert_hue_rotate(c).unwrap())
        .collect();
    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
    assert!(is_output_hex(&outputs[0]));
}

#[test]
fn wrong_lengths_fail_with_invalid_format() {
    for bad in ["#12345", "123456789", "12345", "#1234567"] {
        match invert_hue_rotate(bad) {
            Err(ColorError::InvalidFormat { input }) => assert_eq!(input, bad),
            other => panic!("{bad:?}: expected InvalidFormat, got {other:?}"),
        }
    }
}

#[test]
fn rotating_hue_twice_by_half_turn_restores_hue() {
    let hsl = Hsl::new(37.5, 0.4, 0.6);
    let back = hsl.rotate_hue(180.0).rotate_hue(180.0);
    assert!((back.h - hsl.h).abs() < 1e-9);
}

#[test]
fn chain_and_css_agree_with_transform() {
    let chain = FilterChain::invert_hue_rotate();
    assert_eq!(chain.to_css(), "invert(1) hue-rotate(180deg)");
    let color: Rgb8 = "#3C8D2F".parse().unwrap();
    assert_eq!(
        chain.apply_rgb8(color).to_string(),
        invert_hue_rotate("#3C8D2F").unwrap()
    );
}

#[test]
fn achromatic_inputs_stay_grey() {
    for v in (0..=255u8).step_by(17) {
        let grey = Rgb8::new(v, v, v);
        let hsl = grey.to_unit().to_hsl();
        assert_eq!((hsl.h, hsl.s), (0.0, 0.0));
        let out: Rgb8 = invert_hue_rotate(&grey.to_string()).unwrap().parse().unwrap();
        assert_eq!(out, grey.inverted());
    }
}

proptest! {
    #[test]
    fn transform_matches_stepwise(r: u8, g: u8, b: u8) {
        let hex = Rgb8::new(r, g, b).to_string();
        prop_assert_eq!(invert_hue_rotate(&hex).unwrap(), stepwise(&hex));
    }

    #[test]
    fn transform_is_an_involution(r: u8, g: u8, b: u8) {
        let hex = Rgb8::new(r, g, b).to_string();
        let once = invert_hue_rotate(&hex).unwrap();
        prop_assert!(is_output_hex(&once));
        prop_assert_eq!(invert_hue_rotate(&once).unwrap(), hex);
    }

    #[test]
    fn hsl_round_trip_is_exact(r: u8, g: u8, b: u8) {
        let hsl = rgb_to_hsl(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0);
        prop_assert_eq!(hsl_to_rgb(hsl.h, hsl.s, hsl.l).to_rgb8(), Rgb8::new(r, g, b));
    }
}
