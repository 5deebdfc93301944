//! RGB↔HSL conversion primitives.
//!
//! Both directions work on unit channels ([0, 1]) and hue in degrees.

use serde::{Deserialize, Serialize};

use crate::color::{Hsl, Rgb};

/// Convert unit RGB to HSL.
///
/// Achromatic input (max == min) yields `h = 0` and `s = 0`. When two
/// channels tie for the maximum, red wins over green and green over blue.
/// No clamping is applied.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h * 60.0, s, l }
}

/// One of the six 60° slices of the hue circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HueSector {
    /// [0°, 60°)
    RedYellow,
    /// [60°, 120°)
    YellowGreen,
    /// [120°, 180°)
    GreenCyan,
    /// [180°, 240°)
    CyanBlue,
    /// [240°, 300°)
    BlueMagenta,
    /// [300°, 360°)
    MagentaRed,
}

impl HueSector {
    /// Sector for `h / 60`. Intervals are half-open; anything outside
    /// [0, 6), NaN included, has no sector.
    pub fn from_hue_prime(hh: f64) -> Option<Self> {
        if !(0.0..6.0).contains(&hh) {
            return None;
        }
        // hh is finite and in [0, 6), so the truncation is in 0..=5
        Some(match hh as u8 {
            0 => Self::RedYellow,
            1 => Self::YellowGreen,
            2 => Self::GreenCyan,
            3 => Self::CyanBlue,
            4 => Self::BlueMagenta,
            _ => Self::MagentaRed,
        })
    }

    /// Place chroma `c` and the second component `x` on the RGB axes.
    #[inline]
    pub fn arrange(self, c: f64, x: f64) -> (f64, f64, f64) {
        match self {
            Self::RedYellow => (c, x, 0.0),
            Self::YellowGreen => (x, c, 0.0),
            Self::GreenCyan => (0.0, c, x),
            Self::CyanBlue => (0.0, x, c),
            Self::BlueMagenta => (x, 0.0, c),
            Self::MagentaRed => (c, 0.0, x),
        }
    }
}

/// Convert HSL to unit RGB.
///
/// `h` is expected in [0, 360). Hues outside that range land in no sector
/// and contribute zero chroma, leaving every channel at `l - c/2`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hh = h / 60.0;
    let x = c * (1.0 - (hh % 2.0 - 1.0).abs());

    let (r1, g1, b1) = HueSector::from_hue_prime(hh)
        .map(|sector| sector.arrange(c, x))
        .unwrap_or((0.0, 0.0, 0.0));

    let m = l - c / 2.0;
    Rgb {
        r: r1 + m,
        g: g1 + m,
        b: b1 + m,
    }
}
