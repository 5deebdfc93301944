//! CSS-style filter chains over unit RGB colors.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::{Rgb, Rgb8};

/// A single filter step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FilterOp {
    /// `invert(1)`: each channel becomes `1 - c`.
    Invert,
    /// `hue-rotate(<deg>)`, applied in HSL space.
    HueRotate(f64),
}

impl FilterOp {
    /// Apply this step to one color.
    pub fn apply(self, rgb: Rgb) -> Rgb {
        match self {
            Self::Invert => rgb.inverted(),
            Self::HueRotate(degrees) => {
                let hsl = rgb.to_hsl();
                let rotated = hsl.rotate_hue(degrees);
                trace!(from = hsl.h, to = rotated.h, s = hsl.s, l = hsl.l, "hue rotate");
                rotated.to_rgb()
            }
        }
    }
}

/// An ordered chain of filter steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterChain {
    pub ops: Vec<FilterOp>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// `invert(1) hue-rotate(180deg)`.
    pub fn invert_hue_rotate() -> Self {
        Self::new().invert().hue_rotate(180.0)
    }

    pub fn invert(mut self) -> Self {
        self.ops.push(FilterOp::Invert);
        self
    }

    pub fn hue_rotate(mut self, degrees: f64) -> Self {
        self.ops.push(FilterOp::HueRotate(degrees));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Run every step in order.
    pub fn apply(&self, rgb: Rgb) -> Rgb {
        self.ops.iter().fold(rgb, |acc, op| op.apply(acc))
    }

    /// Run the chain on an 8-bit color, rounding only once at the end.
    pub fn apply_rgb8(&self, color: Rgb8) -> Rgb8 {
        self.apply(color.to_unit()).to_rgb8()
    }

    /// Render as a CSS `filter` value.
    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        let mut css = String::new();
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                css.push(' ');
            }
            // writing to a String cannot fail
            let _ = match op {
                FilterOp::Invert => write!(css, "invert(1)"),
                FilterOp::HueRotate(deg) => write!(css, "hue-rotate({deg}deg)"),
            };
        }
        css
    }
}
