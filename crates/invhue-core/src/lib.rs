//! invhue core - the `invert(1) hue-rotate(180deg)` color transform.
//!
//! This crate provides:
//! - Color value types (8-bit channel triples, unit RGB, HSL)
//! - `#RRGGBB` parsing and encoding
//! - RGB↔HSL conversion primitives
//! - A small CSS-style filter chain and the `invert_hue_rotate` transform

pub mod color;
pub mod error;
pub mod filter;
pub mod hex;
pub mod hsl;
pub mod transform;

pub use color::{Hsl, Rgb, Rgb8};
pub use error::{ColorError, Result};
pub use filter::{FilterChain, FilterOp};
pub use hex::{encode_hex, parse_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, HueSector};
pub use transform::invert_hue_rotate;
