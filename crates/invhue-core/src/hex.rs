//! `#RRGGBB` parsing and encoding.

use tracing::debug;

use crate::color::Rgb8;
use crate::error::{ColorError, Result};

/// Parse a 6-digit hex color, with or without a leading `#`.
///
/// Case-insensitive. The length check counts characters, so multi-byte
/// input is rejected as a format error rather than split mid-character.
pub fn parse_hex(input: &str) -> Result<Rgb8> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if digits.chars().count() != 6 {
        debug!(input, "rejected color: wrong length");
        return Err(ColorError::InvalidFormat {
            input: input.to_string(),
        });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!(input, "rejected color: non-hex digit");
        return Err(ColorError::InvalidHexDigit {
            input: input.to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHexDigit {
            input: input.to_string(),
        })
    };

    Ok(Rgb8 {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Encode as `#` followed by six uppercase hex digits.
pub fn encode_hex(color: Rgb8) -> String {
    color.to_string()
}
