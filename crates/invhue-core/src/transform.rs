//! The `invert(1) hue-rotate(180deg)` transform on hex colors.

use tracing::debug;

use crate::error::Result;
use crate::filter::FilterChain;
use crate::hex::{encode_hex, parse_hex};

/// Invert a `#RRGGBB` color and rotate its hue by 180°.
///
/// Accepts the color with or without a leading `#`, in either case, and
/// always returns `#` followed by six uppercase hex digits. The transform
/// is an involution: applying it twice gives back the normalized input.
///
/// # Errors
///
/// [`ColorError::InvalidFormat`](crate::ColorError::InvalidFormat) if the
/// input without its `#` is not six characters long, and
/// [`ColorError::InvalidHexDigit`](crate::ColorError::InvalidHexDigit) if
/// any of those characters is not a hex digit.
pub fn invert_hue_rotate(hex_color: &str) -> Result<String> {
    let input = parse_hex(hex_color)?;
    let output = FilterChain::invert_hue_rotate().apply_rgb8(input);
    let encoded = encode_hex(output);
    debug!(input = hex_color, output = %encoded, "invert + hue-rotate");
    Ok(encoded)
}
