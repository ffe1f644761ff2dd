//! Deterministic per-plan display colors.

use sha2::{Digest, Sha256};

/// Maps a plan identifier to a stable HSL display color.
///
/// The hue is taken from a SHA-256 digest of the id, so the same plan always
/// renders the same color across reloads and processes; saturation and
/// lightness are fixed for legibility on the calendar.
///
/// # Examples
///
/// ```
/// use breedcal_engine::services::color::plan_color;
///
/// assert_eq!(plan_color("plan-42"), plan_color("plan-42"));
/// assert_ne!(plan_color("plan-42"), plan_color("plan-43"));
/// ```
pub fn plan_color(plan_id: &str) -> String {
    let digest = Sha256::digest(plan_id.as_bytes());
    let hue = u16::from_be_bytes([digest[0], digest[1]]) % 360;
    format!("hsl({}, 65%, 45%)", hue)
}

/// Short stable fingerprint of a plan id, used in diagnostics.
pub fn plan_fingerprint(plan_id: &str) -> String {
    let digest = Sha256::digest(plan_id.as_bytes());
    hex::encode(&digest[..4])
}
