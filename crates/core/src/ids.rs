//! ID generation for properties minted during auto-metadata expansion.
//!
//! IDs are a millisecond timestamp followed by nine random base-36
//! characters (e.g. "1718000000000k3j9x0a1b"). They only need to be
//! practically unique within a single expansion.

use chrono::Utc;
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generate a fresh property ID.
pub fn generate_property_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}

/// Split an ID produced by [`generate_property_id`] into its timestamp and
/// random suffix.
///
/// Returns None if the format is invalid.
///
/// # Examples
/// ```
/// use vaultclip_core::ids::parse_property_id;
///
/// assert_eq!(parse_property_id("1718000000000abc123xyz"), Some((1718000000000, "abc123xyz")));
/// assert_eq!(parse_property_id("invalid"), None);
/// ```
pub fn parse_property_id(id: &str) -> Option<(i64, &str)> {
    if id.len() <= SUFFIX_LEN || !id.is_ascii() {
        return None;
    }
    let (millis, suffix) = id.split_at(id.len() - SUFFIX_LEN);
    if !suffix.bytes().all(|b| BASE36.contains(&b)) {
        return None;
    }
    let millis = millis.parse::<i64>().ok()?;
    Some((millis, suffix))
}
