//! Room-name normalization.
//!
//! Raw sensor labels sometimes carry a power-off marker token (a radiator
//! commanded off reports as e.g. `"Classe 1 Eteindre"`). The zone layout is
//! keyed by clean names, so every label is normalized before lookup.

/// Marker token embedded in labels of rooms whose radiators were commanded off.
pub const POWER_OFF_MARKER: &str = "Eteindre";

/// Canonicalize a raw room label.
///
/// Removes the power-off marker wherever it appears and trims surrounding
/// whitespace. A missing label normalizes to the empty string. Idempotent:
/// normalizing an already-normalized name returns it unchanged.
///
/// # Examples
///
/// ```
/// use thermazone_core::normalize_room_name;
///
/// assert_eq!(normalize_room_name(Some("Classe 1 Eteindre")), "Classe 1");
/// assert_eq!(normalize_room_name(Some("  Cantine ")), "Cantine");
/// assert_eq!(normalize_room_name(None), "");
/// ```
#[must_use]
pub fn normalize_room_name(raw: Option<&str>) -> String {
    let Some(label) = raw else {
        return String::new();
    };

    // Removing the marker can splice a new occurrence together, so repeat
    // until none remains; each pass shortens the string.
    let mut name = label.to_string();
    while name.contains(POWER_OFF_MARKER) {
        name = name.replace(POWER_OFF_MARKER, "");
    }
    name.trim().to_string()
}
