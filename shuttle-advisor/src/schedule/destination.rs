//! Train destination code table.
//!
//! The feed encodes each train's terminus as a single leading character
//! on the departure token. The mapping is fixed; it matches the legend
//! printed on the station's paper timetable.

/// Destination legend, in the feed's published order. The empty code is
/// the default terminus, used when a token carries no recognised letter.
const DESTINATIONS: [(&str, &str); 11] = [
    ("", "Ueno"),
    ("a", "Zushi"),
    ("b", "Ofuna"),
    ("c", "Omiya"),
    ("d", "Atami"),
    ("e", "Odawara"),
    ("f", "Numazu"),
    ("g", "Hiratsuka"),
    ("h", "Kozu"),
    ("i", "Ito"),
    ("j", "Shinagawa"),
];

/// Destination name for codes absent from the legend.
pub const UNKNOWN_DESTINATION: &str = "unknown";

/// Resolve a destination code to its terminus name.
///
/// Codes not in the legend resolve to [`UNKNOWN_DESTINATION`]; the feed
/// occasionally introduces new codes before the legend catches up.
pub fn destination_name(code: &str) -> &'static str {
    DESTINATIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(UNKNOWN_DESTINATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(destination_name(""), "Ueno");
        assert_eq!(destination_name("a"), "Zushi");
        assert_eq!(destination_name("c"), "Omiya");
        assert_eq!(destination_name("j"), "Shinagawa");
    }

    #[test]
    fn unknown_code() {
        assert_eq!(destination_name("z"), UNKNOWN_DESTINATION);
        assert_eq!(destination_name("0"), UNKNOWN_DESTINATION);
    }

    #[test]
    fn legend_has_eleven_entries() {
        assert_eq!(DESTINATIONS.len(), 11);
    }
}
