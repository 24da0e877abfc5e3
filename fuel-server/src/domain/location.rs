//! Positional parsing of combined "City, ST ZIP" strings.

/// The three components of a combined city/state/zip string.
///
/// All fields default to empty; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Parse a combined "City, ST ZIP" string into its components.
///
/// This is a total function over all strings:
///
/// - Input without a comma yields all-empty fields.
/// - Exactly two comma-separated parts: the first (trimmed) is the city;
///   the second is split on whitespace, with the first token as state and
///   the second as zip, each defaulting to empty.
/// - More than two comma-separated parts: the first segment is kept as the
///   city and state/zip stay empty. A state token may be visually present
///   in the second segment, but malformed input is not second-guessed.
///
/// The state token is purely positional; no validation that it names a real
/// state or that the zip is numeric happens here.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::parse_city_state_zip;
///
/// let loc = parse_city_state_zip("Corning, CA 96021");
/// assert_eq!(loc.city, "Corning");
/// assert_eq!(loc.state, "CA");
/// assert_eq!(loc.zip, "96021");
///
/// assert_eq!(parse_city_state_zip("NoComma"), Default::default());
/// ```
pub fn parse_city_state_zip(input: &str) -> Location {
    if !input.contains(',') {
        return Location::default();
    }

    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Location {
            city: parts.first().copied().unwrap_or("").to_string(),
            state: String::new(),
            zip: String::new(),
        };
    }

    let mut tokens = parts[1].split_whitespace();

    Location {
        city: parts[0].to_string(),
        state: tokens.next().unwrap_or("").to_string(),
        zip: tokens.next().unwrap_or("").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(city: &str, state: &str, zip: &str) -> Location {
        Location {
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
        }
    }

    #[test]
    fn parse_complete_city_state_zip() {
        assert_eq!(
            parse_city_state_zip("Corning, CA 96021"),
            loc("Corning", "CA", "96021")
        );
    }

    #[test]
    fn parse_city_with_spaces() {
        assert_eq!(
            parse_city_state_zip("Santa Nella, CA 95322"),
            loc("Santa Nella", "CA", "95322")
        );
    }

    #[test]
    fn parse_tolerates_extra_spaces() {
        assert_eq!(
            parse_city_state_zip("Corning,  CA  96021"),
            loc("Corning", "CA", "96021")
        );
    }

    #[test]
    fn parse_without_zip() {
        assert_eq!(parse_city_state_zip("Corning, CA"), loc("Corning", "CA", ""));
    }

    #[test]
    fn empty_input_is_all_empty() {
        assert_eq!(parse_city_state_zip(""), Location::default());
    }

    #[test]
    fn input_without_comma_is_all_empty() {
        assert_eq!(parse_city_state_zip("InvalidInput"), Location::default());
        assert_eq!(parse_city_state_zip("Corning"), Location::default());
    }

    #[test]
    fn too_many_commas_keeps_only_city() {
        let parsed = parse_city_state_zip("City, State, Extra, Stuff");
        assert_eq!(parsed.city, "City");
        assert_eq!(parsed.state, "");
        assert_eq!(parsed.zip, "");
    }

    #[test]
    fn trailing_comma_keeps_city() {
        // Splits into two parts with an empty second part.
        assert_eq!(parse_city_state_zip("Corning,"), loc("Corning", "", ""));
    }

    #[test]
    fn real_world_locations() {
        assert_eq!(
            parse_city_state_zip("Houston, TX 77001"),
            loc("Houston", "TX", "77001")
        );
        assert_eq!(
            parse_city_state_zip("Los Angeles, CA 90001"),
            loc("Los Angeles", "CA", "90001")
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Total: any string parses to a Location without panicking.
        #[test]
        fn never_panics(s in ".*") {
            let _ = parse_city_state_zip(&s);
        }

        /// Inputs without a comma always yield all-empty fields.
        #[test]
        fn no_comma_all_empty(s in "[^,]*") {
            prop_assert_eq!(parse_city_state_zip(&s), Location::default());
        }

        /// Well-formed "City, ST ZIP" round-trips into its components.
        #[test]
        fn well_formed_roundtrip(
            city in "[A-Za-z]+( [A-Za-z]+)?",
            state in "[A-Z]{2}",
            zip in "[0-9]{5}",
        ) {
            let parsed = parse_city_state_zip(&format!("{city}, {state} {zip}"));
            prop_assert_eq!(parsed.city, city);
            prop_assert_eq!(parsed.state, state);
            prop_assert_eq!(parsed.zip, zip);
        }
    }
}
