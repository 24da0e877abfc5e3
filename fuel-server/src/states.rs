//! State name lookup.
//!
//! Static bidirectional mapping between full state names and their 2-letter
//! codes, used when flattening the dataset and when normalizing search
//! queries. Built once at first use and never mutated.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::StateCode;

/// All 50 US states plus a non-US Canada pseudo-entry.
///
/// "CN" is not a postal code; it is a reserved pseudo-code so Canadian
/// terminals can participate in state-style lookup.
const ALIASES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("Canada", "CN"),
];

/// Lowercased full name → code.
static NAME_TO_CODE: Lazy<HashMap<String, StateCode>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(name, code)| {
            let code = StateCode::parse(code).expect("alias table codes are valid");
            (name.to_lowercase(), code)
        })
        .collect()
});

/// Code → display-case full name.
static CODE_TO_NAME: Lazy<HashMap<StateCode, &'static str>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(name, code)| {
            let code = StateCode::parse(code).expect("alias table codes are valid");
            (code, *name)
        })
        .collect()
});

/// Look up the code for a full state name, case-insensitively.
///
/// Only complete names match; partial names return `None` (prefix matching
/// is the search engine's job, via [`name_for_code`]).
pub fn code_for_name(name: &str) -> Option<StateCode> {
    NAME_TO_CODE.get(&name.to_lowercase()).copied()
}

/// Look up the display-case full name for a code.
pub fn name_for_code(code: StateCode) -> Option<&'static str> {
    CODE_TO_NAME.get(&code).copied()
}

/// All (full name, code) pairs in table order.
pub fn entries() -> impl Iterator<Item = (&'static str, StateCode)> {
    ALIASES.iter().map(|(name, code)| {
        let code = StateCode::parse(code).expect("alias table codes are valid");
        (*name, code)
    })
}
