//! Free-text station search.

use regex::Regex;

use crate::domain::Station;
use crate::states;

use super::config::SearchConfig;

/// Filter a station list against a free-text query.
///
/// Matching rules, evaluated per record with the first hit winning:
///
/// 1. An empty or whitespace-only query is the identity.
/// 2. The trimmed, lowercased query is state-normalized: a full state name
///    known to the alias table stands in for that state's code.
/// 3. A record state-matches when its code equals the normalized query, or
///    when its state's full name starts with the raw query (so "calif"
///    finds California records). State matches short-circuit all other
///    fields.
/// 4. A query recognized as a full state name is state-only: records that
///    did not state-match are excluded outright, even if that leaves zero
///    rows. This is deliberate; "georgia" must not fall through to a city
///    or name search.
/// 5. Otherwise, queries of at least `config.min_query_len` characters are
///    matched word-boundary-anchored against station name and city, and by
///    substring against the routing id. Shorter queries match nothing.
///
/// Output preserves input order.
pub fn search_stations<'a>(
    stations: &[&'a Station],
    query: &str,
    config: &SearchConfig,
) -> Vec<&'a Station> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return stations.to_vec();
    }

    let aliased_code = states::code_for_name(&q);
    let is_state_query = aliased_code.is_some();
    let normalized_q = match aliased_code {
        Some(code) => code.as_str().to_lowercase(),
        None => q.clone(),
    };

    // Word-boundary matcher for name/city; only needed for non-state
    // queries that clear the minimum length.
    let field_matcher = if !is_state_query && q.chars().count() >= config.min_query_len {
        Regex::new(&format!(r"(?i)\b{}", regex::escape(&normalized_q))).ok()
    } else {
        None
    };

    stations
        .iter()
        .filter(|station| {
            let state = station.state_str().to_lowercase();

            // Exact code match, covering both literal code queries and full
            // state names normalized to a code.
            if !state.is_empty() && state == normalized_q {
                return true;
            }

            // Prefix match on the state's full name ("calif" → California).
            if let Some(code) = station.state
                && let Some(full_name) = states::name_for_code(code)
                && full_name.to_lowercase().starts_with(&q)
            {
                return true;
            }

            // A full-state-name query is state-only; never fall through to
            // the other fields.
            if is_state_query {
                return false;
            }

            match &field_matcher {
                Some(matcher) => {
                    matcher.is_match(&station.name)
                        || matcher.is_match(&station.city)
                        || station.routing_id.to_lowercase().contains(&normalized_q)
                }
                None => false,
            }
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Brand, StateCode, Station, StationKind, StopCategory};

    fn station(id: &str, name: &str, city: &str, state: &str, routing_id: &str) -> Station {
        Station {
            id: id.to_string(),
            name: name.to_string(),
            address: "1 Test Rd".to_string(),
            city: city.to_string(),
            state: StateCode::parse(state).ok(),
            zip: "00000".to_string(),
            brand: Brand::Ta,
            routing_id: routing_id.to_string(),
            phone: None,
            kind: StationKind::Stop {
                category: StopCategory::Primary,
                exit_info: None,
                fax: None,
            },
        }
    }

    fn fixture() -> Vec<Station> {
        vec![
            station(
                "CA-163",
                "#163 TA Santa Nella",
                "Santa Nella",
                "CA",
                "FLT-TA163",
            ),
            station(
                "TX-100",
                "#100 PETRO Houston",
                "Houston",
                "TX",
                "FLT-PETRO100",
            ),
            station(
                "GA-50",
                "#50 TA Cartersville",
                "Cartersville",
                "GA",
                "FLT-TA50",
            ),
        ]
    }

    fn run(query: &str) -> Vec<String> {
        let stations = fixture();
        let refs: Vec<&Station> = stations.iter().collect();
        search_stations(&refs, query, &SearchConfig::default())
            .into_iter()
            .map(|s| s.id.clone())
            .collect()
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(run(""), vec!["CA-163", "TX-100", "GA-50"]);
        assert_eq!(run("   "), vec!["CA-163", "TX-100", "GA-50"]);
    }

    #[test]
    fn exact_state_code() {
        assert_eq!(run("CA"), vec!["CA-163"]);
        assert_eq!(run("TX"), vec!["TX-100"]);
    }

    #[test]
    fn state_code_is_case_insensitive() {
        assert_eq!(run("ca"), vec!["CA-163"]);
        assert_eq!(run("tX"), vec!["TX-100"]);
    }

    #[test]
    fn state_code_never_matches_inside_city_names() {
        // "CA" must find California, not Cartersville, GA.
        assert_eq!(run("CA"), vec!["CA-163"]);
    }

    #[test]
    fn full_state_name_matches_like_its_code() {
        assert_eq!(run("california"), run("CA"));
        assert_eq!(run("texas"), run("TX"));
        assert_eq!(run("Georgia"), vec!["GA-50"]);
    }

    #[test]
    fn state_name_prefix_matches() {
        assert_eq!(run("calif"), vec!["CA-163"]);
        assert_eq!(run("tex"), vec!["TX-100"]);
    }

    #[test]
    fn state_name_query_suppresses_other_fields() {
        // "georgia" is a recognized state name; a station named
        // "#1 TA Georgia Peach" in TX must not match it.
        let stations = vec![
            station("TX-1", "#1 TA Georgia Peach", "Dallas", "TX", "FLT-TA1"),
            station("GA-2", "#2 TA Atlanta", "Atlanta", "GA", "FLT-TA2"),
        ];
        let refs: Vec<&Station> = stations.iter().collect();
        let ids: Vec<&str> = search_stations(&refs, "georgia", &SearchConfig::default())
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["GA-2"]);
    }

    #[test]
    fn state_name_query_can_return_zero_rows() {
        // Wyoming is a valid state with no stations in the fixture; the
        // query stays state-only and returns nothing.
        assert_eq!(run("wyoming"), Vec::<String>::new());
    }

    #[test]
    fn short_queries_never_match_other_fields() {
        assert_eq!(run("Ho"), Vec::<String>::new());
        assert_eq!(run("Hou"), vec!["TX-100"]);
    }

    #[test]
    fn city_match_is_word_boundary_anchored() {
        assert_eq!(run("Houston"), vec!["TX-100"]);
        // "ella" appears inside "Santa Nella" but not at a word boundary.
        assert_eq!(run("ella"), Vec::<String>::new());
        // "Nella" starts a word.
        assert_eq!(run("Nella"), vec!["CA-163"]);
    }

    #[test]
    fn name_match() {
        assert_eq!(run("Santa Nella"), vec!["CA-163"]);
        assert_eq!(run("Cartersville"), vec!["GA-50"]);
    }

    #[test]
    fn routing_id_substring_match() {
        assert_eq!(run("FLT-TA163"), vec!["CA-163"]);
        assert_eq!(run("PETRO100"), vec!["TX-100"]);
        assert_eq!(run("petro100"), vec!["TX-100"]);
    }

    #[test]
    fn regex_metacharacters_are_escaped() {
        assert_eq!(run(".*+"), Vec::<String>::new());
        assert_eq!(run("(TA"), Vec::<String>::new());
    }

    #[test]
    fn unmatched_query_returns_empty() {
        assert_eq!(run("zzzzzz"), Vec::<String>::new());
    }

    #[test]
    fn stateless_records_only_match_on_fields() {
        let mut stations = vec![station("T-0", "Nashville Terminal", "", "ZZ", "FLT-TERM0")];
        stations[0].state = None;
        let refs: Vec<&Station> = stations.iter().collect();

        let config = SearchConfig::default();
        assert!(search_stations(&refs, "CA", &config).is_empty());
        assert_eq!(search_stations(&refs, "Nashville", &config).len(), 1);
    }
}
