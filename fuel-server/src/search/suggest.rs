//! State search suggestions.

use crate::states;

use super::config::SearchConfig;

/// Suggest state completions for a partial query.
///
/// Scans the alias table in both directions (full name and code) for
/// case-insensitive substring hits, formatted as "California (CA)".
/// Deduplicated and capped at `config.max_suggestions`.
pub fn suggestions(query: &str, config: &SearchConfig) -> Vec<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();

    for (name, code) in states::entries() {
        if matches.len() == config.max_suggestions {
            break;
        }

        let hit = name.to_lowercase().contains(&q) || code.as_str().to_lowercase().contains(&q);
        if hit {
            let suggestion = format!("{name} ({code})");
            if !matches.contains(&suggestion) {
                matches.push(suggestion);
            }
        }
    }

    matches
}
