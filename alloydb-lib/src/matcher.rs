use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::catalog::{Catalog, ReferenceAlloy};
use crate::composition::Composition;
use crate::scoring::score;

/// Acceptance and ranking settings for [`find_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Candidates scoring at or below this value are dropped.
    pub threshold: f64,
    /// Maximum number of matches returned.
    pub top_k: usize,
    /// Drop references whose dominant element differs from the query's.
    pub same_base_only: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            threshold: 0.3,
            top_k: 3,
            same_base_only: false,
        }
    }
}

/// A reference alloy that cleared the acceptance threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub alloy: &'a ReferenceAlloy,
    pub score: f64,
}

impl Match<'_> {
    pub fn name(&self) -> &str {
        self.alloy.name()
    }

    pub fn composition(&self) -> &Composition {
        self.alloy.composition()
    }
}

/// Rank catalog entries by similarity to `query`.
///
/// Results are sorted by score, highest first; equal scores keep catalog
/// order. An empty result means nothing cleared the threshold.
pub fn find_matches<'a>(
    query: &Composition,
    catalog: &'a Catalog,
    options: &MatchOptions,
) -> Vec<Match<'a>> {
    let query_base = query.dominant().map(|(e, _)| e);

    let mut matches: Vec<Match<'a>> = catalog
        .iter()
        .filter(|alloy| {
            !options.same_base_only
                || alloy.composition().dominant().map(|(e, _)| e) == query_base
        })
        .filter_map(|alloy| {
            let s = score(query, alloy.composition());
            trace!(alloy = alloy.name(), score = s, "scored candidate");
            (s > options.threshold).then_some(Match { alloy, score: s })
        })
        .collect();

    // stable: ties keep catalog order
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));
    matches.truncate(options.top_k);
    matches
}
