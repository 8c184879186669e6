// crates/worldtime-core/src/search.rs

//! # Search Ranker
//!
//! Tiered prefix search over every entity of an [`EntityIndex`].
//!
//! | tier | test                                                        |
//! |------|-------------------------------------------------------------|
//! | 0    | query equals the search name (or a timezone key)            |
//! | 1    | every token prefixes some primary word                      |
//! | 2    | every token prefixes some secondary word (cities only)      |
//!
//! Hits sort by `(tier, position, timezones before cities, -population)`.

use crate::index::EntityIndex;
use crate::model::Zone;
use crate::text::{normalize_query, query_tokens};
use crate::traits::SearchKeys;

/// A ranked search result.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub tier: u8,
    pub position: usize,
    pub zone: &'a Zone,
}

impl SearchHit<'_> {
    /// Ascending sort key; population ties keep scan order (stable sort).
    #[inline]
    fn sort_key(&self) -> (u8, usize, u8, std::cmp::Reverse<u64>) {
        (
            self.tier,
            self.position,
            if self.zone.is_timezone() { 0 } else { 1 },
            std::cmp::Reverse(self.zone.population()),
        )
    }
}

/// The search operations available on the index.
pub trait ZoneSearch {
    /// Best single match for `query`.
    ///
    /// The first exact (tier-0) match found during the scan wins outright;
    /// otherwise the top of the full ranking is returned.
    fn find_one(&self, query: &str) -> Option<&Zone>;

    /// Up to `limit` matches in rank order. `limit` is taken as given.
    fn find_many(&self, query: &str, limit: usize) -> Vec<&Zone>;

    /// Every match with its tier and position, in rank order.
    fn ranked(&self, query: &str) -> Vec<SearchHit<'_>>;
}

impl ZoneSearch for EntityIndex {
    fn find_one(&self, query: &str) -> Option<&Zone> {
        let q = normalize_query(query);
        let tokens = query_tokens(&q);
        let hits = scan(self, &q, &tokens);
        if let Some(exact) = hits.iter().find(|h| h.tier == 0) {
            return Some(exact.zone);
        }
        sorted(hits).first().map(|h| h.zone)
    }

    fn find_many(&self, query: &str, limit: usize) -> Vec<&Zone> {
        if limit == 0 {
            return Vec::new();
        }
        self.ranked(query)
            .into_iter()
            .take(limit)
            .map(|h| h.zone)
            .collect()
    }

    fn ranked(&self, query: &str) -> Vec<SearchHit<'_>> {
        let q = normalize_query(query);
        let tokens = query_tokens(&q);
        sorted(scan(self, &q, &tokens))
    }
}

fn scan<'a>(index: &'a EntityIndex, q: &str, tokens: &[&str]) -> Vec<SearchHit<'a>> {
    if tokens.is_empty() {
        return Vec::new();
    }
    index
        .all_entities()
        .iter()
        .filter_map(|zone| {
            zone.rank(q, tokens).map(|(tier, position)| SearchHit {
                tier,
                position,
                zone,
            })
        })
        .collect()
}

fn sorted(mut hits: Vec<SearchHit<'_>>) -> Vec<SearchHit<'_>> {
    hits.sort_by_key(|h| h.sort_key());
    hits
}
