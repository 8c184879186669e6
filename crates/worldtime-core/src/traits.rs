// crates/worldtime-core/src/traits.rs
use crate::text::match_position;

/// Search keys exposed by every searchable entity.
///
/// Implementors provide their normalized exact-match name and word lists;
/// the ranking helpers are derived from those.
pub trait SearchKeys {
    /// Lowercase full display name.
    fn search_name(&self) -> &str;

    /// Words tested for tier-1 prefix matches.
    fn primary_words(&self) -> &[String];

    /// Words tested for tier-2 prefix matches, if the entity has a
    /// secondary list at all.
    fn secondary_words(&self) -> Option<&[String]> {
        None
    }

    /// Exact match against an already normalized query.
    #[inline]
    fn is_exact(&self, q: &str) -> bool {
        self.search_name() == q
    }

    /// Tier and match position of this entity for the given query, or
    /// `None` when it does not match at all.
    fn rank(&self, q: &str, tokens: &[&str]) -> Option<(u8, usize)> {
        if tokens.is_empty() {
            return None;
        }
        if self.is_exact(q) {
            return Some((0, 0));
        }
        if let Some(pos) = match_position(tokens, self.primary_words()) {
            return Some((1, pos));
        }
        self.secondary_words()
            .and_then(|words| match_position(tokens, words))
            .map(|pos| (2, pos))
    }
}
