use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

/// Alphabetical comparison of team names the way a person reads a table.
///
/// Uses the ICU root collation, the default most UIs sort with:
/// "csk" and "CSK" sort next to each other, accents sort with their base
/// letter. If the collation data cannot be loaded the comparison degrades to
/// case-insensitive ordering.
pub struct TeamNameCollator {
    collator: Option<Collator>,
}

impl TeamNameCollator {
    pub fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("ICU collator unavailable, using case-insensitive ordering: {:?}", e);
                None
            }
        };

        TeamNameCollator { collator }
    }

    /// Total order over names. Names the collation treats as equal are
    /// separated by code point so sorting stays deterministic.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let collated = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        collated.then_with(|| a.cmp(b))
    }
}

impl Default for TeamNameCollator {
    fn default() -> Self {
        Self::new()
    }
}
