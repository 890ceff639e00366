//! Deduplication and ordering of the players entering a round.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// How names are arranged before they are paired off.
pub enum SeedOrder {
    /// Shuffle with a freshly seeded random generator.
    #[default]
    Random,
    /// Shuffle reproducibly from a fixed seed.
    Seeded(u64),
    /// Keep the order in which names were first listed.
    Preserve,
}

impl SeedOrder {
    pub fn from_options(seed: Option<u64>, keep_order: bool) -> Self {
        match (keep_order, seed) {
            (true, _) => Self::Preserve,
            (false, Some(seed)) => Self::Seeded(seed),
            (false, None) => Self::Random,
        }
    }
}

/// Drops repeated names, keeping the first occurrence of each.
pub fn dedup(names: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dropped = 0usize;
    let unique: Vec<String> = names
        .into_iter()
        .filter(|name| {
            let fresh = seen.insert(name.clone());
            if !fresh {
                dropped += 1;
            }
            fresh
        })
        .collect();

    if dropped > 0 {
        log::warn!("Dropped {dropped} repeated names");
    }
    unique
}

/// Puts distinct names into pairing order.
pub fn arrange(mut names: Vec<String>, order: SeedOrder) -> Vec<String> {
    match order {
        SeedOrder::Random => names.shuffle(&mut rand::thread_rng()),
        SeedOrder::Seeded(seed) => names.shuffle(&mut StdRng::seed_from_u64(seed)),
        SeedOrder::Preserve => {}
    }
    names
}
