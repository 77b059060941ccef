//! Run modes and sweep parameter domains.
//!
//! A sweep walks the Cartesian product of four integer domains: the X and Y
//! breadth axes, the Z depth axis, and the parallelism degree P. Each domain
//! is a fixed literal list plus one randomized upper-bound value drawn once
//! per run, so every program is tested against the same boundary case.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Coverage mode for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Richer literal lists; the default.
    Full,
    /// Abbreviated lists, trading coverage for speed.
    Short,
}

impl Default for RunMode {
    fn default() -> Self {
        Self::Full
    }
}

impl std::fmt::Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Short => write!(f, "short"),
        }
    }
}

/// The four parameter domains for one run.
///
/// Generated once at startup and never re-rolled while the sweep executes,
/// so failures within a run reproduce against identical sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepDomains {
    /// X breadth axis.
    pub x: Vec<u32>,
    /// Y breadth axis.
    pub y: Vec<u32>,
    /// Z depth axis.
    pub z: Vec<u32>,
    /// Parallelism degrees each program is launched with.
    pub procs: Vec<u32>,
}

impl SweepDomains {
    /// Generate the domains for `mode` from an explicit random source.
    ///
    /// The source is a parameter so callers can pin a seed for a
    /// reproducible sweep; see [`domain_rng`].
    #[must_use]
    pub fn generate(mode: RunMode, rng: &mut impl Rng) -> Self {
        match mode {
            RunMode::Full => Self {
                x: with_random_edge(&[1, 2, 3, 4, 5], 10..=64, rng),
                y: with_random_edge(&[1, 2, 3, 4, 5], 10..=64, rng),
                z: with_random_edge(&[1, 2], 3..=64, rng),
                procs: with_random_edge(&[1, 2, 3, 4, 5], 6..=16, rng),
            },
            RunMode::Short => Self {
                x: with_random_edge(&[2], 10..=64, rng),
                y: with_random_edge(&[2, 5], 10..=64, rng),
                z: with_random_edge(&[1, 2], 3..=64, rng),
                procs: with_random_edge(&[1, 2], 3..=8, rng),
            },
        }
    }

    /// Number of (X, Y, Z, P) tuples one program's sweep will attempt.
    #[must_use]
    pub fn combinations(&self) -> u64 {
        self.x.len() as u64 * self.y.len() as u64 * self.z.len() as u64 * self.procs.len() as u64
    }
}

/// A literal list with one boundary-probing value appended, drawn uniformly
/// from `edge` (inclusive on both ends).
fn with_random_edge(literals: &[u32], edge: RangeInclusive<u32>, rng: &mut impl Rng) -> Vec<u32> {
    let mut values = literals.to_vec();
    values.push(rng.random_range(edge));
    values
}

/// Random source for domain generation: OS entropy by default, a fixed
/// stream when `seed` is supplied.
#[must_use]
pub fn domain_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rand::make_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    // ----
    // Literal content
    // ----

    #[test]
    fn test_full_domains_contain_literals() {
        let domains = SweepDomains::generate(RunMode::Full, &mut seeded());
        assert!(domains.x.starts_with(&[1, 2, 3, 4, 5]));
        assert!(domains.y.starts_with(&[1, 2, 3, 4, 5]));
        assert!(domains.z.starts_with(&[1, 2]));
        assert!(domains.procs.starts_with(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_short_domains_contain_literals() {
        let domains = SweepDomains::generate(RunMode::Short, &mut seeded());
        assert!(domains.x.starts_with(&[2]));
        assert!(domains.y.starts_with(&[2, 5]));
        assert!(domains.z.starts_with(&[1, 2]));
        assert!(domains.procs.starts_with(&[1, 2]));
    }

    #[test]
    fn test_domains_are_non_empty_positive() {
        for mode in [RunMode::Full, RunMode::Short] {
            let domains = SweepDomains::generate(mode, &mut seeded());
            for axis in [&domains.x, &domains.y, &domains.z, &domains.procs] {
                assert!(!axis.is_empty());
                assert!(axis.iter().all(|&value| value >= 1));
            }
        }
    }

    // ----
    // Random edge element
    // ----

    #[test]
    fn test_full_random_edges_within_ranges() {
        let domains = SweepDomains::generate(RunMode::Full, &mut seeded());
        assert!((10..=64).contains(domains.x.last().unwrap()));
        assert!((10..=64).contains(domains.y.last().unwrap()));
        assert!((3..=64).contains(domains.z.last().unwrap()));
        assert!((6..=16).contains(domains.procs.last().unwrap()));
    }

    #[test]
    fn test_short_random_edges_within_ranges() {
        let domains = SweepDomains::generate(RunMode::Short, &mut seeded());
        assert!((10..=64).contains(domains.x.last().unwrap()));
        assert!((10..=64).contains(domains.y.last().unwrap()));
        assert!((3..=64).contains(domains.z.last().unwrap()));
        assert!((3..=8).contains(domains.procs.last().unwrap()));
    }

    #[test]
    fn test_same_seed_reproduces_domains() {
        let first = SweepDomains::generate(RunMode::Full, &mut StdRng::seed_from_u64(42));
        let second = SweepDomains::generate(RunMode::Full, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_domain_rng_seed_is_deterministic() {
        let first = SweepDomains::generate(RunMode::Short, &mut domain_rng(Some(9)));
        let second = SweepDomains::generate(RunMode::Short, &mut domain_rng(Some(9)));
        assert_eq!(first, second);
    }

    // ----
    // Sizes
    // ----

    #[test]
    fn test_combination_counts() {
        let full = SweepDomains::generate(RunMode::Full, &mut seeded());
        assert_eq!(full.combinations(), 6 * 6 * 3 * 6);

        let short = SweepDomains::generate(RunMode::Short, &mut seeded());
        assert_eq!(short.combinations(), 2 * 3 * 3 * 3);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(RunMode::Full.to_string(), "full");
        assert_eq!(RunMode::Short.to_string(), "short");
        assert_eq!(RunMode::default(), RunMode::Full);
    }
}
