//! Demo affiliate roster with seeded earnings figures.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Seed used by the dashboard so the table does not change between renders.
pub const ROSTER_SEED: u64 = 0x00C0_FFEE;

/// Earnings are drawn from `0..MAX_EARNINGS_CENTS`.
pub const MAX_EARNINGS_CENTS: i64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub earnings_cents: i64,
}

#[must_use]
pub fn affiliate_roster(count: usize, seed: u64) -> Vec<RosterEntry> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (1..=count)
        .map(|n| RosterEntry {
            name: format!("User {n}"),
            earnings_cents: rng.gen_range(0..MAX_EARNINGS_CENTS),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_roster() {
        assert_eq!(
            affiliate_roster(8, ROSTER_SEED),
            affiliate_roster(8, ROSTER_SEED)
        );
    }

    #[test]
    fn shorter_roster_is_prefix_of_longer() {
        let short = affiliate_roster(5, 7);
        let long = affiliate_roster(12, 7);
        assert_eq!(short.as_slice(), &long[..5]);
    }

    #[test]
    fn entries_are_numbered_and_bounded() {
        let roster = affiliate_roster(5, ROSTER_SEED);
        assert_eq!(roster.len(), 5);
        assert_eq!(roster[0].name, "User 1");
        assert_eq!(roster[4].name, "User 5");
        assert!(
            roster
                .iter()
                .all(|e| (0..MAX_EARNINGS_CENTS).contains(&e.earnings_cents))
        );
        assert!(affiliate_roster(0, ROSTER_SEED).is_empty());
    }
}
