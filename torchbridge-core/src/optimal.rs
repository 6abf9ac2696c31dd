//! Minimum total time for a bridge-and-torch crossing.
//!
//! At most two actors cross at once, the pair moves at the slower member's
//! pace, and one actor must walk the torch back after every forward
//! crossing except the last. For four or more actors the optimum mixes two
//! round strategies, chosen greedily while peeling off the two slowest:
//!
//! - **shuttle**: the two fastest actors ferry the torch so the two slowest
//!   can cross together;
//! - **escort**: the fastest actor walks each of the two slowest across
//!   individually, returning alone in between.
//!
//! The result depends only on the multiset of speeds, never on ordering.

use thiserror::Error;

/// Errors returned by [`optimal_crossing_time`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimalTimeError {
    /// No crossing speeds were provided.
    ///
    /// The calculator needs at least one speed. Callers are expected to
    /// validate the actor group before invoking it.
    #[error("at least one crossing speed is required")]
    EmptyInput,
    /// A crossing speed of zero was provided.
    #[error("crossing speeds must be positive")]
    ZeroSpeed,
}

/// Compute the minimum achievable total crossing time in minutes.
///
/// The input order is irrelevant; the routine sorts a local copy. It is
/// pure and deterministic, so concurrent callers need no coordination.
///
/// # Errors
/// Returns [`OptimalTimeError::EmptyInput`] for an empty slice and
/// [`OptimalTimeError::ZeroSpeed`] when any speed is zero. Within the
/// documented input domain the computation cannot fail.
///
/// # Examples
/// ```
/// use torchbridge_core::optimal_crossing_time;
///
/// // The classic puzzle: speeds 1, 2, 5 and 10 cross in 17 minutes.
/// assert_eq!(optimal_crossing_time(&[1, 2, 5, 10]), Ok(17));
/// // A pair crosses together at the slower pace.
/// assert_eq!(optimal_crossing_time(&[3, 8]), Ok(8));
/// ```
pub fn optimal_crossing_time(speeds: &[u32]) -> Result<u64, OptimalTimeError> {
    if speeds.is_empty() {
        return Err(OptimalTimeError::EmptyInput);
    }
    if speeds.iter().any(|&speed| speed == 0) {
        return Err(OptimalTimeError::ZeroSpeed);
    }
    let mut sorted: Vec<u64> = speeds.iter().map(|&speed| u64::from(speed)).collect();
    sorted.sort_unstable();
    Ok(minimum_total(&sorted))
}

/// Greedy optimum over ascending, positive, non-empty speeds.
fn minimum_total(sorted: &[u64]) -> u64 {
    match *sorted {
        [only] => only,
        [_, slower] => slower,
        [a, b, c] => a + b + c,
        _ => peel_rounds(sorted),
    }
}

fn peel_rounds(sorted: &[u64]) -> u64 {
    let fastest = sorted[0];
    let second = sorted[1];

    let mut total = 0;
    let mut remaining = sorted.len();
    while remaining > 3 {
        // Shuttle: fastest pair over, fastest back, slowest pair over,
        // second-fastest back. Escort: fastest walks each of the two
        // slowest over, returning alone in between.
        let shuttle = second + fastest + sorted[remaining - 1] + second;
        let escort = sorted[remaining - 1] + fastest + sorted[remaining - 2] + fastest;
        total += shuttle.min(escort);
        remaining -= 2;
    }

    // Peeling two per round from n >= 4 always lands on 2 or 3.
    debug_assert!(remaining == 2 || remaining == 3);
    total += match remaining {
        3 => sorted[0] + sorted[1] + sorted[2],
        _ => second,
    };
    total
}
