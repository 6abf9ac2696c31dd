//! Rating a finished run against the optimal baseline.

/// How a completed run compares with the computed optimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionRating {
    /// The run matched the optimal total exactly.
    Perfect,
    /// The run finished within 120% of the optimal total.
    NearOptimal,
    /// The run took longer than 120% of the optimal total.
    RoomToImprove,
}

impl CompletionRating {
    /// Rate an elapsed total against the optimal baseline.
    ///
    /// The 120% threshold uses integer arithmetic: `elapsed * 5 <=
    /// optimal * 6`. Under the move rules a fair run can never finish
    /// below the optimum, so `elapsed == optimal` is the best case.
    pub fn for_times(elapsed: u64, optimal: u64) -> Self {
        if elapsed == optimal {
            Self::Perfect
        } else if elapsed.saturating_mul(5) <= optimal.saturating_mul(6) {
            Self::NearOptimal
        } else {
            Self::RoomToImprove
        }
    }

    /// A hint for runs with room to improve.
    pub const fn advice(self) -> Option<&'static str> {
        match self {
            Self::RoomToImprove => Some("use the two fastest actors as torch carriers"),
            Self::Perfect | Self::NearOptimal => None,
        }
    }
}

/// The figures reported once everyone is across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSummary {
    /// Total minutes the player spent.
    pub elapsed: u64,
    /// The precomputed optimal total.
    pub optimal: u64,
    /// How the two compare.
    pub rating: CompletionRating,
}
