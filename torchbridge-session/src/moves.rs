//! The append-only move log.

/// One applied move.
///
/// Records keep display names rather than ids so a log can be rendered
/// without consulting the participant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveRecord {
    /// Two actors carried the torch to the far side.
    Cross {
        /// Display names of the pair, in selection order.
        names: [String; 2],
        /// Minutes charged: the slower member's speed.
        cost: u64,
    },
    /// One actor walked the torch back to the starting side.
    Return {
        /// Display name of the returning actor.
        name: String,
        /// Minutes charged: the actor's own speed.
        cost: u64,
    },
}

impl MoveRecord {
    /// Minutes this move added to the elapsed total.
    pub const fn cost(&self) -> u64 {
        match self {
            Self::Cross { cost, .. } | Self::Return { cost, .. } => *cost,
        }
    }
}
