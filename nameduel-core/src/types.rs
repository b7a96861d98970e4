/// Shared types for the elimination bracket.
///
/// Candidates are identified by caller-provided `i64` IDs. The crate never
/// stores labels — the caller keeps the ID-to-label table.

/// A pairing: two candidate IDs meeting in one match.
pub type Pair = (i64, i64);

/// Which side of a pair was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The candidate this side refers to within a pair.
    pub fn of(self, pair: Pair) -> i64 {
        match self {
            Side::First => pair.0,
            Side::Second => pair.1,
        }
    }
}

/// The shuffled pairing of one round.
///
/// `bye` is present exactly when the round length is odd: the unpaired
/// trailing candidate advances without a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundPlan {
    pub pairs: Vec<Pair>,
    pub bye: Option<i64>,
}

impl RoundPlan {
    /// Number of candidates that advance out of this round.
    pub fn advancer_count(&self) -> usize {
        self.pairs.len() + usize::from(self.bye.is_some())
    }
}

/// A resolved match: the pair and the winner's ID.
///
/// The winner must be one of the pair's two sides — `Bracket::record_round`
/// rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub pair: Pair,
    pub winner: i64,
}

impl MatchResult {
    /// Resolve a pair by which side was chosen.
    pub fn from_side(pair: Pair, side: Side) -> Self {
        MatchResult {
            pair,
            winner: side.of(pair),
        }
    }
}

/// Record of a finished round, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompletedRound {
    pub results: Vec<MatchResult>,
    pub bye: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_of_pair() {
        assert_eq!(Side::First.of((10, 20)), 10);
        assert_eq!(Side::Second.of((10, 20)), 20);
    }

    #[test]
    fn test_match_result_from_side() {
        let result = MatchResult::from_side((3, 7), Side::Second);
        assert_eq!(result.pair, (3, 7));
        assert_eq!(result.winner, 7);
    }

    #[test]
    fn test_advancer_count() {
        let even = RoundPlan { pairs: vec![(1, 2), (3, 4)], bye: None };
        assert_eq!(even.advancer_count(), 2);

        let odd = RoundPlan { pairs: vec![(1, 2)], bye: Some(5) };
        assert_eq!(odd.advancer_count(), 2);
    }
}
