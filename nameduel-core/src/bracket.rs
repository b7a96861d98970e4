/// Single-elimination bracket over caller-provided candidate IDs.
///
/// Pure computation — no terminal, no filesystem. The caller resolves each
/// pairing externally (a human at a prompt, a stub in tests) and feeds the
/// winners back, then asks for the next round. Nothing is persisted:
/// dropping the bracket loses all progress.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{CompletedRound, MatchResult, Pair, RoundPlan};

pub struct Bracket {
    /// Candidates still in contention, in last-shuffle order.
    remaining: Vec<i64>,
    /// Plan handed out by `plan_round` and not yet recorded.
    pending: Option<RoundPlan>,
    /// Finished rounds, oldest first.
    completed_rounds: Vec<CompletedRound>,
    num_candidates: usize,
    rounds_played: usize,
}

impl Bracket {
    /// Start a bracket over the given candidates.
    ///
    /// Panics on an empty list or a duplicate ID. A single candidate is a
    /// degenerate bracket that is complete from the start.
    pub fn new(candidate_ids: &[i64]) -> Self {
        assert!(!candidate_ids.is_empty(), "Bracket requires at least one candidate.");
        let mut seen = HashSet::with_capacity(candidate_ids.len());
        for &id in candidate_ids {
            assert!(seen.insert(id), "Duplicate candidate ID: {}", id);
        }

        Bracket {
            remaining: candidate_ids.to_vec(),
            pending: None,
            completed_rounds: Vec::new(),
            num_candidates: candidate_ids.len(),
            rounds_played: 0,
        }
    }

    /// Number of candidates the bracket started with.
    pub fn num_candidates(&self) -> usize {
        self.num_candidates
    }

    /// Rounds finished so far.
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Candidates still in contention.
    pub fn remaining(&self) -> &[i64] {
        &self.remaining
    }

    pub fn completed_rounds(&self) -> &[CompletedRound] {
        &self.completed_rounds
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.len() == 1
    }

    /// The sole survivor, once the bracket is complete.
    pub fn champion(&self) -> Option<i64> {
        if self.is_complete() {
            Some(self.remaining[0])
        } else {
            None
        }
    }

    /// Shuffle the remaining candidates uniformly and partition them into
    /// consecutive pairs. An unpaired trailing candidate becomes the bye.
    ///
    /// The RNG is injected so callers can seed it for reproducible pairings.
    /// Panics if the bracket is complete or the previous plan is unrecorded.
    pub fn plan_round(&mut self, rng: &mut impl Rng) -> RoundPlan {
        assert!(!self.is_complete(), "Bracket is complete; no further rounds to plan.");
        assert!(self.pending.is_none(), "Previous round has not been recorded yet.");

        self.remaining.shuffle(rng);

        let mut pairs: Vec<Pair> = Vec::with_capacity(self.remaining.len() / 2);
        let mut chunks = self.remaining.chunks_exact(2);
        for chunk in &mut chunks {
            pairs.push((chunk[0], chunk[1]));
        }
        let bye = chunks.remainder().first().copied();

        let plan = RoundPlan { pairs, bye };
        self.pending = Some(plan.clone());
        plan
    }

    /// Record the winners of the planned round and advance to the next.
    ///
    /// `results` must resolve the planned pairs exactly, in order, and every
    /// winner must come from its own pair. Panics on any mismatch.
    pub fn record_round(&mut self, results: &[MatchResult]) {
        let plan = self.pending.take().expect("No planned round to record.");
        assert_eq!(
            results.len(),
            plan.pairs.len(),
            "Expected {} match results, got {}.",
            plan.pairs.len(),
            results.len(),
        );

        let mut advancers = Vec::with_capacity(plan.advancer_count());
        for (result, &pair) in results.iter().zip(&plan.pairs) {
            assert_eq!(
                result.pair, pair,
                "Match result out of order: expected pair {:?}, got {:?}.",
                pair, result.pair,
            );
            assert!(
                result.winner == pair.0 || result.winner == pair.1,
                "Winner {} is not a member of pair {:?}.",
                result.winner,
                pair,
            );
            advancers.push(result.winner);
        }
        if let Some(bye) = plan.bye {
            advancers.push(bye);
        }

        self.completed_rounds.push(CompletedRound {
            results: results.to_vec(),
            bye: plan.bye,
        });
        self.remaining = advancers;
        self.rounds_played += 1;
    }
}

/// Number of candidates that advance out of a round of the given length.
pub fn advancers_for(round_len: usize) -> usize {
    (round_len + 1) / 2
}

/// Rounds needed to reduce `n` candidates to one: ceil(log2(n)), 0 for n <= 1.
pub fn rounds_required(n: usize) -> usize {
    let mut rounds = 0;
    let mut capacity = 1usize;
    while capacity < n {
        capacity *= 2;
        rounds += 1;
    }
    rounds
}

/// Every elimination takes exactly one match, so `n` candidates need `n - 1`.
pub fn total_matches(n: usize) -> usize {
    n.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Drive a bracket to completion, always advancing the first side.
    fn run_to_completion(bracket: &mut Bracket, rng: &mut StdRng) {
        while !bracket.is_complete() {
            let plan = bracket.plan_round(rng);
            let results: Vec<MatchResult> = plan
                .pairs
                .iter()
                .map(|&pair| MatchResult::from_side(pair, Side::First))
                .collect();
            bracket.record_round(&results);
        }
    }

    #[test]
    fn test_plan_round_partitions_all_candidates() {
        let ids: Vec<i64> = (0..5).collect();
        let mut bracket = Bracket::new(&ids);
        let mut rng = StdRng::seed_from_u64(42);

        let plan = bracket.plan_round(&mut rng);
        assert_eq!(plan.pairs.len(), 2);
        assert!(plan.bye.is_some());
        assert_eq!(plan.advancer_count(), advancers_for(5));

        // Every candidate appears exactly once across pairs and bye
        let mut seen: Vec<i64> = plan.pairs.iter().flat_map(|&(a, b)| [a, b]).collect();
        seen.extend(plan.bye);
        seen.sort();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_seeded_plans_are_reproducible() {
        let ids: Vec<i64> = (0..9).collect();

        let plan_a = Bracket::new(&ids).plan_round(&mut StdRng::seed_from_u64(7));
        let plan_b = Bracket::new(&ids).plan_round(&mut StdRng::seed_from_u64(7));
        assert_eq!(plan_a, plan_b);
    }

    #[test]
    fn test_winners_and_bye_advance() {
        let ids: Vec<i64> = (0..5).collect();
        let mut bracket = Bracket::new(&ids);
        let mut rng = StdRng::seed_from_u64(3);

        let plan = bracket.plan_round(&mut rng);
        let results: Vec<MatchResult> = plan
            .pairs
            .iter()
            .map(|&pair| MatchResult::from_side(pair, Side::Second))
            .collect();
        bracket.record_round(&results);

        let mut expected: Vec<i64> = results.iter().map(|r| r.winner).collect();
        expected.extend(plan.bye);
        assert_eq!(bracket.remaining(), expected.as_slice());
        assert_eq!(bracket.rounds_played(), 1);
    }

    #[test]
    fn test_round_count_matches_ceil_log2() {
        for n in 2..=17 {
            let ids: Vec<i64> = (0..n).collect();
            let mut bracket = Bracket::new(&ids);
            let mut rng = StdRng::seed_from_u64(n as u64);

            run_to_completion(&mut bracket, &mut rng);

            assert_eq!(
                bracket.rounds_played(),
                rounds_required(n as usize),
                "wrong round count for n = {n}",
            );
            assert!(ids.contains(&bracket.champion().unwrap()));

            let matches: usize = bracket
                .completed_rounds()
                .iter()
                .map(|r| r.results.len())
                .sum();
            assert_eq!(matches, total_matches(n as usize));
        }
    }

    #[test]
    fn test_bye_only_in_odd_rounds() {
        let ids: Vec<i64> = (0..11).collect();
        let mut bracket = Bracket::new(&ids);
        let mut rng = StdRng::seed_from_u64(1);

        while !bracket.is_complete() {
            let len = bracket.remaining().len();
            let plan = bracket.plan_round(&mut rng);
            assert_eq!(plan.bye.is_some(), len % 2 == 1, "bye mismatch at round length {len}");

            let results: Vec<MatchResult> = plan
                .pairs
                .iter()
                .map(|&pair| MatchResult::from_side(pair, Side::First))
                .collect();
            bracket.record_round(&results);
        }
    }

    #[test]
    fn test_single_candidate_is_complete() {
        let bracket = Bracket::new(&[99]);
        assert!(bracket.is_complete());
        assert_eq!(bracket.champion(), Some(99));
    }

    #[test]
    fn test_champion_is_none_while_running() {
        let bracket = Bracket::new(&[1, 2, 3]);
        assert!(!bracket.is_complete());
        assert_eq!(bracket.champion(), None);
    }

    #[test]
    fn test_rounds_required() {
        assert_eq!(rounds_required(0), 0);
        assert_eq!(rounds_required(1), 0);
        assert_eq!(rounds_required(2), 1);
        assert_eq!(rounds_required(3), 2);
        assert_eq!(rounds_required(4), 2);
        assert_eq!(rounds_required(5), 3);
        assert_eq!(rounds_required(8), 3);
        assert_eq!(rounds_required(9), 4);
    }

    #[test]
    fn test_advancers_for() {
        assert_eq!(advancers_for(2), 1);
        assert_eq!(advancers_for(3), 2);
        assert_eq!(advancers_for(10), 5);
        assert_eq!(advancers_for(11), 6);
    }

    #[test]
    #[should_panic(expected = "at least one candidate")]
    fn test_empty_bracket_panics() {
        let _ = Bracket::new(&[]);
    }

    #[test]
    #[should_panic(expected = "Duplicate candidate ID")]
    fn test_duplicate_ids_panic() {
        let _ = Bracket::new(&[1, 2, 1]);
    }

    #[test]
    #[should_panic(expected = "No planned round")]
    fn test_record_without_plan_panics() {
        let mut bracket = Bracket::new(&[1, 2]);
        bracket.record_round(&[MatchResult { pair: (1, 2), winner: 1 }]);
    }

    #[test]
    #[should_panic(expected = "not a member of pair")]
    fn test_foreign_winner_panics() {
        let mut bracket = Bracket::new(&[1, 2]);
        let plan = bracket.plan_round(&mut StdRng::seed_from_u64(0));
        bracket.record_round(&[MatchResult { pair: plan.pairs[0], winner: 42 }]);
    }

    #[test]
    #[should_panic(expected = "has not been recorded")]
    fn test_plan_twice_panics() {
        let mut bracket = Bracket::new(&[1, 2, 3, 4]);
        let mut rng = StdRng::seed_from_u64(0);
        let _ = bracket.plan_round(&mut rng);
        let _ = bracket.plan_round(&mut rng);
    }

    #[test]
    #[should_panic(expected = "Bracket is complete")]
    fn test_plan_after_completion_panics() {
        let mut bracket = Bracket::new(&[1]);
        let _ = bracket.plan_round(&mut StdRng::seed_from_u64(0));
    }
}
