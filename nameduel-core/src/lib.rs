/// nameduel-core: Pure-computation single-elimination engine.
///
/// Shuffle → pair → verdicts → next round, until one candidate stands.
/// No IO, no terminal — just list and path math. Bring your own judge.
///
/// Candidates are identified by caller-provided `i64` IDs; the caller keeps
/// the ID-to-label table. The replica module plans the numbered filenames
/// for the bulk duplicator the same way: paths in, paths out, no filesystem.
///
/// # Quick start
///
/// ```rust
/// use nameduel_core::{Bracket, MatchResult, Side};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut bracket = Bracket::new(&[10, 20, 30]);
///
/// while !bracket.is_complete() {
///     let plan = bracket.plan_round(&mut rng);
///     let results: Vec<MatchResult> = plan
///         .pairs
///         .iter()
///         .map(|&pair| MatchResult::from_side(pair, Side::First))
///         .collect();
///     bracket.record_round(&results);
/// }
///
/// println!("Champion: {}", bracket.champion().unwrap());
/// ```

pub mod bracket;
pub mod replica;
pub mod types;

// Re-export primary public API at crate root.
pub use bracket::{advancers_for, rounds_required, total_matches, Bracket};
pub use replica::{replica_name, replica_targets, DEFAULT_REPLICA_COUNT};
pub use types::{CompletedRound, MatchResult, Pair, RoundPlan, Side};
