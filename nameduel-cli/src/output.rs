/// Terminal and JSON output for duels.
use nameduel_core::CompletedRound;
use serde::Serialize;

use crate::snippet;

pub fn print_round_banner(round_number: usize, num_remaining: usize) {
    println!("\n=== Round {round_number}: {num_remaining} candidates ===");
}

/// The full presentation for one match: header plus both rendered previews.
pub fn match_block(first: &str, second: &str, template: &str) -> String {
    format!(
        "\nMatch: 1) {first}  vs  2) {second}\n\n\
         Preview for 1:\n{}\n\
         Preview for 2:\n{}",
        snippet::render(template, first),
        snippet::render(template, second),
    )
}

pub fn print_champion(name: &str) {
    println!("\nChampion: {name}");
}

#[derive(Serialize)]
struct JsonMatch {
    first: String,
    second: String,
    winner: String,
}

#[derive(Serialize)]
struct JsonRound {
    round: usize,
    matches: Vec<JsonMatch>,
    bye: Option<String>,
}

#[derive(Serialize)]
struct JsonDuel {
    champion: String,
    candidates: usize,
    rounds: usize,
    total_matches: usize,
    history: Vec<JsonRound>,
}

/// Print the full duel record as JSON.
pub fn print_json(champion: &str, names: &[String], completed: &[CompletedRound]) {
    let history: Vec<JsonRound> = completed
        .iter()
        .enumerate()
        .map(|(i, round)| JsonRound {
            round: i + 1,
            matches: round
                .results
                .iter()
                .map(|r| JsonMatch {
                    first: names[r.pair.0 as usize].clone(),
                    second: names[r.pair.1 as usize].clone(),
                    winner: names[r.winner as usize].clone(),
                })
                .collect(),
            bye: round.bye.map(|id| names[id as usize].clone()),
        })
        .collect();

    let output = JsonDuel {
        champion: champion.to_string(),
        candidates: names.len(),
        rounds: history.len(),
        total_matches: history.iter().map(|r| r.matches.len()).sum(),
        history,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
