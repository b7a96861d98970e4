mod config;
mod interact;
mod output;
mod replicate;
mod snippet;

use clap::Parser;
use nameduel_core::{rounds_required, total_matches, Bracket, MatchResult, DEFAULT_REPLICA_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "nameduel", version, about = "Pick a winning name through interactive pairwise elimination")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an elimination tournament over a list of candidate names
    Duel(DuelArgs),
    /// Make numbered copies of every file in a directory
    Replicate(ReplicateArgs),
    /// Create a default config file at ~/.config/nameduel/config.toml
    Init,
}

#[derive(Parser)]
struct DuelArgs {
    /// File with one candidate per line, or a JSON array of strings
    #[arg(long)]
    candidates: Option<PathBuf>,

    /// Inline candidate (repeatable)
    #[arg(long = "candidate")]
    inline_candidates: Vec<String>,

    /// Path to a custom display template file.
    /// The template must contain the $name variable.
    #[arg(long)]
    template: Option<PathBuf>,

    /// Seed for the shuffle RNG, for reproducible pairings
    #[arg(long)]
    seed: Option<u64>,

    /// Output a JSON record of the duel instead of plain text
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/nameduel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct ReplicateArgs {
    /// Directory whose files should be duplicated
    dir: PathBuf,

    /// Copies to make per file (default from config, else 25)
    #[arg(long)]
    count: Option<usize>,

    /// Print each copy as it is made
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/nameduel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a string as either a JSON array of strings or plain text (one candidate per line).
fn parse_candidates_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let candidates: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("File looks like JSON but failed to parse: {e}")));
        candidates.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one candidate per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Load candidates from all sources: --candidates file, --candidate inline args, or stdin.
fn load_candidates(args: &DuelArgs) -> Vec<String> {
    let mut candidates = Vec::new();

    // From file (auto-detects JSON array vs one-per-line)
    if let Some(ref path) = args.candidates {
        let content = std::fs::read_to_string(path)
            .unwrap_or_else(|e| bail(format!("Failed to read candidates file {}: {e}", path.display())));
        candidates = parse_candidates_from_str(&content);
    }

    // From inline --candidate flags
    candidates.extend(args.inline_candidates.iter().cloned());

    // From stdin (only if no file and no inline candidates)
    if candidates.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail("No candidates provided. Use --candidates <file>, --candidate <name>, or pipe candidates via stdin.");
        }
        let content: String = stdin.lock().lines()
            .map(|l| l.unwrap_or_else(|e| bail(format!("Failed to read from stdin: {e}"))))
            .collect::<Vec<_>>()
            .join("\n");
        candidates = parse_candidates_from_str(&content);
    }

    if candidates.len() < 2 {
        bail(format!("Need at least 2 candidates for a duel, got {}", candidates.len()));
    }
    candidates
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel(args) => run_duel(args),
        Commands::Replicate(args) => run_replicate(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default template and copy count.");
        }
    }
}

fn run_duel(args: DuelArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    // Load display template: CLI arg > config file > built-in default
    let template = {
        let template_path = args.template.clone().or_else(|| cfg.template.map(PathBuf::from));
        match template_path {
            Some(path) => snippet::load_template(&path),
            None => snippet::DEFAULT_TEMPLATE.to_string(),
        }
    };

    let names = load_candidates(&args);
    let candidate_ids: Vec<i64> = (0..names.len() as i64).collect();

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.verbose {
        eprintln!(
            "Dueling {} candidates across {} rounds ({} matches total)",
            names.len(),
            rounds_required(names.len()),
            total_matches(names.len()),
        );
    }

    let mut bracket = Bracket::new(&candidate_ids);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stdout();

    while !bracket.is_complete() {
        let round_number = bracket.rounds_played() + 1;
        output::print_round_banner(round_number, bracket.remaining().len());

        let plan = bracket.plan_round(&mut rng);
        if args.verbose {
            eprintln!(
                "Round {round_number}: {} matches, {} byes",
                plan.pairs.len(),
                usize::from(plan.bye.is_some()),
            );
        }

        let mut results = Vec::with_capacity(plan.pairs.len());
        for &pair in &plan.pairs {
            let first = &names[pair.0 as usize];
            let second = &names[pair.1 as usize];
            println!("{}", output::match_block(first, second, &template));

            let side = interact::read_choice(&mut input, &mut prompt_out)
                .unwrap_or_else(|e| bail(format!("Failed to read choice: {e}")));
            results.push(MatchResult::from_side(pair, side));
        }

        if args.verbose {
            if let Some(bye) = plan.bye {
                eprintln!("Bye: {} advances unpaired", names[bye as usize]);
            }
        }

        bracket.record_round(&results);
    }

    let champion_id = bracket.champion().expect("complete bracket always has a champion");
    let champion = &names[champion_id as usize];

    if args.json {
        output::print_json(champion, &names, bracket.completed_rounds());
    } else {
        output::print_champion(champion);
    }
}

fn run_replicate(args: ReplicateArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let count = args.count.or(cfg.count).unwrap_or(DEFAULT_REPLICA_COUNT);

    if !args.dir.is_dir() {
        bail(format!("{} is not a directory", args.dir.display()));
    }

    let report = replicate::replicate_dir(&args.dir, count, args.verbose)
        .unwrap_or_else(|e| bail(format!("Replication failed in {}: {e}", args.dir.display())));

    println!(
        "{} files, {} copies made, {} skipped",
        report.files, report.copied, report.skipped,
    );
}
