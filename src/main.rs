use clap::Parser;
use serde::Serialize;

use pincer::contracts::is_sorted;
use pincer::{move_zeroes, reverse, three_sum, two_sum};

mod cli;
use cli::{Cli, Commands};

/// JSON envelope for the in-place commands.
#[derive(Serialize)]
struct SequenceOutput {
    sequence: Vec<i64>,
}

/// JSON envelope for the search commands.
#[derive(Serialize)]
#[serde(untagged)]
enum SearchOutput {
    Pair { pair: [i64; 2] },
    Triplet { triplet: [i64; 3] },
    Miss { found: bool },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Commands::Reverse { sequence } => {
            let mut seq = parse_sequence(sequence)?;
            reverse(&mut seq);
            print_sequence(&seq, cli.json);
        }
        Commands::MoveZeroes { sequence } => {
            let mut seq = parse_sequence(sequence)?;
            move_zeroes(&mut seq);
            print_sequence(&seq, cli.json);
        }
        Commands::TwoSum { sequence, target } => {
            let seq = parse_sequence(sequence)?;
            warn_if_unsorted(&seq);
            let output = match two_sum(&seq, *target) {
                Some(pair) => {
                    if !cli.json {
                        println!("{}", pair);
                    }
                    SearchOutput::Pair {
                        pair: pair.values(),
                    }
                }
                None => SearchOutput::Miss { found: false },
            };
            if cli.json {
                println!("{}", to_json(&output));
            }
        }
        Commands::ThreeSum { sequence, target } => {
            let seq = parse_sequence(sequence)?;
            warn_if_unsorted(&seq);
            let output = match three_sum(&seq, *target) {
                Some(triplet) => {
                    if !cli.json {
                        println!("{}", triplet);
                    }
                    SearchOutput::Triplet {
                        triplet: triplet.values(),
                    }
                }
                None => SearchOutput::Miss { found: false },
            };
            if cli.json {
                println!("{}", to_json(&output));
            }
        }
    }

    Ok(())
}

/// Parse a comma-separated integer list: `"0, 1,2"` → `[0, 1, 2]`.
///
/// An empty (or all-whitespace) input is the empty sequence, which every
/// algorithm accepts.
fn parse_sequence(input: &str) -> Result<Vec<i64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<i64>()
                .map_err(|_| format!("invalid integer '{}' in sequence", token))
        })
        .collect()
}

/// The searches silently mis-answer on unsorted input, so at least say so.
fn warn_if_unsorted(seq: &[i64]) {
    if !is_sorted(seq) {
        eprintln!("⚠️  sequence is not sorted non-decreasing; results are unreliable");
    }
}

fn print_sequence(seq: &[i64], json: bool) {
    if json {
        let output = SequenceOutput {
            sequence: seq.to_vec(),
        };
        println!("{}", to_json(&output));
    } else {
        let rendered: Vec<String> = seq.iter().map(|v| v.to_string()).collect();
        println!("[{}]", rendered.join(", "));
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Serialization of these envelopes cannot fail: no maps, no non-string keys.
    serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}
