use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use baybayin_engine::baybayin::{explain, format_text, transliterate};

#[derive(Parser)]
#[command(name = "baytool", about = "Baybayin transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text to Baybayin
    Convert {
        /// Text to transliterate; reads stdin line by line when omitted
        text: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the per-syllable breakdown for a phrase
    Explain {
        /// Text to break down
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run phrases from a file and record results to JSONL
    Snapshot {
        /// Path to the input file (one phrase per line)
        input_file: String,
        /// Path to the output JSONL file
        output_file: String,
    },

    /// Compare current output against a saved snapshot
    DiffSnapshot {
        /// Path to the input file (one phrase per line)
        input_file: String,
        /// Path to the baseline JSONL snapshot file
        baseline_file: String,
    },
}

/// A single snapshot entry (one per phrase).
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotEntry {
    text: String,
    baybayin: String,
}

fn read_phrases(input_file: &str) -> Vec<String> {
    let file = fs::File::open(input_file).unwrap_or_else(|e| {
        eprintln!("Failed to open input file {}: {}", input_file, e);
        process::exit(1);
    });
    BufReader::new(file)
        .lines()
        .map(|l| {
            l.unwrap_or_else(|e| {
                eprintln!("Failed to read line: {}", e);
                process::exit(1);
            })
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect()
}

fn run_convert(text: Vec<String>, json: bool) {
    let phrases: Vec<String> = if text.is_empty() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
            eprintln!("Failed to read stdin: {}", e);
            process::exit(1);
        });
        buf.lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect()
    } else {
        vec![text.join(" ")]
    };

    if json {
        for phrase in &phrases {
            let entry = SnapshotEntry {
                baybayin: transliterate(phrase),
                text: phrase.clone(),
            };
            let line = serde_json::to_string(&entry).expect("JSON serialization failed");
            println!("{}", line);
        }
        return;
    }

    if phrases.len() == 1 {
        println!("{}", transliterate(&phrases[0]));
        return;
    }

    let text_width = phrases.iter().map(|p| p.width()).max().unwrap_or(0);
    for phrase in &phrases {
        let pad = text_width.saturating_sub(phrase.width());
        println!("{}{}  {}", phrase, " ".repeat(pad), transliterate(phrase));
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text, json } => run_convert(text, json),

        Command::Explain { text, json } => {
            let result = explain(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).expect("JSON serialization failed")
                );
            } else {
                print!("{}", format_text(&result));
            }
        }

        Command::Snapshot {
            input_file,
            output_file,
        } => {
            let phrases = read_phrases(&input_file);

            let file = fs::File::create(&output_file).unwrap_or_else(|e| {
                eprintln!("Failed to create output file {}: {}", output_file, e);
                process::exit(1);
            });
            let mut writer = BufWriter::new(file);

            for phrase in &phrases {
                let entry = SnapshotEntry {
                    baybayin: transliterate(phrase),
                    text: phrase.clone(),
                };
                let line = serde_json::to_string(&entry).expect("JSON serialization failed");
                writeln!(writer, "{}", line).unwrap_or_else(|e| {
                    eprintln!("Failed to write: {}", e);
                    process::exit(1);
                });
            }

            eprintln!(
                "Snapshot written: {} phrases -> {}",
                phrases.len(),
                output_file
            );
        }

        Command::DiffSnapshot {
            input_file,
            baseline_file,
        } => {
            let phrases = read_phrases(&input_file);

            let baseline_content = fs::read_to_string(&baseline_file).unwrap_or_else(|e| {
                eprintln!("Failed to read baseline file {}: {}", baseline_file, e);
                process::exit(1);
            });
            let mut baseline: HashMap<String, SnapshotEntry> = HashMap::new();
            for line in baseline_content.lines() {
                if line.trim().is_empty() {
                    continue;
                }
                let entry: SnapshotEntry = serde_json::from_str(line).unwrap_or_else(|e| {
                    eprintln!("Failed to parse baseline JSONL: {}", e);
                    process::exit(1);
                });
                baseline.insert(entry.text.clone(), entry);
            }

            let mut changed = 0usize;
            let mut same = 0usize;
            let mut new_count = 0usize;
            let total = phrases.len();

            for phrase in &phrases {
                let current = transliterate(phrase);

                match baseline.get(phrase) {
                    Some(base) => {
                        if base.baybayin != current {
                            changed += 1;
                            println!(
                                "  CHANGED: {} -> {} (was: {})",
                                phrase, current, base.baybayin
                            );
                        } else {
                            same += 1;
                        }
                    }
                    None => {
                        new_count += 1;
                        println!("  NEW:     {} -> {}", phrase, current);
                    }
                }
            }

            println!();
            println!("=== Summary ===");
            println!("  Total:    {total}");
            println!("  Same:     {same}");
            println!("  Changed:  {changed}");
            println!("  New:      {new_count}");

            if changed > 0 {
                process::exit(1);
            }
        }
    }
}
