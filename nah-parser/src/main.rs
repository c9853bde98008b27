use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};
use nah_parser_lib::{output, Analyzer, Orthography};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrthographyArg {
    Classical,
    Modern,
}

impl From<OrthographyArg> for Orthography {
    fn from(arg: OrthographyArg) -> Self {
        match arg {
            OrthographyArg::Classical => Orthography::Classical,
            OrthographyArg::Modern => Orthography::Modern,
        }
    }
}

#[derive(Parser)]
#[command(name = "nah-parser", about = "Nahuatl morphological parser")]
struct Cli {
    /// Nahuatl text to analyze. If omitted, reads from stdin.
    input: Option<String>,

    /// Orthography of the input and of the returned surface forms.
    #[arg(long, value_enum, default_value = "classical")]
    orthography: OrthographyArg,

    /// Output in bracketed {morpheme:category} format.
    #[arg(long)]
    bracketed: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let analyzer = Analyzer::new();

    match cli.input {
        Some(ref text) => process_line(text, &analyzer, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                if !line.trim().is_empty() {
                    process_line(&line, &analyzer, &cli);
                }
            }
        }
    }
}

fn process_line(line: &str, analyzer: &Analyzer, cli: &Cli) {
    for word in line.split_whitespace() {
        let word = word.trim_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';'));
        if word.is_empty() {
            continue;
        }
        let analysis = analyzer.analyze(word, cli.orthography.into());

        if cli.bracketed {
            match analysis.parsings.first() {
                Some(parsing) => println!("{}", output::to_bracketed(parsing)),
                None => println!(
                    "{}",
                    analysis.error.unwrap_or_else(|| format!("no parse for '{word}'"))
                ),
            }
        } else {
            let json = if cli.pretty {
                serde_json::to_string_pretty(&analysis)
            } else {
                serde_json::to_string(&analysis)
            };
            println!("{}", json.expect("JSON serialization failed"));
        }
    }
}
