//! Word Morph - CLI
//!
//! Word-transformation puzzle with an interactive TUI, a heuristic
//! auto-player and analysis tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordmorph::{
    commands::{analyze_pair, random_pairs, run_all_validations, run_benchmark, run_demo,
        solve_puzzle, SolveConfig},
    core::Word,
    output::{
        print_analysis_report, print_benchmark_result, print_solve_result,
        print_validation_result,
    },
    wordlists::{WORDS, loader::{load_from_file, words_from_slice}},
};

#[derive(Parser)]
#[command(
    name = "wordmorph",
    about = "Word transformation puzzle: delete, move and exchange letters to reach a target word",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Run the scripted demo walkthrough
    Demo,

    /// Run the cross-component self-checks
    Validate,

    /// Analyze a word pair: letter feedback, similarity, suggestion
    Analyze {
        /// The current word
        current: String,

        /// The target word
        target: String,
    },

    /// Auto-play a puzzle with the suggestion heuristic
    Solve {
        /// The starting word
        start: String,

        /// The target word
        target: String,

        /// Show per-step cost details
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many moves
        #[arg(long, default_value_t = 64)]
        max_moves: usize,
    },

    /// Auto-play many random puzzles and report statistics
    Benchmark {
        /// Number of random puzzles to play
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,

        /// Give up after this many moves per puzzle
        #[arg(long, default_value_t = 64)]
        max_moves: usize,
    },
}

/// Load the word pool based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words),
        Commands::Demo => {
            println!("{}", run_demo()?);
            Ok(())
        }
        Commands::Validate => {
            let result = run_all_validations();
            print_validation_result(&result);
            if result.passed {
                Ok(())
            } else {
                Err(anyhow::anyhow!("validation failed"))
            }
        }
        Commands::Analyze { current, target } => {
            print_analysis_report(&analyze_pair(&current, &target));
            Ok(())
        }
        Commands::Solve {
            start,
            target,
            verbose,
            max_moves,
        } => {
            let mut config = SolveConfig::new(start, target);
            config.max_moves = max_moves;
            print_solve_result(&solve_puzzle(&config), verbose);
            Ok(())
        }
        Commands::Benchmark { count, max_moves } => {
            let pairs = random_pairs(&words, count);
            if pairs.is_empty() {
                return Err(anyhow::anyhow!(
                    "word pool needs at least two words for a benchmark"
                ));
            }
            println!("Playing {} random puzzles...", pairs.len());
            print_benchmark_result(&run_benchmark(&pairs, max_moves));
            Ok(())
        }
    }
}

fn run_play_command(words: Vec<Word>) -> Result<()> {
    use wordmorph::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}
