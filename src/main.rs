//! Wordle Coach - CLI
//!
//! Play Wordle in a TUI or on plain stdin, with candidate or decision tree
//! hints, and tools to solve, evaluate and score words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::TypedValueParser};
use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_coach::{
    commands::{convert_tree, run_evaluation, run_simple, score_pair, solve_word},
    config::{DEFAULT_MAX_ATTEMPTS, Settings},
    game::{Dictionary, GameData, Session},
    hints::{DecisionTree, HintMode, TreeMode, TreeSet},
    logging,
    output::{
        print_convert_result, print_evaluation_result, print_score_result, print_solve_result,
    },
    wordlists::{
        HARD_TREE_JSON, SOLUTIONS, TREE_JSON,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Wordle with duplicate-safe scoring, hard mode and solver hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution word list (one word per line)
    #[arg(long, global = true)]
    solutions: Option<PathBuf>,

    /// Extra accepted guesses (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Decision tree for regular play
    #[arg(long, global = true)]
    tree: Option<PathBuf>,

    /// Decision tree for hard mode
    #[arg(long, global = true)]
    hard_tree: Option<PathBuf>,

    /// Play in hard mode
    #[arg(long, global = true)]
    hard: bool,

    /// Hint strategy
    #[arg(long, global = true, value_enum, default_value_t = HintMode::Candidates)]
    hints: HintMode,

    /// Guesses allowed per round
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    max_attempts: usize,

    /// Seed for choosing secrets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game on stdin/stdout
    Simple,

    /// Autoplay one secret with the selected hints
    Solve {
        /// The secret word
        word: String,
    },

    /// Autoplay every solution word and report the guess distribution
    Evaluate {
        /// Only test the first N solutions (candidate hints)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Score one guess against one secret
    Score { guess: String, secret: String },

    /// Rewrite a decision tree file in canonical JSON
    Convert {
        input: PathBuf,
        output: PathBuf,

        /// The tree was built for hard mode
        #[arg(long = "hard-mode")]
        hard_mode: bool,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    // Log lines would draw over the TUI
    let base = match cli.command {
        None | Some(Commands::Play) => LevelFilter::Error,
        Some(_) => LevelFilter::Warn,
    };
    logging::init(cli.verbose, base);

    let settings = Settings::default()
        .with_hard_mode(cli.hard)
        .with_hints(cli.hints)
        .with_max_attempts(cli.max_attempts);

    match cli.command.take().unwrap_or(Commands::Play) {
        Commands::Play => {
            use wordle_coach::interactive::{App, run_tui};

            let session = Session::new(load_data(&cli)?, settings, cli.seed)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = Session::new(load_data(&cli)?, settings, cli.seed)?;
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
                .context("simple game failed")
        }
        Commands::Solve { word } => {
            let result = solve_word(word.trim(), &load_data(&cli)?, &settings)
                .with_context(|| format!("could not solve {word}"))?;
            print_solve_result(&result, cli.verbose > 0);
            Ok(())
        }
        Commands::Evaluate { limit, no_progress } => {
            let result = run_evaluation(&load_data(&cli)?, &settings, limit, !no_progress)
                .context("evaluation failed")?;
            print_evaluation_result(&result);
            Ok(())
        }
        Commands::Score { guess, secret } => {
            let result = score_pair(guess.trim(), secret.trim())?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Convert {
            input,
            output,
            hard_mode,
        } => {
            let mode = if hard_mode {
                TreeMode::Hard
            } else {
                TreeMode::Regular
            };
            let result = convert_tree(&input, &output, mode)
                .with_context(|| format!("could not convert {}", input.display()))?;
            print_convert_result(&result, &output);
            Ok(())
        }
    }
}

/// Word lists and trees, from files where given and embedded data otherwise
///
/// The embedded trees only match the embedded solution list, so they are
/// skipped when custom solutions are loaded.
fn load_data(cli: &Cli) -> Result<GameData> {
    let custom = [&cli.solutions, &cli.guesses, &cli.tree, &cli.hard_tree];
    if custom.iter().all(|path| path.is_none()) {
        return GameData::embedded().context("embedded data is invalid");
    }

    let dictionary = match (&cli.solutions, &cli.guesses) {
        (Some(solutions), guesses) => Dictionary::load(solutions, guesses.as_deref())
            .with_context(|| format!("could not load {}", solutions.display()))?,
        (None, Some(guesses)) => {
            let extras = load_from_file(guesses)
                .with_context(|| format!("could not load {}", guesses.display()))?;
            Dictionary::new(words_from_slice(SOLUTIONS), extras)?
        }
        (None, None) => Dictionary::embedded(),
    };

    let embedded = cli.solutions.is_none();
    let regular = load_tree(
        cli.tree.as_deref(),
        embedded.then_some(TREE_JSON),
        TreeMode::Regular,
    )?;
    let hard = load_tree(
        cli.hard_tree.as_deref(),
        embedded.then_some(HARD_TREE_JSON),
        TreeMode::Hard,
    )?;

    Ok(GameData {
        dictionary: Arc::new(dictionary),
        trees: TreeSet::new(regular, hard),
    })
}

fn load_tree(
    path: Option<&Path>,
    fallback: Option<&str>,
    mode: TreeMode,
) -> Result<Option<DecisionTree>> {
    match (path, fallback) {
        (Some(path), _) => DecisionTree::from_file(path, mode)
            .map(Some)
            .with_context(|| format!("could not load {mode} tree {}", path.display())),
        (None, Some(json)) => Ok(Some(DecisionTree::from_json(json, mode)?)),
        (None, None) => Ok(None),
    }
}
