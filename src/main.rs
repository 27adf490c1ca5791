//! Wordle Bot - CLI
//!
//! Heuristic Wordle solver with automated, stdin and TUI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info, warn};
use std::path::{Path, PathBuf};
use wordle_bot::{
    commands::{
        SolveConfig, analyze_word, run_benchmark, run_simple, select_secrets, solve_word,
        top_words,
    },
    config::SolverConfig,
    core::{Corpus, Word},
    error::SolveError,
    interactive::{App, random_secret, run_tui},
    output::{
        print_analysis_result, print_benchmark_result, print_ranking, print_solution,
        print_solve_result, share_grid,
    },
    solver::Solver,
    wordlists::{
        default_corpus,
        loader::{load_exclusions, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_bot",
    about = "Wordle solver ranking words by letter frequency and position",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// File of past answers to drop from the wordlist
    #[arg(short = 'x', long, global = true)]
    exclude: Option<PathBuf>,

    /// Log each guess and the candidate counts
    #[arg(short, long, global = true)]
    debug: bool,

    /// Also trace constraints and the ranked candidates every round
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// The secret word; a random corpus word if omitted
        secret: Option<String>,
    },

    /// Simple CLI mode: guess a known secret on stdin
    Simple {
        /// The secret word to guess
        secret: String,
    },

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        secret: String,

        /// Print a shareable result grid for this puzzle number
        #[arg(short, long)]
        share: Option<u32>,

        /// Stop after this many guesses
        #[arg(short = 'm', long)]
        max_guesses: Option<usize>,
    },

    /// Show the score breakdown of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// List the top scoring words of the wordlist
    Rank {
        /// Number of words to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test; all words if omitted
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random word sample
        #[arg(long)]
        seed: Option<u64>,

        /// Benchmark against the words in this file instead
        #[arg(long)]
        secrets: Option<PathBuf>,
    },
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the corpus based on the -w and -x flags
fn load_corpus(wordlist: &str, exclude: Option<&Path>) -> Result<Corpus> {
    let corpus = match wordlist {
        "all" => default_corpus(),
        path => load_from_file(path).with_context(|| format!("loading wordlist '{path}'"))?,
    };

    let Some(exclude) = exclude else {
        return Ok(corpus);
    };

    let excluded = load_exclusions(exclude)
        .with_context(|| format!("loading exclusions '{}'", exclude.display()))?;
    let corpus = corpus.excluding(&excluded);
    if corpus.is_empty() {
        bail!("every word was excluded");
    }
    info!("{} words left after exclusions", corpus.len());
    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { secret: None });

    let level = if cli.verbose {
        LevelFilter::Trace
    } else if cli.debug {
        LevelFilter::Debug
    } else if matches!(command, Commands::Play { .. }) {
        // Log lines would tear the TUI
        LevelFilter::Off
    } else {
        LevelFilter::Info
    };
    init_logging(level);

    let corpus = load_corpus(&cli.wordlist, cli.exclude.as_deref())?;
    let config = SolverConfig::default().verbose(cli.verbose);
    let solver = Solver::with_config(&corpus, config);

    match command {
        Commands::Play { secret } => run_play_command(&corpus, config, secret.as_deref()),
        Commands::Simple { secret } => run_simple_command(&solver, &secret),
        Commands::Solve {
            secret,
            share,
            max_guesses,
        } => {
            let mut config = SolveConfig::new(secret);
            config.max_guesses = max_guesses;
            run_solve_command(&solver, config, share, cli.verbose || cli.debug)
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &corpus)
                .with_context(|| format!("analyzing '{word}'"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Rank { count } => {
            print_ranking(&top_words(&corpus, count));
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            secrets,
        } => run_benchmark_command(&solver, count, seed, secrets.as_deref()),
    }
}

fn run_solve_command(
    solver: &Solver<'_>,
    config: SolveConfig,
    share: Option<u32>,
    verbose: bool,
) -> Result<()> {
    let secret = config.secret.clone();
    let result = solve_word(config, solver).with_context(|| format!("solving '{secret}'"))?;

    print_solve_result(&result, verbose);
    if result.success {
        info!("Solved {} in {} guesses", result.secret, result.guesses.len());
    } else {
        warn!(
            "Could not solve {} ({} guesses played)",
            result.secret,
            result.guesses.len()
        );
    }

    if let Some(id) = share {
        println!("\n{}", share_grid(id, &result.feedback_log()));
    }
    Ok(())
}

fn run_simple_command(solver: &Solver<'_>, secret: &str) -> Result<()> {
    match run_simple(solver, secret) {
        Ok(solution) => {
            print_solution(&solution);
            info!(
                "Solved {} in {} guesses",
                solution.secret,
                solution.guess_count()
            );
            Ok(())
        }
        Err(SolveError::Aborted { attempts }) => {
            println!("\nGoodbye!");
            info!("Stopped after {attempts} guesses");
            Ok(())
        }
        Err(err) => Err(err).context("interactive game failed"),
    }
}

fn run_play_command(corpus: &Corpus, config: SolverConfig, secret: Option<&str>) -> Result<()> {
    let secret = match secret {
        Some(text) => Word::new(text).with_context(|| format!("invalid secret '{text}'"))?,
        None => random_secret(corpus).context("the wordlist is empty")?,
    };

    let stats = run_tui(App::new(corpus, config, secret))?;
    if stats.total_games > 0 {
        println!(
            "Played {} games, won {} ({:.0}%)",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        );
    }
    Ok(())
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    count: Option<usize>,
    seed: Option<u64>,
    secrets: Option<&Path>,
) -> Result<()> {
    let secrets = match secrets {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading secrets '{}'", path.display()))?
            .words()
            .to_vec(),
        None => select_secrets(solver.corpus(), count, seed),
    };

    println!("Running benchmark on {} words...", secrets.len());
    let result = run_benchmark(solver, &secrets, true);
    print_benchmark_result(&result);
    info!(
        "Benchmark finished: {:.2} average guesses, {:.1}% within six",
        result.average_guesses,
        result.success_rate()
    );
    Ok(())
}
