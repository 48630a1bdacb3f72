use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mtg_goldfish::card::CardDatabase;
use mtg_goldfish::game::{FirstDrawRule, GameConfig, DAMAGE_THRESHOLD, DEFAULT_MAX_TURNS};
use mtg_goldfish::rng::GameRng;
use mtg_goldfish::sims::{
    register_standard_cards, BurnStrategy, SavannahBoltStrategy, StandardCards,
};
use mtg_goldfish::simulation::{parse_deck_file, Deck, Session, Summary, DEFAULT_TRIALS};
use mtg_goldfish::strategy::Strategy;

#[derive(Parser)]
#[command(name = "goldfish")]
#[command(about = "Goldfish simulator: turns needed to deal 20 damage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyChoice {
    /// Land drop, lions first, bolts when lethal
    SavannahBolt,
    /// One Lightning Bolt per turn
    Burn,
}

#[derive(clap::Args)]
struct GameArgs {
    /// Strategy piloting the deck
    #[arg(long, value_enum, default_value = "savannah-bolt")]
    strategy: StrategyChoice,

    /// Number of games to simulate
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    num_games: usize,

    /// Seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start the game on the play
    #[arg(long)]
    on_the_play: bool,

    /// Skip the first draw on the play (otherwise every turn draws)
    #[arg(long)]
    skip_first_draw: bool,

    /// Abandon a game after this many turns
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u32,

    /// Run games on a single thread
    #[arg(long)]
    sequential: bool,
}

impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig {
            on_the_play: self.on_the_play,
            first_draw: if self.skip_first_draw {
                FirstDrawRule::SkipOnPlay
            } else {
                FirstDrawRule::Literal
            },
            max_turns: self.max_turns,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a batch of games
    Run {
        /// Deck file to use
        #[arg(short, long, default_value = "decks/savannah_bolt.txt")]
        deck: String,

        #[command(flatten)]
        game: GameArgs,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,

        /// Play a single game, logging every draw and play
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare two decks with the same strategy
    Compare {
        /// First deck file
        deck1: String,

        /// Second deck file
        deck2: String,

        #[command(flatten)]
        game: GameArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let mut db = CardDatabase::new();
    let cards = match register_standard_cards(&mut db) {
        Ok(cards) => cards,
        Err(e) => {
            eprintln!("✗ Failed to register cards: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Run {
            deck,
            game,
            json,
            verbose,
        } => {
            let strategy = build_strategy(game.strategy, cards);
            let num_games = if verbose { 1 } else { game.num_games };
            run_simulation(&db, strategy.as_ref(), &deck, &game, num_games, json);
        }
        Commands::Compare { deck1, deck2, game } => {
            let strategy = build_strategy(game.strategy, cards);
            compare_decks(&db, strategy.as_ref(), &deck1, &deck2, &game);
        }
    }
}

fn build_strategy(choice: StrategyChoice, cards: StandardCards) -> Box<dyn Strategy> {
    match choice {
        StrategyChoice::SavannahBolt => Box::new(SavannahBoltStrategy::new(cards)),
        StrategyChoice::Burn => Box::new(BurnStrategy::new(cards.bolt)),
    }
}

fn load_deck(db: &CardDatabase, deck_file: &str) -> Deck {
    match parse_deck_file(deck_file, db) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("✗ Failed to parse deck file '{}': {}", deck_file, e);
            std::process::exit(1);
        }
    }
}

/// Run one batch behind a progress bar. None when no game reached the threshold.
fn simulate(
    db: &CardDatabase,
    strategy: &dyn Strategy,
    deck: Deck,
    args: &GameArgs,
    num_games: usize,
    seed: u64,
) -> Option<Summary> {
    let bar = ProgressBar::new(num_games as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games ({per_sec})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    if num_games == 1 {
        bar.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut session = Session::new(deck, strategy, db)
        .with_config(args.config())
        .with_seed(seed)
        .parallel(!args.sequential);

    let summary = session
        .simulate_with_progress(num_games, |_| bar.inc(1))
        .and_then(|session| session.converged_summary());
    bar.finish_and_clear();

    match summary {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("✗ Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_simulation(
    db: &CardDatabase,
    strategy: &dyn Strategy,
    deck_file: &str,
    args: &GameArgs,
    num_games: usize,
    json: bool,
) {
    let deck = load_deck(db, deck_file);
    let deck_size = deck.len();
    let seed = args.seed.unwrap_or_else(|| GameRng::new(None).seed());

    let start = std::time::Instant::now();
    let summary = simulate(db, strategy, deck, args, num_games, seed);
    let elapsed = start.elapsed();

    if json {
        let value = match &summary {
            Some(summary) => serde_json::to_value(summary),
            None => Ok(serde_json::json!({
                "trials": num_games,
                "converged": 0,
                "did_not_converge": num_games,
            })),
        };
        match value.and_then(|value| serde_json::to_string_pretty(&value)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("\n=== Goldfish Simulator ===\n");
    println!("Deck: {} ({} cards)", deck_file, deck_size);
    println!("Strategy: {}", strategy.name());
    println!("Games: {}", num_games);
    println!("Seed: {}", seed);
    println!("{}", if args.on_the_play { "On the play" } else { "On the draw" });
    println!();

    match &summary {
        Some(summary) => print_summary(summary),
        None => {
            println!("=== Results ===\n");
            println!(
                "No game dealt {} damage within {} turns",
                DAMAGE_THRESHOLD, args.max_turns
            );
            println!("  No kill: {:5.1}% ({})", 100.0, num_games);
        }
    }

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} games/sec)",
        elapsed,
        num_games as f64 / elapsed.as_secs_f64()
    );
}

fn print_summary(summary: &Summary) {
    println!("=== Results ===\n");
    println!("Average kill turn: {:.3} (± {:.3})", summary.mean, summary.standard_error);
    println!("Median: {:.1}, std dev: {:.3}", summary.median, summary.std_dev);
    println!("Fastest: turn {}, slowest: turn {}", summary.min, summary.max);
    println!();

    println!("Turn distribution:");
    for (turn, count) in &summary.distribution {
        let pct = *count as f64 / summary.trials as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  Turn {:2}: {:5.1}% {} ({})", turn, pct, bar, count);
    }

    if summary.did_not_converge > 0 {
        let pct = summary.did_not_converge as f64 / summary.trials as f64 * 100.0;
        println!("  No kill: {:5.1}% ({})", pct, summary.did_not_converge);
    }
}

fn compare_decks(
    db: &CardDatabase,
    strategy: &dyn Strategy,
    deck1_file: &str,
    deck2_file: &str,
    args: &GameArgs,
) {
    println!("\n=== Goldfish Deck Comparison ===\n");
    println!("Deck 1: {}", deck1_file);
    println!("Deck 2: {}", deck2_file);
    println!("Strategy: {}", strategy.name());
    println!("Games per deck: {}", args.num_games);
    println!();

    let deck1 = load_deck(db, deck1_file);
    let deck2 = load_deck(db, deck2_file);
    let seed = args.seed.unwrap_or_else(|| GameRng::new(None).seed());

    let start = std::time::Instant::now();

    // Same seeds for both decks
    println!("Running deck 1...");
    let summary1 = simulate(db, strategy, deck1, args, args.num_games, seed);
    println!("Running deck 2...");
    let summary2 = simulate(db, strategy, deck2, args, args.num_games, seed);

    let elapsed = start.elapsed();

    println!("\n=== Results ===\n");
    println!("{:<20} {:>12} {:>12}", "", "Deck 1", "Deck 2");
    println!(
        "{:<20} {:>12} {:>12}",
        "Average kill turn",
        stat(summary1.as_ref(), |s| format!("{:.3}", s.mean)),
        stat(summary2.as_ref(), |s| format!("{:.3}", s.mean))
    );
    println!(
        "{:<20} {:>12} {:>12}",
        "Median",
        stat(summary1.as_ref(), |s| format!("{:.1}", s.median)),
        stat(summary2.as_ref(), |s| format!("{:.1}", s.median))
    );
    println!(
        "{:<20} {:>11.1}% {:>11.1}%",
        "Kill rate",
        summary1.as_ref().map_or(0.0, Summary::convergence_rate) * 100.0,
        summary2.as_ref().map_or(0.0, Summary::convergence_rate) * 100.0
    );

    println!();
    match (&summary1, &summary2) {
        (Some(s1), Some(s2)) => {
            let diff = s2.mean - s1.mean;
            if diff.abs() < 0.01 {
                println!("Decks are equivalent");
            } else if diff < 0.0 {
                println!("Deck 2 kills {:.3} turns faster", -diff);
            } else {
                println!("Deck 1 kills {:.3} turns faster", diff);
            }
        }
        (Some(_), None) => println!("Only deck 1 ever kills"),
        (None, Some(_)) => println!("Only deck 2 ever kills"),
        (None, None) => println!("Neither deck kills within {} turns", args.max_turns),
    }

    println!("\nCompleted in {:.2?}", elapsed);
}

/// Formats a statistic, or "-" when no game converged
fn stat(summary: Option<&Summary>, f: impl Fn(&Summary) -> String) -> String {
    summary.map_or_else(|| "-".to_string(), f)
}
