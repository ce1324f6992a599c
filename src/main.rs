use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use chess_duel::engines::engine_config::EngineConfig;
use chess_duel::engines::engine_select::SearchStrategy;
use chess_duel::errors::ChessResult;
use chess_duel::game_state::game_state::GameState;
use chess_duel::move_generation::perft::{perft, perft_multi_threaded};
use chess_duel::session::game_session::{GameOutcome, GameSession, PlayerKind};
use chess_duel::utils::move_log::MoveLog;
use chess_duel::utils::render_game_state::render_game_state;

#[derive(Parser, Debug)]
#[command(
    name = "chess_duel",
    version,
    about = "Chess rules engine with minimax and negamax opponents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let two engines play each other from the starting position.
    Play {
        /// Strategy for White; falls back to CHESS_DUEL_STRATEGY.
        #[arg(long)]
        light: Option<SearchStrategy>,
        /// Strategy for Black; falls back to CHESS_DUEL_STRATEGY.
        #[arg(long)]
        dark: Option<SearchStrategy>,
        /// Search depth in plies; falls back to CHESS_DUEL_DEPTH.
        #[arg(long)]
        depth: Option<u8>,
        /// Tie-break seed; falls back to CHESS_DUEL_SEED.
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many plies.
        #[arg(long, default_value_t = 200)]
        max_plies: usize,
        /// Append one line per engine move to this file.
        #[arg(long)]
        move_log: Option<PathBuf>,
    },
    /// Count leaf positions from the starting position.
    Perft {
        #[arg(long, default_value_t = 4)]
        depth: u8,
        /// One worker thread per root move.
        #[arg(long)]
        threads: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Play {
            light,
            dark,
            depth,
            seed,
            max_plies,
            move_log,
        } => run_play(light, dark, depth, seed, max_plies, move_log),
        Command::Perft { depth, threads } => run_perft(depth, threads),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "chess_duel failed");
            ExitCode::FAILURE
        }
    }
}

fn run_play(
    light: Option<SearchStrategy>,
    dark: Option<SearchStrategy>,
    depth: Option<u8>,
    seed: Option<u64>,
    max_plies: usize,
    move_log: Option<PathBuf>,
) -> ChessResult<()> {
    let base = EngineConfig::from_env()?;
    let depth = depth.unwrap_or(base.depth).max(1);
    let seed = seed.or(base.seed);
    let config_for = |strategy: Option<SearchStrategy>| EngineConfig {
        strategy: strategy.unwrap_or(base.strategy),
        depth,
        seed,
    };

    let mut session = GameSession::new(
        PlayerKind::Engine(config_for(light)),
        PlayerKind::Engine(config_for(dark)),
    );
    if let Some(path) = move_log {
        session = session.with_move_log(MoveLog::open(path)?);
    }

    while session.outcome() == GameOutcome::InProgress
        && session.state().move_history.len() < max_plies
    {
        session.request_engine_move()?;
        // One poll per frame keeps this loop free to do other work.
        let mut frames = 0u32;
        let mv = loop {
            if let Some(mv) = session.poll_engine()? {
                break mv;
            }
            frames += 1;
            if frames % 100 == 0 {
                debug!(nodes = session.search_nodes().unwrap_or(0), "engine still thinking");
            }
            thread::sleep(Duration::from_millis(10));
        };
        println!("{:>3}. {}", session.state().move_history.len(), mv.notation());
    }

    println!("{}", render_game_state(session.state()));
    println!("{}", session.score_sheet());
    let outcome = session.outcome();
    match outcome {
        GameOutcome::Checkmate { winner } => println!("Checkmate, {winner} wins"),
        GameOutcome::Stalemate => println!("Draw by stalemate"),
        GameOutcome::FiftyMoveRule => println!("Draw by the fifty-move rule"),
        GameOutcome::InProgress => println!("Stopped after {max_plies} plies"),
    }
    info!(?outcome, plies = session.state().move_history.len(), "game finished");
    Ok(())
}

fn run_perft(depth: u8, threads: bool) -> ChessResult<()> {
    let mut game = GameState::new_game();
    let started = Instant::now();
    let counts = if threads {
        perft_multi_threaded(&game, depth)?
    } else {
        perft(&mut game, depth)
    };
    let elapsed = started.elapsed();
    println!(
        "perft({depth}) nodes={} captures={} en_passant={} castles={} promotions={} \
         checks={} checkmates={} time={:.3}s",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        elapsed.as_secs_f64()
    );
    Ok(())
}
