//! Solo Color Merge
//!
//! Generates a puzzle and plays it by following hints until every ball sits
//! beside its target, then locks the board in.
//!
//! ```text
//! cargo run -p solo -- [difficulty] [seed]
//! ```

use std::env;
use std::process::ExitCode;

use colormerge::prelude::*;
use colormerge::solver::Dispatch;

const MAX_TURNS: usize = 60;

fn main() -> ExitCode {
    colormerge::console::init();

    let mut args = env::args().skip(1);
    let difficulty = args
        .next()
        .map(|tag| Difficulty::from_tag_or_default(&tag))
        .unwrap_or_default();
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let config = GameConfig::load("colormerge.toml").unwrap_or_default();
    let seed = seed.or(config.random_seed);
    let mut generator = match seed {
        Some(seed) => PuzzleGenerator::seeded(seed),
        None => PuzzleGenerator::from_os_rng(),
    };
    let mut board = generator.generate(difficulty);

    println!("\n{} puzzle, {} balls:", difficulty, board.ball_count());
    println!("{board}");

    let (hints, mut events) = HintService::<u8>::spawn(config);
    let mut turns = 0;

    let finished = loop {
        if turns == MAX_TURNS {
            println!("Giving up after {MAX_TURNS} turns.");
            break false;
        }

        let response = match hints.request(0, &board) {
            Ok(Dispatch::Immediate(response)) => response,
            Ok(Dispatch::Queued) => match events.blocking_recv() {
                Some(event) => event.response,
                None => break false,
            },
            Err(err) => {
                eprintln!("hint failed: {err}");
                break false;
            }
        };

        match response {
            HintResponse::Ready => break true,
            HintResponse::NoHint => {
                println!("No helpful move found.");
                break false;
            }
            HintResponse::Move(hint) => {
                turns += 1;
                println!(
                    "Turn {turns}: {} ({} steps left, {} confidence)",
                    hint.next, hint.total_steps, hint.confidence
                );
                board = apply_move(&board, hint.next.direction).board;
                println!("{board}");
            }
        }
    };

    hints.shutdown();

    if !finished {
        return ExitCode::FAILURE;
    }

    match submit(&board) {
        Ok(locked) => {
            println!("Locked in after {turns} turns:");
            println!("{locked}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("submit rejected: {err}");
            ExitCode::FAILURE
        }
    }
}
