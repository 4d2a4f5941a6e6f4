//! Tiny Arcade entry point
//!
//! On the web the host page drives the exported handles; the start hook only
//! sets up logging. Natively this runs a headless replay of both games.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    tiny_arcade::web::init_logging();
    log::info!("Tiny Arcade starting...");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames to simulate before giving up on a miss
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u32 = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tiny Arcade (native) starting...");

    // Tic-tac-toe: replay cell indices from the command line
    let moves: Vec<usize> = std::env::args()
        .skip(1)
        .filter_map(|arg| match arg.parse() {
            Ok(index) => Some(index),
            Err(_) => {
                log::warn!("Skipping non-numeric move {arg:?}");
                None
            }
        })
        .collect();
    let moves = if moves.is_empty() {
        vec![0, 3, 1, 4, 2]
    } else {
        moves
    };
    replay_tic_tac_toe(&moves);

    // Paddle game: hands off the keys, run until the first miss
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    run_paddle_demo(seed);
}

#[cfg(not(target_arch = "wasm32"))]
fn replay_tic_tac_toe(moves: &[usize]) {
    use tiny_arcade::TicTacToe;

    let mut game = TicTacToe::new();
    println!("\nTic-tac-toe: {}", game.status());
    for &index in moves {
        match game.apply_move(index) {
            Some(status) => println!("  move {index}: {status}"),
            None => println!("  move {index}: ignored"),
        }
    }
    for row in game.board().cells().chunks(3) {
        let row: Vec<&str> = row
            .iter()
            .map(|c| if c.is_empty() { "." } else { c.as_str() })
            .collect();
        println!("  {}", row.join(" "));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_paddle_demo(seed: u64) {
    use tiny_arcade::{FrameEvent, PaddleGame};

    let mut game = PaddleGame::new(seed);
    println!("\nPaddle game (seed {seed})");
    for frame in 0..MAX_DEMO_FRAMES {
        for event in game.advance_frame() {
            match event {
                FrameEvent::PaddleHit { score, speed } => {
                    println!("  frame {frame}: hit #{score} at speed {speed:.2}")
                }
                FrameEvent::Missed { score } => {
                    println!("  frame {frame}: missed with score {score}");
                    println!("  best this session: {}", game.best());
                    return;
                }
                _ => {}
            }
        }
    }
    println!("  no miss after {MAX_DEMO_FRAMES} frames");
}
