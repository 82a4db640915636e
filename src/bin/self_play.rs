use std::env;
use std::process;
use std::sync::Arc;
use std::thread;

use draughts_engine::board::{SearchConfig, StateError, StdoutLogger};
use draughts_engine::Game;

const DEFAULT_DEPTH: i32 = 6;
const DEFAULT_MAX_PLIES: usize = 200;

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize, default: T, name: &str) -> T {
    match args.get(idx) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid {name}: {raw}");
            eprintln!("usage: self_play [depth] [max_plies]");
            process::exit(2);
        }),
    }
}

fn print_rows(rows: &[u32; 8]) {
    for word in rows {
        println!("  {word:08x}");
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth = parse_arg(&args, 1, DEFAULT_DEPTH, "depth");
    let max_plies = parse_arg(&args, 2, DEFAULT_MAX_PLIES, "max_plies");

    let threads = thread::available_parallelism().map_or(1, |n| n.get());
    let config = SearchConfig::with_depth(depth)
        .threads(threads)
        .with_logger(Arc::new(StdoutLogger));

    let mut game = Game::from_start();
    println!("start, balance {:.1}", game.current().balance());
    print_rows(&game.current().board().encode());

    while game.plies() < max_plies {
        let mover = game.current().turn();
        match game.play_with_config(&config) {
            Ok(state) => {
                let mv = state
                    .last_move()
                    .map_or_else(String::new, ToString::to_string);
                let balance = state.balance();
                let rows = state.board().encode();
                println!("ply {}: {mover} plays {mv}, balance {balance:.1}", game.plies());
                print_rows(&rows);
            }
            Err(StateError::Terminal) => break,
            Err(err) => {
                eprintln!("search failed: {err}");
                process::exit(1);
            }
        }
    }

    if game.is_over() {
        println!("{} has no move and loses", game.current().turn());
    } else {
        println!("stopped after {} plies", game.plies());
    }
}
