use std::{env::args, fs, process::exit};

use log::info;

pub use utils::Pos;
mod utils;

pub use board::{Board, SeedMode};
pub mod board;

pub use rule::{candidates, neighbor_count, neighbors, next_generation, CellSet};
pub mod rule;

pub use sim::{Frame, Sim, SimCmd, SimHandle};
mod sim;

pub use view::View;
mod view;

/// Parses a plaintext pattern, one row per line, `#` marking an alive cell.
fn deserialize(str: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in str.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            _ => pos.x += 1,
        }
    }
    result
}

// a glider, headed down-right
const DEFAULT_PATTERN: &str = "
    .#.
    ..#
    ###
";

pub fn main() {
    env_logger::init();

    let actives = match args().nth(1) {
        Some(path) => {
            let content = fs::read_to_string(&path).unwrap_or_else(|err| {
                eprintln!("[error] failed to read '{path}': {err}");
                exit(1);
            });
            deserialize(&content)
        }
        None => deserialize(DEFAULT_PATTERN),
    };
    info!("loaded pattern of {} cells", actives.len());

    let simulation = Sim::spawn(actives);
    let view = View::spawn(simulation.handle());

    simulation.join();
    view.join();
}

#[test]
fn test_deserialize() {
    let cells = deserialize(".#.\n..#\n###\n");
    assert_eq!(
        cells,
        vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)]
    );
}
