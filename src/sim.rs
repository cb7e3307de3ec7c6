//! Driver loop owning a [`Board`] on a worker thread.
//!
//! The board itself is synchronous; this loop decides the cadence. It
//! advances one whole generation at a time between command polls, so a
//! snapshot can never observe a half-applied generation.

use std::{
    sync::mpsc,
    thread::{self, JoinHandle},
    time::{Duration, SystemTime},
};

use log::{debug, info};

use crate::{Board, Pos, SeedMode};

/// State published to the view on request.
#[derive(Debug, Clone)]
pub struct Frame {
    pub cells: Vec<Pos>,
    pub generation: u64,
    pub population: usize,
    /// Simulated seconds, the sum of tick intervals applied while running.
    pub elapsed: f64,
    pub running: bool,
}

pub enum SimCmd {
    Snapshot(mpsc::Sender<Frame>),
    /// Start or pause the cadence.
    Toggle,
    /// Append a single cell to the pattern; honored only while paused.
    Place(Pos),
    Reset,
    Accelerate,
    Decelerate,
}

pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    pub fn snapshot(&self) -> Frame {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).unwrap();
        receiver.recv().unwrap()
    }

    pub fn send(&self, cmd: SimCmd) {
        self.sender.send(cmd).unwrap();
    }
}

pub struct Sim {
    thread: JoinHandle<()>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    /// Seeds a fresh board with `pattern` and starts the loop, paused.
    pub fn spawn(pattern: impl IntoIterator<Item = Pos>) -> Self {
        let mut board = Board::new();
        board.seed(pattern, SeedMode::Replace);
        info!("seeded board with {} cells", board.population());

        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, board));

        Self { sender, thread }
    }

    pub fn handle(&self) -> SimHandle {
        let sender = self.sender.clone();
        SimHandle { sender }
    }

    pub fn join(self) {
        self.thread.join().unwrap();
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);
const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(25);
const MAX_TICK_INTERVAL: Duration = Duration::from_millis(1600);

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, mut board: Board) {
    let mut running = false;
    let mut interval = DEFAULT_TICK_INTERVAL;
    let mut elapsed = 0.0;
    let mut last_update = SystemTime::now();

    loop {
        if let Ok(cmd) = receiver.try_recv() {
            match cmd {
                SimCmd::Snapshot(sender) => {
                    let frame = Frame {
                        cells: board.snapshot(),
                        generation: board.generation(),
                        population: board.population(),
                        elapsed,
                        running,
                    };
                    sender.send(frame).unwrap();
                }
                SimCmd::Toggle => {
                    running = !running;
                    last_update = SystemTime::now();
                    info!("simulation {}", if running { "running" } else { "paused" });
                }
                SimCmd::Place(pos) => {
                    if !running {
                        board.seed([pos], SeedMode::Append);
                        debug!("placed cell at ({}, {})", pos.x, pos.y);
                    }
                }
                SimCmd::Reset => {
                    board.reset();
                    running = false;
                    elapsed = 0.0;
                    info!("board reset");
                }
                SimCmd::Accelerate => {
                    interval = (interval / 2).max(MIN_TICK_INTERVAL);
                    debug!("tick interval now {interval:?}");
                }
                SimCmd::Decelerate => {
                    interval = (interval * 2).min(MAX_TICK_INTERVAL);
                    debug!("tick interval now {interval:?}");
                }
            }
        }

        let since_update = SystemTime::now()
            .duration_since(last_update)
            .unwrap_or_default();
        if running && since_update > interval {
            board.step();
            elapsed += interval.as_secs_f64();
            last_update = SystemTime::now();
        }

        thread::sleep(EVT_CHECK_TIMEOUT);
    }
}
