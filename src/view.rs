//! Terminal presentation. Translates keys into simulation commands and
//! renders frames on a fixed refresh.

use std::{
    io::{stdin, stdout},
    process::exit,
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{pos, rule::CellSet, Frame, Pos, SimCmd, SimHandle};

use canvas::Canvas;
mod canvas;

pub struct View {
    thread: JoinHandle<()>,
}

impl View {
    pub fn spawn(handle: SimHandle) -> Self {
        let thread = thread::spawn(|| view_loop(handle));
        Self { thread }
    }

    pub fn join(self) {
        self.thread.join().unwrap();
    }
}

#[derive(Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    Toggle,
    Place,
    Reset,
    Accelerate,
    Decelerate,
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    let stdout = stdout().into_raw_mode().unwrap();
    for c in stdin().keys() {
        let command = match c.unwrap() {
            Key::Char('q') => InputCmd::Exit,
            Key::Up => InputCmd::Move(Dir::Up),
            Key::Down => InputCmd::Move(Dir::Down),
            Key::Left => InputCmd::Move(Dir::Left),
            Key::Right => InputCmd::Move(Dir::Right),
            Key::Char(' ') => InputCmd::Toggle,
            Key::Char('c') => InputCmd::Place,
            Key::Esc => InputCmd::Reset,
            Key::Char('+') => InputCmd::Accelerate,
            Key::Char('-') => InputCmd::Decelerate,
            _ => continue,
        };

        sender.send(command).unwrap();
    }
    drop(stdout);
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(100);

fn view_loop(handle: SimHandle) {
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(|| input_loop(sender));

    let mut view_origin = pos!(0, 0);
    loop {
        handle_inputs(&receiver, &mut view_origin, &handle);
        let frame = handle.snapshot();
        display_frame(view_origin, &frame);
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
}

/// The cell under the placement cursor, the middle of the screen.
fn cursor_pos(view_origin: Pos) -> Pos {
    let (width, height) = termion::terminal_size().unwrap();
    view_origin + pos!(width as i32 / 2, height as i32 / 2)
}

fn handle_inputs(
    receiver: &mpsc::Receiver<InputCmd>,
    view_origin: &mut Pos,
    handle: &SimHandle,
) {
    while let Ok(cmd) = receiver.try_recv() {
        match cmd {
            InputCmd::Exit => exit(0),
            InputCmd::Move(direction) => {
                *view_origin = *view_origin
                    + match direction {
                        Dir::Up => pos!(0, -4),
                        Dir::Down => pos!(0, 4),
                        Dir::Left => pos!(-4, 0),
                        Dir::Right => pos!(4, 0),
                    }
            }
            InputCmd::Toggle => handle.send(SimCmd::Toggle),
            InputCmd::Place => handle.send(SimCmd::Place(cursor_pos(*view_origin))),
            InputCmd::Reset => handle.send(SimCmd::Reset),
            InputCmd::Accelerate => handle.send(SimCmd::Accelerate),
            InputCmd::Decelerate => handle.send(SimCmd::Decelerate),
        }
    }
}

fn display_frame(view_origin: Pos, frame: &Frame) {
    let alive: CellSet = frame.cells.iter().copied().collect();

    let mut canvas = Canvas::from_screen();
    canvas.layer(|local| alive.contains(&(view_origin + local)).then_some('#'));
    if !frame.running {
        let cursor = cursor_pos(view_origin) - view_origin;
        canvas.layer(|local| (local == cursor && !alive.contains(&(view_origin + local))).then_some('+'));
    }

    let status = format!(
        "generation: {}  population: {}  time: {:.1}s  [{}]  space run/pause, c place, esc reset, +/- speed, q quit",
        frame.generation,
        frame.population,
        frame.elapsed,
        if frame.running { "running" } else { "paused" },
    );
    canvas.display(&status);
}
