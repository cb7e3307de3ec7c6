use std::io::{stdout, Write};

use crate::{pos, Pos};

/// Off-screen character buffer flushed to the terminal in a single write.
/// `from_screen` reserves the bottom terminal row for the status line.
pub struct Canvas {
    rows: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn from_screen() -> Self {
        let (width, height) = termion::terminal_size().unwrap();
        Self::new(width as usize, (height - 1) as usize)
    }

    pub fn new(width: usize, height: usize) -> Self {
        let rows = vec![vec![' '; width]; height];
        Self {
            rows,
            width,
            height,
        }
    }

    /// Paints every position for which `f` yields a char over previous layers.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(char) = f(pos!(x as i32, y as i32)) {
                    self.rows[y][x] = char;
                }
            }
        }
    }

    pub fn display(&self, status: &str) {
        let mut result = format!("{}", termion::clear::All);
        for (index, row) in self.rows.iter().enumerate() {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            result += &format!("{goto}");
            result.extend(row.iter());
        }
        let goto = termion::cursor::Goto(1, self.height as u16 + 1);
        result += &format!("{goto}{status}");
        print!("{result}");
        stdout().flush().unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_paints_and_overlays() {
        let mut canvas = Canvas::new(3, 2);
        canvas.layer(|pos| (pos == pos!(1, 1)).then_some('#'));
        canvas.layer(|pos| (pos == pos!(1, 1)).then_some('+'));
        assert_eq!(canvas.rows[1][1], '+');
        assert_eq!(canvas.rows[0][0], ' ');
    }
}
