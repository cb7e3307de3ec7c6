use std::ops::{Add, Sub};

/// A cell coordinate on the unbounded grid. Coordinates may be negative;
/// the only limit is the i32 range.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(1, 2) + pos!(-3, 4), pos!(-2, 6));
    assert_eq!(pos!(1, 2) - pos!(3, 2), pos!(-2, 0));
}
