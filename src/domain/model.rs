use std::fmt;
use std::str::FromStr;

/// Cardinal direction, in clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }

    /// 順時針轉一格
    pub fn right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// 逆時針轉一格
    pub fn left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit offset `(dx, dy)` of one step in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == upper)
            .ok_or(UnknownDirection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
    pub facing: Direction,
}

impl Position {
    pub fn new(x: i64, y: i64, facing: Direction) -> Self {
        Self { x, y, facing }
    }

    /// Position `step` units ahead, facing unchanged. `None` if a coordinate
    /// would overflow.
    pub fn advanced(&self, step: i64) -> Option<Self> {
        let (dx, dy) = self.facing.delta();
        Some(Self {
            x: self.x.checked_add(dx.checked_mul(step)?)?,
            y: self.y.checked_add(dy.checked_mul(step)?)?,
            facing: self.facing,
        })
    }
}

/// 交給 `Robot::place` 的原始參數，數值檢查由機器人負責
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArg {
    Int(i64),
    Text(String),
}

impl RawArg {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawArg::Int(n) => Some(*n),
            RawArg::Text(s) => s.trim().parse::<i64>().ok(),
        }
    }
}

impl From<i64> for RawArg {
    fn from(value: i64) -> Self {
        RawArg::Int(value)
    }
}

impl From<i32> for RawArg {
    fn from(value: i32) -> Self {
        RawArg::Int(value.into())
    }
}

impl From<&str> for RawArg {
    fn from(value: &str) -> Self {
        RawArg::Text(value.to_string())
    }
}

impl From<String> for RawArg {
    fn from(value: String) -> Self {
        RawArg::Text(value)
    }
}

impl fmt::Display for RawArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawArg::Int(n) => write!(f, "{}", n),
            RawArg::Text(s) => f.write_str(s),
        }
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place { x: String, y: String, facing: String },
    Move,
    Left,
    Right,
    Report,
    Quit,
    Unknown(String),
}
