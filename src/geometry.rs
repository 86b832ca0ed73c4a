use crate::errors::TspError;
use std::{fmt, str::FromStr};

/// A city location on the non-negative integer grid. Immutable once built;
/// non-negativity is enforced by the coordinate type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Point {
    x: u32,
    y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Accepts only unsigned decimal digits, i.e. rejects signs, empty fields
/// and anything else `u32::from_str` would wave through.
fn parse_coordinate(token: &str, original: &str) -> Result<u32, TspError> {
    let token = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TspError::MalformedCoordinate(original.to_string()));
    }
    token
        .parse()
        .map_err(|_| TspError::MalformedCoordinate(original.to_string()))
}

impl FromStr for Point {
    type Err = TspError;

    /// Parses the textual form `( <int> , <int> )` with arbitrary
    /// whitespace around the parentheses and the comma.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TspError::MalformedCoordinate(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .ok_or_else(malformed)?;

        let (x, y) = inner.split_once(',').ok_or_else(malformed)?;
        if y.contains(',') {
            return Err(malformed());
        }

        Ok(Self {
            x: parse_coordinate(x, s)?,
            y: parse_coordinate(y, s)?,
        })
    }
}
