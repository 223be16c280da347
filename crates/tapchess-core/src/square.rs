//! Board coordinates
//!
//! Newtypes for files, ranks and squares so that x/y mix-ups do not compile.
//! A [`Square`] can only be built from in-range coordinates, which is what lets
//! the board lookups downstream stay infallible.

use std::fmt;

/// Board file (column), 0 = 'a' through 7 = 'h'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// Create a file from an index, `None` when out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(File(index))
    }

    /// Create a file from a character ('a'..='h')
    ///
    /// # Examples
    ///
    /// ```
    /// use tapchess_core::File;
    /// assert_eq!(File::from_char('e').map(File::index), Some(4));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(File(c as u8 - b'a')),
            _ => None,
        }
    }

    /// Convert file to character ('a'..='h')
    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Get the file index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// Board rank (row), 0 = rank 1 through 7 = rank 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// Create a rank from an index, `None` when out of range
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Rank(index))
    }

    /// Create a rank from its printed number (1-8)
    pub fn from_number(n: u8) -> Option<Self> {
        (1..=8).contains(&n).then(|| Rank(n - 1))
    }

    /// Convert rank to its printed number (1-8)
    pub fn to_number(self) -> u8 {
        self.0 + 1
    }

    /// Get the rank index (0-7)
    pub fn index(self) -> u8 {
        self.0
    }
}

/// One of the 64 board squares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Create a square from file and rank indices (both 0-7)
    ///
    /// ```
    /// use tapchess_core::Square;
    /// let e4 = Square::new(4, 3).unwrap();
    /// assert_eq!(e4.to_string(), "e4");
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        Some(Square {
            file: File::new(file)?,
            rank: Rank::new(rank)?,
        })
    }

    /// Square from its linear index `rank * 8 + file`
    pub fn from_index(index: u8) -> Option<Self> {
        Square::new(index % 8, index / 8)
    }

    /// Create a square from algebraic notation (e.g. "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank_num = chars.next()?.to_digit(10)? as u8;
        if chars.next().is_some() {
            return None;
        }

        Some(Square {
            file,
            rank: Rank::from_number(rank_num)?,
        })
    }

    pub fn file(self) -> File {
        self.file
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Linear index, `rank * 8 + file`
    pub fn index(self) -> u8 {
        self.rank.0 * 8 + self.file.0
    }

    /// All 64 squares in index order (a1, b1, ... h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }

    /// The square shifted by the given file/rank deltas, if still on the board
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file.0 as i8 + file_delta;
        let rank = self.rank.0 as i8 + rank_delta;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    pub(crate) fn to_engine(self) -> shakmaty::Square {
        shakmaty::Square::new(u32::from(self.index()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.to_char(), self.rank.to_number())
    }
}

impl std::str::FromStr for Square {
    type Err = crate::error::ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| crate::error::ParseSquareError(s.to_string()))
    }
}
