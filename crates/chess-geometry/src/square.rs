//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Error returned when a square label fails to parse.
///
/// Carries the offending label. Parsing is the only fallible operation in
/// this crate; everything downstream of a parsed [`Square`] is total.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid square '{label}': expected a file letter A-H followed by a rank digit 1-8")]
pub struct InvalidSquare {
    /// The label that failed to parse.
    pub label: String,
}

impl InvalidSquare {
    fn new(label: &str) -> Self {
        InvalidSquare {
            label: label.to_string(),
        }
    }
}

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            _ => None,
        }
    }

    /// Creates a file from an uppercase character ('A'-'H').
    ///
    /// Lowercase letters are rejected; labels use the uppercase form only.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(File::A),
            'B' => Some(File::B),
            'C' => Some(File::C),
            'D' => Some(File::D),
            'E' => Some(File::E),
            'F' => Some(File::F),
            'G' => Some(File::G),
            'H' => Some(File::H),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from index (0-7).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R1),
            1 => Some(Rank::R2),
            2 => Some(Rank::R3),
            3 => Some(Rank::R4),
            4 => Some(Rank::R5),
            5 => Some(Rank::R6),
            6 => Some(Rank::R7),
            7 => Some(Rank::R8),
            _ => None,
        }
    }

    /// Creates a rank from a character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1' => Some(Rank::R1),
            '2' => Some(Rank::R2),
            '3' => Some(Rank::R3),
            '4' => Some(Rank::R4),
            '5' => Some(Rank::R5),
            '6' => Some(Rank::R6),
            '7' => Some(Rank::R7),
            '8' => Some(Rank::R8),
            _ => None,
        }
    }

    /// Returns the index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - A1 = 0, B1 = 1, ..., H1 = 7
/// - A2 = 8, ..., H8 = 63
///
/// A `Square` always addresses an on-board square. The `step_*` operations
/// assume their matching `can_step_*` predicate holds, so they cannot leave
/// the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from a two-character label (e.g., "D5").
    ///
    /// Only the exact form accepted by [`File::from_char`] and
    /// [`Rank::from_char`] parses: an uppercase file letter followed by a
    /// single rank digit. Anything else fails with [`InvalidSquare`].
    pub fn parse(label: &str) -> Result<Self, InvalidSquare> {
        let bytes = label.as_bytes();
        if bytes.len() != 2 {
            return Err(InvalidSquare::new(label));
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return Err(InvalidSquare::new(label)),
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return Err(InvalidSquare::new(label)),
        };
        Ok(Square::new(file, rank))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        // self.0 % 8 is always in 0-7
        match File::from_index(self.0 % 8) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        // self.0 / 8 is always in 0-7
        match Rank::from_index(self.0 / 8) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the two-character label for this square, the inverse of
    /// [`Square::parse`].
    pub fn to_label(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Returns true if there is a square one file to the left.
    #[inline]
    pub const fn can_step_left(self) -> bool {
        self.0 % 8 > 0
    }

    /// Returns true if there is a square one file to the right.
    #[inline]
    pub const fn can_step_right(self) -> bool {
        self.0 % 8 < 7
    }

    /// Returns true if there is a square one rank up.
    #[inline]
    pub const fn can_step_up(self) -> bool {
        self.0 / 8 < 7
    }

    /// Returns true if there is a square one rank down.
    #[inline]
    pub const fn can_step_down(self) -> bool {
        self.0 / 8 > 0
    }

    /// Returns true if there is a square one step up-left.
    #[inline]
    pub const fn can_step_up_left(self) -> bool {
        self.can_step_up() && self.can_step_left()
    }

    /// Returns true if there is a square one step up-right.
    #[inline]
    pub const fn can_step_up_right(self) -> bool {
        self.can_step_up() && self.can_step_right()
    }

    /// Returns true if there is a square one step down-left.
    #[inline]
    pub const fn can_step_down_left(self) -> bool {
        self.can_step_down() && self.can_step_left()
    }

    /// Returns true if there is a square one step down-right.
    #[inline]
    pub const fn can_step_down_right(self) -> bool {
        self.can_step_down() && self.can_step_right()
    }

    /// Moves one file to the left. Callers must check
    /// [`Square::can_step_left`] first.
    #[inline]
    pub const fn step_left(self) -> Square {
        debug_assert!(self.can_step_left());
        Square(self.0 - 1)
    }

    /// Moves one file to the right. Callers must check
    /// [`Square::can_step_right`] first.
    #[inline]
    pub const fn step_right(self) -> Square {
        debug_assert!(self.can_step_right());
        Square(self.0 + 1)
    }

    /// Moves one rank up. Callers must check [`Square::can_step_up`] first.
    #[inline]
    pub const fn step_up(self) -> Square {
        debug_assert!(self.can_step_up());
        Square(self.0 + 8)
    }

    /// Moves one rank down. Callers must check [`Square::can_step_down`]
    /// first.
    #[inline]
    pub const fn step_down(self) -> Square {
        debug_assert!(self.can_step_down());
        Square(self.0 - 8)
    }

    /// Moves one step up-left.
    #[inline]
    pub const fn step_up_left(self) -> Square {
        self.step_up().step_left()
    }

    /// Moves one step up-right.
    #[inline]
    pub const fn step_up_right(self) -> Square {
        self.step_up().step_right()
    }

    /// Moves one step down-left.
    #[inline]
    pub const fn step_down_left(self) -> Square {
        self.step_down().step_left()
    }

    /// Moves one step down-right.
    #[inline]
    pub const fn step_down_right(self) -> Square {
        self.step_down().step_right()
    }

    // Corner squares
    pub const A1: Square = Square(0);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_label())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}
