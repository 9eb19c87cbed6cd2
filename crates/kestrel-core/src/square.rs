//! Board geometry: files, ranks and squares in Little-Endian Rank-File order.

use std::fmt;

/// A file (column) on the chess board, from FileA to FileH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// All files in index order.
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a file from a zero-based index (0 = FileA, 7 = FileH).
    #[inline]
    pub const fn from_index(index: u8) -> Option<File> {
        if index < 8 {
            Some(File::ALL[index as usize])
        } else {
            None
        }
    }

    /// Number of files between `self` and `other`, ignoring direction.
    #[inline]
    pub const fn distance(self, other: File) -> u8 {
        (self as u8).abs_diff(other as u8)
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", (b'a' + self.index() as u8) as char)
    }
}

/// A rank (row) on the chess board, from Rank1 (White's back rank) to Rank8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// All ranks in index order.
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Create a rank from a zero-based index (0 = Rank1, 7 = Rank8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Rank> {
        if index < 8 {
            Some(Rank::ALL[index as usize])
        } else {
            None
        }
    }

    /// `true` for rank 1 and rank 8.
    #[inline]
    pub const fn is_back_rank(self) -> bool {
        matches!(self, Rank::Rank1 | Rank::Rank8)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A square on the chess board: index = rank * 8 + file, so A1 = 0 and H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

macro_rules! named_squares {
    (@rank $rank:literal, $file:expr,) => {};
    (@rank $rank:literal, $file:expr, $name:ident $($rest:ident)*) => {
        pub const $name: Square = Square($rank * 8 + $file);
        named_squares!(@rank $rank, $file + 1, $($rest)*);
    };
    ($($rank:literal => $($name:ident)*;)*) => {
        $(named_squares!(@rank $rank, 0u8, $($name)*);)*
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    named_squares! {
        0 => A1 B1 C1 D1 E1 F1 G1 H1;
        1 => A2 B2 C2 D2 E2 F2 G2 H2;
        2 => A3 B3 C3 D3 E3 F3 G3 H3;
        3 => A4 B4 C4 D4 E4 F4 G4 H4;
        4 => A5 B5 C5 D5 E5 F5 G5 H5;
        5 => A6 B6 C6 D6 E6 F6 G6 H6;
        6 => A7 B7 C7 D7 E7 F7 G7 H7;
        7 => A8 B8 C8 D8 E8 F8 G8 H8;
    }

    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank as u8 * 8 + file as u8)
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse a square in algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match *s.as_bytes() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Some(Square((r - b'1') * 8 + (f - b'a'))),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Step `delta` squares along the index, or `None` when the step leaves
    /// the board or moves more than `max_file_step` files sideways.
    ///
    /// `max_file_step` is the largest file change a legal step in that
    /// direction can produce: 0 for pushes, 1 for king and diagonal steps,
    /// 2 for knight jumps. Anything larger means the index wrapped around an
    /// edge of the board.
    #[inline]
    pub const fn shift(self, delta: i8, max_file_step: u8) -> Option<Square> {
        let target = self.0 as i16 + delta as i16;
        if target < 0 || target >= 64 {
            return None;
        }
        let target = Square(target as u8);
        if self.file().distance(target.file()) > max_file_step {
            return None;
        }
        Some(target)
    }

    /// The same square seen from the other side of the board (`63 - index`).
    #[inline]
    pub const fn rotate(self) -> Square {
        Square(63 - self.0)
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
