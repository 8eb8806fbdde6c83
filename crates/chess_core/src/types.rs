use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
    /// Row delta of a pawn advance. Light starts on row 7 and moves toward row 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }
    /// Row on which a pawn of this color promotes.
    pub fn promotion_row(self) -> u8 {
        self.other().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => f.write_str("Light"),
            Color::Dark => f.write_str("Dark"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20_000,
        }
    }

    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// A board square, stored as `row * 8 + col`.
///
/// Row 0 is the dark back rank, row 7 the light one. Columns run left to
/// right (file `a` to file `h`). Iterating indices in order is a row-major scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
    pub fn row(self) -> u8 {
        self.0 / 8
    }
    pub fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let r = self.row() as i8 + dr;
        let c = self.col() as i8 + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square((r as u8) * 8 + c as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Parses algebraic coordinates such as `e2`.
    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Square::new(b'8' - r, f - b'a')
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Column of the rook this side castles with.
    pub fn rook_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }
    /// Column step from the king toward the rook.
    pub fn step(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castle: Option<CastleSide>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castle: None,
        }
    }

    pub fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Self {
            from,
            to,
            castle: Some(side),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
