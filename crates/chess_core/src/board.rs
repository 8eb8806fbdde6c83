use crate::types::*;

/// An 8x8 mailbox of optional pieces.
///
/// The board is `Copy`: legality checks and search branch by copying the
/// whole array, playing a trial move on the copy and dropping it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in [Color::Dark, Color::Light] {
            for (col, &kind) in back.iter().enumerate() {
                let col = col as u8;
                if let Some(s) = Square::new(color.back_row(), col) {
                    b.set_piece(s, Some(Piece::new(kind, color)));
                }
                if let Some(s) = Square::new(color.pawn_row(), col) {
                    b.set_piece(s, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.squares[sq.index()] = pc;
    }

    /// Places an unmoved piece. Convenience for building positions by hand.
    pub fn put(&mut self, sq: Square, kind: PieceKind, color: Color) {
        self.set_piece(sq, Some(Piece::new(kind, color)));
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        Square::all().find(|&s| {
            matches!(self.piece_at(s), Some(pc) if pc.color == c && pc.kind == PieceKind::King)
        })
    }

    /// Squares holding a piece of `c`, in row-major order.
    pub fn pieces(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |s| match self.piece_at(s) {
            Some(pc) if pc.color == c => Some((s, pc)),
            _ => None,
        })
    }

    /// Relocates the piece on `mv.from` to `mv.to`.
    ///
    /// Moves the matching rook for castling, promotes a pawn that reaches the
    /// far rank to a queen and marks every relocated piece as moved. There is
    /// no legality check. Returns the piece as it stands on `mv.to`, or `None`
    /// when `mv.from` was empty (the board is left untouched).
    pub fn play(&mut self, mv: Move) -> Option<Piece> {
        let mut moved = self.piece_at(mv.from)?;
        self.set_piece(mv.from, None);

        if moved.kind == PieceKind::Pawn && mv.to.row() == moved.color.promotion_row() {
            moved.kind = PieceKind::Queen;
        }
        moved.has_moved = true;
        self.set_piece(mv.to, Some(moved));

        if let Some(side) = mv.castle {
            let row = mv.from.row();
            let rook_from = Square::new(row, side.rook_col());
            let rook_to = mv.to.offset(0, -side.step());
            if let (Some(rf), Some(rt)) = (rook_from, rook_to) {
                if let Some(mut rook) = self.piece_at(rf) {
                    rook.has_moved = true;
                    self.set_piece(rf, None);
                    self.set_piece(rt, Some(rook));
                }
            }
        }

        Some(moved)
    }

    /// A copy of this board with `mv` played on it.
    pub fn after(&self, mv: Move) -> Board {
        let mut next = *self;
        next.play(mv);
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
