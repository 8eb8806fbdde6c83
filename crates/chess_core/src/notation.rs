use crate::types::*;

/// Display notation for a move that has already been played.
///
/// `piece` is the piece as it stands on the destination, so a promoting pawn
/// is written with the queen's letter. Dark moves carry a `...` prefix.
pub fn move_notation(piece: Piece, mv: Move) -> String {
    let prefix = match piece.color {
        Color::Light => "",
        Color::Dark => "...",
    };
    match mv.castle {
        Some(CastleSide::Kingside) => format!("{prefix}O-O"),
        Some(CastleSide::Queenside) => format!("{prefix}O-O-O"),
        None => format!("{prefix}{} {}-{}", piece.kind.letter(), mv.from, mv.to),
    }
}
