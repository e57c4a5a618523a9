//! Move generation over the piece catalogs.

use crate::{InvalidSquare, Piece, Square};

/// Computes every square the piece can reach from `from` in one move.
///
/// Each rule in the piece's catalog is applied in catalog order;
/// inapplicable rules contribute nothing. The result preserves catalog
/// order and may be empty.
pub fn destinations(piece: Piece, from: Square) -> Vec<Square> {
    piece
        .rules()
        .iter()
        .filter_map(|rule| rule.apply(from))
        .collect()
}

/// Computes every position label the piece can reach from the given
/// position label.
///
/// Fails with [`InvalidSquare`] before any move computation when the label
/// does not parse; there is no partial result. The result may be empty
/// (a pawn on rank 8 has nowhere to go).
pub fn find_all_next_positions(piece: Piece, from: &str) -> Result<Vec<String>, InvalidSquare> {
    let from = Square::parse(from)?;
    Ok(destinations(piece, from)
        .into_iter()
        .map(|square| square.to_label())
        .collect())
}
