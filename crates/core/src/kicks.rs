//! Wall kick resolver
//!
//! Rotation is tried at a fixed, prioritized list of pivot offsets and the first
//! one that fits wins. The tables are not SRS; the line piece gets wider
//! horizontal kicks because it spans four columns.

use crate::field::Field;
use crate::piece::Piece;
use crate::types::ShapeKind;

/// Pivot offset (dx, dy) tried during rotation
pub type Kick = (i8, i8);

/// Kick order for every shape except I
pub const STANDARD_KICKS: [Kick; 9] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
    (0, 1),
    (-2, 0),
    (2, 0),
];

/// Kick order for the I piece
pub const LINE_KICKS: [Kick; 8] = [
    (0, 0),
    (-1, 0),
    (1, 0),
    (-2, 0),
    (2, 0),
    (0, -1),
    (-1, -1),
    (1, -1),
];

/// Kick table for a shape
pub fn kick_offsets(shape: ShapeKind) -> &'static [Kick] {
    match shape {
        ShapeKind::I => &LINE_KICKS,
        _ => &STANDARD_KICKS,
    }
}

/// First kick at which the piece's next rotation fits, if any.
pub fn find_kick(piece: &Piece, field: &Field) -> Option<Kick> {
    kick_offsets(piece.shape())
        .iter()
        .copied()
        .find(|&(dx, dy)| piece.can_rotate(dx, dy, field))
}

/// Rotate the piece using the first kick that fits.
///
/// Returns the kick used, or `None` (piece untouched) when every kick is blocked.
pub fn try_rotate(piece: &mut Piece, field: &Field) -> Option<Kick> {
    let (dx, dy) = find_kick(piece, field)?;
    piece.rotate_with_offset(dx, dy);
    Some((dx, dy))
}
