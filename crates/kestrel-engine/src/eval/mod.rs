//! Static evaluation: material plus piece-square tables.

pub mod material;
pub mod pst;

use kestrel_core::Position;

use material::material;
use pst::positional;

/// Evaluate `pos` from White's perspective in centipawns.
///
/// Every piece contributes its material value plus its positional bonus,
/// added for White and subtracted for Black. Side to move is not considered.
pub fn evaluate(pos: &Position) -> f64 {
    f64::from(material(pos) + positional(pos))
}
