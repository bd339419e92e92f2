//! The art pieces shown in the gallery

mod diamond;
mod iso;
mod linien;
mod moire;
mod schotter;

pub use diamond::Diamond;
pub use iso::{IsoCube, IsoCubeRotate, GRID_SIZE};
pub use linien::Linien;
pub use moire::{Moire1, Moire2};
pub use schotter::Schotter;

use crate::piece::ArtPiece;

/// Every piece, in gallery order
pub fn all() -> Vec<Box<dyn ArtPiece>> {
    vec![
        Box::new(Schotter),
        Box::new(Linien),
        Box::new(Diamond),
        Box::new(IsoCube::monochrome()),
        Box::new(IsoCube::colored()),
        Box::new(IsoCubeRotate::new()),
        Box::new(Moire1),
        Box::new(Moire2),
    ]
}

/// Names of every piece, in gallery order
pub fn names() -> Vec<&'static str> {
    all().iter().map(|p| p.name()).collect()
}
