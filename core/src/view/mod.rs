//! Helpers for graphical front-ends: mapping pointer positions onto tiles and driving a board from pointer
//! events. Drawing itself is left to the front-end, see [`TileSkin`](crate::TileSkin).

pub use pointer::*;
pub use session::*;

mod pointer;
mod session;
