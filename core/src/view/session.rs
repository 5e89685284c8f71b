use bitflags::bitflags;

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
    }
}

/// What a pointer release did to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Outside the board, an unbound button, or the game is already over.
    Ignored,
    Revealed(RevealOutcome),
    Marked(MarkOutcome),
    /// This release ended the game, the whole board is now revealed.
    Finished(Outcome),
}

/// A board driven by pointer releases: left reveals, right toggles a flag.
///
/// Once the game is decided every tile is forced to revealed and further input is ignored.
#[derive(Clone, Debug)]
pub struct PointerSession {
    board: Board,
    pointer: PointerMap,
    finished: Option<Outcome>,
}

impl PointerSession {
    pub fn new(board: Board, pointer: PointerMap) -> Self {
        Self {
            board,
            pointer,
            finished: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pointer(&self) -> PointerMap {
        self.pointer
    }

    /// Outcome of the game, kept as it was when the game ended rather than recomputed from the fully revealed
    /// board.
    pub fn outcome(&self) -> Outcome {
        self.finished.unwrap_or_else(|| self.board.outcome())
    }

    pub fn skin_at(&self, pixel: Pixel) -> Option<TileSkin> {
        let coords = self.pointer.tile_at(pixel, self.board.bounds())?;
        self.board.skin(coords).ok()
    }

    pub fn pointer_released(&mut self, pixel: Pixel, buttons: MouseButtons) -> PointerAction {
        if self.finished.is_some() {
            return PointerAction::Ignored;
        }

        let Some(coords) = self.pointer.tile_at(pixel, self.board.bounds()) else {
            log::trace!("pointer release outside the board at {:?}", pixel);
            return PointerAction::Ignored;
        };

        let action = match buttons {
            MouseButtons::LEFT => {
                log::debug!("reveal tile: {:?}", coords);
                self.board.reveal(coords).map(PointerAction::Revealed)
            }
            MouseButtons::RIGHT => {
                log::debug!("mark tile: {:?}", coords);
                self.board.toggle_flag(coords).map(PointerAction::Marked)
            }
            _ => Ok(PointerAction::Ignored),
        };
        let action = match action {
            Ok(action) => action,
            Err(err) => {
                log::error!("pointer mapped to an invalid tile: {}", err);
                return PointerAction::Ignored;
            }
        };

        let outcome = self.board.outcome();
        if outcome.is_finished() {
            self.board.reveal_all();
            self.finished = Some(outcome);
            log::info!("game finished: {:?}", outcome);
            return PointerAction::Finished(outcome);
        }

        action
    }
}
