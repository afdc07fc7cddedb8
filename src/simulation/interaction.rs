//! Pointer dragging of the bodies
//!
//! `DragState` says which body (if any) follows the pointer. Pointer events
//! only record where the dragged body should go; the position is written
//! into the bodies at the next frame by [`InteractionController::apply`].

use tracing::debug;

use crate::simulation::states::{Bodies, BodyKind, NVec2};

/// Bodies tested on a press, first hit wins
pub const HIT_PRIORITY: [BodyKind; 3] = [BodyKind::Deflector, BodyKind::Anode, BodyKind::Cathode];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(BodyKind),
}

/// How a press picks its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    /// The deflector follows the pointer whenever the button is held
    FollowWhileHeld,
    /// Press must land inside a body's circle
    HitTest,
}

/// First body in [`HIT_PRIORITY`] whose circle contains `p`
pub fn hit_test(p: &NVec2, bodies: &Bodies) -> Option<BodyKind> {
    HIT_PRIORITY
        .into_iter()
        .find(|&kind| bodies.get(kind).contains(p))
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    mode: PointerMode,
    state: DragState,
    pending: Option<(BodyKind, NVec2)>, // target not yet applied
}

impl InteractionController {
    pub fn new(mode: PointerMode) -> Self {
        Self {
            mode,
            state: DragState::Idle,
            pending: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn press(&mut self, p: &NVec2, bodies: &Bodies) -> DragState {
        let target = match self.mode {
            PointerMode::FollowWhileHeld => Some(BodyKind::Deflector),
            PointerMode::HitTest => hit_test(p, bodies),
        };

        if let Some(kind) = target {
            self.state = DragState::Dragging(kind);
            debug!(?kind, x = p.x, y = p.y, "drag started");
        }
        self.state
    }

    pub fn moved(&mut self, p: &NVec2) {
        if let DragState::Dragging(kind) = self.state {
            self.pending = Some((kind, *p));
        }
    }

    pub fn release(&mut self) {
        if self.state != DragState::Idle {
            debug!(state = ?self.state, "drag released");
        }
        self.state = DragState::Idle;
    }

    /// Move the dragged body to the last pointer position, if it moved.
    /// Returns the body that was moved.
    pub fn apply(&mut self, bodies: &mut Bodies) -> Option<BodyKind> {
        let (kind, p) = self.pending.take()?;
        bodies.get_mut(kind).x = p;
        Some(kind)
    }
}
