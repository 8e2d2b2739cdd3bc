//! Reorder controller - the drag state machine for the sidebar list.
//!
//! Translates pointer gestures into list moves, with an explicit state
//! machine instead of scattered boolean flags.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Pending       (mouse down on a row's drag handle)
//! Pending -> Dragging   (pointer travels past the activation threshold)
//! Pending -> Idle       (mouse up before the threshold - a plain click)
//! Dragging -> Idle      (mouse up finalizes the move, or cancel discards it)
//! ```
//!
//! The controller is positional: it tracks the pressed row's index and
//! re-derives the drop slot from pointer travel at drop time, so it never
//! caches identity across renders. The drop slot is resolved closest-center
//! style - for a uniform-height list, the slot whose row center is nearest
//! the dragged row's center.

use crate::constants::{DRAG_ACTIVATION_DISTANCE, ITEM_GAP, ITEM_HEIGHT};
use gpui::{Pixels, Point};

/// Pointer-drag state for the sidebar document list.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No active gesture
    #[default]
    Idle,

    /// Pressed on a row, not yet past the activation threshold
    Pending {
        /// Index of the pressed row
        index: usize,
        /// Pointer position at mouse down
        origin: Point<Pixels>,
    },

    /// An active drag
    Dragging {
        /// Index of the row being dragged
        index: usize,
        /// Pointer position at mouse down
        origin: Point<Pixels>,
        /// Current pointer position
        current: Point<Pixels>,
    },
}

impl DragState {
    /// Record a mouse down on the row at `index`. Only starts a gesture from
    /// Idle; a second button press mid-gesture is ignored.
    pub fn begin(&mut self, index: usize, position: Point<Pixels>) {
        if matches!(self, Self::Idle) {
            *self = Self::Pending {
                index,
                origin: position,
            };
        }
    }

    /// Feed a pointer move. Promotes Pending to Dragging once the pointer
    /// has traveled [`DRAG_ACTIVATION_DISTANCE`], and tracks the pointer
    /// while dragging. Returns true when the visible state changed.
    pub fn update(&mut self, position: Point<Pixels>) -> bool {
        match self {
            Self::Idle => false,
            Self::Pending { index, origin } => {
                let dx = f32::from(position.x - origin.x);
                let dy = f32::from(position.y - origin.y);
                if (dx * dx + dy * dy).sqrt() < DRAG_ACTIVATION_DISTANCE {
                    return false;
                }
                *self = Self::Dragging {
                    index: *index,
                    origin: *origin,
                    current: position,
                };
                true
            }
            Self::Dragging { current, .. } => {
                *current = position;
                true
            }
        }
    }

    /// True once the activation threshold has been crossed. Drives the
    /// grabbing-cursor styling and the dragged row highlight.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Index of the row being dragged, if a drag is active.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::Dragging { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Resolve the drop slot for a list of `len` uniform rows.
    ///
    /// Row centers are spaced `ITEM_HEIGHT + ITEM_GAP` apart and the dragged
    /// row's center rides with the pointer, so the closest center is the
    /// pressed index displaced by the rounded row-step travel, clamped to
    /// the list.
    pub fn drop_slot(&self, len: usize) -> Option<usize> {
        let Self::Dragging {
            index,
            origin,
            current,
        } = self
        else {
            return None;
        };
        if len == 0 {
            return None;
        }
        let travel = f32::from(current.y - origin.y);
        let step = ITEM_HEIGHT + ITEM_GAP;
        let offset = (travel / step).round() as isize;
        let slot = (*index as isize + offset).clamp(0, len as isize - 1);
        Some(slot as usize)
    }

    /// Finish the gesture on mouse up. Returns the `(from, to)` move to
    /// apply when an active drag ended over a distinct slot; a plain click
    /// or a same-slot drop returns None. Always resets to Idle.
    pub fn finish(&mut self, len: usize) -> Option<(usize, usize)> {
        let result = match (self.dragged_index(), self.drop_slot(len)) {
            (Some(from), Some(to)) if from != to => Some((from, to)),
            _ => None,
        };
        *self = Self::Idle;
        result
    }

    /// Abandon the gesture without mutating anything.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
