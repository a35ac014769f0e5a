//! Drag Session State Machine
//!
//! Pure interpretation of pointer events: which entity is being dragged,
//! which one it is over, and on which half. No DOM access here.

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// Half of the target the pointer is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertSide {
    Top,
    Bottom,
}

/// Top when the pointer is above the vertical midpoint of the target's box
pub fn insert_side(pointer_y: f64, rect_top: f64, rect_height: f64) -> InsertSide {
    if pointer_y < rect_top + rect_height / 2.0 {
        InsertSide::Top
    } else {
        InsertSide::Bottom
    }
}

/// Current candidate drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropTarget<Id> {
    pub id: Id,
    pub side: InsertSide,
}

/// A completed gesture handed to the committer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropAction<Id> {
    pub source: Id,
    pub target: Id,
    pub side: InsertSide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSession<Id> {
    Idle,
    /// Mouse is down on `source` but has not moved far enough yet
    Pending { source: Id, start_x: i32, start_y: i32 },
    Dragging { source: Id, target: Option<DropTarget<Id>> },
}

impl<Id> Default for DragSession<Id> {
    fn default() -> Self {
        DragSession::Idle
    }
}

impl<Id: Copy + PartialEq> DragSession<Id> {
    /// Mouse down on an entity. Ignored unless idle and `allowed`.
    pub fn press(&mut self, source: Id, x: i32, y: i32, allowed: bool) -> bool {
        if !allowed || !matches!(self, DragSession::Idle) {
            return false;
        }
        *self = DragSession::Pending { source, start_x: x, start_y: y };
        true
    }

    /// Pointer moved anywhere; promotes a pending press past the threshold
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        if let DragSession::Pending { source, start_x, start_y } = *self {
            let dx = (x - start_x).abs();
            let dy = (y - start_y).abs();
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                *self = DragSession::Dragging { source, target: None };
                return true;
            }
        }
        false
    }

    /// Start dragging directly (no threshold). Ignored unless idle and `allowed`.
    pub fn begin(&mut self, source: Id, allowed: bool) -> bool {
        if !allowed || !matches!(self, DragSession::Idle) {
            return false;
        }
        *self = DragSession::Dragging { source, target: None };
        true
    }

    /// Pointer is over `id` on `side`. Hovering the source clears the target.
    pub fn hover(&mut self, id: Id, side: InsertSide) {
        if let DragSession::Dragging { source, target } = self {
            *target = if *source == id { None } else { Some(DropTarget { id, side }) };
        }
    }

    /// Pointer left `id`; clears the target if it was `id`
    pub fn leave(&mut self, id: Id) {
        if let DragSession::Dragging { target, .. } = self {
            if matches!(target, Some(t) if t.id == id) {
                *target = None;
            }
        }
    }

    /// Mouse up. Always returns to idle; yields a drop only for a real target.
    pub fn release(&mut self) -> Option<DropAction<Id>> {
        let finished = std::mem::replace(self, DragSession::Idle);
        match finished {
            DragSession::Dragging { source, target: Some(t) } if t.id != source => Some(DropAction {
                source,
                target: t.id,
                side: t.side,
            }),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DragSession::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn source(&self) -> Option<Id> {
        match self {
            DragSession::Pending { source, .. } | DragSession::Dragging { source, .. } => Some(*source),
            DragSession::Idle => None,
        }
    }

    pub fn target(&self) -> Option<DropTarget<Id>> {
        match self {
            DragSession::Dragging { target, .. } => *target,
            _ => None,
        }
    }

    /// Insertion indicator to draw on `id`, if any
    pub fn indicator_for(&self, id: Id) -> Option<InsertSide> {
        self.target().filter(|t| t.id == id).map(|t| t.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragging(source: u32) -> DragSession<u32> {
        let mut s = DragSession::Idle;
        assert!(s.begin(source, true));
        s
    }

    #[test]
    fn test_insert_side_midpoint() {
        assert_eq!(insert_side(10.0, 0.0, 40.0), InsertSide::Top);
        assert_eq!(insert_side(20.0, 0.0, 40.0), InsertSide::Bottom);
        assert_eq!(insert_side(39.0, 0.0, 40.0), InsertSide::Bottom);
        assert_eq!(insert_side(105.0, 100.0, 30.0), InsertSide::Top);
    }

    #[test]
    fn test_press_then_threshold_starts_drag() {
        let mut s = DragSession::Idle;
        assert!(s.press(1u32, 100, 100, true));
        assert!(!s.pointer_moved(103, 104));
        assert!(!s.is_dragging());
        assert!(s.pointer_moved(100, 106));
        assert_eq!(s, DragSession::Dragging { source: 1, target: None });
    }

    #[test]
    fn test_click_without_move_is_not_a_drop() {
        let mut s = DragSession::Idle;
        s.press(1u32, 0, 0, true);
        assert_eq!(s.release(), None);
        assert_eq!(s, DragSession::Idle);
    }

    #[test]
    fn test_permission_gate_blocks_start() {
        let mut s = DragSession::<u32>::Idle;
        assert!(!s.press(1, 0, 0, false));
        assert!(!s.begin(1, false));
        s.pointer_moved(50, 50);
        s.hover(2, InsertSide::Top);
        assert_eq!(s, DragSession::Idle);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn test_hover_retargets() {
        let mut s = dragging(1);
        s.hover(2, InsertSide::Top);
        assert_eq!(s.target(), Some(DropTarget { id: 2, side: InsertSide::Top }));
        s.hover(3, InsertSide::Bottom);
        assert_eq!(s.target(), Some(DropTarget { id: 3, side: InsertSide::Bottom }));
        assert_eq!(s.source(), Some(1));
    }

    #[test]
    fn test_drop_yields_action_and_resets() {
        let mut s = dragging(3);
        s.hover(1, InsertSide::Top);
        assert_eq!(
            s.release(),
            Some(DropAction { source: 3, target: 1, side: InsertSide::Top })
        );
        assert_eq!(s, DragSession::Idle);
        assert_eq!(s.indicator_for(1), None);
    }

    #[test]
    fn test_drop_without_target_aborts() {
        let mut s = dragging(1);
        assert_eq!(s.release(), None);
        assert_eq!(s, DragSession::Idle);
    }

    #[test]
    fn test_hovering_source_clears_target() {
        let mut s = dragging(1);
        s.hover(2, InsertSide::Bottom);
        s.hover(1, InsertSide::Top);
        assert_eq!(s.target(), None);
        assert_eq!(s.release(), None);
    }

    #[test]
    fn test_leave_only_clears_matching_target() {
        let mut s = dragging(1);
        s.hover(2, InsertSide::Top);
        s.leave(3);
        assert!(s.target().is_some());
        s.leave(2);
        assert!(s.target().is_none());
    }

    #[test]
    fn test_indicator_is_derived_from_state() {
        let mut s = dragging(1);
        s.hover(2, InsertSide::Bottom);
        assert_eq!(s.indicator_for(2), Some(InsertSide::Bottom));
        assert_eq!(s.indicator_for(1), None);
        s.cancel();
        assert_eq!(s.indicator_for(2), None);
    }

    #[test]
    fn test_second_press_while_dragging_is_ignored() {
        let mut s = dragging(1);
        assert!(!s.press(2, 0, 0, true));
        assert_eq!(s.source(), Some(1));
    }
}
