//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-to-reorder for Leptos lists.
//! Uses movement threshold to distinguish click from drag, and the pointer's
//! position against the hovered row's midpoint to pick the insertion side.

mod session;

pub use session::{
    insert_side, DragSession, DropAction, DropTarget, InsertSide, DRAG_THRESHOLD_PX,
};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<Id: Send + Sync + 'static> {
    pub session: RwSignal<DragSession<Id>>,
    /// True briefly after a drag ends so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
}

pub fn create_dnd_signals<Id>() -> DndSignals<Id>
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    DndSignals {
        session: RwSignal::new(DragSession::Idle),
        drag_just_ended: RwSignal::new(false),
    }
}

/// CSS modifier for the insertion indicator
pub fn drop_indicator_class(side: Option<InsertSide>) -> &'static str {
    match side {
        Some(InsertSide::Top) => " drop-above",
        Some(InsertSide::Bottom) => " drop-below",
        None => "",
    }
}

/// Row class derived from the session: base, dragging, indicator
pub fn row_class<Id>(dnd: DndSignals<Id>, item_id: Id, base: &'static str) -> impl Fn() -> String + Copy + Send + Sync + 'static
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    move || {
        dnd.session.with(|s| {
            let mut c = String::from(base);
            if s.is_dragging() && s.source() == Some(item_id) {
                c.push_str(" dragging");
            }
            c.push_str(drop_indicator_class(s.indicator_for(item_id)));
            c
        })
    }
}

/// End drag operation, returning the drop if there was a real target
pub fn end_drag<Id>(dnd: &DndSignals<Id>) -> Option<DropAction<Id>>
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    let was_dragging = dnd.session.with_untracked(|s| s.is_dragging());
    let action = dnd.session.try_update(|s| s.release()).flatten();

    if was_dragging {
        dnd.drag_just_ended.set(true);
        if let Some(win) = web_sys::window() {
            let clear = dnd.drag_just_ended;
            let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                clear.try_set(false);
            });
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
            cb.forget();
        }
    }
    action
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag unless `can_drag` is false.
pub fn make_on_mousedown<Id>(dnd: DndSignals<Id>, item_id: Id, can_drag: Signal<bool>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a control
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        let allowed = can_drag.get_untracked();
        let (x, y) = (ev.client_x(), ev.client_y());
        dnd.session.update(|s| {
            s.press(item_id, x, y, allowed);
        });
    }
}

fn side_from_event(ev: &web_sys::MouseEvent) -> Option<InsertSide> {
    let el = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = el.get_bounding_client_rect();
    Some(insert_side(ev.client_y() as f64, rect.top(), rect.height()))
}

fn hover<Id>(dnd: DndSignals<Id>, item_id: Id, ev: &web_sys::MouseEvent)
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    if !dnd.session.with_untracked(|s| s.is_dragging()) {
        return;
    }
    let Some(side) = side_from_event(ev) else { return };
    let unchanged = dnd
        .session
        .with_untracked(|s| s.target() == Some(DropTarget { id: item_id, side }));
    if !unchanged {
        dnd.session.update(|s| s.hover(item_id, side));
    }
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_item_mouseenter<Id>(dnd: DndSignals<Id>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| hover(dnd, item_id, &ev)
}

/// Create mousemove handler for rows; flips the side as the pointer crosses the midpoint
pub fn make_on_item_mousemove<Id>(dnd: DndSignals<Id>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| hover(dnd, item_id, &ev)
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Id>(dnd: DndSignals<Id>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.session.with_untracked(|s| s.is_dragging()) {
            dnd.session.update(|s| s.leave(item_id));
        }
    }
}

/// Bind window mousemove: starts the drag once the pointer passes the threshold
pub fn bind_global_mousemove<Id>(dnd: DndSignals<Id>)
where
    Id: Copy + PartialEq + Send + Sync + 'static,
{
    let handle = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd
            .session
            .try_with_untracked(|s| matches!(s, DragSession::Pending { .. }))
            .unwrap_or(false);
        if pending {
            let (x, y) = (ev.client_x(), ev.client_y());
            dnd.session.update(|s| {
                s.pointer_moved(x, y);
            });
        }
    });
    on_cleanup(move || handle.remove());
}

/// Bind window mouseup for drop detection, plus the mousemove that starts drags.
/// Listeners are removed when the owning component is cleaned up.
pub fn bind_global_mouseup<Id, F>(dnd: DndSignals<Id>, on_drop: F)
where
    Id: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(DropAction<Id>) + 'static,
{
    let handle = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let active = dnd
            .session
            .try_with_untracked(|s| !matches!(s, DragSession::Idle))
            .unwrap_or(false);
        if !active {
            return;
        }
        // Click without drag falls through here too; the click fires naturally
        if let Some(action) = end_drag(&dnd) {
            on_drop(action);
        }
    });
    on_cleanup(move || handle.remove());

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_indicator_class() {
        assert_eq!(drop_indicator_class(Some(InsertSide::Top)), " drop-above");
        assert_eq!(drop_indicator_class(Some(InsertSide::Bottom)), " drop-below");
        assert_eq!(drop_indicator_class(None), "");
    }
}
