use kezuri_core as game;
use game::{Point2, PointerPhase};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// DOM events that drive the card with a mouse.
pub(crate) const MOUSE_EVENTS: &[(&str, PointerPhase)] = &[
    ("mousedown", PointerPhase::Down),
    ("mousemove", PointerPhase::Move),
    ("mouseup", PointerPhase::Up),
    ("mouseleave", PointerPhase::Leave),
];

/// DOM events that drive the card with a finger.
pub(crate) const TOUCH_EVENTS: &[(&str, PointerPhase)] = &[
    ("touchstart", PointerPhase::Down),
    ("touchmove", PointerPhase::Move),
    ("touchend", PointerPhase::Up),
    ("touchcancel", PointerPhase::Cancel),
];

pub(crate) fn bindings(touch: bool) -> impl Iterator<Item = (&'static str, PointerPhase)> {
    let touch_events: &[_] = if touch { TOUCH_EVENTS } else { &[] };
    MOUSE_EVENTS.iter().chain(touch_events).copied()
}

/// Client-space position of a mouse event, or of the first active touch of a touch event.
pub(crate) fn client_position(event: &Event) -> Option<Point2> {
    if let Some(event) = event.dyn_ref::<MouseEvent>() {
        return Some((f64::from(event.client_x()), f64::from(event.client_y())));
    }
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event
        .touches()
        .item(0)
        .or_else(|| event.changed_touches().item(0))?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_only_binds_four_events() {
        let events: Vec<_> = bindings(false).map(|(name, _)| name).collect();

        assert_eq!(events, ["mousedown", "mousemove", "mouseup", "mouseleave"]);
    }

    #[test]
    fn touch_adds_every_phase() {
        let phases: Vec<_> = bindings(true)
            .filter(|(name, _)| name.starts_with("touch"))
            .map(|(_, phase)| phase)
            .collect();

        assert_eq!(
            phases,
            [
                PointerPhase::Down,
                PointerPhase::Move,
                PointerPhase::Up,
                PointerPhase::Cancel
            ]
        );
    }
}
