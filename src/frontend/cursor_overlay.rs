use gloo::{events::EventListener, timers::callback::Interval};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::dom::{self, InlineCursor};
use crate::{
    cursor::{
        is_clickable, CursorEvent, CursorMode, CursorTracker, CLICKABLE_SELECTOR,
        SMOOTHING_FACTOR, TICK_MS,
    },
    scope::Suppression,
};

impl Reducible for CursorTracker {
    type Action = CursorEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CustomCursorProps {
    pub smoothing: bool,
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let tracker = use_reducer_eq(CursorTracker::default);

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with(props.smoothing, move |&smoothing| {
            let factor = if smoothing { SMOOTHING_FACTOR } else { 1.0 };
            let suppression = Suppression::acquire(InlineCursor);
            let mut listeners = Vec::new();

            if let Some(document) = dom::document() {
                let on_move = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "mousemove", move |event| {
                        let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let clickable = is_clickable(
                            dom::target_matches(event, CLICKABLE_SELECTOR),
                            dom::computed_cursor(event).as_deref(),
                        );
                        dispatcher.dispatch(CursorEvent::Move {
                            at: dom::client_point(mouse.client_x(), mouse.client_y()),
                            clickable,
                        });
                    })
                };
                let on_down = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "mousedown", move |_| {
                        dispatcher.dispatch(CursorEvent::Down)
                    })
                };
                let on_up = {
                    let dispatcher = dispatcher.clone();
                    EventListener::new(&document, "mouseup", move |_| {
                        dispatcher.dispatch(CursorEvent::Up)
                    })
                };
                listeners.extend([on_move, on_down, on_up]);
            }

            let ticker = Interval::new(TICK_MS, move || {
                dispatcher.dispatch(CursorEvent::Tick { factor })
            });

            move || {
                drop(ticker);
                drop(listeners);
                drop(suppression);
            }
        });
    }

    let mode = tracker.mode();
    let ring = tracker.smoothed();
    let dot = tracker.raw();

    html! {
        <>
            <div
                class={classes!("custom-cursor", mode.class())}
                style={format!("left: {:.1}px; top: {:.1}px;", ring.x, ring.y)}
                aria-hidden="true"
            >
                <div class="cursor-ring" />
                if mode == CursorMode::Clicking {
                    <div class="cursor-ripple" />
                }
            </div>
            <div
                class={classes!("cursor-dot", mode.class())}
                style={format!("left: {:.1}px; top: {:.1}px;", dot.x, dot.y)}
                aria-hidden="true"
            />
        </>
    }
}
