use gloo::events::EventListener;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::dom;
use crate::{
    motion::{scroll_progress, RevealConfig, RevealMode},
    viewer::Capability,
};

#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64, mode: RevealMode) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((node, RevealConfig::new(threshold, mode)), move |(node, config)| {
            let (threshold, mode) = (config.threshold(), config.mode());
            let reveal = Rc::new(RefCell::new(config.start()));
            let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> = Rc::default();

            let callback = {
                let observer_slot = Rc::clone(&observer_slot);
                Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let mut reveal = reveal.borrow_mut();
                        if reveal.observe(entry.intersection_ratio(), entry.is_intersecting()) {
                            revealed.set(reveal.is_revealed());
                        }
                        if mode == RevealMode::Once && reveal.is_revealed() {
                            if let Some(observer) = observer_slot.borrow().as_ref() {
                                observer.disconnect();
                            }
                        }
                    }
                })
            };

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(threshold));

            if let Some(element) = node.cast::<Element>() {
                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    *observer_slot.borrow_mut() = Some(observer);
                }
            }

            move || {
                if let Some(observer) = observer_slot.borrow_mut().take() {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    *revealed
}

#[hook]
pub fn use_scroll_progress(node: NodeRef, enabled: bool) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((node, enabled), move |(node, enabled)| {
            let mut listeners = Vec::new();

            if *enabled {
                let update = {
                    let node = node.clone();
                    let progress = progress.clone();
                    Rc::new(move || {
                        if let Some(element) = node.cast::<Element>() {
                            let rect = element.get_bounding_client_rect();
                            progress.set(scroll_progress(rect.top(), rect.height()));
                        }
                    })
                };
                update();

                if let Some(win) = window() {
                    for event in ["scroll", "resize"] {
                        let update = Rc::clone(&update);
                        listeners.push(EventListener::new(&win, event, move |_| update()));
                    }
                }
            } else {
                progress.set(0.0);
            }

            move || drop(listeners)
        });
    }

    *progress
}

#[hook]
pub fn use_viewport_size() -> (f64, f64) {
    let size = use_state_eq(dom::viewport_size);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "resize", move |_| size.set(dom::viewport_size()))
            });
            move || drop(listener)
        });
    }

    *size
}

#[hook]
pub fn use_capability() -> Capability {
    let capability = use_state_eq(dom::capability);

    {
        let capability = capability.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "resize", move |_| capability.set(dom::capability()))
            });
            move || drop(listener)
        });
    }

    *capability
}
