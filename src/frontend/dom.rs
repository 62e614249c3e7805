use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollToOptions,
};

use crate::{
    content::SectionId,
    scope::CursorSurface,
    viewer::{Capability, Point},
};

const FULLSCREEN_CURSOR_STYLE_ID: &str = "fullscreen-cursor-hide";
const FULLSCREEN_CURSOR_RULES: &str =
    "*, *::before, *::after, html, body { cursor: none !important; }";

pub fn document() -> Option<Document> {
    window()?.document()
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn fine_pointer() -> bool {
    media_matches("(pointer: fine)")
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

pub fn touch_supported() -> bool {
    window()
        .map(|w| {
            let target: &Object = w.as_ref();
            Reflect::has(target, &JsValue::from_str("ontouchstart")).unwrap_or(false)
        })
        .unwrap_or(false)
}

pub fn capability() -> Capability {
    Capability::detect(viewport_size().0, touch_supported())
}

pub fn random() -> f64 {
    js_sys::Math::random()
}

pub fn scroll_to_section(section: SectionId) {
    let Some(win) = window() else {
        return;
    };

    if section == SectionId::Hero {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
        return;
    }

    if let Some(element) = document().and_then(|d| d.get_element_by_id(section.as_str())) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn section_tops() -> Vec<(SectionId, f64)> {
    let Some(document) = document() else {
        return Vec::new();
    };

    SectionId::ALL
        .iter()
        .filter_map(|&section| {
            let element = document.get_element_by_id(section.as_str())?;
            Some((section, element.get_bounding_client_rect().top()))
        })
        .collect()
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn target_matches(event: &Event, selector: &str) -> bool {
    event_element(event)
        .and_then(|element| element.closest(selector).ok().flatten())
        .is_some()
}

pub fn computed_cursor(event: &Event) -> Option<String> {
    let element = event_element(event)?;
    let style = window()?.get_computed_style(&element).ok().flatten()?;
    style.get_property_value("cursor").ok()
}

pub fn client_point(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fn page_roots() -> Vec<HtmlElement> {
    let Some(document) = document() else {
        return Vec::new();
    };

    let root = document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    root.into_iter().chain(document.body()).collect()
}

fn set_root_style(property: &str, value: &str) {
    for element in page_roots() {
        let style = element.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(drop)
        } else {
            style.set_property(property, value)
        };
    }
}

#[derive(Default)]
pub struct StylesheetCursor {
    node: Option<Element>,
}

impl CursorSurface for StylesheetCursor {
    fn hide(&mut self) {
        if self.node.is_some() {
            return;
        }
        let Some(document) = document() else {
            return;
        };
        let Some(head) = document.head() else {
            return;
        };
        let Ok(style) = document.create_element("style") else {
            return;
        };

        style.set_id(FULLSCREEN_CURSOR_STYLE_ID);
        style.set_text_content(Some(FULLSCREEN_CURSOR_RULES));
        if head.append_child(&style).is_ok() {
            self.node = Some(style);
        }
    }

    fn restore(&mut self) {
        if let Some(node) = self.node.take() {
            node.remove();
        }
    }
}

pub struct InlineCursor;

impl CursorSurface for InlineCursor {
    fn hide(&mut self) {
        set_root_style("cursor", "none");
    }

    fn restore(&mut self) {
        set_root_style("cursor", "");
    }
}

pub struct ScrollLock;

impl ScrollLock {
    pub fn engage() -> Self {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", "hidden");
        }
        Self
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.style().remove_property("overflow");
        }
    }
}
