use leptos::prelude::*;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::interaction::{scroll::anchor_scroll_target, ScrollPosition};
use crate::section::SectionId;

#[derive(Debug, Clone, Copy)]
pub struct ScrollSpy {
    pub scroll_y: Signal<f64>,
    pub scrolled: Signal<bool>,
    pub active: Signal<SectionId>,
}

fn section_top(section: SectionId) -> Option<f64> {
    document()
        .get_element_by_id(section.as_str())
        .map(|el| el.get_bounding_client_rect().top())
}

/// Tracks the window scroll and derives the header state from it. Created once
/// by the app root.
pub fn use_scroll_spy() -> ScrollSpy {
    let (_, scroll_y) = use_window_scroll();
    let position = RwSignal::new(ScrollPosition::new());

    // effects only run in the browser, where the layout can be queried
    Effect::new(move |_| {
        let y = scroll_y.get();
        position.update(|p| p.on_scroll(y, section_top));
    });

    let scrolled = Memo::new(move |_| position.with(|p| p.is_past_threshold()));
    let active = Memo::new(move |_| position.with(|p| p.active_section()));

    ScrollSpy {
        scroll_y,
        scrolled: scrolled.into(),
        active: active.into(),
    }
}

/// Smoothly scrolls so `section` sits just below the fixed header.
pub fn scroll_to_section(section: SectionId) {
    let Some(el) = document()
        .get_element_by_id(section.as_str())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::debug!("no element for section {section}");
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(anchor_scroll_target(el.offset_top() as f64));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Honours a `/#section` deep link once hydrated. The browser's own jump
/// ignores the fixed header, so redo it with the anchor offset.
pub fn use_initial_anchor() {
    Effect::new(move |_| {
        let Ok(hash) = window().location().hash() else {
            return;
        };
        if hash.is_empty() {
            return;
        }
        match hash.parse::<SectionId>() {
            Ok(section) => scroll_to_section(section),
            Err(e) => log::debug!("ignoring location hash: {e}"),
        }
    });
}
