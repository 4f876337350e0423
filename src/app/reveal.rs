use std::sync::{Arc, Mutex};

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::interaction::{RevealTracker, REVEAL_THRESHOLD};
use crate::section::SectionId;

type ObserverStop = Box<dyn FnOnce() + Send + Sync>;
type RevealRegistry = StoredValue<Arc<Mutex<RevealTracker<ObserverStop>>>>;

pub fn provide_reveal_tracker() {
    let registry: RevealRegistry = StoredValue::new(Arc::new(Mutex::new(RevealTracker::new())));
    provide_context(registry);
}

/// Play-once entrance flag for a section. Becomes `true` the first time at
/// least [`REVEAL_THRESHOLD`] of the element is visible and never goes back.
pub fn use_reveal(section: SectionId, target: NodeRef<html::Section>) -> Signal<bool> {
    let tracker = expect_context::<RevealRegistry>();
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            let revealed_at = tracker
                .try_with_value(|t| {
                    let mut t = t.lock().expect("should be able to lock reveal tracker");
                    if t.on_intersect(section, visible) {
                        t.state(section).map(|s| s.threshold)
                    } else {
                        None
                    }
                })
                .flatten();
            if let Some(threshold) = revealed_at {
                log::debug!("revealed section {section} at {:.0}% visibility", threshold * 100.0);
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    Effect::new(move |_| {
        let mounted = target.get().is_some();
        let already_revealed = tracker.with_value(|t| {
            let mut t = t.lock().expect("should be able to lock reveal tracker");
            if !t.is_attached(section) {
                let observation = mounted.then(|| Box::new(stop.clone()) as ObserverStop);
                t.attach(section, observation, REVEAL_THRESHOLD);
            }
            t.is_revealed(section)
        });
        if already_revealed {
            set_revealed.set(true);
        }
    });

    on_cleanup(move || {
        tracker.try_with_value(|t| {
            if let Ok(mut t) = t.lock() {
                t.detach(section);
            }
        });
    });

    revealed.into()
}
