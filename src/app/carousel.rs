use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use leptos::{either::Either, ev, prelude::*};

use crate::interaction::{CarouselController, Navigation};

/// Owns the controller and the single browser timeout that wakes it up.
#[derive(Clone, Copy)]
struct CarouselHandle {
    controller: StoredValue<Arc<Mutex<CarouselController>>>,
    timeout: StoredValue<Option<TimeoutHandle>>,
    set_current: WriteSignal<usize>,
    set_transitioning: WriteSignal<bool>,
}

impl CarouselHandle {
    /// Runs `f` against the controller, then publishes the new state and
    /// re-arms the timeout for the next deadline.
    fn run<T>(self, f: impl FnOnce(&mut CarouselController, DateTime<Utc>) -> T) -> Option<T> {
        let out = self.update(f)?;
        self.sync();
        Some(out)
    }

    fn update<T>(self, f: impl FnOnce(&mut CarouselController, DateTime<Utc>) -> T) -> Option<T> {
        self.controller.try_with_value(|c| {
            let mut c = c.lock().expect("should be able to lock carousel");
            f(&mut c, Utc::now())
        })
    }

    fn sync(self) {
        let Some((index, busy, deadline)) = self.update(|c, _| {
            (c.current(), c.is_transitioning(), c.next_deadline())
        }) else {
            return;
        };
        self.set_current.set(index);
        self.set_transitioning.set(busy);

        if let Some(handle) = self.timeout.try_get_value().flatten() {
            handle.clear();
        }
        let handle = deadline.and_then(|at| {
            let wait = (at - Utc::now()).to_std().unwrap_or_default();
            set_timeout_with_handle(
                move || {
                    self.run(|c, now| c.poll(now));
                },
                wait,
            )
            .ok()
        });
        self.timeout.try_set_value(handle);
    }

    fn stop(self) {
        if let Some(handle) = self.timeout.try_get_value().flatten() {
            handle.clear();
        }
        self.update(|c, _| c.stop());
    }
}

fn log_navigation(nav: Navigation) {
    if nav == Navigation::Dropped {
        log::trace!("carousel busy, navigation dropped");
    }
}

#[component]
pub fn ProjectCarousel(
    images: &'static [&'static str],
    #[prop(default = true)] autoplay: bool,
) -> impl IntoView {
    let controller = match CarouselController::new(images.len(), autoplay, Utc::now()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("not rendering carousel: {e}");
            return Either::Left(view! {
                <div class="rounded-t-xl h-60 md:h-64 bg-gray-200 dark:bg-gray-800"></div>
            });
        }
    };
    let (current, set_current) = signal(0usize);
    let (transitioning, set_transitioning) = signal(false);
    let handle = CarouselHandle {
        controller: StoredValue::new(Arc::new(Mutex::new(controller))),
        timeout: StoredValue::new(None),
        set_current,
        set_transitioning,
    };

    // arm autoplay once mounted in the browser
    Effect::new(move |_| handle.sync());
    on_cleanup(move || handle.stop());

    let previous = move |_| {
        if let Some(nav) = handle.run(|c, now| c.previous(now)) {
            log_navigation(nav);
        }
    };
    let next = move |_| {
        if let Some(nav) = handle.run(|c, now| c.next(now)) {
            log_navigation(nav);
        }
    };
    let touch_x = |ev: &ev::TouchEvent| ev.target_touches().get(0).map(|t| t.client_x() as f64);

    let count = images.len();
    Either::Right(view! {
        <div class="relative overflow-hidden rounded-t-xl h-60 md:h-64 group">
            <div
                class="h-full w-full flex transition-transform duration-500 ease-out"
                aria-busy=move || transitioning.get().to_string()
                style:transform=move || format!("translateX(-{}%)", current.get() * 100)
                on:touchstart=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        handle.update(|c, _| c.gesture_start(x));
                    }
                }
                on:touchmove=move |ev| {
                    if let Some(x) = touch_x(&ev) {
                        handle.update(|c, _| c.gesture_move(x));
                    }
                }
                on:touchend=move |_| {
                    if let Some(nav) = handle.run(|c, now| c.gesture_end(now)) {
                        log_navigation(nav);
                    }
                }
            >
                {images
                    .iter()
                    .enumerate()
                    .map(|(i, src)| {
                        view! {
                            <div class="h-full min-w-full relative">
                                <img
                                    src=*src
                                    alt=format!("Slide {}", i + 1)
                                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-[1.03]"
                                />
                                <div class="absolute bottom-2 left-2 bg-black/50 backdrop-blur-sm text-white text-xs px-2 py-1 rounded-full">
                                    {format!("{}/{}", i + 1, count)}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                on:click=previous
                class="absolute left-2 top-1/2 -translate-y-1/2 w-8 h-8 hidden group-hover:flex items-center justify-center bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm rounded-full shadow-lg text-gray-800 dark:text-gray-200 hover:scale-110 transition-transform duration-300"
                aria-label="Previous image"
            >
                "‹"
            </button>
            <button
                on:click=next
                class="absolute right-2 top-1/2 -translate-y-1/2 w-8 h-8 hidden group-hover:flex items-center justify-center bg-white/80 dark:bg-gray-800/80 backdrop-blur-sm rounded-full shadow-lg text-gray-800 dark:text-gray-200 hover:scale-110 transition-transform duration-300"
                aria-label="Next image"
            >
                "›"
            </button>

            <div class="absolute bottom-3 left-0 right-0 flex justify-center space-x-2">
                {(0..count)
                    .map(|i| {
                        view! {
                            <button
                                on:click=move |_| {
                                    match handle.run(|c, now| c.jump_to(i, now)) {
                                        Some(Ok(nav)) => log_navigation(nav),
                                        Some(Err(e)) => log::debug!("{e}"),
                                        None => {}
                                    }
                                }
                                class=move || {
                                    if current.get() == i {
                                        "h-2 rounded-full transition-all duration-300 bg-white w-4"
                                    } else {
                                        "w-2 h-2 rounded-full transition-all duration-300 bg-white/50 hover:bg-white/80"
                                    }
                                }
                                aria-label=format!("Go to slide {}", i + 1)
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    })
}
