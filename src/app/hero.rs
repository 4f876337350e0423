use std::time::Duration;

use leptos::{html, prelude::*};

use crate::content::{HERO_TITLES, OWNER_NAME, PROFILE_IMAGE};
use crate::interaction::{typewriter::START_DELAY, Typewriter};
use crate::section::SectionId;

use super::reveal::use_reveal;

fn schedule_tick(
    typewriter: StoredValue<Typewriter>,
    timeout: StoredValue<Option<TimeoutHandle>>,
    set_text: WriteSignal<&'static str>,
    delay: Duration,
) {
    let handle = set_timeout_with_handle(
        move || {
            let Some((delay, text)) = typewriter.try_update_value(|t| (t.tick(), t.visible()))
            else {
                return;
            };
            set_text.set(text);
            schedule_tick(typewriter, timeout, set_text, delay);
        },
        delay,
    )
    .ok();
    timeout.try_set_value(handle);
}

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(SectionId::Home, section_ref);

    let typewriter = StoredValue::new(Typewriter::new(HERO_TITLES));
    let timeout = StoredValue::new(None::<TimeoutHandle>);
    let (text, set_text) = signal("");

    Effect::new(move |_| schedule_tick(typewriter, timeout, set_text, START_DELAY));
    on_cleanup(move || {
        if let Some(handle) = timeout.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <section
            id=SectionId::Home.as_str()
            node_ref=section_ref
            class="min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-purple-50 to-pink-50 dark:from-gray-900 dark:to-gray-800"
        >
            <div class="absolute inset-0 bg-grid-pattern opacity-5"></div>
            <div
                class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-32 relative z-10 transition-all duration-1000"
                class=("opacity-0", move || !revealed.get())
                class=("translate-y-8", move || !revealed.get())
            >
                <div class="text-center">
                    <img
                        src=PROFILE_IMAGE
                        alt="Profile"
                        class="w-32 h-32 rounded-full mx-auto mb-8 border-4 border-white shadow-lg"
                    />
                    <h1 class="text-4xl sm:text-6xl font-bold text-gray-900 dark:text-white mb-4">
                        {OWNER_NAME}
                    </h1>
                    <div class="text-xl sm:text-2xl text-gray-600 dark:text-gray-300 mb-8">
                        "I am a " <span class="text-purple-600 dark:text-purple-400">{text}</span>
                        <span class="animate-pulse">"|"</span>
                    </div>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-2xl mx-auto mb-12">
                        "Building modern digital experiences with a passion for clean code and pixel-perfect design."
                    </p>
                    <div class="flex justify-center space-x-4">
                        <a
                            href=SectionId::Projects.anchor()
                            class="px-8 py-3 bg-purple-600 text-white rounded-full hover:bg-purple-700 transition-colors duration-300"
                        >
                            "View My Work"
                        </a>
                        <a
                            href=SectionId::Contact.anchor()
                            class="px-8 py-3 border-2 border-purple-600 text-purple-600 dark:text-purple-400 rounded-full hover:bg-purple-600 hover:text-white transition-colors duration-300"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
            </div>
            <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-white dark:from-gray-900 to-transparent"></div>
        </section>
    }
}
