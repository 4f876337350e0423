use leptos::{html, prelude::*};

use crate::content::{TimelineEntry, TimelineKind, ABOUT_INTRO, CV_URL, TIMELINE};
use crate::section::SectionId;

use super::reveal::use_reveal;

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(SectionId::About, section_ref);

    view! {
        <section
            id=SectionId::About.as_str()
            node_ref=section_ref
            class="py-20 bg-white dark:bg-gray-900"
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white mb-4">
                        "About Me"
                    </h2>
                    <div class="w-24 h-1 bg-purple-600 mx-auto"></div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div
                        class="space-y-6 transition-all duration-700"
                        class=("opacity-0", move || !revealed.get())
                        class=("-translate-x-10", move || !revealed.get())
                    >
                        {ABOUT_INTRO
                            .iter()
                            .map(|paragraph| {
                                view! {
                                    <p class="text-lg text-gray-600 dark:text-gray-300">{*paragraph}</p>
                                }
                            })
                            .collect_view()}
                        <div class="flex space-x-4">
                            <a
                                href=CV_URL
                                download=""
                                class="px-6 py-2 bg-purple-600 text-white rounded-full hover:bg-purple-700 transition-colors"
                            >
                                "Download CV"
                            </a>
                        </div>
                    </div>

                    <div class="relative">
                        <div class="absolute left-4 inset-y-0 w-0.5 bg-purple-600"></div>
                        <div class="space-y-8">
                            {TIMELINE
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| {
                                    view! { <TimelineItem entry=entry index=index revealed=revealed /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    entry: &'static TimelineEntry,
    index: usize,
    revealed: Signal<bool>,
) -> impl IntoView {
    let icon = match entry.kind {
        TimelineKind::Work => "💼",
        TimelineKind::Education => "🎓",
    };

    view! {
        <div
            class="relative pl-12 transition-all duration-700"
            class=("opacity-0", move || !revealed.get())
            class=("translate-y-10", move || !revealed.get())
            style:transition-delay=format!("{}ms", index * 200)
        >
            <span class="absolute left-4 -translate-x-1/2 w-8 h-8 flex items-center justify-center rounded-full bg-purple-600 text-white text-sm">
                {icon}
            </span>
            <div class="bg-gray-50 dark:bg-gray-800 p-6 rounded-lg shadow-md">
                <span class="text-sm text-purple-600 dark:text-purple-400 font-medium">
                    {entry.period}
                </span>
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white mt-1">
                    {entry.title}
                </h3>
                {entry
                    .company
                    .map(|company| {
                        view! { <p class="text-gray-500 dark:text-gray-400">{company}</p> }
                    })}
                <p class="mt-2 text-gray-600 dark:text-gray-300">{entry.description}</p>
            </div>
        </div>
    }
}
