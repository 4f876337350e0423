use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{GITHUB_URL, LINKEDIN_URL, SITE_LOGO};
use crate::section::SectionId;

use super::scroll::{scroll_to_section, ScrollSpy};
use super::theme::ThemeState;

#[component]
pub fn Header(theme: ThemeState, scroll: ScrollSpy) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section: SectionId| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            set_menu_open.set(false);
            scroll_to_section(section);
        }
    };

    let theme_icon = move || if theme.theme().is_dark() { "☀" } else { "☾" };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-300"
            class=("py-2", move || scroll.scrolled.get())
            class=("shadow-md", move || scroll.scrolled.get())
            class=("bg-white/90", move || scroll.scrolled.get())
            class=("dark:bg-gray-900/90", move || scroll.scrolled.get())
            class=("backdrop-blur-md", move || scroll.scrolled.get())
            class=("py-4", move || !scroll.scrolled.get())
            class=("bg-transparent", move || !scroll.scrolled.get())
        >
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex items-center justify-between">
                <a
                    href=SectionId::Home.anchor()
                    on:click=go_to(SectionId::Home)
                    class="text-2xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent"
                >
                    {SITE_LOGO}
                </a>

                <div class="hidden md:flex items-center space-x-2">
                    {SectionId::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.anchor()
                                    on:click=go_to(section)
                                    class=move || {
                                        if scroll.active.get() == section {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors duration-300 bg-purple-600 text-white"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium transition-colors duration-300 text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400"
                                        }
                                    }
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| theme.toggle()
                        class="ml-2 w-10 h-10 flex items-center justify-center rounded-full bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:scale-110 transition-transform duration-300"
                        aria-label="Toggle theme"
                    >
                        {theme_icon}
                    </button>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-xl text-gray-700 dark:text-gray-300 hover:text-purple-600"
                        aria-label="GitHub"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-xl text-gray-700 dark:text-gray-300 hover:text-purple-600"
                        aria-label="LinkedIn"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>

                <button
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="md:hidden w-10 h-10 flex items-center justify-center text-2xl text-gray-700 dark:text-gray-300"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <div
                class="md:hidden overflow-hidden transition-all duration-300 bg-white dark:bg-gray-900 shadow-lg"
                class=("max-h-0", move || !menu_open.get())
                class=("max-h-96", move || menu_open.get())
            >
                <div class="px-4 py-4 space-y-2">
                    {SectionId::NAV
                        .into_iter()
                        .enumerate()
                        .map(|(i, section)| {
                            view! {
                                <a
                                    href=section.anchor()
                                    on:click=go_to(section)
                                    class="block px-4 py-2 rounded-lg transition-all duration-300"
                                    class=("opacity-0", move || !menu_open.get())
                                    class=("-translate-x-4", move || !menu_open.get())
                                    class=("bg-purple-600", move || scroll.active.get() == section)
                                    class=("text-white", move || scroll.active.get() == section)
                                    style:transition-delay=format!("{}ms", i * 50)
                                >
                                    {section.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| theme.toggle()
                        class="w-full text-left px-4 py-2 rounded-lg text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800"
                    >
                        {move || format!("Switch to {} Mode", theme.theme().toggled().label())}
                    </button>
                </div>
            </div>
        </header>
    }
}
