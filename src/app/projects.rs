use leptos::{html, prelude::*};

use crate::content::{animated_letters, card_delay, projects_in, Category, Project};
use crate::interaction::{
    scroll::parallax_offset,
    tilt::{tilt_transform, Rect, RESTING_TRANSFORM},
};
use crate::section::SectionId;

use super::carousel::ProjectCarousel;
use super::reveal::use_reveal;

#[component]
pub fn Projects(scroll_y: Signal<f64>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(SectionId::Projects, section_ref);
    let (category, set_category) = signal(Category::All);

    view! {
        <section
            id=SectionId::Projects.as_str()
            node_ref=section_ref
            class="py-20 bg-gray-50 dark:bg-gray-800 relative overflow-hidden"
        >
            <div
                class="absolute inset-0 pointer-events-none"
                style:transform=move || format!("translateY({}px)", parallax_offset(scroll_y.get()))
            >
                <div class="absolute top-20 left-10 w-64 h-64 bg-purple-300/20 dark:bg-purple-900/20 rounded-full blur-3xl"></div>
                <div class="absolute bottom-20 right-10 w-72 h-72 bg-pink-300/20 dark:bg-pink-900/20 rounded-full blur-3xl"></div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    {animated_letters("My Projects")
                        .into_iter()
                        .map(|(letter, delay)| {
                            view! {
                                <span
                                    class="inline-block"
                                    class=("animate-title-reveal", move || revealed.get())
                                    class=("opacity-0", move || !revealed.get())
                                    style:animation-delay=format!("{delay}s")
                                >
                                    {letter}
                                </span>
                            }
                        })
                        .collect_view()}
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-300 max-w-2xl mx-auto mb-10">
                    "A selection of things I have designed and built."
                </p>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {Category::ALL
                        .into_iter()
                        .map(|c| {
                            view! {
                                <button
                                    on:click=move |_| set_category.set(c)
                                    class=move || {
                                        if category.get() == c {
                                            "px-5 py-2 rounded-full text-sm font-medium transition-colors duration-300 bg-purple-600 text-white shadow-md"
                                        } else {
                                            "px-5 py-2 rounded-full text-sm font-medium transition-colors duration-300 bg-white dark:bg-gray-700 text-gray-700 dark:text-gray-200 hover:bg-purple-100 dark:hover:bg-gray-600"
                                        }
                                    }
                                >
                                    {c.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        projects_in(category.get())
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard project=project index=index revealed=revealed /> }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (transform, set_transform) = signal(RESTING_TRANSFORM.to_string());

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(card) = card_ref.get() else {
            return;
        };
        let bounds = card.get_bounding_client_rect();
        let rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        set_transform.set(tilt_transform(
            ev.client_x() as f64,
            ev.client_y() as f64,
            rect,
        ));
    };

    view! {
        <div
            class="transition-all duration-700"
            class=("opacity-0", move || !revealed.get())
            class=("translate-y-10", move || !revealed.get())
            style:transition-delay=format!("{}s", card_delay(index))
        >
            <div
                node_ref=card_ref
                on:mousemove=on_move
                on:mouseleave=move |_| set_transform.set(RESTING_TRANSFORM.to_string())
                style:transform=move || transform.get()
                class="bg-white dark:bg-gray-900 rounded-xl shadow-lg hover:shadow-2xl overflow-hidden transition-transform duration-200 ease-out"
            >
                <ProjectCarousel images=project.images />
                <div class="p-6">
                    <div class="flex items-center justify-between mb-2">
                        <h3 class="text-xl font-semibold text-gray-900 dark:text-white">
                            {project.title}
                        </h3>
                        <span class="text-xs px-2 py-1 rounded-full bg-purple-100 dark:bg-purple-900/50 text-purple-700 dark:text-purple-300">
                            {project.category.label()}
                        </span>
                    </div>
                    <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-3 py-1 text-sm rounded-full bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300">
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex space-x-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors"
                        >
                            <i class="devicon-github-original mr-2"></i>
                            "Code"
                        </a>
                        <a
                            href=project.live
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center text-gray-700 dark:text-gray-300 hover:text-purple-600 dark:hover:text-purple-400 transition-colors"
                        >
                            <span class="mr-2">"↗"</span>
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
