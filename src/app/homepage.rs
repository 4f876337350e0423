use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{GITHUB_URL, LINKEDIN_URL, OWNER_NAME};

use super::about::About;
use super::contact::Contact;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage(scroll_y: Signal<f64>) -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects scroll_y=scroll_y />
        <Contact />
        <Footer />
    }
}

fn build_time() -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[component]
fn Footer() -> impl IntoView {
    let built = build_time();
    let year = built.map(|t| t.year()).unwrap_or(2025);

    view! {
        <footer class="py-8 bg-gray-900 text-gray-400">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
                {built
                    .map(|t| {
                        view! {
                            <p class="text-xs text-gray-500">
                                "Last updated " {t.format("%b %e, %Y").to_string()}
                            </p>
                        }
                    })}
                <div class="flex space-x-4 text-xl">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-white" aria-label="GitHub">
                        <i class="devicon-github-original"></i>
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-white" aria-label="LinkedIn">
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </footer>
    }
}
