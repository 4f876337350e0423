mod about;
mod carousel;
mod contact;
mod header;
mod hero;
mod homepage;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod theme;

pub use contact::{submit_contact, SubmitContact};

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use reveal::provide_reveal_tracker;
use scroll::{use_initial_anchor, use_scroll_spy};
use theme::use_theme;

use crate::content::OWNER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-white dark:bg-gray-900 text-gray-900 dark:text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_reveal_tracker();

    let theme = use_theme();
    let scroll = use_scroll_spy();
    use_initial_anchor();

    view! {
        <Html attr:class=move || theme.theme().html_class() />
        // sets the document title
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="Portfolio of a frontend developer: experience, skills, projects and contact details."
        />

        <Router>
            <Header theme=theme scroll=scroll />
            <main class="w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=move || view! { <HomePage scroll_y=scroll.scroll_y /> } />
                </Routes>
            </main>
        </Router>
    }
}
