mod certifications;
mod contact;
mod education;
mod header;
mod profile;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{build_year, OWNER};
use certifications::Certifications;
use contact::Contact;
use education::Education;
use header::Header;
use profile::Profile;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white min-h-screen overflow-x-hidden scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: header, every section in page order, footer.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Header />
        <main>
            <Profile />
            <Skills />
            <Certifications />
            <Education />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = build_year().map(|y| format!("{y} ")).unwrap_or_default();
    view! {
        <footer class="relative bg-gradient-to-t from-gray-900 to-black text-center py-12 border-t border-gray-800 overflow-hidden">
            <div class="absolute inset-0 opacity-5 dot-grid"></div>
            <div class="relative z-10 space-y-4">
                <p class="text-gray-400 font-extrabold">
                    {format!("© {year}{OWNER}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
