mod about;
mod contact;
mod hero;
mod navbar;
mod projects;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;

use about::AboutSection;
use contact::ContactSection;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;
use skills::SkillsSection;

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
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-slate-950 text-slate-100 antialiased">
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
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", content::SHORT_NAME) />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow mx-auto w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The single page: all sections stacked, navigated by in-page anchors.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <HeroSection />
        <AboutSection />
        <SkillsSection />
        <ProjectsSection />
        <ContactSection />
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok();
    let year = built
        .map(|dt| dt.format("%Y").to_string())
        .unwrap_or_else(|| "2025".to_string());
    view! {
        <footer class="py-8 border-t border-slate-800 text-center text-sm text-slate-500">
            <p>"© " {year} " " {content::FULL_NAME} ". All rights reserved."</p>
        </footer>
    }
}
