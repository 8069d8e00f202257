use leptos::prelude::*;

use crate::content;

use super::navbar::scroll_to_section;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-4 pt-20">
            <div class="max-w-3xl text-center">
                <h1 class="text-4xl lg:text-6xl font-bold leading-tight mb-4">
                    "Hi, I'm " <span class="text-teal-400">{content::FULL_NAME}</span>
                </h1>
                <p class="text-xl text-slate-300 mb-2">{content::TAGLINE}</p>
                <p class="text-base text-slate-400 mb-8 max-w-xl mx-auto">
                    "Graduating BSIT student passionate about web development, clean code, and building solutions that matter."
                </p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-md bg-teal-500 hover:bg-teal-400 text-slate-950 font-medium transition-colors duration-200"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("projects");
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md border border-teal-500/50 hover:bg-teal-500/10 text-teal-400 font-medium transition-colors duration-200"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("contact");
                        }
                    >
                        "Get In Touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
