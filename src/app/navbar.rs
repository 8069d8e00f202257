use leptos::prelude::*;

use crate::content;

const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Smoothly scrolls the window to the section with the given id.
///
/// Purely cosmetic - the plain `href="#id"` fallback still works without it.
/// No-op when the target element doesn't exist.
pub(super) fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let top = el.get_bounding_client_rect().top() + window().scroll_y().unwrap_or_default();
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-slate-950/90 backdrop-blur border-b border-slate-800">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <h3 class="text-xl font-bold text-teal-400">{content::SHORT_NAME}</h3>
                <ul class="hidden sm:flex gap-6 text-sm font-medium">
                    {SECTIONS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="text-slate-300 hover:text-teal-400 transition-colors duration-200"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to_section(id);
                                        }
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
