use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{ProjectEntry, PROJECTS};
use crate::scroll::HighlightTracker;

/// Featured projects: stacked entry blocks paired with a sticky visual panel.
///
/// The window scroll position determines which entry is "in view"; its logo in
/// the panel carries the active style. The scroll subscription is owned by
/// this component's reactive scope, so leptos-use deregisters the listener
/// when the section is torn down.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let entries_ref = NodeRef::<html::Div>::new();
    let (active, set_active) = signal(None::<usize>);
    let tracker = StoredValue::new(HighlightTracker::new());
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move || {
        let y = scroll_y.get();
        // not yet attached - skip this event, state updates once measured
        let Some(el) = entries_ref.get() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let top = rect.top() + y;
        if let Some(next) =
            tracker.try_update_value(|t| t.observe(y, top, rect.height(), PROJECTS.len()))
        {
            set_active.set(next);
        }
    });

    view! {
        <section id="projects" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div node_ref=entries_ref>
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! { <ProjectCard index project active /> }
                            })
                            .collect_view()}
                    </div>
                    <div class="hidden lg:block">
                        <div class="sticky top-24 h-[70vh] flex items-center justify-center rounded-lg bg-slate-900/50 border border-slate-800">
                            {PROJECTS
                                .iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    view! {
                                        <img
                                            src=project.image
                                            alt=project.image_alt
                                            class="absolute max-h-48 max-w-[60%] transition-all duration-300"
                                            class=(["opacity-100", "scale-100"], move || active.get() == Some(index))
                                            class=(["opacity-0", "scale-90"], move || active.get() != Some(index))
                                        />
                                    }
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
fn ProjectCard(
    index: usize,
    project: &'static ProjectEntry,
    active: ReadSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <div
            class="min-h-[60vh] flex flex-col justify-center p-6 border-l-2 transition-colors duration-300"
            class=("border-teal-500", move || active.get() == Some(index))
            class=("border-slate-800", move || active.get() != Some(index))
        >
            <img src=project.image alt=project.image_alt class="lg:hidden max-h-24 self-start mb-4" />
            <h3 class="text-2xl font-bold mb-3">{project.title}</h3>
            <p class="text-slate-300 leading-relaxed mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-4">
                {project
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-teal-400 hover:underline font-medium"
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
