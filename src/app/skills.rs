use leptos::prelude::*;

use crate::content::SKILLS;

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-4 bg-slate-900/50">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"Tools & Technologies"</h2>
                <div class="flex flex-wrap justify-center gap-3">
                    {SKILLS
                        .iter()
                        .map(|&skill| {
                            view! {
                                <span class="px-4 py-2 rounded-full bg-slate-800 border border-slate-700 text-sm hover:border-teal-500/50 transition-colors duration-200">
                                    {skill}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
