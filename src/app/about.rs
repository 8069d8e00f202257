use leptos::prelude::*;

use crate::content;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12">"About Me"</h2>
                <div class="flex flex-col lg:flex-row items-center lg:items-start gap-8 lg:gap-12">
                    <div class="flex-shrink-0">
                        <img
                            src=content::PROFILE_IMAGE
                            alt=content::FULL_NAME
                            class="w-48 h-48 lg:w-64 lg:h-64 rounded-full object-cover border-4 border-teal-500/30"
                        />
                    </div>
                    <div class="flex flex-col lg:flex-row gap-8">
                        <div class="max-w-xl">
                            <p class="text-base mb-4 leading-relaxed">
                                "I'm a graduating " <strong>"Bachelor of Science in Information Technology"</strong>
                                " student from " <strong>"Cebu Institute of Technology – University"</strong> "."
                            </p>
                            <p class="text-base mb-4 leading-relaxed">
                                "I specialize in full-stack development using " <strong>"React"</strong> " and "
                                <strong>"Java Spring Boot"</strong>
                                ", with a strong focus on writing clean, maintainable code and creating seamless user experiences."
                            </p>
                            <p class="text-base mb-4 leading-relaxed">
                                "Beyond coding, I produce and perform music with my band, binge-watch series, and explore new music genres."
                            </p>
                        </div>
                        <div class="w-full lg:w-auto">
                            <ul class="space-y-2 text-sm mb-6">
                                <li><strong>"Name: "</strong> {content::FULL_NAME}</li>
                                <li><strong>"Degree: "</strong> "BS Information Technology"</li>
                                <li><strong>"Graduation: "</strong> "May 2026 (Expected)"</li>
                                <li><strong>"Location: "</strong> "Cebu City, Philippines"</li>
                                <li>
                                    <strong>"Email: "</strong>
                                    <a
                                        href=format!("mailto:{}", content::CONTACT_EMAIL)
                                        class="text-teal-400 hover:underline"
                                    >
                                        {content::CONTACT_EMAIL}
                                    </a>
                                </li>
                            </ul>
                            <a
                                href=content::RESUME_PATH
                                download=content::RESUME_DOWNLOAD_NAME
                                class="inline-block px-6 py-3 rounded-md bg-teal-500 hover:bg-teal-400 text-slate-950 font-medium transition-colors duration-200"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
