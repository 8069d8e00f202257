use leptos::{prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content;
use crate::email::{send_contact_email, FormSubmission};

use super::toast::{Toast, ToastHost, TOAST_DURATION_MS};

/// Contact section with the modal form flow.
///
/// One outbound delivery call per submit. `sending` guards against duplicate
/// concurrent submissions; it flips back regardless of outcome. On success the
/// modal closes and the fields clear; on failure the entered values stay so
/// the user can retry without retyping. No automatic retry, no cancellation.
#[component]
pub fn ContactSection() -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let sending = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (toast, set_toast) = signal(None::<Toast>);

    // Auto-dismiss timer for the notification; released with this scope.
    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| set_toast.set(None), TOAST_DURATION_MS);

    let show_toast = move |t: Toast| {
        set_toast.set(Some(t));
        stop();
        start(());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let submission = FormSubmission {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        sending.set(true);
        let show_toast = show_toast.clone();
        spawn_local(async move {
            let res = send_contact_email(&submission).await;
            sending.set(false);
            match res {
                Ok(()) => {
                    show_toast(Toast::success("Message sent - thank you!"));
                    modal_open.set(false);
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => {
                    log::error!("contact form delivery failed: {err}");
                    show_toast(Toast::error("Couldn't send your message - please try again."));
                }
            }
        });
    };

    view! {
        <section id="contact" class="py-20 px-4 bg-slate-900/50">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl font-bold mb-6">"Get In Touch"</h2>
                <p class="text-lg text-slate-300 mb-8">
                    "I'm actively seeking " <strong>"internships"</strong> ", "
                    <strong>"freelance projects"</strong> ", or "
                    <strong>"junior developer roles"</strong> "."
                </p>
                <div class="space-y-2 mb-8">
                    <p><strong>"Email: "</strong> {content::CONTACT_EMAIL}</p>
                    <p><strong>"Phone: "</strong> {content::CONTACT_PHONE}</p>
                </div>
                <SocialLinks />
                <button
                    class="mt-8 px-8 py-3 rounded-md bg-teal-500 hover:bg-teal-400 text-slate-950 font-medium transition-colors duration-200"
                    on:click=move |_| modal_open.set(true)
                >
                    "Send Me a Message"
                </button>
            </div>

            {move || {
                let on_submit = on_submit.clone();
                modal_open.get()
                    .then(move || {
                        view! {
                            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                                <div
                                    class="absolute inset-0 bg-black/70"
                                    on:click=move |_| modal_open.set(false)
                                ></div>
                                <form
                                    class="relative w-full max-w-lg bg-slate-900 border border-slate-700 rounded-lg p-6 space-y-4"
                                    on:submit=on_submit
                                >
                                    <h3 class="text-xl font-bold">"Send Me a Message"</h3>
                                    <input
                                        type="text"
                                        placeholder="Your Name"
                                        required
                                        class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-950 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                    <input
                                        type="email"
                                        placeholder="Your Email"
                                        required
                                        class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-950 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                        prop:value=move || email.get()
                                        on:input=move |ev| email.set(event_target_value(&ev))
                                    />
                                    <input
                                        type="text"
                                        placeholder="Subject"
                                        required
                                        class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-950 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                        prop:value=move || subject.get()
                                        on:input=move |ev| subject.set(event_target_value(&ev))
                                    />
                                    <textarea
                                        placeholder="Your Message"
                                        required
                                        rows="5"
                                        class="w-full px-4 py-2 rounded-md border border-slate-700 bg-slate-950 focus:outline-none focus:ring-2 focus:ring-teal-500"
                                        prop:value=move || message.get()
                                        on:input=move |ev| message.set(event_target_value(&ev))
                                    ></textarea>
                                    <div class="flex justify-end gap-3">
                                        <button
                                            type="button"
                                            class="px-5 py-2 rounded-md border border-slate-700 hover:bg-slate-800 transition-colors duration-200"
                                            on:click=move |_| modal_open.set(false)
                                        >
                                            "Cancel"
                                        </button>
                                        <button
                                            type="submit"
                                            disabled=move || sending.get()
                                            class="px-5 py-2 rounded-md bg-teal-500 hover:bg-teal-400 disabled:opacity-50 disabled:cursor-not-allowed text-slate-950 font-medium transition-colors duration-200"
                                        >
                                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                                        </button>
                                    </div>
                                </form>
                            </div>
                        }
                    })
            }}

            <ToastHost toast />
        </section>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-6">
            <a
                href=content::LINKEDIN_URL
                target="_blank"
                rel="noopener noreferrer"
                aria-label="LinkedIn Profile"
                class="text-slate-400 hover:text-teal-400 transition-colors duration-200"
            >
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451c.979 0 1.771-.774 1.771-1.729V1.729C24 .774 23.205 0 22.225 0z" />
                </svg>
            </a>
            <a
                href=content::GITHUB_URL
                target="_blank"
                rel="noopener noreferrer"
                aria-label="GitHub Profile"
                class="text-slate-400 hover:text-teal-400 transition-colors duration-200"
            >
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M12 0C5.374 0 0 5.373 0 12c0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23A11.509 11.509 0 0112 5.803c1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.553 3.297-1.553.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576C20.566 21.797 24 17.3 24 12c0-6.627-5.373-12-12-12z" />
                </svg>
            </a>
            <a
                href=content::FACEBOOK_URL
                target="_blank"
                rel="noopener noreferrer"
                aria-label="Facebook Profile"
                class="text-slate-400 hover:text-teal-400 transition-colors duration-200"
            >
                <svg class="w-6 h-6" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M24 12.073c0-6.627-5.373-12-12-12s-12 5.373-12 12c0 5.99 4.388 10.954 10.125 11.854v-8.385H7.078v-3.47h3.047V9.43c0-3.007 1.792-4.669 4.533-4.669 1.312 0 2.686.235 2.686.235v2.953H15.83c-1.491 0-1.956.925-1.956 1.874v2.25h3.328l-.532 3.47h-2.796v8.385C19.612 23.027 24 18.062 24 12.073z" />
                </svg>
            </a>
        </div>
    }
}
