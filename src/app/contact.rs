use leptos::prelude::*;

use crate::catalog::Contact;
use crate::nav::Section;

const SUBMIT_NOTICE: &str = "Contact functionality would be implemented here";

#[component]
fn Detail(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <i class=format!("{icon} text-rose-300") />
            <div>
                <h4 class="text-rose-50 font-semibold">{label}</h4>
                <div class="text-rose-200">{value}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(contact: &'static Contact) -> impl IntoView {
    // messages are not delivered anywhere
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted");
        if window().alert_with_message(SUBMIT_NOTICE).is_err() {
            log::warn!("couldn't show contact notice");
        }
    };

    view! {
        <section id=Section::Contact.id() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-2xl md:text-3xl font-bold text-rose-50 text-center mb-6">"Get In Touch"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="space-y-4">
                        <Detail icon="extra-email" label="Email" value=contact.email.as_str() />
                        <Detail icon="extra-phone" label="Phone" value=contact.phone.as_str() />
                        <Detail icon="extra-location" label="Location" value=contact.location.as_str() />
                    </div>
                    <form class="bg-black/40 border border-rose-800 rounded-xl p-4 space-y-3" on:submit=on_submit>
                        <div>
                            <label for="contact_name" class="text-sm text-rose-200">"Name"</label>
                            <input
                                id="contact_name"
                                placeholder="Your Name"
                                class="w-full mt-1 px-3 py-2 rounded-md bg-black/30 border border-rose-800 text-rose-100"
                            />
                        </div>
                        <div>
                            <label for="contact_email" class="text-sm text-rose-200">"Email"</label>
                            <input
                                id="contact_email"
                                type="email"
                                placeholder="your-email@gmail.com"
                                class="w-full mt-1 px-3 py-2 rounded-md bg-black/30 border border-rose-800 text-rose-100"
                            />
                        </div>
                        <div>
                            <label for="contact_message" class="text-sm text-rose-200">"Message"</label>
                            <textarea
                                id="contact_message"
                                rows="4"
                                placeholder="Your message..."
                                class="w-full mt-1 px-3 py-2 rounded-md bg-black/30 border border-rose-800 text-rose-100"
                            />
                        </div>
                        <button
                            type="submit"
                            class="w-full inline-flex items-center justify-center gap-2 px-4 py-2 rounded-md bg-rose-600 hover:bg-rose-700 text-white font-semibold"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
