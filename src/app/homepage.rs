use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::{Profile, Stat};
use crate::nav::Section;

use super::avatar::Avatar;
use super::modal::use_media_overlay;

#[component]
pub fn Hero(profile: &'static Profile, stats: &'static [Stat]) -> impl IntoView {
    let overlay = use_media_overlay();
    let headline = profile
        .headline
        .iter()
        .enumerate()
        .map(|(i, part)| {
            view! {
                {(i > 0).then_some(" | ")}
                <span class="font-medium text-rose-50">{part.as_str()}</span>
            }
        })
        .collect_view();

    view! {
        <Title text="Portfolio" />
        <section id=Section::Home.id() class="min-h-screen flex items-center justify-center pt-20">
            <div class="max-w-5xl w-full px-6">
                <div class="flex flex-col items-center text-center gap-6">
                    <Avatar src=profile.photo.as_str() name=profile.name.as_str() />
                    <h1 class="text-4xl md:text-5xl font-extrabold">{profile.name.as_str()}</h1>
                    <p class="max-w-3xl text-rose-200">{headline}</p>
                    <div class="flex gap-3 items-center">
                        {profile
                            .socials
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href.as_str()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label.as_str()
                                        class="p-3 rounded-xl bg-black/40 hover:scale-105 transition-transform text-rose-200"
                                    >
                                        <i class=s.icon.as_str() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-6 flex gap-4">
                        <a
                            href=profile.cv.as_str()
                            download=""
                            class="inline-flex items-center gap-2 px-5 py-3 rounded-full bg-rose-600 hover:bg-rose-700 text-white font-semibold shadow"
                        >
                            <i class="extra-download" />
                            "Download CV"
                        </a>
                        <button
                            on:click=move |_| overlay.open(profile.cv_gallery(), 0)
                            class="inline-flex items-center gap-2 px-5 py-3 rounded-full border border-rose-600 text-rose-100 hover:bg-rose-900/30 font-semibold"
                        >
                            <i class="extra-file-text" />
                            "Preview CV"
                        </button>
                    </div>
                </div>
                <StatBoard stats />
            </div>
        </section>
    }
}

#[component]
fn StatBoard(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="mt-12 rounded-3xl bg-gradient-to-br from-pink-900 via-pink-800 to-rose-900 shadow-2xl p-8 max-w-5xl mx-auto border border-pink-700/30 backdrop-blur-sm">
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {stats
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="group relative">
                                <div class="relative flex flex-col items-center p-6 bg-black/40 backdrop-blur-sm rounded-2xl shadow-lg border border-pink-700/20 hover:border-amber-400/40 hover:scale-105 transition-all duration-300">
                                    <div class="mb-3 p-3 rounded-full border border-amber-400/30 text-amber-400 text-2xl">
                                        <i class=stat.icon.as_str() />
                                    </div>
                                    <span class="text-pink-100 font-semibold text-sm mb-1">
                                        {stat.title.as_str()}
                                    </span>
                                    <span class="text-amber-400 font-bold text-3xl mb-1">
                                        {stat.value.as_str()}
                                    </span>
                                    <span class="text-amber-400 font-bold text-sm">
                                        {stat.subtitle.as_str()}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn About(paragraphs: &'static [String]) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-2xl md:text-3xl font-bold text-rose-50 text-center mb-6">"About Me"</h2>
                <div class="text-rose-200 leading-relaxed text-lg bg-black/40 p-6 rounded-xl border border-rose-800 space-y-4">
                    {paragraphs.iter().map(|p| view! { <p>{p.as_str()}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
