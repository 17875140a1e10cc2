use leptos::{either::Either, prelude::*};

use crate::catalog::{Project, Publication};
use crate::nav::Section;
use crate::overlay::MediaKind;

use super::modal::use_media_overlay;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-16 bg-black/5">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="text-2xl md:text-3xl font-bold text-center text-rose-50 mb-6">"Projects"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let overlay = use_media_overlay();
    let thumbnails = project
        .images
        .iter()
        .enumerate()
        .map(|(i, item)| {
            // only images have a meaningful thumbnail
            let thumb = if item.kind == MediaKind::Image {
                Either::Left(view! {
                    <img
                        src=item.src.as_str()
                        alt=item.alt.as_str()
                        class="w-full h-44 object-contain bg-black/20"
                    />
                })
            } else {
                Either::Right(view! {
                    <div class="w-full h-44 flex items-center justify-center bg-black/20 text-rose-300 text-4xl">
                        <i class="extra-file-text" />
                    </div>
                })
            };
            view! {
                <div
                    class="rounded-md overflow-hidden border border-rose-800 cursor-pointer"
                    on:click=move |_| overlay.open(project.gallery(), i)
                >
                    {thumb}
                    <div class="p-2 text-xs text-rose-200">{item.title()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-black/40 border border-rose-800 rounded-xl p-5">
            <div class="flex items-start justify-between mb-3">
                <h3 class="text-lg font-semibold text-rose-50 max-w-[75%]">{project.title.as_str()}</h3>
                <a
                    href=project.link.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-rose-300 hover:text-white"
                >
                    <i class="extra-external-link" />
                </a>
            </div>
            <p class="text-rose-200 mb-3 text-sm">{project.description.as_str()}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="px-3 py-1 rounded-full bg-rose-900/40 border border-rose-800 text-rose-200 text-xs">
                                {t.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            {(!project.images.is_empty())
                .then(move || {
                    view! {
                        <div>
                            <div class="flex items-center gap-2 mb-2 text-rose-200">
                                <i class="extra-image" />
                                <span class="text-sm">"Project Screenshots"</span>
                            </div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-3">{thumbnails}</div>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
pub fn PublicationsSection(publications: &'static [Publication]) -> impl IntoView {
    let overlay = use_media_overlay();
    view! {
        <section id=Section::Publications.id() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="text-2xl md:text-3xl font-bold text-rose-50 text-center mb-6">"Publications"</h2>
                <div class="space-y-4">
                    {publications
                        .iter()
                        .map(|publication| {
                            view! {
                                <div class="bg-black/40 border border-rose-800 rounded-xl p-4 flex gap-4">
                                    <img
                                        src=publication.image.as_str()
                                        alt=publication.title.as_str()
                                        class="w-36 h-28 object-contain rounded-md border border-rose-800 cursor-pointer"
                                        on:click=move |_| overlay.open(publication.gallery(), 0)
                                    />
                                    <div class="flex-1">
                                        <div class="flex items-start justify-between">
                                            <h3 class="text-lg font-semibold text-rose-50">
                                                {publication.title.as_str()}
                                            </h3>
                                            <a
                                                href=publication.link.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-rose-300 hover:text-white"
                                            >
                                                <i class="extra-external-link" />
                                            </a>
                                        </div>
                                        <p class="text-rose-300 text-sm">{publication.publication.as_str()}</p>
                                        <div class="mt-2 inline-block bg-emerald-300 text-black text-xs font-semibold px-3 py-1 rounded-full">
                                            {publication.date.as_str()}
                                        </div>
                                        <div class="mt-3 flex gap-2">
                                            {publication
                                                .tags
                                                .iter()
                                                .map(|t| {
                                                    view! {
                                                        <span class="text-xs px-2 py-1 bg-rose-900/40 rounded-full text-rose-200">
                                                            "#" {t.as_str()}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
