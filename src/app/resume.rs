use leptos::prelude::*;

use crate::catalog::{Award, Certificate, Education, Experience, SkillGroup};
use crate::nav::Section;

use super::avatar::Logo;
use super::modal::use_media_overlay;

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! { <h2 class="text-2xl md:text-3xl font-bold text-rose-50 text-center mb-6">{text}</h2> }
}

#[component]
pub fn ExperienceSection(jobs: &'static [Experience]) -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-16 bg-black/5">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Experience" />
                <div class="relative">
                    <div class="absolute left-6 top-0 bottom-0 w-px bg-rose-800/40" />
                    {jobs.iter().map(|job| view! { <Job job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Job(job: &'static Experience) -> impl IntoView {
    view! {
        <div class="relative pl-20 pb-12">
            <div class="absolute left-6 w-4 h-4 bg-rose-600 rounded-full border-4 border-rose-950" />
            <div class="bg-black/40 border border-rose-800 rounded-xl p-6 shadow">
                <div class="flex items-start gap-4 mb-4">
                    <a href=job.link.as_str() target="_blank" rel="noopener noreferrer" class="shrink-0">
                        <Logo
                            src=job.logo.as_str()
                            alt=job.company.as_str()
                            class="w-10 h-10 rounded-full border border-rose-800 object-cover"
                        />
                    </a>
                    <div>
                        <h3 class="text-xl font-semibold text-rose-50">{job.title.as_str()}</h3>
                        <p class="text-rose-300 text-sm">{job.company.as_str()}</p>
                        <p class="text-rose-400 text-sm mt-1 flex items-center">
                            <i class="extra-calendar mr-2" />
                            {job.period.as_str()}
                        </p>
                    </div>
                </div>
                <div class="text-rose-200 text-sm leading-relaxed">
                    {job
                        .project
                        .as_deref()
                        .map(|p| {
                            view! {
                                <p class="mb-2">
                                    <strong>"Project: "</strong>
                                    {p}
                                </p>
                            }
                        })}
                    <ul class="list-disc list-inside mb-2 space-y-1">
                        {job.bullets.iter().map(|b| view! { <li>{b.as_str()}</li> }).collect_view()}
                    </ul>
                    {(!job.technologies.is_empty())
                        .then(|| {
                            view! {
                                <p>
                                    <strong>"Technologies: "</strong>
                                    {job.technologies.join(", ")}
                                </p>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EducationSection(entries: &'static [Education]) -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="py-16">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Education" />
                <div class="grid md:grid-cols-2 gap-6">
                    {entries
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="bg-black/40 border border-rose-800 rounded-xl p-5">
                                    <div class="flex items-start gap-4 mb-3">
                                        <Logo
                                            src=edu.logo.as_str()
                                            alt=edu.school.as_str()
                                            class="w-12 h-12 rounded-full object-cover border border-rose-800"
                                        />
                                        <div>
                                            <h3 class="text-lg font-semibold text-rose-50">
                                                {edu.degree.as_str()}
                                            </h3>
                                            <p class="text-rose-300 text-sm">{edu.school.as_str()}</p>
                                        </div>
                                    </div>
                                    <div class="flex items-center gap-2 text-emerald-300 text-sm mb-3">
                                        <i class="extra-calendar" />
                                        {edu.year.as_str()}
                                    </div>
                                    <ul class="text-rose-200 text-sm">
                                        {edu.notes.iter().map(|n| view! { <li>{n.as_str()}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-16 bg-black/5">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Skills" />
                <div class="grid md:grid-cols-2 gap-4">
                    {groups
                        .iter()
                        .map(|g| {
                            view! {
                                <div class="bg-black/40 border border-rose-800 rounded-xl p-4">
                                    <div class="flex items-center gap-3 mb-3">
                                        <i class="extra-code text-rose-200" />
                                        <h3 class="text-lg font-semibold text-rose-50">{g.category.as_str()}</h3>
                                    </div>
                                    <ul class="text-rose-200 text-sm space-y-2">
                                        {g
                                            .skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <li class="flex items-center gap-2">
                                                        <div class="w-2 h-2 rounded-full bg-rose-500" />
                                                        {s.as_str()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CertificatesSection(certificates: &'static [Certificate]) -> impl IntoView {
    let overlay = use_media_overlay();
    view! {
        <section id=Section::Certificates.id() class="py-16">
            <div class="max-w-5xl mx-auto px-6">
                <SectionHeading text="Certifications" />
                <div class="grid md:grid-cols-2 gap-4">
                    {certificates
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="bg-black/40 border border-rose-800 rounded-xl p-4 flex items-start gap-4">
                                    <button
                                        class="w-16 h-16 rounded-lg flex-shrink-0 bg-black/60 flex items-center justify-center border border-rose-800 cursor-pointer"
                                        aria-label="Preview certificate"
                                        on:click=move |_| overlay.open(cert.gallery(), 0)
                                    >
                                        <Logo
                                            src=cert.logo.as_str()
                                            alt=cert.issuer.as_str()
                                            class="w-full h-full object-contain"
                                        />
                                    </button>
                                    <div class="flex-1">
                                        <h3 class="text-lg font-semibold text-rose-50">{cert.title.as_str()}</h3>
                                        <div class="text-rose-300 text-sm">{cert.issuer.as_str()}</div>
                                        <div class="text-green-400 text-sm mt-1 flex items-center">
                                            <i class="extra-calendar mr-2" />
                                            {cert.date.as_str()}
                                        </div>
                                        <div class="mt-3">
                                            <a
                                                href=cert.link.as_str()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-gradient-to-r from-rose-600 to-rose-700 hover:from-rose-700 hover:to-rose-800 text-white font-medium shadow-md transition-all duration-300"
                                            >
                                                <i class="extra-external-link" />
                                                <span>"Verify Certificate"</span>
                                            </a>
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

#[component]
pub fn AwardsSection(awards: &'static [Award]) -> impl IntoView {
    view! {
        <section id=Section::Awards.id() class="py-16 bg-black/5">
            <div class="max-w-4xl mx-auto px-6">
                <SectionHeading text="Awards & Recognition" />
                <div class="space-y-4">
                    {awards.iter().map(|award| view! { <AwardCard award /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AwardCard(award: &'static Award) -> impl IntoView {
    let overlay = use_media_overlay();
    let (card_class, badge_class, icon) = if award.special {
        (
            "p-4 rounded-xl border border-rose-600 bg-gradient-to-r from-rose-900/30 to-black/30",
            "p-3 rounded-xl bg-rose-600 text-white",
            "extra-star",
        )
    } else {
        (
            "p-4 rounded-xl border border-rose-800 bg-black/40",
            "p-3 rounded-xl bg-rose-700 text-white",
            "extra-medal",
        )
    };

    view! {
        <div class=card_class>
            <div class="flex items-start justify-between gap-4">
                <div class="flex items-start gap-3">
                    <div class=badge_class>
                        <i class=icon />
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-rose-50">{award.title.as_str()}</h3>
                        <div class="text-rose-300 text-sm">
                            {award.organization.as_str()}
                            {award
                                .gpa
                                .as_deref()
                                .map(|gpa| {
                                    view! {
                                        <span class="text-emerald-300 font-semibold">
                                            " • GPA: " {gpa}
                                        </span>
                                    }
                                })}
                        </div>
                    </div>
                </div>
                <div class="text-sm">
                    <div class="mb-2 flex items-center gap-2 text-green-300">
                        <i class="extra-calendar" />
                        <span>{award.date.as_str()}</span>
                    </div>
                    <div class="text-xs bg-black/40 px-3 py-1 rounded-full text-amber-300">
                        {award.category.as_str()}
                    </div>
                </div>
            </div>
            <p class="mt-3 text-rose-200">{award.description.as_str()}</p>
            {(!award.images.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-3 grid grid-cols-1 md:grid-cols-3 gap-3">
                            {award
                                .images
                                .iter()
                                .enumerate()
                                .map(|(i, src)| {
                                    view! {
                                        <div
                                            class="rounded-md overflow-hidden border border-rose-800 cursor-pointer"
                                            on:click=move |_| overlay.open(award.gallery(), i)
                                        >
                                            <img
                                                src=src.as_str()
                                                alt=format!("{} {}", award.title, i + 1)
                                                class="w-full h-36 object-contain bg-black/20"
                                            />
                                            <div class="p-2 text-xs text-rose-200">
                                                {format!("Award Image {}", i + 1)}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })}
        </div>
    }
}
