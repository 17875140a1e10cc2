mod avatar;
mod contact;
mod header;
mod homepage;
mod modal;
mod projects;
mod resume;

use chrono::{DateTime, Datelike};
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::catalog::{catalog, Catalog};

use contact::ContactSection;
use header::Header;
use homepage::{About, Hero};
use modal::{provide_media_overlay, MediaModal};
use projects::{ProjectsSection, PublicationsSection};
use resume::{AwardsSection, CertificatesSection, EducationSection, ExperienceSection, SkillsSection};

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let title = match catalog() {
        Ok(c) => c.profile.name.clone(),
        Err(_) => "Portfolio".to_string(),
    };

    view! {
        <Title formatter=move |text| format!("{title} - {text}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    match catalog() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("content catalog unavailable: {e}");
            Either::Right(view! {
                <main class="min-h-screen flex items-center justify-center text-rose-200">
                    <p>{format!("Content could not be loaded: {e}")}</p>
                </main>
            })
        }
    }
}

#[component]
fn Portfolio(content: &'static Catalog) -> impl IntoView {
    provide_media_overlay();

    view! {
        <div class="min-h-screen text-rose-50 bg-gradient-to-br from-rose-950 via-black to-rose-900">
            <Header brand=content.profile.brand.as_str() />
            <main>
                <Hero profile={&content.profile} stats=content.stats.as_slice() />
                <About paragraphs=content.about.as_slice() />
                <ExperienceSection jobs=content.experience.as_slice() />
                <EducationSection entries=content.education.as_slice() />
                <ProjectsSection projects=content.projects.as_slice() />
                <PublicationsSection publications=content.publications.as_slice() />
                <SkillsSection groups=content.skills.as_slice() />
                <CertificatesSection certificates=content.certificates.as_slice() />
                <AwardsSection awards=content.awards.as_slice() />
                <ContactSection contact={&content.contact} />
            </main>
            <Footer holder=content.profile.name.as_str() />
            <MediaModal />
        </div>
    }
}

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[component]
fn Footer(holder: &'static str) -> impl IntoView {
    let notice = match build_year() {
        Some(year) => format!("© {year} {holder}. All rights reserved."),
        None => format!("© {holder}. All rights reserved."),
    };
    view! {
        <footer class="py-8 bg-black/30">
            <div class="max-w-4xl mx-auto px-6 text-center text-rose-300">{notice}</div>
        </footer>
    }
}
