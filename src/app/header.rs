use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::nav::{is_nav_solid, NavState, Section};

fn scroll_to(section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("missing section anchor: {section}"),
    }
}

#[component]
pub fn Header(brand: &'static str) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let (_, scroll_y) = use_window_scroll();

    let select = move |section: Section| {
        scroll_to(section);
        nav.update(|n| n.select(section));
    };

    let nav_class = move || {
        if is_nav_solid(scroll_y.get()) {
            "fixed w-full z-40 top-0 left-0 right-0 transition-all backdrop-blur-md bg-black/50 border-b border-rose-900"
        } else {
            "fixed w-full z-40 top-0 left-0 right-0 transition-all bg-transparent"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="h-16 flex items-center justify-between">
                    <div class="text-2xl font-bold tracking-tight">{brand}</div>
                    <div class="hidden md:flex items-center gap-3">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                let class = move || {
                                    if nav.with(|n| n.active == section) {
                                        "px-3 py-2 rounded-md text-sm font-medium transition-colors text-white bg-rose-800/30"
                                    } else {
                                        "px-3 py-2 rounded-md text-sm font-medium transition-colors text-rose-300 hover:text-white hover:bg-rose-800/10"
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| select(section)>
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:hidden">
                        <button
                            class="p-2 rounded-md bg-black/30"
                            aria-label="Menu"
                            on:click=move |_| nav.update(NavState::toggle_menu)
                        >
                            <i class="extra-menu" />
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="md:hidden bg-black/50 border-t border-rose-900">
                    <div class="px-4 py-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="w-full text-left px-3 py-2 rounded-md text-rose-200 hover:bg-rose-800/10"
                                        on:click=move |_| select(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
