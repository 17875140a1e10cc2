use leptos::{either::EitherOf3, ev, prelude::*};

use crate::overlay::{KeyAction, MediaItem, MediaKind, OverlayState};

/// Handle to the page-wide media preview overlay.
///
/// Sections can only ask for a gallery to be shown; every other transition
/// belongs to the overlay's own controls.
#[derive(Clone, Copy)]
pub struct MediaOverlay {
    state: RwSignal<OverlayState>,
}

impl MediaOverlay {
    fn new() -> Self {
        Self {
            state: RwSignal::new(OverlayState::new()),
        }
    }

    pub fn open(&self, items: Vec<MediaItem>, index: usize) {
        let count = items.len();
        self.state.update(|s| {
            if s.open(items, index) {
                log::debug!("media overlay opened at {} of {count}", s.current_index());
            } else {
                log::debug!("media overlay ignored an empty gallery");
            }
        });
    }

    fn close(&self) {
        self.state.update(OverlayState::close);
    }

    fn next(&self) {
        self.state.update(|s| {
            s.next();
        });
    }

    fn previous(&self) {
        self.state.update(|s| {
            s.previous();
        });
    }

    fn handle_key(&self, action: KeyAction) -> bool {
        if action == KeyAction::Ignored {
            return false;
        }
        let mut changed = false;
        self.state.update(|s| changed = s.handle_key(action));
        changed
    }
}

pub fn provide_media_overlay() -> MediaOverlay {
    let overlay = MediaOverlay::new();
    provide_context(overlay);
    overlay
}

pub fn use_media_overlay() -> MediaOverlay {
    expect_context::<MediaOverlay>()
}

#[component]
pub fn MediaModal() -> impl IntoView {
    let overlay = use_media_overlay();
    let is_open = Memo::new(move |_| overlay.state.with(OverlayState::is_open));

    view! {
        <Show when=move || is_open.get()>
            <ModalPanel overlay />
        </Show>
    }
}

/// Mounted only while the overlay is open, so the window key listener
/// lives exactly as long as the panel does.
#[component]
fn ModalPanel(overlay: MediaOverlay) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if overlay.handle_key(KeyAction::from(ev.key().as_str())) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());

    let current = move || overlay.state.with(|s| s.current().cloned());
    let has_prev = move || overlay.state.with(OverlayState::has_previous);
    let has_next = move || overlay.state.with(OverlayState::has_next);
    let position = move || overlay.state.with(OverlayState::position);

    view! {
        <div class="fixed inset-0 z-[100] flex items-center justify-center p-6" aria-modal="true" role="dialog">
            <div
                class="absolute inset-0 bg-black/70 backdrop-blur-sm"
                on:click=move |_| overlay.close()
            />
            <div class="relative w-full max-w-6xl rounded-2xl overflow-hidden shadow-2xl grid grid-cols-1 md:grid-cols-3 bg-gradient-to-br from-rose-900/95 via-rose-800/85 to-black/80">
                <div class="md:col-span-2 p-6 flex items-center justify-center bg-black/60">
                    {move || current().map(|item| view! { <MediaView item /> })}
                </div>
                <div class="p-5 md:p-6 bg-gradient-to-t from-black/20 to-black/10">
                    {move || current().map(|item| view! { <Sidebar item on_close=move || overlay.close() /> })}
                    <div class="mt-6">
                        <div class="flex items-center justify-between text-xs text-rose-300">
                            <div class="font-semibold text-rose-50">{position}</div>
                            <div>"Tip: Esc closes • ← / → navigate"</div>
                        </div>
                        <div class="mt-4 flex gap-2">
                            <button
                                on:click=move |_| overlay.previous()
                                disabled=move || !has_prev()
                                class=move || {
                                    if has_prev() {
                                        "px-3 py-2 rounded-md text-sm bg-black/50 hover:bg-black/60 text-rose-100"
                                    } else {
                                        "px-3 py-2 rounded-md text-sm bg-black/30 text-rose-500"
                                    }
                                }
                            >
                                "Prev"
                            </button>
                            <button
                                on:click=move |_| overlay.next()
                                disabled=move || !has_next()
                                class=move || {
                                    if has_next() {
                                        "px-3 py-2 rounded-md text-sm bg-rose-600 hover:bg-rose-700 text-white"
                                    } else {
                                        "px-3 py-2 rounded-md text-sm bg-black/30 text-rose-500"
                                    }
                                }
                            >
                                "Next"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MediaView(item: MediaItem) -> impl IntoView {
    let title = item.title().to_string();
    match item.kind {
        MediaKind::Image => EitherOf3::A(view! {
            <img
                src=item.src
                alt=title
                class="max-h-[78vh] w-auto max-w-full rounded-md object-contain shadow-lg"
            />
        }),
        MediaKind::Document => EitherOf3::B(view! {
            <div class="w-full h-[78vh] rounded-md overflow-hidden border border-rose-800">
                <iframe src=item.src title=title class="w-full h-full" />
            </div>
        }),
        MediaKind::ExternalLink => EitherOf3::C(view! {
            <div class="w-full h-[78vh] flex items-center justify-center text-rose-100">
                <div class="text-center">
                    <p class="mb-4">"Open external link"</p>
                    <a
                        href=item.src
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-5 py-3 bg-rose-600 hover:bg-rose-700 rounded-md text-white font-semibold"
                    >
                        "Open original"
                        <i class="extra-external-link" />
                    </a>
                </div>
            </div>
        }),
    }
}

#[component]
fn Sidebar<F>(item: MediaItem, on_close: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let title = item.title().to_string();
    let is_document = item.kind == MediaKind::Document;
    let MediaItem {
        src, description, ..
    } = item;
    let download_src = src.clone();
    view! {
        <div class="flex items-start justify-between">
            <div>
                <h3 class="text-lg font-semibold text-rose-50">{title}</h3>
                {description
                    .map(|d| view! { <p class="text-sm text-rose-200 mt-2">{d}</p> })}
                <div class="mt-3 text-xs text-rose-300 break-all">"Source: " {src.clone()}</div>
            </div>
            <button
                on:click=move |_| on_close()
                class="p-2 rounded-full bg-black/40 hover:bg-black/60 text-rose-100"
                aria-label="Close"
            >
                <i class="extra-close" />
            </button>
        </div>
        <div class="mt-6">
            <a
                href=src
                target="_blank"
                rel="noopener noreferrer"
                class="inline-flex items-center gap-2 px-4 py-2 bg-rose-600 hover:bg-rose-700 rounded-md text-white font-semibold"
            >
                "Open Original"
                <i class="extra-external-link" />
            </a>
            {is_document
                .then(|| {
                    view! {
                        <a
                            href=download_src
                            download=""
                            class="ml-3 inline-flex items-center gap-2 px-3 py-2 border border-rose-700 text-rose-200 rounded-md hover:bg-rose-900/30"
                        >
                            <i class="extra-download" />
                            "Download"
                        </a>
                    }
                })}
        </div>
    }
}
