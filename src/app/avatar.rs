use leptos::{html, prelude::*};

#[component]
pub fn Avatar(src: &'static str, name: &'static str) -> impl IntoView {
    view! {
        <div class="relative">
            <div class="w-44 h-44 rounded-full p-1 bg-gradient-to-tr from-rose-700 to-rose-500 shadow-xl">
                <div class="w-full h-full rounded-full bg-black/60 flex items-center justify-center overflow-hidden">
                    <img src=src alt=name class="w-full h-full object-cover rounded-full" />
                </div>
            </div>
            <div class="absolute -right-4 -bottom-4 w-8 h-8 bg-rose-500 rounded-full shadow-lg" />
        </div>
    }
}

/// A finished image with no intrinsic width failed to decode or load.
fn load_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}

/// Organization logo that hides itself if the image fails to load.
#[component]
pub fn Logo(src: &'static str, alt: &'static str, #[prop(into)] class: String) -> impl IntoView {
    let img_ref = NodeRef::<html::Img>::new();
    let (broken, set_broken) = signal(false);

    // server-rendered images may fail before hydration attaches on:error
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if load_failed(img.complete(), img.natural_width()) {
                log::debug!("hiding broken logo: {src}");
                set_broken.set(true);
            }
        }
    });

    view! {
        <img
            node_ref=img_ref
            src=src
            alt=alt
            class=class
            style:display=move || if broken.get() { "none" } else { "" }
            on:error=move |_| set_broken.set(true)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_before_hydration() {
        // error fired during HTML parse: complete with no pixels
        assert!(load_failed(true, 0));
    }

    #[test]
    fn test_load_pending_or_ok() {
        assert!(!load_failed(false, 0));
        assert!(!load_failed(true, 64));
    }
}
