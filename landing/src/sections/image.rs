use leptos::prelude::*;

/// Remote image that swaps to `children` when it fails to load.
///
/// Logos and the founder photo are hot-linked; a broken link shows the
/// fallback instead of the browser's broken-image glyph.
#[component]
pub fn ImageWithFallback(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    class: &'static str,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=move || children.as_ref().map(|fallback| fallback())
        >
            <img
                src=src.clone()
                alt=alt.clone()
                class=class
                on:error=move |_| set_failed.set(true)
            />
        </Show>
    }
}
