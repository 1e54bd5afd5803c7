use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades and lifts its children in while they are in the viewport.
///
/// Replays every time the element scrolls back into view. `delay_ms` staggers
/// items in a grid.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if visible.get() { "reveal reveal-in" } else { "reveal" };
                format!("{state} {class}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
