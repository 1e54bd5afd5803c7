use leptos::{either::Either, ev, prelude::*};
use leptos_use::use_window_scroll;

use crate::{
    content::INITIALS,
    nav::{NavState, Section},
};

#[component]
pub fn Header() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    // use_window_scroll owns the listener and drops it with this component
    let (_, scroll_y) = use_window_scroll();

    Effect::new(move |_| {
        let offset = scroll_y.get();
        nav.maybe_update(|n| n.on_scroll(offset));
    });

    let scrolled = Memo::new(move |_| nav.with(NavState::scrolled));
    let menu_open = Memo::new(move |_| nav.with(NavState::menu_open));
    let close_menu = move || nav.maybe_update(NavState::close_menu);

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-500 bg-black/70 backdrop-blur-md border-b border-cyan-800/30 shadow-[0_0_30px_rgba(45,212,191,0.15)] py-3"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-500 bg-gradient-to-b from-black/70 to-transparent py-5"
            }
        }>
            <nav class="container mx-auto px-4 flex justify-between items-center">
                <a
                    href=Section::Profile.href()
                    class="text-2xl font-extrabold tracking-tight text-gradient"
                >
                    {INITIALS}
                </a>
                <ul class="hidden md:flex space-x-8 items-center">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <NavLink section=section on_select=|| () />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="md:hidden flex items-center">
                    <button
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        class="text-2xl"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <ul class="md:hidden flex flex-col items-center space-y-4 mt-4 pb-4 border-t border-gray-800 bg-black/80 backdrop-blur-md">
                                {Section::ALL
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <li class="pt-4">
                                                <NavLink
                                                    section=section
                                                    on_select=move || {
                                                        close_menu();
                                                    }
                                                />
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
        </header>
    }
}

#[component]
fn NavLink<F>(section: Section, on_select: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let on_click = move |_: ev::MouseEvent| on_select();
    if section.is_call_to_action() {
        Either::Left(view! {
            <a
                href=section.href()
                on:click=on_click
                class="btn-outline-gradient px-6 py-2 rounded-full font-bold transition-all duration-500 hover:scale-105"
            >
                {section.label()}
            </a>
        })
    } else {
        Either::Right(view! {
            <a
                href=section.href()
                on:click=on_click
                class="font-semibold text-gray-300 hover:text-white transition-colors duration-300 relative group"
            >
                {section.label()}
                <span class="absolute left-0 bottom-0 w-0 h-[2px] bg-gradient-to-r from-sky-400 to-emerald-400 transition-all duration-300 group-hover:w-full"></span>
            </a>
        })
    }
}
