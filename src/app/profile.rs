use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{OWNER, ROLE, SOCIAL_LINKS, SUMMARY},
    nav::Section,
};

#[component]
pub fn Profile() -> impl IntoView {
    view! {
        <section
            id=Section::Profile.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden px-4 pt-24 glow-bg"
        >
            <div class="absolute inset-x-0 top-1/3 marquee opacity-5 text-8xl font-extrabold whitespace-nowrap select-none">
                {format!("{OWNER} · {OWNER} · {OWNER} · ")}
            </div>
            <div class="relative z-10 max-w-4xl mx-auto text-center">
                <Reveal>
                    <p class="text-cyan-400 font-semibold tracking-widest uppercase mb-4">
                        "Hello, I'm"
                    </p>
                    <h1 class="text-5xl sm:text-7xl font-extrabold tracking-tight text-gradient pb-3">
                        {OWNER}
                    </h1>
                    <h2 class="text-xl sm:text-2xl text-gray-300 mt-4">{ROLE}</h2>
                </Reveal>
                <Reveal delay_ms=150>
                    <p class="text-gray-400 mt-6 text-lg leading-relaxed max-w-2xl mx-auto">
                        {SUMMARY}
                    </p>
                </Reveal>
                <Reveal delay_ms=300 class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-10">
                    <a
                        href=Section::Projects.href()
                        class="btn-outline-gradient px-8 py-3 rounded-full font-bold transition-all duration-500 hover:scale-105"
                    >
                        "View Projects"
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-8 py-3 rounded-full font-bold border border-white/20 hover:border-cyan-400 transition-colors duration-300"
                    >
                        "Get In Touch"
                    </a>
                    <div class="flex gap-3">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-400 hover:text-white text-2xl transition-colors duration-300"
                                        aria-label=link.label
                                    >
                                        <i class=link.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
