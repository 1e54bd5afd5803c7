use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{content::SKILLS, nav::Section};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section
            id=Section::Skills.id()
            class="relative py-24 overflow-hidden flex flex-col items-center justify-center glow-bg"
        >
            <Reveal class="relative z-10 text-center mb-12">
                <h2 class="text-5xl sm:text-6xl font-extrabold tracking-tight text-gradient pb-3">
                    "Skills & Technologies"
                </h2>
                <div class="h-1 w-24 bg-gradient-to-r from-sky-400 to-emerald-400 mx-auto mt-4" />
                <p class="text-gray-400 mt-4 text-lg max-w-2xl mx-auto pt-8">
                    "A modern stack that merges creativity and performance."
                </p>
            </Reveal>
            <div class="relative z-10 grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6 max-w-6xl mx-auto px-6">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <Reveal delay_ms={(i as u32) * 40}>
                                <div class="skill-card group relative rounded-2xl p-6 flex flex-col items-center justify-center text-center border border-white/10 bg-white/5 backdrop-blur-sm hover:scale-105 transition-transform duration-500">
                                    <div class="absolute -inset-[1px] rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-700 bg-gradient-to-r from-sky-400/30 to-emerald-400/30 blur-xl"></div>
                                    <i
                                        class=format!(
                                            "{} text-5xl mb-4 z-10 transition-transform duration-700 group-hover:scale-125 group-hover:rotate-6",
                                            skill.icon,
                                        )
                                        style=format!("color: {}", skill.color)
                                    ></i>
                                    <p class="font-semibold text-gray-300 group-hover:text-white transition-colors duration-500 z-10">
                                        {skill.name}
                                    </p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
