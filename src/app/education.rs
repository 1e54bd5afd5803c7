use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{content::EDUCATION, nav::Section};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="relative py-24 px-4 sm:px-6 overflow-hidden">
            <div class="relative z-10 max-w-4xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-5xl sm:text-6xl font-extrabold tracking-tight text-gradient pb-3">
                        "Education"
                    </h2>
                    <div class="h-1 w-24 bg-gradient-to-r from-sky-400 to-emerald-400 mx-auto mt-4" />
                </Reveal>
                <ol class="relative border-l border-white/10 ml-4">
                    {EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            view! {
                                <li class="mb-12 ml-8">
                                    <span class="absolute -left-2 mt-2 h-4 w-4 rounded-full bg-gradient-to-br from-sky-400 to-emerald-400"></span>
                                    <Reveal delay_ms={(i as u32) * 150}>
                                        <p class="text-sm text-cyan-400 font-semibold">{entry.period}</p>
                                        <h3 class="text-2xl font-bold mt-1">{entry.qualification}</h3>
                                        <p class="text-gray-300 mt-1">{entry.institution}</p>
                                        <p class="text-gray-500 mt-3 leading-relaxed">{entry.details}</p>
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
