use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    content::{Certification, CERTIFICATIONS},
    nav::Section,
};

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section
            id=Section::Certifications.id()
            class="relative min-h-screen overflow-hidden py-24 px-4 sm:px-6 glow-bg"
        >
            <div class="relative z-10 max-w-7xl mx-auto flex flex-col gap-12">
                <Reveal class="text-center">
                    <h2 class="text-5xl sm:text-6xl font-extrabold tracking-tight text-gradient pb-3">
                        "Certifications"
                    </h2>
                    <div class="h-1 w-24 bg-gradient-to-r from-sky-400 to-emerald-400 mx-auto mt-4" />
                    <p class="text-gray-400 mt-4 text-lg max-w-2xl mx-auto">
                        "Credentials earned along the way."
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, cert)| {
                            view! {
                                <Reveal delay_ms={(i as u32) * 120}>
                                    <CertificationCard cert=*cert />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    view! {
        <a
            href=cert.link
            target="_blank"
            rel="noopener noreferrer"
            class="group block h-full rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur-sm transition-all duration-500 hover:-translate-y-1 hover:border-sky-400/40"
        >
            <img
                src=cert.badge
                alt=format!("{} badge", cert.issuer)
                class="h-24 w-24 object-contain mx-auto mb-6 transition-transform duration-500 group-hover:scale-110"
                loading="lazy"
            />
            <h3 class="text-lg font-bold text-white mb-2">{cert.title}</h3>
            <p class="text-sky-400 font-medium">{cert.issuer}</p>
            <p class="text-gray-500 text-sm mt-1">{cert.issued}</p>
            {cert
                .credential_id
                .map(|id| {
                    view! {
                        <p class="text-gray-500 text-xs mt-2 font-mono">"Credential ID " {id}</p>
                    }
                })}
            <span class="inline-block mt-4 text-sm text-emerald-400 group-hover:underline">
                "Show credential ↗"
            </span>
        </a>
    }
}
