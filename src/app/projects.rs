use leptos::prelude::*;
use server_fn::codec::GetUrl;

use super::reveal::Reveal;
#[cfg(feature = "ssr")]
use crate::projects::get_projects;
use crate::{nav::Section, projects::Project};

#[server(input = GetUrl)]
pub async fn get_projects_server() -> Result<Vec<Project>, ServerFnError> {
    get_projects().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Projects() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async move {
            get_projects_server().await.unwrap_or_else(|e| {
                log::error!("Couldn't load projects: {e}");
                Vec::new()
            })
        },
    );

    view! {
        <section id=Section::Projects.id() class="relative py-24 px-4 sm:px-6 overflow-hidden glow-bg">
            <div class="relative z-10 max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-5xl sm:text-6xl font-extrabold tracking-tight text-gradient pb-3">
                        "Projects"
                    </h2>
                    <div class="h-1 w-24 bg-gradient-to-r from-sky-400 to-emerald-400 mx-auto mt-4" />
                    <p class="text-gray-400 mt-4 text-lg max-w-2xl mx-auto">
                        "Things I have designed and built."
                    </p>
                </Reveal>
                <Transition fallback=move || {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                            <div class="loading-skeleton h-96 rounded-2xl"></div>
                            <div class="loading-skeleton h-96 rounded-2xl"></div>
                            <div class="loading-skeleton h-96 rounded-2xl"></div>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        let projects = projects.await;
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {projects
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, project)| {
                                        view! {
                                            <Reveal delay_ms={(i as u32) * 150}>
                                                <ProjectCard project=project />
                                            </Reveal>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}
                </Transition>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="group h-full flex flex-col rounded-2xl overflow-hidden border border-white/10 bg-white/5 backdrop-blur-sm transition-all duration-500 hover:-translate-y-2 hover:shadow-[0_20px_65px_rgba(56,189,248,0.18)]">
            <div class="overflow-hidden">
                <img
                    src=project.image
                    alt=project.title.clone()
                    class="w-full h-48 object-cover transition-transform duration-700 group-hover:scale-110"
                    loading="lazy"
                />
            </div>
            <div class="flex flex-col flex-grow p-6">
                <h3 class="text-2xl font-bold mb-3">{project.title}</h3>
                <div class="prose prose-invert prose-sm text-gray-400 flex-grow" inner_html=project.summary_html></div>
                <div class="flex flex-wrap gap-2 mt-4">
                    {project
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="bg-sky-400/10 text-sky-300 px-2 py-1 rounded text-xs">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=project.repository
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-6 inline-flex items-center gap-2 text-white hover:text-sky-400 transition-colors duration-300"
                >
                    <i class="devicon-github-original text-xl"></i>
                    "View on GitHub"
                </a>
            </div>
        </article>
    }
}
