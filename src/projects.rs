use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
static PROJECTS: LazyLock<Result<Vec<Project>, ProjectError>> = LazyLock::new(load_projects);

#[derive(Embed)]
#[folder = "content/projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct ProjectAssets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    repository: String,
    image: String,
    order: u32,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub repository: String,
    pub image: String,
    pub order: u32,
    pub tags: Vec<String>,
    pub summary_html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project file {0} not found")]
    NotFound(String),
    #[error("Project file {0} is not valid UTF-8")]
    Encoding(String),
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
}

/// All embedded projects, ordered by their `order` key. Parsed once per process.
#[cfg(feature = "ssr")]
pub fn get_projects() -> Result<Vec<Project>, ProjectError> {
    PROJECTS.clone()
}

#[cfg(feature = "ssr")]
fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let mut projects = ProjectAssets::iter()
        .map(|path| {
            let file = ProjectAssets::get(&path)
                .ok_or_else(|| ProjectError::NotFound(path.to_string()))?;
            let content = String::from_utf8(file.data.into_owned())
                .map_err(|_| ProjectError::Encoding(path.to_string()))?;
            parse_project(&path, &content)
        })
        .collect::<Result<Vec<_>, _>>()?;
    projects.sort_by_key(|p| p.order);
    Ok(projects)
}

#[cfg(feature = "ssr")]
fn parse_project(path: &str, content: &str) -> Result<Project, ProjectError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::FrontMatter(path.to_string()))?;

    let mut summary_html = String::new();
    let parser = Parser::new_ext(&parsed.content, Options::all());
    pulldown_cmark::html::push_html(&mut summary_html, parser);

    let fm = parsed.data;
    Ok(Project {
        slug: path.trim_end_matches(".md").to_string(),
        title: fm.title,
        repository: fm.repository,
        image: fm.image,
        order: fm.order,
        tags: fm.tags,
        summary_html,
    })
}
