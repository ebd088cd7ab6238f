use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{LoepError, LoepResult};

/// One portfolio entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub blurb: String,
    /// Image reference as published by the site; never fetched.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl ProjectMeta {
    fn new(slug: &str, title: &str, blurb: &str, image: &str, tech: &[&str]) -> Self {
        Self {
            slug: slug.to_owned(),
            title: title.to_owned(),
            blurb: blurb.to_owned(),
            image: image.to_owned(),
            repo: None,
            live: None,
            tech: tech.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// Ordered, validated list of projects.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<ProjectMeta>,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProjectCatalog {
    /// The projects shown on the site.
    pub fn builtin() -> Self {
        Self {
            projects: vec![
                ProjectMeta::new(
                    "placeholder-1",
                    "Library of Knowledge",
                    "Get smarter",
                    "Library.jpg",
                    &["React", "TypeScript"],
                ),
                ProjectMeta::new(
                    "placeholder-2",
                    "The Space Journey",
                    "Journey throughout Space",
                    "Space.jpg",
                    &["React", "Canvas"],
                ),
                ProjectMeta::new(
                    "placeholder-3",
                    "What's for dinner",
                    "Having trouble knowing what to cook?",
                    "Food1.jpg",
                    &["Vite", "Tailwind"],
                ),
            ],
        }
    }

    pub fn new(projects: Vec<ProjectMeta>) -> LoepResult<Self> {
        let catalog = Self { projects };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a JSON array of projects and validates it.
    pub fn from_reader<R: std::io::Read>(r: R) -> LoepResult<Self> {
        let projects: Vec<ProjectMeta> = serde_json::from_reader(r)
            .map_err(|e| LoepError::validation(format!("parse projects JSON: {e}")))?;
        Self::new(projects)
    }

    pub fn from_path(path: impl AsRef<Path>) -> LoepResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LoepError::validation(format!("open projects JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> LoepResult<()> {
        let mut seen = HashSet::with_capacity(self.projects.len());
        for (i, p) in self.projects.iter().enumerate() {
            if p.slug.trim().is_empty() {
                return Err(LoepError::validation(format!("project {i}: slug must be non-empty")));
            }
            if p.title.trim().is_empty() {
                return Err(LoepError::validation(format!(
                    "project '{}': title must be non-empty",
                    p.slug
                )));
            }
            if !seen.insert(p.slug.as_str()) {
                return Err(LoepError::validation(format!(
                    "duplicate project slug '{}'",
                    p.slug
                )));
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[ProjectMeta] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&ProjectMeta> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn to_json_pretty(&self) -> LoepResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/projects.rs"]
mod tests;
