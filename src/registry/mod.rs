use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, TermfolioError};

mod stats;

pub use stats::PortfolioStats;

const BUILTIN_DATA: &str = include_str!("../../data/portfolio.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tui,
    Web,
    Tool,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Tui => "TUI",
            Category::Web => "Web",
            Category::Tool => "Tool",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub stars: Option<u32>,
    pub forks: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub stats: Option<ProjectStats>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub category: Category,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn stars(&self) -> Option<u32> {
        self.stats.as_ref().and_then(|s| s.stars)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub handle: String,
    pub role: String,
    pub location: String,
    pub bio: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub links: Vec<Link>,
    pub resume_url: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Technologies {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tui_frameworks: Vec<String>,
    #[serde(default)]
    pub web_frameworks: Vec<String>,
    #[serde(default)]
    pub terminal_tools: Vec<String>,
}

/// Read-only portfolio data the interpreter answers from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProjectRegistry {
    pub profile: Profile,
    #[serde(default)]
    pub technologies: Technologies,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub projects: Vec<Project>,
}

impl ProjectRegistry {
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DATA)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let registry: Self = serde_json::from_str(data)?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TermfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&contents)?;
        tracing::info!(
            "loaded {} projects from {}",
            registry.projects.len(),
            path.display()
        );
        Ok(registry)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(TermfolioError::RegistryInvalid(format!(
                    "project {:?} has an empty id",
                    project.name
                )));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(TermfolioError::RegistryInvalid(format!(
                    "duplicate project id {:?}",
                    project.id
                )));
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.category == category)
    }

    pub fn tui(&self) -> impl Iterator<Item = &Project> {
        self.by_category(Category::Tui)
    }

    pub fn web(&self) -> impl Iterator<Item = &Project> {
        self.by_category(Category::Web)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::collect(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_loads() {
        let registry = ProjectRegistry::builtin().unwrap();
        assert!(!registry.projects().is_empty());
        assert!(registry.featured().count() > 0);
        assert!(registry.tui().all(|p| p.category == Category::Tui));
        assert!(registry.web().all(|p| p.category == Category::Web));
    }

    #[test]
    fn find_by_id() {
        let registry = ProjectRegistry::builtin().unwrap();
        let first = &registry.projects()[0];
        assert_eq!(registry.find(&first.id), Some(first));
        assert_eq!(registry.find("no-such-project"), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut registry = ProjectRegistry::builtin().unwrap();
        let dup = registry.projects[0].clone();
        registry.projects.push(dup);
        let data = serde_json::to_string(&registry).unwrap();
        assert!(matches!(
            ProjectRegistry::from_json(&data),
            Err(TermfolioError::RegistryInvalid(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, BUILTIN_DATA).unwrap();
        let registry = ProjectRegistry::from_path(&path).unwrap();
        assert_eq!(registry.ids(), ProjectRegistry::builtin().unwrap().ids());
    }
}
