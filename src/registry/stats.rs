use super::{Category, ProjectRegistry, Technologies};

/// Aggregate numbers shown by `stats`, `skills` and `achievements`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortfolioStats {
    pub total_projects: usize,
    pub total_stars: u32,
    pub total_forks: u32,
    pub tui_projects: usize,
    pub web_projects: usize,
    pub tool_projects: usize,
    pub technologies: Technologies,
    pub achievements: Vec<String>,
}

impl PortfolioStats {
    pub fn collect(registry: &ProjectRegistry) -> Self {
        let mut total_stars = 0u32;
        let mut total_forks = 0u32;
        for stats in registry.projects.iter().filter_map(|p| p.stats.as_ref()) {
            total_stars = total_stars.saturating_add(stats.stars.unwrap_or(0));
            total_forks = total_forks.saturating_add(stats.forks.unwrap_or(0));
        }

        Self {
            total_projects: registry.projects.len(),
            total_stars,
            total_forks,
            tui_projects: registry.by_category(Category::Tui).count(),
            web_projects: registry.by_category(Category::Web).count(),
            tool_projects: registry.by_category(Category::Tool).count(),
            technologies: registry.technologies.clone(),
            achievements: registry.achievements.clone(),
        }
    }

    pub fn technology_count(&self) -> usize {
        self.technologies.languages.len()
            + self.technologies.tui_frameworks.len()
            + self.technologies.web_frameworks.len()
            + self.technologies.terminal_tools.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_builtin_projects() {
        let registry = ProjectRegistry::builtin().unwrap();
        let stats = registry.stats();
        assert_eq!(stats.total_stars, 1280 + 640 + 310 + 95 + 120);
        assert_eq!(stats.total_forks, 64 + 38 + 21 + 7 + 9);
        assert_eq!(
            stats.tui_projects + stats.web_projects + stats.tool_projects,
            stats.total_projects
        );
    }

    #[test]
    fn missing_stats_count_as_zero() {
        let mut registry = ProjectRegistry::builtin().unwrap();
        for project in &mut registry.projects {
            project.stats = None;
        }
        let stats = registry.stats();
        assert_eq!(stats.total_stars, 0);
        assert_eq!(stats.total_forks, 0);
    }
}
