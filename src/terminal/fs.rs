use crate::registry::{Category, Project, ProjectRegistry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsNode {
    File { content: String },
    Directory { children: Vec<FsEntry> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FsEntry {
    pub name: String,
    pub node: FsNode,
}

impl FsEntry {
    fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            node: FsNode::File {
                content: content.into(),
            },
        }
    }

    fn dir(name: impl Into<String>, children: Vec<FsEntry>) -> Self {
        Self {
            name: name.into(),
            node: FsNode::Directory { children },
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.node, FsNode::Directory { .. })
    }

    /// Name as `ls` shows it, directories with a trailing slash.
    pub fn display_name(&self) -> String {
        if self.is_dir() {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// The pretend home directory. Built once per session and never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSystem {
    root: Vec<FsEntry>,
}

impl FileSystem {
    pub fn from_registry(registry: &ProjectRegistry) -> Self {
        let profile = &registry.profile;
        let stats = registry.stats();

        let readme = format!(
            "# {}\n{}\n\nType `help` to see what this terminal can do.",
            profile.name, profile.role
        );
        let about = profile.bio.join("\n");
        let mut contact = format!("email: {}", profile.email);
        for link in &profile.links {
            contact.push_str(&format!("\n{}: {}", link.label.to_lowercase(), link.url));
        }
        let skills = format!(
            "languages: {}\ntui: {}\nweb: {}\ntools: {}",
            stats.technologies.languages.join(", "),
            stats.technologies.tui_frameworks.join(", "),
            stats.technologies.web_frameworks.join(", "),
            stats.technologies.terminal_tools.join(", "),
        );
        let stats_txt = format!(
            "projects: {}\nstars: {}\nforks: {}\ntui: {}\nweb: {}\ntools: {}",
            stats.total_projects,
            stats.total_stars,
            stats.total_forks,
            stats.tui_projects,
            stats.web_projects,
            stats.tool_projects,
        );
        let featured = registry
            .featured()
            .map(|p| format!("{} - {}", p.name, p.tagline))
            .collect::<Vec<_>>()
            .join("\n");

        let mut projects = vec![FsEntry::file("featured.txt", featured)];
        for (dir, category) in [
            ("tui", Category::Tui),
            ("web", Category::Web),
            ("tools", Category::Tool),
        ] {
            let children: Vec<FsEntry> = registry
                .by_category(category)
                .map(|p| FsEntry::file(format!("{}.md", p.id), project_markdown(p)))
                .collect();
            if !children.is_empty() {
                projects.push(FsEntry::dir(dir, children));
            }
        }

        Self {
            root: vec![
                FsEntry::file("README.md", readme),
                FsEntry::file("about.txt", about),
                FsEntry::file("contact.txt", contact),
                FsEntry::file("skills.txt", skills),
                FsEntry::file("stats.txt", stats_txt),
                FsEntry::dir("projects", projects),
            ],
        }
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.root
    }

    /// Exact match against top-level names only. `projects/featured.txt`
    /// does not resolve even though `tree` shows it.
    pub fn get(&self, name: &str) -> Option<&FsEntry> {
        self.root.iter().find(|e| e.name == name)
    }

    /// Lines for `tree`, root first.
    pub fn tree_lines(&self) -> Vec<String> {
        let mut lines = vec![".".to_string()];
        walk(&self.root, "", &mut lines);
        lines
    }

    pub fn counts(&self) -> (usize, usize) {
        fn count(entries: &[FsEntry], dirs: &mut usize, files: &mut usize) {
            for entry in entries {
                match &entry.node {
                    FsNode::File { .. } => *files += 1,
                    FsNode::Directory { children } => {
                        *dirs += 1;
                        count(children, dirs, files);
                    }
                }
            }
        }
        let (mut dirs, mut files) = (0, 0);
        count(&self.root, &mut dirs, &mut files);
        (dirs, files)
    }
}

fn walk(entries: &[FsEntry], indent: &str, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        let branch = if last { "└── " } else { "├── " };
        lines.push(format!("{indent}{branch}{}", entry.display_name()));
        if let FsNode::Directory { children } = &entry.node {
            let next = format!("{indent}{}", if last { "    " } else { "│   " });
            walk(children, &next, lines);
        }
    }
}

fn project_markdown(project: &Project) -> String {
    let mut out = format!(
        "# {}\n{}\n\n{}\n\nstack: {}",
        project.name,
        project.tagline,
        project.description,
        project.tech_stack.join(", ")
    );
    for link in &project.links {
        out.push_str(&format!("\n{}: {}", link.label, link.url));
    }
    out
}
