//! Project list filtering.
//!
//! # Responsibilities
//! - Hide the portfolio site's own repository (`<owner>.github.io`)
//! - Hide any extra names listed in configuration
//! - Keep every other record, in upstream order
//!
//! # Design Decisions
//! - Names are compared exactly (case-sensitive)
//! - A record is dropped as soon as one rule excludes it

use crate::config::ProjectsConfig;
use crate::upstream::RepositoryRecord;

/// A rule deciding whether a repository is hidden from the listing.
pub trait ExclusionRule: Send + Sync + std::fmt::Debug {
    /// Returns true if the repository must not be listed.
    fn excludes(&self, repo: &RepositoryRecord) -> bool;
}

/// Excludes the GitHub Pages repository that hosts the portfolio itself.
#[derive(Debug, Clone)]
pub struct SiteRepositoryRule {
    site_name: String,
}

impl SiteRepositoryRule {
    pub fn new(owner: &str) -> Self {
        Self {
            site_name: format!("{}.github.io", owner),
        }
    }
}

impl ExclusionRule for SiteRepositoryRule {
    fn excludes(&self, repo: &RepositoryRecord) -> bool {
        repo.name == self.site_name
    }
}

/// Excludes repositories whose name is in a fixed list.
#[derive(Debug, Clone)]
pub struct NameListRule {
    names: Vec<String>,
}

impl NameListRule {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl ExclusionRule for NameListRule {
    fn excludes(&self, repo: &RepositoryRecord) -> bool {
        self.names.iter().any(|name| *name == repo.name)
    }
}

/// Ordered set of exclusion rules applied to a decoded listing.
#[derive(Debug)]
pub struct ProjectFilter {
    rules: Vec<Box<dyn ExclusionRule>>,
}

impl ProjectFilter {
    pub fn new(rules: Vec<Box<dyn ExclusionRule>>) -> Self {
        Self { rules }
    }

    /// Site-repository rule for `owner`, plus the configured name list.
    pub fn from_config(owner: &str, config: &ProjectsConfig) -> Self {
        let mut rules: Vec<Box<dyn ExclusionRule>> = vec![Box::new(SiteRepositoryRule::new(owner))];
        if !config.excluded_names.is_empty() {
            rules.push(Box::new(NameListRule::new(config.excluded_names.clone())));
        }
        Self::new(rules)
    }

    pub fn apply(&self, repos: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
        repos
            .into_iter()
            .filter(|repo| !self.rules.iter().any(|rule| rule.excludes(repo)))
            .collect()
    }
}

/// Drop `<owner>.github.io` from `repos`, keeping order.
pub fn filter_projects(owner: &str, repos: Vec<RepositoryRecord>) -> Vec<RepositoryRecord> {
    ProjectFilter::from_config(owner, &ProjectsConfig::default()).apply(repos)
}
