//! Project selection.
//!
//! Decides which upstream repositories appear on the portfolio page.

pub mod filter;

pub use filter::{filter_projects, ExclusionRule, NameListRule, ProjectFilter, SiteRepositoryRule};
