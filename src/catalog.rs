// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project list and dashboard queries.
//!
//! Read-only views over a project slice: search, ordering and summary
//! counts. Nothing here mutates the store.

use crate::models::{CtaType, Project};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Ordering for the project list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Name, A to Z, ignoring case.
    Name,
    /// Newest creation first.
    Created,
    /// Most recently modified first.
    #[default]
    Updated,
}

impl FromStr for SortBy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortBy::Name),
            "created" => Ok(SortBy::Created),
            "updated" => Ok(SortBy::Updated),
            other => anyhow::bail!("unknown sort order: {}", other),
        }
    }
}

/// Projects whose name or description contains `term`, ignoring case.
pub fn filter_projects<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let needle = term.to_lowercase();
    projects
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort a project list in place. The sort is stable.
pub fn sort_projects(projects: &mut [&Project], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => projects.sort_by_key(|p| p.name.to_lowercase()),
        SortBy::Created => projects.sort_by(|a, b| b.created.cmp(&a.created)),
        SortBy::Updated => projects.sort_by(|a, b| b.updated.cmp(&a.updated)),
    }
}

/// Summary figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats<'a> {
    pub total_projects: usize,
    pub total_ctas: usize,
    pub cta_types: BTreeMap<CtaType, usize>,
    pub recent_projects: Vec<&'a Project>,
}

impl<'a> DashboardStats<'a> {
    pub fn compute(projects: &'a [Project], recent_limit: usize) -> Self {
        let mut cta_types = BTreeMap::new();
        for cta in projects.iter().flat_map(|p| &p.ctas) {
            *cta_types.entry(cta.cta_type).or_insert(0) += 1;
        }

        let mut recent_projects: Vec<&Project> = projects.iter().collect();
        sort_projects(&mut recent_projects, SortBy::Updated);
        recent_projects.truncate(recent_limit);

        Self {
            total_projects: projects.len(),
            total_ctas: projects.iter().map(|p| p.ctas.len()).sum(),
            cta_types,
            recent_projects,
        }
    }

    pub fn count(&self, cta_type: CtaType) -> usize {
        self.cta_types.get(&cta_type).copied().unwrap_or(0)
    }
}
