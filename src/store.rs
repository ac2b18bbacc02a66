// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project store.
//!
//! The store owns every project and, through them, every CTA. All mutation
//! goes through it so that `updated` stamps and the current-project
//! selection stay consistent.
//!
//! Unknown ids are never an error: each mutator returns whether it applied,
//! and a `false` result guarantees the project list is untouched.

use crate::clock::{Clock, SystemClock};
use crate::models::{
    duplicate_cta_id, Cta, CtaDraft, CtaId, CtaPatch, Project, ProjectDraft, ProjectId,
    ProjectPatch,
};

/// Owned, single-threaded state container for projects and their CTAs.
#[derive(Debug, Clone)]
pub struct ProjectStore<C: Clock = SystemClock> {
    projects: Vec<Project>,
    /// Selected project id. Resolved against `projects` on every read.
    current: Option<ProjectId>,
    clock: C,
}

impl Default for ProjectStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore<SystemClock> {
    /// Create an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a store seeded with existing projects.
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let mut store = Self::new();
        store.import_projects(projects);
        store
    }
}

impl<C: Clock> ProjectStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            projects: Vec::new(),
            current: None,
            clock,
        }
    }

    /// All projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project(&self, project_id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == project_id)
    }

    pub fn cta(&self, project_id: &ProjectId, cta_id: &CtaId) -> Option<&Cta> {
        self.project(project_id).and_then(|p| p.cta(cta_id))
    }

    /// Append existing projects, skipping any whose id is already present.
    ///
    /// Each project is normalized on the way in, so snapshots edited by hand
    /// cannot carry `updated < created` or repeated CTA ids into the store.
    /// Returns how many were added.
    pub fn import_projects(&mut self, projects: impl IntoIterator<Item = Project>) -> usize {
        let mut added = 0;
        for mut project in projects {
            if self.project(&project.id).is_some() {
                log::warn!("Skipping project with duplicate id {}", project.id);
                continue;
            }
            let dropped = project.normalize();
            if dropped > 0 {
                log::warn!(
                    "Dropped {} CTAs with repeated ids from project {}",
                    dropped,
                    project.id
                );
            }
            self.projects.push(project);
            added += 1;
        }
        log::info!("Imported {} projects, total: {}", added, self.projects.len());
        added
    }

    /// Select a project by id. An unknown id clears the selection.
    pub fn set_current_project(&mut self, project_id: &ProjectId) -> bool {
        if self.project(project_id).is_some() {
            self.current = Some(project_id.clone());
            true
        } else {
            log::debug!("No project {} to select, clearing selection", project_id);
            self.current = None;
            false
        }
    }

    /// The selected project, looked up fresh so it never shows stale data.
    pub fn current_project(&self) -> Option<&Project> {
        self.current.as_ref().and_then(|id| self.project(id))
    }

    pub fn current_project_id(&self) -> Option<&ProjectId> {
        self.current_project().map(|p| &p.id)
    }

    /// Drop a selection whose project no longer exists.
    pub fn refresh_current(&mut self) {
        let dangling = self
            .current
            .as_ref()
            .is_some_and(|id| self.project(id).is_none());
        if dangling {
            log::debug!("Selected project is gone, clearing selection");
            self.current = None;
        }
    }

    /// Create an empty project from form input and select it.
    pub fn create_project(&mut self, draft: ProjectDraft) -> ProjectId {
        let mut id = ProjectId::generate();
        while self.project(&id).is_some() {
            id = ProjectId::generate();
        }

        let project = Project::new(id.clone(), draft, self.clock.now());
        log::info!("Created project {} ({})", project.name, id);

        self.projects.push(project);
        self.current = Some(id.clone());
        id
    }

    /// Shallow-merge `patch` into a project and refresh its `updated` stamp.
    ///
    /// A replacement CTA list that repeats an id is rejected as a no-op.
    pub fn update_project(&mut self, project_id: &ProjectId, patch: ProjectPatch) -> bool {
        if let Some(id) = patch.ctas.as_deref().and_then(duplicate_cta_id) {
            log::warn!("update_project: CTA id {} repeated in replacement list", id);
            return false;
        }
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == project_id) else {
            log::debug!("update_project: no project {}", project_id);
            return false;
        };

        project.apply(patch);
        project.touch(self.clock.now());
        log::info!("Updated project {}", project_id);
        true
    }

    /// Remove a project and, transitively, its CTAs.
    pub fn delete_project(&mut self, project_id: &ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| &p.id != project_id);

        if self.projects.len() == before {
            log::debug!("delete_project: no project {}", project_id);
            return false;
        }

        self.refresh_current();
        log::info!("Deleted project {}, total: {}", project_id, self.projects.len());
        true
    }

    /// Append a CTA to a project. Returns `None` when the project does not exist.
    pub fn add_cta(&mut self, project_id: &ProjectId, draft: CtaDraft) -> Option<CtaId> {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == project_id) else {
            log::debug!("add_cta: no project {}", project_id);
            return None;
        };

        let mut id = CtaId::generate();
        while project.cta(&id).is_some() {
            id = CtaId::generate();
        }

        project.ctas.push(Cta::from_draft(id.clone(), draft));
        project.touch(self.clock.now());
        log::info!(
            "Added CTA {} to project {}, total: {}",
            id,
            project_id,
            project.ctas.len()
        );
        Some(id)
    }

    /// Shallow-merge `patch` into one CTA and refresh its project's `updated` stamp.
    pub fn update_cta(&mut self, project_id: &ProjectId, cta_id: &CtaId, patch: CtaPatch) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == project_id) else {
            log::debug!("update_cta: no project {}", project_id);
            return false;
        };
        let Some(cta) = project.cta_mut(cta_id) else {
            log::debug!("update_cta: no CTA {} in project {}", cta_id, project_id);
            return false;
        };

        cta.apply(patch);
        project.touch(self.clock.now());
        log::info!("Updated CTA {} in project {}", cta_id, project_id);
        true
    }

    /// Remove one CTA from a project.
    pub fn delete_cta(&mut self, project_id: &ProjectId, cta_id: &CtaId) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| &p.id == project_id) else {
            log::debug!("delete_cta: no project {}", project_id);
            return false;
        };

        let before = project.ctas.len();
        project.ctas.retain(|c| &c.id != cta_id);
        if project.ctas.len() == before {
            log::debug!("delete_cta: no CTA {} in project {}", cta_id, project_id);
            return false;
        }

        project.touch(self.clock.now());
        log::info!(
            "Deleted CTA {} from project {}, total: {}",
            cta_id,
            project_id,
            project.ctas.len()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use crate::models::{Animation, CtaType, Position};
    use chrono::{Duration, TimeZone, Utc};

    fn store() -> ProjectStore<SteppingClock> {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        ProjectStore::with_clock(SteppingClock::new(start, Duration::seconds(1)))
    }

    fn draft() -> ProjectDraft {
        ProjectDraft::new("A", "B", "u", "t")
    }

    fn cta_draft(start: f64, end: f64) -> CtaDraft {
        CtaDraft {
            cta_type: CtaType::Banner,
            text: "Shop".to_string(),
            position: Position::new(20.0, 80.0),
            animation: Animation::Slide,
            link: "https://example.com".to_string(),
            start_time: start,
            end_time: end,
            ..Default::default()
        }
    }

    fn missing() -> ProjectId {
        ProjectId::from("missing")
    }

    #[test]
    fn test_create_project_appends_and_selects() {
        let mut s = store();
        let id = s.create_project(draft());

        assert_eq!(s.len(), 1);
        let p = s.project(&id).unwrap();
        assert!(p.ctas.is_empty());
        assert_eq!(p.created, p.updated);
        assert_eq!(p.name, "A");
        assert_eq!(s.current_project_id(), Some(&id));
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut s = store();
        let a = s.create_project(draft());
        let b = s.create_project(draft());
        assert_ne!(a, b);
        assert_eq!(s.current_project_id(), Some(&b));
    }

    #[test]
    fn test_set_current_project_unknown_clears() {
        let mut s = store();
        let id = s.create_project(draft());

        assert!(!s.set_current_project(&missing()));
        assert!(s.current_project().is_none());

        assert!(s.set_current_project(&id));
        assert_eq!(s.current_project().unwrap().id, id);
    }

    #[test]
    fn test_current_project_reflects_updates() {
        let mut s = store();
        let id = s.create_project(draft());

        s.update_project(&id, ProjectPatch::name("Renamed"));
        assert_eq!(s.current_project().unwrap().name, "Renamed");

        let cta = s.add_cta(&id, cta_draft(5.0, 15.0)).unwrap();
        assert_eq!(s.current_project().unwrap().ctas[0].id, cta);
    }

    #[test]
    fn test_update_project_refreshes_timestamp() {
        let mut s = store();
        let id = s.create_project(draft());
        let before = s.project(&id).unwrap().updated;

        assert!(s.update_project(&id, ProjectPatch::name("B")));
        let p = s.project(&id).unwrap();
        assert!(p.updated > before);
        assert_eq!(p.description, "B");
    }

    #[test]
    fn test_mutators_on_missing_project_leave_store_unchanged() {
        let mut s = store();
        let id = s.create_project(draft());
        s.add_cta(&id, cta_draft(5.0, 15.0)).unwrap();
        let snapshot = s.projects().to_vec();
        let cta = CtaId::from("nope");

        assert!(!s.update_project(&missing(), ProjectPatch::name("X")));
        assert!(!s.delete_project(&missing()));
        assert_eq!(s.add_cta(&missing(), cta_draft(0.0, 1.0)), None);
        assert!(!s.update_cta(&missing(), &cta, CtaPatch::text("X")));
        assert!(!s.delete_cta(&missing(), &cta));

        assert_eq!(s.projects(), snapshot.as_slice());
    }

    #[test]
    fn test_missing_cta_in_existing_project_is_noop() {
        let mut s = store();
        let id = s.create_project(draft());
        let snapshot = s.projects().to_vec();
        let cta = CtaId::from("nope");

        let updated = s.project(&id).unwrap().updated;

        assert!(!s.update_cta(&id, &cta, CtaPatch::text("X")));
        assert!(!s.delete_cta(&id, &cta));
        assert_eq!(s.projects(), snapshot.as_slice());
        assert_eq!(s.project(&id).unwrap().updated, updated);
    }

    #[test]
    fn test_add_then_update_cta() {
        let mut s = store();
        let pid = s.create_project(draft());
        let before = s.project(&pid).unwrap().updated;

        let cid = s.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();
        let original = s.cta(&pid, &cid).unwrap().clone();
        assert!(s.update_cta(&pid, &cid, CtaPatch::text("X")));

        let cta = s.cta(&pid, &cid).unwrap();
        assert_eq!(cta.text, "X");
        assert_eq!(cta.cta_type, original.cta_type);
        assert_eq!(cta.position, original.position);
        assert_eq!(cta.style, original.style);
        assert_eq!(cta.animation, original.animation);
        assert_eq!(cta.link, original.link);
        assert_eq!(cta.start_time, original.start_time);
        assert_eq!(cta.end_time, original.end_time);
        assert!(s.project(&pid).unwrap().updated > before);
    }

    #[test]
    fn test_ctas_keep_insertion_order() {
        let mut s = store();
        let pid = s.create_project(draft());
        let late = s.add_cta(&pid, cta_draft(40.0, 50.0)).unwrap();
        let early = s.add_cta(&pid, cta_draft(0.0, 5.0)).unwrap();

        let ids: Vec<_> = s.project(&pid).unwrap().ctas.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec![late, early]);
    }

    #[test]
    fn test_delete_cta_removes_once() {
        let mut s = store();
        let pid = s.create_project(draft());
        let a = s.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();
        s.add_cta(&pid, cta_draft(20.0, 30.0)).unwrap();
        let before = s.project(&pid).unwrap().updated;

        assert!(s.delete_cta(&pid, &a));
        let p = s.project(&pid).unwrap();
        assert_eq!(p.ctas.len(), 1);
        assert!(p.cta(&a).is_none());
        assert!(p.updated > before);

        let snapshot = s.projects().to_vec();
        assert!(!s.delete_cta(&pid, &a));
        assert_eq!(s.projects(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_current_project_clears_selection() {
        let mut s = store();
        let a = s.create_project(draft());
        let b = s.create_project(draft());

        assert!(s.delete_project(&b));
        assert!(s.current_project().is_none());
        assert_eq!(s.len(), 1);
        assert!(s.project(&a).is_some());
    }

    #[test]
    fn test_delete_other_project_keeps_selection() {
        let mut s = store();
        let a = s.create_project(draft());
        let b = s.create_project(draft());
        let selected = s.current_project().unwrap().clone();

        assert!(s.delete_project(&a));
        assert_eq!(s.current_project(), Some(&selected));
        assert_eq!(s.current_project_id(), Some(&b));
    }

    #[test]
    fn test_replacing_ctas_with_repeated_id_is_rejected() {
        let mut s = store();
        let pid = s.create_project(draft());
        let cid = s.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();
        let cta = s.cta(&pid, &cid).unwrap().clone();
        let snapshot = s.projects().to_vec();

        let patch = ProjectPatch {
            ctas: Some(vec![cta.clone(), cta]),
            ..Default::default()
        };
        assert!(!s.update_project(&pid, patch));
        assert_eq!(s.projects(), snapshot.as_slice());

        assert!(s.delete_cta(&pid, &cid));
        assert!(s.project(&pid).unwrap().ctas.is_empty());
    }

    #[test]
    fn test_replacing_ctas_with_distinct_ids() {
        let mut s = store();
        let pid = s.create_project(draft());
        let cid = s.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();
        let kept = s.cta(&pid, &cid).unwrap().clone();
        let copy = Cta::from_draft(CtaId::from("copy"), CtaDraft::from(kept.clone()));

        let patch = ProjectPatch {
            ctas: Some(vec![kept, copy]),
            ..Default::default()
        };
        assert!(s.update_project(&pid, patch));

        let p = s.project(&pid).unwrap();
        assert_eq!(p.ctas.len(), 2);
        assert_eq!(p.ctas[1].text, p.ctas[0].text);
        assert_eq!(p.ctas[1].id, CtaId::from("copy"));
    }

    #[test]
    fn test_import_normalizes_projects() {
        let mut source = store();
        let pid = source.create_project(draft());
        let cid = source.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();
        let mut project = source.project(&pid).unwrap().clone();
        project.updated = Utc.timestamp_opt(10, 0).unwrap();
        let repeated = project.cta(&cid).unwrap().clone();
        project.ctas.push(repeated);

        let mut s = store();
        assert_eq!(s.import_projects(vec![project]), 1);

        let imported = s.project(&pid).unwrap();
        assert!(imported.updated >= imported.created);
        assert_eq!(imported.ctas.len(), 1);

        assert!(s.delete_cta(&pid, &cid));
        assert!(s.project(&pid).unwrap().ctas.is_empty());
    }

    #[test]
    fn test_import_skips_duplicate_ids() {
        let mut s = store();
        let id = s.create_project(draft());
        let dup = s.project(&id).unwrap().clone();

        assert_eq!(s.import_projects(vec![dup]), 0);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn test_drag_and_retime_cta() {
        let mut s = store();
        let pid = s.create_project(draft());
        let cid = s.add_cta(&pid, cta_draft(5.0, 15.0)).unwrap();

        let dropped = crate::util::geometry::pixel_to_percent(320.0, 180.0, 1280.0, 720.0);
        assert!(s.update_cta(&pid, &cid, CtaPatch::position(dropped)));
        assert!(s.update_cta(&pid, &cid, CtaPatch::window(8.0, 12.0)));

        let cta = s.cta(&pid, &cid).unwrap();
        assert_eq!(cta.position, Position::new(25.0, 25.0));
        assert_eq!(cta.duration(), 4.0);
        assert_eq!(cta.text, "Shop");
    }

    #[test]
    fn test_reversed_window_is_stored_verbatim() {
        let mut s = store();
        let pid = s.create_project(draft());
        let cid = s.add_cta(&pid, cta_draft(30.0, 10.0)).unwrap();

        let cta = s.cta(&pid, &cid).unwrap();
        assert_eq!(cta.start_time, 30.0);
        assert_eq!(cta.end_time, 10.0);
    }
}
