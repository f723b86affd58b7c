use crate::core::defaults::default_projects;
use crate::core::project::Project;
use crate::core::types::CanvasPoint;
use crate::error::{RoadmapError, RoadmapResult};

/// Owned, ordered collection of roadmap records.
///
/// The store is the single source of truth for project data. Mutations
/// canonicalize records on the way in (numeric clamping) and enforce id
/// uniqueness; unknown ids are an error rather than a silent no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
        }
    }

    /// Creates a store seeded with the default roadmap.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            projects: default_projects(),
        }
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Next id the creation sentinel would assign.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        self.projects
            .iter()
            .map(|project| project.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Adds a record and returns its assigned id.
    ///
    /// Id `0` is the creation sentinel and receives `next_id()`. An explicit
    /// non-zero id is accepted when unused and rejected as a duplicate
    /// otherwise.
    pub fn add(&mut self, project: Project) -> RoadmapResult<u32> {
        let mut project = project.canonicalized()?;

        if project.id == 0 {
            project.id = self.next_id();
        } else if self.contains(project.id) {
            return Err(RoadmapError::DuplicateProjectId(project.id));
        }

        let id = project.id;
        self.projects.push(project);
        Ok(id)
    }

    /// Replaces the record with the same id, keeping its position in the list.
    pub fn update(&mut self, project: Project) -> RoadmapResult<()> {
        let project = project.canonicalized()?;

        let Some(slot) = self
            .projects
            .iter_mut()
            .find(|existing| existing.id == project.id)
        else {
            return Err(RoadmapError::UnknownProjectId(project.id));
        };

        *slot = project;
        Ok(())
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: u32) -> RoadmapResult<Project> {
        let Some(index) = self.projects.iter().position(|project| project.id == id) else {
            return Err(RoadmapError::UnknownProjectId(id));
        };

        Ok(self.projects.remove(index))
    }

    /// Records a transient on-screen position for an active drag.
    pub fn set_position(&mut self, id: u32, x: f64, y: f64) -> RoadmapResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RoadmapError::InvalidData(
                "position coordinates must be finite".to_owned(),
            ));
        }

        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
        else {
            return Err(RoadmapError::UnknownProjectId(id));
        };

        project.position = Some(CanvasPoint::new(x, y));
        Ok(())
    }

    /// Drops the transient position so placement derives from data again.
    pub fn clear_position(&mut self, id: u32) -> RoadmapResult<()> {
        let Some(project) = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
        else {
            return Err(RoadmapError::UnknownProjectId(id));
        };

        project.position = None;
        Ok(())
    }

    /// Atomically replaces the whole collection, preserving input order.
    ///
    /// Every record is canonicalized and ids must be unique and non-zero;
    /// on any error the store is left untouched. Returns the new record
    /// count.
    pub fn replace_all(&mut self, projects: Vec<Project>) -> RoadmapResult<usize> {
        let mut accepted: Vec<Project> = Vec::with_capacity(projects.len());

        for project in projects {
            let project = project.canonicalized()?;
            if project.id == 0 {
                return Err(RoadmapError::InvalidData(
                    "project id 0 is reserved for creation".to_owned(),
                ));
            }
            if accepted.iter().any(|existing| existing.id == project.id) {
                return Err(RoadmapError::DuplicateProjectId(project.id));
            }
            accepted.push(project);
        }

        self.projects = accepted;
        Ok(self.projects.len())
    }

    /// Restores the default seed roadmap. Returns the record count.
    pub fn restore_defaults(&mut self) -> usize {
        self.projects = default_projects();
        self.projects.len()
    }
}
