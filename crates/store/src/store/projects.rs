use serde::Deserialize;

use crate::config::OpWeight;
use crate::error::{Result, StoreError};
use crate::store::models::{Project, ProjectId, TeamMember};
use crate::store::{next_id, WorkspaceStore};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub team_members: Vec<TeamMember>,
}

impl WorkspaceStore {
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.latency.wait(OpWeight::Read).await;

        Ok(self.projects.clone())
    }

    pub async fn project(&self, id: ProjectId) -> Result<Project> {
        self.latency.wait(OpWeight::Read).await;

        self.projects
            .iter()
            .find(|project| project.id == id)
            .cloned()
            .ok_or(StoreError::ProjectNotFound(id))
    }

    pub async fn create_project(&mut self, request: CreateProjectRequest) -> Result<Project> {
        self.latency.wait(OpWeight::Create).await;

        if request.name.trim().is_empty() {
            return self.fail(StoreError::Validation(
                "Project name is required".to_string(),
            ));
        }

        let project = Project {
            id: next_id(self.projects.iter().map(|p| p.id)),
            name: request.name,
            description: request.description,
            color: request.color,
            team_members: request.team_members,
        };
        self.projects.push(project.clone());

        self.notifier.success("Project created successfully");
        Ok(project)
    }
}
