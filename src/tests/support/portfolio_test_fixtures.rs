use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    AttachedProjectView, AttachedSkillView, PortfolioUserQuery, PortfolioUserQueryError,
    PortfolioUserSummary, PortfolioUserView,
};
use crate::modules::portfolio::application::use_cases::get_portfolio_user::{
    GetPortfolioUserError, GetPortfolioUserUseCase,
};
use crate::modules::portfolio::application::use_cases::get_portfolio_users::{
    GetPortfolioUsersError, GetPortfolioUsersUseCase,
};
use crate::modules::portfolio::application::use_cases::get_unlinked_portfolio_users::{
    GetUnlinkedPortfolioUsersError, GetUnlinkedPortfolioUsersUseCase,
};
use crate::modules::portfolio::application::use_cases::get_user_relations::{
    GetUserProjectsUseCase, GetUserRelationsError, GetUserSkillsUseCase,
};

/// A profile with one project and two skills attached.
pub fn aggregated_view() -> PortfolioUserView {
    PortfolioUserView {
        id: Uuid::new_v4(),
        name: "Jane".to_string(),
        bio: "Rust developer".to_string(),
        profile_image_url: "https://example.com/jane.png".to_string(),
        projects: vec![AttachedProjectView {
            id: Uuid::new_v4(),
            title: "Portfolio site".to_string(),
            description: "Static site".to_string(),
            image_url: "https://example.com/p.png".to_string(),
        }],
        skills: vec![
            AttachedSkillView {
                id: Uuid::new_v4(),
                name: "Go".to_string(),
                level: "Beginner".to_string(),
            },
            AttachedSkillView {
                id: Uuid::new_v4(),
                name: "SQL".to_string(),
                level: "Advanced".to_string(),
            },
        ],
    }
}

/* --------------------------------------------------
 * Outgoing port fixture (service-level tests)
 * -------------------------------------------------- */

pub struct FixedPortfolioUserQuery {
    view: Option<PortfolioUserView>,
    unlinked: Vec<PortfolioUserSummary>,
}

impl FixedPortfolioUserQuery {
    pub fn with_view(view: PortfolioUserView) -> Self {
        Self {
            view: Some(view),
            unlinked: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            view: None,
            unlinked: Vec::new(),
        }
    }

    pub fn with_unlinked(unlinked: Vec<PortfolioUserSummary>) -> Self {
        Self {
            view: None,
            unlinked,
        }
    }
}

#[async_trait]
impl PortfolioUserQuery for FixedPortfolioUserQuery {
    async fn get_by_id(&self, _id: Uuid) -> Result<PortfolioUserView, PortfolioUserQueryError> {
        self.view
            .clone()
            .ok_or(PortfolioUserQueryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<PortfolioUserView>, PortfolioUserQueryError> {
        Ok(self.view.clone().into_iter().collect())
    }

    async fn list_unlinked(&self) -> Result<Vec<PortfolioUserSummary>, PortfolioUserQueryError> {
        Ok(self.unlinked.clone())
    }

    async fn get_user_projects(
        &self,
        _id: Uuid,
    ) -> Result<Vec<AttachedProjectView>, PortfolioUserQueryError> {
        self.view
            .as_ref()
            .map(|v| v.projects.clone())
            .ok_or(PortfolioUserQueryError::NotFound)
    }

    async fn get_user_skills(
        &self,
        _id: Uuid,
    ) -> Result<Vec<AttachedSkillView>, PortfolioUserQueryError> {
        self.view
            .as_ref()
            .map(|v| v.skills.clone())
            .ok_or(PortfolioUserQueryError::NotFound)
    }
}

/* --------------------------------------------------
 * Incoming use-case fixtures (route-level tests)
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct FixedGetPortfolioUser {
    result: Result<PortfolioUserView, GetPortfolioUserError>,
}

impl FixedGetPortfolioUser {
    pub fn found(view: PortfolioUserView) -> Self {
        Self { result: Ok(view) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetPortfolioUserError::NotFound),
        }
    }
}

#[async_trait]
impl GetPortfolioUserUseCase for FixedGetPortfolioUser {
    async fn execute(&self, _id: Uuid) -> Result<PortfolioUserView, GetPortfolioUserError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct FixedGetPortfolioUsers {
    views: Vec<PortfolioUserView>,
}

impl FixedGetPortfolioUsers {
    pub fn with_views(views: Vec<PortfolioUserView>) -> Self {
        Self { views }
    }
}

#[async_trait]
impl GetPortfolioUsersUseCase for FixedGetPortfolioUsers {
    async fn execute(&self) -> Result<Vec<PortfolioUserView>, GetPortfolioUsersError> {
        Ok(self.views.clone())
    }
}

#[derive(Clone)]
pub struct FixedGetUnlinkedPortfolioUsers {
    summaries: Vec<PortfolioUserSummary>,
}

impl FixedGetUnlinkedPortfolioUsers {
    pub fn with_summaries(summaries: Vec<PortfolioUserSummary>) -> Self {
        Self { summaries }
    }
}

#[async_trait]
impl GetUnlinkedPortfolioUsersUseCase for FixedGetUnlinkedPortfolioUsers {
    async fn execute(&self) -> Result<Vec<PortfolioUserSummary>, GetUnlinkedPortfolioUsersError> {
        Ok(self.summaries.clone())
    }
}

#[derive(Clone)]
pub struct FixedGetUserProjects {
    result: Result<Vec<AttachedProjectView>, GetUserRelationsError>,
}

impl FixedGetUserProjects {
    pub fn with_projects(projects: Vec<AttachedProjectView>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetUserRelationsError::UserNotFound),
        }
    }
}

#[async_trait]
impl GetUserProjectsUseCase for FixedGetUserProjects {
    async fn execute(&self, _id: Uuid) -> Result<Vec<AttachedProjectView>, GetUserRelationsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct FixedGetUserSkills {
    result: Result<Vec<AttachedSkillView>, GetUserRelationsError>,
}

impl FixedGetUserSkills {
    pub fn with_skills(skills: Vec<AttachedSkillView>) -> Self {
        Self { result: Ok(skills) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetUserRelationsError::UserNotFound),
        }
    }
}

#[async_trait]
impl GetUserSkillsUseCase for FixedGetUserSkills {
    async fn execute(&self, _id: Uuid) -> Result<Vec<AttachedSkillView>, GetUserRelationsError> {
        self.result.clone()
    }
}
