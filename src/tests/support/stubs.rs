use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::use_cases::link_portfolio_user::{
    LinkPortfolioUserError, LinkPortfolioUserOutput, LinkPortfolioUserUseCase,
};
use crate::modules::auth::application::use_cases::login_account::{
    LoginError, LoginRequest, LoginResponse, LoginUseCase,
};
use crate::modules::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountRequest, RegisterAccountUseCase, RegisteredAccount,
};
use crate::modules::portfolio::application::ports::outgoing::{
    CreatePortfolioUserData, PortfolioUserRecord, UpdatePortfolioUserData,
};
use crate::modules::portfolio::application::use_cases::create_portfolio_user::{
    CreatePortfolioUserError, CreatePortfolioUserUseCase,
};
use crate::modules::portfolio::application::use_cases::delete_portfolio_user::{
    DeletePortfolioUserError, DeletePortfolioUserUseCase,
};
use crate::modules::portfolio::application::use_cases::set_user_skills::{
    SetUserSkillsError, SetUserSkillsUseCase,
};
use crate::modules::portfolio::application::use_cases::update_portfolio_user::{
    UpdatePortfolioUserError, UpdatePortfolioUserUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectRecord, ProjectView, UpdateProjectData,
};
use crate::modules::project::application::use_cases::attach_project::{
    AttachProjectError, AttachProjectUseCase,
};
use crate::modules::project::application::use_cases::create_project::{
    CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::use_cases::delete_project::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::use_cases::get_projects::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::use_cases::get_single_project::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, SkillRecord, SkillView, UpdateSkillData,
};
use crate::modules::skill::application::use_cases::create_skill::{
    CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::use_cases::delete_skill::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::use_cases::get_single_skill::{
    GetSingleSkillError, GetSingleSkillUseCase,
};
use crate::modules::skill::application::use_cases::get_skills::{GetSkillsError, GetSkillsUseCase};
use crate::modules::skill::application::use_cases::update_skill::{
    UpdateSkillError, UpdateSkillUseCase,
};

/* --------------------------------------------------
 * Auth stubs
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubRegisterAccountUseCase;

#[async_trait]
impl RegisterAccountUseCase for StubRegisterAccountUseCase {
    async fn execute(
        &self,
        _request: RegisterAccountRequest,
    ) -> Result<RegisteredAccount, RegisterAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLinkPortfolioUserUseCase;

#[async_trait]
impl LinkPortfolioUserUseCase for StubLinkPortfolioUserUseCase {
    async fn execute(
        &self,
        _account_id: Uuid,
        _portfolio_user_id: Uuid,
    ) -> Result<LinkPortfolioUserOutput, LinkPortfolioUserError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Portfolio stubs
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreatePortfolioUserUseCase;

#[async_trait]
impl CreatePortfolioUserUseCase for StubCreatePortfolioUserUseCase {
    async fn execute(
        &self,
        _data: CreatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, CreatePortfolioUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePortfolioUserUseCase;

#[async_trait]
impl UpdatePortfolioUserUseCase for StubUpdatePortfolioUserUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, UpdatePortfolioUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePortfolioUserUseCase;

#[async_trait]
impl DeletePortfolioUserUseCase for StubDeletePortfolioUserUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeletePortfolioUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetUserSkillsUseCase;

#[async_trait]
impl SetUserSkillsUseCase for StubSetUserSkillsUseCase {
    async fn execute(
        &self,
        _portfolio_user_id: Uuid,
        _names: Vec<String>,
    ) -> Result<(), SetUserSkillsError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Project stubs
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl crate::modules::project::application::use_cases::update_project::UpdateProjectUseCase
    for StubUpdateProjectUseCase
{
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateProjectData,
    ) -> Result<ProjectRecord, crate::modules::project::application::use_cases::update_project::UpdateProjectError>
    {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: Uuid) -> Result<ProjectView, GetSingleProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAttachProjectUseCase;

#[async_trait]
impl AttachProjectUseCase for StubAttachProjectUseCase {
    async fn execute(
        &self,
        _portfolio_user_id: Uuid,
        _project_id: Uuid,
    ) -> Result<(), AttachProjectError> {
        unimplemented!("Not used in this test")
    }
}

/* --------------------------------------------------
 * Skill stubs
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubCreateSkillUseCase;

#[async_trait]
impl CreateSkillUseCase for StubCreateSkillUseCase {
    async fn execute(&self, _data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateSkillUseCase;

#[async_trait]
impl UpdateSkillUseCase for StubUpdateSkillUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteSkillUseCase;

#[async_trait]
impl DeleteSkillUseCase for StubDeleteSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteSkillError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleSkillUseCase;

#[async_trait]
impl GetSingleSkillUseCase for StubGetSingleSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<SkillView, GetSingleSkillError> {
        unimplemented!("Not used in this test")
    }
}
