use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::account_use_cases::AccountUseCases;
use crate::modules::auth::application::use_cases::{
    link_portfolio_user::LinkPortfolioUserUseCase, login_account::LoginUseCase,
    register_account::RegisterAccountUseCase,
};
use crate::modules::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::modules::portfolio::application::use_cases::{
    create_portfolio_user::CreatePortfolioUserUseCase,
    delete_portfolio_user::DeletePortfolioUserUseCase, get_portfolio_user::GetPortfolioUserUseCase,
    get_portfolio_users::GetPortfolioUsersUseCase,
    get_unlinked_portfolio_users::GetUnlinkedPortfolioUsersUseCase,
    get_user_relations::{GetUserProjectsUseCase, GetUserSkillsUseCase},
    set_user_skills::SetUserSkillsUseCase, update_portfolio_user::UpdatePortfolioUserUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::use_cases::{
    attach_project::AttachProjectUseCase, create_project::CreateProjectUseCase,
    delete_project::DeleteProjectUseCase, get_projects::GetProjectsUseCase,
    get_single_project::GetSingleProjectUseCase, update_project::UpdateProjectUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillUseCase, delete_skill::DeleteSkillUseCase,
    get_single_skill::GetSingleSkillUseCase, get_skills::GetSkillsUseCase,
    update_skill::UpdateSkillUseCase,
};
use crate::tests::support::portfolio_test_fixtures::{
    FixedGetPortfolioUser, FixedGetPortfolioUsers, FixedGetUnlinkedPortfolioUsers,
    FixedGetUserProjects, FixedGetUserSkills,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    register_account: Arc<dyn RegisterAccountUseCase + Send + Sync>,
    login: Arc<dyn LoginUseCase + Send + Sync>,
    link_portfolio_user: Arc<dyn LinkPortfolioUserUseCase + Send + Sync>,

    create_portfolio_user: Arc<dyn CreatePortfolioUserUseCase + Send + Sync>,
    update_portfolio_user: Arc<dyn UpdatePortfolioUserUseCase + Send + Sync>,
    delete_portfolio_user: Arc<dyn DeletePortfolioUserUseCase + Send + Sync>,
    get_portfolio_user: Arc<dyn GetPortfolioUserUseCase + Send + Sync>,
    get_portfolio_users: Arc<dyn GetPortfolioUsersUseCase + Send + Sync>,
    get_unlinked_portfolio_users: Arc<dyn GetUnlinkedPortfolioUsersUseCase + Send + Sync>,
    get_user_projects: Arc<dyn GetUserProjectsUseCase + Send + Sync>,
    get_user_skills: Arc<dyn GetUserSkillsUseCase + Send + Sync>,
    set_user_skills: Arc<dyn SetUserSkillsUseCase + Send + Sync>,

    create_project: Arc<dyn CreateProjectUseCase + Send + Sync>,
    update_project: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    delete_project: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    attach_project: Arc<dyn AttachProjectUseCase + Send + Sync>,

    create_skill: Arc<dyn CreateSkillUseCase + Send + Sync>,
    update_skill: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    delete_skill: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    get_single_skill: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: Arc::new(StubRegisterAccountUseCase),
            login: Arc::new(StubLoginUseCase),
            link_portfolio_user: Arc::new(StubLinkPortfolioUserUseCase),

            create_portfolio_user: Arc::new(StubCreatePortfolioUserUseCase),
            update_portfolio_user: Arc::new(StubUpdatePortfolioUserUseCase),
            delete_portfolio_user: Arc::new(StubDeletePortfolioUserUseCase),
            get_portfolio_user: Arc::new(FixedGetPortfolioUser::not_found()),
            get_portfolio_users: Arc::new(FixedGetPortfolioUsers::with_views(Vec::new())),
            get_unlinked_portfolio_users: Arc::new(FixedGetUnlinkedPortfolioUsers::with_summaries(
                Vec::new(),
            )),
            get_user_projects: Arc::new(FixedGetUserProjects::not_found()),
            get_user_skills: Arc::new(FixedGetUserSkills::not_found()),
            set_user_skills: Arc::new(StubSetUserSkillsUseCase),

            create_project: Arc::new(StubCreateProjectUseCase),
            update_project: Arc::new(StubUpdateProjectUseCase),
            delete_project: Arc::new(StubDeleteProjectUseCase),
            get_projects: Arc::new(StubGetProjectsUseCase),
            get_single_project: Arc::new(StubGetSingleProjectUseCase),
            attach_project: Arc::new(StubAttachProjectUseCase),

            create_skill: Arc::new(StubCreateSkillUseCase),
            update_skill: Arc::new(StubUpdateSkillUseCase),
            delete_skill: Arc::new(StubDeleteSkillUseCase),
            get_skills: Arc::new(StubGetSkillsUseCase),
            get_single_skill: Arc::new(StubGetSingleSkillUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_account(
        mut self,
        uc: impl RegisterAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_account = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.login = Arc::new(uc);
        self
    }

    pub fn with_link_portfolio_user(
        mut self,
        uc: impl LinkPortfolioUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.link_portfolio_user = Arc::new(uc);
        self
    }

    pub fn with_create_portfolio_user(
        mut self,
        uc: impl CreatePortfolioUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_portfolio_user = Arc::new(uc);
        self
    }

    pub fn with_update_portfolio_user(
        mut self,
        uc: impl UpdatePortfolioUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_portfolio_user = Arc::new(uc);
        self
    }

    pub fn with_delete_portfolio_user(
        mut self,
        uc: impl DeletePortfolioUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_portfolio_user = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio_user(
        mut self,
        uc: impl GetPortfolioUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio_user = Arc::new(uc);
        self
    }

    pub fn with_get_portfolio_users(
        mut self,
        uc: impl GetPortfolioUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio_users = Arc::new(uc);
        self
    }

    pub fn with_get_unlinked_portfolio_users(
        mut self,
        uc: impl GetUnlinkedPortfolioUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_unlinked_portfolio_users = Arc::new(uc);
        self
    }

    pub fn with_get_user_projects(
        mut self,
        uc: impl GetUserProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_user_projects = Arc::new(uc);
        self
    }

    pub fn with_get_user_skills(
        mut self,
        uc: impl GetUserSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_user_skills = Arc::new(uc);
        self
    }

    pub fn with_set_user_skills(
        mut self,
        uc: impl SetUserSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.set_user_skills = Arc::new(uc);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_project = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_project = Arc::new(uc);
        self
    }

    pub fn with_delete_project(
        mut self,
        uc: impl DeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_project = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_project = Arc::new(uc);
        self
    }

    pub fn with_attach_project(
        mut self,
        uc: impl AttachProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.attach_project = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + Send + Sync + 'static) -> Self {
        self.create_skill = Arc::new(uc);
        self
    }

    pub fn with_update_skill(mut self, uc: impl UpdateSkillUseCase + Send + Sync + 'static) -> Self {
        self.update_skill = Arc::new(uc);
        self
    }

    pub fn with_delete_skill(mut self, uc: impl DeleteSkillUseCase + Send + Sync + 'static) -> Self {
        self.delete_skill = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_get_single_skill(
        mut self,
        uc: impl GetSingleSkillUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_skill = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: AccountUseCases {
                register: self.register_account,
                login: self.login,
                link_portfolio_user: self.link_portfolio_user,
            },
            portfolio: PortfolioUseCases {
                create: self.create_portfolio_user,
                update: self.update_portfolio_user,
                delete: self.delete_portfolio_user,
                get_single: self.get_portfolio_user,
                get_list: self.get_portfolio_users,
                get_unlinked: self.get_unlinked_portfolio_users,
                get_user_projects: self.get_user_projects,
                get_user_skills: self.get_user_skills,
                set_skills: self.set_user_skills,
            },
            project: ProjectUseCases {
                create: self.create_project,
                update: self.update_project,
                delete: self.delete_project,
                get_list: self.get_projects,
                get_single: self.get_single_project,
                attach: self.attach_project,
            },
            skill: SkillUseCases {
                create: self.create_skill,
                update: self.update_skill,
                delete: self.delete_skill,
                get_list: self.get_skills,
                get_single: self.get_single_skill,
            },
        })
    }
}
