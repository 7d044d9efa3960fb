use std::sync::Arc;

use crate::modules::project::application::use_cases::{
    attach_project::AttachProjectUseCase, create_project::CreateProjectUseCase,
    delete_project::DeleteProjectUseCase, get_projects::GetProjectsUseCase,
    get_single_project::GetSingleProjectUseCase, update_project::UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub attach: Arc<dyn AttachProjectUseCase + Send + Sync>,
}
