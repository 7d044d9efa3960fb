use std::sync::Arc;

use crate::modules::skill::application::use_cases::{
    create_skill::CreateSkillUseCase, delete_skill::DeleteSkillUseCase,
    get_single_skill::GetSingleSkillUseCase, get_skills::GetSkillsUseCase,
    update_skill::UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSkillsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
}
