pub mod attach_project;
pub mod create_project;
pub mod delete_project;
pub mod get_projects;
pub mod get_single_project;
pub mod update_project;
