pub mod project_attachment_repository;
pub mod project_query;
pub mod project_repository;

pub use project_attachment_repository::{
    ProjectAttachmentRepository, ProjectAttachmentRepositoryError,
};
pub use project_query::{ProjectQuery, ProjectQueryError, ProjectView};
pub use project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};
