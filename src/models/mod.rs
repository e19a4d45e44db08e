mod patch;
mod project;

pub use patch::{FieldEdit, ProjectPatch};
pub(crate) use project::OrNull;
pub use project::{NewProject, Project};
