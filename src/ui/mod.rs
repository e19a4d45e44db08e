pub mod console;
pub mod menu;
pub mod project_wizard;
pub mod projects;
