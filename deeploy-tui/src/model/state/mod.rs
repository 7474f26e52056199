//! 各页面的状态

mod connect;
mod dashboard;
mod input;
mod project_delete;
mod project_form;
mod project_list;
mod projects;

pub use connect::{ConnectField, ConnectPage};
pub use dashboard::{DashboardItem, DashboardPage};
pub use input::TextInput;
pub use project_delete::ProjectDeletePage;
pub use project_form::{FormField, ProjectFormPage};
pub use project_list::ProjectListPage;
pub use projects::ProjectsPage;
