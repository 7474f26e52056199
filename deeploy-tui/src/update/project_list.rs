//! 项目列表消息处理

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Size;

use crate::backend::tasks;
use crate::event::DefaultKeymap;
use crate::message::{Command, Message, ProjectMessage};
use crate::model::{Context, DashboardPage, ProjectDeletePage, ProjectFormPage, ProjectListPage};

impl ProjectListPage {
    /// 加载项目列表
    pub fn init(&self, ctx: &Context) -> Command {
        tasks::load_projects(ctx)
    }

    pub fn update(mut self, msg: Message, ctx: &Context) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => {
                self.size = Size::new(width, height);
                Command::none()
            }
            Message::Key(key) => self.handle_key(key, ctx),
            Message::Project(project_msg) => {
                self.apply(project_msg);
                Command::none()
            }
            _ => Command::none(),
        };
        (self, cmd)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Command {
        if DefaultKeymap::ACTION_NEW.matches(&key) {
            return Command::message(Message::push(ProjectFormPage::new()));
        }
        if DefaultKeymap::RELOAD.matches(&key) {
            self.error = None;
            return tasks::load_projects(ctx);
        }
        if DefaultKeymap::DASHBOARD.matches(&key) {
            return Command::message(Message::change_page(DashboardPage::new()));
        }

        // 错误卡片遮住了列表，选择相关的按键不起作用
        if self.error.is_some() {
            return Command::none();
        }

        if DefaultKeymap::ACTION_EDIT.matches(&key) {
            return self.selected_project().map_or_else(Command::none, |project| {
                Command::message(Message::push(ProjectFormPage::edit(project.clone())))
            });
        }
        if DefaultKeymap::ACTION_DELETE.matches(&key) {
            return self.selected_project().map_or_else(Command::none, |project| {
                Command::message(Message::push(ProjectDeletePage::new(project.clone())))
            });
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => self.select_next(),
            (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => self.select_previous(),
            _ => {}
        }
        Command::none()
    }

    fn apply(&mut self, msg: ProjectMessage) {
        match msg {
            ProjectMessage::InitData(items) => {
                log::debug!("[project_list] {} items", items.len());
                self.set_items(items);
            }
            ProjectMessage::Created(project) => {
                log::debug!("[project_list] created {}", project.id);
                self.append(project);
            }
            ProjectMessage::Updated(project) => {
                let id = project.id.clone();
                if !self.replace(project) {
                    log::debug!("[project_list] updated {id} not in list, ignored");
                }
            }
            ProjectMessage::Deleted(id) => {
                if !self.remove(&id) {
                    log::debug!("[project_list] deleted {id} not in list, ignored");
                }
            }
            ProjectMessage::Error(cause) => {
                self.error = Some(cause);
            }
        }
    }
}
