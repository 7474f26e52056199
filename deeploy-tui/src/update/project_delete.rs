//! 删除确认消息处理

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Size;

use crate::backend::tasks;
use crate::event::DefaultKeymap;
use crate::message::{Command, Message, ProjectMessage};
use crate::model::{Context, ProjectDeletePage};

impl ProjectDeletePage {
    pub fn update(mut self, msg: Message, ctx: &Context) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => {
                self.size = Size::new(width, height);
                Command::none()
            }
            Message::Key(key) => self.handle_key(key, ctx),

            Message::Project(ProjectMessage::Deleted(id))
                if self.pending && id == self.project.id =>
            {
                self.pending = false;
                Command::batch([
                    Command::message(Message::pop()),
                    Command::message(Message::Project(ProjectMessage::Deleted(id))),
                ])
            }
            Message::Project(ProjectMessage::Error(cause)) if self.pending => {
                self.pending = false;
                self.error = Some(cause);
                Command::none()
            }

            _ => Command::none(),
        };
        (self, cmd)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Command {
        if self.pending {
            return Command::none();
        }

        if DefaultKeymap::CONFIRM_YES.matches(&key) || key.code == KeyCode::Enter {
            log::info!("[project_delete] deleting {}", self.project.id);
            self.pending = true;
            self.error = None;
            return tasks::delete_project(ctx, self.project.id.clone());
        }
        if DefaultKeymap::CONFIRM_NO.matches(&key) {
            return Command::message(Message::pop());
        }
        Command::none()
    }
}
