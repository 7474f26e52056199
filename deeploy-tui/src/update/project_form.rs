//! 项目表单消息处理

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Size;

use super::typed_char;
use crate::backend::tasks;
use crate::message::{Command, Message, ProjectMessage};
use crate::model::{Context, ProjectFormPage};

impl ProjectFormPage {
    pub fn update(mut self, msg: Message, ctx: &Context) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => {
                self.size = Size::new(width, height);
                Command::none()
            }
            Message::Key(key) => self.handle_key(key, ctx),

            Message::Project(ProjectMessage::Created(project))
                if self.submitting && !self.is_edit() =>
            {
                self.finish(ProjectMessage::Created(project))
            }
            Message::Project(ProjectMessage::Updated(project))
                if self.submitting && self.is_edit() =>
            {
                self.finish(ProjectMessage::Updated(project))
            }
            Message::Project(ProjectMessage::Error(cause)) if self.submitting => {
                self.submitting = false;
                self.error = Some(cause);
                Command::none()
            }

            _ => Command::none(),
        };
        (self, cmd)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Command {
        if self.submitting {
            return Command::none();
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus = self.focus.next();
            }
            KeyCode::Enter => return self.submit(ctx),
            KeyCode::Backspace => {
                self.focused_mut().backspace();
                self.validation = None;
            }
            _ => {
                if let Some(c) = typed_char(&key) {
                    self.focused_mut().insert(c);
                    self.validation = None;
                }
            }
        }
        Command::none()
    }

    fn submit(&mut self, ctx: &Context) -> Command {
        let request = match self.request() {
            Ok(request) => request,
            Err(reason) => {
                self.validation = Some(reason.to_string());
                return Command::none();
            }
        };

        self.validation = None;
        self.error = None;
        self.submitting = true;

        match &self.seed {
            Some(project) => tasks::update_project(ctx, project, request),
            None => tasks::create_project(ctx, request),
        }
    }

    /// 先弹出自己，再把结果交给露出来的列表页
    fn finish(&mut self, result: ProjectMessage) -> Command {
        self.submitting = false;
        Command::batch([
            Command::message(Message::pop()),
            Command::message(Message::Project(result)),
        ])
    }
}
