//! 连接页消息处理

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Size;

use super::typed_char;
use crate::backend::tasks;
use crate::event::DefaultKeymap;
use crate::message::{Command, ConnectMessage, Message};
use crate::model::{ConnectPage, Context, DashboardPage};

impl ConnectPage {
    pub fn update(mut self, msg: Message, ctx: &Context) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => {
                self.size = Size::new(width, height);
                Command::none()
            }
            Message::Key(key) => self.handle_key(key, ctx),
            Message::Connect(ConnectMessage::Connected) if self.connecting => {
                self.connecting = false;
                Command::message(Message::change_page(DashboardPage::new()))
            }
            Message::Connect(ConnectMessage::Failed(cause)) if self.connecting => {
                self.connecting = false;
                self.error = Some(cause);
                Command::none()
            }
            _ => Command::none(),
        };
        (self, cmd)
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &Context) -> Command {
        if DefaultKeymap::BACK.matches(&key) {
            return Command::message(Message::change_page(DashboardPage::new()));
        }
        if self.connecting {
            return Command::none();
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                self.focus = self.focus.next();
            }
            KeyCode::Enter => return self.submit(ctx),
            KeyCode::Backspace => {
                self.focused_mut().backspace();
                self.error = None;
            }
            _ => {
                if let Some(c) = typed_char(&key) {
                    self.focused_mut().insert(c);
                    self.error = None;
                }
            }
        }
        Command::none()
    }

    fn submit(&mut self, ctx: &Context) -> Command {
        match self.config() {
            Ok(config) => {
                self.connecting = true;
                self.error = None;
                tasks::connect(ctx, config)
            }
            Err(reason) => {
                self.error = Some(reason.to_string());
                Command::none()
            }
        }
    }
}
