//! 首页菜单消息处理

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::Size;

use crate::message::{Command, Message};
use crate::model::{ConnectPage, DashboardItem, DashboardPage, ProjectsPage};

impl DashboardPage {
    pub fn update(mut self, msg: Message) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => {
                self.size = Size::new(width, height);
                Command::none()
            }
            Message::Key(key) => match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
                    self.select_next();
                    Command::none()
                }
                (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
                    self.select_previous();
                    Command::none()
                }
                (KeyModifiers::NONE, KeyCode::Enter) => activate(self.selected_item()),
                (KeyModifiers::NONE, KeyCode::Char(c)) => DashboardItem::ALL
                    .into_iter()
                    .find(|item| item.shortcut() == c)
                    .map_or_else(Command::none, activate),
                _ => Command::none(),
            },
            _ => Command::none(),
        };
        (self, cmd)
    }
}

fn activate(item: DashboardItem) -> Command {
    let msg = match item {
        DashboardItem::Projects => Message::change_page(ProjectsPage::new()),
        DashboardItem::Connect => Message::change_page(ConnectPage::new()),
        DashboardItem::Quit => Message::Quit,
    };
    Command::message(msg)
}
