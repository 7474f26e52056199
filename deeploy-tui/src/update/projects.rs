//! 项目分区：页面栈导航

use crossterm::event::KeyCode;
use ratatui::layout::Size;

use super::resize_message;
use crate::message::{Command, Message, SectionMessage};
use crate::model::{Context, DashboardPage, Page, ProjectListPage, ProjectsPage};

impl ProjectsPage {
    pub fn update(mut self, msg: Message, ctx: &Context) -> (Self, Command) {
        let cmd = match msg {
            Message::Resize { width, height } => self.resize(Size::new(width, height), ctx),

            // Esc（带不带修饰键）由分区消费，子页面看不到
            Message::Key(key) if key.code == KeyCode::Esc => {
                if self.stack.is_empty() {
                    Command::message(Message::change_page(DashboardPage::new()))
                } else {
                    Command::message(Message::pop())
                }
            }

            Message::Section(SectionMessage::Push(page)) => self.push(*page, ctx),
            Message::Section(SectionMessage::Pop) => self.pop(),

            other => self.stack.update_active(|page| page.update(other, ctx)),
        };
        (self, cmd)
    }

    fn resize(&mut self, size: Size, ctx: &Context) -> Command {
        self.size = size;

        if self.stack.is_empty() {
            let list = Page::from(ProjectListPage::new());
            let init = list.init(ctx);
            self.stack.push(list);
            let resized = self
                .stack
                .update_active(|page| page.update(resize_message(size), ctx));
            return Command::batch([resized, init]);
        }

        self.stack
            .update_active(|page| page.update(resize_message(size), ctx))
    }

    fn push(&mut self, page: Page, ctx: &Context) -> Command {
        log::debug!("[projects] push {} (depth {})", page.title(), self.stack.len() + 1);
        let init = page.init(ctx);
        self.stack.push(page);
        Command::batch([Command::message(resize_message(self.size)), init])
    }

    fn pop(&mut self) -> Command {
        match self.stack.pop() {
            Some(page) => {
                log::debug!("[projects] pop {} (depth {})", page.title(), self.stack.len());
                // 新暴露的页面可能错过了期间的 Resize
                Command::message(resize_message(self.size))
            }
            None => Command::none(),
        }
    }
}
