//! 页面栈

use super::Page;
use crate::message::Command;

/// 分区内的页面栈，最后一个元素为活动页
#[derive(Debug, Clone, Default)]
pub struct PageStack {
    pages: Vec<Page>,
}

impl PageStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// 移除栈顶，栈内只剩一页（或为空）时不做任何事
    pub fn pop(&mut self) -> Option<Page> {
        if self.pages.len() > 1 {
            self.pages.pop()
        } else {
            None
        }
    }

    /// 活动页
    pub fn active(&self) -> Option<&Page> {
        self.pages.last()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// 用 `f` 更新活动页并原位替换；空栈返回 `Command::None`
    pub fn update_active(&mut self, f: impl FnOnce(Page) -> (Page, Command)) -> Command {
        let Some(page) = self.pages.pop() else {
            return Command::none();
        };
        let (page, cmd) = f(page);
        self.pages.push(page);
        cmd
    }
}
