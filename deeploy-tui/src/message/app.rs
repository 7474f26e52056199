//! 应用主消息

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{ConnectMessage, ProjectMessage, SectionMessage};
use crate::model::Page;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum Message {
    /// 按键（只转发 Press 事件）
    Key(KeyEvent),

    /// 终端尺寸变化
    Resize { width: u16, height: u16 },

    /// 替换顶层页面
    ChangePage(Box<Page>),

    /// 退出应用
    Quit,

    /// 页面栈导航
    Section(SectionMessage),

    /// 项目数据生命周期
    Project(ProjectMessage),

    /// 连接页结果
    Connect(ConnectMessage),
}

impl Message {
    pub fn change_page(page: impl Into<Page>) -> Self {
        Self::ChangePage(Box::new(page.into()))
    }

    pub fn push(page: impl Into<Page>) -> Self {
        Self::Section(SectionMessage::Push(Box::new(page.into())))
    }

    pub fn pop() -> Self {
        Self::Section(SectionMessage::Pop)
    }

    /// 无修饰键的按键
    pub fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }
}
