//!
//! src/view/mod.rs
//! View 层：把页面状态渲染成文本
//!
//! ```text
//!     Page::view(&self) -> Text<'static>
//!         ├── layout.rs      拼接 / 对齐 / 裁剪原语
//!         ├── components/    卡片、Logo、快捷键提示
//!         ├── pages/         每种页面一个文件
//!         └── theme.rs       配色
//! ```
//!
//! View 是纯函数：只读状态，不产生命令。
//! 每个页面的输出恰好占满自己记录的尺寸；尺寸未知时输出 "Loading..."。
//!

pub mod components;
pub mod layout;
mod pages;
pub mod theme;

use ratatui::{Frame, layout::Size, text::Text, widgets::Paragraph};

use crate::model::{App, Page};

/// 尺寸未知时的占位文本
pub const LOADING: &str = "Loading...";

impl Page {
    /// 渲染当前页面
    pub fn view(&self) -> Text<'static> {
        let size = self.size();
        if size.width == 0 || size.height == 0 {
            return Text::from(LOADING);
        }

        match self {
            Page::Dashboard(page) => pages::dashboard::view(page),
            Page::Connect(page) => pages::connect::view(page),
            Page::Projects(page) => pages::projects::view(page),
            Page::ProjectList(_) | Page::ProjectForm(_) | Page::ProjectDelete(_) => {
                pages::with_logo(size, pages::body(self))
            }
        }
    }

    /// 页面最近一次收到的终端尺寸
    fn size(&self) -> Size {
        match self {
            Page::Dashboard(page) => page.size,
            Page::Connect(page) => page.size,
            Page::Projects(page) => page.size,
            Page::ProjectList(page) => page.size,
            Page::ProjectForm(page) => page.size,
            Page::ProjectDelete(page) => page.size,
        }
    }
}

/// 把当前页面画到整个终端
pub fn render(app: &App, frame: &mut Frame) {
    frame.render_widget(Paragraph::new(app.page.view()), frame.area());
}
