//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，并返回 Command。
//! 这里不做任何同步 I/O：请求通过 `backend::tasks` 包装成 future 交给运行时。
//!
//!
//! 有模块结构：
//! ```text
//!     src/update/mod.rs
//!         mod connect;            // 连接页
//!         mod dashboard;          // 首页菜单
//!         mod project_delete;     // 删除确认
//!         mod project_form;       // 新建 / 编辑表单
//!         mod project_list;       // 项目列表
//!         mod projects;           // 项目分区（页面栈）
//!
//!         pub fn init(app: &App) -> Command
//!         pub fn update(app: &mut App, msg: Message) -> Command
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 顶层路由（update）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     Quit                → app.should_quit = true
//!     Ctrl+C              → app.should_quit = true（任何页面）
//!     Resize{w,h}         → 缓存尺寸，转发给当前页面
//!     ChangePage(target)  → 替换当前页面，返回 [Resize{缓存尺寸}, target.init]
//!     其他                → 转发给当前页面
//! ```
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 页面契约
//! ═══════════════════════════════════════════════════════════════════════════
//!
//! ```text
//!     page.init(ctx) -> Command
//!         页面变为活动页后调用一次，不依赖尺寸
//!
//!     page.update(msg, ctx) -> (page, Command)
//!         消费旧值，返回新值；不认识的消息原样返回，无副作用
//! ```
//!

mod connect;
mod dashboard;
mod project_delete;
mod project_form;
mod project_list;
mod projects;

use std::mem;

use crossterm::event::{KeyEvent, KeyModifiers};
use ratatui::layout::Size;

use crate::event::DefaultKeymap;
use crate::message::{Command, Message};
use crate::model::{App, Context, Page};

/// 当前页面的初始副作用
pub fn init(app: &App) -> Command {
    app.page.init(&app.context)
}

/// 主更新函数
pub fn update(app: &mut App, msg: Message) -> Command {
    match msg {
        Message::Quit => {
            log::info!("[app] Quit");
            app.should_quit = true;
            Command::none()
        }
        Message::Key(key) if DefaultKeymap::FORCE_QUIT.matches(&key) => {
            log::info!("[app] Ctrl+C");
            app.should_quit = true;
            Command::none()
        }
        Message::Resize { width, height } => {
            app.size = Size::new(width, height);
            forward(app, Message::Resize { width, height })
        }
        Message::ChangePage(target) => {
            log::info!("[app] {} -> {}", app.page.title(), target.title());
            app.page = *target;
            Command::batch([
                Command::message(resize_message(app.size)),
                app.page.init(&app.context),
            ])
        }
        other => forward(app, other),
    }
}

fn forward(app: &mut App, msg: Message) -> Command {
    let page = mem::take(&mut app.page);
    let (page, cmd) = page.update(msg, &app.context);
    app.page = page;
    cmd
}

pub(crate) fn resize_message(size: Size) -> Message {
    Message::Resize {
        width: size.width,
        height: size.height,
    }
}

/// 可输入字符（无修饰键或仅 Shift）
pub(crate) fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        crossterm::event::KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(c)
        }
        _ => None,
    }
}

impl Page {
    /// 页面变为活动页后的初始副作用
    pub fn init(&self, ctx: &Context) -> Command {
        match self {
            Page::ProjectList(page) => page.init(ctx),
            Page::Dashboard(_)
            | Page::Connect(_)
            | Page::Projects(_)
            | Page::ProjectForm(_)
            | Page::ProjectDelete(_) => Command::none(),
        }
    }

    /// 处理一条消息
    pub fn update(self, msg: Message, ctx: &Context) -> (Page, Command) {
        match self {
            Page::Dashboard(page) => lift(page.update(msg)),
            Page::Connect(page) => lift(page.update(msg, ctx)),
            Page::Projects(page) => lift(page.update(msg, ctx)),
            Page::ProjectList(page) => lift(page.update(msg, ctx)),
            Page::ProjectForm(page) => lift(page.update(msg, ctx)),
            Page::ProjectDelete(page) => lift(page.update(msg, ctx)),
        }
    }
}

fn lift<P: Into<Page>>((page, cmd): (P, Command)) -> (Page, Command) {
    (page.into(), cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::SectionMessage;
    use crate::model::{ConnectPage, ProjectsPage};
    use crate::test_utils::{context_with, disconnected_context, project};
    use crossterm::event::KeyCode;

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new(disconnected_context());
        assert!(update(&mut app, Message::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_page() {
        let mut app = App::with_page(disconnected_context(), ConnectPage::new().into());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        update(&mut app, Message::Key(key));
        assert!(app.should_quit);
    }

    #[test]
    fn resize_is_cached_and_forwarded() {
        let mut app = App::new(disconnected_context());
        update(&mut app, Message::Resize { width: 80, height: 24 });

        assert_eq!(app.size, Size::new(80, 24));
        assert!(matches!(&app.page, Page::Dashboard(d) if d.size == Size::new(80, 24)));
    }

    #[tokio::test]
    async fn change_page_sends_resize_then_init() {
        let (ctx, _) = context_with(vec![project(1, "A")]);
        let mut app = App::new(ctx);
        update(&mut app, Message::Resize { width: 120, height: 40 });

        let cmd = update(&mut app, Message::change_page(ProjectsPage::new()));
        assert!(matches!(app.page, Page::Projects(_)));

        // Projects 的 init 为空，只剩 Resize
        let messages = cmd.resolve().await;
        assert!(matches!(
            messages.as_slice(),
            [Message::Resize { width: 120, height: 40 }]
        ));
    }

    #[test]
    fn unknown_message_leaves_dashboard_unchanged() {
        let mut app = App::new(disconnected_context());
        let cmd = update(&mut app, Message::Section(SectionMessage::Pop));
        assert!(cmd.is_none());
        assert!(matches!(&app.page, Page::Dashboard(d) if d.selected == 0));
    }
}
