//! 无终端驱动：消息队列 + `update::update` + `Command`
//!
//! 与 `app::run` 的区别只在于异步任务不会自动执行：
//! `settle` 按创建顺序逐个完成，`take_deferred` 交给测试自己决定顺序。

#![allow(dead_code)]

use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

use crossterm::event::KeyCode;
use deeploy_tui::backend::ProjectService;
use deeploy_tui::message::{Command, Message};
use deeploy_tui::model::{App, Context, Page, ProjectListPage, ProjectsPage};
use deeploy_tui::update;
use futures::future::BoxFuture;

pub struct Harness {
    pub app: App,
    queue: VecDeque<Message>,
    deferred: Vec<BoxFuture<'static, Message>>,
}

impl Harness {
    pub fn new(service: Arc<dyn ProjectService>) -> Self {
        Self::from_app(App::new(Context::new(service)))
    }

    pub fn with_page(service: Arc<dyn ProjectService>, page: impl Into<Page>) -> Self {
        Self::from_app(App::with_page(Context::new(service), page.into()))
    }

    fn from_app(app: App) -> Self {
        Self {
            app,
            queue: VecDeque::new(),
            deferred: Vec::new(),
        }
    }

    /// 与 `app::run` 启动时相同：先 Resize，再执行首页 init
    pub async fn boot(&mut self, width: u16, height: u16) {
        let init = update::init(&self.app);
        self.run(Command::batch([
            Command::message(Message::Resize { width, height }),
            init,
        ]));
        self.settle().await;
    }

    /// 投递一条消息并处理所有即时后续消息；异步任务留在队列外
    pub fn send(&mut self, msg: Message) {
        self.queue.push_back(msg);
        self.pump();
    }

    /// 按键并等待所有副作用完成
    pub async fn press(&mut self, code: KeyCode) {
        self.send(Message::key(code));
        self.settle().await;
    }

    pub async fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c)).await;
        }
    }

    /// 按创建顺序完成所有任务，直到不再产生新任务
    pub async fn settle(&mut self) {
        self.pump();
        while !self.deferred.is_empty() {
            for future in mem::take(&mut self.deferred) {
                let msg = future.await;
                self.queue.push_back(msg);
                self.pump();
            }
        }
    }

    /// 取走尚未完成的任务
    pub fn take_deferred(&mut self) -> Vec<BoxFuture<'static, Message>> {
        mem::take(&mut self.deferred)
    }

    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    fn pump(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            let cmd = update::update(&mut self.app, msg);
            self.run(cmd);
        }
    }

    fn run(&mut self, cmd: Command) {
        let (messages, futures) = cmd.into_parts();
        self.queue.extend(messages);
        self.deferred.extend(futures);
    }

    pub fn section(&self) -> &ProjectsPage {
        match &self.app.page {
            Page::Projects(section) => section,
            other => panic!("expected the projects section, got {}", other.title()),
        }
    }

    pub fn depth(&self) -> usize {
        self.section().stack.len()
    }

    pub fn active(&self) -> &Page {
        self.section().stack.active().expect("empty stack")
    }

    /// 栈底的列表页
    pub fn list(&self) -> &ProjectListPage {
        match self.section().stack.pages().first() {
            Some(Page::ProjectList(list)) => list,
            other => panic!("expected a list at the bottom of the stack, got {other:?}"),
        }
    }

    pub fn titles(&self) -> Vec<String> {
        self.list().items.iter().map(|p| p.title.clone()).collect()
    }

    /// 当前画面的纯文本
    pub fn screen(&self) -> Vec<String> {
        self.app
            .page
            .view()
            .lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    pub fn screen_contains(&self, needle: &str) -> bool {
        self.screen().iter().any(|line| line.contains(needle))
    }
}
