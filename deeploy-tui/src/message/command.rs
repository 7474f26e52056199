//! 副作用描述

use std::fmt;
use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::Message;

/// Update 返回的副作用，由运行时执行
#[derive(Default)]
pub enum Command {
    /// 无副作用
    #[default]
    None,
    /// 立即投递一条消息
    Message(Message),
    /// 异步任务，完成时投递恰好一条消息
    Perform(BoxFuture<'static, Message>),
    /// 多个副作用
    Batch(Vec<Command>),
}

impl Command {
    pub fn none() -> Self {
        Self::None
    }

    pub fn message(msg: Message) -> Self {
        Self::Message(msg)
    }

    pub fn perform<F>(future: F) -> Self
    where
        F: Future<Output = Message> + Send + 'static,
    {
        Self::Perform(future.boxed())
    }

    /// 合并多个副作用：嵌套的 Batch 被展开，None 被丢弃
    pub fn batch(commands: impl IntoIterator<Item = Command>) -> Self {
        let mut flat = Vec::new();
        for command in commands {
            command.flatten_into(&mut flat);
        }
        match flat.len() {
            0 => Self::None,
            1 => flat.remove(0),
            _ => Self::Batch(flat),
        }
    }

    fn flatten_into(self, out: &mut Vec<Command>) {
        match self {
            Self::None => {}
            Self::Batch(inner) => {
                for command in inner {
                    command.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// 拆成立即消息（按顺序）和异步任务（按顺序）
    pub fn into_parts(self) -> (Vec<Message>, Vec<BoxFuture<'static, Message>>) {
        let mut flat = Vec::new();
        self.flatten_into(&mut flat);

        let mut messages = Vec::new();
        let mut futures = Vec::new();
        for command in flat {
            match command {
                Self::Message(msg) => messages.push(msg),
                Self::Perform(future) => futures.push(future),
                Self::None | Self::Batch(_) => {}
            }
        }
        (messages, futures)
    }

    /// 在当前任务中执行全部副作用，返回它们投递的消息
    ///
    /// 顺序与运行时一致：先是立即消息，然后是各个 future 的结果。
    /// 用于无终端驱动（测试、脚本）。
    pub async fn resolve(self) -> Vec<Message> {
        let (mut messages, futures) = self.into_parts();
        for future in futures {
            messages.push(future.await);
        }
        messages
    }
}

impl From<Message> for Command {
    fn from(msg: Message) -> Self {
        Self::Message(msg)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Message(msg) => f.debug_tuple("Message").field(msg).finish(),
            Self::Perform(_) => f.write_str("Perform(..)"),
            Self::Batch(commands) => f.debug_tuple("Batch").field(commands).finish(),
        }
    }
}
