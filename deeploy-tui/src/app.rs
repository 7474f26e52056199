//!
//! app.rs
//! 应用主循环
//!
//! 所有消息都走同一个无界队列：
//!
//! ```text
//!     终端事件 ──handle_event──▶ ┐
//!     Command 的即时消息 ──────▶ ├──▶ mpsc 队列 ──▶ update::update ──▶ Command
//!     后台任务的结果 ──────────▶ ┘                                      │
//!                                                                        ▼
//!                                                                     dispatch
//! ```
//!
//! 启动时先投递 `[Resize(终端尺寸), 首页 init]`。
//! 每轮先把队列里的消息全部处理完，再渲染一帧，然后等待下一个事件或消息：
//!
//! loop {
//! ```text
//!     while let Ok(msg) = rx.try_recv() { dispatch(update(app, msg)) }
//!     if app.should_quit { break }
//!     terminal.draw(|f| view::render(&app, f))
//!     select! { 终端事件, 队列消息 }
//! ```
//! }
//!
//! 后台任务用 tokio::spawn 执行，结果以消息形式回到队列；
//! 主循环本身从不等待网络。
//!

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::event;
use crate::message::{Command, Message};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环，直到 `app.should_quit`
pub async fn run(terminal: &mut Term, mut app: App) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut events = EventStream::new();

    let size = terminal.size()?;
    dispatch(
        &tx,
        Command::batch([
            Command::message(update::resize_message(size)),
            update::init(&app),
        ]),
    );

    loop {
        while let Ok(msg) = rx.try_recv() {
            let cmd = update::update(&mut app, msg);
            dispatch(&tx, cmd);
        }

        if app.should_quit {
            break;
        }

        terminal.draw(|frame| view::render(&app, frame))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => {
                    if let Some(msg) = event::handle_event(event) {
                        send(&tx, msg);
                    }
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
            Some(msg) = rx.recv() => {
                let cmd = update::update(&mut app, msg);
                dispatch(&tx, cmd);
            }
        }
    }

    log::info!("Quit");
    Ok(())
}

/// 即时消息按顺序入队；异步任务各自 spawn，完成后把结果入队
fn dispatch(tx: &UnboundedSender<Message>, cmd: Command) {
    let (messages, futures) = cmd.into_parts();

    for msg in messages {
        send(tx, msg);
    }
    for future in futures {
        let tx = tx.clone();
        tokio::spawn(async move {
            send(&tx, future.await);
        });
    }
}

fn send(tx: &UnboundedSender<Message>, msg: Message) {
    // 接收端与主循环同生命周期，只有退出后才会失败
    if tx.send(msg).is_err() {
        log::debug!("Message dropped after shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn immediate_messages_precede_task_results() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        dispatch(
            &tx,
            Command::batch([
                Command::perform(async { Message::Quit }),
                Command::message(Message::Resize { width: 1, height: 2 }),
                Command::message(Message::Resize { width: 3, height: 4 }),
            ]),
        );

        assert!(matches!(rx.recv().await, Some(Message::Resize { width: 1, height: 2 })));
        assert!(matches!(rx.recv().await, Some(Message::Resize { width: 3, height: 4 })));
        assert!(matches!(rx.recv().await, Some(Message::Quit)));
    }

    #[tokio::test]
    async fn none_dispatches_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        dispatch(&tx, Command::none());
        assert!(rx.try_recv().is_err());
    }
}
