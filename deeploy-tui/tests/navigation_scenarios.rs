//! 端到端导航场景：真实的 `ApiProjectService` 对接 wiremock 服务器

mod common;

use std::sync::Arc;

use common::Harness;
use crossterm::event::KeyCode;
use deeploy_client::{ClientConfig, ConfigStore, Project, ProjectId};
use deeploy_tui::backend::{ApiProjectService, MockProjectService};
use deeploy_tui::message::Message;
use deeploy_tui::model::{Page, ProjectsPage};
use ratatui::layout::Size;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 项目分区 + 临时配置文件；`server` 为 `None` 时没有配置
async fn section(server: Option<&MockServer>) -> (Harness, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    if let Some(server) = server {
        store
            .save(&ClientConfig::new(server.uri(), "T"))
            .await
            .unwrap();
    }
    let service = Arc::new(ApiProjectService::new(store));
    (Harness::with_page(service, ProjectsPage::new()), dir)
}

async fn serve_projects(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn abc() -> serde_json::Value {
    json!([
        { "id": 1, "title": "A" },
        { "id": 2, "title": "B" },
        { "id": 3, "title": "C" }
    ])
}

#[tokio::test]
async fn fresh_start_without_config_lands_on_connect() {
    let (mut h, _dir) = section(None).await;

    h.boot(120, 40).await;

    match &h.app.page {
        Page::Connect(connect) => assert_eq!(connect.size, Size::new(120, 40)),
        other => panic!("expected connect page, got {}", other.title()),
    }
}

#[tokio::test]
async fn list_navigation_trajectory() {
    let server = MockServer::start().await;
    serve_projects(&server, abc()).await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    assert_eq!(h.titles(), vec!["A", "B", "C"]);

    let mut trajectory = vec![h.list().selected];
    for key in ['j', 'j', 'k'] {
        h.press(KeyCode::Char(key)).await;
        trajectory.push(h.list().selected);
    }
    assert_eq!(trajectory, vec![0, 1, 2, 1]);
}

#[tokio::test]
async fn create_round_trip() {
    let server = MockServer::start().await;
    serve_projects(&server, abc()).await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(body_partial_json(json!({ "title": "D" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 4, "title": "D" })))
        .expect(1)
        .mount(&server)
        .await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    h.press(KeyCode::Char('j')).await;

    h.press(KeyCode::Char('n')).await;
    assert_eq!(h.depth(), 2);
    assert!(matches!(h.active(), Page::ProjectForm(_)));
    assert!(h.screen_contains("New Project"));

    h.type_text("D").await;
    h.press(KeyCode::Enter).await;

    assert_eq!(h.depth(), 1);
    assert_eq!(h.titles(), vec!["A", "B", "C", "D"]);
    assert_eq!(h.list().selected, 1);
    assert!(h.screen_contains("D"));
}

#[tokio::test]
async fn blank_title_stays_on_form() {
    let server = MockServer::start().await;
    serve_projects(&server, abc()).await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    h.press(KeyCode::Char('n')).await;
    h.press(KeyCode::Enter).await;

    assert_eq!(h.depth(), 2);
    assert!(h.screen_contains("Title is required"));
    assert_eq!(h.pending(), 0);
}

#[tokio::test]
async fn edit_round_trip() {
    let server = MockServer::start().await;
    serve_projects(&server, abc()).await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/2"))
        .and(body_partial_json(json!({ "title": "Bee" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 2, "title": "Bee" })))
        .expect(1)
        .mount(&server)
        .await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    h.press(KeyCode::Char('j')).await;
    h.press(KeyCode::Char('e')).await;
    assert!(h.screen_contains("Edit Project"));

    h.type_text("ee").await;
    h.press(KeyCode::Enter).await;

    assert_eq!(h.depth(), 1);
    assert_eq!(h.titles(), vec!["A", "Bee", "C"]);
}

#[tokio::test]
async fn delete_last_project_shows_empty_state() {
    let server = MockServer::start().await;
    serve_projects(&server, json!([{ "id": 7, "title": "G" }])).await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    h.press(KeyCode::Char('d')).await;
    assert!(h.screen_contains("Delete project?"));

    h.press(KeyCode::Char('y')).await;

    assert_eq!(h.depth(), 1);
    assert!(h.list().items.is_empty());
    assert_eq!(h.list().selected, 0);
    assert!(h.screen_contains("No projects yet"));

    // 空列表上的移动和编辑都不起作用
    h.press(KeyCode::Char('j')).await;
    h.press(KeyCode::Char('e')).await;
    assert_eq!(h.list().selected, 0);
    assert_eq!(h.depth(), 1);
}

#[tokio::test]
async fn unauthorized_mid_session_switches_to_connect_and_drops_late_results() {
    let server = MockServer::start().await;
    // 启动时的加载和第一次刷新成功，之后全部 401
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(abc()))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;
    assert_eq!(h.titles(), vec!["A", "B", "C"]);

    h.send(Message::char('r'));
    let earlier = h.take_deferred();
    h.send(Message::char('r'));
    let later = h.take_deferred();

    // 先发出的请求先拿到 200，但结果晚到
    let mut late = Vec::new();
    for future in earlier {
        late.push(future.await);
    }
    for future in later {
        h.send(future.await);
    }
    match &h.app.page {
        Page::Connect(connect) => {
            assert_eq!(connect.size, Size::new(120, 40));
            assert!(connect.error.is_none());
        }
        other => panic!("expected connect page, got {}", other.title()),
    }

    for msg in late {
        h.send(msg);
    }
    assert!(matches!(h.app.page, Page::Connect(_)));
    assert!(h.screen_contains("Connect to server"));
}

#[tokio::test]
async fn server_error_keeps_stack_and_shows_error_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is locked"))
        .mount(&server)
        .await;
    let (mut h, _dir) = section(Some(&server)).await;

    h.boot(120, 40).await;

    assert_eq!(h.depth(), 1);
    assert!(h.list().error.is_some());
    // 卡片内折行
    assert!(h.screen_contains("HTTP 500"));
    assert!(h.screen_contains("locked"));
}

#[tokio::test]
async fn resize_while_fetch_is_in_flight() {
    let service = Arc::new(MockProjectService::with_projects(vec![Project {
        id: ProjectId::from(1),
        title: "A".to_string(),
        description: String::new(),
    }]));
    let mut h = Harness::with_page(service, ProjectsPage::new());

    h.send(Message::Resize { width: 80, height: 24 });
    assert_eq!(h.pending(), 1);

    h.send(Message::Resize { width: 120, height: 40 });
    h.settle().await;

    assert_eq!(h.list().size, Size::new(120, 40));
    assert_eq!(h.titles(), vec!["A"]);
    let screen = h.screen();
    assert_eq!(screen.len(), 40);
    assert!(screen.iter().all(|line| unicode_width(line) == 120));
}

#[tokio::test]
async fn page_exposed_by_pop_sees_resize_that_happened_above_it() {
    let service = Arc::new(MockProjectService::with_projects(vec![]));
    let mut h = Harness::with_page(service, ProjectsPage::new());
    h.boot(80, 24).await;

    h.press(KeyCode::Char('n')).await;
    h.type_text("web").await;
    h.send(Message::key(KeyCode::Enter));
    assert_eq!(h.pending(), 1);

    // 表单在栈顶时终端变大，列表页收不到这次 Resize
    h.send(Message::Resize { width: 120, height: 40 });
    h.settle().await;

    assert_eq!(h.depth(), 1);
    assert_eq!(h.titles(), vec!["web"]);
    assert_eq!(h.list().size, Size::new(120, 40));
}

#[tokio::test]
async fn connect_then_browse() {
    let server = MockServer::start().await;
    serve_projects(&server, abc()).await;
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    let mut h = Harness::new(Arc::new(ApiProjectService::new(store.clone())));

    h.boot(100, 30).await;
    h.press(KeyCode::Char('c')).await;
    assert!(matches!(h.app.page, Page::Connect(_)));

    let address = server.uri().trim_start_matches("http://").to_string();
    h.type_text(&address).await;
    h.press(KeyCode::Tab).await;
    h.type_text("T").await;
    h.press(KeyCode::Enter).await;

    assert!(matches!(h.app.page, Page::Dashboard(_)));
    let saved = store.load().await.unwrap();
    assert_eq!(saved.token, "T");

    h.press(KeyCode::Char('p')).await;
    assert_eq!(h.titles(), vec!["A", "B", "C"]);

    // 根页面上 Esc 不离开分区，b 回到首页
    h.press(KeyCode::Esc).await;
    assert_eq!(h.depth(), 1);
    h.press(KeyCode::Char('b')).await;
    assert!(matches!(h.app.page, Page::Dashboard(_)));
}

fn unicode_width(line: &str) -> usize {
    deeploy_tui::view::layout::line_width(&ratatui::text::Line::from(line.to_string()))
}
