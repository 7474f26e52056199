//! 连接页状态

use deeploy_client::ClientConfig;
use ratatui::layout::Size;

use super::TextInput;

/// 连接页的输入焦点
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectField {
    #[default]
    Server,
    Token,
}

impl ConnectField {
    pub fn next(self) -> Self {
        match self {
            ConnectField::Server => ConnectField::Token,
            ConnectField::Token => ConnectField::Server,
        }
    }
}

/// 连接页状态
#[derive(Debug, Clone, Default)]
pub struct ConnectPage {
    pub server: TextInput,
    pub token: TextInput,
    pub focus: ConnectField,
    /// 正在校验凭证
    pub connecting: bool,
    /// 校验或输入错误
    pub error: Option<String>,
    pub size: Size,
}

impl ConnectPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前焦点所在的输入框
    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            ConnectField::Server => &mut self.server,
            ConnectField::Token => &mut self.token,
        }
    }

    /// 由输入框构造配置，字段为空时返回错误信息
    pub fn config(&self) -> Result<ClientConfig, &'static str> {
        if self.server.is_blank() {
            return Err("Server is required");
        }
        if self.token.is_blank() {
            return Err("Token is required");
        }
        Ok(ClientConfig::new(self.server.trimmed(), self.token.trimmed()))
    }
}
