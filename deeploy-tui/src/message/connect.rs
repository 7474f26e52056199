//! 连接页消息

/// 连接校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectMessage {
    /// 凭证有效且已写入配置文件
    Connected,
    /// 校验或保存失败
    Failed(String),
}
