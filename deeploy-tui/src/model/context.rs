//! Update 层构造副作用时需要的服务句柄

use std::sync::Arc;

use crate::backend::ProjectService;

/// 传入每次 `init` / `update`，页面本身不持有服务
#[derive(Clone)]
pub struct Context {
    service: Arc<dyn ProjectService>,
}

impl Context {
    pub fn new(service: Arc<dyn ProjectService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> Arc<dyn ProjectService> {
        Arc::clone(&self.service)
    }
}
