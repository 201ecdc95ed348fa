use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::ViewStores;
use crate::upstream::{Upstream, create_upstream};

pub struct StartupContext {
    pub upstream: Arc<dyn Upstream>,
    pub views: ViewStores,
}

/// 准备服务器启动的上下文
/// 包括上游客户端和各页面的视图状态
pub fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let upstream = create_upstream(&config.upstream)?;
    warn!("Upstream client initialized for {}", config.upstream.base_url);

    if config.upstream.bearer_token.trim().is_empty() {
        debug!("No bearer token configured, upstream requests are anonymous");
    }

    let views = ViewStores::new(config.views.clone());
    debug!(
        "View stores ready (page size {}, max {}, up to {} views idle for {}s)",
        config.views.default_page_size,
        config.views.max_page_size,
        config.views.max_views,
        config.views.idle_seconds
    );

    Ok(StartupContext { upstream, views })
}
