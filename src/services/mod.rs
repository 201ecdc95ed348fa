//! 页面服务
//!
//! 每个页面一个服务：拉取上游快照并存入对应的 `ViewStore`，
//! 再把快照投影成页面视图模型，最后渲染为 `ApiResponse`。

pub mod activity_logs;
pub mod classes;
pub mod dashboard;
pub mod evaluations;
pub mod password;
pub mod periods;
pub mod render;
pub mod school_years;
pub mod teachers;
pub mod user_accounts;
pub mod views;

use std::sync::Arc;

use actix_web::{HttpRequest, web};

use crate::upstream::Upstream;

pub use activity_logs::ActivityLogService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use evaluations::EvaluationService;
pub use password::PasswordService;
pub use periods::PeriodService;
pub use school_years::SchoolYearService;
pub use teachers::TeacherService;
pub use user_accounts::UserAccountService;
pub use views::ViewStores;

/// 从 app_data 中取出上游客户端
pub(crate) fn upstream_from(request: &HttpRequest) -> Arc<dyn Upstream> {
    request
        .app_data::<web::Data<Arc<dyn Upstream>>>()
        .expect("Upstream not found in app data")
        .get_ref()
        .clone()
}

/// 从 app_data 中取出视图状态
pub(crate) fn views_from(request: &HttpRequest) -> web::Data<ViewStores> {
    request
        .app_data::<web::Data<ViewStores>>()
        .expect("ViewStores not found in app data")
        .clone()
}

/// 为服务生成 `new_lazy` / `get_upstream` / `get_views`
///
/// 服务本身不持有状态，上游客户端和视图状态都在 app_data 中。
macro_rules! lazy_service {
    ($name:ident) => {
        pub struct $name;

        impl $name {
            pub fn new_lazy() -> Self {
                Self
            }

            pub(crate) fn get_upstream(
                &self,
                request: &actix_web::HttpRequest,
            ) -> std::sync::Arc<dyn $crate::upstream::Upstream> {
                $crate::services::upstream_from(request)
            }

            pub(crate) fn get_views(
                &self,
                request: &actix_web::HttpRequest,
            ) -> actix_web::web::Data<$crate::services::ViewStores> {
                $crate::services::views_from(request)
            }
        }
    };
}

pub(crate) use lazy_service;

/// 装配完整应用用于页面测试，`$fake` 为 `Arc<FakeUpstream>`
#[cfg(test)]
macro_rules! init_test_app {
    ($fake:expr) => {{
        let upstream: std::sync::Arc<dyn $crate::upstream::Upstream> = $fake.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler($crate::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler($crate::utils::json_error_handler),
                )
                .app_data(actix_web::web::Data::new(upstream))
                .app_data(actix_web::web::Data::new($crate::services::ViewStores::new(
                    $crate::config::ViewConfig::default(),
                )))
                .configure($crate::routes::configure_all_routes),
        )
        .await
    }};
}

#[cfg(test)]
pub(crate) use init_test_app;
