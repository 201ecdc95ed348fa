pub mod activity_logs;

pub mod classes;

pub mod dashboard;

pub mod evaluations;

pub mod password;

pub mod periods;

pub mod school_years;

pub mod teachers;

pub mod user_accounts;

use actix_web::web;

pub use activity_logs::configure_activity_logs_routes;
pub use classes::configure_classes_routes;
pub use dashboard::configure_dashboard_routes;
pub use evaluations::configure_evaluations_routes;
pub use password::configure_password_routes;
pub use periods::configure_periods_routes;
pub use school_years::configure_school_years_routes;
pub use teachers::configure_teachers_routes;
pub use user_accounts::configure_user_accounts_routes;

/// 注册全部页面路由
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_classes_routes)
        .configure(configure_teachers_routes)
        .configure(configure_user_accounts_routes)
        .configure(configure_school_years_routes)
        .configure(configure_evaluations_routes)
        .configure(configure_activity_logs_routes)
        .configure(configure_periods_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_password_routes);
}
