//! EduConnect Portal - 学校管理页面的读模型服务
//!
//! 基于 Actix Web 构建，位于前端页面与上游 REST 后端之间：
//! 并发拉取实体集合，解析交叉引用，投影为页面视图模型。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 上游实体、请求与视图模型定义
//! - `readmodel`: 拉取、解析、分页与课表投影
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 页面服务层
//! - `upstream`: 上游 REST 客户端
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod readmodel;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod upstream;
pub mod utils;
