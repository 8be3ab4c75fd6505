//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `api` - 后端 API 客户端：项目列表、项目详情、联系表单提交
//! - `config` - API 基础地址解析（环境变量 `API_BASE_URL`）
//! - `fixtures` - 固定示例项目集：列表页降级数据和首页精选数据
//! - `form_guard` - 联系表单状态守卫（managed state，串行化状态转换）

pub mod api;
pub mod config;
pub mod fixtures;
pub mod form_guard;
