//! # 数据模型模块
//!
//! 定义应用的全部数据结构，与前端 TypeScript 类型一一对应：
//! - `project` - 作品集项目（后端 API 响应 / IPC 传输）
//! - `contact` - 联系表单消息体与表单状态机
//! - `view` - 列表页和详情页的渲染状态（tagged variant）
//! - `settings` - 持久化的界面偏好设置

pub mod contact;
pub mod project;
pub mod settings;
pub mod view;
