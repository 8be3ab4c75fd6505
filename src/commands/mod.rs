//! # Tauri Commands 模块
//!
//! IPC 接口层：前端通过 `invoke()` 调用的全部 command 处理函数。
//! command 是各页面的视图边界，数据服务的失败在这里被解析为
//! 渲染状态，不向前端抛出异常。
//!
//! - `projects` - 项目列表页 / 详情页 / 首页精选的数据加载
//! - `contact` - 联系表单的提交与重置
//! - `settings` - 界面偏好设置的读写
//! - `links` - 外部链接打开

pub mod contact;
pub mod links;
pub mod projects;
pub mod settings;
