//! # 项目数据模型
//!
//! 定义作品集项目（Project）的 Rust 结构体，
//! 对应前端 TypeScript 中的 `Project` 接口和后端 API 的 JSON 响应。
//!
//! 该结构体通过 `serde` 的 Serialize/Deserialize 特征实现：
//! - 后端 API 反序列化（JSON → Rust）：`GET /projects` 和 `GET /projects/{id}` 的响应体
//! - Tauri IPC 序列化（Rust → JS）：通过 `Serialize` 将数据传输到前端

use serde::{Deserialize, Serialize};

/// 作品集项目数据结构
///
/// 表示一个展示在作品集中的项目。项目数据由后端 API 返回，
/// 一经获取不再修改；页面切换时重新请求，不做跨页面缓存。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface Project {
///   id: number;
///   title: string;
///   description: string;
///   imageUrl: string;
///   tags: string[];
///   link: string;
///   githubLink?: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 项目 ID：由后端分配的唯一标识，也是列表页和详情页之间导航的唯一键
    /// （详情页路由 `/projects/{id}` 中的 id 即为此值）
    pub id: i64,

    /// 项目标题
    pub title: String,

    /// 项目简介
    pub description: String,

    /// 项目配图：外部 URL 或本地占位图路径（如 "/placeholder.png"）
    pub image_url: String,

    /// 技术标签：有序列表，渲染时保持后端返回的顺序
    pub tags: Vec<String>,

    /// 在线演示链接（外部 URL）
    pub link: String,

    /// GitHub 仓库链接：可选字段，缺省时前端不渲染 "View Code" 按钮
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}
