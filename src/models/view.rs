//! # 页面渲染状态模型
//!
//! 定义项目列表页和项目详情页的渲染状态（tagged variant），
//! 前端根据 `state` 标签字段选择渲染分支。
//!
//! ## 设计要点
//! - **Loaded 与 Fallback 是两个显式分支**，不是被吞掉的异常路径：
//!   列表页在后端失败时渲染固定的示例数据，视觉上与真实数据一致，
//!   但状态枚举保留了分支信息，测试可以断言实际走了哪条路径。
//! - 详情页将"id 不存在"和"请求失败"合并为同一个 `NotFound` 终态，
//!   与原前端行为保持一致。
//! - 每次页面挂载状态至多转换一次：`Loading → 终态`，不重试、不缓存。

use serde::{Deserialize, Serialize};

use crate::models::project::Project;

/// 项目列表页渲染状态
///
/// 状态机：`Loading → { Loaded | Fallback }`。
/// 列表页的降级策略是"永不出现空白或错误页面"：
/// 任何服务失败都替换为固定的示例项目集。
///
/// IPC 序列化形如 `{ "state": "loaded", "data": [...] }`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum ProjectListState {
    /// 请求在途：前端在 invoke 返回前的初始渲染分支
    Loading,

    /// 后端返回成功：按响应顺序逐项渲染项目卡片
    Loaded(Vec<Project>),

    /// 后端失败（任意非 2xx 状态或传输错误）：渲染固定示例数据，
    /// 卡片布局与 Loaded 完全相同
    Fallback(Vec<Project>),
}

impl ProjectListState {
    /// 将列表请求结果解析为终态
    ///
    /// # 参数
    /// - `result` - 数据服务的原始请求结果
    /// - `fallback` - 失败时替换展示的固定示例项目集
    ///
    /// # 返回值
    /// - `Ok(projects)` → `Loaded`，保持响应中的项目顺序
    /// - `Err(_)` → `Fallback`，错误原因在此处丢弃（由调用方负责记日志）
    pub fn resolve<E>(result: Result<Vec<Project>, E>, fallback: Vec<Project>) -> Self {
        match result {
            Ok(projects) => Self::Loaded(projects),
            Err(_) => Self::Fallback(fallback),
        }
    }

    /// 返回当前状态携带的项目列表（Loading 为空）
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loading => &[],
            Self::Loaded(projects) | Self::Fallback(projects) => projects,
        }
    }
}

/// 项目详情页渲染状态
///
/// 状态机：`Loading → { Loaded | NotFound }`。
/// 详情页没有示例数据降级（与列表页的刻意不对称）：
/// 查不到就渲染 "Project Not Found" 和返回列表页的链接。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "camelCase")]
pub enum ProjectDetailState {
    /// 请求在途
    Loading,

    /// 后端返回成功：渲染完整的项目详情
    Loaded(Project),

    /// 查找失败：覆盖"无此 id"和"请求失败"两种情况（合并为同一终态）
    NotFound,
}

impl ProjectDetailState {
    /// 将单项查找结果解析为终态
    ///
    /// # 返回值
    /// - `Ok(project)` → `Loaded`
    /// - `Err(_)` → `NotFound`（不区分失败原因）
    pub fn resolve<E>(result: Result<Project, E>) -> Self {
        match result {
            Ok(project) => Self::Loaded(project),
            Err(_) => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    fn project(id: i64, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            image_url: "/placeholder.png".to_string(),
            tags: vec!["Rust".to_string(), "Tauri".to_string()],
            link: "https://example.com".to_string(),
            github_link: None,
        }
    }

    #[test]
    fn test_list_success_preserves_response_order() {
        let response = vec![project(7, "B"), project(3, "A"), project(9, "C")];
        let state = ProjectListState::resolve::<String>(
            Ok(response.clone()),
            fixtures::sample_projects(),
        );

        // 成功响应与渲染集一一对应且顺序不变
        assert_eq!(state, ProjectListState::Loaded(response));
    }

    #[test]
    fn test_list_failure_renders_fixed_fallback_set() {
        let state = ProjectListState::resolve(
            Err("HTTP 503".to_string()),
            fixtures::sample_projects(),
        );

        match &state {
            ProjectListState::Fallback(projects) => {
                // 降级集合是固定的示例数据，永远非空
                assert_eq!(projects, &fixtures::sample_projects());
                assert!(!projects.is_empty());
            }
            other => panic!("列表失败时必须进入 Fallback 分支，实际为 {other:?}"),
        }
    }

    #[test]
    fn test_list_projects_accessor() {
        assert!(ProjectListState::Loading.projects().is_empty());

        let state = ProjectListState::resolve(
            Err(()),
            fixtures::sample_projects(),
        );
        assert_eq!(state.projects().len(), fixtures::sample_projects().len());
    }

    #[test]
    fn test_detail_success_carries_payload_exactly() {
        let mut p = project(42, "Movie Database");
        p.tags = vec!["React".into(), "API".into(), "Tailwind".into()];
        p.github_link = Some("https://github.com/example/movie-db".to_string());

        let state = ProjectDetailState::resolve::<String>(Ok(p.clone()));
        match state {
            ProjectDetailState::Loaded(loaded) => {
                assert_eq!(loaded.title, p.title);
                // 标签顺序与响应一致
                assert_eq!(loaded.tags, p.tags);
                assert_eq!(loaded.link, p.link);
                assert_eq!(loaded.github_link, p.github_link);
            }
            other => panic!("详情成功时必须进入 Loaded 分支，实际为 {other:?}"),
        }
    }

    #[test]
    fn test_detail_failure_collapses_to_not_found() {
        // 无论失败原因（404 还是网络错误）都进入同一个 NotFound 终态
        let not_found = ProjectDetailState::resolve(Err("HTTP 404".to_string()));
        let transport = ProjectDetailState::resolve(Err("connection refused".to_string()));
        assert_eq!(not_found, ProjectDetailState::NotFound);
        assert_eq!(transport, ProjectDetailState::NotFound);
    }

    #[test]
    fn test_list_state_ipc_tag_shape() {
        // 前端依赖 { state, data } 的标签结构选择渲染分支
        let json = serde_json::to_value(ProjectListState::Fallback(fixtures::sample_projects()))
            .expect("序列化渲染状态失败");
        assert_eq!(json["state"], "fallback");
        assert!(json["data"].is_array());

        let json = serde_json::to_value(ProjectDetailState::NotFound)
            .expect("序列化渲染状态失败");
        assert_eq!(json["state"], "notFound");
    }
}
