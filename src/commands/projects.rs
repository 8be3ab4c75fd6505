//! # 项目页面 Tauri Commands
//!
//! 提供项目数据相关的 Tauri command 处理函数：
//! - `load_project_list` - 列表页挂载时加载全部项目（失败时示例数据降级）
//! - `load_project_detail` - 详情页挂载时按 id 加载单个项目
//! - `load_featured_projects` - 首页精选区的固定示例项目
//!
//! command 层是各页面的降级边界：数据服务的任何失败都在这里
//! 被解析为一个渲染状态返回，不向前端抛出异常。

use tauri::State;

use crate::models::project::Project;
use crate::models::view::{ProjectDetailState, ProjectListState};
use crate::services::api::ApiClient;
use crate::services::fixtures;

/// 加载项目列表（列表页挂载时调用一次）
///
/// 请求 `GET {base}/projects`，结果解析为列表页渲染状态：
/// - 成功 → `Loaded`，项目顺序与响应一致
/// - 任意失败（非 2xx 或传输错误）→ `Fallback`，携带固定示例集
///
/// 列表页永不渲染空白或错误页面；降级仅记录一条 warn 日志。
///
/// # 返回值
/// 列表页渲染状态（总是 `Ok`，失败已在内部降级）
#[tauri::command]
pub async fn load_project_list(
    api: State<'_, ApiClient>,
) -> Result<ProjectListState, String> {
    let result = api.list_projects().await;

    if let Err(e) = &result {
        // 降级不向用户暴露错误，仅留痕
        log::warn!("项目列表请求失败，使用示例数据降级: {}", e);
    }

    Ok(ProjectListState::resolve(result, fixtures::sample_projects()))
}

/// 按 id 加载单个项目（详情页挂载时调用一次）
///
/// 请求 `GET {base}/projects/{id}`，`id` 来自详情页路由
/// `/projects/{id}`，原样传入查找，不做任何转换。
///
/// 详情页没有示例数据降级："无此 id" 和 "请求失败" 统一解析为
/// `NotFound`，前端渲染 "Project Not Found" 和返回列表页的链接。
///
/// # 参数
/// - `id` - 路由中的项目标识（不透明字符串）
#[tauri::command]
pub async fn load_project_detail(
    id: String,
    api: State<'_, ApiClient>,
) -> Result<ProjectDetailState, String> {
    let result = api.get_project(&id).await;

    if let Err(e) = &result {
        log::warn!("项目详情请求失败 (id={}): {}", id, e);
    }

    Ok(ProjectDetailState::resolve(result))
}

/// 返回首页精选区的固定示例项目（3 项）
///
/// 首页精选区不请求后端，始终渲染固定数据。
#[tauri::command]
pub fn load_featured_projects() -> Vec<Project> {
    fixtures::featured_projects()
}
