//! # Popcorn Portfolio - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（外部链接打开、日志）
//! - 注册自定义 Tauri commands（项目数据加载、联系表单、设置读写）
//! - 初始化应用全局状态（API 客户端、联系表单状态守卫）
//! - 生成应用上下文并启动事件循环
//!
//! ## 架构说明
//! 通过将核心逻辑放在 `lib.rs` 而非 `main.rs` 中，
//! Tauri 可以在桌面端（`main.rs`）和移动端入口之间共享此初始化代码。
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层，各页面的视图边界）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（API 客户端、配置、示例数据、表单守卫）
//! - `utils/` - 通用工具函数

mod commands;
mod models;
mod services;
mod utils;

use services::api::ApiClient;
use services::form_guard::ContactFormGuard;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 构建并运行 Tauri 应用实例。该函数完成以下工作：
/// 1. 创建 `tauri::Builder` 默认实例
/// 2. 注册所需的 Tauri 插件（外部链接打开）
/// 3. 初始化应用全局状态（API 客户端、联系表单状态守卫）
/// 4. 注册所有自定义 Tauri commands
/// 5. 在 `setup` 钩子中按需注册调试专用插件（日志）
/// 6. 生成应用上下文并启动主事件循环
///
/// # Panics
/// 如果 Tauri 应用启动失败（例如配置文件缺失或窗口创建失败），
/// 将通过 `.expect()` 触发 panic 并输出错误信息。
pub fn run() {
    tauri::Builder::default()
        // Opener 插件：在系统浏览器中打开项目的外部链接
        // 使用 OS 原生 API，避免手动拼接 shell 命令
        .plugin(tauri_plugin_opener::init())
        // === 应用全局状态初始化 ===
        // API 客户端：启动时从环境变量 API_BASE_URL（或默认地址）确定
        // 后端基础地址，之后所有请求复用同一个连接池
        .manage(ApiClient::from_env())
        // 联系表单状态守卫：串行化表单状态机的全部转换
        .manage(ContactFormGuard::new())
        // === 自定义 Tauri Commands 注册 ===
        // 所有 command 函数通过 `invoke_handler` 注册，前端通过 `invoke()` 调用
        .invoke_handler(tauri::generate_handler![
            // 项目数据 commands
            commands::projects::load_project_list,
            commands::projects::load_project_detail,
            commands::projects::load_featured_projects,
            // 联系表单 commands
            commands::contact::submit_contact_form,
            commands::contact::reset_contact_form,
            // 设置 commands
            commands::settings::read_ui_settings,
            commands::settings::save_ui_settings,
            // 外部链接 commands
            commands::links::open_project_link,
        ])
        // `setup` 闭包：在应用窗口创建之前执行的初始化钩子
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        // `tauri::generate_context!()` 宏：在编译时读取 `tauri.conf.json` 配置文件，
        // 生成包含应用名称、窗口配置、安全策略等信息的上下文对象。
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
