//! # 联系表单 Tauri Commands
//!
//! 提供联系表单相关的 Tauri command 处理函数：
//! - `submit_contact_form` - 提交表单并驱动状态机走完一次转换
//! - `reset_contact_form` - 联系页面重新挂载时重置状态机

use tauri::State;

use crate::models::contact::{ContactFormState, ContactMessage};
use crate::services::api::ApiClient;
use crate::services::form_guard::ContactFormGuard;

/// 提交联系表单
///
/// 驱动表单状态机完成一次完整转换：
/// 1. 经守卫进入 `Submitting`（在途或已成功时直接返回当前状态，不发请求）
/// 2. 以 JSON 体 `{name, email, message}` POST 到 `{base}/contact`
/// 3. 2xx → `Success`（字段清空、本次挂载不再接受提交）；
///    任意失败 → `Error`（字段保留、允许重试）
///
/// # 参数
/// - `message` - 表单三个字段构成的消息体，发送后即丢弃
///
/// # 返回值
/// 提交后的表单渲染状态，前端据此更新按钮和内联提示
#[tauri::command]
pub async fn submit_contact_form(
    message: ContactMessage,
    api: State<'_, ApiClient>,
    form: State<'_, ContactFormGuard>,
) -> Result<ContactFormState, String> {
    if !form.begin_submit(&message)? {
        // 在途或已成功：拒绝提交，前端拿到当前状态即可正确渲染
        return form.state();
    }

    match api.send_contact(&message).await {
        Ok(()) => form.resolve_success(),
        Err(e) => {
            log::warn!("联系表单提交失败: {}", e);
            form.resolve_error(e.to_string())
        }
    }
}

/// 重置联系表单状态机
///
/// 联系页面挂载时调用，使上一次挂载的终态（Success/Error）不泄漏
/// 到新的挂载周期。
#[tauri::command]
pub fn reset_contact_form(form: State<'_, ContactFormGuard>) -> Result<(), String> {
    form.reset()
}
