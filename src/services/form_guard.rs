//! # 联系表单状态守卫
//!
//! 持有联系表单在一次页面挂载期间的状态机，作为 Tauri managed state
//! 注册，保证所有状态转换经过同一个入口：
//! - 提交在途（Submitting）和已成功（Success）时拒绝新的提交
//! - 成功后清空字段、失败后保留字段的策略由内部的 `ContactForm` 实现
//!
//! ## 线程安全
//! 使用 `std::sync::RwLock` 保证多线程安全访问。
//! Tauri 的 command 可能在不同线程上并发执行，锁保证同一时刻
//! 至多一次提交能够进入 Submitting 状态。

use std::sync::RwLock;

use crate::models::contact::{ContactForm, ContactFormState, ContactMessage};

/// 锁被污染时返回的错误信息
const LOCK_POISONED: &str = "联系表单状态锁被污染";

/// 联系表单状态守卫
///
/// 通过 Tauri 的 `manage()` 方法注册为应用状态，
/// command 函数通过 `State<ContactFormGuard>` 参数注入访问。
pub struct ContactFormGuard {
    /// 当前挂载的表单模型
    form: RwLock<ContactForm>,
}

impl ContactFormGuard {
    /// 创建一个空白表单守卫（Idle 状态）
    pub fn new() -> Self {
        Self {
            form: RwLock::new(ContactForm::new()),
        }
    }

    /// 尝试开始一次提交
    ///
    /// # 返回值
    /// - `Ok(true)` - 已进入 Submitting，调用方应继续执行实际请求
    /// - `Ok(false)` - 当前状态不允许提交（在途或已成功），表单不变
    ///
    /// # 错误
    /// 锁被污染时返回错误信息
    pub fn begin_submit(&self, data: &ContactMessage) -> Result<bool, String> {
        let mut form = self.form.write().map_err(|_| LOCK_POISONED.to_string())?;
        Ok(form.begin_submit(data))
    }

    /// 记录提交成功（清空字段）并返回新的渲染状态
    pub fn resolve_success(&self) -> Result<ContactFormState, String> {
        let mut form = self.form.write().map_err(|_| LOCK_POISONED.to_string())?;
        form.resolve_success();
        Ok(form.state.clone())
    }

    /// 记录提交失败（保留字段）并返回新的渲染状态
    pub fn resolve_error(&self, message: String) -> Result<ContactFormState, String> {
        let mut form = self.form.write().map_err(|_| LOCK_POISONED.to_string())?;
        form.resolve_error(message);
        Ok(form.state.clone())
    }

    /// 重置为空白表单（联系页面重新挂载时调用）
    pub fn reset(&self) -> Result<(), String> {
        let mut form = self.form.write().map_err(|_| LOCK_POISONED.to_string())?;
        form.reset();
        Ok(())
    }

    /// 当前渲染状态的快照
    pub fn state(&self) -> Result<ContactFormState, String> {
        let form = self.form.read().map_err(|_| LOCK_POISONED.to_string())?;
        Ok(form.state.clone())
    }
}

impl Default for ContactFormGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "hello".to_string(),
        }
    }

    #[test]
    fn test_guard_full_success_cycle() {
        let guard = ContactFormGuard::new();
        assert_eq!(guard.state().unwrap(), ContactFormState::Idle);

        assert!(guard.begin_submit(&sample_message()).unwrap());
        assert_eq!(guard.state().unwrap(), ContactFormState::Submitting);

        let state = guard.resolve_success().unwrap();
        assert_eq!(state, ContactFormState::Success);

        // Success 终态拒绝再次提交
        assert!(!guard.begin_submit(&sample_message()).unwrap());
    }

    #[test]
    fn test_guard_error_allows_resubmission() {
        let guard = ContactFormGuard::new();
        assert!(guard.begin_submit(&sample_message()).unwrap());

        let state = guard.resolve_error("HTTP 500".to_string()).unwrap();
        assert!(matches!(state, ContactFormState::Error { .. }));

        // Error → Submitting 可重入
        assert!(guard.begin_submit(&sample_message()).unwrap());
    }

    #[test]
    fn test_guard_reset_rearms_terminal_state() {
        let guard = ContactFormGuard::new();
        guard.begin_submit(&sample_message()).unwrap();
        guard.resolve_success().unwrap();

        guard.reset().unwrap();
        assert_eq!(guard.state().unwrap(), ContactFormState::Idle);
        assert!(guard.begin_submit(&sample_message()).unwrap());
    }
}
