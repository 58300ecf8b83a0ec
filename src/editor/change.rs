/// 字段修改记录
///
/// 描述一次 `on_field_change` 的结果：哪个字段、修改前后的值、以及该字段新的错误状态。

use crate::address::AddressField;

/// 单个字段的变更
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// 被修改的字段
    pub field: AddressField,
    /// 修改前的值
    pub old_value: String,
    /// 修改后的值（交互输入时已应用长度限制）
    pub new_value: String,
    /// 该字段校验后的错误，`None` 表示已清除
    pub error: Option<String>,
}

/// 过长的值在日志里截断显示
fn abbreviate(value: &str) -> String {
    if value.chars().count() > 30 {
        format!("{}...", value.chars().take(30).collect::<String>())
    } else {
        value.to_string()
    }
}

impl std::fmt::Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: \"{}\" -> \"{}\"",
            self.field,
            abbreviate(&self.old_value),
            abbreviate(&self.new_value)
        )?;
        if let Some(error) = &self.error {
            write!(f, " ({})", error)?;
        }
        Ok(())
    }
}
