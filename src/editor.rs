/// 编辑器层模块
///
/// 该模块提供单条地址记录的有状态编辑接口。
/// 记录的值与其字段错误放在同一个结构中，每次编辑同时更新。
///
/// # 架构设计
///
/// - **record_editor**: 单条记录编辑器，负责逐字段校验与重置
/// - **change**: 单次字段修改的描述，便于日志与界面反馈
///
/// # 使用示例
///
/// ```rust
/// use address_formatter::{AddressField, RecordEditor};
///
/// let mut editor = RecordEditor::new();
/// let change = editor.on_field_change(AddressField::Mobile, "12345");
/// assert!(change.error.is_some());
/// assert_eq!(editor.address().mobile, "12345");
/// ```
pub mod change;
pub mod record_editor;

// === 导出公共接口 ===
pub use change::FieldChange;
pub use record_editor::{FieldErrors, RecordEditor};
