/// 地址记录编辑器模块
///
/// 提供单条记录的有状态编辑接口：每次字段修改都只校验该字段，
/// 其它字段已有的错误保持不变，直到它们自己下一次被编辑。

use std::collections::BTreeMap;

use crate::address::{Address, AddressField};
use crate::utils::truncate_chars;
use crate::validation::validate_field;
use super::change::FieldChange;

/// 字段错误集合（部分映射：字段 -> 提示文本）
pub type FieldErrors = BTreeMap<AddressField, String>;

/// 地址记录编辑器 - 管理一条记录的值与错误状态
///
/// # 核心特性
/// - **逐字段校验**: 每次修改只影响一个字段的错误条目
/// - **同步更新**: 值与错误在同一次调用中一起更新
/// - **不阻塞**: 错误只是数据，不会阻止后续编辑或导出
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEditor {
    /// 当前记录值
    address: Address,
    /// 字段错误
    errors: FieldErrors,
}

impl RecordEditor {
    /// 创建空白记录的编辑器
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理字段输入
    ///
    /// # 行为
    /// - 先应用输入框长度限制（手机号最多 10 个字符）
    /// - 校验该字段，写入或清除它的错误条目
    /// - 替换该字段的值
    ///
    /// # 返回
    /// 返回本次修改的描述
    pub fn on_field_change(&mut self, field: AddressField, new_value: &str) -> FieldChange {
        let value = match field.max_len() {
            Some(max) => truncate_chars(new_value, max),
            None => new_value,
        };
        self.apply(field, value)
    }

    /// 导入字段值
    ///
    /// 与 [`Self::on_field_change`] 相同，但不应用输入框长度限制：
    /// 导入的数据原样保存，超长的手机号会得到校验错误而不是被截断。
    pub fn on_field_import(&mut self, field: AddressField, value: &str) -> FieldChange {
        self.apply(field, value)
    }

    fn apply(&mut self, field: AddressField, value: &str) -> FieldChange {
        let error = validate_field(field, value);
        match &error {
            Some(message) => {
                self.errors.insert(field, message.clone());
            }
            None => {
                self.errors.remove(&field);
            }
        }

        let old_value = self.address.set(field, value);

        FieldChange {
            field,
            old_value,
            new_value: value.to_string(),
            error,
        }
    }

    /// 清空记录及全部错误（无需确认）
    pub fn on_reset(&mut self) {
        self.address = Address::blank();
        self.errors.clear();
    }

    /// 直接替换记录值
    ///
    /// 不重新校验，已有错误保持原样。
    pub fn replace(&mut self, address: Address) {
        self.address = address;
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// 获取某个字段的错误
    pub fn error(&self, field: AddressField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
