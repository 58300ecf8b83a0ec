use tracing::{debug, info};

use crate::address::{Address, AddressField};
use crate::editor::{FieldChange, RecordEditor};
use crate::export::ExportDocument;
use crate::format;
use crate::utils::AddressError;

/// 记录标识符
///
/// 创建时分配，之后不随位置变化。删除中间的记录不会改变其它记录的标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// 地址簿 - 管理有序的地址记录集合
///
/// # 核心特性
/// - 插入顺序即显示顺序，也决定导出顺序
/// - 初始包含一条空白记录，且至少保留一条
/// - 每条记录带有稳定的 [`RecordId`]，同时支持按位置访问（从 0 开始）
#[derive(Debug, Clone)]
pub struct AddressBook {
    entries: Vec<(RecordId, RecordEditor)>,
    next_id: u64,
}

impl AddressBook {
    /// 创建只含一条空白记录的地址簿
    pub fn new() -> Self {
        let mut book = Self {
            entries: Vec::new(),
            next_id: 0,
        };
        book.add_record();
        book
    }

    fn allocate_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    /// 在末尾追加一条空白记录
    pub fn add_record(&mut self) -> RecordId {
        let id = self.allocate_id();
        self.entries.push((id, RecordEditor::new()));
        debug!(record = %id, len = self.entries.len(), "added blank address");
        id
    }

    /// 删除指定位置的记录，后面的记录依次前移
    ///
    /// # 错误
    /// - 只剩一条记录时返回 `LastRecord`
    /// - 位置越界时返回 `IndexOutOfRange`
    pub fn remove_record(&mut self, index: usize) -> Result<Address, AddressError> {
        self.check_index(index)?;
        if !self.can_remove() {
            return Err(AddressError::LastRecord);
        }

        let (id, editor) = self.entries.remove(index);
        info!(record = %id, index, len = self.entries.len(), "removed address");
        Ok(editor.address().clone())
    }

    /// 按标识删除记录
    pub fn remove_by_id(&mut self, id: RecordId) -> Result<Address, AddressError> {
        let index = self
            .position(id)
            .ok_or(AddressError::UnknownRecord(id))?;
        self.remove_record(index)
    }

    /// 替换指定位置的记录值（不重新校验）
    pub fn update_record(&mut self, index: usize, address: Address) -> Result<(), AddressError> {
        self.editor_mut(index)?.replace(address);
        Ok(())
    }

    /// 通过该记录的编辑器修改单个字段
    pub fn update_field(
        &mut self,
        index: usize,
        field: AddressField,
        value: &str,
    ) -> Result<FieldChange, AddressError> {
        let change = self.editor_mut(index)?.on_field_change(field, value);
        debug!(index, %change, "field changed");
        Ok(change)
    }

    /// 逐字段填入一条完整记录
    ///
    /// 每个字段都经过编辑器校验，相当于用户依次编辑了全部字段；
    /// 但值按原样保存，不受输入框长度限制。
    pub fn fill_record(&mut self, index: usize, address: &Address) -> Result<Vec<FieldChange>, AddressError> {
        let editor = self.editor_mut(index)?;
        Ok(AddressField::ALL
            .iter()
            .map(|&field| editor.on_field_import(field, address.get(field)))
            .collect())
    }

    /// 由一组记录构建地址簿
    ///
    /// 第一条填入初始空白记录，其余依次追加。输入为空时保留一条空白记录。
    ///
    /// # 返回
    /// 地址簿，以及所有带错误的字段变更（附位置）
    pub fn from_addresses<'a, I>(addresses: I) -> (Self, Vec<(usize, FieldChange)>)
    where
        I: IntoIterator<Item = &'a Address>,
    {
        let mut book = Self::new();
        let mut problems = Vec::new();

        for (index, address) in addresses.into_iter().enumerate() {
            if index > 0 {
                book.add_record();
            }
            // 下标刚刚创建，不会越界
            if let Ok(changes) = book.fill_record(index, address) {
                problems.extend(
                    changes
                        .into_iter()
                        .filter(|change| change.error.is_some())
                        .map(|change| (index, change)),
                );
            }
        }

        info!(records = book.len(), problems = problems.len(), "address book loaded");
        (book, problems)
    }

    /// 清空指定位置的记录及其错误
    pub fn reset_record(&mut self, index: usize) -> Result<(), AddressError> {
        self.editor_mut(index)?.on_reset();
        debug!(index, "address cleared");
        Ok(())
    }

    /// 是否允许删除（多于一条记录）
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 获取指定位置的编辑器
    pub fn editor(&self, index: usize) -> Result<&RecordEditor, AddressError> {
        self.check_index(index)?;
        Ok(&self.entries[index].1)
    }

    fn editor_mut(&mut self, index: usize) -> Result<&mut RecordEditor, AddressError> {
        self.check_index(index)?;
        Ok(&mut self.entries[index].1)
    }

    pub fn get(&self, index: usize) -> Option<&Address> {
        self.entries.get(index).map(|(_, editor)| editor.address())
    }

    pub fn id_at(&self, index: usize) -> Option<RecordId> {
        self.entries.get(index).map(|(id, _)| *id)
    }

    /// 查找标识对应的当前位置
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|(entry_id, _)| *entry_id == id)
    }

    /// 按顺序遍历（标识，编辑器）
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &RecordEditor)> {
        self.entries.iter().map(|(id, editor)| (*id, editor))
    }

    /// 按顺序遍历记录值
    pub fn addresses(&self) -> impl Iterator<Item = &Address> {
        self.entries.iter().map(|(_, editor)| editor.address())
    }

    /// 预览面板是否可见（至少一条记录有医生姓名）
    pub fn preview_visible(&self) -> bool {
        self.addresses().any(Address::has_name)
    }

    /// 预览文本
    pub fn preview_text(&self) -> String {
        format::format_preview(self.addresses())
    }

    /// 导出文本
    pub fn export_text(&self) -> String {
        format::format_export(self.addresses())
    }

    /// 打包导出文档
    ///
    /// 只按医生姓名过滤，不重新校验任何字段。
    pub fn export_document(&self) -> Result<ExportDocument, AddressError> {
        if !self.preview_visible() {
            return Err(AddressError::NothingToExport);
        }
        let record_count = self.addresses().filter(|address| address.has_name()).count();
        Ok(ExportDocument::new(self.export_text(), record_count))
    }

    fn check_index(&self, index: usize) -> Result<(), AddressError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(AddressError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}
