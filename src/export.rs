/// 导出文件名
pub const EXPORT_FILE_NAME: &str = "formatted_addresses.doc";

/// 导出文件 MIME 类型（内容是纯文本，并不是真正的 Word 格式）
pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// 待保存的导出文档
///
/// 只负责描述"要保存什么"，具体如何保存由 [`crate::io::ExportWriter`] 决定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub file_name: String,
    pub mime_type: String,
    /// UTF-8 文本内容
    pub content: String,
    /// 导出的地址数量（带医生姓名的记录）
    pub record_count: usize,
}

impl ExportDocument {
    /// 使用默认文件名和 MIME 类型创建文档
    pub fn new(content: String, record_count: usize) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime_type: EXPORT_MIME_TYPE.to_string(),
            content,
            record_count,
        }
    }

    /// 内容字节（UTF-8）
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}
