use thiserror::Error;
use std::path::{Path, PathBuf};

use crate::address_book::RecordId;

/// 自定义错误类型
///
/// 字段校验错误不属于这里：它们作为数据保存在 `FieldErrors` 中，
/// 从不阻止编辑或导出。
#[derive(Error, Debug)]
pub enum AddressError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Address #{} does not exist (there are {})", .index + 1, .len)]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Record {0} does not exist")]
    UnknownRecord(RecordId),

    #[error("The last remaining address cannot be removed")]
    LastRecord,

    #[error("No address has a doctor's name yet, nothing to export")]
    NothingToExport,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// 创建文件备份
///
/// 备份文件与原文件同目录，扩展名替换为 `<时间戳>.bak`。
pub fn create_backup(file_path: &Path) -> Result<PathBuf, AddressError> {
    if !file_path.exists() {
        return Err(AddressError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "原文件不存在"
        )));
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d-%H-%M-%S");
    let backup_path = file_path.with_extension(format!("{}.bak", timestamp));

    std::fs::copy(file_path, &backup_path)
        .map_err(AddressError::IoError)?;

    Ok(backup_path)
}

/// 截断为最多 `max` 个字符（按 char 计，而非字节）
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((byte_index, _)) => &value[..byte_index],
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("98765432101234", 10), "9876543210");
        assert_eq!(truncate_chars("12345", 10), "12345");
        assert_eq!(truncate_chars("", 10), "");
        // 多字节字符不能被切断
        assert_eq!(truncate_chars("१२३४५६७८९०१२", 10), "१२३४५६७८९०");
    }

    #[test]
    fn test_backup_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = create_backup(&temp_dir.path().join("missing.doc"));
        assert!(matches!(result, Err(AddressError::IoError(_))));
    }

    #[test]
    fn test_backup_copies_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("formatted_addresses.doc");
        std::fs::write(&file_path, "old content").unwrap();

        let backup = create_backup(&file_path).unwrap();

        assert_ne!(backup, file_path);
        assert!(backup.to_string_lossy().ends_with(".bak"));
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "old content");
    }

    #[test]
    fn test_error_messages() {
        let err = AddressError::IndexOutOfRange { index: 2, len: 1 };
        assert_eq!(err.to_string(), "Address #3 does not exist (there are 1)");
        assert_eq!(
            AddressError::UnknownField("zip".to_string()).to_string(),
            "Unknown field: zip"
        );
    }
}
