/// 导出文档 IO 实现
///
/// 提供基于文件系统的默认实现，以及只保存在内存中的实现

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::traits::ExportWriter;
use crate::export::ExportDocument;
use crate::utils::{create_backup, AddressError};

/// 默认的导出文件写入器
#[derive(Debug, Clone, Default)]
pub struct FileExportWriter {
    /// 目标文件已存在时，先备份为带时间戳的 .bak 文件
    pub backup_existing: bool,
}

impl FileExportWriter {
    pub fn with_backup() -> Self {
        Self {
            backup_existing: true,
        }
    }
}

impl ExportWriter for FileExportWriter {
    fn write(&self, doc: &ExportDocument, dir: &Path) -> Result<PathBuf, AddressError> {
        // 确保目录存在
        std::fs::create_dir_all(dir)?;

        let path = dir.join(&doc.file_name);
        if self.backup_existing && path.exists() {
            let backup = create_backup(&path)?;
            info!(backup = %backup.display(), "backed up previous export");
        }

        std::fs::write(&path, doc.as_bytes())?;
        debug!(path = %path.display(), bytes = doc.content.len(), "export written");
        Ok(path)
    }
}

/// 内存导出写入器
///
/// 不接触文件系统，只记录收到的文档。供自行处理保存的宿主和测试使用。
#[derive(Debug, Default)]
pub struct MemoryExportWriter {
    saved: RefCell<Vec<(PathBuf, ExportDocument)>>,
}

impl MemoryExportWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 已保存文档的数量
    pub fn count(&self) -> usize {
        self.saved.borrow().len()
    }

    /// 最近一次保存的文档
    pub fn last(&self) -> Option<ExportDocument> {
        self.saved.borrow().last().map(|(_, doc)| doc.clone())
    }

    /// 取出全部文档
    pub fn take(&self) -> Vec<(PathBuf, ExportDocument)> {
        self.saved.take()
    }
}

impl ExportWriter for MemoryExportWriter {
    fn write(&self, doc: &ExportDocument, dir: &Path) -> Result<PathBuf, AddressError> {
        let path = dir.join(&doc.file_name);
        self.saved.borrow_mut().push((path.clone(), doc.clone()));
        Ok(path)
    }
}
