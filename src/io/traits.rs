/// IO 抽象层 - trait 定义
///
/// 该模块定义了导出文档的保存接口，支持依赖注入和测试 mock。

use std::path::{Path, PathBuf};
use crate::export::ExportDocument;
use crate::utils::AddressError;

/// 导出文档写入 trait
///
/// # 职责
/// - 将已经生成好的导出文档交给宿主环境保存
/// - 不负责格式化，仅负责 IO
///
/// # 实现示例
/// ```rust,ignore
/// pub struct StdoutExportWriter;
/// impl ExportWriter for StdoutExportWriter {
///     fn write(&self, doc: &ExportDocument, _dir: &Path) -> Result<PathBuf, AddressError> {
///         print!("{}", doc.content);
///         Ok(PathBuf::from(&doc.file_name))
///     }
/// }
/// ```
pub trait ExportWriter {
    /// 保存导出文档
    ///
    /// # 参数
    /// * `doc` - 要保存的文档
    /// * `dir` - 目标目录，文件名取自 `doc.file_name`
    ///
    /// # 返回
    /// 返回文档最终保存的位置
    fn write(&self, doc: &ExportDocument, dir: &Path) -> Result<PathBuf, AddressError>;
}
