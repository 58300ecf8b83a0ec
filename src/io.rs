/// IO 抽象层模块
///
/// 该模块把"保存导出文档"这一动作抽象为接口。
/// 核心逻辑只负责生成文档内容，落盘或交给宿主环境由实现决定。
///
/// # 架构设计
///
/// - **traits**: 定义 ExportWriter trait 接口
/// - **export_io**: 文件系统实现与内存实现
///
/// # 使用示例
///
/// ```rust,ignore
/// use address_formatter::io::{ExportWriter, FileExportWriter};
///
/// let doc = book.export_document()?;
/// let path = FileExportWriter::default().write(&doc, Path::new("."))?;
/// ```
pub mod traits;
pub mod export_io;

// === 导出 trait 定义 ===
pub use traits::ExportWriter;

// === 导出默认实现 ===
pub use export_io::{FileExportWriter, MemoryExportWriter};
