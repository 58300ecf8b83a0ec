pub mod address;
pub mod address_book;
pub mod editor;
pub mod export;
pub mod format;
pub mod io;
pub mod render;
pub mod session;
pub mod utils;
pub mod validation;

// 重新导出主要结构
pub use address::{Address, AddressField};
pub use address_book::{AddressBook, RecordId};
pub use editor::{FieldChange, FieldErrors, RecordEditor};
pub use export::{ExportDocument, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use format::{format_address, format_export, format_preview};
pub use io::{ExportWriter, FileExportWriter, MemoryExportWriter};
pub use session::{Command, Outcome, Session};
pub use utils::AddressError;
pub use validation::{humanize_field_name, is_valid_mobile, validate_field};

// 常量定义
pub const SUPPORTED_INPUT_EXTENSIONS: &[&str] = &["json"];
