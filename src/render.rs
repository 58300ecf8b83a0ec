/// 表单文本渲染
///
/// 把地址簿渲染成可在终端展示的文本表单：每条记录一张卡片，
/// 错误显示在对应字段下方，预览面板仅在有医生姓名时出现。

use std::fmt;

use crate::address::AddressField;
use crate::address_book::AddressBook;
use crate::editor::RecordEditor;

/// 标签列宽
const LABEL_WIDTH: usize = 28;

/// 整个表单的文本视图
pub struct FormView<'a>(pub &'a AddressBook);

/// 预览面板的文本视图（只在可见时构造）
pub struct PreviewPanel<'a>(&'a AddressBook);

impl<'a> PreviewPanel<'a> {
    /// 没有任何记录带医生姓名时返回 `None`
    pub fn new(book: &'a AddressBook) -> Option<Self> {
        book.preview_visible().then_some(PreviewPanel(book))
    }
}

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        for (index, (_, editor)) in book.iter().enumerate() {
            write_card(f, index, editor, book.can_remove())?;
            writeln!(f)?;
        }

        writeln!(f, "[Add Another Address]")?;

        if let Some(panel) = PreviewPanel::new(book) {
            writeln!(f)?;
            write!(f, "{}", panel)?;
        }
        Ok(())
    }
}

impl fmt::Display for PreviewPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Preview ===")?;
        write!(f, "{}", self.0.preview_text())?;
        writeln!(f, "[Export All]")
    }
}

/// 渲染单张记录卡片
fn write_card(
    f: &mut fmt::Formatter<'_>,
    index: usize,
    editor: &RecordEditor,
    show_remove: bool,
) -> fmt::Result {
    writeln!(f, "=== Address #{} ===", index + 1)?;

    for field in AddressField::ALL {
        writeln!(
            f,
            "{:<width$} {}",
            format!("{}:", field.label()),
            editor.address().get(field),
            width = LABEL_WIDTH
        )?;
        if let Some(error) = editor.error(field).filter(|e| !e.is_empty()) {
            writeln!(f, "  ! {}", error)?;
        }
    }

    if show_remove {
        writeln!(f, "[Clear] [Remove]")
    } else {
        writeln!(f, "[Clear]")
    }
}

/// 渲染整个表单
pub fn render_form(book: &AddressBook) -> String {
    FormView(book).to_string()
}

/// 渲染预览面板
///
/// 没有任何记录带医生姓名时返回 `None`（面板整体不存在，而不是空面板）
pub fn render_preview(book: &AddressBook) -> Option<String> {
    PreviewPanel::new(book).map(|panel| panel.to_string())
}
