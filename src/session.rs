/// 交互会话
///
/// 一行输入解析为一个 [`Command`]，由 [`Session`] 同步执行完毕后再处理下一行。
/// 命令行界面中的位置从 1 开始编号。

use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::address::AddressField;
use crate::address_book::AddressBook;
use crate::io::ExportWriter;
use crate::render;
use crate::utils::AddressError;

/// 帮助文本
pub const HELP_TEXT: &str = "\
Commands:
  add                          add another blank address
  set <n> <field> [value...]   set a field of address #n (empty value clears it)
  clear <n>                    clear every field of address #n
  remove <n>                   remove address #n (needs more than one address)
  show                         show the whole form
  preview                      show only the preview
  export [dir]                 export all named addresses to formatted_addresses.doc
  help                         show this help
  quit                         leave without saving

Fields: doctorName, hospitalClinic, flatNo, society, area, city, pincode, mobile";

/// 会话命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    /// 位置从 0 开始
    Set { index: usize, field: AddressField, value: String },
    Clear { index: usize },
    Remove { index: usize },
    Show,
    Preview,
    Export { dir: Option<PathBuf> },
    Help,
    Quit,
}

/// 取出下一个以空白分隔的词
fn next_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        *rest = trimmed;
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (token, remainder) = trimmed.split_at(end);
    *rest = remainder;
    Some(token)
}

/// 解析从 1 开始的位置，返回从 0 开始的下标
fn parse_position(token: Option<&str>, line: &str) -> Result<usize, AddressError> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .filter(|&n| n >= 1)
        .map(|n| n - 1)
        .ok_or_else(|| AddressError::InvalidCommand(format!("expected an address number in `{}`", line)))
}

impl FromStr for Command {
    type Err = AddressError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut rest = line.trim();
        let keyword = next_token(&mut rest)
            .ok_or_else(|| AddressError::InvalidCommand("empty input".to_string()))?
            .to_ascii_lowercase();

        let command = match keyword.as_str() {
            "add" => Command::Add,
            "set" => {
                let index = parse_position(next_token(&mut rest), line)?;
                let field = next_token(&mut rest)
                    .ok_or_else(|| AddressError::InvalidCommand(format!("expected a field name in `{}`", line)))?
                    .parse::<AddressField>()?;
                let value = rest.trim().to_string();
                rest = "";
                Command::Set { index, field, value }
            }
            "clear" => Command::Clear {
                index: parse_position(next_token(&mut rest), line)?,
            },
            "remove" => Command::Remove {
                index: parse_position(next_token(&mut rest), line)?,
            },
            "show" => Command::Show,
            "preview" => Command::Preview,
            "export" => Command::Export {
                dir: next_token(&mut rest).map(PathBuf::from),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(AddressError::InvalidCommand(format!("unknown command `{}`", other))),
        };

        if !rest.trim().is_empty() {
            return Err(AddressError::InvalidCommand(format!("unexpected input `{}`", rest.trim())));
        }
        Ok(command)
    }
}

/// 命令执行结果（由界面负责输出）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 需要展示的渲染文本
    Render(String),
    /// 简短提示
    Message(String),
    /// 导出完成，附保存位置
    Exported(PathBuf),
    Quit,
}

/// 会话 - 持有唯一的地址簿并逐条执行命令
pub struct Session<W: ExportWriter> {
    book: AddressBook,
    writer: W,
    /// `export` 未指定目录时使用
    output_dir: PathBuf,
}

impl<W: ExportWriter> Session<W> {
    pub fn new(writer: W, output_dir: PathBuf) -> Self {
        Self {
            book: AddressBook::new(),
            writer,
            output_dir,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// 解析并执行一行输入
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, AddressError> {
        let command = line.parse::<Command>()?;
        self.execute(command)
    }

    /// 执行命令
    ///
    /// 失败的命令不会改变地址簿，也不会结束会话。
    pub fn execute(&mut self, command: Command) -> Result<Outcome, AddressError> {
        match command {
            Command::Add => {
                self.book.add_record();
                Ok(Outcome::Render(render::render_form(&self.book)))
            }
            Command::Set { index, field, value } => {
                let change = self.book.update_field(index, field, &value)?;
                match change.error {
                    Some(error) => Ok(Outcome::Message(format!("Address #{}: {}", index + 1, error))),
                    None => Ok(Outcome::Message(format!(
                        "Address #{}: {} = \"{}\"",
                        index + 1,
                        field.label(),
                        change.new_value
                    ))),
                }
            }
            Command::Clear { index } => {
                self.book.reset_record(index)?;
                Ok(Outcome::Render(render::render_form(&self.book)))
            }
            Command::Remove { index } => {
                self.book.remove_record(index)?;
                Ok(Outcome::Render(render::render_form(&self.book)))
            }
            Command::Show => Ok(Outcome::Render(render::render_form(&self.book))),
            Command::Preview => Ok(match render::render_preview(&self.book) {
                Some(panel) => Outcome::Render(panel),
                None => Outcome::Message("Nothing to preview yet: enter a doctor's name first".to_string()),
            }),
            Command::Export { dir } => {
                let doc = self.book.export_document()?;
                let dir = dir.unwrap_or_else(|| self.output_dir.clone());
                let path = self.writer.write(&doc, &dir)?;
                info!(path = %path.display(), records = doc.record_count, "exported addresses");
                Ok(Outcome::Exported(path))
            }
            Command::Help => Ok(Outcome::Message(HELP_TEXT.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
