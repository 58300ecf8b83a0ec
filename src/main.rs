use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

use address_formatter::io::FileExportWriter;
use address_formatter::session::HELP_TEXT;
use address_formatter::{
    render, Address, AddressBook, ExportWriter, Outcome, Session, SUPPORTED_INPUT_EXTENSIONS,
};

#[derive(Parser)]
#[command(name = "address_formatter")]
#[command(about = "填写、校验并导出格式化的邮寄地址")]
#[command(version)]
struct Cli {
    /// 批量模式：从JSON文件读取地址数组（camelCase 字段名）
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 导出文件所在目录
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// 批量模式下只打印预览，不导出
    #[arg(long)]
    preview: bool,

    /// 覆盖前备份已有的导出文件
    #[arg(long)]
    backup: bool,

    /// 静默模式(仅输出错误)
    #[arg(short, long)]
    quiet: bool,

    /// 日志详细程度（可重复：-v 为 info，-vv 为 debug）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let writer = FileExportWriter {
        backup_existing: cli.backup,
    };

    match &cli.input {
        Some(input) => handle_batch(&cli, input, &writer),
        None => handle_interactive(&cli, writer),
    }
}

/// 初始化诊断日志（输出到标准错误）
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// 验证输入文件
fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        bail!("输入文件不存在: {:?}", input);
    }

    let extension = input.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    if !SUPPORTED_INPUT_EXTENSIONS.iter().any(|&ext| Some(ext) == extension.as_deref()) {
        bail!("输入文件必须是JSON文件");
    }

    Ok(())
}

/// 加载地址文件
fn load_addresses(input: &Path) -> Result<Vec<Address>> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("读取地址文件失败: {:?}", input))?;

    serde_json::from_str(&content)
        .with_context(|| format!("解析地址文件失败: {:?}", input))
}

/// 处理批量模式
fn handle_batch(cli: &Cli, input: &Path, writer: &dyn ExportWriter) -> Result<()> {
    validate_input(input)?;

    let addresses = load_addresses(input)?;
    let (book, problems) = AddressBook::from_addresses(&addresses);

    if !cli.quiet {
        println!("读取到 {} 个地址", addresses.len());
    }

    // 校验错误只提示，不阻止导出
    for (index, change) in &problems {
        if let Some(error) = &change.error {
            eprintln!("地址 #{}: {}", index + 1, error);
        }
    }

    if cli.preview {
        match render::render_preview(&book) {
            Some(panel) => print!("{}", panel),
            None => println!("没有可预览的地址（缺少医生姓名）"),
        }
        return Ok(());
    }

    let doc = book.export_document()?;
    let path = writer
        .write(&doc, &cli.output_dir)
        .with_context(|| format!("写入导出文件失败: {:?}", cli.output_dir))?;

    if !cli.quiet {
        print_export_summary(&book, &path);
    }

    Ok(())
}

/// 处理交互模式
fn handle_interactive(cli: &Cli, writer: FileExportWriter) -> Result<()> {
    let mut session = Session::new(writer, cli.output_dir.clone());

    if !cli.quiet {
        println!("{}", HELP_TEXT);
        println!();
        print!("{}", render::render_form(session.book()));
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        if !cli.quiet {
            print!("> ");
            stdout.flush().context("写入标准输出失败")?;
        }

        line.clear();
        let read = stdin.lock().read_line(&mut line).context("从标准输入读取失败")?;
        if read == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) if cli.quiet => {
                if let Outcome::Exported(path) = outcome {
                    println!("{}", path.display());
                }
            }
            Ok(Outcome::Render(text)) => print!("{}", text),
            Ok(Outcome::Message(text)) => println!("{}", text),
            Ok(Outcome::Exported(path)) => print_export_summary(session.book(), &path),
            Err(e) => eprintln!("错误: {}", e),
        }
    }

    Ok(())
}

/// 打印导出摘要信息
fn print_export_summary(book: &AddressBook, path: &Path) {
    let exported = book.addresses().filter(|a| a.has_name()).count();
    let incomplete = book.addresses().filter(|a| a.has_name() && !a.is_complete()).count();

    println!("导出 {} 个地址", exported);
    if incomplete > 0 {
        println!("⚠ 其中 {} 个地址信息不完整", incomplete);
    }
    println!("结果已写入: {:?}", path);
}
