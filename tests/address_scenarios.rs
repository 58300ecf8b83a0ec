//! 端到端场景测试
//!
//! 测试场景：
//! - 从一条空白记录开始逐字段填写，预览文本逐字节一致
//! - 手机号不合法时仍然出现在预览中（导出只按医生姓名过滤）
//! - 两条完整记录导出为带空行分隔的文档，并写入 formatted_addresses.doc
//! - 删除中间记录后，后续记录前移且导出顺序保持

use address_formatter::{
    AddressBook, AddressField, ExportWriter, FileExportWriter, EXPORT_FILE_NAME,
};
use tempfile::TempDir;

const DR_RAO_BLOCK: &str =
    "To,\n\nDr. Rao,\n12,\nSunrise Society,\nBaner,\nPune - 411045\n9876543210\n\n";

/// 按界面顺序依次填写一条记录
fn fill(book: &mut AddressBook, index: usize, values: &[(AddressField, &str)]) {
    for (field, value) in values {
        book.update_field(index, *field, value).unwrap();
    }
}

fn dr_rao_values() -> Vec<(AddressField, &'static str)> {
    vec![
        (AddressField::DoctorName, "Dr. Rao"),
        (AddressField::FlatNo, "12"),
        (AddressField::Society, "Sunrise Society"),
        (AddressField::Area, "Baner"),
        (AddressField::City, "Pune"),
        (AddressField::Pincode, "411045"),
        (AddressField::Mobile, "9876543210"),
    ]
}

#[test]
fn test_single_record_preview() {
    let mut book = AddressBook::new();
    assert!(!book.preview_visible());

    fill(&mut book, 0, &dr_rao_values());

    assert!(book.preview_visible());
    assert_eq!(book.preview_text(), DR_RAO_BLOCK);
    assert!(!book.editor(0).unwrap().has_errors());
}

#[test]
fn test_invalid_mobile_still_previewed() {
    let mut book = AddressBook::new();
    fill(&mut book, 0, &dr_rao_values());

    let change = book.update_field(0, AddressField::Mobile, "12345").unwrap();

    assert_eq!(
        change.error.as_deref(),
        Some("Please enter a valid 10-digit mobile number")
    );
    assert_eq!(
        book.preview_text(),
        "To,\n\nDr. Rao,\n12,\nSunrise Society,\nBaner,\nPune - 411045\n12345\n\n"
    );
}

#[test]
fn test_two_records_export_to_file() {
    let mut book = AddressBook::new();
    fill(&mut book, 0, &dr_rao_values());
    book.add_record();
    fill(
        &mut book,
        1,
        &[
            (AddressField::DoctorName, "Dr. Iyer"),
            (AddressField::HospitalClinic, "Ruby Hall Clinic"),
            (AddressField::FlatNo, "Survey 45/2"),
            (AddressField::Society, "Green Acres"),
            (AddressField::Area, "Kothrud"),
            (AddressField::City, "Pune"),
            (AddressField::Pincode, "411038"),
            (AddressField::Mobile, "9123456780"),
        ],
    );

    let second_block = "To,\n\nDr. Iyer,\nRuby Hall Clinic,\nSurvey 45/2,\nGreen Acres,\nKothrud,\nPune - 411038\n9123456780\n\n";
    let doc = book.export_document().unwrap();

    assert_eq!(doc.file_name, EXPORT_FILE_NAME);
    assert_eq!(doc.content, format!("{}\n{}", DR_RAO_BLOCK, second_block));
    assert_eq!(book.preview_text(), format!("{}{}", DR_RAO_BLOCK, second_block));

    let temp_dir = TempDir::new().unwrap();
    let path = FileExportWriter::default().write(&doc, temp_dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), "formatted_addresses.doc");
    assert_eq!(std::fs::read(&path).unwrap(), doc.content.as_bytes());
}

#[test]
fn test_unnamed_records_are_skipped() {
    let mut book = AddressBook::new();
    fill(&mut book, 0, &[(AddressField::City, "Mumbai")]);
    book.add_record();
    fill(&mut book, 1, &dr_rao_values());
    book.add_record();

    assert_eq!(book.len(), 3);
    assert_eq!(book.export_document().unwrap().content, DR_RAO_BLOCK);
}

#[test]
fn test_remove_middle_record_keeps_order() {
    let mut book = AddressBook::new();
    for (index, name) in ["Dr. A", "Dr. B", "Dr. C"].iter().enumerate() {
        if index > 0 {
            book.add_record();
        }
        book.update_field(index, AddressField::DoctorName, name).unwrap();
    }
    let id_c = book.id_at(2).unwrap();

    book.remove_record(1).unwrap();

    let names: Vec<_> = book.addresses().map(|a| a.doctor_name.clone()).collect();
    assert_eq!(names, vec!["Dr. A", "Dr. C"]);
    assert_eq!(book.position(id_c), Some(1));

    // 后续编辑作用于当前位置
    book.update_field(1, AddressField::City, "Nashik").unwrap();
    assert_eq!(book.get(1).unwrap().doctor_name, "Dr. C");
    assert_eq!(book.get(1).unwrap().city, "Nashik");

    book.remove_record(1).unwrap();
    assert!(!book.can_remove());
    assert!(book.remove_record(0).is_err());
}

#[test]
fn test_clear_removes_record_from_preview() {
    let mut book = AddressBook::new();
    fill(&mut book, 0, &dr_rao_values());
    book.update_field(0, AddressField::Pincode, "").unwrap();
    assert!(book.editor(0).unwrap().has_errors());

    book.reset_record(0).unwrap();

    assert!(!book.preview_visible());
    assert!(!book.editor(0).unwrap().has_errors());
    assert!(book.export_document().is_err());
}
