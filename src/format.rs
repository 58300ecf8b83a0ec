/// 地址文本格式化
///
/// 预览与导出共用同一个地址块格式，二者只在块之间的分隔上不同：
/// 预览直接拼接，导出在块之间多插入一个空行。

use crate::address::Address;

/// 生成单个地址块
///
/// 格式：
/// ```text
/// To,
///
/// <医生姓名>,
/// [<医院/诊所>,]
/// <门牌号>,
/// <小区>,
/// <区域>,
/// <城市> - <邮编>
/// <手机号>
///
/// ```
/// 医院/诊所为空时整行省略。
pub fn format_address(address: &Address) -> String {
    let clinic_line = if address.hospital_clinic.is_empty() {
        String::new()
    } else {
        format!("{},\n", address.hospital_clinic)
    };

    format!(
        "To,\n\n{},\n{}{},\n{},\n{},\n{} - {}\n{}\n\n",
        address.doctor_name,
        clinic_line,
        address.flat_no,
        address.society,
        address.area,
        address.city,
        address.pincode,
        address.mobile
    )
}

/// 所有带医生姓名的地址块（保持原顺序）
pub fn formatted_blocks<'a, I>(addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Address>,
{
    addresses
        .into_iter()
        .filter(|address| address.has_name())
        .map(format_address)
        .collect()
}

/// 预览文本：地址块直接拼接
pub fn format_preview<'a, I>(addresses: I) -> String
where
    I: IntoIterator<Item = &'a Address>,
{
    formatted_blocks(addresses).concat()
}

/// 导出文本：地址块之间多一个空行
pub fn format_export<'a, I>(addresses: I) -> String
where
    I: IntoIterator<Item = &'a Address>,
{
    formatted_blocks(addresses).join("\n")
}
