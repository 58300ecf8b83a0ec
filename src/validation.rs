use crate::address::AddressField;

/// 手机号格式错误提示
pub const INVALID_MOBILE_MESSAGE: &str = "Please enter a valid 10-digit mobile number";

/// 手机号长度
const MOBILE_DIGITS: usize = 10;

/// 字段校验函数
///
/// 只校验传入的这一个字段，不触碰其它字段的状态。
///
/// # 返回
/// 有错误时返回提示文本，否则返回 `None`
pub fn validate_field(field: AddressField, value: &str) -> Option<String> {
    if field == AddressField::Mobile && !value.is_empty() && !is_valid_mobile(value) {
        return Some(INVALID_MOBILE_MESSAGE.to_string());
    }

    if value.is_empty() && !field.is_optional() {
        return Some(format!("{} is required", humanize_field_name(field.as_str())));
    }

    None
}

/// 检查是否为恰好 10 位的 ASCII 数字
pub fn is_valid_mobile(value: &str) -> bool {
    value.len() == MOBILE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// 将 camelCase 字段键转为可读名称
///
/// 在每个大写字母前插入空格并整体转小写，例如 `flatNo` -> `flat no`
pub fn humanize_field_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push(' ');
        }
        result.push(c);
    }
    result.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        for field in AddressField::ALL {
            if field.is_optional() {
                continue;
            }
            let error = validate_field(field, "").unwrap();
            assert!(error.ends_with(" is required"), "{}: {}", field, error);

            if field != AddressField::Mobile {
                assert_eq!(validate_field(field, "anything"), None);
            }
        }
    }

    #[test]
    fn test_required_message_text() {
        assert_eq!(validate_field(AddressField::FlatNo, "").unwrap(), "flat no is required");
        assert_eq!(validate_field(AddressField::DoctorName, "").unwrap(), "doctor name is required");
        assert_eq!(validate_field(AddressField::Pincode, "").unwrap(), "pincode is required");
    }

    #[test]
    fn test_hospital_clinic_is_optional() {
        assert_eq!(validate_field(AddressField::HospitalClinic, ""), None);
        assert_eq!(validate_field(AddressField::HospitalClinic, "City Hospital"), None);
    }

    #[test]
    fn test_mobile() {
        assert_eq!(validate_field(AddressField::Mobile, "9876543210"), None);
        assert_eq!(
            validate_field(AddressField::Mobile, "").unwrap(),
            "mobile is required"
        );

        for bad in ["12345", "98765432101", "98765x3210", " 987654321", "+919876543"] {
            assert_eq!(
                validate_field(AddressField::Mobile, bad).as_deref(),
                Some(INVALID_MOBILE_MESSAGE),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_mobile_rejects_non_ascii_digits() {
        // 天城文数字不算 \d
        assert!(!is_valid_mobile("९८७६५४३२१०"));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize_field_name("flatNo"), "flat no");
        assert_eq!(humanize_field_name("hospitalClinic"), "hospital clinic");
        assert_eq!(humanize_field_name("city"), "city");
    }
}
