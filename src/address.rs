use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::AddressError;

/// 地址记录
///
/// 所有字段均为纯文本。除 `hospital_clinic` 外的字段都是必填项，
/// 但缺失字段从不报错，只影响 [`Address::is_complete`]。
/// JSON 键使用 camelCase（`doctorName`、`flatNo` ...），缺失的键视为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// 医生姓名（导出过滤键）
    pub doctor_name: String,
    /// 医院/诊所（可选）
    pub hospital_clinic: String,
    /// 门牌号/测量编号
    pub flat_no: String,
    /// 小区/社区
    pub society: String,
    /// 街道/区域
    pub area: String,
    pub city: String,
    pub pincode: String,
    /// 手机号，填写时必须恰好 10 位数字
    pub mobile: String,
}

/// 地址字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressField {
    DoctorName,
    HospitalClinic,
    FlatNo,
    Society,
    Area,
    City,
    Pincode,
    Mobile,
}

impl AddressField {
    /// 按表单顺序排列的所有字段
    pub const ALL: [AddressField; 8] = [
        AddressField::DoctorName,
        AddressField::HospitalClinic,
        AddressField::FlatNo,
        AddressField::Society,
        AddressField::Area,
        AddressField::City,
        AddressField::Pincode,
        AddressField::Mobile,
    ];

    /// camelCase 字段键
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressField::DoctorName => "doctorName",
            AddressField::HospitalClinic => "hospitalClinic",
            AddressField::FlatNo => "flatNo",
            AddressField::Society => "society",
            AddressField::Area => "area",
            AddressField::City => "city",
            AddressField::Pincode => "pincode",
            AddressField::Mobile => "mobile",
        }
    }

    /// snake_case 别名（命令行使用）
    pub fn snake_case(&self) -> &'static str {
        match self {
            AddressField::DoctorName => "doctor_name",
            AddressField::HospitalClinic => "hospital_clinic",
            AddressField::FlatNo => "flat_no",
            AddressField::Society => "society",
            AddressField::Area => "area",
            AddressField::City => "city",
            AddressField::Pincode => "pincode",
            AddressField::Mobile => "mobile",
        }
    }

    /// 表单标签
    pub fn label(&self) -> &'static str {
        match self {
            AddressField::DoctorName => "Doctor's Name",
            AddressField::HospitalClinic => "Hospital/Clinic (Optional)",
            AddressField::FlatNo => "Flat No./Survey Number",
            AddressField::Society => "Society/Colony",
            AddressField::Area => "Lane/Area",
            AddressField::City => "City",
            AddressField::Pincode => "Pincode",
            AddressField::Mobile => "Mobile Number",
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, AddressField::HospitalClinic)
    }

    /// 输入框允许的最大字符数
    pub fn max_len(&self) -> Option<usize> {
        match self {
            AddressField::Mobile => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressField {
    type Err = AddressError;

    /// 接受 camelCase 键，以及命令行上更顺手的 snake_case 别名
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s || field.snake_case() == s)
            .ok_or_else(|| AddressError::UnknownField(s.to_string()))
    }
}

impl Address {
    /// 创建空白地址
    pub fn blank() -> Self {
        Self::default()
    }

    /// 按字段读取
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::DoctorName => &self.doctor_name,
            AddressField::HospitalClinic => &self.hospital_clinic,
            AddressField::FlatNo => &self.flat_no,
            AddressField::Society => &self.society,
            AddressField::Area => &self.area,
            AddressField::City => &self.city,
            AddressField::Pincode => &self.pincode,
            AddressField::Mobile => &self.mobile,
        }
    }

    /// 按字段写入，返回旧值
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) -> String {
        let slot = match field {
            AddressField::DoctorName => &mut self.doctor_name,
            AddressField::HospitalClinic => &mut self.hospital_clinic,
            AddressField::FlatNo => &mut self.flat_no,
            AddressField::Society => &mut self.society,
            AddressField::Area => &mut self.area,
            AddressField::City => &mut self.city,
            AddressField::Pincode => &mut self.pincode,
            AddressField::Mobile => &mut self.mobile,
        };
        std::mem::replace(slot, value.into())
    }

    /// 是否出现在预览/导出中（仅看医生姓名）
    pub fn has_name(&self) -> bool {
        !self.doctor_name.is_empty()
    }

    /// 所有必填字段均非空
    ///
    /// 仅用于展示，从不影响导出。
    pub fn is_complete(&self) -> bool {
        AddressField::ALL
            .iter()
            .filter(|field| !field.is_optional())
            .all(|&field| !self.get(field).is_empty())
    }

    pub fn is_blank(&self) -> bool {
        AddressField::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_parsing() {
        assert_eq!("doctorName".parse::<AddressField>().unwrap(), AddressField::DoctorName);
        assert_eq!("flat_no".parse::<AddressField>().unwrap(), AddressField::FlatNo);
        assert_eq!("hospital_clinic".parse::<AddressField>().unwrap(), AddressField::HospitalClinic);
        assert_eq!("mobile".parse::<AddressField>().unwrap(), AddressField::Mobile);

        assert!(matches!(
            "zipcode".parse::<AddressField>(),
            Err(AddressError::UnknownField(name)) if name == "zipcode"
        ));
        assert!("".parse::<AddressField>().is_err());

        // 只接受两种精确写法
        for loose in ["DOCTORNAME", "doctorname", "d_o_c_t_o_r_name", "Flat_No", "flatno"] {
            assert!(loose.parse::<AddressField>().is_err(), "{}", loose);
        }
    }

    #[test]
    fn test_get_set() {
        let mut address = Address::blank();
        assert!(address.is_blank());

        for field in AddressField::ALL {
            let old = address.set(field, format!("v-{}", field));
            assert_eq!(old, "");
        }
        for field in AddressField::ALL {
            assert_eq!(address.get(field), format!("v-{}", field));
        }

        assert_eq!(address.set(AddressField::City, "Pune"), "v-city");
    }

    #[test]
    fn test_completeness_ignores_clinic() {
        let mut address = Address::blank();
        for field in AddressField::ALL.iter().filter(|f| !f.is_optional()) {
            assert!(!address.is_complete());
            address.set(*field, "x");
        }
        assert!(address.is_complete());
        assert!(address.hospital_clinic.is_empty());
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let address: Address =
            serde_json::from_str(r#"{"doctorName":"Dr. Rao","flatNo":"12"}"#).unwrap();
        assert_eq!(address.doctor_name, "Dr. Rao");
        assert_eq!(address.flat_no, "12");
        assert_eq!(address.mobile, "");

        let json = serde_json::to_string(&address).unwrap();
        assert!(json.contains("\"hospitalClinic\":\"\""));
    }
}
