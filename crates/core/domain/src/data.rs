use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 后端实体的数字主键。
pub type EntityId = i64;

/// 枚举解析失败（命令行参数、表单输入）。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// 用户角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(ParseEnumError::new("role", other)),
        }
    }
}

/// 电力对象类型。
///
/// 后端可能返回控制台不认识的类型，统一落到 `Unknown`，展示层据此跳过。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Substation,
    Tp,
    Kru,
    #[serde(other)]
    Unknown,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substation => "substation",
            Self::Tp => "tp",
            Self::Kru => "kru",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for ObjectType {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "substation" => Ok(Self::Substation),
            "tp" => Ok(Self::Tp),
            "kru" => Ok(Self::Kru),
            other => Err(ParseEnumError::new("object type", other)),
        }
    }
}

/// 技术条件类型：永久 / 临时。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TcType {
    Permanent,
    Temporary,
}

impl TcType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Temporary => "temporary",
        }
    }
}

impl FromStr for TcType {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "permanent" => Ok(Self::Permanent),
            "temporary" => Ok(Self::Temporary),
            other => Err(ParseEnumError::new("tc type", other)),
        }
    }
}

/// 资源类型。电力的数量单位为 kW，供水为 m³/h。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Electricity,
    Water,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity",
            Self::Water => "water",
        }
    }
}

impl FromStr for ResourceType {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "electricity" => Ok(Self::Electricity),
            "water" => Ok(Self::Water),
            other => Err(ParseEnumError::new("resource type", other)),
        }
    }
}

/// 技术条件状态，权威值由后端给出，客户端从不自行推算。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TcStatus {
    Active,
    Expired,
    Cancelled,
}

impl TcStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for TcStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(ParseEnumError::new("status", other)),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_str!(UserRole, ObjectType, TcType, ResourceType, TcStatus);

/// 用户。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// 组织（技术条件的申请方）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: EntityId,
    pub name: String,
    /// 税号（БИН）。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 电力对象（变电站、变压器点、开关柜）。
///
/// 最大容量同时以 MW 与 kW 保存，写入时须保持 `max_power_mw * 1000 == max_power_kw`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerObject {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub max_power_mw: f64,
    pub max_power_kw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// 技术条件（ТУ）。
///
/// `organization_name` / `object_name` 是后端附带的冗余展示字段，聚合时只按 id 关联。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCondition {
    pub id: EntityId,
    pub organization_id: EntityId,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub object_id: Option<EntityId>,
    #[serde(default)]
    pub object_name: Option<String>,
    pub tc_type: TcType,
    pub resource_type: ResourceType,
    pub tc_number: String,
    /// 电力为 kW，供水为 m³/h。
    pub power_amount: f64,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub status: TcStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TechnicalCondition {
    pub fn is_active(&self) -> bool {
        self.status == TcStatus::Active
    }
}
