//! MW ⇄ kW 换算。
//!
//! 电力对象的容量以 kW 为规范单位，同时冗余保存 MW 值；编辑时用户修改哪个单位，
//! 哪个就是权威值，另一个由它重新计算。

use domain::PowerObject;
use std::fmt;
use std::str::FromStr;

pub const KW_PER_MW: f64 = 1000.0;

/// 容量一致性校验的容差。
const CAPACITY_TOLERANCE: f64 = 1e-9;

/// 容量展示单位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUnit {
    Mw,
    Kw,
}

impl PowerUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mw => "mw",
            Self::Kw => "kw",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mw => "МВт",
            Self::Kw => "кВт",
        }
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUnit {
    type Err = domain::ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mw" => Ok(Self::Mw),
            "kw" => Ok(Self::Kw),
            _ => Err(domain::ParseEnumError {
                kind: "power unit",
                value: value.to_string(),
            }),
        }
    }
}

pub fn kw_from_mw(mw: f64) -> f64 {
    mw * KW_PER_MW
}

pub fn mw_from_kw(kw: f64) -> f64 {
    kw / KW_PER_MW
}

/// 提交给后端的容量对。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityPair {
    pub max_power_mw: f64,
    pub max_power_kw: f64,
}

impl CapacityPair {
    /// 以用户输入的单位为准，补全另一个单位。
    pub fn from_input(value: f64, unit: PowerUnit) -> Self {
        match unit {
            PowerUnit::Mw => Self {
                max_power_mw: value,
                max_power_kw: kw_from_mw(value),
            },
            PowerUnit::Kw => Self {
                max_power_mw: mw_from_kw(value),
                max_power_kw: value,
            },
        }
    }

    pub fn of(object: &PowerObject) -> Self {
        Self {
            max_power_mw: object.max_power_mw,
            max_power_kw: object.max_power_kw,
        }
    }

    /// `max_power_mw * 1000 == max_power_kw`（相对容差）。
    pub fn is_consistent(&self) -> bool {
        let expected = kw_from_mw(self.max_power_mw);
        let scale = expected.abs().max(self.max_power_kw.abs()).max(1.0);
        (expected - self.max_power_kw).abs() <= CAPACITY_TOLERANCE * scale
    }

    pub fn value_in(&self, unit: PowerUnit) -> f64 {
        match unit {
            PowerUnit::Mw => self.max_power_mw,
            PowerUnit::Kw => self.max_power_kw,
        }
    }
}

/// 编辑表单加载对象时推断初始展示单位。
///
/// 规则：`mw >= 1` 或 `mw` 恰好等于 `kw / 1000` 时显示 MW，否则显示 kW。
/// 比较是精确相等，`0.9999999` 这类边界值按原规则处理。
pub fn infer_display_unit(max_power_mw: f64, max_power_kw: f64) -> PowerUnit {
    #[allow(clippy::float_cmp)]
    let exact = max_power_mw == max_power_kw / KW_PER_MW;
    if max_power_mw >= 1.0 || exact {
        PowerUnit::Mw
    } else {
        PowerUnit::Kw
    }
}

/// 表单上的换算提示，例如 `2 МВт = 2000 кВт`。
pub fn conversion_hint(value: f64, unit: PowerUnit) -> String {
    match unit {
        PowerUnit::Mw => format!("{value} МВт = {} кВт", kw_from_mw(value)),
        PowerUnit::Kw => format!("{value} кВт = {:.3} МВт", mw_from_kw(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consistency_uses_relative_tolerance() {
        assert!(CapacityPair::from_input(0.63, PowerUnit::Mw).is_consistent());
        assert!(CapacityPair::from_input(123_456.789, PowerUnit::Kw).is_consistent());
        let broken = CapacityPair {
            max_power_mw: 1.0,
            max_power_kw: 999.0,
        };
        assert!(!broken.is_consistent());
    }
}
