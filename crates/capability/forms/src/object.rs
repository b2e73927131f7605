use crate::errors::ValidationErrors;
use crate::non_blank;
use api_contract::PowerObjectRequest;
use domain::{ObjectType, PowerObject};
use tc_normalize::{CapacityPair, PowerUnit, conversion_hint, infer_display_unit};

/// 电力对象表单。
///
/// 容量以用户选择的单位输入，提交前换算为 MW/kW 两个字段。
#[derive(Debug, Clone, PartialEq)]
pub struct PowerObjectForm {
    pub name: String,
    pub object_type: ObjectType,
    pub unit: PowerUnit,
    pub value: f64,
    pub description: String,
}

impl PowerObjectForm {
    /// 编辑时预填：展示单位按存量数值推断。
    pub fn from_object(object: &PowerObject) -> Self {
        let unit = infer_display_unit(object.max_power_mw, object.max_power_kw);
        Self {
            name: object.name.clone(),
            object_type: object.object_type,
            unit,
            value: CapacityPair::of(object).value_in(unit),
            description: object.description.clone().unwrap_or_default(),
        }
    }

    /// 切换单位，数值换算到新单位，容量本身不变。
    pub fn with_unit(mut self, unit: PowerUnit) -> Self {
        self.value = self.capacity().value_in(unit);
        self.unit = unit;
        self
    }

    /// 换算提示，例如 `2 МВт = 2000 кВт`。
    pub fn preview(&self) -> String {
        conversion_hint(self.value, self.unit)
    }

    pub fn capacity(&self) -> CapacityPair {
        CapacityPair::from_input(self.value, self.unit)
    }

    pub fn validate(&self) -> Result<PowerObjectRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.chars().count() < 2 {
            errors.add("name", "Название должно содержать минимум 2 символа");
        }
        if self.object_type == ObjectType::Unknown {
            errors.add("type", "Выберите тип объекта");
        }
        if !self.value.is_finite() || self.value < 0.01 {
            errors.add("power_value", "Мощность должна быть больше 0");
        }
        errors.finish(|| {
            let capacity = self.capacity();
            PowerObjectRequest {
                name: self.name.clone(),
                object_type: self.object_type,
                max_power_mw: capacity.max_power_mw,
                max_power_kw: capacity.max_power_kw,
                description: non_blank(&self.description),
            }
        })
    }
}
