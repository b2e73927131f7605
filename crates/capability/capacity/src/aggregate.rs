use domain::{EntityId, PowerObject, TechnicalCondition};
use std::collections::HashMap;
use tc_normalize::mw_from_kw;

/// 单个电力对象的容量统计。
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCapacity {
    pub object: PowerObject,
    pub issued_power_kw: f64,
    pub issued_power_mw: f64,
    pub free_power_kw: f64,
    pub free_power_mw: f64,
    /// `[0, 100]`，`max_power_kw == 0` 时为 0。
    pub usage_percent: f64,
    pub total_tc: usize,
    pub active_tc: usize,
}

/// 计算每个电力对象的容量统计，输出顺序与 `objects` 一致。
///
/// 按 `object_id` 关联（冗余名称只用于展示），只有 `active` 的技术条件计入
/// 已发放容量；未关联对象的技术条件不计入任何对象。
/// 求和前先排序，结果与技术条件的输入顺序无关。
pub fn aggregate(objects: &[PowerObject], permits: &[TechnicalCondition]) -> Vec<ObjectCapacity> {
    let mut by_object: HashMap<EntityId, Vec<&TechnicalCondition>> = HashMap::new();
    for permit in permits {
        if let Some(object_id) = permit.object_id {
            by_object.entry(object_id).or_default().push(permit);
        }
    }

    objects
        .iter()
        .map(|object| {
            let related = by_object
                .get(&object.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let mut active: Vec<f64> = related
                .iter()
                .filter(|permit| permit.is_active())
                .map(|permit| permit.power_amount)
                .collect();
            let active_tc = active.len();
            active.sort_by(f64::total_cmp);
            let issued_power_kw: f64 = active.iter().sum();
            capacity_of(object.clone(), issued_power_kw, related.len(), active_tc)
        })
        .collect()
}

fn capacity_of(
    object: PowerObject,
    issued_power_kw: f64,
    total_tc: usize,
    active_tc: usize,
) -> ObjectCapacity {
    // 剩余容量落在 [0, max_power_kw]，使用率落在 [0, 100]。
    let capacity_kw = object.max_power_kw.max(0.0);
    let free_power_kw = (capacity_kw - issued_power_kw).clamp(0.0, capacity_kw);
    let usage_percent = if capacity_kw > 0.0 {
        let ratio = issued_power_kw / capacity_kw * 100.0;
        if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 100.0) }
    } else {
        0.0
    };
    ObjectCapacity {
        issued_power_mw: mw_from_kw(issued_power_kw),
        free_power_mw: mw_from_kw(free_power_kw),
        object,
        issued_power_kw,
        free_power_kw,
        usage_percent,
        total_tc,
        active_tc,
    }
}
