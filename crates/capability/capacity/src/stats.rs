use domain::{
    ObjectType, Organization, PowerObject, TcStatus, TcType, TechnicalCondition, User, UserRole,
};
use tc_normalize::mw_from_kw;

/// 管理员概览统计。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminStats {
    pub total_users: usize,
    pub admin_users: usize,
    pub regular_users: usize,
    pub total_organizations: usize,
    pub total_objects: usize,
    pub substations: usize,
    pub tp: usize,
    pub kru: usize,
    pub permanent_tc: usize,
    pub temporary_tc: usize,
    pub active_tc: usize,
    pub expired_tc: usize,
    /// 所有技术条件（不区分状态）的数量之和。
    pub total_power_issued_kw: f64,
    pub total_power_issued_mw: f64,
}

impl AdminStats {
    pub fn compute(
        users: &[User],
        organizations: &[Organization],
        objects: &[PowerObject],
        permits: &[TechnicalCondition],
    ) -> Self {
        let count_users = |role| users.iter().filter(|user| user.role == role).count();
        let count_objects = |kind| {
            objects
                .iter()
                .filter(|object| object.object_type == kind)
                .count()
        };
        let count_kind = |kind| permits.iter().filter(|permit| permit.tc_type == kind).count();
        let count_status = |status| permits.iter().filter(|permit| permit.status == status).count();

        let mut amounts: Vec<f64> = permits.iter().map(|permit| permit.power_amount).collect();
        amounts.sort_by(f64::total_cmp);
        let total_power_issued_kw: f64 = amounts.iter().sum();

        Self {
            total_users: users.len(),
            admin_users: count_users(UserRole::Admin),
            regular_users: count_users(UserRole::User),
            total_organizations: organizations.len(),
            total_objects: objects.len(),
            substations: count_objects(ObjectType::Substation),
            tp: count_objects(ObjectType::Tp),
            kru: count_objects(ObjectType::Kru),
            permanent_tc: count_kind(TcType::Permanent),
            temporary_tc: count_kind(TcType::Temporary),
            active_tc: count_status(TcStatus::Active),
            expired_tc: count_status(TcStatus::Expired),
            total_power_issued_kw,
            total_power_issued_mw: mw_from_kw(total_power_issued_kw),
        }
    }
}
