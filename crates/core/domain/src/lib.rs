pub mod data;
pub mod permissions;

pub use data::{
    EntityId, ObjectType, Organization, ParseEnumError, PowerObject, ResourceType, TcStatus,
    TcType, TechnicalCondition, User, UserRole,
};
pub use permissions::{Capability, role_has_capability};
