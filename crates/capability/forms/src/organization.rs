use crate::errors::ValidationErrors;
use crate::non_blank;
use api_contract::OrganizationRequest;
use domain::Organization;

/// 组织表单，可选字段留空则不发送。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrganizationForm {
    pub name: String,
    pub bin: String,
    pub address: String,
    pub contact_person: String,
    pub contact_phone: String,
}

impl OrganizationForm {
    pub fn from_organization(organization: &Organization) -> Self {
        Self {
            name: organization.name.clone(),
            bin: organization.bin.clone().unwrap_or_default(),
            address: organization.address.clone().unwrap_or_default(),
            contact_person: organization.contact_person.clone().unwrap_or_default(),
            contact_phone: organization.contact_phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<OrganizationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.name.chars().count() < 2 {
            errors.add("name", "Название должно содержать минимум 2 символа");
        }
        errors.finish(|| OrganizationRequest {
            name: self.name.clone(),
            bin: non_blank(&self.bin),
            address: non_blank(&self.address),
            contact_person: non_blank(&self.contact_person),
            contact_phone: non_blank(&self.contact_phone),
        })
    }
}
