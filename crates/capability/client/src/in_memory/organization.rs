//! 组织内存实现

use super::InMemoryBackend;
use crate::error::ClientError;
use crate::traits::OrganizationApi;
use api_contract::OrganizationRequest;
use domain::{EntityId, Organization};

#[async_trait::async_trait]
impl OrganizationApi for InMemoryBackend {
    async fn list_organizations(&self) -> Result<Vec<Organization>, ClientError> {
        let state = self.read()?;
        Ok(state.organizations.values().cloned().collect())
    }

    async fn get_organization(&self, id: EntityId) -> Result<Organization, ClientError> {
        let state = self.read()?;
        state
            .organizations
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("organization"))
    }

    async fn create_organization(
        &self,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        let mut state = self.write()?;
        let id = state.allocate_id();
        let organization = Organization {
            id,
            name: request.name.clone(),
            bin: request.bin.clone(),
            address: request.address.clone(),
            contact_person: request.contact_person.clone(),
            contact_phone: request.contact_phone.clone(),
            created_at: None,
            updated_at: None,
        };
        state.organizations.insert(id, organization.clone());
        Ok(organization)
    }

    /// 同步刷新技术条件上的冗余组织名称。
    async fn update_organization(
        &self,
        id: EntityId,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        let mut state = self.write()?;
        let organization = state
            .organizations
            .get_mut(&id)
            .ok_or_else(|| ClientError::not_found("organization"))?;
        organization.name = request.name.clone();
        organization.bin = request.bin.clone();
        organization.address = request.address.clone();
        organization.contact_person = request.contact_person.clone();
        organization.contact_phone = request.contact_phone.clone();
        let updated = organization.clone();
        for permit in state
            .permits
            .values_mut()
            .filter(|permit| permit.organization_id == id)
        {
            permit.organization_name = Some(updated.name.clone());
        }
        Ok(updated)
    }

    async fn delete_organization(&self, id: EntityId) -> Result<(), ClientError> {
        let mut state = self.write()?;
        if state.permits.values().any(|permit| permit.organization_id == id) {
            return Err(ClientError::backend(
                409,
                "Нельзя удалить организацию с выданными ТУ",
            ));
        }
        state
            .organizations
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ClientError::not_found("organization"))
    }
}
