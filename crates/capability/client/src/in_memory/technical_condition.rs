//! 技术条件内存实现

use super::{InMemoryBackend, State};
use crate::error::ClientError;
use crate::traits::TechnicalConditionApi;
use api_contract::{TcListQuery, TechnicalConditionRequest};
use domain::{EntityId, TcStatus, TechnicalCondition};

/// 按请求体覆盖技术条件字段，并补全冗余名称。
fn apply_request(
    state: &State,
    permit: &mut TechnicalCondition,
    request: &TechnicalConditionRequest,
) -> Result<(), ClientError> {
    permit.organization_name = Some(state.organization_name(request.organization_id)?);
    permit.object_name = Some(state.object_name(request.object_id)?);
    permit.organization_id = request.organization_id;
    permit.object_id = Some(request.object_id);
    permit.tc_type = request.tc_type;
    permit.resource_type = request.resource_type;
    permit.tc_number = request.tc_number.clone();
    permit.power_amount = request.power_amount;
    permit.issue_date = Some(request.issue_date.clone());
    permit.expiry_date = request.expiry_date.clone();
    permit.document_link = request.document_link.clone();
    permit.notes = request.notes.clone();
    Ok(())
}

#[async_trait::async_trait]
impl TechnicalConditionApi for InMemoryBackend {
    async fn list_technical_conditions(
        &self,
        query: TcListQuery,
    ) -> Result<Vec<TechnicalCondition>, ClientError> {
        let state = self.read()?;
        Ok(state
            .permits
            .values()
            .filter(|permit| {
                query
                    .resource_type
                    .is_none_or(|resource_type| permit.resource_type == resource_type)
            })
            .filter(|permit| query.tc_type.is_none_or(|tc_type| permit.tc_type == tc_type))
            .cloned()
            .collect())
    }

    async fn get_technical_condition(
        &self,
        id: EntityId,
    ) -> Result<TechnicalCondition, ClientError> {
        let state = self.read()?;
        state
            .permits
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("technical condition"))
    }

    async fn create_technical_condition(
        &self,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        let mut state = self.write()?;
        let mut permit = TechnicalCondition {
            id: 0,
            organization_id: request.organization_id,
            organization_name: None,
            object_id: Some(request.object_id),
            object_name: None,
            tc_type: request.tc_type,
            resource_type: request.resource_type,
            tc_number: String::new(),
            power_amount: 0.0,
            issue_date: None,
            expiry_date: None,
            status: TcStatus::Active,
            document_link: None,
            notes: None,
            created_by: None,
            created_at: None,
            updated_at: None,
        };
        apply_request(&state, &mut permit, request)?;
        permit.id = state.allocate_id();
        state.permits.insert(permit.id, permit.clone());
        Ok(permit)
    }

    async fn update_technical_condition(
        &self,
        id: EntityId,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        let mut state = self.write()?;
        let mut permit = state
            .permits
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("technical condition"))?;
        apply_request(&state, &mut permit, request)?;
        state.permits.insert(id, permit.clone());
        Ok(permit)
    }

    async fn delete_technical_condition(&self, id: EntityId) -> Result<(), ClientError> {
        let mut state = self.write()?;
        state
            .permits
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ClientError::not_found("technical condition"))
    }
}
