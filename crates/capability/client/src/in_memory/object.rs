//! 电力对象内存实现

use super::InMemoryBackend;
use crate::error::ClientError;
use crate::traits::ObjectApi;
use api_contract::PowerObjectRequest;
use domain::{EntityId, PowerObject};

#[async_trait::async_trait]
impl ObjectApi for InMemoryBackend {
    async fn list_objects(&self) -> Result<Vec<PowerObject>, ClientError> {
        let state = self.read()?;
        Ok(state.objects.values().cloned().collect())
    }

    async fn get_object(&self, id: EntityId) -> Result<PowerObject, ClientError> {
        let state = self.read()?;
        state
            .objects
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::not_found("object"))
    }

    async fn create_object(
        &self,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        let mut state = self.write()?;
        let id = state.allocate_id();
        let object = PowerObject {
            id,
            name: request.name.clone(),
            object_type: request.object_type,
            max_power_mw: request.max_power_mw,
            max_power_kw: request.max_power_kw,
            description: request.description.clone(),
            created_at: None,
            updated_at: None,
        };
        state.objects.insert(id, object.clone());
        Ok(object)
    }

    async fn update_object(
        &self,
        id: EntityId,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        let mut state = self.write()?;
        let object = state
            .objects
            .get_mut(&id)
            .ok_or_else(|| ClientError::not_found("object"))?;
        object.name = request.name.clone();
        object.object_type = request.object_type;
        object.max_power_mw = request.max_power_mw;
        object.max_power_kw = request.max_power_kw;
        object.description = request.description.clone();
        let updated = object.clone();
        for permit in state
            .permits
            .values_mut()
            .filter(|permit| permit.object_id == Some(id))
        {
            permit.object_name = Some(updated.name.clone());
        }
        Ok(updated)
    }

    async fn delete_object(&self, id: EntityId) -> Result<(), ClientError> {
        let mut state = self.write()?;
        state
            .objects
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ClientError::not_found("object"))
    }
}
