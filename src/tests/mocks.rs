//! Mock implementations for testing

use std::collections::HashMap;
use std::collections::VecDeque;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::json;

use closetplan_protocol::{
    AnalyzeClosetResponse, ClosetItemCreate, ClosetItemRecord, ClosetItemUpdate,
    GenerateOutfitsRequest, GenerateOutfitsResponse, HealthResponse, MeResponse,
    ProtectedGenerateOutfitsRequest, SavedOutfitCreate, SavedOutfitRecord,
};

use crate::client::PlannerApi;
use crate::error::{PlannerError, Result};
use crate::payload::AnalyzePayload;
use crate::validation::UploadFile;

/// One recorded API call
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub operation: String,
    pub token: Option<String>,
    pub payload: Option<serde_json::Value>,
}

/// Recording mock API client
///
/// Responses are queued per operation name and consumed in order; a call
/// with no queued response fails loudly so tests cannot silently pass on
/// missing setup. Every call is recorded for sequence assertions.
#[derive(Debug, Default)]
pub struct MockPlannerApi {
    responses: Mutex<HashMap<String, VecDeque<std::result::Result<serde_json::Value, PlannerError>>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockPlannerApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, operation: &str, response: serde_json::Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(Ok(response));
    }

    pub fn add_error(&self, operation: &str, error: PlannerError) {
        self.responses
            .lock()
            .unwrap()
            .entry(operation.to_string())
            .or_default()
            .push_back(Err(error));
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded calls for one operation
    pub fn call_count(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.operation == operation)
            .count()
    }

    /// Operation names in call order
    pub fn call_order(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.operation.clone())
            .collect()
    }

    fn respond<R: DeserializeOwned>(
        &self,
        operation: &str,
        token: Option<&str>,
        payload: Option<serde_json::Value>,
    ) -> Result<R> {
        self.requests.lock().unwrap().push(RecordedRequest {
            operation: operation.to_string(),
            token: token.map(str::to_string),
            payload,
        });

        let queued = self
            .responses
            .lock()
            .unwrap()
            .get_mut(operation)
            .and_then(VecDeque::pop_front);

        match queued {
            Some(Ok(value)) => serde_json::from_value(value)
                .map_err(|e| PlannerError::serialization(e.to_string())),
            Some(Err(error)) => Err(error),
            None => Err(PlannerError::internal(format!(
                "no mock response queued for {operation}"
            ))),
        }
    }
}

impl PlannerApi for MockPlannerApi {
    async fn health(&self) -> Result<HealthResponse> {
        self.respond("health", None, None)
    }

    async fn analyze_closet(&self, payload: &AnalyzePayload) -> Result<AnalyzeClosetResponse> {
        let recorded = json!({
            "files": payload.files.iter().map(|f| f.file_name.clone()).collect::<Vec<_>>(),
            "manual_clothes_text": payload.manual_clothes_text,
        });
        self.respond("analyze_closet", None, Some(recorded))
    }

    async fn generate_outfits(
        &self,
        request: &GenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse> {
        self.respond("generate_outfits", None, Some(serde_json::to_value(request)?))
    }

    async fn get_me(&self, access_token: &str) -> Result<MeResponse> {
        self.respond("get_me", Some(access_token), None)
    }

    async fn list_closet_items(&self, access_token: &str) -> Result<Vec<ClosetItemRecord>> {
        self.respond("list_closet_items", Some(access_token), None)
    }

    async fn create_closet_item(
        &self,
        access_token: &str,
        payload: &ClosetItemCreate,
    ) -> Result<ClosetItemRecord> {
        self.respond(
            "create_closet_item",
            Some(access_token),
            Some(serde_json::to_value(payload)?),
        )
    }

    async fn update_closet_item(
        &self,
        access_token: &str,
        item_id: &str,
        payload: &ClosetItemUpdate,
    ) -> Result<ClosetItemRecord> {
        self.respond(
            "update_closet_item",
            Some(access_token),
            Some(json!({"item_id": item_id, "payload": serde_json::to_value(payload)?})),
        )
    }

    async fn delete_closet_item(&self, access_token: &str, item_id: &str) -> Result<()> {
        self.respond::<serde_json::Value>(
            "delete_closet_item",
            Some(access_token),
            Some(json!({"item_id": item_id})),
        )?;
        Ok(())
    }

    async fn upload_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
        file: &UploadFile,
    ) -> Result<ClosetItemRecord> {
        self.respond(
            "upload_closet_item_image",
            Some(access_token),
            Some(json!({"item_id": item_id, "file_name": file.file_name})),
        )
    }

    async fn delete_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
    ) -> Result<ClosetItemRecord> {
        self.respond(
            "delete_closet_item_image",
            Some(access_token),
            Some(json!({"item_id": item_id})),
        )
    }

    async fn generate_from_saved_closet(
        &self,
        access_token: &str,
        request: &ProtectedGenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse> {
        self.respond(
            "generate_from_saved_closet",
            Some(access_token),
            Some(serde_json::to_value(request)?),
        )
    }

    async fn list_saved_outfits(&self, access_token: &str) -> Result<Vec<SavedOutfitRecord>> {
        self.respond("list_saved_outfits", Some(access_token), None)
    }

    async fn create_saved_outfit(
        &self,
        access_token: &str,
        payload: &SavedOutfitCreate,
    ) -> Result<SavedOutfitRecord> {
        self.respond(
            "create_saved_outfit",
            Some(access_token),
            Some(serde_json::to_value(payload)?),
        )
    }

    async fn delete_saved_outfit(&self, access_token: &str, saved_outfit_id: &str) -> Result<()> {
        self.respond::<serde_json::Value>(
            "delete_saved_outfit",
            Some(access_token),
            Some(json!({"saved_outfit_id": saved_outfit_id})),
        )?;
        Ok(())
    }
}
