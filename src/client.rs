//! HTTP client for the Closet Planner API
//!
//! One trait method per remote operation; `HttpPlannerApi` is the real
//! implementation over reqwest, and the test suite substitutes a
//! recording mock. Every non-success response is classified into a typed
//! API error carrying the status and the server's `detail` message when
//! one is present.

use reqwest::multipart;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use closetplan_protocol::{
    AnalyzeClosetResponse, ClosetItemCreate, ClosetItemRecord, ClosetItemUpdate,
    GenerateOutfitsRequest, GenerateOutfitsResponse, HealthResponse, MeResponse,
    ProtectedGenerateOutfitsRequest, SavedOutfitCreate, SavedOutfitRecord,
};

use crate::config::ClientConfig;
use crate::error::{PlannerError, Result};
use crate::payload::{AnalyzePayload, ANALYZE_FILES_FIELD, ANALYZE_MANUAL_TEXT_FIELD};
use crate::validation::UploadFile;

/// Remote operations consumed by the orchestrators
///
/// Callers supply the bearer token on every authenticated method; the
/// client never stores or refreshes credentials.
pub trait PlannerApi {
    async fn health(&self) -> Result<HealthResponse>;

    async fn analyze_closet(&self, payload: &AnalyzePayload) -> Result<AnalyzeClosetResponse>;

    async fn generate_outfits(
        &self,
        request: &GenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse>;

    async fn get_me(&self, access_token: &str) -> Result<MeResponse>;

    async fn list_closet_items(&self, access_token: &str) -> Result<Vec<ClosetItemRecord>>;

    async fn create_closet_item(
        &self,
        access_token: &str,
        payload: &ClosetItemCreate,
    ) -> Result<ClosetItemRecord>;

    async fn update_closet_item(
        &self,
        access_token: &str,
        item_id: &str,
        payload: &ClosetItemUpdate,
    ) -> Result<ClosetItemRecord>;

    async fn delete_closet_item(&self, access_token: &str, item_id: &str) -> Result<()>;

    async fn upload_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
        file: &UploadFile,
    ) -> Result<ClosetItemRecord>;

    async fn delete_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
    ) -> Result<ClosetItemRecord>;

    async fn generate_from_saved_closet(
        &self,
        access_token: &str,
        request: &ProtectedGenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse>;

    async fn list_saved_outfits(&self, access_token: &str) -> Result<Vec<SavedOutfitRecord>>;

    async fn create_saved_outfit(
        &self,
        access_token: &str,
        payload: &SavedOutfitCreate,
    ) -> Result<SavedOutfitRecord>;

    async fn delete_saved_outfit(&self, access_token: &str, saved_outfit_id: &str) -> Result<()>;
}

/// Structured error body convention: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Classify a non-success response into a typed API error
///
/// Falls back to a generic status message when the body is missing,
/// unparsable, or lacks a `detail` field.
pub(crate) fn classify_error(status: u16, body: &str) -> PlannerError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.detail)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    PlannerError::api(status, message)
}

/// Planner API client over reqwest
#[derive(Debug, Clone)]
pub struct HttpPlannerApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpPlannerApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout));
        if !config.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, endpoint: &str) -> String {
        self.config.endpoint_url(endpoint)
    }

    async fn parse<R: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<R> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status.as_u16(), &body));
        }
        response
            .json::<R>()
            .await
            .map_err(|e| PlannerError::invalid_response(e.to_string()))
    }

    /// Check status and drop the body; delete endpoints return a body the
    /// client does not consume.
    async fn expect_success(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error(status.as_u16(), &body));
        }
        Ok(())
    }

    fn analyze_form(payload: &AnalyzePayload) -> Result<multipart::Form> {
        let mut form = multipart::Form::new();

        for file in &payload.files {
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| PlannerError::invalid_input(e.to_string()))?;
            form = form.part(ANALYZE_FILES_FIELD, part);
        }

        if let Some(manual_text) = &payload.manual_clothes_text {
            form = form.text(ANALYZE_MANUAL_TEXT_FIELD, manual_text.clone());
        }

        Ok(form)
    }

    fn image_form(file: &UploadFile) -> Result<multipart::Form> {
        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| PlannerError::invalid_input(e.to_string()))?;
        Ok(multipart::Form::new().part("file", part))
    }
}

impl PlannerApi for HttpPlannerApi {
    async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;
        Self::parse(response).await
    }

    async fn analyze_closet(&self, payload: &AnalyzePayload) -> Result<AnalyzeClosetResponse> {
        debug!(files = payload.files.len(), "analyzing closet");
        let form = Self::analyze_form(payload)?;
        let response = self
            .client
            .post(self.url("/analyze-closet"))
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn generate_outfits(
        &self,
        request: &GenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse> {
        debug!(items = request.closet_items.len(), "generating outfits");
        let response = self
            .client
            .post(self.url("/generate-outfits"))
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn get_me(&self, access_token: &str) -> Result<MeResponse> {
        let response = self
            .client
            .get(self.url("/me"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn list_closet_items(&self, access_token: &str) -> Result<Vec<ClosetItemRecord>> {
        let response = self
            .client
            .get(self.url("/me/closet-items"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn create_closet_item(
        &self,
        access_token: &str,
        payload: &ClosetItemCreate,
    ) -> Result<ClosetItemRecord> {
        let response = self
            .client
            .post(self.url("/me/closet-items"))
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn update_closet_item(
        &self,
        access_token: &str,
        item_id: &str,
        payload: &ClosetItemUpdate,
    ) -> Result<ClosetItemRecord> {
        let response = self
            .client
            .patch(self.url(&format!("/me/closet-items/{item_id}")))
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete_closet_item(&self, access_token: &str, item_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/me/closet-items/{item_id}")))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn upload_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
        file: &UploadFile,
    ) -> Result<ClosetItemRecord> {
        let form = Self::image_form(file)?;
        let response = self
            .client
            .post(self.url(&format!("/me/closet-items/{item_id}/image")))
            .bearer_auth(access_token)
            .multipart(form)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete_closet_item_image(
        &self,
        access_token: &str,
        item_id: &str,
    ) -> Result<ClosetItemRecord> {
        let response = self
            .client
            .delete(self.url(&format!("/me/closet-items/{item_id}/image")))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn generate_from_saved_closet(
        &self,
        access_token: &str,
        request: &ProtectedGenerateOutfitsRequest,
    ) -> Result<GenerateOutfitsResponse> {
        let response = self
            .client
            .post(self.url("/me/generate-outfits"))
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn list_saved_outfits(&self, access_token: &str) -> Result<Vec<SavedOutfitRecord>> {
        let response = self
            .client
            .get(self.url("/me/saved-outfits"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn create_saved_outfit(
        &self,
        access_token: &str,
        payload: &SavedOutfitCreate,
    ) -> Result<SavedOutfitRecord> {
        let response = self
            .client
            .post(self.url("/me/saved-outfits"))
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete_saved_outfit(&self, access_token: &str, saved_outfit_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/me/saved-outfits/{saved_outfit_id}")))
            .bearer_auth(access_token)
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_with_detail_uses_the_server_message() {
        let err = classify_error(400, r#"{"detail":"Too many files. Maximum allowed is 8."}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.api_message(), Some("Too many files. Maximum allowed is 8."));
    }

    #[test]
    fn error_without_detail_falls_back_to_status_message() {
        let err = classify_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.api_message(), Some("Request failed with status 502"));
    }

    #[test]
    fn error_with_empty_json_body_falls_back_too() {
        let err = classify_error(500, "{}");
        assert_eq!(err.api_message(), Some("Request failed with status 500"));
    }

    #[test]
    fn analyze_form_accepts_valid_mime_types() {
        let payload = AnalyzePayload {
            files: vec![crate::payload::AnalyzeFilePart {
                file_name: "look.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                bytes: vec![1, 2, 3],
            }],
            manual_clothes_text: Some("white tee".to_string()),
        };
        assert!(HttpPlannerApi::analyze_form(&payload).is_ok());
    }

    #[test]
    fn client_construction_rejects_empty_base_url() {
        let config = ClientConfig { base_url: String::new(), ..Default::default() };
        assert!(HttpPlannerApi::new(config).is_err());
    }
}
