//! Account session orchestration
//!
//! Authenticated variant of the planner flow, operating on server-persisted
//! closet items and saved outfits. Every successful mutation refetches both
//! lists instead of patching local state; the busy flag holds until the
//! refetch lands. Losing the token resets all per-user state synchronously.

use std::sync::Arc;
use tracing::debug;

use closetplan_protocol::{
    ClosetItemCreate, ClosetItemRecord, ClosetItemUpdate, GenerateOutfitsResponse,
    SavedOutfitCreate, SavedOutfitRecord,
};

use crate::client::PlannerApi;
use crate::error::{PlannerError, Result};
use crate::payload::build_protected_generate_request;
use crate::validation::UploadFile;

/// Plan inputs for generating from the saved closet
#[derive(Debug, Clone, Default)]
pub struct AccountPlanInputs {
    pub occasion: String,
    pub itinerary: String,
    pub preferences: String,
}

/// Authenticated account flow orchestrator
pub struct AccountSession<C: PlannerApi + ?Sized> {
    client: Arc<C>,
    access_token: Option<String>,
    closet_items: Vec<ClosetItemRecord>,
    saved_outfits: Vec<SavedOutfitRecord>,
    account_outfits: Option<GenerateOutfitsResponse>,
    plan_inputs: AccountPlanInputs,
    busy: bool,
    error_message: Option<String>,
}

impl<C: PlannerApi + ?Sized> AccountSession<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            access_token: None,
            closet_items: Vec::new(),
            saved_outfits: Vec::new(),
            account_outfits: None,
            plan_inputs: AccountPlanInputs::default(),
            busy: false,
            error_message: None,
        }
    }

    pub fn closet_items(&self) -> &[ClosetItemRecord] {
        &self.closet_items
    }

    pub fn saved_outfits(&self) -> &[SavedOutfitRecord] {
        &self.saved_outfits
    }

    pub fn account_outfits(&self) -> Option<&GenerateOutfitsResponse> {
        self.account_outfits.as_ref()
    }

    pub fn set_plan_inputs(&mut self, inputs: AccountPlanInputs) {
        self.plan_inputs = inputs;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// React to a session change
    ///
    /// A new token loads the profile and then both lists concurrently; a
    /// cleared token resets every piece of per-user state before this
    /// function returns, so nothing stale survives a sign-out.
    pub async fn set_token(&mut self, token: Option<String>) {
        match token {
            None => {
                self.access_token = None;
                self.closet_items = Vec::new();
                self.saved_outfits = Vec::new();
                self.account_outfits = None;
            }
            Some(token) => {
                self.access_token = Some(token.clone());
                self.busy = true;
                self.error_message = None;

                if let Err(error) = self.load_account_data(&token).await {
                    debug!(%error, "account data load failed");
                    self.error_message = Some(account_failure_message(&error));
                }
                self.busy = false;
            }
        }
    }

    async fn load_account_data(&mut self, token: &str) -> Result<()> {
        self.client.get_me(token).await?;
        self.refetch_lists(token).await
    }

    /// Refetch both lists; the two requests run concurrently
    async fn refetch_lists(&mut self, token: &str) -> Result<()> {
        let (items, saved) = tokio::join!(
            self.client.list_closet_items(token),
            self.client.list_saved_outfits(token)
        );
        self.closet_items = items?;
        self.saved_outfits = saved?;
        Ok(())
    }

    fn require_token(&self) -> Result<String> {
        self.access_token
            .clone()
            .ok_or_else(|| PlannerError::auth("Sign in to manage your closet."))
    }

    fn begin_action(&mut self) {
        self.busy = true;
        self.error_message = None;
    }

    fn finish_action(&mut self, result: Result<()>) {
        if let Err(error) = result {
            debug!(%error, "account action failed");
            self.error_message = Some(account_failure_message(&error));
        }
        self.busy = false;
    }

    pub async fn create_item(&mut self, payload: ClosetItemCreate) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self.client.create_closet_item(&token, &payload).await {
            Ok(_) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    pub async fn update_item(&mut self, item_id: &str, payload: ClosetItemUpdate) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self.client.update_closet_item(&token, item_id, &payload).await {
            Ok(_) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    pub async fn delete_item(&mut self, item_id: &str) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self.client.delete_closet_item(&token, item_id).await {
            Ok(()) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    pub async fn upload_item_image(&mut self, item_id: &str, file: UploadFile) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self
            .client
            .upload_closet_item_image(&token, item_id, &file)
            .await
        {
            Ok(_) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    pub async fn delete_item_image(&mut self, item_id: &str) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self.client.delete_closet_item_image(&token, item_id).await {
            Ok(_) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    /// Generate outfits from the persisted closet
    ///
    /// Checks the plan inputs before any request and leaves both lists
    /// untouched; the batch is only held for later save actions.
    pub async fn generate_from_saved_closet(&mut self) {
        let Ok(token) = self.require_token() else { return };

        if self.plan_inputs.occasion.trim().is_empty()
            || self.plan_inputs.itinerary.trim().is_empty()
        {
            self.error_message = Some("Occasion and itinerary are required.".to_string());
            return;
        }

        self.begin_action();
        let request = build_protected_generate_request(
            &self.plan_inputs.occasion,
            &self.plan_inputs.itinerary,
            &self.plan_inputs.preferences,
        );
        let result = match self.client.generate_from_saved_closet(&token, &request).await {
            Ok(generated) => {
                self.account_outfits = Some(generated);
                Ok(())
            }
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    /// Persist one outfit from the last generated batch
    pub async fn save_outfit(&mut self, outfit_index: usize) {
        let Ok(token) = self.require_token() else { return };
        let Some(batch) = self.account_outfits.clone() else { return };

        let Some(chosen) = batch.outfits.get(outfit_index) else {
            self.error_message = Some("That outfit is no longer available.".to_string());
            return;
        };

        self.begin_action();
        let payload = SavedOutfitCreate {
            title: Some(chosen.title.clone()),
            occasion: batch.occasion.clone(),
            itinerary: batch.itinerary.clone(),
            outfit_snapshot: chosen.clone(),
            global_tips: batch.global_tips.clone(),
        };
        let result = match self.client.create_saved_outfit(&token, &payload).await {
            Ok(_) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }

    pub async fn delete_saved_outfit(&mut self, saved_outfit_id: &str) {
        let Ok(token) = self.require_token() else { return };
        self.begin_action();
        let result = match self.client.delete_saved_outfit(&token, saved_outfit_id).await {
            Ok(()) => self.refetch_lists(&token).await,
            Err(error) => Err(error),
        };
        self.finish_action(result);
    }
}

fn account_failure_message(error: &PlannerError) -> String {
    match error.api_message() {
        Some(detail) => detail.to_string(),
        None => error.to_string(),
    }
}
