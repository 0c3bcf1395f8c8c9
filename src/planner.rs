//! Guest planner session
//!
//! Owns the draft form and the result/error/loading state for the
//! unauthenticated flow, and sequences the two dependent remote calls:
//! analyze first, then generate from the analyzed items. Failures are
//! converted into a single retry-or-demo guidance message; no retry
//! happens automatically.

use std::sync::Arc;
use tracing::debug;

use closetplan_protocol::{AnalyzeClosetResponse, GenerateOutfitsResponse};

use crate::client::PlannerApi;
use crate::demo::{demo_analyze_result, demo_outfit_result, DEMO_PREFERENCES};
use crate::error::{PlannerError, Result};
use crate::payload::{build_analyze_payload, build_generate_request};
use crate::validation::{validate_planner_form, PlannerFormErrors, PlannerFormValues};

const SUBMIT_FAILURE_GUIDANCE: &str =
    "Backend unavailable or request failed. Retry or use demo data.";

/// Guest submit flow orchestrator
pub struct PlannerSession<C: PlannerApi + ?Sized> {
    client: Arc<C>,
    values: PlannerFormValues,
    form_errors: PlannerFormErrors,
    error_message: Option<String>,
    analysis: Option<AnalyzeClosetResponse>,
    outfits: Option<GenerateOutfitsResponse>,
    loading: bool,
}

impl<C: PlannerApi + ?Sized> PlannerSession<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            values: PlannerFormValues::default(),
            form_errors: PlannerFormErrors::default(),
            error_message: None,
            analysis: None,
            outfits: None,
            loading: false,
        }
    }

    pub fn values(&self) -> &PlannerFormValues {
        &self.values
    }

    pub fn form_errors(&self) -> &PlannerFormErrors {
        &self.form_errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn analysis(&self) -> Option<&AnalyzeClosetResponse> {
        self.analysis.as_ref()
    }

    pub fn outfits(&self) -> Option<&GenerateOutfitsResponse> {
        self.outfits.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the draft wholesale
    ///
    /// Errors are recomputed only when some are already showing, so typing
    /// into a fresh form is not flagged prematurely.
    pub fn set_values(&mut self, next: PlannerFormValues) {
        self.values = next;
        if self.form_errors.has_errors() {
            self.form_errors = validate_planner_form(&self.values);
        }
    }

    pub fn clear_files(&mut self) {
        let mut next = self.values.clone();
        next.files.clear();
        self.set_values(next);
    }

    /// Validate, then run analyze and generate in order
    ///
    /// An invalid form stores the error map and issues no request at all.
    /// Loading is cleared on every exit path.
    pub async fn submit(&mut self) {
        let next_errors = validate_planner_form(&self.values);
        if next_errors.has_errors() {
            self.form_errors = next_errors;
            self.error_message = None;
            return;
        }

        self.form_errors = PlannerFormErrors::default();
        self.error_message = None;
        self.analysis = None;
        self.outfits = None;
        self.loading = true;

        if let Err(error) = self.run_submit().await {
            debug!(%error, "submit failed");
            self.error_message = Some(compose_submit_failure(&error));
        }
        self.loading = false;
    }

    async fn run_submit(&mut self) -> Result<()> {
        let payload = build_analyze_payload(&self.values);
        let analyzed = self.client.analyze_closet(&payload).await?;

        let request = build_generate_request(&analyzed, &self.values);
        self.analysis = Some(analyzed);

        let generated = self.client.generate_outfits(&request).await?;
        self.outfits = Some(generated);
        Ok(())
    }

    /// Fill both result slots from canned content, bypassing the network
    pub fn use_demo_data(&mut self) {
        self.form_errors = PlannerFormErrors::default();
        self.loading = false;
        self.error_message = None;

        let outfits = demo_outfit_result();
        let mut next = self.values.clone();
        next.occasion = outfits.occasion.clone();
        next.itinerary = outfits.itinerary.clone();
        next.preferences = DEMO_PREFERENCES.to_string();
        self.values = next;

        self.analysis = Some(demo_analyze_result());
        self.outfits = Some(outfits);
    }
}

/// Compose the user-facing submit failure message
///
/// Typed API errors append the server message in parentheses; anything
/// else keeps the bare guidance so raw transport noise never surfaces.
fn compose_submit_failure(error: &PlannerError) -> String {
    match error.api_message() {
        Some(detail) => format!("{} ({})", SUBMIT_FAILURE_GUIDANCE, detail),
        None => SUBMIT_FAILURE_GUIDANCE.to_string(),
    }
}
