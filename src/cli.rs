use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use closetplan_protocol::{
    AnalyzeClosetResponse, ClosetItemCreate, ClosetItemRecord, ClosetItemUpdate,
    ClothingCategory, Formality, GenerateOutfitsResponse, SavedOutfitRecord, Season,
};

use crate::account::{AccountPlanInputs, AccountSession};
use crate::client::{HttpPlannerApi, PlannerApi};
use crate::config::AppConfig;
use crate::error::{PlannerError, Result};
use crate::images::{load_upload_file, ImageDirectory};
use crate::planner::PlannerSession;
use crate::store::{SessionStore, StoredSession};
use crate::ui::{create_spinner, format_closet_badge_label, format_confidence, UI};
use crate::validation::{PlannerFormErrors, PlannerFormValues};
use crate::{
    AddItemArgs, ClosetCommand, Commands, GenerateArgs, LoginArgs, OutfitsCommand, PlanArgs,
    RemoveItemArgs, UpdateItemArgs,
};

/// CLI handler for processing commands
pub struct CliHandler {
    config_path: Option<PathBuf>,
    ui: UI,
}

impl CliHandler {
    pub fn new() -> Self {
        Self {
            config_path: None,
            ui: UI::new(),
        }
    }

    #[allow(dead_code)]
    pub fn with_config_path(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            ui: UI::new(),
        }
    }

    async fn load_config(&self) -> Result<AppConfig> {
        AppConfig::load(self.config_path.as_deref()).await
    }

    fn open_client(&self, config: &AppConfig) -> Result<Arc<HttpPlannerApi>> {
        Ok(Arc::new(HttpPlannerApi::new(config.to_client_config())?))
    }

    fn open_store(&self, config: &AppConfig) -> Result<SessionStore> {
        SessionStore::new(config.token_path())
    }

    fn require_token(&self, store: &SessionStore) -> Result<String> {
        store
            .access_token()
            .ok_or_else(|| PlannerError::auth("Not signed in. Run 'closetplan login' first."))
    }

    /// Execute a CLI command
    pub async fn execute(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Plan(args) => self.handle_plan(args).await,
            Commands::Demo => self.handle_demo().await,
            Commands::Status => self.handle_status().await,
            Commands::Login(args) => self.handle_login(args).await,
            Commands::Logout => self.handle_logout().await,
            Commands::Closet(args) => self.handle_closet(args.command).await,
            Commands::Outfits(args) => self.handle_outfits(args.command).await,
        }
    }

    /// Handle plan command: validate, analyze, then generate
    async fn handle_plan(&mut self, args: PlanArgs) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let mut session = PlannerSession::new(client);

        if args.demo {
            session.use_demo_data();
            self.render_plan_results(&session);
            return Ok(());
        }

        let mut files = Vec::new();
        for path in &args.image {
            files.push(load_upload_file(path).await?);
        }
        if let Some(dir) = &args.images_dir {
            files.extend(ImageDirectory::from_path(dir).await?.files);
        }

        session.set_values(PlannerFormValues {
            files,
            manual_clothes_text: args.manual_text.unwrap_or_default(),
            occasion: args.occasion.unwrap_or_default(),
            itinerary: args.itinerary.unwrap_or_default(),
            preferences: args.preferences.unwrap_or_default(),
        });

        let spinner = create_spinner("Analyzing closet and generating outfits...");
        session.submit().await;
        spinner.finish_and_clear();

        if session.form_errors().has_errors() {
            self.render_form_errors(session.form_errors());
            return Ok(());
        }
        if let Some(message) = session.error_message() {
            self.ui.error(message);
            self.ui.info("Tip: 'closetplan plan --demo' works offline.");
        }
        self.render_plan_results(&session);
        Ok(())
    }

    /// Handle demo command: canned results, no network
    async fn handle_demo(&mut self) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let mut session = PlannerSession::new(client);
        session.use_demo_data();
        self.render_plan_results(&session);
        Ok(())
    }

    /// Handle status command
    async fn handle_status(&mut self) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let store = self.open_store(&config)?;

        let spinner = create_spinner("Checking server...");
        let health = client.health().await;
        spinner.finish_and_clear();

        let (server_connected, server_message) = match health {
            Ok(response) if response.status == "ok" => (true, String::new()),
            Ok(response) => (false, format!("status: {}", response.status)),
            Err(error) => (false, error.to_string()),
        };

        let mut status_rows = vec![
            ("Version", crate::version::CURRENT_VERSION.to_string()),
            (
                "Authentication",
                self.ui.format_auth_status(store.is_authenticated()),
            ),
        ];

        if let Some(session) = store.session() {
            status_rows.push(("User", session.user_id.clone()));
            status_rows.push(("Email", self.ui.format_user_field(session.email.clone())));
        }

        status_rows.push((
            "Server",
            if server_connected {
                self.ui.format_server_status(true)
            } else {
                format!("{} ({})", self.ui.format_server_status(false), server_message)
            },
        ));

        self.ui.card("Status", status_rows);
        Ok(())
    }

    /// Handle login command: verify the token against /me, then store it
    async fn handle_login(&mut self, args: LoginArgs) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let mut store = self.open_store(&config)?;

        let token = match args.token {
            Some(token) => token,
            None => dialoguer::Password::new()
                .with_prompt("Paste your access token")
                .interact()
                .map_err(|e| PlannerError::invalid_input(e.to_string()))?,
        };

        let spinner = create_spinner("Verifying token...");
        let me = client.get_me(&token).await;
        spinner.finish_and_clear();

        let me = me.map_err(|e| {
            PlannerError::token_rejected(format!("Token was not accepted: {}", e))
        })?;

        store.store(StoredSession {
            access_token: token,
            user_id: me.user_id.clone(),
            email: me.email.clone(),
            stored_at: chrono::Utc::now(),
        })?;

        self.ui.success(&format!(
            "Signed in as {}",
            me.email.unwrap_or(me.user_id)
        ));
        Ok(())
    }

    /// Handle logout command
    async fn handle_logout(&mut self) -> Result<()> {
        let config = self.load_config().await?;
        let mut store = self.open_store(&config)?;
        store.clear()?;
        self.ui.success("Signed out.");
        Ok(())
    }

    /// Handle closet subcommands against the authenticated account
    async fn handle_closet(&mut self, command: ClosetCommand) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let store = self.open_store(&config)?;
        let token = self.require_token(&store)?;

        let mut session = AccountSession::new(client);
        let spinner = create_spinner("Loading account data...");
        session.set_token(Some(token)).await;
        spinner.finish_and_clear();

        if let Some(message) = session.error_message() {
            self.ui.error(message);
            return Ok(());
        }

        match command {
            ClosetCommand::List => {
                self.render_closet_records(session.closet_items());
            }
            ClosetCommand::Add(args) => {
                let payload = closet_item_create(args)?;
                session.create_item(payload).await;
                self.report_mutation(&session, "Closet item added.");
                self.render_closet_records(session.closet_items());
            }
            ClosetCommand::Update(args) => {
                let (item_id, payload) = closet_item_update(args)?;
                session.update_item(&item_id, payload).await;
                self.report_mutation(&session, "Closet item updated.");
                self.render_closet_records(session.closet_items());
            }
            ClosetCommand::Remove(RemoveItemArgs { item_id }) => {
                session.delete_item(&item_id).await;
                self.report_mutation(&session, "Closet item removed.");
                self.render_closet_records(session.closet_items());
            }
            ClosetCommand::SetImage { item_id, image } => {
                let file = load_upload_file(&image).await?;
                session.upload_item_image(&item_id, file).await;
                self.report_mutation(&session, "Image attached.");
            }
            ClosetCommand::ClearImage { item_id } => {
                session.delete_item_image(&item_id).await;
                self.report_mutation(&session, "Image removed.");
            }
        }
        Ok(())
    }

    /// Handle outfits subcommands against the authenticated account
    async fn handle_outfits(&mut self, command: OutfitsCommand) -> Result<()> {
        let config = self.load_config().await?;
        let client = self.open_client(&config)?;
        let store = self.open_store(&config)?;
        let token = self.require_token(&store)?;

        let mut session = AccountSession::new(client);
        let spinner = create_spinner("Loading account data...");
        session.set_token(Some(token)).await;
        spinner.finish_and_clear();

        if let Some(message) = session.error_message() {
            self.ui.error(message);
            return Ok(());
        }

        match command {
            OutfitsCommand::Generate(GenerateArgs {
                occasion,
                itinerary,
                preferences,
                save,
            }) => {
                session.set_plan_inputs(AccountPlanInputs {
                    occasion,
                    itinerary,
                    preferences: preferences.unwrap_or_default(),
                });

                let spinner = create_spinner("Generating outfits from your closet...");
                session.generate_from_saved_closet().await;
                spinner.finish_and_clear();

                if let Some(message) = session.error_message() {
                    self.ui.error(message);
                    return Ok(());
                }
                if let Some(outfits) = session.account_outfits() {
                    let outfits = outfits.clone();
                    self.render_outfits(&outfits);
                }

                if let Some(index) = save {
                    session.save_outfit(index).await;
                    self.report_mutation(&session, "Outfit saved.");
                }
            }
            OutfitsCommand::List => {
                self.render_saved_outfits(session.saved_outfits());
            }
            OutfitsCommand::Remove { saved_outfit_id } => {
                session.delete_saved_outfit(&saved_outfit_id).await;
                self.report_mutation(&session, "Saved outfit removed.");
                self.render_saved_outfits(session.saved_outfits());
            }
        }
        Ok(())
    }

    fn report_mutation<C: PlannerApi + ?Sized>(
        &self,
        session: &AccountSession<C>,
        success_message: &str,
    ) {
        match session.error_message() {
            Some(message) => self.ui.error(message),
            None => self.ui.success(success_message),
        }
    }

    fn render_form_errors(&self, errors: &PlannerFormErrors) {
        for (field, message) in errors.entries() {
            self.ui.error(&format!("{}: {}", field, message));
        }
    }

    fn render_plan_results<C: PlannerApi + ?Sized>(&self, session: &PlannerSession<C>) {
        if let Some(analysis) = session.analysis() {
            self.render_analysis(analysis);
        }
        if let Some(outfits) = session.outfits() {
            self.render_outfits(outfits);
        }
    }

    fn render_analysis(&self, analysis: &AnalyzeClosetResponse) {
        self.ui.header("Parsed Closet");
        println!("{}", analysis.summary);
        self.ui.blank_line();

        let counts = analysis
            .category_counts
            .entries()
            .map(|(category, count)| (category.as_str(), count.to_string()));
        self.ui.card("Category Counts", counts.to_vec());

        for item in &analysis.items {
            let seasons: Vec<&str> = item.seasonality.iter().map(Season::as_str).collect();
            println!(
                "  • {}  [{} / {}]  {}",
                format_closet_badge_label(&item.name, Some(&item.color)),
                item.category.as_str(),
                item.formality.as_str(),
                seasons.join(", ")
            );
        }

        for warning in &analysis.warnings {
            self.ui.warning(warning);
        }
    }

    fn render_outfits(&self, outfits: &GenerateOutfitsResponse) {
        self.ui.header("Outfit Suggestions");
        println!("{} · {}", outfits.occasion, outfits.itinerary);

        for (index, outfit) in outfits.outfits.iter().enumerate() {
            self.ui.separator();
            println!(
                "[{}] {} ({})",
                index,
                outfit.title,
                format_confidence(outfit.confidence)
            );
            for piece in &outfit.pieces {
                println!(
                    "    - {} ({}): {}",
                    piece.item_name,
                    piece.category.as_str(),
                    piece.styling_note
                );
            }
            println!("    {}", outfit.reasoning);
            for alternative in &outfit.alternatives {
                println!("    Alternative: {}", alternative);
            }
        }

        if !outfits.global_tips.is_empty() {
            self.ui.blank_line();
            for tip in &outfits.global_tips {
                self.ui.info(&format!("Tip: {}", tip));
            }
        }
    }

    fn render_closet_records(&self, items: &[ClosetItemRecord]) {
        self.ui.header("My Closet");
        if items.is_empty() {
            println!("No closet items yet. Add one with 'closetplan closet add'.");
            return;
        }
        for item in items {
            let image_marker = if item.image_url.is_some() { " [image]" } else { "" };
            println!(
                "  {}  {}  [{} / {}]{}",
                item.id,
                format_closet_badge_label(&item.name, Some(&item.color)),
                item.category.as_str(),
                item.formality.as_str(),
                image_marker
            );
        }
    }

    fn render_saved_outfits(&self, saved: &[SavedOutfitRecord]) {
        self.ui.header("Saved Outfits");
        if saved.is_empty() {
            println!("No saved outfits yet.");
            return;
        }
        for record in saved {
            println!(
                "  {}  {}  ({} · {})",
                record.id,
                record.title.as_deref().unwrap_or("Untitled"),
                record.occasion,
                record.itinerary
            );
        }
    }
}

/// Parse a wire-format enum value ("top", "smart-casual", ...)
fn parse_wire<T: DeserializeOwned>(kind: &str, raw: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| PlannerError::invalid_input(format!("Unknown {}: {}", kind, raw)))
}

fn parse_seasons(raw: &[String]) -> Result<Vec<Season>> {
    raw.iter()
        .map(|season| parse_wire::<Season>("season", season))
        .collect()
}

fn closet_item_create(args: AddItemArgs) -> Result<ClosetItemCreate> {
    Ok(ClosetItemCreate {
        name: args.name,
        category: parse_wire::<ClothingCategory>("category", &args.category)?,
        color: args.color,
        material: args.material,
        pattern: args.pattern,
        formality: parse_wire::<Formality>("formality", &args.formality)?,
        seasonality: parse_seasons(&args.season)?,
        tags: args.tag,
        notes: args.notes,
    })
}

fn closet_item_update(args: UpdateItemArgs) -> Result<(String, ClosetItemUpdate)> {
    let seasonality = if args.season.is_empty() {
        None
    } else {
        Some(parse_seasons(&args.season)?)
    };
    let tags = if args.tag.is_empty() { None } else { Some(args.tag) };

    let update = ClosetItemUpdate {
        name: args.name,
        category: args
            .category
            .as_deref()
            .map(|raw| parse_wire::<ClothingCategory>("category", raw))
            .transpose()?,
        color: args.color,
        material: args.material,
        pattern: args.pattern,
        formality: args
            .formality
            .as_deref()
            .map(|raw| parse_wire::<Formality>("formality", raw))
            .transpose()?,
        seasonality,
        tags,
        notes: args.notes,
    };
    Ok((args.item_id, update))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_enum_parsing_accepts_kebab_case_values() {
        assert_eq!(
            parse_wire::<Formality>("formality", "smart-casual").unwrap(),
            Formality::SmartCasual
        );
        assert_eq!(
            parse_wire::<ClothingCategory>("category", "outerwear").unwrap(),
            ClothingCategory::Outerwear
        );
        assert!(parse_wire::<ClothingCategory>("category", "hat").is_err());
    }

    #[test]
    fn update_args_with_no_seasons_leave_seasonality_absent() {
        let args = UpdateItemArgs {
            item_id: "rec-1".to_string(),
            name: None,
            category: None,
            color: Some("navy".to_string()),
            material: None,
            pattern: None,
            formality: None,
            season: Vec::new(),
            tag: Vec::new(),
            notes: None,
        };
        let (item_id, update) = closet_item_update(args).unwrap();
        assert_eq!(item_id, "rec-1");
        assert!(update.seasonality.is_none());
        assert_eq!(update.color.as_deref(), Some("navy"));
    }
}
