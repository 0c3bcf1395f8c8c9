use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod account;
mod cli;
mod client;
mod config;
mod demo;
mod error;
mod images;
mod payload;
mod planner;
mod store;
mod ui;
mod validation;
mod version;

#[cfg(test)]
mod tests;

use cli::CliHandler;
use version::CURRENT_VERSION;

#[derive(Parser)]
#[command(
    name = "closetplan",
    about = "Closet Planner - analyze your closet and generate outfit plans",
    long_about = "Closet Planner - outfit planning from your own closet

OVERVIEW:
  This tool sends closet photos or a typed clothes list to the Closet
  Planner API, then renders the parsed closet and outfit suggestions for
  your occasion and itinerary.

WORKFLOW:
  1. Plan as a guest from photos or text, or use demo data offline
  2. Sign in to keep a persisted closet and saved outfits
  3. Generate outfits from your saved closet and save the ones you like

QUICK START:
  closetplan plan --manual-text \"white tee, black jeans\" \\
      --occasion \"Team dinner\" --itinerary \"Dinner then drinks\"
  closetplan plan --demo                # Offline demo results
  closetplan login                      # Store your access token
  closetplan closet list                # Persisted closet items
  closetplan outfits generate --occasion \"Gallery night\" \\
      --itinerary \"Walk then dinner\"
  closetplan status                     # Server and auth status",
    version = CURRENT_VERSION,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze closet input and generate outfits as a guest
    Plan(PlanArgs),

    /// Show canned demo results without calling the API
    Demo,

    /// Show server and authentication status
    #[command(aliases = &["st"])]
    Status,

    /// Store an access token for account features
    Login(LoginArgs),

    /// Remove the stored access token
    Logout,

    /// Manage persisted closet items
    Closet(ClosetArgs),

    /// Generate and manage saved outfits
    Outfits(OutfitsArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Closet photo to upload (repeatable)
    #[arg(short, long = "image")]
    pub image: Vec<PathBuf>,

    /// Directory of closet photos to upload
    #[arg(long)]
    pub images_dir: Option<PathBuf>,

    /// Typed clothes list, used instead of or alongside photos
    #[arg(short, long)]
    pub manual_text: Option<String>,

    /// What the outfits are for
    #[arg(short, long)]
    pub occasion: Option<String>,

    /// Rough plan for the day or evening
    #[arg(long)]
    pub itinerary: Option<String>,

    /// Optional style preferences
    #[arg(short, long)]
    pub preferences: Option<String>,

    /// Skip the network and show demo results
    #[arg(long)]
    pub demo: bool,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Access token; prompted for interactively when omitted
    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Args)]
pub struct ClosetArgs {
    #[command(subcommand)]
    pub command: ClosetCommand,
}

#[derive(Subcommand)]
pub enum ClosetCommand {
    /// List persisted closet items
    #[command(aliases = &["ls"])]
    List,

    /// Add a closet item
    Add(AddItemArgs),

    /// Update fields on a closet item
    Update(UpdateItemArgs),

    /// Delete a closet item
    #[command(aliases = &["rm"])]
    Remove(RemoveItemArgs),

    /// Attach an image to a closet item
    SetImage {
        item_id: String,

        #[arg(long)]
        image: PathBuf,
    },

    /// Remove the image from a closet item
    ClearImage { item_id: String },
}

#[derive(Args)]
pub struct AddItemArgs {
    pub name: String,

    /// top, bottom, dress, outerwear, shoes, accessory, or other
    #[arg(short, long)]
    pub category: String,

    #[arg(long)]
    pub color: String,

    /// casual, smart-casual, formal, athleisure, or unknown
    #[arg(short, long, default_value = "unknown")]
    pub formality: String,

    /// spring, summer, fall, or winter (repeatable)
    #[arg(short, long = "season", required = true)]
    pub season: Vec<String>,

    /// Free-form tag (repeatable)
    #[arg(short, long = "tag")]
    pub tag: Vec<String>,

    #[arg(long)]
    pub material: Option<String>,

    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct UpdateItemArgs {
    pub item_id: String,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub category: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub material: Option<String>,

    #[arg(long)]
    pub pattern: Option<String>,

    #[arg(short, long)]
    pub formality: Option<String>,

    /// Replacement season set; omit to leave unchanged
    #[arg(short, long = "season")]
    pub season: Vec<String>,

    /// Replacement tag set; omit to leave unchanged
    #[arg(short, long = "tag")]
    pub tag: Vec<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct RemoveItemArgs {
    pub item_id: String,
}

#[derive(Args)]
pub struct OutfitsArgs {
    #[command(subcommand)]
    pub command: OutfitsCommand,
}

#[derive(Subcommand)]
pub enum OutfitsCommand {
    /// Generate outfit suggestions from your persisted closet
    Generate(GenerateArgs),

    /// List saved outfits
    #[command(aliases = &["ls"])]
    List,

    /// Delete a saved outfit
    #[command(aliases = &["rm"])]
    Remove { saved_outfit_id: String },
}

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub occasion: String,

    #[arg(short, long)]
    pub itinerary: String,

    #[arg(short, long)]
    pub preferences: Option<String>,

    /// Save the outfit at this index right after generating
    #[arg(long)]
    pub save: Option<usize>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(format!("closetplan={}", log_level));
    subscriber.init();

    let mut handler = CliHandler::new();
    if let Err(e) = handler.execute(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
