/// Version string shown by the CLI
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");
