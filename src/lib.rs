pub mod cli;
pub mod compare;
pub mod config;
pub mod inventory;
pub mod pipeline;
pub mod report;
pub mod version;

pub use cli::Cli;
pub use compare::{Comparison, Status, resolve, resolve_with};
pub use config::CmddiffConfig;
pub use inventory::{Inventory, LoadOutcome};
pub use pipeline::{Settings, Summary, run};
pub use report::Row;
pub use version::{Scheme, VersionScheme};
