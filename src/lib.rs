pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::json::{json_document, JsonDocument};
pub use config::toml_config::PlanConfig;
pub use core::projector::{minimize, MinimizeOptions, Projector};
pub use core::reconstructor::{reassemble, Reassembled};
pub use domain::model::{Arguments, Minimized, PathSpec, Projection};
pub use domain::ports::{construct_from_fields, Document, Field, Member, Reassemble};
pub use utils::error::{Result, SlimError};
