//! Play-side core: judgement, input plumbing, seed persistence and the
//! session service that drives `beatmap_gen`.

pub mod config;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod seed;
pub mod service;

pub use config::{ConfigError, ServiceConfig};
pub use error::SessionError;
pub use service::SessionService;
