//! Configuration management for drycontact.
//!
//! Provides XDG-compliant configuration storage and management,
//! including card profiles and application settings.

mod profiles;
mod settings;

pub use profiles::{CardProfile, ProfileManager};
pub use settings::{AppSettings, Paths};
