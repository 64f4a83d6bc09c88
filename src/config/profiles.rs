//! Card profile management.
//!
//! Profiles save a card layout (name, port count and the pins that start
//! out on) so it can be reused by name.

use crate::card::Card;
use crate::error::{ConfigError, ProfileError, ProfileResult};
use crate::types::PinSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::settings::Paths;

/// A saved card layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardProfile {
    /// Profile name (used as identifier).
    pub name: String,
    /// Description of this profile.
    #[serde(default)]
    pub description: String,
    /// Device name shown in the table banner.
    pub device_name: String,
    /// Number of 8-pin ports.
    #[serde(default = "default_ports")]
    pub ports: usize,
    /// Pins turned on when the card is built, as a pin specification.
    #[serde(default)]
    pub pins: String,
}

fn default_ports() -> usize {
    8
}

impl CardProfile {
    /// Largest port count a profile may describe.
    pub const MAX_PORTS: usize = u16::MAX as usize;

    /// Pins on a card built from this profile.
    pub fn number_of_pins(&self) -> usize {
        self.ports.saturating_mul(8)
    }

    /// Create a new profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            device_name: name.clone(),
            name,
            description: String::new(),
            ports: default_ports(),
            pins: String::new(),
        }
    }

    /// Parse the initial pin specification, if any.
    pub fn pin_spec(&self) -> ProfileResult<Option<PinSpec>> {
        if self.pins.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.pins.parse()?))
    }

    /// Validate the profile configuration.
    pub fn validate(&self) -> ProfileResult<()> {
        if self.name.is_empty() {
            return Err(ProfileError::Invalid("name cannot be empty".to_string()));
        }

        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ProfileError::Invalid(
                "name can only contain alphanumeric characters, hyphens, and underscores"
                    .to_string(),
            ));
        }

        if self.ports == 0 {
            return Err(ProfileError::Invalid(
                "a card needs at least one port".to_string(),
            ));
        }

        if self.ports > Self::MAX_PORTS {
            return Err(ProfileError::Invalid(format!(
                "{} ports exceeds the limit of {}",
                self.ports,
                Self::MAX_PORTS
            )));
        }

        if let Some(max) = self.pin_spec()?.and_then(|spec| spec.max_pin()) {
            if max.port_index() >= self.ports {
                return Err(ProfileError::Invalid(format!(
                    "pin {} is beyond a {}-pin card",
                    max,
                    self.number_of_pins()
                )));
            }
        }

        Ok(())
    }

    /// Build a card from this profile.
    pub fn build(&self) -> ProfileResult<Card> {
        self.validate()?;
        let mut card = Card::new(self.device_name.clone(), self.ports);
        if let Some(spec) = self.pin_spec()? {
            for pin in spec.pins_below(card.number_of_pins()) {
                card.set_pin(pin.as_u32());
            }
        }
        Ok(card)
    }
}

/// Built-in profile presets.
impl CardProfile {
    /// Single-port, 8-input card.
    pub fn di8() -> Self {
        Self {
            name: "di8".to_string(),
            description: "8 dry-contact inputs on one port".to_string(),
            device_name: "DI-8".to_string(),
            ports: 1,
            pins: String::new(),
        }
    }

    /// Two-port, 16-input card.
    pub fn di16() -> Self {
        Self {
            name: "di16".to_string(),
            description: "16 dry-contact inputs on two ports".to_string(),
            device_name: "DI-16".to_string(),
            ports: 2,
            pins: String::new(),
        }
    }

    /// Eight-port, 64-input card.
    pub fn di64() -> Self {
        Self {
            name: "di64".to_string(),
            description: "64 dry-contact inputs on eight ports".to_string(),
            device_name: "DI-64".to_string(),
            ports: 8,
            pins: String::new(),
        }
    }

    /// Get all built-in profiles.
    pub fn builtins() -> Vec<CardProfile> {
        vec![Self::di8(), Self::di16(), Self::di64()]
    }

    pub fn is_builtin(name: &str) -> bool {
        Self::builtins().iter().any(|p| p.name == name)
    }
}

/// Manages profile storage and retrieval.
pub struct ProfileManager {
    profiles_dir: PathBuf,
    cache: BTreeMap<String, CardProfile>,
}

impl ProfileManager {
    /// Create a profile manager rooted at `paths`, loading every profile.
    pub fn new(paths: &Paths) -> ProfileResult<Self> {
        let profiles_dir = paths.profiles_dir();

        fs::create_dir_all(&profiles_dir).map_err(|e| {
            ProfileError::Config(ConfigError::WriteFailed {
                path: profiles_dir.clone(),
                reason: e.to_string(),
            })
        })?;

        let mut manager = Self {
            profiles_dir,
            cache: BTreeMap::new(),
        };

        manager.load_all()?;

        Ok(manager)
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> Option<&CardProfile> {
        self.cache.get(name)
    }

    /// List all available profiles, sorted by name.
    pub fn list(&self) -> Vec<&CardProfile> {
        self.cache.values().collect()
    }

    /// Create a new profile.
    pub fn create(&mut self, profile: CardProfile) -> ProfileResult<()> {
        profile.validate()?;

        if self.cache.contains_key(&profile.name) {
            return Err(ProfileError::AlreadyExists(profile.name.clone()));
        }

        self.save_profile(&profile)?;
        self.cache.insert(profile.name.clone(), profile);

        Ok(())
    }

    /// Delete a profile.
    pub fn delete(&mut self, name: &str) -> ProfileResult<()> {
        if CardProfile::is_builtin(name) {
            return Err(ProfileError::Invalid(
                "cannot delete built-in profile".to_string(),
            ));
        }

        if !self.cache.contains_key(name) {
            return Err(ProfileError::NotFound(name.to_string()));
        }

        let file = self.profile_file(name);
        if file.exists() {
            fs::remove_file(&file).map_err(|e| ProfileError::SaveFailed(e.to_string()))?;
        }

        self.cache.remove(name);

        Ok(())
    }

    /// Load all profiles from disk.
    fn load_all(&mut self) -> ProfileResult<()> {
        for profile in CardProfile::builtins() {
            self.cache.insert(profile.name.clone(), profile);
        }

        // User profiles override built-ins with the same name.
        for entry in
            fs::read_dir(&self.profiles_dir).map_err(|e| ProfileError::SaveFailed(e.to_string()))?
        {
            let entry = entry.map_err(|e| ProfileError::SaveFailed(e.to_string()))?;
            let path = entry.path();

            if path.extension().map_or(false, |ext| ext == "json") {
                let parsed = fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|content| {
                        serde_json::from_str::<CardProfile>(&content).map_err(|e| e.to_string())
                    });
                let checked = parsed.and_then(|profile| {
                    profile
                        .validate()
                        .map(|()| profile)
                        .map_err(|e| e.to_string())
                });
                match checked {
                    Ok(profile) => {
                        debug!(profile = %profile.name, path = %path.display(), "loaded profile");
                        self.cache.insert(profile.name.clone(), profile);
                    }
                    Err(reason) => {
                        warn!(path = %path.display(), %reason, "skipping unusable profile")
                    }
                }
            }
        }

        Ok(())
    }

    /// Save a profile to disk.
    fn save_profile(&self, profile: &CardProfile) -> ProfileResult<()> {
        let file = self.profile_file(&profile.name);
        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| ProfileError::SaveFailed(e.to_string()))?;

        fs::write(&file, content).map_err(|e| ProfileError::SaveFailed(e.to_string()))
    }

    /// Get the file path for a profile.
    fn profile_file(&self, name: &str) -> PathBuf {
        self.profiles_dir.join(format!("{}.json", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> (tempfile::TempDir, ProfileManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = ProfileManager::new(&Paths::at(dir.path())).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_profile_validation() {
        let mut profile = CardProfile::new("test");
        assert!(profile.validate().is_ok());

        profile.name = "".to_string();
        assert!(profile.validate().is_err());

        profile.name = "test!@#".to_string();
        assert!(profile.validate().is_err());

        profile.name = "test".to_string();
        profile.ports = 0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_profile_pins_must_fit() {
        let mut profile = CardProfile::new("fit");
        profile.ports = 1;
        profile.pins = "0-7".to_string();
        assert!(profile.validate().is_ok());

        profile.pins = "8".to_string();
        assert!(matches!(profile.validate(), Err(ProfileError::Invalid(_))));

        profile.pins = "x".to_string();
        assert!(matches!(profile.validate(), Err(ProfileError::Pins(_))));
    }

    #[test]
    fn test_oversized_port_count_is_rejected() {
        let mut profile = CardProfile::new("huge");
        profile.ports = usize::MAX;
        profile.pins = "1".to_string();
        assert!(matches!(profile.validate(), Err(ProfileError::Invalid(_))));
        assert_eq!(profile.number_of_pins(), usize::MAX);

        profile.pins = String::new();
        assert!(matches!(profile.validate(), Err(ProfileError::Invalid(_))));
        assert!(profile.build().is_err());

        profile.ports = CardProfile::MAX_PORTS;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_oversized_port_count() {
        let (_dir, mut manager) = manager();
        let mut profile = CardProfile::new("huge");
        profile.ports = CardProfile::MAX_PORTS + 1;
        assert!(manager.create(profile).is_err());
        assert!(manager.get("huge").is_none());
    }

    #[test]
    fn test_invalid_profile_on_disk_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path());
        fs::create_dir_all(paths.profiles_dir()).unwrap();
        fs::write(
            paths.profiles_dir().join("huge.json"),
            r#"{ "name": "huge", "device_name": "huge", "ports": 18446744073709551615 }"#,
        )
        .unwrap();

        let manager = ProfileManager::new(&paths).unwrap();
        assert!(manager.get("huge").is_none());
        assert!(manager.get("di64").is_some());
    }

    #[test]
    fn test_builtin_profiles() {
        let builtins = CardProfile::builtins();
        assert!(!builtins.is_empty());

        for profile in builtins {
            assert!(profile.validate().is_ok());
        }
    }

    #[test]
    fn test_build_card() {
        let mut profile = CardProfile::new("lab");
        profile.device_name = "Lab rack".to_string();
        profile.ports = 2;
        profile.pins = "1,9-10".to_string();

        let card = profile.build().unwrap();
        assert_eq!(card.device_name(), "Lab rack");
        assert_eq!(card.number_of_ports(), 2);
        assert_eq!(card.pins_set_on(), vec![1, 9, 10]);
    }

    #[test]
    fn test_create_persists() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path());

        let mut manager = ProfileManager::new(&paths).unwrap();
        manager.create(CardProfile::new("bench")).unwrap();
        assert!(matches!(
            manager.create(CardProfile::new("bench")),
            Err(ProfileError::AlreadyExists(_))
        ));

        let reloaded = ProfileManager::new(&paths).unwrap();
        assert_eq!(reloaded.get("bench"), Some(&CardProfile::new("bench")));
    }

    #[test]
    fn test_delete() {
        let (_dir, mut manager) = manager();
        manager.create(CardProfile::new("gone")).unwrap();
        manager.delete("gone").unwrap();
        assert!(manager.get("gone").is_none());

        assert!(matches!(
            manager.delete("gone"),
            Err(ProfileError::NotFound(_))
        ));
        assert!(matches!(
            manager.delete("di8"),
            Err(ProfileError::Invalid(_))
        ));
    }

    #[test]
    fn test_list_is_sorted_and_includes_builtins() {
        let (_dir, mut manager) = manager();
        manager.create(CardProfile::new("aaa")).unwrap();

        let names: Vec<&str> = manager.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["aaa", "di16", "di64", "di8"]);
    }

    #[test]
    fn test_unreadable_profile_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let paths = Paths::at(dir.path());
        fs::create_dir_all(paths.profiles_dir()).unwrap();
        fs::write(paths.profiles_dir().join("broken.json"), "{").unwrap();

        let manager = ProfileManager::new(&paths).unwrap();
        assert!(manager.get("broken").is_none());
        assert!(manager.get("di8").is_some());
    }

    #[test]
    fn test_profile_serialization() {
        let profile = CardProfile::di16();
        let json = serde_json::to_string(&profile).unwrap();
        let parsed: CardProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }
}
