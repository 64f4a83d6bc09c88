//! Profiles subcommand implementation.
//!
//! Handles the `drycontact profiles` command for managing card profiles.

use crate::config::{CardProfile, Paths, ProfileManager};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};

/// Manage card profiles.
#[derive(Parser, Debug)]
pub struct ProfilesCommand {
    #[command(subcommand)]
    pub action: ProfilesAction,
}

/// Profile management actions.
#[derive(Subcommand, Debug)]
pub enum ProfilesAction {
    /// List all available profiles
    List,

    /// Show details of a specific profile
    Show {
        /// Profile name
        name: String,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: String,

        /// Device name shown in the table banner (defaults to the profile name)
        #[arg(short = 'n', long)]
        device_name: Option<String>,

        /// Number of 8-pin ports
        #[arg(short, long, default_value = "8")]
        ports: usize,

        /// Pins turned on when the card is built (e.g. "1,4,40-47")
        #[arg(long, default_value = "")]
        pins: String,

        /// Profile description
        #[arg(short = 'd', long)]
        description: Option<String>,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,

        /// Skip confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

impl ProfilesCommand {
    /// Execute the profiles command.
    pub fn execute(&self, paths: &Paths, quiet: bool) -> CliResult<()> {
        let mut manager = ProfileManager::new(paths)?;

        match &self.action {
            ProfilesAction::List => list_profiles(&manager, quiet),
            ProfilesAction::Show { name } => show_profile(&manager, name),
            ProfilesAction::Create {
                name,
                device_name,
                ports,
                pins,
                description,
            } => {
                let profile = CardProfile {
                    name: name.clone(),
                    description: description.clone().unwrap_or_default(),
                    device_name: device_name.clone().unwrap_or_else(|| name.clone()),
                    ports: *ports,
                    pins: pins.clone(),
                };
                manager.create(profile)?;

                if !quiet {
                    output::print_success(&format!("Profile '{}' created successfully", name));
                }
                Ok(())
            }
            ProfilesAction::Delete { name, yes } => delete_profile(&mut manager, name, *yes, quiet),
        }
    }
}

fn list_profiles(manager: &ProfileManager, quiet: bool) -> CliResult<()> {
    let profiles = manager.list();

    if !quiet {
        println!(
            "\n{:<15} {:<16} {:>5}  {}",
            "NAME", "DEVICE", "PORTS", "DESCRIPTION"
        );
        println!("{}", "-".repeat(70));
    }

    for profile in profiles {
        let desc = if profile.description.chars().count() > 40 {
            let cut: String = profile.description.chars().take(40).collect();
            format!("{}...", cut)
        } else {
            profile.description.clone()
        };

        println!(
            "{:<15} {:<16} {:>5}  {}",
            profile.name, profile.device_name, profile.ports, desc
        );
    }

    if !quiet {
        println!();
    }

    Ok(())
}

fn show_profile(manager: &ProfileManager, name: &str) -> CliResult<()> {
    let profile = manager
        .get(name)
        .ok_or_else(|| CliError::Other(format!("profile '{}' not found", name)))?;

    println!("\nProfile: {}", profile.name);
    println!("{}", "=".repeat(40));
    println!("Description:  {}", profile.description);
    println!("Device:       {}", profile.device_name);
    println!("Ports:        {} ({} pins)", profile.ports, profile.number_of_pins());
    println!(
        "Initial pins: {}",
        if profile.pins.trim().is_empty() {
            "none"
        } else {
            profile.pins.as_str()
        }
    );
    if CardProfile::is_builtin(&profile.name) {
        output::print_info("built-in profile");
    }
    println!();

    Ok(())
}

fn delete_profile(manager: &mut ProfileManager, name: &str, yes: bool, quiet: bool) -> CliResult<()> {
    if manager.get(name).is_none() {
        return Err(CliError::Other(format!("profile '{}' not found", name)));
    }

    if !yes {
        println!("Delete profile '{}'? [y/N] ", name);
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    manager.delete(name)?;

    if !quiet {
        output::print_success(&format!("Profile '{}' deleted", name));
    }

    Ok(())
}
