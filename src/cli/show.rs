//! Show subcommand implementation.
//!
//! Handles `drycontact show`: builds a card from flags or a profile, applies
//! the requested operations in order and prints the result.

use crate::card::Card;
use crate::cli::OutputFormat;
use crate::config::{AppSettings, Paths, ProfileManager};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::types::CardOp;
use clap::Parser;
use std::io::Write;
use tracing::info;

/// Build a card, apply operations and print its pin table.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    /// Device name shown in the table banner
    #[arg(short, long)]
    pub name: Option<String>,

    /// Number of 8-pin ports on the card
    #[arg(short, long)]
    pub ports: Option<u16>,

    /// Build the card from a saved profile
    #[arg(long = "profile", short = 'P', conflicts_with_all = ["name", "ports"])]
    pub profile: Option<String>,

    /// Operation to apply, in order. Repeatable.
    ///
    /// Examples:
    ///   set:1,4,7          Turn pins on
    ///   clear:56-63        Turn pins off
    ///   port:7=0xff        Replace a port's state byte
    ///   clear-all          Zero every port
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<CardOp>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(&self, paths: &Paths, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let mut card = self.build_card(paths, settings)?;
        let format = self.output.unwrap_or(settings.default_output_format);

        if !quiet && format == OutputFormat::Plain {
            self.warn_ignored_pins(&card);
        }

        apply_ops(&mut card, &self.ops)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        output::write_card(&mut out, &card, format)?;
        out.flush()?;

        Ok(())
    }

    fn build_card(&self, paths: &Paths, settings: &AppSettings) -> CliResult<Card> {
        if let Some(name) = &self.profile {
            let manager = ProfileManager::new(paths)?;
            let profile = manager
                .get(name)
                .ok_or_else(|| CliError::Other(format!("profile '{}' not found", name)))?;
            info!(profile = %profile.name, "building card from profile");
            return Ok(profile.build()?);
        }

        let name = self
            .name
            .clone()
            .unwrap_or_else(|| settings.default_device_name.clone());
        let ports = usize::from(self.ports.unwrap_or(settings.default_ports));
        Ok(Card::new(name, ports))
    }

    fn warn_ignored_pins(&self, card: &Card) {
        for op in &self.ops {
            let spec = match op {
                CardOp::Set(spec) | CardOp::Clear(spec) => spec,
                _ => continue,
            };
            if let Some(max) = spec.max_pin() {
                if max.port_index() >= card.number_of_ports() {
                    output::print_warning(&format!(
                        "'{}' names pins beyond the card's {} pins; they will be ignored",
                        op,
                        card.number_of_pins()
                    ));
                }
            }
        }
    }
}

/// Apply `ops` to `card` in order, stopping at the first error.
pub fn apply_ops(card: &mut Card, ops: &[CardOp]) -> CliResult<()> {
    for op in ops {
        info!(%op, "applying");
        op.apply(card)?;
    }
    Ok(())
}
