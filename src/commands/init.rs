//! Application configuration initialization command.
//!
//! Runs an interactive wizard that writes the configuration file used by
//! the server: listen address, page size and database location.

use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::default().save()?;
        return Ok(());
    }

    // Run the interactive configuration wizard and persist the result
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
