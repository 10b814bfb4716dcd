//! Command-line interface definition.

use crate::config::Config;
use clap::Parser;

/// Terminal client for the MiMuni municipal services backend
#[derive(Debug, Parser)]
#[command(name = "mimuni", version, about)]
pub struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Citizen account mail (overrides the config file)
    #[arg(long)]
    pub mail: Option<String>,

    /// UI theme: dark, light or nocolor
    #[arg(long)]
    pub theme: Option<String>,

    /// Disable all UI colors
    #[arg(long)]
    pub no_colors: bool,
}

impl Cli {
    /// Fold CLI overrides into the loaded config.
    ///
    /// `--no-colors` wins over `--theme`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(mail) = &self.mail {
            config.mail = Some(mail.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.no_colors {
            config.theme = "nocolor".to_string();
        }
    }
}
