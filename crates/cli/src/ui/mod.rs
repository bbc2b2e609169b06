//! Terminal rendering. Everything here turns domain values into strings;
//! printing is left to the commands.

pub mod history;
pub mod preview;
pub mod progress;
pub mod results;

use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use dnscheck_domain::DisplayStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewMode {
    /// One line per server.
    #[default]
    Horizontal,
    /// One block per server.
    Cards,
}

/// View settings for one rendering pass.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: ViewMode,
    pub show_preview: bool,
    /// Configured servers, in the order they should be listed.
    pub servers: Vec<String>,
}

impl UiState {
    pub fn new(view: ViewMode, show_preview: bool) -> Self {
        Self {
            view,
            show_preview,
            servers: Vec::new(),
        }
    }

    pub fn with_servers(mut self, servers: Vec<String>) -> Self {
        self.servers = servers;
        self
    }
}

pub(crate) fn paint(text: &str, style: DisplayStyle) -> ColoredString {
    match style {
        DisplayStyle::Error => text.red(),
        DisplayStyle::Dim => text.dimmed(),
        DisplayStyle::Neutral => text.normal(),
        DisplayStyle::Highlight(color) => {
            let (r, g, b) = color.to_rgb();
            text.truecolor(r, g, b).bold()
        }
    }
}

#[cfg(test)]
pub(crate) fn plain_output() {
    colored::control::set_override(false);
}
