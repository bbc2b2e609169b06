use crate::a_record::{clean_a_record_value, is_likely_ipv4, is_placeholder};
use crate::consistency::{ConsistencyTable, CorroborationColor, MIN_CORROBORATING_SERVERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Status or error string.
    Error,
    /// Opaque text that is not an address.
    Dim,
    Neutral,
    /// Address corroborated by several servers.
    Highlight(CorroborationColor),
}

/// How one raw A value is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecordDisplay {
    pub text: String,
    pub style: DisplayStyle,
    /// Text put on the clipboard when the value is activated.
    pub copy: Option<String>,
}

impl ARecordDisplay {
    pub fn format(raw: &str, table: &ConsistencyTable) -> Self {
        let cleaned = clean_a_record_value(raw);

        if is_placeholder(raw) {
            return Self {
                text: cleaned,
                style: DisplayStyle::Error,
                copy: None,
            };
        }
        if !is_likely_ipv4(&cleaned) {
            return Self {
                text: cleaned,
                style: DisplayStyle::Dim,
                copy: None,
            };
        }

        let style = match table.color(&cleaned) {
            Some(color) if table.server_count(&cleaned) >= MIN_CORROBORATING_SERVERS => {
                DisplayStyle::Highlight(color)
            }
            _ => DisplayStyle::Neutral,
        };

        Self {
            copy: Some(cleaned.clone()),
            text: cleaned,
            style,
        }
    }

    pub fn is_copyable(&self) -> bool {
        self.copy.is_some()
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self.style, DisplayStyle::Highlight(_))
    }
}

/// CNAME values are either targets or placeholders.
pub fn cname_style(value: &str) -> DisplayStyle {
    if is_placeholder(value) {
        DisplayStyle::Error
    } else {
        DisplayStyle::Neutral
    }
}
