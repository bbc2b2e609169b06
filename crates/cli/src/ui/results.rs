use colored::Colorize;
use dnscheck_domain::{
    cname_style, ARecordDisplay, ConsistencyTable, DomainResultSet, RecordType, RecordValue,
    ServerEntry, ServerRecords, ServerResponse, MIN_CORROBORATING_SERVERS,
};
use std::fmt::Write;

use super::{paint, UiState, ViewMode};

const NOT_QUERIED: &str = "not queried";
const NO_DATA: &str = "no data";

pub fn render_results(results: &DomainResultSet, state: &UiState) -> String {
    let mut out = String::new();
    for (domain, response) in results {
        render_domain(&mut out, domain, response, state);
        out.push('\n');
    }
    out
}

fn render_domain(out: &mut String, domain: &str, response: &ServerResponse, state: &UiState) {
    let table = ConsistencyTable::build(response, &state.servers);
    let _ = writeln!(out, "{}", domain.bold().underline());

    for server in ordered_servers(response, &state.servers) {
        let name = server_title(server);
        match response.get(server) {
            None => render_missing(out, &name, NOT_QUERIED, state.view),
            Some(records) if records.is_empty() => render_missing(out, &name, NO_DATA, state.view),
            Some(records) => match state.view {
                ViewMode::Horizontal => render_line(out, &name, records, &table),
                ViewMode::Cards => render_card(out, &name, records, &table),
            },
        }
    }

    let corroborated: Vec<_> = table
        .entries()
        .iter()
        .filter(|entry| entry.server_count >= MIN_CORROBORATING_SERVERS)
        .collect();
    if !corroborated.is_empty() {
        let _ = writeln!(out, "  {}", "Consistent addresses:".bold());
        for entry in corroborated {
            let shown = ARecordDisplay::format(&entry.address, &table);
            let _ = writeln!(
                out,
                "    {}  ({} servers)",
                paint(&shown.text, shown.style),
                entry.server_count
            );
        }
    }
}

/// Configured servers first, then any the response has that are not
/// configured, in response order.
fn ordered_servers<'a>(response: &'a ServerResponse, configured: &'a [String]) -> Vec<&'a str> {
    let mut servers: Vec<&str> = configured.iter().map(String::as_str).collect();
    for server in response.keys() {
        if !configured.iter().any(|c| c == server) {
            servers.push(server);
        }
    }
    servers
}

fn server_title(server: &str) -> String {
    let entry = ServerEntry::parse(server);
    match entry.label() {
        Some(label) => format!("{} ({})", label, entry.address()),
        None => entry.address().to_string(),
    }
}

fn render_missing(out: &mut String, name: &str, what: &str, view: ViewMode) {
    match view {
        ViewMode::Horizontal => {
            let _ = writeln!(out, "  {:<28} {}", name, what.dimmed());
        }
        ViewMode::Cards => {
            let _ = writeln!(out, "  ┌ {}", name.bold());
            let _ = writeln!(out, "  └ {}", what.dimmed());
        }
    }
}

fn render_line(out: &mut String, name: &str, records: &ServerRecords, table: &ConsistencyTable) {
    let _ = writeln!(
        out,
        "  {:<28} A: {}  CNAME: {}",
        name,
        a_values(records.get(RecordType::A), table).join(", "),
        cname_values(records.get(RecordType::CNAME)).join(", ")
    );
}

fn render_card(out: &mut String, name: &str, records: &ServerRecords, table: &ConsistencyTable) {
    let _ = writeln!(out, "  ┌ {}", name.bold());
    for value in a_values(records.get(RecordType::A), table) {
        let _ = writeln!(out, "  │ A      {}", value);
    }
    for value in cname_values(records.get(RecordType::CNAME)) {
        let _ = writeln!(out, "  │ CNAME  {}", value);
    }
    let _ = writeln!(out, "  └");
}

fn a_values(value: Option<&RecordValue>, table: &ConsistencyTable) -> Vec<String> {
    let values = value.map(RecordValue::values).unwrap_or_default();
    if values.is_empty() {
        return vec!["-".dimmed().to_string()];
    }
    values
        .into_iter()
        .map(|raw| {
            let shown = ARecordDisplay::format(raw, table);
            paint(&shown.text, shown.style).to_string()
        })
        .collect()
}

fn cname_values(value: Option<&RecordValue>) -> Vec<String> {
    let values = value.map(RecordValue::values).unwrap_or_default();
    if values.is_empty() {
        return vec!["-".dimmed().to_string()];
    }
    values
        .into_iter()
        .map(|v| paint(v, cname_style(v)).to_string())
        .collect()
}
