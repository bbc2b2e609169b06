use colored::Colorize;
use dnscheck_domain::{HistoryDetail, HistoryRecord};
use std::fmt::Write;

use super::results::render_results;
use super::UiState;

pub fn render_history_list(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", "No query history".dimmed());
    }

    let mut out = String::new();
    for record in records {
        let id = record.latest().map(|node| node.id.as_str()).unwrap_or("-");
        let runs = record.nodes.len();
        let _ = writeln!(
            out,
            "{}  {}  {}",
            id.yellow(),
            record.timestamp.dimmed(),
            record.domains.join(", ").bold()
        );
        let _ = writeln!(
            out,
            "    {} server{}, {} run{}",
            record.dns_servers.len(),
            plural(record.dns_servers.len()),
            runs,
            plural(runs)
        );
    }
    out
}

/// The selected run in full, the other runs as a list to pick from.
pub fn render_history_detail(detail: &HistoryDetail, state: &UiState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Domains:".bold(), detail.domains.join(", "));
    let _ = writeln!(out, "{} {}", "Servers:".bold(), detail.dns_servers.join(", "));

    let Some(selected) = detail.selected() else {
        let _ = writeln!(out, "{}", "No stored results".dimmed());
        return out;
    };

    let _ = writeln!(
        out,
        "{} {} ({})",
        "Run:".bold(),
        selected.timestamp,
        selected.id.yellow()
    );
    out.push('\n');

    let state = state.clone().with_servers(detail.dns_servers.clone());
    out.push_str(&render_results(&selected.results, &state));

    let others: Vec<_> = detail.others().collect();
    if !others.is_empty() {
        let _ = writeln!(out, "{}", "Other runs:".bold());
        for node in others {
            let _ = writeln!(out, "  {}  {}", node.id.yellow(), node.timestamp.dimmed());
        }
        let _ = writeln!(
            out,
            "{}",
            "Show one with: dnscheck history show <ID> --node <RUN_ID>".dimmed()
        );
    }
    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::plain_output;
    use dnscheck_domain::{DomainResultSet, ServerRecords, ServerResponse, TimeNode};

    fn node(id: &str, address: &str) -> TimeNode {
        let mut response = ServerResponse::new();
        response.insert(
            "8.8.8.8".into(),
            ServerRecords::new(vec![address.to_string()], Vec::<String>::new()),
        );
        let mut results = DomainResultSet::new();
        results.insert("example.com".into(), response);

        TimeNode {
            id: id.to_string(),
            date: "2026-01-01".into(),
            time: "10:00:00".into(),
            timestamp: format!("2026-01-01 10:00:0{}", &id[id.len() - 1..]),
            results,
        }
    }

    fn record() -> HistoryRecord {
        HistoryRecord {
            domains: vec!["example.com".into()],
            dns_servers: vec!["8.8.8.8".into()],
            date: "2026-01-01".into(),
            time: "10:00:03".into(),
            timestamp: "2026-01-01 10:00:03".into(),
            nodes: vec![
                node("20260101100001", "10.0.0.1"),
                node("20260101100003", "10.0.0.3"),
                node("20260101100002", "10.0.0.2"),
            ],
        }
    }

    #[test]
    fn test_detail_shows_only_most_recent_run() {
        plain_output();
        let detail = HistoryDetail::new(record());

        let out = render_history_detail(&detail, &UiState::default());
        assert!(out.contains("Run: 2026-01-01 10:00:03 (20260101100003)"));
        assert!(out.contains("10.0.0.3"));
        assert!(!out.contains("10.0.0.1"));
        assert!(!out.contains("10.0.0.2"));
        assert!(out.contains("  20260101100002  2026-01-01 10:00:02"));
        assert!(out.contains("  20260101100001  2026-01-01 10:00:01"));
    }

    #[test]
    fn test_detail_with_other_run_selected() {
        plain_output();
        let mut detail = HistoryDetail::new(record());
        assert!(detail.select("20260101100001"));

        let out = render_history_detail(&detail, &UiState::default());
        assert!(out.contains("10.0.0.1"));
        assert!(!out.contains("10.0.0.3"));
    }

    #[test]
    fn test_list_summarizes_records() {
        plain_output();
        let out = render_history_list(&[record()]);
        assert!(out.contains("example.com"));
        assert!(out.contains("1 server, 3 runs"));

        assert_eq!(render_history_list(&[]), "No query history\n");
    }
}
