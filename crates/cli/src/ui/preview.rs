use colored::Colorize;
use dnscheck_domain::DomainPreview;
use std::fmt::Write;

pub fn render_preview(preview: &DomainPreview) -> String {
    let mut out = String::new();

    if preview.is_empty() {
        let _ = writeln!(out, "{}", "No valid domains in input".red());
        return out;
    }

    let noun = if preview.domains.len() == 1 { "domain" } else { "domains" };
    let _ = write!(out, "{} {} to query", preview.domains.len().to_string().bold(), noun);
    if preview.filtered_count() > 0 {
        let _ = write!(
            out,
            " ({} filtered out)",
            preview.filtered_count().to_string().yellow()
        );
    }
    let _ = writeln!(out);

    for domain in &preview.domains {
        let _ = writeln!(out, "  {}", domain.cyan());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::plain_output;

    #[test]
    fn test_preview_lists_domains_and_filtered_count() {
        plain_output();
        let preview = DomainPreview::from_input("Example.com bad_domain example.com github.com");

        let out = render_preview(&preview);
        assert!(out.starts_with("2 domains to query (2 filtered out)"));
        assert!(out.contains("  example.com\n"));
        assert!(out.contains("  github.com\n"));
    }

    #[test]
    fn test_empty_preview() {
        plain_output();
        let out = render_preview(&DomainPreview::from_input(" ,, "));
        assert_eq!(out, "No valid domains in input\n");
    }
}
