use dnscheck_domain::DomainPreview;

use crate::ui::preview::render_preview;

pub fn run(inputs: &[String]) -> anyhow::Result<()> {
    let preview = DomainPreview::from_input(&inputs.join(" "));
    print!("{}", render_preview(&preview));

    if preview.is_empty() {
        anyhow::bail!("No valid domains to query");
    }
    Ok(())
}
