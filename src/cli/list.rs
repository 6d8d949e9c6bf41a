use super::config::DaoscopeConfig;
use daoscope::proposals::{Proposal, SearchFilters};

/// List proposals matching the filters
///
/// Output is a fixed-width table, or JSON with `--json`.
pub async fn execute(
    config: &DaoscopeConfig,
    filters: SearchFilters,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.proposal_store(config.proposal_timing());
    let proposals = store.search(&filters).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&proposals)?);
    } else if proposals.is_empty() {
        println!("No proposals match the given filters");
    } else {
        print!("{}", render_table(&proposals));
    }

    Ok(())
}

/// Render proposals as a plain-text table
pub fn render_table(proposals: &[Proposal]) -> String {
    let mut out = format!(
        "{:<4} {:<10} {:<24} {:>8} {:>8} {:>7} {:>4}  {}\n",
        "ID", "STATUS", "DAO", "YES", "NO", "YES %", "AI", "TITLE"
    );

    for p in proposals {
        out.push_str(&format!(
            "{:<4} {:<10} {:<24} {:>8} {:>8} {:>6.1}% {:>4}  {}\n",
            p.id,
            p.status.name(),
            truncate(&p.dao, 24),
            p.votes.yes,
            p.votes.no,
            p.votes.yes_percentage(),
            p.ai_score,
            p.title
        ));
    }

    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept)
}
