use super::config::DaoscopeConfig;
use daoscope::proposals::Proposal;

/// Show a single proposal in full
pub async fn execute(config: &DaoscopeConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.proposal_store(config.proposal_timing());

    let proposal = store
        .get_proposal_by_id(id)
        .await
        .ok_or_else(|| format!("Proposal '{}' not found", id))?;

    print!("{}", render(&proposal));
    Ok(())
}

fn render(p: &Proposal) -> String {
    format!(
        "#{id} {title}\n\
         DAO:       {dao}\n\
         Status:    {status} ({time_left})\n\
         Category:  {category}\n\
         Created:   {created}\n\
         AI score:  {ai}/100\n\
         Votes:     yes {yes} / no {no} ({pct:.1}% in favor, {total} total)\n\
         \n\
         {description}\n",
        id = p.id,
        title = p.title,
        dao = p.dao,
        status = p.status,
        time_left = p.time_left,
        category = p.category,
        created = p.created_at,
        ai = p.ai_score,
        yes = p.votes.yes,
        no = p.votes.no,
        pct = p.votes.yes_percentage(),
        total = p.votes.total(),
        description = p.description,
    )
}
