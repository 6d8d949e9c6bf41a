//! DAO registry listing and side-by-side comparison.

use daoscope::daos::{
    comparison_score, dao_registry, sorted_daos, Dao, DaoSelection, DaoSortField, ScoreTier,
    SelectionChange, MAX_SELECTED,
};
use daoscope::proposals::SortOrder;

/// List registered DAOs with their comparison scores
pub fn list(
    category: Option<&str>,
    sort: DaoSortField,
    order: SortOrder,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let daos = sorted_daos(&dao_registry(), category, sort, order);

    if json {
        println!("{}", serde_json::to_string_pretty(&daos)?);
    } else if daos.is_empty() {
        println!("No DAOs in that category");
    } else {
        print!("{}", render_table(&daos));
    }

    Ok(())
}

/// Compare up to four DAOs side by side
///
/// With no ids, compares the default selection (the first two DAOs).
pub fn compare(ids: &[String], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = dao_registry();
    let selection = select(&registry, ids)?;
    let daos = selection.resolve(&registry);

    if json {
        println!("{}", serde_json::to_string_pretty(&daos)?);
        return Ok(());
    }

    println!("⚖️  DAO Comparison ({} selected, max {})", daos.len(), MAX_SELECTED);
    println!();
    print!("{}", render_table(&daos));
    Ok(())
}

fn select(registry: &[Dao], ids: &[String]) -> Result<DaoSelection, String> {
    if ids.is_empty() {
        return Ok(DaoSelection::default());
    }

    let mut selection = DaoSelection::empty();
    for id in ids {
        if !registry.iter().any(|dao| &dao.id == id) {
            return Err(format!("DAO '{}' not found", id));
        }
        if selection.contains(id) {
            continue;
        }
        if selection.toggle(id) == SelectionChange::Full {
            return Err(format!("At most {} DAOs can be compared at once", MAX_SELECTED));
        }
    }
    Ok(selection)
}

fn render_table(daos: &[Dao]) -> String {
    let mut out = format!(
        "{:<4} {:<20} {:<9} {:>8} {:>8} {:>12} {:>8} {:>6}  {}\n",
        "ID", "NAME", "CATEGORY", "MEMBERS", "SUCCESS", "TREASURY", "PARTIC.", "SCORE", "TIER"
    );

    for dao in daos {
        let score = comparison_score(dao);
        out.push_str(&format!(
            "{:<4} {:<20} {:<9} {:>8} {:>7}% {:>12} {:>7}% {:>5}%  {}\n",
            dao.id,
            dao.name,
            dao.category,
            dao.total_members,
            dao.success_rate,
            format!("${}", dao.treasury_value),
            dao.participation_rate,
            score,
            ScoreTier::for_score(score)
        ));
    }

    out
}
