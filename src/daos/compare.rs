//! Ranking and side-by-side selection of DAOs.

use super::registry::Dao;
use crate::proposals::SortOrder;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Most DAOs that can be compared at once.
pub const MAX_SELECTED: usize = 4;

/// Member count that scores 100 on the membership axis.
const MEMBERS_FOR_FULL_SCORE: f64 = 20_000.0;

/// Monthly proposals that score 100 on the activity axis.
const ACTIVITY_FOR_FULL_SCORE: f64 = 20.0;

/// Field a DAO listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaoSortField {
    Name,
    #[default]
    TotalMembers,
    SuccessRate,
    TreasuryValue,
    ParticipationRate,
}

impl FromStr for DaoSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(DaoSortField::Name),
            "members" => Ok(DaoSortField::TotalMembers),
            "success-rate" => Ok(DaoSortField::SuccessRate),
            "treasury" => Ok(DaoSortField::TreasuryValue),
            "participation" => Ok(DaoSortField::ParticipationRate),
            _ => Err(format!(
                "Unknown sort field '{}': expected name, members, success-rate, treasury or participation",
                s
            )),
        }
    }
}

fn compare_by(field: DaoSortField, a: &Dao, b: &Dao) -> Ordering {
    match field {
        DaoSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        DaoSortField::TotalMembers => a.total_members.cmp(&b.total_members),
        DaoSortField::SuccessRate => a.success_rate.cmp(&b.success_rate),
        DaoSortField::TreasuryValue => a.treasury_value.cmp(&b.treasury_value),
        DaoSortField::ParticipationRate => a.participation_rate.cmp(&b.participation_rate),
    }
}

/// DAOs in `category` (or all of them for `None` or `"all"`), sorted.
///
/// Category matching ignores ASCII case. The sort is stable.
pub fn sorted_daos(
    daos: &[Dao],
    category: Option<&str>,
    field: DaoSortField,
    order: SortOrder,
) -> Vec<Dao> {
    let category = category.filter(|c| !c.trim().is_empty() && !c.eq_ignore_ascii_case("all"));

    let mut out: Vec<Dao> = daos
        .iter()
        .filter(|dao| category.map_or(true, |c| dao.category.eq_ignore_ascii_case(c)))
        .cloned()
        .collect();

    out.sort_by(|a, b| {
        let ordering = compare_by(field, a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    out
}

/// Overall comparison score, 0-100 for DAOs within the scale caps.
///
/// Mean of four axes, rounded half up:
/// - members relative to 20,000
/// - success rate
/// - participation rate
/// - recent activity relative to 20 proposals, capped at 100
pub fn comparison_score(dao: &Dao) -> u32 {
    let members = dao.total_members as f64 / MEMBERS_FOR_FULL_SCORE * 100.0;
    let success = f64::from(dao.success_rate);
    let participation = f64::from(dao.participation_rate);
    let activity = (f64::from(dao.recent_activity) / ACTIVITY_FOR_FULL_SCORE * 100.0).min(100.0);

    ((members + success + participation + activity) / 4.0).round() as u32
}

/// Label for a comparison score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreTier {
    pub fn for_score(score: u32) -> Self {
        match score {
            90.. => ScoreTier::Excellent,
            80..=89 => ScoreTier::Good,
            70..=79 => ScoreTier::Fair,
            _ => ScoreTier::Poor,
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::Poor => "poor",
        };
        f.write_str(label)
    }
}

/// Outcome of [`DaoSelection::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// Selection already holds [`MAX_SELECTED`] DAOs; nothing changed.
    Full,
}

/// Ordered set of DAO ids picked for comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaoSelection {
    ids: Vec<String>,
}

impl Default for DaoSelection {
    /// The dashboard opens comparing the first two DAOs.
    fn default() -> Self {
        Self {
            ids: vec!["1".to_string(), "2".to_string()],
        }
    }
}

impl DaoSelection {
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Remove `id` if selected, otherwise add it when there is room.
    pub fn toggle(&mut self, id: &str) -> SelectionChange {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            SelectionChange::Removed
        } else if self.ids.len() < MAX_SELECTED {
            self.ids.push(id.to_string());
            SelectionChange::Added
        } else {
            SelectionChange::Full
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected DAOs in selection order. Ids missing from `daos` are skipped.
    pub fn resolve(&self, daos: &[Dao]) -> Vec<Dao> {
        self.ids
            .iter()
            .filter_map(|id| daos.iter().find(|dao| &dao.id == id).cloned())
            .collect()
    }
}
