//! Proposal search, filtering and sorting.

use super::types::{Proposal, ProposalStatus};
use std::cmp::Ordering;
use std::str::FromStr;

/// Field to sort search results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// `created_at` (ISO dates sort lexically).
    #[default]
    Created,
    /// Total votes cast.
    Votes,
    AiScore,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(SortKey::Created),
            "votes" => Ok(SortKey::Votes),
            "ai-score" => Ok(SortKey::AiScore),
            _ => Err(format!(
                "Unknown sort key '{}': expected created, votes or ai-score",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Search criteria. `None` or empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Case-insensitive substring of title, description or dao.
    pub query: Option<String>,
    /// Case-insensitive dao name.
    pub dao: Option<String>,
    pub status: Option<ProposalStatus>,
    /// Case-insensitive category.
    pub category: Option<String>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

impl SearchFilters {
    fn matches(&self, proposal: &Proposal) -> bool {
        if let Some(query) = non_empty(&self.query) {
            let query = query.to_lowercase();
            let hit = proposal.title.to_lowercase().contains(&query)
                || proposal.description.to_lowercase().contains(&query)
                || proposal.dao.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(dao) = non_empty(&self.dao) {
            if !proposal.dao.eq_ignore_ascii_case(dao) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if proposal.status != status {
                return false;
            }
        }

        if let Some(category) = non_empty(&self.category) {
            if !proposal.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        true
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn compare(a: &Proposal, b: &Proposal, key: SortKey) -> Ordering {
    match key {
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Votes => a.votes.total().cmp(&b.votes.total()),
        SortKey::AiScore => a.ai_score.cmp(&b.ai_score),
    }
}

/// Filter and sort `proposals`. Ties keep their original relative order.
pub fn search(proposals: &[Proposal], filters: &SearchFilters) -> Vec<Proposal> {
    let mut results: Vec<Proposal> = proposals
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect();

    results.sort_by(|a, b| match filters.order {
        SortOrder::Asc => compare(a, b, filters.sort_by),
        SortOrder::Desc => compare(b, a, filters.sort_by),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposals::seed::initial_proposals;

    fn ids(proposals: &[Proposal]) -> Vec<&str> {
        proposals.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_sorts_newest_first() {
        let results = search(&initial_proposals(), &SearchFilters::default());
        assert_eq!(ids(&results), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_query_matches_title_description_and_dao() {
        let proposals = initial_proposals();

        let by_title = SearchFilters {
            query: Some("mango".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&proposals, &by_title)), vec!["4"]);

        let by_description = SearchFilters {
            query: Some("GUARDIAN".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&proposals, &by_description)), vec!["5"]);

        let by_dao = SearchFilters {
            query: Some("solana".to_string()),
            sort_by: SortKey::Created,
            order: SortOrder::Asc,
            ..Default::default()
        };
        assert_eq!(ids(&search(&proposals, &by_dao)), vec!["2", "1"]);
    }

    #[test]
    fn test_blank_query_matches_all() {
        let filters = SearchFilters {
            query: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&initial_proposals(), &filters).len(), 6);
    }

    #[test]
    fn test_status_dao_and_category_filters() {
        let proposals = initial_proposals();

        let active = SearchFilters {
            status: Some(ProposalStatus::Active),
            ..Default::default()
        };
        assert_eq!(ids(&search(&proposals, &active)), vec!["1", "2", "4", "5"]);

        let dao = SearchFilters {
            dao: Some("metadao".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&search(&proposals, &dao)), vec!["3"]);

        let category = SearchFilters {
            category: Some("treasury".to_string()),
            status: Some(ProposalStatus::Completed),
            ..Default::default()
        };
        assert!(search(&proposals, &category).is_empty());
    }

    #[test]
    fn test_sort_by_votes_and_ai_score() {
        let proposals = initial_proposals();

        let votes_desc = SearchFilters {
            sort_by: SortKey::Votes,
            ..Default::default()
        };
        assert_eq!(
            ids(&search(&proposals, &votes_desc)),
            vec!["6", "4", "1", "2", "5", "3"]
        );

        let score_asc = SearchFilters {
            sort_by: SortKey::AiScore,
            order: SortOrder::Asc,
            ..Default::default()
        };
        assert_eq!(
            ids(&search(&proposals, &score_asc)),
            vec!["4", "3", "1", "5", "6", "2"]
        );
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut proposals = initial_proposals();
        for proposal in proposals.iter_mut() {
            proposal.ai_score = 50;
        }

        let filters = SearchFilters {
            sort_by: SortKey::AiScore,
            ..Default::default()
        };
        assert_eq!(
            ids(&search(&proposals, &filters)),
            vec!["1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("ai-score".parse::<SortKey>(), Ok(SortKey::AiScore));
        assert!("score".parse::<SortKey>().is_err());
    }
}
