//! DAO comparison.
//!
//! A fixed registry of DAOs that the dashboard can rank side by side:
//! - filter by category, sort by any numeric field or by name
//! - a selection of at most [`MAX_SELECTED`] DAOs to compare
//! - a 0-100 comparison score per DAO

pub mod compare;
pub mod registry;

pub use compare::{
    comparison_score, sorted_daos, DaoSelection, DaoSortField, ScoreTier, SelectionChange,
    MAX_SELECTED,
};
pub use registry::{dao_registry, Dao};
