//! Dynamic filter planning for member searches.
//!
//! A [`MemberSearchCondition`] is sparse: every field is optional and an
//! absent (or blank) field must not constrain the result. [`build_predicates`]
//! turns the condition into the list of predicates that the repository
//! AND-combines into a WHERE clause.

use serde::{Deserialize, Serialize};

/// Filter criteria accepted by the member search endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower age bound.
    pub age_goe: Option<i32>,
    /// Inclusive upper age bound.
    pub age_loe: Option<i32>,
}

impl MemberSearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }
}

/// A single filter condition. Predicates are always combined with AND.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberPredicate {
    UsernameEq(String),
    TeamNameEq(String),
    AgeGoe(i32),
    AgeLoe(i32),
}

impl MemberPredicate {
    /// Whether evaluating this predicate needs the `teams` table.
    pub fn needs_team(&self) -> bool {
        matches!(self, MemberPredicate::TeamNameEq(_))
    }
}

fn has_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Derives the predicates for `condition`.
///
/// The output is ordered username, team name, minimum age, maximum age; the
/// order carries no meaning since the predicates are AND-combined. An empty
/// vector means an unfiltered scan.
pub fn build_predicates(condition: &MemberSearchCondition) -> Vec<MemberPredicate> {
    let mut predicates = Vec::with_capacity(4);

    if let Some(username) = has_text(&condition.username) {
        predicates.push(MemberPredicate::UsernameEq(username.to_string()));
    }
    if let Some(team_name) = has_text(&condition.team_name) {
        predicates.push(MemberPredicate::TeamNameEq(team_name.to_string()));
    }
    if let Some(age) = condition.age_goe {
        predicates.push(MemberPredicate::AgeGoe(age));
    }
    if let Some(age) = condition.age_loe {
        predicates.push(MemberPredicate::AgeLoe(age));
    }

    predicates
}

/// Returns true when a count over `predicates` must include the team join.
pub fn requires_team_join(predicates: &[MemberPredicate]) -> bool {
    predicates.iter().any(MemberPredicate::needs_team)
}
