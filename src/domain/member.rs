use serde::{Deserialize, Serialize};

use crate::domain::types::{Age, MemberId, TeamId, TeamName, Username};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewMember {
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
}

impl NewMember {
    #[must_use]
    pub fn new(username: Username, age: Age, team_id: Option<TeamId>) -> Self {
        Self {
            username,
            age,
            team_id,
        }
    }
}

/// A member joined with its (optional) team, as returned by searches.
///
/// `team_id` and `team_name` are `None` when the member has no team.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeam {
    pub member_id: MemberId,
    pub username: Username,
    pub age: Age,
    pub team_id: Option<TeamId>,
    pub team_name: Option<TeamName>,
}

impl MemberTeam {
    #[must_use]
    pub fn new(
        member_id: MemberId,
        username: Username,
        age: Age,
        team_id: Option<TeamId>,
        team_name: Option<TeamName>,
    ) -> Self {
        Self {
            member_id,
            username,
            age,
            team_id,
            team_name,
        }
    }
}
