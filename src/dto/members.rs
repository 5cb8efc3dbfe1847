//! Response bodies for the member and team endpoints.

use serde::Serialize;

use crate::domain::member::{Member, MemberTeam};
use crate::domain::team::Team;

/// One search result row; team fields are `null` for members without a team.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl From<MemberTeam> for MemberTeamDto {
    fn from(row: MemberTeam) -> Self {
        Self {
            member_id: row.member_id.get(),
            username: row.username.into_inner(),
            age: row.age.get(),
            team_id: row.team_id.map(i32::from),
            team_name: row.team_name.map(String::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

impl From<Member> for MemberDto {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.get(),
            username: member.username.into_inner(),
            age: member.age.get(),
            team_id: member.team_id.map(i32::from),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
}

impl From<Team> for TeamDto {
    fn from(team: Team) -> Self {
        Self {
            id: team.id.get(),
            name: team.name.into_inner(),
        }
    }
}
