//! Diesel models representing members and member/team search rows.

use diesel::prelude::*;

use crate::domain::member::{
    Member as DomainMember, MemberTeam as DomainMemberTeam, NewMember as DomainNewMember,
};
use crate::domain::types::{Age, MemberId, TeamId, TeamName, TypeConstraintError, Username};
use crate::models::team::Team;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::members)]
#[diesel(belongs_to(Team, foreign_key = team_id))]
/// Diesel model for [`crate::domain::member::Member`].
pub struct Member {
    pub id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
/// Insertable form of [`Member`].
pub struct NewMember<'a> {
    pub username: &'a str,
    pub age: i32,
    pub team_id: Option<i32>,
}

#[derive(Debug, Clone, Queryable)]
/// Row produced by the member LEFT JOIN team search projection.
pub struct MemberTeam {
    pub member_id: i32,
    pub username: String,
    pub age: i32,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}

impl TryFrom<Member> for DomainMember {
    type Error = TypeConstraintError;

    fn try_from(member: Member) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MemberId::new(member.id)?,
            username: Username::new(member.username)?,
            age: Age::new(member.age)?,
            team_id: member.team_id.map(TeamId::new).transpose()?,
        })
    }
}

impl TryFrom<MemberTeam> for DomainMemberTeam {
    type Error = TypeConstraintError;

    fn try_from(row: MemberTeam) -> Result<Self, Self::Error> {
        Ok(Self::new(
            MemberId::new(row.member_id)?,
            Username::new(row.username)?,
            Age::new(row.age)?,
            row.team_id.map(TeamId::new).transpose()?,
            row.team_name.map(TeamName::new).transpose()?,
        ))
    }
}

impl<'a> From<&'a DomainNewMember> for NewMember<'a> {
    fn from(member: &'a DomainNewMember) -> Self {
        Self {
            username: member.username.as_str(),
            age: member.age.get(),
            team_id: member.team_id.map(TeamId::get),
        }
    }
}
