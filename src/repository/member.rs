//! Repository implementation for members and the dynamic member search.

use diesel::dsl::{IntoBoxed, LeftJoin};
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::{
        member::{Member, MemberTeam, NewMember},
        types::{MemberId, Username},
    },
    models::member::{
        Member as DbMember, MemberTeam as DbMemberTeam, NewMember as DbNewMember,
    },
    repository::{
        CountJoin, DieselRepository, MemberReader, MemberSearchQuery, MemberWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::{members, teams},
    search::MemberPredicate,
};

type JoinedMembers<'a> = IntoBoxed<'a, LeftJoin<members::table, teams::table>, Sqlite>;
type BoxedMembers<'a> = IntoBoxed<'a, members::table, Sqlite>;

/// `members LEFT JOIN teams` with every predicate applied.
fn filtered_join(predicates: &[MemberPredicate]) -> JoinedMembers<'_> {
    let mut query = members::table.left_join(teams::table).into_boxed();

    for predicate in predicates {
        query = match predicate {
            MemberPredicate::UsernameEq(username) => {
                query.filter(members::username.eq(username.as_str()))
            }
            MemberPredicate::TeamNameEq(name) => {
                query.filter(teams::name.nullable().eq(name.as_str()))
            }
            MemberPredicate::AgeGoe(age) => query.filter(members::age.ge(*age)),
            MemberPredicate::AgeLoe(age) => query.filter(members::age.le(*age)),
        };
    }

    query
}

/// `members` alone with every predicate applied. A team name predicate is
/// evaluated through a sub-select on `teams`.
fn filtered_members(predicates: &[MemberPredicate]) -> BoxedMembers<'_> {
    let mut query = members::table.into_boxed();

    for predicate in predicates {
        query = match predicate {
            MemberPredicate::UsernameEq(username) => {
                query.filter(members::username.eq(username.as_str()))
            }
            MemberPredicate::TeamNameEq(name) => query.filter(
                members::team_id.eq_any(
                    teams::table
                        .filter(teams::name.eq(name.as_str()))
                        .select(teams::id.nullable()),
                ),
            ),
            MemberPredicate::AgeGoe(age) => query.filter(members::age.ge(*age)),
            MemberPredicate::AgeLoe(age) => query.filter(members::age.le(*age)),
        };
    }

    query
}

fn to_i64(value: usize) -> RepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| RepositoryError::ValidationError(format!("{value} is out of range")))
}

fn into_domain<T, D>(rows: Vec<T>) -> RepositoryResult<Vec<D>>
where
    D: TryFrom<T>,
    RepositoryError: From<D::Error>,
{
    rows.into_iter()
        .map(|row| D::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl MemberReader for DieselRepository {
    fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberTeam>> {
        let mut conn = self.conn()?;

        let mut items = filtered_join(&query.predicates)
            .select((
                members::id,
                members::username,
                members::age,
                teams::id.nullable(),
                teams::name.nullable(),
            ))
            .order(members::id.asc());

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(to_i64(pagination.offset)?)
                .limit(to_i64(pagination.limit)?);
        }

        log::debug!("{}", diesel::debug_query::<Sqlite, _>(&items));

        let rows = items.load::<DbMemberTeam>(&mut conn)?;

        into_domain(rows)
    }

    fn count_members(&self, query: &MemberSearchQuery, join: CountJoin) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let total = match join {
            CountJoin::WithTeam => filtered_join(&query.predicates)
                .count()
                .get_result::<i64>(&mut conn)?,
            CountJoin::MembersOnly => filtered_members(&query.predicates)
                .count()
                .get_result::<i64>(&mut conn)?,
        };

        usize::try_from(total)
            .map_err(|_| RepositoryError::Unexpected(format!("negative count {total}")))
    }

    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>> {
        let mut conn = self.conn()?;

        let member = members::table
            .find(id.get())
            .first::<DbMember>(&mut conn)
            .optional()?;

        member
            .map(Member::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn list_members(&self) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;

        let rows = members::table
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(rows)
    }

    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>> {
        let mut conn = self.conn()?;

        let rows = members::table
            .filter(members::username.eq(username.as_str()))
            .order(members::id.asc())
            .load::<DbMember>(&mut conn)?;

        into_domain(rows)
    }
}

impl MemberWriter for DieselRepository {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member> {
        let mut conn = self.conn()?;

        let db_new_member: DbNewMember = new_member.into();

        let db_member = diesel::insert_into(members::table)
            .values(&db_new_member)
            .get_result::<DbMember>(&mut conn)?;

        Member::try_from(db_member).map_err(RepositoryError::from)
    }
}
