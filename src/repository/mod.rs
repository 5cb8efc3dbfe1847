use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        member::{Member, MemberTeam, NewMember},
        team::{NewTeam, Team},
        types::{MemberId, TeamId, TeamName, Username},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
    search::{MemberPredicate, MemberSearchCondition, build_predicates, requires_team_join},
};

pub mod errors;
pub mod member;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod team;

/// Diesel-backed repository shared by every handler.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

/// Planned member search: AND-combined predicates plus optional paging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberSearchQuery {
    pub predicates: Vec<MemberPredicate>,
    pub pagination: Option<Pagination>,
}

impl MemberSearchQuery {
    pub fn new(predicates: Vec<MemberPredicate>) -> Self {
        Self {
            predicates,
            pagination: None,
        }
    }

    pub fn from_condition(condition: &MemberSearchCondition) -> Self {
        Self::new(build_predicates(condition))
    }

    pub fn paginate(mut self, request: &PageRequest) -> Self {
        self.pagination = Some(Pagination {
            offset: request.offset(),
            limit: request.size(),
        });
        self
    }
}

/// FROM clause used by a count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountJoin {
    /// `members LEFT JOIN teams`, identical to the search itself.
    WithTeam,
    /// `members` alone.
    MembersOnly,
}

impl CountJoin {
    /// Narrowest join that still evaluates `predicates`.
    pub fn reduced_for(predicates: &[MemberPredicate]) -> Self {
        if requires_team_join(predicates) {
            CountJoin::WithTeam
        } else {
            CountJoin::MembersOnly
        }
    }
}

pub trait MemberReader {
    fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberTeam>>;
    fn count_members(&self, query: &MemberSearchQuery, join: CountJoin) -> RepositoryResult<usize>;
    fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
    fn list_members(&self) -> RepositoryResult<Vec<Member>>;
    fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
}

pub trait MemberWriter {
    fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
}

pub trait TeamReader {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
}

pub trait TeamWriter {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
}
