//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::member::{Member, MemberTeam, NewMember};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{MemberId, TeamId, TeamName, Username};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CountJoin, MemberReader, MemberSearchQuery, MemberWriter, TeamReader, TeamWriter,
};

mock! {
    pub Repository {}

    impl MemberReader for Repository {
        fn search_members(&self, query: &MemberSearchQuery) -> RepositoryResult<Vec<MemberTeam>>;
        fn count_members(
            &self,
            query: &MemberSearchQuery,
            join: CountJoin,
        ) -> RepositoryResult<usize>;
        fn get_member_by_id(&self, id: MemberId) -> RepositoryResult<Option<Member>>;
        fn list_members(&self) -> RepositoryResult<Vec<Member>>;
        fn list_members_by_username(&self, username: &Username) -> RepositoryResult<Vec<Member>>;
    }

    impl MemberWriter for Repository {
        fn create_member(&self, new_member: &NewMember) -> RepositoryResult<Member>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>>;
        fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>>;
    }

    impl TeamWriter for Repository {
        fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team>;
    }
}
