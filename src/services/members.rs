//! Services handling member searches and member bookkeeping.

use crate::domain::member::{Member, MemberTeam, NewMember};
use crate::domain::team::{NewTeam, Team};
use crate::domain::types::{Age, MemberId, TeamId, TeamName, Username};
use crate::pagination::{CountDecision, CountStrategy, Page, PageRequest, decide_count_strategy};
use crate::repository::{
    CountJoin, MemberReader, MemberSearchQuery, MemberWriter, TeamReader, TeamWriter,
};
use crate::search::MemberSearchCondition;
use crate::services::{ServiceError, ServiceResult};

/// Returns every member matching `condition`, without paging.
pub fn search_members<R>(
    repo: &R,
    condition: &MemberSearchCondition,
) -> ServiceResult<Vec<MemberTeam>>
where
    R: MemberReader + ?Sized,
{
    let query = MemberSearchQuery::from_condition(condition);

    Ok(repo.search_members(&query)?)
}

/// Returns one page of members matching `condition`.
///
/// `strategy` selects how the total element count is obtained; every
/// strategy reports the same total.
pub fn search_members_page<R>(
    repo: &R,
    condition: &MemberSearchCondition,
    request: &PageRequest,
    strategy: CountStrategy,
) -> ServiceResult<Page<MemberTeam>>
where
    R: MemberReader + ?Sized,
{
    let query = MemberSearchQuery::from_condition(condition);

    let content = repo.search_members(&query.clone().paginate(request))?;

    let total = match strategy {
        CountStrategy::Always => repo.count_members(&query, CountJoin::WithTeam)?,
        CountStrategy::JoinReduced => {
            repo.count_members(&query, CountJoin::reduced_for(&query.predicates))?
        }
        CountStrategy::SkipWhenPossible => match decide_count_strategy(request, content.len()) {
            CountDecision::Skip { total } => {
                log::debug!("Skipping count query, page proves total of {total}");
                total
            }
            CountDecision::Run => repo.count_members(&query, CountJoin::WithTeam)?,
        },
    };

    Ok(Page::new(content, request, total))
}

/// Loads a single member by its identifier.
pub fn get_member<R>(repo: &R, member_id: i32) -> ServiceResult<Member>
where
    R: MemberReader + ?Sized,
{
    let member_id = MemberId::new(member_id)?;

    repo.get_member_by_id(member_id)?
        .ok_or(ServiceError::NotFound)
}

/// Lists members whose username matches exactly.
pub fn members_by_username<R>(repo: &R, username: &str) -> ServiceResult<Vec<Member>>
where
    R: MemberReader + ?Sized,
{
    let username = Username::new(username)?;

    Ok(repo.list_members_by_username(&username)?)
}

/// Lists every member in id order.
pub fn list_members<R>(repo: &R) -> ServiceResult<Vec<Member>>
where
    R: MemberReader + ?Sized,
{
    Ok(repo.list_members()?)
}

/// Loads a single team by its identifier.
pub fn get_team<R>(repo: &R, team_id: i32) -> ServiceResult<Team>
where
    R: TeamReader + ?Sized,
{
    let team_id = TeamId::new(team_id)?;

    repo.get_team_by_id(team_id)?.ok_or(ServiceError::NotFound)
}

fn find_or_create_team<R>(repo: &R, name: &str) -> ServiceResult<Team>
where
    R: TeamReader + TeamWriter + ?Sized,
{
    let name = TeamName::new(name)?;

    match repo.get_team_by_name(&name)? {
        Some(team) => Ok(team),
        None => Ok(repo.create_team(&NewTeam::new(name))?),
    }
}

/// Loads the sample data set: `teamA`, `teamB` and `count` members named
/// `member{i}` aged `i`, alternating between the two teams.
///
/// Returns the number of members created.
pub fn seed_sample_members<R>(repo: &R, count: usize) -> ServiceResult<usize>
where
    R: TeamReader + TeamWriter + MemberWriter + ?Sized,
{
    let team_a = find_or_create_team(repo, "teamA")?;
    let team_b = find_or_create_team(repo, "teamB")?;

    for i in 0..count {
        let team = if i % 2 == 0 { &team_a } else { &team_b };
        let age = i32::try_from(i)
            .map_err(|_| ServiceError::Form(format!("too many sample members: {count}")))?;
        let new_member = NewMember::new(
            Username::new(format!("member{i}"))?,
            Age::new(age)?,
            Some(team.id),
        );
        repo.create_member(&new_member)?;
    }

    log::info!("Seeded {count} sample members");

    Ok(count)
}
