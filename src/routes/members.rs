use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::members::{MemberDto, MemberTeamDto};
use crate::forms::members::{CountParams, PageParams};
use crate::models::config::PageLimits;
use crate::pagination::CountStrategy;
use crate::repository::DieselRepository;
use crate::routes::respond;
use crate::search::MemberSearchCondition;
use crate::services::{ServiceError, members as members_service};

async fn search_page(
    condition: MemberSearchCondition,
    params: PageParams,
    strategy: CountStrategy,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> HttpResponse {
    let result = web::block(move || {
        let request = params
            .into_page_request(&limits)
            .map_err(ServiceError::from)?;
        members_service::search_members_page(repo.get_ref(), &condition, &request, strategy)
            .map(|page| page.map(MemberTeamDto::from))
    })
    .await;

    respond(result, "Failed to search member page")
}

/// Unpaginated search.
#[get("/v1/members")]
pub async fn search_members_v1(
    condition: web::Query<MemberSearchCondition>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let condition = condition.into_inner();
    let result = web::block(move || {
        members_service::search_members(repo.get_ref(), &condition)
            .map(|rows| rows.into_iter().map(MemberTeamDto::from).collect::<Vec<_>>())
    })
    .await;

    respond(result, "Failed to search members")
}

/// Paged search with a full count query.
#[get("/v2/members")]
pub async fn search_members_v2(
    condition: web::Query<MemberSearchCondition>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_page(
        condition.into_inner(),
        params.into_inner(),
        CountStrategy::Always,
        repo,
        limits,
    )
    .await
}

/// Paged search with the join-reduced count query.
#[get("/v3/members")]
pub async fn search_members_v3(
    condition: web::Query<MemberSearchCondition>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_page(
        condition.into_inner(),
        params.into_inner(),
        CountStrategy::JoinReduced,
        repo,
        limits,
    )
    .await
}

/// Paged search that skips the count query when the page proves the total.
#[get("/v4/members")]
pub async fn search_members_v4(
    condition: web::Query<MemberSearchCondition>,
    params: web::Query<PageParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_page(
        condition.into_inner(),
        params.into_inner(),
        CountStrategy::SkipWhenPossible,
        repo,
        limits,
    )
    .await
}

/// Paged search with the count strategy chosen by the `count` parameter.
#[get("/members")]
pub async fn search_members(
    condition: web::Query<MemberSearchCondition>,
    params: web::Query<PageParams>,
    count: web::Query<CountParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    search_page(
        condition.into_inner(),
        params.into_inner(),
        count.strategy(),
        repo,
        limits,
    )
    .await
}

#[get("/members/by-username/{username}")]
pub async fn members_by_username(
    username: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let username = username.into_inner();
    let result = web::block(move || {
        members_service::members_by_username(repo.get_ref(), &username)
            .map(|members| members.into_iter().map(MemberDto::from).collect::<Vec<_>>())
    })
    .await;

    respond(result, "Failed to list members by username")
}

/// Every member in id order.
#[get("/members/all")]
pub async fn list_members(repo: web::Data<DieselRepository>) -> impl Responder {
    let result = web::block(move || {
        members_service::list_members(repo.get_ref())
            .map(|members| members.into_iter().map(MemberDto::from).collect::<Vec<_>>())
    })
    .await;

    respond(result, "Failed to list members")
}

#[get("/members/{member_id}")]
pub async fn show_member(
    member_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let member_id = member_id.into_inner();
    let result = web::block(move || {
        members_service::get_member(repo.get_ref(), member_id).map(MemberDto::from)
    })
    .await;

    respond(result, "Failed to load member")
}
