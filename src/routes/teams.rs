use actix_web::{Responder, get, web};

use crate::dto::members::TeamDto;
use crate::repository::DieselRepository;
use crate::routes::respond;
use crate::services::members as members_service;

#[get("/teams/{team_id}")]
pub async fn show_team(
    team_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let team_id = team_id.into_inner();
    let result = web::block(move || {
        members_service::get_team(repo.get_ref(), team_id).map(TeamDto::from)
    })
    .await;

    respond(result, "Failed to load team")
}
