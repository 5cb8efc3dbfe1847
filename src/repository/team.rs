//! Repository implementation for teams.

use diesel::prelude::*;

use crate::{
    domain::{
        team::{NewTeam, Team},
        types::{TeamId, TeamName},
    },
    models::team::{NewTeam as DbNewTeam, Team as DbTeam},
    repository::{
        DieselRepository, TeamReader, TeamWriter,
        errors::{RepositoryError, RepositoryResult},
    },
    schema::teams,
};

impl TeamReader for DieselRepository {
    fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<Team>> {
        let mut conn = self.conn()?;

        let team = teams::table
            .find(id.get())
            .first::<DbTeam>(&mut conn)
            .optional()?;

        team.map(Team::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }

    fn get_team_by_name(&self, name: &TeamName) -> RepositoryResult<Option<Team>> {
        let mut conn = self.conn()?;

        let team = teams::table
            .filter(teams::name.eq(name.as_str()))
            .order(teams::id.asc())
            .first::<DbTeam>(&mut conn)
            .optional()?;

        team.map(Team::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl TeamWriter for DieselRepository {
    fn create_team(&self, new_team: &NewTeam) -> RepositoryResult<Team> {
        let mut conn = self.conn()?;

        let db_new_team: DbNewTeam = new_team.into();

        let db_team = diesel::insert_into(teams::table)
            .values(&db_new_team)
            .get_result::<DbTeam>(&mut conn)?;

        Team::try_from(db_team).map_err(RepositoryError::from)
    }
}
