use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{Identifier, Region, RegionList, TeamProfile, TeamRanking};

#[instrument(skip(client), fields(region = %region))]
pub(crate) async fn get_team_rankings(
    client: &reqwest::Client,
    base_url: &str,
    region: Region,
) -> Result<Vec<TeamRanking>> {
    let url = api::endpoint_url(base_url, &format!("/teams/rankings/{region}"), &[])?;
    let teams: Vec<TeamRanking> = api::get_data(client, url).await?;
    debug!(count = teams.len(), "parsed team rankings");
    Ok(teams)
}

#[instrument(skip(client))]
pub(crate) async fn get_regions(client: &reqwest::Client, base_url: &str) -> Result<RegionList> {
    let url = api::endpoint_url(base_url, "/teams/regions", &[])?;
    api::get_data(client, url).await
}

#[instrument(skip(client), fields(team_id = %team_id))]
pub(crate) async fn get_team(
    client: &reqwest::Client,
    base_url: &str,
    team_id: &Identifier,
) -> Result<TeamProfile> {
    let url = api::resource_url(base_url, "/teams", team_id)?;
    let team: TeamProfile = api::get_data(client, url).await?;
    debug!(
        roster = team.roster.as_ref().map_or(0, |r| r.players.len()),
        "parsed team profile"
    );
    Ok(team)
}
