//! Profile endpoint
//!
//! `GET profile/{id}/` returns the cached profile, `POST profile/{id}` asks the
//! service to refresh it first. The missing trailing slash on the POST is what
//! the service expects, don't "fix" it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::steamladder::{timestamp, ApiResult, Client};

/// Endpoint url, relative to the base URL
const ENDPOINT: &str = "profile";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SteamUser {
    pub steam_name: String,
    pub steam_id: String,
    pub steamladder_url: String,
    #[serde(with = "timestamp")]
    pub steam_join_date: DateTime<Utc>,
    // ISO 3166-1 alpha-2
    pub steam_country_code: String,
    pub steam_avatar_src: String,
    pub is_steam_private: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Badge {
    #[serde(rename = "pos")]
    pub position: i64,
    pub name: String,
    pub foil: bool,
    pub level: i64,
    pub xp: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Badges {
    pub total: i64,
    /// In the order the API sent them
    pub tracking: Vec<Badge>,
}

/// Flags steamladder itself keeps about a user
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LadderServiceInfo {
    pub is_staff: bool,
    pub is_winter_18: bool,
    pub is_winter_19: bool,
    pub is_donator: bool,
    pub is_top_donator: bool,
    pub patreon_tier: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Game {
    #[serde(rename = "pos")]
    pub position: i64,
    pub id: i64,
    pub name: String,
    pub playtime_min: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Games {
    pub total_games: i64,
    pub total_playtime_min: i64,
    pub most_played: Vec<Game>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Bans {
    pub vac_bans: i64,
    pub game_bans: i64,
    // null if the user was never banned
    #[serde(default, with = "timestamp::option")]
    pub last_ban_day: Option<DateTime<Utc>>,
    pub is_vac_banned: bool,
    pub is_community_banned: bool,
    pub economy_status: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SteamStats {
    #[serde(with = "timestamp")]
    pub last_update: DateTime<Utc>,
    pub level: i64,
    pub xp: i64,
    pub friends: i64,
    pub badges: Badges,
    pub games: Games,
    pub bans: Bans,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RegionRank {
    pub region_xp: i64,
    pub region_playtime: i64,
    pub region_games: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CountryRank {
    pub country_xp: i64,
    pub country_playtime: i64,
    pub country_games: i64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LadderRank {
    pub worldwide_xp: i64,
    pub worldwide_games: i64,
    pub worldwide_playtime: i64,
    pub region: RegionRank,
    pub country: CountryRank,
}

/// Data structure of the profile response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SteamProfile {
    pub steam_user: SteamUser,
    pub steam_ladder_info: LadderServiceInfo,
    pub steam_stats: SteamStats,
    pub ladder_rank: LadderRank,
}

/// Path of the profile lookup, e.g. `profile/76561197960287930/`
pub fn endpoint(steam_id64: u64) -> String {
    format!("{}/{}/", ENDPOINT, steam_id64)
}

/// Path of the profile refresh, e.g. `profile/76561197960287930`
pub fn update_endpoint(steam_id64: u64) -> String {
    format!("{}/{}", ENDPOINT, steam_id64)
}

impl Client {
    /// Requests the profile of a user by their 64 bit steam id
    ///
    /// # Example
    /// ```no_run
    /// # async fn run() -> steamladder::ApiResult<()> {
    /// let client = steamladder::Client::new("my-api-key")?;
    /// let profile = client.get_profile(76561197960287930).await?;
    /// println!("{}", profile.steam_user.steam_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_profile(&self, steam_id64: u64) -> ApiResult<SteamProfile> {
        self.get::<SteamProfile>(&endpoint(steam_id64)).await
    }

    /// Makes steamladder refresh the profile and returns the refreshed data
    pub async fn update_profile(&self, steam_id64: u64) -> ApiResult<SteamProfile> {
        self.post::<SteamProfile>(&update_endpoint(steam_id64)).await
    }
}
