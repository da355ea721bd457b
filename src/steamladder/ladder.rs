use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::steamladder::profile::{SteamStats, SteamUser};
use crate::steamladder::{ApiResult, Client};

const ENDPOINT: &str = "ladder";

/// Metric a ladder is ranked by
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LadderType {
    Xp,
    Games,
    Playtime,
    Badges,
    SteamAge,
    Vac,
    GameBan,
}

impl LadderType {
    /// Path segment the API expects for this ladder
    pub fn to_str(&self) -> &'static str {
        match self {
            LadderType::Xp => "xp",
            LadderType::Games => "games",
            LadderType::Playtime => "playtime",
            LadderType::Badges => "badges",
            LadderType::SteamAge => "steamage",
            LadderType::Vac => "vac",
            LadderType::GameBan => "gameban",
        }
    }

    pub fn iter() -> std::slice::Iter<'static, LadderType> {
        use LadderType::*;
        static TYPES: [LadderType; 7] = [Xp, Games, Playtime, Badges, SteamAge, Vac, GameBan];
        TYPES.iter()
    }
}

impl std::str::FromStr for LadderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let lowered = s.to_lowercase();
        LadderType::iter()
            .find(|t| t.to_str() == lowered)
            .copied()
            .ok_or_else(|| format!("Unknown ladder type {}", s))
    }
}

impl std::fmt::Display for LadderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Europe,
    NorthAmerica,
    SouthAmerica,
    Asia,
    Africa,
    Oceania,
    Antarctica,
}

impl Region {
    pub fn to_str(&self) -> &'static str {
        match self {
            Region::Europe => "europe",
            Region::NorthAmerica => "northamerica",
            Region::SouthAmerica => "southamerica",
            Region::Asia => "asia",
            Region::Africa => "africa",
            Region::Oceania => "oceania",
            Region::Antarctica => "antarctica",
        }
    }

    pub fn iter() -> std::slice::Iter<'static, Region> {
        use Region::*;
        static REGIONS: [Region; 7] = [
            Europe,
            NorthAmerica,
            SouthAmerica,
            Asia,
            Africa,
            Oceania,
            Antarctica,
        ];
        REGIONS.iter()
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::Europe
    }
}

impl std::str::FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let lowered = s.to_lowercase();
        Region::iter()
            .find(|r| r.to_str() == lowered)
            .copied()
            .ok_or_else(|| format!("Unknown region {}", s))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// One row of a ladder
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LadderEntry {
    #[serde(rename = "pos")]
    pub position: i64,
    pub steam_user: SteamUser,
    pub steam_stats: SteamStats,
}

/// Data structure of the ladder response.
///
/// `country_code` is only set for country ladders.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Ladder {
    #[serde(rename = "type")]
    pub ladder_type: String,
    pub type_url: String,
    pub country_code: Option<String>,
    /// Ranked order as sent by the API, not re-sorted
    #[serde(rename = "ladder")]
    pub entries: Vec<LadderEntry>,
}

pub fn region_endpoint(ladder_type: LadderType, region: Region) -> String {
    format!("{}/{}/{}", ENDPOINT, ladder_type, region)
}

/// The country code is passed on as given, the service rejects unknown codes.
pub fn country_endpoint(ladder_type: LadderType, country: &str) -> String {
    format!("{}/{}/{}", ENDPOINT, ladder_type, country)
}

impl Client {
    /// Requests a regional ladder. `Region::default()` is Europe.
    pub async fn get_ladder(&self, ladder_type: LadderType, region: Region) -> ApiResult<Ladder> {
        self.get::<Ladder>(&region_endpoint(ladder_type, region))
            .await
    }

    /// Requests the ladder of a single country by its ISO 3166-1 alpha-2 code
    pub async fn get_country_ladder(
        &self,
        ladder_type: LadderType,
        country: &str,
    ) -> ApiResult<Ladder> {
        self.get::<Ladder>(&country_endpoint(ladder_type, country))
            .await
    }
}
