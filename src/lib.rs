//! Typed client for the steamladder.com API

pub mod settings;
pub mod steamladder;

pub use settings::Settings;
pub use steamladder::ladder::{Ladder, LadderEntry, LadderType, Region};
pub use steamladder::profile::SteamProfile;
pub use steamladder::{ApiResult, Client, SteamLadderError};
