use std::env;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use steamladder as sl;

// Fetches one profile and the default xp ladder, mostly useful to check an API key
#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Set up logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to start the logger");

    let steam_id64 = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(id)) => id,
        _ => {
            eprintln!("usage: main <steamid64>");
            return;
        }
    };

    let settings = sl::Settings::from_env().expect("Failed to load settings");
    let client = sl::Client::from_settings(&settings).expect("Failed to create the client");

    match client.get_profile(steam_id64).await {
        Ok(profile) => println!(
            "{} (level {}, {} xp)",
            profile.steam_user.steam_name, profile.steam_stats.level, profile.steam_stats.xp
        ),
        Err(why) => tracing::error!("Profile error: {:?}", why),
    }

    match client
        .get_ladder(sl::LadderType::Xp, sl::Region::default())
        .await
    {
        Ok(ladder) => {
            for entry in ladder.entries.iter().take(10) {
                println!("{:>3}. {}", entry.position, entry.steam_user.steam_name);
            }
        }
        Err(why) => tracing::error!("Ladder error: {:?}", why),
    }
}
