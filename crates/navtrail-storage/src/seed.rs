use serde::Deserialize;
use tracing::info;

use navtrail_core::models::entry::NewEntry;
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog};

use crate::error::StorageError;
use crate::store::LogStore;

const DEMO_LOG: &str = include_str!("demo_log.json");

#[derive(Deserialize)]
struct DemoFixture {
    log: NewTravelLog,
    entries: Vec<NewEntry>,
}

/// Load the bundled sample log so a fresh server has something to show.
pub async fn seed_demo(store: &LogStore) -> Result<TravelLog, StorageError> {
    let fixture: DemoFixture = serde_json::from_str(DEMO_LOG)?;

    let log = store.create_log(fixture.log).await?;
    for entry in fixture.entries {
        store.add_entry(log.id, entry).await?;
    }

    let seeded = store.get_log(log.id).await?;
    info!(
        log_id = %seeded.id,
        entries = seeded.entries.len(),
        "seeded demo travel log"
    );
    Ok(seeded)
}
