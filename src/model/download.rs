//! Fetches the two map documents for a world and turns them into a snapshot.

use log::debug;

use crate::error::Result;
use crate::model::Snapshot;
use crate::server::Server;

fn make_client() -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("earthmap/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .deflate(true)
        .build()
}

fn download_generic(client: &reqwest::blocking::Client, url: &str) -> reqwest::Result<String> {
    let response = client.get(url).send()?;
    debug!("got status {} for url {url}", response.status());
    response.error_for_status()?.text()
}

/// Download both documents for the given world and parse them. Any transport
/// failure or non-success status is an error, there are no retries.
pub fn fetch_snapshot(server: Server) -> Result<Snapshot> {
    let client = make_client()?;
    let town_json = download_generic(&client, &server.marker_url())?;
    let player_json = download_generic(&client, &server.player_url())?;
    Snapshot::from_documents(&town_json, &player_json)
}
