//! The data layer: one immutable `Snapshot` of the two upstream documents,
//! which every entity builder reads from and none of them mutate.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::description::TownDescription;
use crate::error::{Error, Result};

pub mod download;

/// The marker set the towny plugin writes its area markers into.
const MARKER_SET: &str = "townyPlugin.markerset";

/// Suffix of the one area marker per town that carries the town outline.
/// Further `__1`, `__2`... markers exist for detached territory.
const HOME_AREA_SUFFIX: &str = "__0";

#[derive(Debug, Deserialize)]
struct MarkerDocument {
    sets: BTreeMap<String, MarkerSet>,
}

#[derive(Debug, Deserialize)]
struct MarkerSet {
    areas: BTreeMap<String, AreaMarker>,
}

#[derive(Debug, Deserialize)]
struct AreaMarker {
    label: String,
    fillcolor: String,
    x: Vec<f64>,
    z: Vec<f64>,
    desc: String,
}

#[derive(Debug, Deserialize)]
struct PlayerDocument {
    players: Vec<PlayerRecord>,
}

/// One entry of the live player feed.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerRecord {
    pub account: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// One town as stored in the snapshot: the marker data with its description
/// already parsed into named fields.
#[derive(Debug, Clone)]
pub(crate) struct TownRecord {
    pub label: String,
    pub colour: String,
    pub xs: Vec<f64>,
    pub zs: Vec<f64>,
    pub desc: TownDescription,
}

/// The paired town and player documents of one world, parsed and keyed.
/// Builders take this by reference and derive everything else from it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    towns: BTreeMap<String, TownRecord>,
    players: Vec<PlayerRecord>,
}

impl Snapshot {
    /// Parse the raw marker document and live player document into a snapshot.
    ///
    /// Town keys are the `__0` area keys with the suffix removed, lowercased.
    /// Descriptions are parsed here, exactly once; a description with too few
    /// segments or a broken vertex list fails the whole snapshot rather than
    /// producing silently wrong towns.
    pub fn from_documents(town_json: &str, player_json: &str) -> Result<Self> {
        let marker: MarkerDocument = serde_json::from_str(town_json)?;
        let player: PlayerDocument = serde_json::from_str(player_json)?;

        let set = marker
            .sets
            .get(MARKER_SET)
            .ok_or_else(|| Error::MalformedDocument(format!("no {MARKER_SET:?} marker set")))?;

        let mut towns = BTreeMap::new();
        for (area_key, area) in &set.areas {
            let Some(town_key) = area_key.strip_suffix(HOME_AREA_SUFFIX) else {
                continue;
            };
            let town_key = town_key.to_lowercase();
            if area.x.len() != area.z.len() || area.x.len() < 3 {
                return Err(Error::MalformedDocument(format!(
                    "town {town_key} has a broken outline ({} x / {} z vertices)",
                    area.x.len(),
                    area.z.len()
                )));
            }
            let desc = TownDescription::parse(&town_key, &area.desc)?;
            towns.insert(
                town_key,
                TownRecord {
                    label: area.label.clone(),
                    colour: area.fillcolor.clone(),
                    xs: area.x.clone(),
                    zs: area.z.clone(),
                    desc,
                },
            );
        }
        log::debug!(
            "snapshot holds {} towns and {} online players",
            towns.len(),
            player.players.len()
        );
        Ok(Self {
            towns,
            players: player.players,
        })
    }

    /// Case insensitive town lookup by key.
    pub(crate) fn town(&self, name: &str) -> Option<&TownRecord> {
        self.towns.get(&name.to_lowercase())
    }

    /// All towns in sorted key order.
    pub(crate) fn towns(&self) -> impl Iterator<Item = (&str, &TownRecord)> {
        self.towns
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    /// The live feed entry for an account, if that player is online.
    pub(crate) fn player(&self, account: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|player| player.account == account)
    }

    pub(crate) fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn town_count(&self) -> usize {
        self.towns.len()
    }

    pub fn online_count(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn keys_are_lowercased_and_home_areas_kept() {
        let snapshot = testing::snapshot();
        assert!(snapshot.town("london").is_some());
        // lookup is case insensitive on top of the lowercase keys
        assert!(snapshot.town("LoNdOn").is_some());
        // the __1 outpost area of london must not become its own town
        assert_eq!(snapshot.town_count(), 4);
    }

    #[test]
    fn missing_marker_set_is_an_error() {
        let town_json = r#"{"sets":{"somethingElse":{"areas":{}}}}"#;
        let err = Snapshot::from_documents(town_json, r#"{"players":[]}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn broken_outline_is_an_error() {
        let err = testing::snapshot_with_town_vertices(&[0.0, 16.0], &[0.0, 0.0, 16.0]).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
        let err = testing::snapshot_with_town_vertices(&[0.0, 16.0], &[0.0, 16.0]).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn player_lookup_is_exact() {
        let snapshot = testing::snapshot();
        assert!(snapshot.player("Steve").is_some());
        assert!(snapshot.player("steve").is_none());
        assert!(snapshot.player("Herobrine").is_none());
    }
}
