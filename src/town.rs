use std::fmt;

use crate::description::{RUINS_FLAGS, TownFlags};
use crate::error::{Error, Result};
use crate::geometry::{self, Bounds};
use crate::model::{Snapshot, TownRecord};
use crate::resident::Resident;

/// A town from the marker feed, with everything derived from its area marker.
/// `nation` is the parent nation's name, set once at construction.
#[derive(Debug, Clone)]
pub struct Town {
    pub name: String,
    pub nation: Option<String>,
    pub colour: String,
    pub mayor: Resident,
    pub residents: Vec<Resident>,
    pub flags: TownFlags,
    pub area: i32,
    pub bounds: Bounds,
    pub position: (i32, i32),
    pub ruins: bool,
}

impl Town {
    /// Build a town by key, case insensitively.
    pub fn build(name: &str, snapshot: &Snapshot) -> Result<Self> {
        let record = snapshot
            .town(name)
            .ok_or_else(|| Error::TownNotFound(name.to_owned()))?;
        Ok(Self::from_record(record, snapshot, record.desc.nation.as_deref()))
    }

    /// Build a member town for a nation that is itself under construction,
    /// so the nation name is passed down instead of re-derived.
    pub(crate) fn with_nation(record: &TownRecord, snapshot: &Snapshot, nation: &str) -> Self {
        Self::from_record(record, snapshot, Some(nation))
    }

    fn from_record(record: &TownRecord, snapshot: &Snapshot, nation: Option<&str>) -> Self {
        // mayor and residents get this town as their known parent, which is
        // what keeps resident construction from rescanning every town
        let mayor = Resident::with_town(&record.desc.mayor, snapshot, &record.label, nation);
        let residents: Vec<Resident> = record
            .desc
            .residents
            .iter()
            .map(|person| Resident::with_town(person, snapshot, &record.label, nation))
            .collect();

        let (area, bounds) = geometry::survey(&record.xs, &record.zs);
        let ruins = residents.len() == 1 && mayor.npc && record.desc.flags == RUINS_FLAGS;

        Self {
            name: record.label.clone(),
            nation: nation.map(str::to_owned),
            colour: record.colour.clone(),
            mayor,
            residents,
            flags: record.desc.flags,
            area,
            bounds,
            position: bounds.centre(),
            ruins,
        }
    }

    /// Every town of the snapshot, in sorted key order.
    pub fn all(snapshot: &Snapshot) -> Vec<Self> {
        snapshot
            .towns()
            .map(|(_, record)| Self::from_record(record, snapshot, record.desc.nation.as_deref()))
            .collect()
    }

    /// Multi-line human readable block.
    pub fn summary(&self) -> String {
        let residents: Vec<&str> = self
            .residents
            .iter()
            .map(|person| person.name.as_str())
            .collect();
        format!(
            "=== {} ===\n\
             colour: {}\n\
             mayor: {}\n\
             residents: {}\n\
             nation: {}\n\
             Area: {}\n\
             Position: ({}, {})\n\
             Bounds: {}\n\
             --- flags ---\n\
             pvp: {}\n\
             mobs: {}\n\
             explosions: {}\n\
             fire: {}\n\
             capital: {}",
            self.name,
            self.colour,
            self.mayor.name,
            residents.join(","),
            self.nation.as_deref().unwrap_or("none"),
            self.area,
            self.position.0,
            self.position.1,
            self.bounds,
            self.flags.pvp,
            self.flags.mobs,
            self.flags.explosions,
            self.flags.fire,
            self.flags.capital,
        )
    }
}

impl fmt::Display for Town {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
