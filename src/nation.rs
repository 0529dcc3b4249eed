use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::model::Snapshot;
use crate::resident::Resident;
use crate::town::Town;

/// A nation, assembled from every town whose description names it.
#[derive(Debug, Clone)]
pub struct Nation {
    pub name: String,
    pub towns: Vec<Town>,
    pub capital: Town,
    pub leader: Resident,
    pub colour: String,
    pub citizens: Vec<Resident>,
    pub area: i32,
}

impl Nation {
    /// Build a nation by name.
    ///
    /// Fails with `NationNotFound` for an empty name or a name no town claims.
    /// The capital is the member town flagged as such; none flagged is a
    /// `CapitalNotFound` error, several flagged resolve to the first in
    /// sorted town-key order.
    pub fn build(name: &str, snapshot: &Snapshot) -> Result<Self> {
        let members: Vec<_> = snapshot
            .towns()
            .filter(|(_, record)| record.desc.nation.as_deref() == Some(name))
            .collect();
        if members.is_empty() || name.is_empty() {
            return Err(Error::NationNotFound(name.to_owned()));
        }

        let towns: Vec<Town> = members
            .into_iter()
            .map(|(_, record)| Town::with_nation(record, snapshot, name))
            .collect();
        let capital = towns
            .iter()
            .find(|town| town.flags.capital)
            .cloned()
            .ok_or_else(|| Error::CapitalNotFound(name.to_owned()))?;

        let mut seen = BTreeSet::new();
        let mut citizens: Vec<Resident> = towns
            .iter()
            .flat_map(|town| town.residents.iter())
            .filter(|person| seen.insert(person.name.clone()))
            .cloned()
            .collect();
        citizens.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            name: name.to_owned(),
            leader: capital.mayor.clone(),
            colour: capital.colour.clone(),
            area: towns.iter().map(|town| town.area).sum(),
            capital,
            towns,
            citizens,
        })
    }

    /// One nation per distinct non-empty nation name in the snapshot.
    pub fn all(snapshot: &Snapshot) -> Result<Vec<Self>> {
        let names: BTreeSet<&str> = snapshot
            .towns()
            .filter_map(|(_, record)| record.desc.nation.as_deref())
            .collect();
        names
            .into_iter()
            .map(|name| Self::build(name, snapshot))
            .collect()
    }

    /// Multi-line human readable block.
    pub fn summary(&self) -> String {
        let towns: Vec<&str> = self.towns.iter().map(|town| town.name.as_str()).collect();
        let citizens: Vec<&str> = self
            .citizens
            .iter()
            .map(|person| person.name.as_str())
            .collect();
        format!(
            "=== {} ===\n\
             Towns: {}\n\
             Capital: {}\n\
             Leader: {}\n\
             Colour: {}\n\
             Citizens: {}\n\
             Area: {}",
            self.name,
            towns.join(", "),
            self.capital.name,
            self.leader.name,
            self.colour,
            citizens.join(","),
            self.area,
        )
    }
}

impl fmt::Display for Nation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
