use std::collections::BTreeSet;
use std::fmt;

use crate::model::Snapshot;

/// Players at this spot are in the resident list but not actually visible,
/// the map plugin parks vanished players at it.
const HIDDEN_POSITION: (i32, i32, i32) = (0, 64, 0);

/// A player known to the map, either from a town's resident list or from the
/// live player feed. `town` and `nation` are the names of the parents, set
/// once at construction.
#[derive(Debug, Clone)]
pub struct Resident {
    pub name: String,
    pub online: bool,
    pub position: Option<(i32, i32, i32)>,
    pub hidden: bool,
    pub town: Option<String>,
    pub nation: Option<String>,
    pub npc: bool,
}

impl Resident {
    /// Build a resident by name. Never fails: an unknown name is simply an
    /// offline resident without a town.
    ///
    /// Without a known town this scans every town's resident list; the first
    /// exact match in sorted town-key order wins.
    pub fn build(name: &str, snapshot: &Snapshot) -> Self {
        let home = snapshot
            .towns()
            .find(|(_, record)| record.desc.residents.iter().any(|person| person == name));
        match home {
            Some((_, record)) => {
                Self::with_town(name, snapshot, &record.label, record.desc.nation.as_deref())
            }
            None => Self::assemble(name, snapshot, None, None),
        }
    }

    /// Build a resident whose town is already known, skipping the town scan
    /// while that town is itself under construction.
    pub(crate) fn with_town(
        name: &str,
        snapshot: &Snapshot,
        town: &str,
        nation: Option<&str>,
    ) -> Self {
        Self::assemble(name, snapshot, Some(town.to_owned()), nation.map(str::to_owned))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn assemble(
        name: &str,
        snapshot: &Snapshot,
        town: Option<String>,
        nation: Option<String>,
    ) -> Self {
        let position = snapshot
            .player(name)
            .map(|player| (player.x as i32, player.y as i32, player.z as i32));
        Self {
            name: name.to_owned(),
            online: position.is_some(),
            position,
            hidden: position.map_or(true, |at| at == HIDDEN_POSITION),
            town,
            nation,
            npc: is_npc(name),
        }
    }

    /// Every resident of every town, deduplicated by name. Someone listed in
    /// several towns keeps the first town in sorted key order.
    pub fn all(snapshot: &Snapshot) -> Vec<Self> {
        let mut seen = BTreeSet::new();
        let mut residents = Vec::new();
        for (_, record) in snapshot.towns() {
            for name in &record.desc.residents {
                if seen.insert(name.as_str()) {
                    residents.push(Self::with_town(
                        name,
                        snapshot,
                        &record.label,
                        record.desc.nation.as_deref(),
                    ));
                }
            }
        }
        residents
    }

    /// One resident per entry of the live player feed, townless wanderers
    /// included.
    pub fn all_online(snapshot: &Snapshot) -> Vec<Self> {
        snapshot
            .players()
            .iter()
            .map(|player| Self::build(&player.account, snapshot))
            .collect()
    }

    /// Multi-line human readable block.
    pub fn summary(&self) -> String {
        let position = match self.position {
            Some((x, y, z)) => format!("({x}, {y}, {z})"),
            None => String::from("none"),
        };
        format!(
            "=== {} ===\n\
             Online: {}\n\
             Position: {position}\n\
             Hidden: {}\n\
             Town: {}\n\
             Nation: {}",
            self.name,
            self.online,
            self.hidden,
            self.town.as_deref().unwrap_or("none"),
            self.nation.as_deref().unwrap_or("none"),
        )
    }
}

impl fmt::Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Server-spawned residents are named `NPC` plus a number.
fn is_npc(name: &str) -> bool {
    name.strip_prefix("NPC")
        .map_or(false, |digits| {
            !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
        })
}
