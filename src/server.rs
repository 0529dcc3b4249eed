use std::fmt;

use strum_macros::EnumIter;

/// The two EarthMC worlds. Every fetch is made against exactly one of them,
/// the datasets are otherwise identical in shape.
#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
pub enum Server {
    Nova,
    Aurora,
}

impl Server {
    /// The lowercase id used in every map URL.
    pub fn id(self) -> &'static str {
        match self {
            Server::Nova => "nova",
            Server::Aurora => "aurora",
        }
    }

    /// Marker feed: town areas, their geometry and description html.
    pub(crate) fn marker_url(self) -> String {
        format!(
            "https://earthmc.net/map/{}/tiles/_markers_/marker_earth.json",
            self.id()
        )
    }

    /// Live feed: currently visible players and their positions.
    pub(crate) fn player_url(self) -> String {
        format!("https://earthmc.net/map/{}/up/world/earth/", self.id())
    }

    /// A shareable link to the web map, centered on the given block position.
    pub fn map_link(self, x: i32, z: i32, zoom: u8) -> String {
        format!(
            "https://earthmc.net/map/{}/?zoom={zoom}&x={x}&z={z}",
            self.id()
        )
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
