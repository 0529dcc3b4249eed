use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between fetching the two map documents and
/// handing out finished entities.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the town {0} could not be found")]
    TownNotFound(String),

    #[error("the nation {0} was not found")]
    NationNotFound(String),

    #[error("no town of {0} is flagged as its capital")]
    CapitalNotFound(String),

    #[error("town {key}: {detail}")]
    MalformedDescription { key: String, detail: String },

    #[error("town document: {0}")]
    MalformedDocument(String),

    #[error("failed to fetch map data")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to decode map data")]
    Decode(#[from] serde_json::Error),
}
