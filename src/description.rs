use crate::error::{Error, Result};

/// The boolean town settings embedded in the description html.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TownFlags {
    pub pvp: bool,
    pub mobs: bool,
    pub explosions: bool,
    pub fire: bool,
    pub capital: bool,
}

/// The flag combination towny leaves behind on an abandoned town.
pub(crate) const RUINS_FLAGS: TownFlags = TownFlags {
    pvp: true,
    mobs: true,
    explosions: true,
    fire: true,
    capital: false,
};

/// A town description, parsed once from the marker html into named fields.
/// Downstream code only ever looks at this struct, never at raw segments.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
pub struct TownDescription {
    pub nation: Option<String>,
    pub mayor: String,
    pub residents: Vec<String>,
    pub flags: TownFlags,
}

// the upstream html is not a format, it is a layout. These are the segment
// positions the map plugin has emitted for years.
const SEGMENT_HEADER: usize = 0;
const SEGMENT_MAYOR: usize = 2;
const SEGMENT_RESIDENTS: usize = 4;
const SEGMENT_PVP: usize = 7;
const SEGMENT_MOBS: usize = 8;
const SEGMENT_EXPLOSIONS: usize = 10;
const SEGMENT_FIRE: usize = 11;
const SEGMENT_CAPITAL: usize = 12;
const SEGMENT_COUNT: usize = 13;

impl TownDescription {
    /// Parse the raw marker html for the town stored under `key`.
    pub(crate) fn parse(key: &str, raw: &str) -> Result<Self> {
        let segments = split_markup(raw);
        Self::from_segments(&segments).map_err(|detail| Error::MalformedDescription {
            key: key.to_owned(),
            detail,
        })
    }

    fn from_segments(segments: &[String]) -> std::result::Result<Self, String> {
        if segments.len() < SEGMENT_COUNT {
            return Err(format!(
                "expected at least {SEGMENT_COUNT} description segments, got {}",
                segments.len()
            ));
        }
        Ok(Self {
            nation: nation_name(&segments[SEGMENT_HEADER]),
            mayor: segments[SEGMENT_MAYOR].clone(),
            residents: segments[SEGMENT_RESIDENTS]
                .split(", ")
                .map(str::to_owned)
                .collect(),
            flags: TownFlags {
                pvp: segments[SEGMENT_PVP] == "pvp: true",
                mobs: segments[SEGMENT_MOBS] == "mobs: true",
                explosions: segments[SEGMENT_EXPLOSIONS] == "explosion: true",
                fire: segments[SEGMENT_FIRE] == "fire: true",
                capital: segments[SEGMENT_CAPITAL] == "capital: true",
            },
        })
    }
}

/// Extract the nation name from the header segment, which reads
/// `"Label (Nation)"`. The trailing character is dropped and everything after
/// the last `(` is the nation; an empty remainder means the town is nationless.
fn nation_name(header: &str) -> Option<String> {
    let trimmed = match header.char_indices().last() {
        Some((index, _)) => &header[..index],
        None => "",
    };
    let name = trimmed.rsplit('(').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name.to_owned())
    }
}

/// Split html-ish text at every complete `<...>` tag and return the non-empty
/// text segments between the tags, in order. A tag may not contain another
/// `<` or `>`; a `<` that never closes is kept as literal text.
pub(crate) fn split_markup(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut rest = raw;
    while let Some(open) = rest.find('<') {
        let (text, tail) = rest.split_at(open);
        let body = &tail[1..];
        match body.find(|c| c == '<' || c == '>') {
            Some(end) if body.as_bytes()[end] == b'>' => {
                current.push_str(text);
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
                rest = &body[end + 1..];
            }
            _ => {
                // not a tag after all, the bracket is plain text
                current.push_str(text);
                current.push('<');
                rest = body;
            }
        }
    }
    current.push_str(rest);
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
