//! Fixture documents for the parser and entity tests, shaped like the
//! upstream map emits them.

use serde_json::{json, Value};

use crate::description::TownFlags;
use crate::error::Result;
use crate::model::Snapshot;

pub(crate) const FLAGS_OFF: TownFlags = TownFlags {
    pvp: false,
    mobs: false,
    explosions: false,
    fire: false,
    capital: false,
};

#[allow(clippy::fn_params_excessive_bools)]
fn desc_segments(
    header: &str,
    mayor: &str,
    residents: &str,
    pvp_line: &str,
    mobs: bool,
    explosions: bool,
    fire: bool,
    capital: bool,
) -> String {
    format!(
        "<div class=\"infowindow\"><span style=\"font-weight:bold\">{header}</span>\
         <br/>Mayor<br/><span>{mayor}</span>\
         <br/>Members<br/><span>{residents}</span>\
         <br/>Flags<br/>hasUpkeep: true\
         <br/>{pvp_line}\
         <br/>mobs: {mobs}\
         <br/>public: true\
         <br/>explosion: {explosions}\
         <br/>fire: {fire}\
         <br/>capital: {capital}"
    )
}

/// A full 13-segment town description.
pub(crate) fn town_desc(header: &str, mayor: &str, residents: &str, flags: TownFlags) -> String {
    desc_segments(
        header,
        mayor,
        residents,
        &format!("pvp: {}", flags.pvp),
        flags.mobs,
        flags.explosions,
        flags.fire,
        flags.capital,
    )
}

/// Like `town_desc` but with the pvp segment given verbatim, for testing the
/// exact-match flag contract.
pub(crate) fn town_desc_with_flag_line(
    header: &str,
    mayor: &str,
    residents: &str,
    pvp_line: &str,
) -> String {
    desc_segments(header, mayor, residents, pvp_line, false, false, false, false)
}

fn area(label: &str, colour: &str, xs: &[f64], zs: &[f64], desc: &str) -> Value {
    json!({
        "label": label,
        "fillcolor": colour,
        "x": xs,
        "z": zs,
        "desc": desc,
    })
}

fn marker_doc(areas: &[(&str, Value)]) -> String {
    let map: serde_json::Map<String, Value> = areas
        .iter()
        .map(|(key, value)| ((*key).to_owned(), value.clone()))
        .collect();
    json!({"sets": {"townyPlugin.markerset": {"areas": map}}}).to_string()
}

fn player_doc(players: &[(&str, f64, f64, f64)]) -> String {
    let list: Vec<Value> = players
        .iter()
        .map(|(account, x, y, z)| json!({"account": account, "x": x, "y": y, "z": z}))
        .collect();
    json!({ "players": list }).to_string()
}

fn square(x0: f64, z0: f64, size: f64) -> (Vec<f64>, Vec<f64>) {
    (
        vec![x0, x0 + size, x0 + size, x0],
        vec![z0, z0, z0 + size, z0 + size],
    )
}

/// Four towns, one nation, three online players.
///
/// - London: capital of Britain, mayor Steve, one chunk at the origin, plus a
///   `__1` outpost area that must be ignored
/// - York: Britain, mayor Alice, two chunks
/// - Ruinstone: nationless single-NPC ruin
/// - Freetown: nationless, two residents, ruin-like flags but lived in
fn world(london_capital: bool, york_capital: bool) -> Snapshot {
    let (london_x, london_z) = square(0.0, 0.0, 16.0);
    let (outpost_x, outpost_z) = square(500.0, 500.0, 16.0);
    let (york_x, york_z) = (
        vec![100.0, 132.0, 132.0, 100.0],
        vec![200.0, 200.0, 216.0, 216.0],
    );
    let (ruin_x, ruin_z) = square(-32.0, -32.0, 16.0);
    let (free_x, free_z) = square(48.0, 48.0, 16.0);

    let ruin_flags = TownFlags {
        pvp: true,
        mobs: true,
        explosions: true,
        fire: true,
        capital: false,
    };

    let town_json = marker_doc(&[
        (
            "London__0",
            area(
                "London",
                "#0000ff",
                &london_x,
                &london_z,
                &town_desc(
                    "London (Britain)",
                    "Steve",
                    "Steve, Alex",
                    TownFlags {
                        capital: london_capital,
                        ..FLAGS_OFF
                    },
                ),
            ),
        ),
        (
            "London__1",
            area("London", "#0000ff", &outpost_x, &outpost_z, "outpost"),
        ),
        (
            "York__0",
            area(
                "York",
                "#0000ff",
                &york_x,
                &york_z,
                &town_desc(
                    "York (Britain)",
                    "Alice",
                    "Alice",
                    TownFlags {
                        pvp: true,
                        fire: true,
                        capital: york_capital,
                        ..FLAGS_OFF
                    },
                ),
            ),
        ),
        (
            "Ruinstone__0",
            area(
                "Ruinstone",
                "#ff0000",
                &ruin_x,
                &ruin_z,
                &town_desc("Ruinstone ()", "NPC7", "NPC7", ruin_flags),
            ),
        ),
        (
            "Freetown__0",
            area(
                "Freetown",
                "#00ff00",
                &free_x,
                &free_z,
                &town_desc("Freetown ()", "Bob", "Bob, Carol", ruin_flags),
            ),
        ),
    ]);
    let player_json = player_doc(&[
        ("Steve", 100.9, 64.0, -50.2),
        ("Alex", 0.0, 64.0, 0.0),
        ("Wanderer", 5.5, 70.2, 5.5),
    ]);
    Snapshot::from_documents(&town_json, &player_json).expect("fixture snapshot must parse")
}

pub(crate) fn snapshot() -> Snapshot {
    world(true, false)
}

pub(crate) fn snapshot_without_capital() -> Snapshot {
    world(false, false)
}

pub(crate) fn snapshot_with_two_capitals() -> Snapshot {
    world(true, true)
}

pub(crate) fn snapshot_with_town_vertices(xs: &[f64], zs: &[f64]) -> Result<Snapshot> {
    let town_json = marker_doc(&[(
        "Odd__0",
        area(
            "Odd",
            "#ffffff",
            xs,
            zs,
            &town_desc("Odd ()", "Bob", "Bob", FLAGS_OFF),
        ),
    )]);
    Snapshot::from_documents(&town_json, &player_doc(&[]))
}
