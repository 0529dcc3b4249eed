//! End to end checks over the public API, from raw documents to entities.

use serde_json::json;

use earthmap::{Error, Nation, Resident, Snapshot, Town};

fn desc(header: &str, mayor: &str, residents: &str, flags: [bool; 5]) -> String {
    let [pvp, mobs, explosions, fire, capital] = flags;
    format!(
        "<div class=\"infowindow\"><span style=\"font-weight:bold\">{header}</span>\
         <br/>Mayor<br/><span>{mayor}</span>\
         <br/>Members<br/><span>{residents}</span>\
         <br/>Flags<br/>hasUpkeep: true\
         <br/>pvp: {pvp}\
         <br/>mobs: {mobs}\
         <br/>public: true\
         <br/>explosion: {explosions}\
         <br/>fire: {fire}\
         <br/>capital: {capital}"
    )
}

const OPEN: [bool; 5] = [true, true, true, true, false];

/// Two nations plus a nationless ruin; three players online.
fn snapshot() -> Snapshot {
    let town_json = json!({
        "sets": {
            "townyPlugin.markerset": {
                "areas": {
                    "Alexandria__0": {
                        "label": "Alexandria",
                        "fillcolor": "#aa00aa",
                        "x": [-48.0, -16.0, -16.0, -48.0],
                        "z": [0.0, 0.0, 16.0, 16.0],
                        "desc": desc("Alexandria (Egypt)", "Cleo", "Cleo, Ptolemy",
                                     [false, false, false, false, true]),
                    },
                    "Cairo__0": {
                        "label": "Cairo",
                        "fillcolor": "#aa00aa",
                        "x": [64.0, 80.0, 80.0, 64.0],
                        "z": [64.0, 64.0, 80.0, 80.0],
                        "desc": desc("Cairo (Egypt)", "Imhotep", "Imhotep",
                                     [true, false, false, false, false]),
                    },
                    "London__0": {
                        "label": "London",
                        "fillcolor": "#0000ff",
                        "x": [0.0, 16.0, 16.0, 0.0],
                        "z": [0.0, 0.0, 16.0, 16.0],
                        "desc": desc("London (Britain)", "Steve", "Steve, Alex",
                                     [false, false, false, false, true]),
                    },
                    "Oldhold__0": {
                        "label": "Oldhold",
                        "fillcolor": "#ff0000",
                        "x": [-100.0, -84.0, -84.0, -100.0],
                        "z": [-100.0, -100.0, -84.0, -84.0],
                        "desc": desc("Oldhold ()", "NPC42", "NPC42", OPEN),
                    },
                }
            }
        }
    })
    .to_string();
    let player_json = json!({
        "players": [
            {"account": "Steve", "x": 7.3, "y": 64.0, "z": 9.9},
            {"account": "Cleo", "x": -30.0, "y": 70.0, "z": 8.0},
            {"account": "Ghost", "x": 0.0, "y": 64.0, "z": 0.0},
        ]
    })
    .to_string();
    Snapshot::from_documents(&town_json, &player_json).expect("fixture must parse")
}

#[test]
fn every_mayor_is_a_resident_of_their_town() {
    let snapshot = snapshot();
    for town in Town::all(&snapshot) {
        assert!(
            town.residents
                .iter()
                .any(|person| person.name == town.mayor.name),
            "mayor of {town} not in its resident list"
        );
    }
}

#[test]
fn every_capital_is_a_flagged_member_town() {
    let snapshot = snapshot();
    for nation in Nation::all(&snapshot).unwrap() {
        assert!(nation
            .towns
            .iter()
            .any(|town| town.name == nation.capital.name));
        assert!(nation.capital.flags.capital);
    }
}

#[test]
fn nation_names_round_trip_through_build() {
    let snapshot = snapshot();
    let nations = Nation::all(&snapshot).unwrap();
    let names: Vec<&str> = nations.iter().map(|nation| nation.name.as_str()).collect();
    assert_eq!(names, vec!["Britain", "Egypt"]);
    for name in names {
        assert_eq!(Nation::build(name, &snapshot).unwrap().name, name);
    }
}

#[test]
fn nation_aggregates_come_from_its_towns() {
    let snapshot = snapshot();
    let egypt = Nation::build("Egypt", &snapshot).unwrap();
    assert_eq!(egypt.capital.name, "Alexandria");
    assert_eq!(egypt.leader.name, "Cleo");
    assert_eq!(egypt.colour, "#aa00aa");
    // one two-chunk town and one one-chunk town
    assert_eq!(egypt.area, 3);
    let citizens: Vec<&str> = egypt
        .citizens
        .iter()
        .map(|person| person.name.as_str())
        .collect();
    assert_eq!(citizens, vec!["Cleo", "Imhotep", "Ptolemy"]);
}

#[test]
fn missing_nations_raise_not_found() {
    let snapshot = snapshot();
    assert!(matches!(
        Nation::build("", &snapshot),
        Err(Error::NationNotFound(_))
    ));
    assert!(matches!(
        Nation::build("NoSuchNation", &snapshot),
        Err(Error::NationNotFound(_))
    ));
}

#[test]
fn missing_towns_raise_not_found() {
    let snapshot = snapshot();
    assert!(matches!(
        Town::build("atlantis", &snapshot),
        Err(Error::TownNotFound(_))
    ));
}

#[test]
fn town_keys_are_case_insensitive() {
    let snapshot = snapshot();
    assert_eq!(Town::build("CAIRO", &snapshot).unwrap().name, "Cairo");
}

#[test]
fn ruins_are_single_npc_towns_with_open_flags() {
    let snapshot = snapshot();
    let oldhold = Town::build("oldhold", &snapshot).unwrap();
    assert!(oldhold.ruins);
    // cairo has open pvp but a player mayor
    let cairo = Town::build("cairo", &snapshot).unwrap();
    assert!(!cairo.ruins);
}

#[test]
fn online_presence_matches_the_player_feed() {
    let snapshot = snapshot();

    let steve = Resident::build("Steve", &snapshot);
    assert!(steve.online);
    assert_eq!(steve.position, Some((7, 64, 9)));
    assert!(!steve.hidden);

    let ghost = Resident::build("Ghost", &snapshot);
    assert!(ghost.online && ghost.hidden);
    assert_eq!(ghost.position, Some((0, 64, 0)));

    let ptolemy = Resident::build("Ptolemy", &snapshot);
    assert!(!ptolemy.online && ptolemy.hidden);
    assert_eq!(ptolemy.position, None);
    assert_eq!(ptolemy.nation.as_deref(), Some("Egypt"));
}

#[test]
fn npc_detection_follows_the_name_pattern() {
    let snapshot = snapshot();
    assert!(Resident::build("NPC123", &snapshot).npc);
    assert!(!Resident::build("NPC12a", &snapshot).npc);
    assert!(!Resident::build("Steve", &snapshot).npc);
}

#[test]
fn bulk_enumeration_is_consistent() {
    let snapshot = snapshot();
    assert_eq!(Town::all(&snapshot).len(), snapshot.town_count());
    assert_eq!(Resident::all(&snapshot).len(), 6);
    assert_eq!(Resident::all_online(&snapshot).len(), snapshot.online_count());
}
