//! Scratch binary: fetch a world and print what lives in it.
//!
//! `mapinfo [nova|aurora] [town]`

use anyhow::Context;
use strum::IntoEnumIterator;

use earthmap::{fetch_snapshot, Nation, Resident, Server, Town};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let world = args.next().unwrap_or_else(|| String::from("aurora"));
    let server = Server::iter()
        .find(|server| server.id() == world)
        .with_context(|| {
            let known: Vec<&str> = Server::iter().map(Server::id).collect();
            format!("unknown world {world:?}, expected one of {}", known.join(", "))
        })?;

    let snapshot = fetch_snapshot(server)?;
    println!(
        "{server}: {} towns, {} players online",
        snapshot.town_count(),
        snapshot.online_count()
    );

    if let Some(name) = args.next() {
        let town = Town::build(&name, &snapshot)?;
        println!("{}", town.summary());
        println!("map: {}", server.map_link(town.position.0, town.position.1, 6));
        if let Some(nation) = &town.nation {
            let nation = Nation::build(nation, &snapshot)?;
            println!();
            println!("{}", nation.summary());
        }
    } else {
        for nation in Nation::all(&snapshot)? {
            println!(
                "{nation}: {} towns, {} citizens, area {}",
                nation.towns.len(),
                nation.citizens.len(),
                nation.area
            );
        }
        let online = Resident::all_online(&snapshot);
        let hidden = online.iter().filter(|person| person.hidden).count();
        println!("{} online, {hidden} of them hidden", online.len());
    }
    Ok(())
}
