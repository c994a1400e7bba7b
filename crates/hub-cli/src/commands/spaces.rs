use anyhow::{Result, anyhow};
use chrono::{DateTime, Local};
use hub_core::catalog::{MapCatalog, SpaceCatalog};
use hub_infrastructure::HubRuntime;

pub async fn maps(runtime: &HubRuntime, tag: Option<&str>) -> Result<()> {
    let maps = match tag {
        Some(tag) => runtime.catalog.maps_with_tag(tag).await?,
        None => runtime.catalog.get_maps().await?,
    };
    for map in maps {
        println!("{:<4} {:<30} [{}]", map.id, map.name, map.tags.join(", "));
    }
    Ok(())
}

pub async fn spaces(runtime: &HubRuntime, term: &str, public_only: bool) -> Result<()> {
    let spaces: Vec<_> = if public_only {
        runtime
            .catalog
            .public_spaces()
            .await?
            .into_iter()
            .filter(|s| s.matches(term))
            .collect()
    } else {
        runtime.catalog.search_spaces(term).await?
    };
    for space in &spaces {
        println!(
            "{:<4} {:<28} capacity {:<5} {}",
            space.id,
            space.name,
            space.participant_count,
            if space.is_public { "public" } else { "private" }
        );
    }
    Ok(())
}

pub async fn enter(runtime: &HubRuntime, space_id: &str) -> Result<()> {
    let space = runtime
        .catalog
        .get_space_by_id(space_id)
        .await?
        .ok_or_else(|| anyhow!("Space '{}' not found", space_id))?;

    let room = runtime.manager.add_active_room(&space).await;
    println!(
        "Entered {} ({} active players)",
        room.space_name, room.current_players
    );
    Ok(())
}

pub async fn rooms(runtime: &HubRuntime) {
    let rooms = runtime.manager.active_rooms().await;
    if rooms.is_empty() {
        println!("No active rooms. Join a space to see it appear here.");
    }
    for room in rooms {
        let when = DateTime::from_timestamp_millis(room.last_activity)
            .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!(
            "{:<4} {:<28} {:>3} players  {}",
            room.space_id, room.space_name, room.current_players, when
        );
    }
}
