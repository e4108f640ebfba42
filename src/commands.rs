use std::io::Write;
use std::path::PathBuf;

use raidbook_core::{
    AppConfigExt, Difficulty, MergeError, MergedRaid, RaidEntry, ToggleSnapshot, load_catalog,
    sections,
};

use crate::context::{CliContext, Session};

const NO_SESSION: &str = "no catalog loaded, run `load` first";

fn on_off(active: bool) -> &'static str {
    if active { "on" } else { "off" }
}

pub async fn load(path: Option<&str>, ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await.clone();
    let path = PathBuf::from(path.unwrap_or(&config.catalog_path));

    let catalog = load_catalog(&path).map_err(|e| describe(&e))?;
    let mut session = Session::new(path, catalog, &config).map_err(|e| e.to_string())?;

    // Unreadable toggles fall back to catalog defaults
    let overrides_file = config.overrides_file();
    let snapshot = ToggleSnapshot::load(&overrides_file).unwrap_or_else(|e| {
        tracing::warn!(error = %describe(&e), "Ignoring saved raid toggles");
        ToggleSnapshot::new()
    });
    let restored = snapshot.reapply(&mut session.overrides);

    println!(
        "loaded {} slots in {} raids from {} ({} saved toggles restored)",
        session.catalog.len(),
        session.merged.len(),
        session.catalog_path.display(),
        restored
    );
    ctx.set_session(session).await;
    Ok(())
}

pub async fn list(era: Option<&str>, ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    let guard = ctx.session().read().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;

    for section in sections(&session.merged, &config.era_order) {
        if era.is_some_and(|e| e != section.version) {
            continue;
        }
        println!("== {} ==", section.version);
        for raid in section.raids {
            let marker = if raid.all_disabled(&session.overrides) { " (disabled)" } else { "" };
            let slots: Vec<String> = raid
                .by_player_count()
                .into_iter()
                .map(|entry| {
                    let key = entry.key();
                    let label = raid.label(&key, &config.difficulty_labels);
                    let active = session.overrides.is_active_or(entry);
                    format!("[{label} {}]", on_off(active))
                })
                .collect();
            println!("  {} Lv{}{}  {}", raid.name(), raid.level(), marker, slots.join(" "));
        }
    }
    Ok(())
}

pub async fn eras(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    let guard = ctx.session().read().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;

    for section in sections(&session.merged, &config.era_order) {
        let slots: usize = section.raids.iter().map(|r| r.raids().len()).sum();
        println!("{}: {} raids, {} slots", section.version, section.raids.len(), slots);
    }
    Ok(())
}

/// Criteria for picking one slot out of the catalog
pub struct SlotQuery<'a> {
    pub name: &'a str,
    pub players: u8,
    pub difficulty: &'a str,
    pub level: Option<u32>,
    pub version: Option<&'a str>,
}

fn find_slot<'a>(session: &'a Session, query: &SlotQuery<'_>) -> Result<&'a RaidEntry, String> {
    let difficulty = Difficulty::from_label(query.difficulty)
        .ok_or_else(|| format!("unknown difficulty '{}'", query.difficulty))?;

    let matches: Vec<&RaidEntry> = session
        .catalog
        .iter()
        .filter(|e| {
            e.name == query.name
                && e.player_count == query.players
                && e.difficulty == difficulty
                && query.level.is_none_or(|l| e.level == l)
                && query.version.is_none_or(|v| e.version == v)
        })
        .collect();

    match matches.as_slice() {
        [] => Err(format!(
            "no raid slot {}人{} {}",
            query.players,
            difficulty.native_label(),
            query.name
        )),
        [entry] => Ok(*entry),
        _ => Err(format!(
            "{} slots match '{}', narrow it down with --version or --level",
            matches.len(),
            query.name
        )),
    }
}

pub async fn toggle(query: SlotQuery<'_>, ctx: &CliContext) -> Result<(), String> {
    let mut guard = ctx.session().write().await;
    let session = guard.as_mut().ok_or(NO_SESSION)?;

    let entry = find_slot(session, &query)?.clone();
    let key = entry.key();
    match session.overrides.toggle(&key) {
        Ok(active) => println!("{key}: {}", on_off(active)),
        // Stale slot: report the catalog default instead of failing
        Err(MergeError::UnknownKey { .. }) => println!(
            "{key} is not tracked; catalog default is {}",
            on_off(entry.base_active)
        ),
        Err(e) => return Err(e.to_string()),
    }
    Ok(())
}

pub async fn toggle_raid(
    name: &str,
    level: Option<u32>,
    version: Option<&str>,
    ctx: &CliContext,
) -> Result<(), String> {
    let mut guard = ctx.session().write().await;
    let session = guard.as_mut().ok_or(NO_SESSION)?;

    let index = find_raid(&session.merged, name, level, version)?;

    let raid = &session.merged[index];
    let active = session
        .overrides
        .toggle_raid(raid)
        .map_err(|e| e.to_string())?;
    println!(
        "{}: all difficulties {}",
        raid.id(),
        if active { "enabled" } else { "disabled" }
    );
    Ok(())
}

fn find_raid(
    merged: &[MergedRaid],
    name: &str,
    level: Option<u32>,
    version: Option<&str>,
) -> Result<usize, String> {
    let candidates: Vec<usize> = merged
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.name() == name
                && level.is_none_or(|l| r.level() == l)
                && version.is_none_or(|v| r.version() == v)
        })
        .map(|(i, _)| i)
        .collect();

    match candidates.as_slice() {
        [] => Err(format!("no raid named '{name}'")),
        [index] => Ok(*index),
        _ => Err(format!(
            "{} raids named '{name}', narrow it down with --level or --version",
            candidates.len()
        )),
    }
}

pub async fn changes(ctx: &CliContext) -> Result<(), String> {
    let guard = ctx.session().read().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;

    let snapshot = ToggleSnapshot::capture(&session.overrides);
    if snapshot.is_empty() {
        println!("no manual toggles");
    }
    for record in &snapshot.toggles {
        println!("{}: {}", record.key(), on_off(record.active));
    }
    Ok(())
}

pub async fn save(ctx: &CliContext) -> Result<(), String> {
    let path = ctx.config.read().await.overrides_file();
    let guard = ctx.session().read().await;
    let session = guard.as_ref().ok_or(NO_SESSION)?;

    let snapshot = ToggleSnapshot::capture(&session.overrides);
    snapshot
        .save(&path)
        .map_err(|e| describe(&e))?;
    println!("saved {} toggles to {}", snapshot.len(), path.display());
    Ok(())
}

pub async fn show_config(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    println!("catalog: {}", config.catalog_path);
    println!("overrides: {}", config.overrides_file().display());
    println!("era order: {}", config.era_order.join(", "));
    Ok(())
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").ok();
    std::io::stdout().flush().ok();
}

/// Error message followed by its source chain
fn describe(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(e) = source {
        parts.push(e.to_string());
        source = e.source();
    }
    parts.join(": ")
}
