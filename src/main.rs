use clap::{Parser, Subcommand};
use raidbook::commands::{self, SlotQuery};
use raidbook::{CliContext, logging, readline};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), String> {
    logging::init();
    let ctx = CliContext::new();

    // Load the configured catalog up front; the shell stays usable if it fails
    if let Err(err) = commands::load(None, &ctx).await {
        eprintln!("{err}");
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "raid catalog shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog file (defaults to the configured one)
    Load {
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Show raids grouped by era
    List {
        #[arg(short, long)]
        era: Option<String>,
    },
    Eras,
    /// Flip one difficulty slot
    Toggle {
        name: String,
        players: u8,
        difficulty: String,
        #[arg(short, long)]
        level: Option<u32>,
        #[arg(short, long)]
        version: Option<String>,
    },
    /// Enable or disable every difficulty of a raid
    ToggleRaid {
        name: String,
        #[arg(short, long)]
        level: Option<u32>,
        #[arg(short, long)]
        version: Option<String>,
    },
    /// Show slots that differ from the catalog defaults
    Changes,
    /// Persist manual toggles
    Save,
    /// Show the active configuration
    Config,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "raidbook".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { path }) => commands::load(path.as_deref(), ctx).await?,
        Some(Commands::List { era }) => commands::list(era.as_deref(), ctx).await?,
        Some(Commands::Eras) => commands::eras(ctx).await?,
        Some(Commands::Toggle {
            name,
            players,
            difficulty,
            level,
            version,
        }) => {
            let query = SlotQuery {
                name,
                players: *players,
                difficulty,
                level: *level,
                version: version.as_deref(),
            };
            commands::toggle(query, ctx).await?
        }
        Some(Commands::ToggleRaid {
            name,
            level,
            version,
        }) => commands::toggle_raid(name, *level, version.as_deref(), ctx).await?,
        Some(Commands::Changes) => commands::changes(ctx).await?,
        Some(Commands::Save) => commands::save(ctx).await?,
        Some(Commands::Config) => commands::show_config(ctx).await?,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
