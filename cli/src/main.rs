use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kakera_core::grid::border_outline;
use kakera_core::{
    compute_dimensions, compute_geometry, GameRules, ImageDescriptor, LevelCatalog,
    ProgressionGate, SessionController, DEFAULT_LEVEL_SLUG, SNAP_DISTANCE_RATIO,
};

mod bot;
mod config;

#[derive(Parser)]
#[command(name = "kakera", version, about = "Headless tools for the kakera jigsaw engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in levels and which ones are unlocked.
    Levels {
        #[arg(long, default_value_t = 0)]
        beaten: usize,
    },
    /// Print the grid a source image would be cut into.
    Layout {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        #[arg(long, default_value_t = kakera_core::DIFFICULTY_DEFAULT)]
        difficulty: u32,
    },
    Bot {
        #[command(subcommand)]
        command: bot::BotCommand,
    },
}

#[derive(clap::Args)]
struct RulesArgs {
    #[arg(long, env = "KAKERA_RULES")]
    rules: Option<PathBuf>,
    #[arg(long)]
    difficulty: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
}

impl RulesArgs {
    fn resolve(&self) -> Result<GameRules, Box<dyn std::error::Error>> {
        let mut rules = config::load_rules(self.rules.as_deref())?;
        if let Some(difficulty) = self.difficulty {
            rules.difficulty = difficulty;
        }
        if self.seed.is_some() {
            rules.seed = self.seed;
        }
        rules.validate()?;
        Ok(rules)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Levels { beaten } => {
            let catalog = LevelCatalog::builtin();
            let gate = ProgressionGate::with_levels_beaten(catalog.len(), beaten);
            let controller = SessionController::with_gate(catalog, GameRules::default(), gate);
            for slot in controller.level_slots() {
                let entry = &controller.catalog().entries()[slot.index];
                let marker = if slot.playable { "open" } else { "locked" };
                let default = if entry.slug == DEFAULT_LEVEL_SLUG { " (default)" } else { "" };
                println!(
                    "{:>2}  [{marker:<6}] {} {}x{}  {}{default}",
                    slot.index, entry.slug, entry.image.width, entry.image.height, slot.label
                );
            }
        }
        Commands::Layout {
            width,
            height,
            difficulty,
        } => {
            let image = ImageDescriptor::new(width, height);
            let dims = compute_dimensions(image, difficulty)?;
            let geometry = compute_geometry(image, dims);
            let border = border_outline(dims, geometry);
            println!("grid: {}x{} ({} pieces)", dims.cols, dims.rows, dims.total());
            println!(
                "piece: {:.5} x {:.5}",
                geometry.piece_width, geometry.piece_height
            );
            println!(
                "snap distance: {:.5}",
                geometry.piece_width * SNAP_DISTANCE_RATIO
            );
            println!("border: {:?}", border);
        }
        Commands::Bot { command } => bot::run(command)?,
    }

    Ok(())
}
