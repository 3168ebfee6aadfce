use super::*;

use kakera_core::{DropOutcome, InputBatch, PieceId, PlayArea, SessionHost, SessionPhase};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(clap::Subcommand)]
pub(super) enum BotCommand {
    /// Solve levels through the pointer interface, one tick at a time.
    Run {
        #[command(flatten)]
        rules: RulesArgs,
        #[arg(long, default_value = DEFAULT_LEVEL_SLUG)]
        level: String,
        #[arg(long, default_value_t = 1)]
        levels: usize,
        #[arg(long, default_value_t = 0)]
        beaten: usize,
        #[arg(long, default_value_t = 0.15)]
        miss_rate: f32,
        #[arg(long, default_value_t = 6)]
        drag_steps: u32,
        #[arg(long, default_value_t = 100_000)]
        max_ticks: u64,
        #[arg(long, default_value_t = 6.0)]
        view_width: f32,
        #[arg(long, default_value_t = 4.0)]
        view_height: f32,
    },
}

pub(super) fn run(command: BotCommand) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        BotCommand::Run {
            rules,
            level,
            levels,
            beaten,
            miss_rate,
            drag_steps,
            max_ticks,
            view_width,
            view_height,
        } => {
            let rules = rules.resolve()?;
            let config = BotRunConfig {
                miss_rate,
                drag_steps,
                max_ticks,
            };
            validate_bot_config(config)?;
            let catalog = LevelCatalog::builtin();
            let start = resolve_level(&catalog, &level)?;
            let gate = ProgressionGate::with_levels_beaten(catalog.len(), beaten);
            let mut controller = SessionController::with_gate(catalog, rules, gate);
            let mut host = ConsoleHost::new(PlayArea::new(view_width, view_height));
            let seed = rules.seed.unwrap_or_else(|| rand::rng().random());
            let mut rng = StdRng::seed_from_u64(seed ^ 0xB07_5EED);

            controller.open(&mut host);
            for index in level_indices(start, levels) {
                if index >= controller.catalog().len() {
                    warn!("no level {index}; stopping");
                    break;
                }
                controller.start_level(index, &mut host)?;
                let grid = controller
                    .session()
                    .dimensions()
                    .map(|dims| format!("{}x{}", dims.cols, dims.rows))
                    .unwrap_or_default();
                let report = play_level(&mut controller, &mut host, &mut rng, config)?;
                println!(
                    "level {index} ({grid}, difficulty {}): {} pieces in {} ticks, {} drags, {} misses",
                    controller.rules().difficulty,
                    report.locks,
                    report.ticks,
                    report.drags,
                    report.misses
                );
                controller.restart(&mut host);
            }
            println!(
                "levels beaten: {}/{}",
                controller.gate().levels_beaten(),
                controller.gate().total_levels()
            );
            Ok(())
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct BotRunConfig {
    miss_rate: f32,
    drag_steps: u32,
    max_ticks: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct BotReport {
    ticks: u64,
    drags: u64,
    misses: u64,
    locks: u64,
}

struct ConsoleHost {
    play_area: PlayArea,
    snaps: u64,
    completions: u64,
}

impl ConsoleHost {
    fn new(play_area: PlayArea) -> Self {
        Self {
            play_area,
            snaps: 0,
            completions: 0,
        }
    }
}

impl SessionHost for ConsoleHost {
    fn visible_play_area(&self) -> PlayArea {
        self.play_area
    }

    fn play_snap_sound(&mut self) {
        self.snaps += 1;
        debug!("snap");
    }

    fn show_completion(&mut self) {
        self.completions += 1;
        info!("puzzle complete, play again?");
    }

    fn show_level_select(&mut self) {
        debug!("level select shown");
    }

    fn hide_level_select(&mut self) {
        debug!("level select hidden");
    }
}

fn validate_bot_config(config: BotRunConfig) -> Result<(), Box<dyn std::error::Error>> {
    if !(0.0..1.0).contains(&config.miss_rate) {
        return Err(format!("miss rate {} must be in [0, 1)", config.miss_rate).into());
    }
    if config.drag_steps == 0 {
        return Err("drag steps must be at least 1".into());
    }
    if config.max_ticks == 0 {
        return Err("max ticks must be at least 1".into());
    }
    Ok(())
}

fn resolve_level(catalog: &LevelCatalog, raw: &str) -> Result<usize, Box<dyn std::error::Error>> {
    if let Ok(index) = raw.trim().parse::<usize>() {
        if index < catalog.len() {
            return Ok(index);
        }
    }
    catalog.index_of_slug(raw).ok_or_else(|| {
        let slugs: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.slug.as_str())
            .collect();
        format!("unknown level: {raw} (available: {})", slugs.join(", ")).into()
    })
}

/// At least one level; a huge `--levels` runs to the end of the catalog.
fn level_indices(start: usize, levels: usize) -> std::ops::Range<usize> {
    start..start.saturating_add(levels.max(1))
}

fn choose_piece(controller: &SessionController, rng: &mut StdRng) -> Option<PieceId> {
    let candidates: Vec<PieceId> = controller
        .session()
        .pieces()
        .iter()
        .filter(|piece| !piece.locked)
        .map(|piece| piece.id)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

fn miss_offset(rng: &mut StdRng, threshold: f32) -> (f32, f32) {
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    let distance = threshold * rng.random_range(1.5f32..3.0);
    let (sin, cos) = angle.sin_cos();
    (cos * distance, sin * distance)
}

fn lerp_point(a: (f32, f32), b: (f32, f32), t: f32) -> (f32, f32) {
    (a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t)
}

fn play_level<H: SessionHost>(
    controller: &mut SessionController,
    host: &mut H,
    rng: &mut StdRng,
    config: BotRunConfig,
) -> Result<BotReport, Box<dyn std::error::Error>> {
    let mut report = BotReport::default();
    let threshold = controller
        .session()
        .snap_threshold()
        .ok_or("no puzzle in progress")?;

    while controller.session().phase() == SessionPhase::Playing {
        if report.ticks >= config.max_ticks {
            return Err(format!("bot gave up after {} ticks", report.ticks).into());
        }
        let Some(pick) = choose_piece(controller, rng) else {
            break;
        };
        let grab = controller
            .session()
            .piece(pick)
            .map(|piece| piece.position)
            .ok_or("picked piece vanished")?;
        controller.tick(&InputBatch::press(grab), host);
        report.ticks += 1;
        let Some(grabbed) = controller.session().dragging() else {
            continue;
        };
        report.drags += 1;

        let target = controller
            .session()
            .piece(grabbed)
            .map(|piece| piece.target)
            .ok_or("grabbed piece vanished")?;
        let aim = if rng.random::<f32>() < config.miss_rate {
            let (dx, dy) = miss_offset(rng, threshold);
            (target.0 + dx, target.1 + dy)
        } else {
            target
        };
        for step in 1..config.drag_steps {
            let t = step as f32 / config.drag_steps as f32;
            controller.tick(&InputBatch::hover(lerp_point(grab, aim, t)), host);
            report.ticks += 1;
        }
        match controller.tick(&InputBatch::release(aim), host) {
            DropOutcome::Locked { .. } | DropOutcome::Completed { .. } => report.locks += 1,
            DropOutcome::Missed { piece_id } => {
                debug!("missed piece {piece_id}");
                report.misses += 1;
            }
            DropOutcome::NoDrag => {}
        }
        report.ticks += 1;
    }
    Ok(report)
}
