//! Headless demo: generate a chunk grid from `data/config.txt` and
//! `data/biomes.txt`, log a biome summary, and optionally keep watching the
//! files to hot-reload the world in place.
//!
//! Run with `cargo run -p loam-demo`, or
//! `cargo run -p loam-demo -- --watch` to regenerate on config edits.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use loam_config::{ConfigError, ConfigSheet, ParseOptions};
use loam_registry::{Registry, RegistryError};
use loam_worldgen::{ChunkPipeline, World, WorldGenError};
use tracing::{error, info, warn};

/// Loam world generator demo.
#[derive(Parser, Debug)]
#[command(name = "loam", about = "Loam tiled-world generator demo")]
struct CliArgs {
    /// Directory holding `config.txt` and `biomes.txt`.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Horizontal chunk count (overrides `chunks_horizontal`).
    #[arg(long)]
    chunks_x: Option<usize>,

    /// Vertical chunk count (overrides `chunks_vertical`).
    #[arg(long)]
    chunks_y: Option<usize>,

    /// Keep running and hot-reload the config on changes.
    #[arg(long)]
    watch: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    WorldGen(#[from] WorldGenError),
}

struct App {
    args: CliArgs,
    sheet: ConfigSheet,
    pipeline: ChunkPipeline,
    registry: Registry,
    world: World,
}

impl App {
    fn config_path(&self) -> PathBuf {
        self.args.data_dir.join("config.txt")
    }

    fn new(args: CliArgs) -> Result<Self, DemoError> {
        let sheet = ConfigSheet::load(&args.data_dir.join("config.txt"))?;
        let pipeline = ChunkPipeline::from_sheet(&sheet)?;
        let registry = load_registry(&args.data_dir)?;

        let (chunks_x, chunks_y) = grid_shape(&args, &sheet)?;
        let world = World::generate(&pipeline, &registry, chunks_x, chunks_y);

        let app = Self {
            args,
            sheet,
            pipeline,
            registry,
            world,
        };
        app.log_summary();
        Ok(app)
    }

    /// Applies a changed config sheet, all or nothing: the pipeline, the
    /// registry, and the chunks keep their previous state unless every
    /// piece of the reload succeeds.
    fn apply_sheet(&mut self, sheet: ConfigSheet) -> Result<(), DemoError> {
        let pipeline = ChunkPipeline::from_sheet(&sheet)?;
        let registry = load_registry(&self.args.data_dir)?;
        let (chunks_x, chunks_y) = grid_shape(&self.args, &sheet)?;

        self.sheet = sheet;
        self.pipeline = pipeline;
        self.registry = registry;
        self.world
            .regenerate(&self.pipeline, &self.registry, chunks_x, chunks_y);
        self.log_summary();
        Ok(())
    }

    fn watch(&mut self) {
        let interval = self
            .sheet
            .try_get("reload_interval")
            .map_or(1, |v| v.parse_or(1u64));
        info!(interval_s = interval, "watching for config changes");

        loop {
            std::thread::sleep(Duration::from_secs(interval));
            match self.sheet.reload(&self.config_path()) {
                Ok(None) => {}
                Ok(Some(new_sheet)) => {
                    info!("applying new config since configuration changed");
                    if let Err(err) = self.apply_sheet(new_sheet) {
                        error!(%err, "reload failed, keeping previous world");
                    }
                }
                Err(err) => warn!(%err, "could not re-read config"),
            }
        }
    }

    fn log_summary(&self) {
        let biomes = self.registry.biomes();
        let mut counts = vec![0usize; biomes.len()];
        let mut unclassified = 0usize;

        for chunk in self.world.chunks() {
            for biome in &chunk.biome {
                match biome {
                    Some(id) => counts[id.0 as usize] += 1,
                    None => unclassified += 1,
                }
            }
        }

        let (chunks_x, chunks_y) = self.world.dimensions();
        info!(chunks_x, chunks_y, "world generated");
        for (idx, def) in biomes.iter().enumerate() {
            info!(biome = %def.string_id, name = %def.name, cells = counts[idx], "biome coverage");
        }
        if unclassified > 0 {
            info!(cells = unclassified, "unclassified coverage");
        }
    }
}

fn grid_shape(args: &CliArgs, sheet: &ConfigSheet) -> Result<(usize, usize), DemoError> {
    let x = match args.chunks_x {
        Some(x) => x,
        None => sheet.get("chunks_horizontal")?.parse()?,
    };
    let y = match args.chunks_y {
        Some(y) => y,
        None => sheet.get("chunks_vertical")?.parse()?,
    };
    Ok((x, y))
}

fn load_registry(data_dir: &Path) -> Result<Registry, DemoError> {
    // Hex colors use `#`, so biome data only treats `;` as a comment.
    let options = ParseOptions {
        comment_chars: ";".to_string(),
    };
    let sheet = ConfigSheet::load_with(&data_dir.join("biomes.txt"), &options)?;
    let mut registry = Registry::new();
    registry.load(&sheet)?;
    Ok(registry)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    loam_log::init_logging(args.log_level.as_deref());

    let watch = args.watch;
    match App::new(args) {
        Ok(mut app) => {
            if watch {
                app.watch();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "startup failed");
            ExitCode::FAILURE
        }
    }
}
