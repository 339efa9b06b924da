use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use arboard::Clipboard;
use clap::Parser;
use macroquad::prelude::*;
use tilewalk::config::{AssetsConfig, DEFAULT_CONFIG_PATH};
use tilewalk::pacer::FramePacer;
use tilewalk::{Config, Direction, InputEvent, Level, Mode, Phase, Scene, Session, Sprite, TickOutcome};
use tracing_subscriber::EnvFilter;

const DIRECTION_KEYS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Keys handled outside the simulation
const DEBUG_KEYS: [KeyCode; 2] = [KeyCode::C, KeyCode::F1];

#[derive(Debug, Parser)]
#[command(version, about = "Tile grid walking demo")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Level file, overrides `level.path`
    #[arg(long)]
    level: Option<PathBuf>,

    /// Movement variant, overrides `level.mode`
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Sliding window radius, overrides `level.radius`
    #[arg(long)]
    radius: Option<i32>,
}

static SETTINGS: OnceLock<Config> = OnceLock::new();

/// Parse CLI and config once; macroquad asks for the window setup before `main` runs
fn settings() -> &'static Config {
    SETTINGS.get_or_init(|| {
        init_tracing();

        let cli = Cli::parse();
        let mut config = Config::load(&cli.config);
        if let Some(level) = cli.level {
            config.level.path = level;
        }
        if let Some(mode) = cli.mode {
            config.level.mode = mode;
        }
        if let Some(radius) = cli.radius {
            config.level.radius = radius;
        }
        config
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn window_conf() -> Conf {
    let config = settings();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.window.width as i32,
        window_height: config.window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Tile, player and intro images
struct Assets {
    wall: Texture2D,
    empty: Texture2D,
    player: Texture2D,
    intro: Texture2D,
}

impl Assets {
    async fn load(config: &AssetsConfig) -> Result<Self> {
        Ok(Assets {
            wall: load_image(&config.wall).await?,
            empty: load_image(&config.empty).await?,
            player: load_image(&config.player).await?,
            intro: load_image(&config.intro).await?,
        })
    }

    fn sprite(&self, sprite: Sprite) -> &Texture2D {
        match sprite {
            Sprite::Wall => &self.wall,
            Sprite::Empty => &self.empty,
            Sprite::Player => &self.player,
        }
    }
}

async fn load_image(path: &Path) -> Result<Texture2D> {
    let name = path
        .to_str()
        .with_context(|| format!("asset path {} is not valid UTF-8", path.display()))?;
    let texture = load_texture(name)
        .await
        .map_err(|e| anyhow::anyhow!("failed to load image {}: {:?}", path.display(), e))?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

/// Gather this frame's input in a fixed order
fn collect_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
        events.push(InputEvent::Quit);
    }

    for (key, direction) in DIRECTION_KEYS {
        if is_key_pressed(key) {
            events.push(InputEvent::Move(direction));
        }
    }

    let other_key = get_keys_pressed().into_iter().any(|key| {
        key != KeyCode::Escape
            && !DEBUG_KEYS.contains(&key)
            && !DIRECTION_KEYS.iter().any(|(k, _)| *k == key)
    });
    if other_key
        || is_mouse_button_pressed(MouseButton::Left)
        || is_mouse_button_pressed(MouseButton::Right)
    {
        events.push(InputEvent::Press);
    }

    events
}

fn copy_to_clipboard(text: &str) {
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(text) {
                tracing::warn!(error = %e, "failed to copy to clipboard");
            } else {
                tracing::info!("view copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to access clipboard");
        }
    }
}

fn handle_debug_keys(session: &Session) {
    let Some(scene) = session.scene() else {
        return;
    };

    if is_key_pressed(KeyCode::C) {
        copy_to_clipboard(&scene.text_view());
    }

    if is_key_pressed(KeyCode::F1) {
        match scene.snapshot_json() {
            Ok(json) => tracing::info!(snapshot = %json, "scene snapshot"),
            Err(e) => tracing::warn!(error = %e, "failed to serialise snapshot"),
        }
    }
}

fn draw_intro(assets: &Assets) {
    clear_background(BLACK);
    draw_texture_ex(
        &assets.intro,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(screen_width(), screen_height())),
            ..Default::default()
        },
    );
}

fn draw_scene(scene: &Scene, assets: &Assets) {
    clear_background(BLACK);

    let (width, height) = (screen_width(), screen_height());
    for entity in scene.entities() {
        let rect = entity.screen;
        // Cull anything the camera has pushed off screen
        if rect.x + rect.w < 0.0 || rect.y + rect.h < 0.0 || rect.x > width || rect.y > height {
            continue;
        }
        draw_texture_ex(
            assets.sprite(entity.sprite),
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }
}

async fn run() -> Result<()> {
    let config = settings();

    let level = Level::load(&config.level.path)
        .with_context(|| format!("cannot start with level {}", config.level.path.display()))?;
    let assets = Assets::load(&config.assets).await?;

    let mut session = Session::new();
    session.load_level(level, config.scene_settings());

    let mut pacer = FramePacer::new(config.window.fps);
    prevent_quit();

    loop {
        let events = collect_events();
        handle_debug_keys(&session);

        if session.tick(&events) == TickOutcome::Quit {
            break;
        }

        match (session.phase(), session.scene()) {
            (Phase::Running, Some(scene)) => draw_scene(scene, &assets),
            _ => draw_intro(&assets),
        }

        next_frame().await;
        pacer.wait();
    }

    tracing::info!("quit requested, shutting down");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
