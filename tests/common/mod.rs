#![allow(dead_code)]

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tilewalk::scene::PlayerVisual;
use tilewalk::{CameraOffset, Direction, InputEvent, Level, Mode, Position, Scene, SceneSettings, Size};

pub const TILE: Size = Size::new(50.0, 50.0);
pub const SCREEN: Size = Size::new(550.0, 550.0);

/// Scenario fixture stored under test_data/scenarios
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioData {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub mode: Mode,
    pub radius: i32,
    pub level: Vec<String>,
    pub moves: Vec<Direction>,
    #[serde(rename = "expectedFocus")]
    pub expected_focus: Position,
    #[serde(rename = "expectedView", default)]
    pub expected_view: Option<Vec<String>>,
    #[serde(rename = "expectedCamera", default)]
    pub expected_camera: Option<CameraOffset>,
}

/// Load a scenario from a JSON file
pub fn load_scenario(path: &Path) -> Result<ScenarioData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let data: ScenarioData = serde_json::from_str(&contents)?;
    Ok(data)
}

/// Default 50px tiles on a 550px screen, player filling its tile
pub fn settings(mode: Mode, radius: i32) -> SceneSettings {
    SceneSettings {
        mode,
        radius,
        tile: TILE,
        screen: SCREEN,
        player: PlayerVisual {
            inset_x: 0.0,
            inset_y: 0.0,
            size: TILE,
        },
    }
}

/// Play a scenario one move per frame and return the final scene
pub fn run_scenario(data: &ScenarioData) -> Scene {
    let level = Level::parse(data.level.as_slice()).expect("scenario level should parse");
    let mut scene = Scene::new(level, settings(data.mode, data.radius));
    for &direction in &data.moves {
        scene.tick(&[InputEvent::Move(direction)]);
    }
    scene
}

/// A handful of small grids with walls in awkward places
pub fn sample_levels() -> Vec<Level> {
    let layouts: Vec<Vec<&str>> = vec![
        vec!["@"],
        vec!["@#"],
        vec!["@", "#", "."],
        vec!["###", "#@#", "###"],
        vec!["..#", "@.."],
        vec!["@...", ".#..", "..#.", "...."],
        vec!["#.#.#", ".@...", "#.#.#"],
    ];
    layouts
        .into_iter()
        .map(|rows| Level::parse(rows.as_slice()).expect("sample level should parse"))
        .collect()
}

/// Every non-wall cell of a level
pub fn floor_cells(level: &Level) -> Vec<Position> {
    level
        .grid()
        .iter()
        .filter(|(_, terrain)| !terrain.is_wall())
        .map(|(pos, _)| pos)
        .collect()
}
