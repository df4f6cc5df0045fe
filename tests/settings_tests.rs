//! Settings persistence and the settings-to-game handoff

use std::path::PathBuf;

use anyhow::Result;
use connect_four::core::GameState;
use connect_four::settings::{
    JsonFileStore, MemoryStore, Settings, SettingsManager, SettingsStore, STORAGE_KEY,
};
use connect_four::types::{Adjustment, DropResult, Player};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("connect-four-{}-{}", name, std::process::id()))
}

#[test]
fn test_adjustment_resets_game_on_new_grid() -> Result<()> {
    let mut manager = SettingsManager::load(MemoryStore::default())?;
    let mut game = GameState::new(manager.grid_config()?);
    game.attempt_drop(0);
    game.attempt_drop(1);

    let config = manager
        .adjust(Adjustment::IncreaseHeight)?
        .expect("height can always grow");
    game.reconfigure(config);

    assert_eq!(game.board().height(), 7);
    assert_eq!(game.board().piece_count(), 0);
    assert_eq!(game.current_player(), Player::Player1);
    assert!(matches!(game.attempt_drop(0), DropResult::Placed(p) if p.row == 6));
    Ok(())
}

#[test]
fn test_adjustments_by_control_name() -> Result<()> {
    let mut manager = SettingsManager::load(MemoryStore::default())?;
    for name in ["widthDecrease", "widthDecrease", "widthDecrease", "widthDecrease", "connectLess"] {
        let adjustment = Adjustment::from_str(name).expect("known control");
        manager.adjust(adjustment)?;
    }
    assert_eq!(manager.settings().grid_width, 3);
    assert_eq!(manager.settings().connect_num, 3);
    Ok(())
}

#[test]
fn test_stored_record_from_browser_format() -> Result<()> {
    let mut store = MemoryStore::default();
    store.set_item(
        STORAGE_KEY,
        r#"{"gridWidth":9,"gridHeight":8,"connectNum":5,"p1Color":"rgb(1,2,3)","p2Color":"rgb(4,5,6)"}"#,
    );
    let manager = SettingsManager::load(store)?;
    let config = manager.grid_config()?;
    assert_eq!((config.width(), config.height(), config.connect()), (9, 8, 5));
    assert_eq!(manager.settings().color_of(Player::Player2), "rgb(4,5,6)");
    Ok(())
}

#[test]
fn test_file_store_round_trip() -> Result<()> {
    let dir = scratch_dir("file-store");
    let mut store = JsonFileStore::in_dir(&dir);
    assert_eq!(store.load()?, None);

    let settings = Settings {
        grid_width: 10,
        connect_num: 5,
        ..Settings::default()
    };
    store.save(&settings)?;
    assert_eq!(JsonFileStore::in_dir(&dir).load()?, Some(settings));

    let raw = std::fs::read_to_string(store.path())?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(json["gridWidth"], 10);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_manager_persists_colour_to_file() -> Result<()> {
    let dir = scratch_dir("colour");
    let mut manager = SettingsManager::load(JsonFileStore::in_dir(&dir))?;
    manager.set_color(Player::Player1, "#ff0000")?;

    let reloaded = SettingsManager::load(JsonFileStore::in_dir(&dir))?;
    assert_eq!(reloaded.settings().p1_color, "rgb(255,0,0)");

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_corrupt_file_reports_path() -> Result<()> {
    let dir = scratch_dir("corrupt");
    std::fs::create_dir_all(&dir)?;
    let store = JsonFileStore::in_dir(&dir);
    std::fs::write(store.path(), "not json")?;

    let err = store.load().unwrap_err();
    assert!(format!("{:#}", err).contains("connect4.json"));

    let manager = SettingsManager::load_or_default(store);
    assert_eq!(manager.settings(), &Settings::default());

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
