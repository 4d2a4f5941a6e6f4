//! wasm-bindgen handles for a browser host
//!
//! The host owns the DOM/canvas and forwards events here. Each handle owns one
//! game core; state goes back out as status strings and JSON snapshots.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::board::{BOARD_SIZE, TicTacToe};
use crate::platform::{dispatch_key, dispatch_key_event};
use crate::settings::Settings;
use crate::sim::PaddleGame;

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Logger already initialised");
    }
}

/// Tic-tac-toe handle
#[wasm_bindgen]
pub struct TicTacToeApp {
    game: TicTacToe,
}

#[wasm_bindgen]
impl TicTacToeApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            game: TicTacToe::new(),
        }
    }

    /// Cell clicked; returns the status line to display (unchanged if the
    /// click was ignored)
    #[wasm_bindgen(js_name = cellClicked)]
    pub fn cell_clicked(&mut self, index: usize) -> String {
        self.game.click(index).to_string()
    }

    #[wasm_bindgen(js_name = resetRequested)]
    pub fn reset_requested(&mut self) -> String {
        self.game.reset().to_string()
    }

    pub fn status(&self) -> String {
        self.game.status().to_string()
    }

    /// "X", "O" or "" for an empty (or off-board) cell
    #[wasm_bindgen(js_name = cellText)]
    pub fn cell_text(&self, index: usize) -> String {
        self.game
            .cell(index)
            .map(|c| c.as_str())
            .unwrap_or("")
            .to_string()
    }

    #[wasm_bindgen(js_name = cellEnabled)]
    pub fn cell_enabled(&self, index: usize) -> bool {
        self.game.is_cell_enabled(index)
    }

    #[wasm_bindgen(js_name = cellLabel)]
    pub fn cell_label(index: usize) -> String {
        TicTacToe::cell_label(index).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = cellCount)]
    pub fn cell_count() -> usize {
        BOARD_SIZE
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Full controller state as JSON for the render sink
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game)?)
    }
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Paddle game handle
#[wasm_bindgen]
pub struct PaddleApp {
    game: PaddleGame,
}

#[wasm_bindgen]
impl PaddleApp {
    /// Create a game, optionally overriding tuning with a JSON document
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Self {
        let settings = Settings::load_or_default(settings_json.as_deref());
        let seed = js_sys::Date::now() as u64;
        log::info!("Paddle game initialized with seed: {seed}");
        Self {
            game: PaddleGame::with_settings(settings, seed),
        }
    }

    /// Advance one frame; returns the frame's events as JSON
    pub fn tick(&mut self) -> Result<String, JsError> {
        let events = self.game.advance_frame();
        Ok(serde_json::to_string(&events)?)
    }

    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> bool {
        dispatch_key(&mut self.game, code, true)
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, code: &str) -> bool {
        dispatch_key(&mut self.game, code, false)
    }

    /// Feed a raw `keydown`/`keyup` event; recognised keys have their default
    /// action suppressed so arrows and space do not scroll the page
    #[wasm_bindgen(js_name = handleKeyboardEvent)]
    pub fn handle_keyboard_event(&mut self, event: &KeyboardEvent) -> bool {
        let handled = dispatch_key_event(&mut self.game, &event.type_(), &event.code());
        if handled {
            event.prevent_default();
        }
        handled
    }

    #[wasm_bindgen(js_name = serveRequested)]
    pub fn serve_requested(&mut self) -> bool {
        self.game.serve()
    }

    #[wasm_bindgen(js_name = resetRequested)]
    pub fn reset_requested(&mut self) {
        self.game.reset();
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn best(&self) -> u32 {
        self.game.best()
    }

    pub fn running(&self) -> bool {
        self.game.is_running()
    }

    /// Paddle, ball, score and running flag as JSON for the render sink
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.snapshot())?)
    }
}
