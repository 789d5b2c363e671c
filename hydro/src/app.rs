//! Main application state and logic

use hydro_core::{DrinkKind, EvolutionStore, GameConfig, LoadStatus, MonsterType};

use crate::ui::theme::GameTheme;
use crate::ui::Overlay;

/// Which screen the player is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Active freak, stats and the main menu (default)
    #[default]
    Main,
    /// Picking a drink kind
    ChooseDrink,
    /// Typing the volume of the chosen drink
    EnterVolume(DrinkKind),
    /// Every hatched freak and its stage
    Collection,
    /// Changing the active freak
    SelectMonster,
    /// Recent drinks
    History,
}

/// Main application state
pub struct App {
    pub store: EvolutionStore,
    pub config: GameConfig,

    // UI state
    pub theme: GameTheme,
    screen: Screen,
    overlay: Option<Overlay>,

    // Input state
    input_buffer: String,
    cursor_position: usize,
    /// Highlighted row on the selection screen
    pub selection: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Animation
    pub animation_frame: u8,
}

impl App {
    /// Create a new application around an opened store
    pub fn new(store: EvolutionStore, config: GameConfig, load_status: &LoadStatus) -> Self {
        let status_message = match load_status {
            LoadStatus::Missing => Some("A new freak egg appears. Stay hydrated!".to_string()),
            LoadStatus::Restored => None,
            LoadStatus::Recovered(e) => Some(format!("Could not read save ({e}); starting fresh")),
        };

        Self {
            store,
            config,
            theme: GameTheme::default(),
            screen: Screen::Main,
            overlay: None,
            input_buffer: String::new(),
            cursor_position: 0,
            selection: 0,
            status_message,
            should_quit: false,
            animation_frame: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Switch screens, clearing any half-typed input
    pub fn go_to(&mut self, screen: Screen) {
        if screen == Screen::SelectMonster {
            self.selection = self.store.selected_type().index();
        }
        self.screen = screen;
        self.clear_input();
    }

    pub fn back_to_main(&mut self) {
        self.go_to(Screen::Main);
    }

    /// Pick a drink by menu number and move on to the volume prompt
    pub fn choose_drink(&mut self, number: usize) {
        match DrinkKind::from_menu_number(number) {
            Some(kind) => {
                self.clear_status();
                self.go_to(Screen::EnterVolume(kind));
            }
            None => self.set_status("Invalid selection."),
        }
    }

    /// Record the typed volume for the chosen drink
    pub fn submit_volume(&mut self) {
        let Screen::EnterVolume(kind) = self.screen else {
            return;
        };

        let amount: f64 = match self.input_buffer.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                self.set_status("Please enter a valid number of milliliters.");
                self.clear_input();
                return;
            }
        };

        if !amount.is_finite() || amount <= 0.0 {
            self.set_status(format!("How do you consume negative {kind}?"));
            self.clear_input();
            return;
        }

        match self.store.record_drink(kind, amount) {
            Ok(receipt) => {
                let mut message = format!("Added {amount}ml of {kind}! (+{:.1} pts)", receipt.points);
                if let Some(monster) = receipt.unlocked {
                    message.push_str(&format!(" A {monster} egg has hatched!"));
                }
                if let Err(e) = &receipt.saved {
                    message.push_str(&format!(" Save failed: {e}"));
                }
                self.set_status(message);
                self.back_to_main();
                if receipt.evolved {
                    self.set_overlay(Overlay::Evolved {
                        monster: self.store.selected_type(),
                        stage: receipt.stage,
                    });
                }
            }
            Err(e) => {
                self.set_status(e.to_string());
                self.clear_input();
            }
        }
    }

    /// Make a freak active if it is unlocked
    pub fn select_monster(&mut self, monster: MonsterType) {
        if !self.store.is_unlocked(monster) {
            self.set_status("That monster is locked! Drink more to unlock it.");
            return;
        }

        match self.store.select_monster(monster) {
            Ok(()) => self.set_status(format!("You selected: {monster}")),
            Err(e) => self.set_status(format!("You selected: {monster} (save failed: {e})")),
        }
        self.back_to_main();
    }

    /// Select the highlighted freak
    pub fn confirm_selection(&mut self) {
        if let Some(&monster) = MonsterType::ALL.get(self.selection) {
            self.select_monster(monster);
        }
    }

    pub fn selection_up(&mut self) {
        self.selection = self.selection.saturating_sub(1);
    }

    pub fn selection_down(&mut self) {
        self.selection = (self.selection + 1).min(MonsterType::ALL.len() - 1);
    }

    /// Type a character into the input line
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, _)) = self.input_buffer.char_indices().nth(self.cursor_position) {
                self.input_buffer.remove(byte_pos);
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
        self.animation_frame = 0;
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Advance animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
