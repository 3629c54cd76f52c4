//! Memento: snapshot state without exposing it
//!
//! A text editor with undo/redo driven by an external history, game
//! checkpoints, and a settings panel that can roll back. Originators hand
//! out opaque snapshots; caretakers store them without peeking inside.
//!
//! Run with: cargo run --bin behavioral_10_memento

use colored::Colorize;

// ============================================================================
// Text editor: the history truncates the redo tail on new saves
// ============================================================================

mod editor {
    use colored::Colorize;

    /// Opaque snapshot. Fields stay private so only the editor can restore.
    #[derive(Clone)]
    pub struct EditorMemento {
        content: String,
        cursor: usize,
    }

    pub struct TextEditor {
        content: String,
        cursor: usize,
    }

    impl TextEditor {
        pub fn new() -> Self {
            TextEditor {
                content: String::new(),
                cursor: 0,
            }
        }

        pub fn content(&self) -> &str {
            &self.content
        }

        pub fn cursor(&self) -> usize {
            self.cursor
        }

        pub fn insert_text(&mut self, text: &str) {
            self.content.push_str(text);
            self.cursor = self.content.chars().count();
            println!("  typed \"{}\" -> \"{}\"", text, self.content);
        }

        pub fn delete_char(&mut self) {
            if let Some(ch) = self.content.pop() {
                self.cursor = self.content.chars().count();
                println!("  deleted '{}' -> \"{}\"", ch, self.content);
            }
        }

        pub fn save(&self) -> EditorMemento {
            EditorMemento {
                content: self.content.clone(),
                cursor: self.cursor,
            }
        }

        pub fn restore(&mut self, memento: &EditorMemento) {
            self.content = memento.content.clone();
            self.cursor = memento.cursor;
            println!("  restored -> \"{}\" (cursor {})", self.content, self.cursor);
        }
    }

    /// Caretaker. Holds snapshots, never inspects them.
    pub struct EditorHistory {
        mementos: Vec<EditorMemento>,
        current: usize,
    }

    impl EditorHistory {
        pub fn new(initial: EditorMemento) -> Self {
            EditorHistory {
                mementos: vec![initial],
                current: 0,
            }
        }

        /// Saving after undos drops the abandoned redo branch.
        pub fn save(&mut self, memento: EditorMemento) {
            self.mementos.truncate(self.current + 1);
            self.mementos.push(memento);
            self.current = self.mementos.len() - 1;
        }

        pub fn can_undo(&self) -> bool {
            self.current > 0
        }

        pub fn can_redo(&self) -> bool {
            self.current + 1 < self.mementos.len()
        }

        pub fn undo(&mut self) -> Option<&EditorMemento> {
            if !self.can_undo() {
                return None;
            }
            self.current -= 1;
            self.mementos.get(self.current)
        }

        pub fn redo(&mut self) -> Option<&EditorMemento> {
            if !self.can_redo() {
                return None;
            }
            self.current += 1;
            self.mementos.get(self.current)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Text Editor Undo/Redo ---".green().bold());

        let mut editor = TextEditor::new();
        let mut history = EditorHistory::new(editor.save());

        editor.insert_text("Hello");
        history.save(editor.save());

        editor.insert_text(" World");
        history.save(editor.save());

        editor.delete_char();
        history.save(editor.save());

        println!("  undo twice:");
        if let Some(memento) = history.undo().cloned() {
            editor.restore(&memento);
        }
        if let Some(memento) = history.undo().cloned() {
            editor.restore(&memento);
        }

        println!("  redo once:");
        if let Some(memento) = history.redo().cloned() {
            editor.restore(&memento);
        }
        println!();
    }
}

// ============================================================================
// Game checkpoints
// ============================================================================

mod game {
    use colored::Colorize;

    #[derive(Clone)]
    pub struct Checkpoint {
        level: u32,
        health: i32,
        score: u32,
        position: String,
    }

    pub struct Game {
        pub level: u32,
        pub health: i32,
        pub score: u32,
        pub position: String,
    }

    impl Game {
        pub fn new() -> Self {
            Game {
                level: 1,
                health: 100,
                score: 0,
                position: "Start".to_string(),
            }
        }

        /// Each move costs health and earns score.
        pub fn advance_to(&mut self, position: &str) {
            self.health -= 10;
            self.score += 10;
            self.position = position.to_string();
            println!(
                "  moved to {} (health {}, score {})",
                self.position, self.health, self.score
            );
        }

        pub fn checkpoint(&self) -> Checkpoint {
            println!("  checkpoint saved at {}", self.position);
            Checkpoint {
                level: self.level,
                health: self.health,
                score: self.score,
                position: self.position.clone(),
            }
        }

        pub fn load(&mut self, checkpoint: &Checkpoint) {
            self.level = checkpoint.level;
            self.health = checkpoint.health;
            self.score = checkpoint.score;
            self.position = checkpoint.position.clone();
            println!(
                "  loaded checkpoint: {} (health {}, score {})",
                self.position, self.health, self.score
            );
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Game Checkpoints ---".green().bold());

        let mut game = Game::new();
        let mut checkpoints = Vec::new();

        checkpoints.push(game.checkpoint());
        game.advance_to("Forest");
        game.advance_to("Cave");
        checkpoints.push(game.checkpoint());
        game.advance_to("Dragon's Lair");

        println!("  the dragon wins; back to the beginning:");
        game.load(&checkpoints[0]);
        println!();
    }
}

// ============================================================================
// Settings rollback
// ============================================================================

mod settings {
    use colored::Colorize;

    #[derive(Clone, PartialEq, Debug)]
    pub struct ConfigSnapshot {
        brightness: u8,
        volume: u8,
        theme: String,
        notifications: bool,
    }

    pub struct AppConfig {
        pub brightness: u8,
        pub volume: u8,
        pub theme: String,
        pub notifications: bool,
    }

    impl AppConfig {
        pub fn defaults() -> Self {
            AppConfig {
                brightness: 75,
                volume: 50,
                theme: "light".to_string(),
                notifications: true,
            }
        }

        pub fn snapshot(&self) -> ConfigSnapshot {
            ConfigSnapshot {
                brightness: self.brightness,
                volume: self.volume,
                theme: self.theme.clone(),
                notifications: self.notifications,
            }
        }

        pub fn restore(&mut self, snapshot: &ConfigSnapshot) {
            self.brightness = snapshot.brightness;
            self.volume = snapshot.volume;
            self.theme = snapshot.theme.clone();
            self.notifications = snapshot.notifications;
        }

        pub fn describe(&self) -> String {
            format!(
                "brightness {}, volume {}, theme {}, notifications {}",
                self.brightness, self.volume, self.theme, self.notifications
            )
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Settings Rollback ---".green().bold());

        let mut config = AppConfig::defaults();
        println!("  defaults: {}", config.describe());
        let saved = config.snapshot();

        config.brightness = 100;
        config.volume = 100;
        config.theme = "dark".to_string();
        println!("  experimenting: {}", config.describe());

        config.restore(&saved);
        println!("  rolled back: {}", config.describe());
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Snapshot fields stay private, so only the originator can restore");
    println!("2. The caretaker indexes snapshots; saving mid-history drops the redo tail");
    println!("3. Clone-based snapshots are trivial in Rust when state is owned data");
}

fn main() {
    println!("{}", "MEMENTO PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    editor::demonstrate();
    game::demonstrate();
    settings::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::editor::{EditorHistory, TextEditor};
    use super::game::Game;
    use super::settings::AppConfig;

    #[test]
    fn undo_walks_back_through_saved_states() {
        let mut editor = TextEditor::new();
        let mut history = EditorHistory::new(editor.save());

        editor.insert_text("Hello");
        history.save(editor.save());
        editor.insert_text(" World");
        history.save(editor.save());

        let memento = history.undo().expect("one undo available").clone();
        editor.restore(&memento);
        assert_eq!(editor.content(), "Hello");

        let memento = history.undo().expect("second undo available").clone();
        editor.restore(&memento);
        assert_eq!(editor.content(), "");
        assert!(!history.can_undo());
    }

    #[test]
    fn redo_replays_an_undone_state() {
        let mut editor = TextEditor::new();
        let mut history = EditorHistory::new(editor.save());

        editor.insert_text("Hello");
        history.save(editor.save());

        let memento = history.undo().expect("undo").clone();
        editor.restore(&memento);
        assert!(history.can_redo());

        let memento = history.redo().expect("redo").clone();
        editor.restore(&memento);
        assert_eq!(editor.content(), "Hello");
        assert!(!history.can_redo());
    }

    #[test]
    fn saving_after_undo_discards_the_redo_branch() {
        let mut editor = TextEditor::new();
        let mut history = EditorHistory::new(editor.save());

        editor.insert_text("Hello");
        history.save(editor.save());
        editor.insert_text(" World");
        history.save(editor.save());

        let memento = history.undo().expect("undo").clone();
        editor.restore(&memento);

        editor.insert_text(" Rust");
        history.save(editor.save());
        assert!(!history.can_redo());
        assert_eq!(editor.content(), "Hello Rust");
    }

    #[test]
    fn cursor_position_rides_along_with_the_snapshot() {
        let mut editor = TextEditor::new();
        editor.insert_text("Hello");
        let memento = editor.save();

        editor.insert_text(" World");
        assert_eq!(editor.cursor(), 11);

        editor.restore(&memento);
        assert_eq!(editor.cursor(), 5);
    }

    #[test]
    fn game_checkpoints_restore_every_field() {
        let mut game = Game::new();
        let start = game.checkpoint();

        game.advance_to("Forest");
        game.advance_to("Cave");
        assert_eq!(game.health, 80);
        assert_eq!(game.score, 20);

        game.load(&start);
        assert_eq!(game.health, 100);
        assert_eq!(game.score, 0);
        assert_eq!(game.position, "Start");
    }

    #[test]
    fn config_rolls_back_to_the_snapshot() {
        let mut config = AppConfig::defaults();
        let saved = config.snapshot();

        config.brightness = 100;
        config.theme = "dark".to_string();
        config.restore(&saved);

        assert_eq!(config.brightness, 75);
        assert_eq!(config.theme, "light");
        assert_eq!(config.snapshot(), saved);
    }
}
