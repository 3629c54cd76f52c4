//! Command: requests as objects you can queue, undo, and replay
//!
//! A smart-home remote with undo, a text editor whose inserts reverse
//! themselves, and a macro recorder.
//!
//! Run with: cargo run --bin behavioral_02_command

use colored::Colorize;

// ============================================================================
// Smart home: receivers, commands, and a programmable remote
// ============================================================================

mod smart_home {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::rc::Rc;

    // Receivers hold the actual device state.

    #[derive(Default)]
    pub struct Light {
        pub on: bool,
    }

    #[derive(Default)]
    pub struct Fan {
        pub running: bool,
    }

    pub struct AirConditioner {
        pub temperature: i32,
    }

    impl Default for AirConditioner {
        fn default() -> Self {
            AirConditioner { temperature: 24 }
        }
    }

    pub trait Command {
        fn execute(&self);
        fn undo(&self);
        fn name(&self) -> String;
    }

    pub struct LightOn {
        pub light: Rc<RefCell<Light>>,
    }

    pub struct LightOff {
        pub light: Rc<RefCell<Light>>,
    }

    pub struct FanOn {
        pub fan: Rc<RefCell<Fan>>,
    }

    pub struct SetTemperature {
        pub ac: Rc<RefCell<AirConditioner>>,
        pub target: i32,
        previous: RefCell<i32>,
    }

    impl SetTemperature {
        pub fn new(ac: Rc<RefCell<AirConditioner>>, target: i32) -> Self {
            SetTemperature {
                ac,
                target,
                previous: RefCell::new(0),
            }
        }
    }

    impl Command for LightOn {
        fn execute(&self) {
            self.light.borrow_mut().on = true;
            println!("  light on");
        }
        fn undo(&self) {
            self.light.borrow_mut().on = false;
            println!("  undo: light off");
        }
        fn name(&self) -> String {
            "LightOn".to_string()
        }
    }

    impl Command for LightOff {
        fn execute(&self) {
            self.light.borrow_mut().on = false;
            println!("  light off");
        }
        fn undo(&self) {
            self.light.borrow_mut().on = true;
            println!("  undo: light on");
        }
        fn name(&self) -> String {
            "LightOff".to_string()
        }
    }

    impl Command for FanOn {
        fn execute(&self) {
            self.fan.borrow_mut().running = true;
            println!("  fan spinning");
        }
        fn undo(&self) {
            self.fan.borrow_mut().running = false;
            println!("  undo: fan stopped");
        }
        fn name(&self) -> String {
            "FanOn".to_string()
        }
    }

    impl Command for SetTemperature {
        fn execute(&self) {
            let mut ac = self.ac.borrow_mut();
            *self.previous.borrow_mut() = ac.temperature;
            ac.temperature = self.target;
            println!("  AC set to {}°C", self.target);
        }
        fn undo(&self) {
            let previous = *self.previous.borrow();
            self.ac.borrow_mut().temperature = previous;
            println!("  undo: AC back to {}°C", previous);
        }
        fn name(&self) -> String {
            format!("SetTemperature({})", self.target)
        }
    }

    /// Null object: empty slots do nothing instead of being None checks.
    pub struct NoCommand;

    impl Command for NoCommand {
        fn execute(&self) {
            println!("  (empty slot)");
        }
        fn undo(&self) {}
        fn name(&self) -> String {
            "NoCommand".to_string()
        }
    }

    pub const SLOT_COUNT: usize = 7;

    pub struct RemoteControl {
        slots: Vec<Rc<dyn Command>>,
        last_pressed: RefCell<Option<Rc<dyn Command>>>,
    }

    impl RemoteControl {
        pub fn new() -> Self {
            let mut slots: Vec<Rc<dyn Command>> = Vec::with_capacity(SLOT_COUNT);
            for _ in 0..SLOT_COUNT {
                slots.push(Rc::new(NoCommand));
            }
            RemoteControl {
                slots,
                last_pressed: RefCell::new(None),
            }
        }

        pub fn assign(&mut self, slot: usize, command: Rc<dyn Command>) {
            if slot < SLOT_COUNT {
                self.slots[slot] = command;
            }
        }

        pub fn press(&self, slot: usize) {
            if let Some(command) = self.slots.get(slot) {
                command.execute();
                *self.last_pressed.borrow_mut() = Some(Rc::clone(command));
            }
        }

        pub fn press_undo(&self) {
            if let Some(command) = self.last_pressed.borrow_mut().take() {
                command.undo();
            } else {
                println!("  nothing to undo");
            }
        }

        pub fn slot_name(&self, slot: usize) -> Option<String> {
            self.slots.get(slot).map(|c| c.name())
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Programmable Remote ---".green().bold());

        let light = Rc::new(RefCell::new(Light::default()));
        let fan = Rc::new(RefCell::new(Fan::default()));
        let ac = Rc::new(RefCell::new(AirConditioner::default()));

        let mut remote = RemoteControl::new();
        remote.assign(
            0,
            Rc::new(LightOn {
                light: Rc::clone(&light),
            }),
        );
        remote.assign(
            1,
            Rc::new(LightOff {
                light: Rc::clone(&light),
            }),
        );
        remote.assign(2, Rc::new(FanOn { fan: Rc::clone(&fan) }));
        remote.assign(3, Rc::new(SetTemperature::new(Rc::clone(&ac), 19)));

        remote.press(0);
        remote.press(2);
        remote.press(3);
        remote.press_undo(); // AC back to 24
        remote.press(6); // unassigned slot, null object answers
        println!(
            "  state: light={} fan={} ac={}°C\n",
            light.borrow().on,
            fan.borrow().running,
            ac.borrow().temperature
        );
    }
}

// ============================================================================
// Text editor: insert commands that know how to reverse themselves
// ============================================================================

mod editor {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct TextEditor {
        pub content: String,
    }

    impl TextEditor {
        pub fn insert(&mut self, text: &str) {
            self.content.push_str(text);
        }

        pub fn delete_from_end(&mut self, chars: usize) {
            let keep = self.content.chars().count().saturating_sub(chars);
            self.content = self.content.chars().take(keep).collect();
        }
    }

    pub trait EditCommand {
        fn execute(&self);
        fn undo(&self);
    }

    pub struct InsertText {
        editor: Rc<RefCell<TextEditor>>,
        text: String,
    }

    impl InsertText {
        pub fn new(editor: Rc<RefCell<TextEditor>>, text: &str) -> Self {
            InsertText {
                editor,
                text: text.to_string(),
            }
        }
    }

    impl EditCommand for InsertText {
        fn execute(&self) {
            self.editor.borrow_mut().insert(&self.text);
        }

        fn undo(&self) {
            self.editor
                .borrow_mut()
                .delete_from_end(self.text.chars().count());
        }
    }

    pub struct History {
        executed: Vec<Box<dyn EditCommand>>,
    }

    impl History {
        pub fn new() -> Self {
            History {
                executed: Vec::new(),
            }
        }

        pub fn run(&mut self, command: Box<dyn EditCommand>) {
            command.execute();
            self.executed.push(command);
        }

        pub fn undo_last(&mut self) -> bool {
            match self.executed.pop() {
                Some(command) => {
                    command.undo();
                    true
                }
                None => false,
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Undoable Text Editor ---".green().bold());

        let editor = Rc::new(RefCell::new(TextEditor::default()));
        let mut history = History::new();

        history.run(Box::new(InsertText::new(Rc::clone(&editor), "Hello")));
        history.run(Box::new(InsertText::new(Rc::clone(&editor), ", world")));
        println!("  content: '{}'", editor.borrow().content);

        history.undo_last();
        println!("  after undo: '{}'", editor.borrow().content);

        history.undo_last();
        println!("  after second undo: '{}'\n", editor.borrow().content);
    }
}

// ============================================================================
// Macros: record a command sequence, replay it later
// ============================================================================

mod macros {
    use super::smart_home::Command;
    use colored::Colorize;
    use std::rc::Rc;

    pub struct MacroRecorder {
        recording: Vec<Rc<dyn Command>>,
    }

    impl MacroRecorder {
        pub fn new() -> Self {
            MacroRecorder {
                recording: Vec::new(),
            }
        }

        pub fn record(&mut self, command: Rc<dyn Command>) {
            println!("  recorded {}", command.name());
            self.recording.push(command);
        }

        pub fn replay(&self) {
            println!("  replaying {} command(s):", self.recording.len());
            for command in &self.recording {
                command.execute();
            }
        }

        pub fn len(&self) -> usize {
            self.recording.len()
        }
    }

    pub fn demonstrate() {
        use super::smart_home::{AirConditioner, Fan, FanOn, Light, LightOn, SetTemperature};
        use std::cell::RefCell;

        println!("{}", "--- Macro Recording ---".green().bold());

        let light = Rc::new(RefCell::new(Light::default()));
        let fan = Rc::new(RefCell::new(Fan::default()));
        let ac = Rc::new(RefCell::new(AirConditioner::default()));

        let mut movie_night = MacroRecorder::new();
        movie_night.record(Rc::new(LightOn {
            light: Rc::clone(&light),
        }));
        movie_night.record(Rc::new(FanOn { fan: Rc::clone(&fan) }));
        movie_night.record(Rc::new(SetTemperature::new(Rc::clone(&ac), 21)));

        movie_night.replay();
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. A command packages receiver + action + arguments behind one trait");
    println!("2. Undo is the command's own responsibility; it saved what it changed");
    println!("3. Because commands are values, queues, histories and macros are free");
    println!("4. NoCommand keeps slot handling branch-free");
}

fn main() {
    println!("{}", "COMMAND PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    smart_home::demonstrate();
    editor::demonstrate();
    macros::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::editor::{History, InsertText, TextEditor};
    use super::macros::MacroRecorder;
    use super::smart_home::{
        AirConditioner, Command, Light, LightOn, RemoteControl, SetTemperature,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn remote_executes_and_undoes_the_last_press() {
        let light = Rc::new(RefCell::new(Light::default()));
        let mut remote = RemoteControl::new();
        remote.assign(
            0,
            Rc::new(LightOn {
                light: Rc::clone(&light),
            }),
        );

        remote.press(0);
        assert!(light.borrow().on);
        remote.press_undo();
        assert!(!light.borrow().on);
    }

    #[test]
    fn empty_slots_hold_the_null_command() {
        let remote = RemoteControl::new();
        assert_eq!(remote.slot_name(5), Some("NoCommand".to_string()));
        // Pressing an empty slot is harmless.
        remote.press(5);
        remote.press_undo();
    }

    #[test]
    fn set_temperature_undo_restores_the_previous_value() {
        let ac = Rc::new(RefCell::new(AirConditioner::default()));
        let command = SetTemperature::new(Rc::clone(&ac), 18);
        command.execute();
        assert_eq!(ac.borrow().temperature, 18);
        command.undo();
        assert_eq!(ac.borrow().temperature, 24);
    }

    #[test]
    fn insert_undo_removes_exactly_the_inserted_text() {
        let editor = Rc::new(RefCell::new(TextEditor::default()));
        let mut history = History::new();

        history.run(Box::new(InsertText::new(Rc::clone(&editor), "Hello")));
        history.run(Box::new(InsertText::new(Rc::clone(&editor), " World")));
        assert_eq!(editor.borrow().content, "Hello World");

        assert!(history.undo_last());
        assert_eq!(editor.borrow().content, "Hello");
        assert!(history.undo_last());
        assert_eq!(editor.borrow().content, "");
        assert!(!history.undo_last());
    }

    #[test]
    fn macro_replays_all_recorded_commands() {
        let light = Rc::new(RefCell::new(Light::default()));
        let mut recorder = MacroRecorder::new();
        recorder.record(Rc::new(LightOn {
            light: Rc::clone(&light),
        }));
        assert_eq!(recorder.len(), 1);

        recorder.replay();
        assert!(light.borrow().on);
    }
}
