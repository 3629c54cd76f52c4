//! Mediator: many-to-many chatter routed through one hub
//!
//! A chat room relays messages between users, a registration dialog keeps
//! its widgets consistent, and a control tower sequences landings. Peers
//! talk to the mediator, never to each other.
//!
//! Run with: cargo run --bin behavioral_07_mediator

use colored::Colorize;

// ============================================================================
// Chat room: users address names, the room does the routing
// ============================================================================

mod chat {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    pub struct User {
        pub name: String,
        pub inbox: Vec<String>,
    }

    impl User {
        fn receive(&mut self, from: &str, message: &str) {
            println!("  [{}] message from {}: {}", self.name, from, message);
            self.inbox.push(format!("{}: {}", from, message));
        }
    }

    #[derive(Default)]
    pub struct ChatRoom {
        users: HashMap<String, Rc<RefCell<User>>>,
    }

    impl ChatRoom {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn register(&mut self, name: &str) -> Rc<RefCell<User>> {
            println!("  [room] {} joined", name);
            let user = Rc::new(RefCell::new(User {
                name: name.to_string(),
                inbox: Vec::new(),
            }));
            self.users.insert(name.to_string(), user.clone());
            user
        }

        pub fn send(&self, from: &str, to: &str, message: &str) -> bool {
            match self.users.get(to) {
                Some(user) => {
                    user.borrow_mut().receive(from, message);
                    true
                }
                None => {
                    println!("{}", format!("  [room] ERROR: User {} not found", to).red());
                    false
                }
            }
        }

        /// Everyone but the sender hears a broadcast.
        pub fn broadcast(&self, from: &str, message: &str) {
            for (name, user) in &self.users {
                if name != from {
                    user.borrow_mut().receive(from, message);
                }
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Chat Room ---".green().bold());

        let mut room = ChatRoom::new();
        room.register("Alice");
        room.register("Bob");
        room.register("Charlie");

        room.send("Alice", "Bob", "lunch at noon?");
        room.send("Bob", "Alice", "works for me");
        room.send("Alice", "Dave", "you coming?");
        room.broadcast("Charlie", "standup moved to 10am");
        println!();
    }
}

// ============================================================================
// Registration dialog: the mediator owns the enable/disable rules
// ============================================================================

mod dialog {
    use colored::Colorize;

    /// Widgets report changes here; the cross-widget logic lives in one
    /// place instead of being smeared across the widgets themselves.
    pub struct RegistrationDialog {
        email: String,
        country: String,
        ok_enabled: bool,
    }

    impl RegistrationDialog {
        pub fn new() -> Self {
            RegistrationDialog {
                email: String::new(),
                country: String::new(),
                ok_enabled: false,
            }
        }

        pub fn ok_enabled(&self) -> bool {
            self.ok_enabled
        }

        pub fn set_email(&mut self, email: &str) {
            println!("  [email field] changed to \"{}\"", email);
            self.email = email.to_string();
            self.component_changed();
        }

        pub fn select_country(&mut self, country: &str) {
            println!("  [country box] selected \"{}\"", country);
            self.country = country.to_string();
            self.component_changed();
        }

        pub fn click_ok(&self) -> Option<String> {
            if !self.ok_enabled {
                println!("{}", "  [ok button] disabled, click ignored".red());
                return None;
            }
            println!("  [ok button] registering {} from {}", self.email, self.country);
            Some(format!("{} ({})", self.email, self.country))
        }

        fn component_changed(&mut self) {
            self.ok_enabled = !self.email.is_empty() && !self.country.is_empty();
            println!(
                "  [dialog] OK button {}",
                if self.ok_enabled { "enabled" } else { "disabled" }
            );
            if self.country == "USA" {
                println!("  [dialog] applying USA-specific validation rules");
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Registration Dialog ---".green().bold());

        let mut dialog = RegistrationDialog::new();
        dialog.click_ok();
        dialog.set_email("user@example.com");
        dialog.click_ok();
        dialog.select_country("USA");
        dialog.click_ok();
        println!();
    }
}

// ============================================================================
// Control tower: one runway, many flights
// ============================================================================

mod tower {
    use colored::Colorize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Runway {
        Clear,
        Occupied,
    }

    pub struct ControlTower {
        runway: Runway,
        flights: Vec<String>,
        holding: Vec<String>,
    }

    impl ControlTower {
        pub fn new() -> Self {
            ControlTower {
                runway: Runway::Clear,
                flights: Vec::new(),
                holding: Vec::new(),
            }
        }

        pub fn runway(&self) -> Runway {
            self.runway
        }

        pub fn register(&mut self, flight: &str) {
            println!("  [tower] {} checked in", flight);
            self.flights.push(flight.to_string());
        }

        pub fn request_landing(&mut self, flight: &str) -> bool {
            match self.runway {
                Runway::Clear => {
                    self.runway = Runway::Occupied;
                    println!("  [tower -> {}] Clear to land on runway 1", flight);
                    true
                }
                Runway::Occupied => {
                    println!("  [tower -> {}] Hold position, runway occupied", flight);
                    self.holding.push(flight.to_string());
                    false
                }
            }
        }

        /// Frees the runway and clears the next holding flight to land.
        pub fn clear_runway(&mut self) {
            println!("  [tower] runway 1 is clear");
            self.runway = Runway::Clear;
            if !self.holding.is_empty() {
                let next = self.holding.remove(0);
                self.request_landing(&next);
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Control Tower ---".green().bold());

        let mut tower = ControlTower::new();
        tower.register("AA101");
        tower.register("UA202");

        tower.request_landing("AA101");
        tower.request_landing("UA202");
        tower.clear_runway();
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Peers hold a reference to the mediator, never to each other");
    println!("2. Interaction rules live in one type and change in one place");
    println!("3. The hub can queue, filter, or reroute without peers noticing");
}

fn main() {
    println!("{}", "MEDIATOR PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    chat::demonstrate();
    dialog::demonstrate();
    tower::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::chat::ChatRoom;
    use super::dialog::RegistrationDialog;
    use super::tower::{ControlTower, Runway};

    #[test]
    fn direct_messages_reach_only_the_addressee() {
        let mut room = ChatRoom::new();
        let alice = room.register("Alice");
        let bob = room.register("Bob");

        assert!(room.send("Alice", "Bob", "hi"));
        assert_eq!(bob.borrow().inbox, vec!["Alice: hi".to_string()]);
        assert!(alice.borrow().inbox.is_empty());
    }

    #[test]
    fn sending_to_an_unknown_user_fails() {
        let mut room = ChatRoom::new();
        room.register("Alice");
        assert!(!room.send("Alice", "Dave", "hello?"));
    }

    #[test]
    fn broadcast_skips_the_sender() {
        let mut room = ChatRoom::new();
        let alice = room.register("Alice");
        let bob = room.register("Bob");
        let charlie = room.register("Charlie");

        room.broadcast("Charlie", "meeting moved");

        assert_eq!(alice.borrow().inbox.len(), 1);
        assert_eq!(bob.borrow().inbox.len(), 1);
        assert!(charlie.borrow().inbox.is_empty());
    }

    #[test]
    fn ok_requires_both_fields() {
        let mut dialog = RegistrationDialog::new();
        assert!(!dialog.ok_enabled());
        assert_eq!(dialog.click_ok(), None);

        dialog.set_email("user@example.com");
        assert!(!dialog.ok_enabled());

        dialog.select_country("USA");
        assert!(dialog.ok_enabled());
        assert_eq!(
            dialog.click_ok(),
            Some("user@example.com (USA)".to_string())
        );
    }

    #[test]
    fn clearing_the_field_disables_ok_again() {
        let mut dialog = RegistrationDialog::new();
        dialog.set_email("user@example.com");
        dialog.select_country("Canada");
        assert!(dialog.ok_enabled());

        dialog.set_email("");
        assert!(!dialog.ok_enabled());
    }

    #[test]
    fn second_flight_holds_until_the_runway_clears() {
        let mut tower = ControlTower::new();
        tower.register("AA101");
        tower.register("UA202");

        assert!(tower.request_landing("AA101"));
        assert!(!tower.request_landing("UA202"));
        assert_eq!(tower.runway(), Runway::Occupied);

        // AA101 taxis off; the tower immediately clears UA202.
        tower.clear_runway();
        assert_eq!(tower.runway(), Runway::Occupied);
    }
}
