//! State: behavior that changes when internal state does
//!
//! A document moves through a draft/published/archived workflow and a TCP
//! connection walks its handshake states. Each state decides what an
//! operation means and which state comes next, replacing flag-and-match
//! sprawl in the owning object.
//!
//! Run with: cargo run --bin behavioral_05_state

use colored::Colorize;

// ============================================================================
// Document workflow: draft -> published -> archived
// ============================================================================

mod workflow {
    use colored::Colorize;

    pub trait DocumentState {
        fn name(&self) -> &'static str;

        /// Each operation returns the next state, or None to stay put.
        fn edit(&self, content: &mut String, text: &str) -> Option<Box<dyn DocumentState>>;
        fn publish(&self) -> Option<Box<dyn DocumentState>>;
        fn archive(&self) -> Option<Box<dyn DocumentState>>;
        fn restore(&self) -> Option<Box<dyn DocumentState>>;
    }

    pub struct Draft;
    pub struct Published;
    pub struct Archived;

    impl DocumentState for Draft {
        fn name(&self) -> &'static str {
            "Draft"
        }

        fn edit(&self, content: &mut String, text: &str) -> Option<Box<dyn DocumentState>> {
            content.push_str(text);
            println!("  [Draft] edited, content is now: \"{}\"", content);
            None
        }

        fn publish(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Draft] publishing document");
            Some(Box::new(Published))
        }

        fn archive(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Draft] archiving document");
            Some(Box::new(Archived))
        }

        fn restore(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Draft] already editable, nothing to restore");
            None
        }
    }

    impl DocumentState for Published {
        fn name(&self) -> &'static str {
            "Published"
        }

        fn edit(&self, _content: &mut String, _text: &str) -> Option<Box<dyn DocumentState>> {
            println!("{}", "  [Published] ERROR: Cannot edit published document!".red());
            None
        }

        fn publish(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Published] already live");
            None
        }

        fn archive(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Published] archiving document");
            Some(Box::new(Archived))
        }

        fn restore(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Published] restoring to draft for edits");
            Some(Box::new(Draft))
        }
    }

    impl DocumentState for Archived {
        fn name(&self) -> &'static str {
            "Archived"
        }

        fn edit(&self, _content: &mut String, _text: &str) -> Option<Box<dyn DocumentState>> {
            println!("{}", "  [Archived] ERROR: Cannot edit archived document!".red());
            None
        }

        fn publish(&self) -> Option<Box<dyn DocumentState>> {
            println!("{}", "  [Archived] ERROR: Cannot publish from the archive!".red());
            None
        }

        fn archive(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Archived] already archived");
            None
        }

        fn restore(&self) -> Option<Box<dyn DocumentState>> {
            println!("  [Archived] restoring to draft");
            Some(Box::new(Draft))
        }
    }

    pub struct Document {
        state: Box<dyn DocumentState>,
        content: String,
    }

    impl Document {
        pub fn new() -> Self {
            Document {
                state: Box::new(Draft),
                content: String::new(),
            }
        }

        pub fn state_name(&self) -> &'static str {
            self.state.name()
        }

        pub fn content(&self) -> &str {
            &self.content
        }

        fn transition(&mut self, next: Option<Box<dyn DocumentState>>) {
            if let Some(next) = next {
                self.state = next;
            }
        }

        pub fn edit(&mut self, text: &str) {
            let next = self.state.edit(&mut self.content, text);
            self.transition(next);
        }

        pub fn publish(&mut self) {
            let next = self.state.publish();
            self.transition(next);
        }

        pub fn archive(&mut self) {
            let next = self.state.archive();
            self.transition(next);
        }

        pub fn restore(&mut self) {
            let next = self.state.restore();
            self.transition(next);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Document Workflow ---".green().bold());

        let mut doc = Document::new();
        doc.edit("Quarterly results: ");
        doc.edit("revenue up 12%.");
        doc.publish();
        doc.edit(" (typo fix)");
        doc.restore();
        doc.edit(" Revised after review.");
        doc.archive();
        doc.publish();
        println!("  final state: {}\n", doc.state_name());
    }
}

// ============================================================================
// TCP connection: states drive the transition narration
// ============================================================================

mod tcp {
    use colored::Colorize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TcpState {
        Closed,
        Listen,
        Established,
        CloseWait,
    }

    pub struct TcpConnection {
        state: TcpState,
        pub sent: Vec<String>,
    }

    impl TcpConnection {
        pub fn new() -> Self {
            TcpConnection {
                state: TcpState::Closed,
                sent: Vec::new(),
            }
        }

        pub fn state(&self) -> TcpState {
            self.state
        }

        fn transition(&mut self, to: TcpState) {
            println!("  [TCP] Transitioning from {:?} to {:?}", self.state, to);
            self.state = to;
        }

        pub fn open(&mut self) {
            match self.state {
                TcpState::Closed => self.transition(TcpState::Listen),
                _ => println!("  [TCP] open ignored in {:?}", self.state),
            }
        }

        pub fn send(&mut self, data: &str) {
            match self.state {
                TcpState::Listen => {
                    self.transition(TcpState::Established);
                    println!("  [TCP] Connection established, sending: {}", data);
                    self.sent.push(data.to_string());
                }
                TcpState::Established => {
                    println!("  [TCP] sending: {}", data);
                    self.sent.push(data.to_string());
                }
                _ => {
                    println!("{}", format!("  [TCP] ERROR: cannot send in {:?}", self.state).red());
                }
            }
        }

        pub fn close(&mut self) {
            match self.state {
                TcpState::Established | TcpState::Listen => {
                    self.transition(TcpState::CloseWait);
                    self.transition(TcpState::Closed);
                }
                _ => println!("  [TCP] already closed"),
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- TCP Connection ---".green().bold());

        let mut conn = TcpConnection::new();
        conn.send("too early");
        conn.open();
        conn.send("GET /index.html");
        conn.send("GET /style.css");
        conn.close();
        conn.send("after close");
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Each state type encodes what is legal there; illegal ops fail loudly");
    println!("2. Transitions are return values, so the owner swaps states in one place");
    println!("3. Trait objects suit open-ended state sets; a plain enum suits a fixed");
    println!("   machine like TCP, and match makes missing transitions a compile error");
}

fn main() {
    println!("{}", "STATE PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    workflow::demonstrate();
    tcp::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::tcp::{TcpConnection, TcpState};
    use super::workflow::Document;

    #[test]
    fn drafts_are_editable_and_publishable() {
        let mut doc = Document::new();
        doc.edit("hello");
        assert_eq!(doc.content(), "hello");
        doc.publish();
        assert_eq!(doc.state_name(), "Published");
    }

    #[test]
    fn published_documents_reject_edits() {
        let mut doc = Document::new();
        doc.edit("v1");
        doc.publish();
        doc.edit(" sneaky change");
        assert_eq!(doc.content(), "v1");
        assert_eq!(doc.state_name(), "Published");
    }

    #[test]
    fn restore_returns_any_state_to_draft() {
        let mut doc = Document::new();
        doc.publish();
        doc.restore();
        assert_eq!(doc.state_name(), "Draft");

        doc.archive();
        assert_eq!(doc.state_name(), "Archived");
        doc.restore();
        assert_eq!(doc.state_name(), "Draft");
    }

    #[test]
    fn archived_documents_cannot_publish() {
        let mut doc = Document::new();
        doc.archive();
        doc.publish();
        assert_eq!(doc.state_name(), "Archived");
    }

    #[test]
    fn first_send_establishes_the_connection() {
        let mut conn = TcpConnection::new();
        conn.open();
        assert_eq!(conn.state(), TcpState::Listen);
        conn.send("hello");
        assert_eq!(conn.state(), TcpState::Established);
        assert_eq!(conn.sent, vec!["hello".to_string()]);
    }

    #[test]
    fn sends_outside_an_open_connection_are_dropped() {
        let mut conn = TcpConnection::new();
        conn.send("lost");
        assert!(conn.sent.is_empty());

        conn.open();
        conn.send("kept");
        conn.close();
        assert_eq!(conn.state(), TcpState::Closed);
        conn.send("also lost");
        assert_eq!(conn.sent.len(), 1);
    }
}
