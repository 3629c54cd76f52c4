//! Factory Method: let subtypes decide what gets created
//!
//! Problem first (a client hard-wired to concrete button types), then the
//! factory-method solution, then a second worked example with documents.
//!
//! Run with: cargo run --bin creational_03_factory_method

use colored::Colorize;

// ============================================================================
// Problem: the client constructs concrete types itself
// ============================================================================

mod problem_tight_coupling {
    use colored::Colorize;

    pub struct WindowsButton;
    pub struct MacButton;

    impl WindowsButton {
        pub fn render(&self) {
            println!("  Rendering a Windows-style button");
        }
    }

    impl MacButton {
        pub fn render(&self) {
            println!("  Rendering a Mac-style button");
        }
    }

    pub fn run_application(platform: &str) {
        // Every new platform means another branch here, and in every other
        // place that creates buttons.
        if platform == "windows" {
            let button = WindowsButton;
            button.render();
        } else if platform == "mac" {
            let button = MacButton;
            button.render();
        } else {
            println!("  Unknown platform '{}', no button rendered", platform);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Problem: Tight Coupling ---".yellow().bold());
        run_application("windows");
        run_application("mac");
        run_application("linux");
        println!("  The client knows every concrete type and every branch\n");
    }
}

// ============================================================================
// Solution: dialogs create their own buttons
// ============================================================================

mod factory_method_solution {
    use colored::Colorize;

    pub trait Button {
        fn render(&self);
        fn on_click(&self);
    }

    pub struct WindowsButton;
    pub struct MacButton;
    pub struct LinuxButton;

    impl Button for WindowsButton {
        fn render(&self) {
            println!("  [Windows] drawing a rectangular button with sharp corners");
        }
        fn on_click(&self) {
            println!("  [Windows] click! *ding*");
        }
    }

    impl Button for MacButton {
        fn render(&self) {
            println!("  [Mac] drawing a rounded button with a subtle shadow");
        }
        fn on_click(&self) {
            println!("  [Mac] click! *pop*");
        }
    }

    impl Button for LinuxButton {
        fn render(&self) {
            println!("  [Linux] drawing a themed button from the desktop toolkit");
        }
        fn on_click(&self) {
            println!("  [Linux] click! *beep*");
        }
    }

    /// The factory method lives here. Rendering logic is shared; what to
    /// construct is deferred to each concrete dialog.
    pub trait Dialog {
        fn create_button(&self) -> Box<dyn Button>;

        fn render_window(&self) {
            println!("  Dialog frame drawn");
            let button = self.create_button();
            button.render();
            button.on_click();
        }
    }

    pub struct WindowsDialog;
    pub struct MacDialog;
    pub struct LinuxDialog;

    impl Dialog for WindowsDialog {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(WindowsButton)
        }
    }

    impl Dialog for MacDialog {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(MacButton)
        }
    }

    impl Dialog for LinuxDialog {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(LinuxButton)
        }
    }

    pub fn dialog_for(platform: &str) -> Option<Box<dyn Dialog>> {
        match platform {
            "windows" => Some(Box::new(WindowsDialog)),
            "mac" => Some(Box::new(MacDialog)),
            "linux" => Some(Box::new(LinuxDialog)),
            _ => None,
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: Factory Method ---".green().bold());
        for platform in ["windows", "mac", "linux"] {
            println!("  Platform: {}", platform);
            match dialog_for(platform) {
                Some(dialog) => dialog.render_window(),
                None => println!("  no dialog available"),
            }
        }
        println!("  Client code touches only the Dialog and Button traits\n");
    }
}

// ============================================================================
// Second example: a document editor
// ============================================================================

mod document_editor {
    use colored::Colorize;

    pub trait Document {
        fn open(&self);
        fn save(&self);
        fn kind(&self) -> &'static str;
    }

    pub struct PdfDocument;
    pub struct WordDocument;
    pub struct SpreadsheetDocument;

    impl Document for PdfDocument {
        fn open(&self) {
            println!("  Opening PDF viewer with embedded fonts");
        }
        fn save(&self) {
            println!("  Saving as .pdf");
        }
        fn kind(&self) -> &'static str {
            "pdf"
        }
    }

    impl Document for WordDocument {
        fn open(&self) {
            println!("  Opening word processor with ruler and toolbars");
        }
        fn save(&self) {
            println!("  Saving as .docx");
        }
        fn kind(&self) -> &'static str {
            "word"
        }
    }

    impl Document for SpreadsheetDocument {
        fn open(&self) {
            println!("  Opening spreadsheet grid with formula bar");
        }
        fn save(&self) {
            println!("  Saving as .xlsx");
        }
        fn kind(&self) -> &'static str {
            "spreadsheet"
        }
    }

    pub trait Application {
        fn create_document(&self) -> Box<dyn Document>;

        /// Template-ish client flow shared by every application kind.
        fn new_document(&self) -> Box<dyn Document> {
            let doc = self.create_document();
            doc.open();
            doc
        }
    }

    pub struct PdfApplication;
    pub struct WordApplication;
    pub struct SpreadsheetApplication;

    impl Application for PdfApplication {
        fn create_document(&self) -> Box<dyn Document> {
            Box::new(PdfDocument)
        }
    }

    impl Application for WordApplication {
        fn create_document(&self) -> Box<dyn Document> {
            Box::new(WordDocument)
        }
    }

    impl Application for SpreadsheetApplication {
        fn create_document(&self) -> Box<dyn Document> {
            Box::new(SpreadsheetDocument)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Second Example: Document Editor ---".green().bold());

        let apps: Vec<Box<dyn Application>> = vec![
            Box::new(PdfApplication),
            Box::new(WordApplication),
            Box::new(SpreadsheetApplication),
        ];

        for app in &apps {
            let doc = app.new_document();
            doc.save();
        }
        println!();
    }
}

fn print_guidelines() {
    println!("{}", "=== Guidelines ===".cyan().bold());
    println!("1. Use a factory method when a type cannot anticipate what it must create");
    println!("2. The creator owns the workflow; subtypes own the product choice");
    println!("3. New products mean new creator impls, never edits to client code");
    println!("4. In Rust the product is a trait object; the creator is a trait with");
    println!("   a default workflow method calling the abstract constructor");
}

fn main() {
    println!("{}", "FACTORY METHOD PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    problem_tight_coupling::demonstrate();
    factory_method_solution::demonstrate();
    document_editor::demonstrate();

    print_guidelines();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::document_editor::{
        Application, Document, PdfApplication, SpreadsheetApplication, WordApplication,
    };
    use super::factory_method_solution::{dialog_for, Button, Dialog};

    #[test]
    fn dialog_lookup_covers_known_platforms() {
        assert!(dialog_for("windows").is_some());
        assert!(dialog_for("mac").is_some());
        assert!(dialog_for("linux").is_some());
        assert!(dialog_for("beos").is_none());
    }

    #[test]
    fn each_dialog_creates_a_button() {
        let dialog = dialog_for("mac").expect("mac dialog");
        // The factory method returns a usable product.
        let button = dialog.create_button();
        button.render();
    }

    #[test]
    fn applications_create_matching_documents() {
        assert_eq!(PdfApplication.create_document().kind(), "pdf");
        assert_eq!(WordApplication.create_document().kind(), "word");
        assert_eq!(
            SpreadsheetApplication.create_document().kind(),
            "spreadsheet"
        );
    }
}
