//! Abstract Factory: create whole families of related objects
//!
//! Shows the mixed-family bug, the GUI factory that fixes it, and a second
//! worked example building database access objects per vendor.
//!
//! Run with: cargo run --bin creational_04_abstract_factory

use colored::Colorize;

// ============================================================================
// Problem: nothing stops mixing widgets from different families
// ============================================================================

mod problem_mixed_families {
    use colored::Colorize;

    pub struct WindowsButton;
    pub struct MacCheckbox;

    impl WindowsButton {
        pub fn render(&self) {
            println!("  [Windows] square button with system font");
        }
    }

    impl MacCheckbox {
        pub fn render(&self) {
            println!("  [Mac] rounded checkbox with aqua styling");
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Problem: Mixed Widget Families ---".yellow().bold());

        // Each widget is picked independently, so nothing enforces that
        // they belong to the same look and feel.
        let button = WindowsButton;
        let checkbox = MacCheckbox;

        button.render();
        checkbox.render();

        println!("  A Windows button next to a Mac checkbox: the UI is a patchwork\n");
    }
}

// ============================================================================
// Solution: a factory per family
// ============================================================================

mod gui_factory {
    use colored::Colorize;

    pub trait Button {
        fn render(&self);
    }

    pub trait Checkbox {
        fn render(&self);
        fn toggle(&self);
    }

    pub trait TextField {
        fn render(&self);
    }

    /// One method per product; one impl per family.
    pub trait GuiFactory {
        fn create_button(&self) -> Box<dyn Button>;
        fn create_checkbox(&self) -> Box<dyn Checkbox>;
        fn create_text_field(&self) -> Box<dyn TextField>;
        fn family(&self) -> &'static str;
    }

    macro_rules! widget {
        ($name:ident, $trait:ident, $line:expr) => {
            pub struct $name;
            impl $trait for $name {
                fn render(&self) {
                    println!("{}", $line);
                }
            }
        };
    }

    widget!(WindowsButton, Button, "  [Windows] button rendered");
    widget!(MacButton, Button, "  [Mac] button rendered");
    widget!(LinuxButton, Button, "  [Linux] button rendered");
    widget!(WindowsTextField, TextField, "  [Windows] text field rendered");
    widget!(MacTextField, TextField, "  [Mac] text field rendered");
    widget!(LinuxTextField, TextField, "  [Linux] text field rendered");

    pub struct WindowsCheckbox;
    pub struct MacCheckbox;
    pub struct LinuxCheckbox;

    impl Checkbox for WindowsCheckbox {
        fn render(&self) {
            println!("  [Windows] checkbox rendered");
        }
        fn toggle(&self) {
            println!("  [Windows] checkbox toggled with a click");
        }
    }

    impl Checkbox for MacCheckbox {
        fn render(&self) {
            println!("  [Mac] checkbox rendered");
        }
        fn toggle(&self) {
            println!("  [Mac] checkbox toggled with an animation");
        }
    }

    impl Checkbox for LinuxCheckbox {
        fn render(&self) {
            println!("  [Linux] checkbox rendered");
        }
        fn toggle(&self) {
            println!("  [Linux] checkbox toggled per theme settings");
        }
    }

    pub struct WindowsFactory;
    pub struct MacFactory;
    pub struct LinuxFactory;

    impl GuiFactory for WindowsFactory {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(WindowsButton)
        }
        fn create_checkbox(&self) -> Box<dyn Checkbox> {
            Box::new(WindowsCheckbox)
        }
        fn create_text_field(&self) -> Box<dyn TextField> {
            Box::new(WindowsTextField)
        }
        fn family(&self) -> &'static str {
            "windows"
        }
    }

    impl GuiFactory for MacFactory {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(MacButton)
        }
        fn create_checkbox(&self) -> Box<dyn Checkbox> {
            Box::new(MacCheckbox)
        }
        fn create_text_field(&self) -> Box<dyn TextField> {
            Box::new(MacTextField)
        }
        fn family(&self) -> &'static str {
            "mac"
        }
    }

    impl GuiFactory for LinuxFactory {
        fn create_button(&self) -> Box<dyn Button> {
            Box::new(LinuxButton)
        }
        fn create_checkbox(&self) -> Box<dyn Checkbox> {
            Box::new(LinuxCheckbox)
        }
        fn create_text_field(&self) -> Box<dyn TextField> {
            Box::new(LinuxTextField)
        }
        fn family(&self) -> &'static str {
            "linux"
        }
    }

    pub fn factory_for(platform: &str) -> Option<Box<dyn GuiFactory>> {
        match platform {
            "windows" => Some(Box::new(WindowsFactory)),
            "mac" => Some(Box::new(MacFactory)),
            "linux" => Some(Box::new(LinuxFactory)),
            _ => None,
        }
    }

    /// The client builds a complete form and never learns which family
    /// it is working with.
    pub struct Application {
        factory: Box<dyn GuiFactory>,
    }

    impl Application {
        pub fn new(factory: Box<dyn GuiFactory>) -> Self {
            Application { factory }
        }

        pub fn build_login_form(&self) {
            println!("  Building a login form in the {} family:", self.factory.family());
            self.factory.create_text_field().render();
            self.factory.create_checkbox().render();
            self.factory.create_button().render();
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: GUI Abstract Factory ---".green().bold());

        for platform in ["windows", "mac", "linux"] {
            if let Some(factory) = factory_for(platform) {
                let app = Application::new(factory);
                app.build_login_form();
            }
        }
        println!("  Every widget on a form now comes from one family\n");
    }
}

// ============================================================================
// Second example: a database access layer
// ============================================================================

mod database_access_layer {
    use colored::Colorize;

    pub trait Connection {
        fn connect(&self);
        fn vendor(&self) -> &'static str;
    }

    pub trait Command {
        fn execute(&self, sql: &str);
    }

    pub trait Transaction {
        fn begin(&self);
        fn commit(&self);
    }

    pub trait DatabaseFactory {
        fn create_connection(&self) -> Box<dyn Connection>;
        fn create_command(&self) -> Box<dyn Command>;
        fn create_transaction(&self) -> Box<dyn Transaction>;
    }

    macro_rules! vendor_family {
        ($conn:ident, $cmd:ident, $tx:ident, $factory:ident, $label:expr) => {
            pub struct $conn;
            pub struct $cmd;
            pub struct $tx;
            pub struct $factory;

            impl Connection for $conn {
                fn connect(&self) {
                    println!("  [{}] connection opened", $label);
                }
                fn vendor(&self) -> &'static str {
                    $label
                }
            }

            impl Command for $cmd {
                fn execute(&self, sql: &str) {
                    println!("  [{}] executing: {}", $label, sql);
                }
            }

            impl Transaction for $tx {
                fn begin(&self) {
                    println!("  [{}] BEGIN", $label);
                }
                fn commit(&self) {
                    println!("  [{}] COMMIT", $label);
                }
            }

            impl DatabaseFactory for $factory {
                fn create_connection(&self) -> Box<dyn Connection> {
                    Box::new($conn)
                }
                fn create_command(&self) -> Box<dyn Command> {
                    Box::new($cmd)
                }
                fn create_transaction(&self) -> Box<dyn Transaction> {
                    Box::new($tx)
                }
            }
        };
    }

    vendor_family!(
        MySqlConnection,
        MySqlCommand,
        MySqlTransaction,
        MySqlFactory,
        "mysql"
    );
    vendor_family!(
        PostgresConnection,
        PostgresCommand,
        PostgresTransaction,
        PostgresFactory,
        "postgresql"
    );
    vendor_family!(
        MongoConnection,
        MongoCommand,
        MongoTransaction,
        MongoFactory,
        "mongodb"
    );

    pub struct DataAccessLayer {
        factory: Box<dyn DatabaseFactory>,
    }

    impl DataAccessLayer {
        pub fn new(factory: Box<dyn DatabaseFactory>) -> Self {
            DataAccessLayer { factory }
        }

        pub fn perform_database_operations(&self) {
            let connection = self.factory.create_connection();
            let command = self.factory.create_command();
            let transaction = self.factory.create_transaction();

            connection.connect();
            transaction.begin();
            command.execute("INSERT INTO audit_log VALUES (...)");
            transaction.commit();
        }
    }

    pub fn factory_for(vendor: &str) -> Option<Box<dyn DatabaseFactory>> {
        match vendor {
            "mysql" => Some(Box::new(MySqlFactory)),
            "postgresql" => Some(Box::new(PostgresFactory)),
            "mongodb" => Some(Box::new(MongoFactory)),
            _ => None,
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Second Example: Database Access Layer ---".green().bold()
        );

        for vendor in ["mysql", "postgresql", "mongodb"] {
            println!("  Vendor: {}", vendor);
            if let Some(factory) = factory_for(vendor) {
                DataAccessLayer::new(factory).perform_database_operations();
            }
        }
        println!("  Connection, command and transaction always match the vendor\n");
    }
}

fn print_guidelines() {
    println!("{}", "=== Guidelines ===".cyan().bold());
    println!("1. Factory Method creates one product; Abstract Factory creates a family");
    println!("2. Reach for it when products must be used together consistently");
    println!("3. Adding a family is one new factory impl; adding a product kind");
    println!("   touches every factory, which is the pattern's known cost");
}

fn main() {
    println!("{}", "ABSTRACT FACTORY PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    problem_mixed_families::demonstrate();
    gui_factory::demonstrate();
    database_access_layer::demonstrate();

    print_guidelines();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::database_access_layer::{self, Connection, DatabaseFactory};
    use super::gui_factory::{factory_for, Button, Checkbox, GuiFactory, TextField};

    #[test]
    fn gui_factories_exist_for_known_platforms() {
        for platform in ["windows", "mac", "linux"] {
            let factory = factory_for(platform).expect("factory");
            assert_eq!(factory.family(), platform);
        }
        assert!(factory_for("solaris").is_none());
    }

    #[test]
    fn a_factory_creates_every_product_kind() {
        let factory = factory_for("mac").expect("mac factory");
        factory.create_button().render();
        factory.create_checkbox().toggle();
        factory.create_text_field().render();
    }

    #[test]
    fn database_connections_match_their_vendor() {
        for vendor in ["mysql", "postgresql", "mongodb"] {
            let factory = database_access_layer::factory_for(vendor).expect("factory");
            assert_eq!(factory.create_connection().vendor(), vendor);
        }
    }
}
