//! Singleton (solution): one instance, one access point
//!
//! Four renditions: the modern `OnceLock` idiom, a configurable variant,
//! the older lock-guarded global via `lazy_static`, and a testable design
//! that hides the singleton behind a trait.
//!
//! Run with: cargo run --bin creational_02_singleton_solution

use colored::Colorize;

// ============================================================================
// Solution 1: Basic singleton with OnceLock
// ============================================================================

mod basic_singleton {
    use colored::Colorize;
    use std::sync::{Mutex, OnceLock};

    pub struct Logger {
        entries: Mutex<Vec<String>>,
    }

    impl Logger {
        /// Lazily created on first access, same instance ever after.
        pub fn instance() -> &'static Logger {
            static INSTANCE: OnceLock<Logger> = OnceLock::new();
            INSTANCE.get_or_init(|| {
                println!("  Creating the one and only Logger");
                Logger {
                    entries: Mutex::new(Vec::new()),
                }
            })
        }

        pub fn log(&self, message: &str) {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            entries.push(message.to_string());
            println!("  [app.log] {}", message);
        }

        pub fn entry_count(&self) -> usize {
            self.entries
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .len()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution 1: Basic Singleton ---".green().bold());

        // Three call sites, one instance. The addresses prove it.
        let auth_logger = Logger::instance();
        let payment_logger = Logger::instance();
        let api_logger = Logger::instance();

        auth_logger.log("User login succeeded");
        payment_logger.log("Payment of $49.99 captured");
        api_logger.log("GET /orders returned 200");

        println!(
            "  handle addresses: {:p} {:p} {:p}",
            auth_logger, payment_logger, api_logger
        );
        println!(
            "  shared history holds {} entries\n",
            auth_logger.entry_count()
        );
    }
}

// ============================================================================
// Solution 2: Configurable singleton
// ============================================================================

mod configurable_singleton {
    use colored::Colorize;
    use std::sync::{Mutex, OnceLock};

    pub struct DatabaseConnection {
        connection_string: String,
        queries_run: Mutex<u32>,
    }

    static CONNECTION: OnceLock<DatabaseConnection> = OnceLock::new();

    impl DatabaseConnection {
        /// First caller wins; later calls report that configuration is fixed.
        pub fn initialize(connection_string: &str) -> bool {
            let mut fresh = false;
            CONNECTION.get_or_init(|| {
                fresh = true;
                println!("  Connecting once to {}", connection_string);
                DatabaseConnection {
                    connection_string: connection_string.to_string(),
                    queries_run: Mutex::new(0),
                }
            });
            fresh
        }

        pub fn instance() -> Option<&'static DatabaseConnection> {
            CONNECTION.get()
        }

        pub fn execute_query(&self, sql: &str) {
            let mut count = self.queries_run.lock().unwrap_or_else(|e| e.into_inner());
            *count += 1;
            println!("  [{}] executing: {}", self.connection_string, sql);
        }

        pub fn query_count(&self) -> u32 {
            *self.queries_run.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Solution 2: Configurable Singleton ---".green().bold()
        );

        if !DatabaseConnection::initialize("localhost:5432/mydb") {
            println!("  already initialized, keeping the first configuration");
        }
        // A second initialize is ignored; the first configuration sticks.
        if !DatabaseConnection::initialize("localhost:5432/otherdb") {
            println!("  second initialize ignored, connection already configured");
        }

        if let Some(db) = DatabaseConnection::instance() {
            db.execute_query("SELECT * FROM users");
            db.execute_query("SELECT * FROM orders");
            println!("  queries run on the shared connection: {}\n", db.query_count());
        }
    }
}

// ============================================================================
// Solution 3: Lock-guarded global (the older idiom)
// ============================================================================

mod guarded_cache {
    use colored::Colorize;
    use lazy_static::lazy_static;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Before OnceLock landed in std, this was the standard way to get a
    // lazily initialized global. Kept here because plenty of codebases
    // still read like this.
    lazy_static! {
        static ref CACHE: Mutex<HashMap<String, String>> = Mutex::new(HashMap::new());
    }

    pub fn put(key: &str, value: &str) {
        let mut cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
        cache.insert(key.to_string(), value.to_string());
    }

    pub fn get(key: &str) -> Option<String> {
        let cache = CACHE.lock().unwrap_or_else(|e| e.into_inner());
        cache.get(key).cloned()
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Solution 3: Lock-Guarded Global Cache ---".green().bold()
        );

        put("user:1", "Alice");
        put("user:2", "Bob");

        match get("user:1") {
            Some(value) => println!("  cache hit: user:1 -> {}", value),
            None => println!("  cache miss: user:1"),
        }
        println!("  every module reaches the same cache through the same lock\n");
    }
}

// ============================================================================
// Solution 4: Testable singleton behind a trait
// ============================================================================

mod testable_singleton {
    use colored::Colorize;
    use std::cell::RefCell;

    /// Consumers depend on this trait, not on the concrete singleton.
    pub trait Log {
        fn log(&self, message: &str);
    }

    pub struct ProductionLogger;

    impl Log for ProductionLogger {
        fn log(&self, message: &str) {
            println!("  [app.log] {}", message);
        }
    }

    #[derive(Default)]
    pub struct MockLogger {
        pub messages: RefCell<Vec<String>>,
    }

    impl Log for MockLogger {
        fn log(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    pub struct UserService<'a> {
        logger: &'a dyn Log,
    }

    impl<'a> UserService<'a> {
        pub fn new(logger: &'a dyn Log) -> Self {
            UserService { logger }
        }

        pub fn register_user(&self, username: &str) {
            self.logger.log(&format!("registered user {}", username));
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Solution 4: Testable Singleton ---".green().bold()
        );

        let production = ProductionLogger;
        let service = UserService::new(&production);
        service.register_user("alice");

        let mock = MockLogger::default();
        let test_service = UserService::new(&mock);
        test_service.register_user("bob");
        println!(
            "  mock captured {} message(s) without touching the real log\n",
            mock.messages.borrow().len()
        );
    }
}

fn print_comparison() {
    println!("{}", "=== Before / After ===".cyan().bold());
    println!("{}", "Without Singleton:".red());
    println!("  - fragmented logs, duplicated connections, drifting config");
    println!("{}", "With Singleton:".green());
    println!("  - one instance created lazily, on first use");
    println!("  - a single access point every module shares");
    println!("  - configuration fixed at first initialization");
    println!("  - trait seam keeps consumers testable with mocks");
}

fn main() {
    println!("{}", "SINGLETON PATTERN: THE SOLUTION".cyan().bold());
    println!("{}", "=".repeat(70));

    basic_singleton::demonstrate();
    configurable_singleton::demonstrate();
    guarded_cache::demonstrate();
    testable_singleton::demonstrate();

    print_comparison();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use testable_singleton::{Log, MockLogger, UserService};

    #[test]
    fn logger_instance_is_shared() {
        let a = basic_singleton::Logger::instance();
        let b = basic_singleton::Logger::instance();
        assert!(std::ptr::eq(a, b));

        let before = a.entry_count();
        b.log("entry visible through either handle");
        assert_eq!(a.entry_count(), before + 1);
    }

    #[test]
    fn second_initialize_keeps_first_configuration() {
        let first = configurable_singleton::DatabaseConnection::initialize("localhost:5432/mydb");
        let second =
            configurable_singleton::DatabaseConnection::initialize("localhost:5432/otherdb");
        // Exactly one of the two calls performed the initialization.
        assert!(first || !second);
        assert!(configurable_singleton::DatabaseConnection::instance().is_some());
    }

    #[test]
    fn guarded_cache_is_shared_state() {
        guarded_cache::put("k", "v");
        assert_eq!(guarded_cache::get("k"), Some("v".to_string()));
        assert_eq!(guarded_cache::get("missing"), None);
    }

    #[test]
    fn mock_logger_records_messages() {
        let mock = MockLogger::default();
        let service = UserService::new(&mock);
        service.register_user("carol");
        service.register_user("dave");

        let messages = mock.messages.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("carol"));
    }

    #[test]
    fn production_logger_implements_the_trait() {
        // Compile-time check that the trait object seam works both ways.
        let logger: &dyn Log = &testable_singleton::ProductionLogger;
        logger.log("trait object dispatch");
    }
}
