//! Singleton (problem): what goes wrong without instantiation control
//!
//! Five small scenarios where a class that should exist exactly once
//! gets created freely, and the inconsistencies that follow.
//!
//! Run with: cargo run --bin creational_01_singleton_problem

use colored::Colorize;

// ============================================================================
// Scenario 1: Multiple logger instances that do not share state
// ============================================================================

mod uncontrolled_loggers {
    use colored::Colorize;

    pub struct Logger {
        log_file: String,
        entries: Vec<String>,
    }

    impl Logger {
        pub fn new() -> Self {
            println!("  Creating a new Logger writing to app.log");
            Logger {
                log_file: "app.log".to_string(),
                entries: Vec::new(),
            }
        }

        pub fn log(&mut self, message: &str) {
            self.entries.push(message.to_string());
            println!("  [{}] {}", self.log_file, message);
        }

        pub fn entry_count(&self) -> usize {
            self.entries.len()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Problem 1: Multiple Loggers ---".yellow().bold());

        // Every component builds its own logger. All of them believe they
        // own app.log, yet none of them sees the others' entries.
        let mut auth_logger = Logger::new();
        let mut payment_logger = Logger::new();
        let mut api_logger = Logger::new();

        auth_logger.log("User login succeeded");
        payment_logger.log("Payment of $49.99 captured");
        api_logger.log("GET /orders returned 200");

        println!(
            "  auth sees {} entries, payment sees {}, api sees {}",
            auth_logger.entry_count(),
            payment_logger.entry_count(),
            api_logger.entry_count()
        );
        println!("  No single logger holds the full application history!\n");
    }
}

// ============================================================================
// Scenario 2: Duplicated database connections
// ============================================================================

mod duplicated_connections {
    use colored::Colorize;

    pub struct DatabaseConnection {
        connection_string: String,
    }

    impl DatabaseConnection {
        pub fn new() -> Self {
            println!("  Opening connection to localhost:5432/mydb (expensive!)");
            DatabaseConnection {
                connection_string: "localhost:5432/mydb".to_string(),
            }
        }

        pub fn query(&self, sql: &str) {
            println!("  [{}] executing: {}", self.connection_string, sql);
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Problem 2: Duplicated Connections ---".yellow().bold()
        );

        // Three call sites, three sockets, three handshakes. The database
        // now tracks three sessions doing the work of one.
        let user_repo_conn = DatabaseConnection::new();
        let order_repo_conn = DatabaseConnection::new();
        let report_conn = DatabaseConnection::new();

        user_repo_conn.query("SELECT * FROM users");
        order_repo_conn.query("SELECT * FROM orders");
        report_conn.query("SELECT count(*) FROM orders");

        println!("  Three connections opened where one would do\n");
    }
}

// ============================================================================
// Scenario 3: Configuration copies that drift apart
// ============================================================================

mod inconsistent_config {
    use colored::Colorize;

    #[derive(Clone)]
    pub struct AppConfig {
        pub environment: String,
        pub max_connections: u32,
        pub debug_mode: bool,
    }

    impl AppConfig {
        pub fn load() -> Self {
            AppConfig {
                environment: "production".to_string(),
                max_connections: 100,
                debug_mode: false,
            }
        }

        pub fn describe(&self, owner: &str) {
            println!(
                "  [{}] env={} max_connections={} debug={}",
                owner, self.environment, self.max_connections, self.debug_mode
            );
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Problem 3: Inconsistent Configuration ---".yellow().bold()
        );

        let server_config = AppConfig::load();
        let mut worker_config = AppConfig::load();

        // The worker flips debug mode on its private copy. The server never
        // hears about it, and the two halves of the app now disagree.
        worker_config.debug_mode = true;
        worker_config.max_connections = 10;

        server_config.describe("server");
        worker_config.describe("worker");
        println!("  Two components, two versions of the truth\n");
    }
}

// ============================================================================
// Scenario 4: A spooler anyone can instantiate
// ============================================================================

mod uncontrolled_spooler {
    use colored::Colorize;

    pub struct PrintSpooler {
        queue: Vec<String>,
    }

    impl PrintSpooler {
        pub fn new() -> Self {
            PrintSpooler { queue: Vec::new() }
        }

        pub fn submit(&mut self, job: &str) {
            self.queue.push(job.to_string());
            println!("  Queued job: {} (queue length {})", job, self.queue.len());
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Problem 4: No Instantiation Control ---".yellow().bold()
        );

        // Two spoolers fight over one physical printer. Jobs interleave in
        // whatever order the spoolers flush them.
        let mut spooler_a = PrintSpooler::new();
        let mut spooler_b = PrintSpooler::new();

        spooler_a.submit("quarterly_report.pdf");
        spooler_b.submit("invoice_0042.pdf");
        spooler_a.submit("team_photo.png");

        println!("  Two queues exist for one printer; ordering is anyone's guess\n");
    }
}

// ============================================================================
// Scenario 5: A raw global with uncontrolled access
// ============================================================================

mod global_cache {
    use colored::Colorize;
    use std::collections::HashMap;

    pub struct CacheManager {
        entries: HashMap<String, String>,
    }

    impl CacheManager {
        pub fn new() -> Self {
            CacheManager {
                entries: HashMap::new(),
            }
        }

        pub fn put(&mut self, key: &str, value: &str) {
            self.entries.insert(key.to_string(), value.to_string());
        }

        pub fn get(&self, key: &str) -> Option<&String> {
            self.entries.get(key)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Problem 5: Raw Global State ---".yellow().bold());

        // The C++ rendition of this mistake is a mutable global variable.
        // Rust refuses to compile that without unsafe, which is already the
        // lesson: a bare global invites races and hidden coupling. Here the
        // "global" is passed around by hand instead.
        let mut cache = CacheManager::new();
        cache.put("user:1", "Alice");
        cache.put("user:2", "Bob");

        match cache.get("user:1") {
            Some(value) => println!("  cache hit: user:1 -> {}", value),
            None => println!("  cache miss: user:1"),
        }
        println!("  Any module could mutate or replace this cache at will\n");
    }
}

fn print_problems_summary() {
    println!("{}", "=== Why this hurts ===".red().bold());
    println!("1. Loggers: application history is fragmented across instances");
    println!("2. Connections: expensive resources duplicated per call site");
    println!("3. Config: copies drift and components disagree");
    println!("4. Spooler: nothing stops a second queue for one device");
    println!("5. Cache: global mutable state with no access discipline");
    println!();
    println!(
        "{}",
        "The Singleton pattern addresses all five: one instance,".green()
    );
    println!(
        "{}",
        "created once, reached through a single controlled access point.".green()
    );
}

fn main() {
    println!("{}", "SINGLETON PATTERN: THE PROBLEM".cyan().bold());
    println!("{}", "=".repeat(70));

    uncontrolled_loggers::demonstrate();
    duplicated_connections::demonstrate();
    inconsistent_config::demonstrate();
    uncontrolled_spooler::demonstrate();
    global_cache::demonstrate();

    print_problems_summary();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separate_loggers_do_not_share_entries() {
        let mut a = uncontrolled_loggers::Logger::new();
        let mut b = uncontrolled_loggers::Logger::new();
        a.log("only in a");
        assert_eq!(a.entry_count(), 1);
        assert_eq!(b.entry_count(), 0);
        b.log("only in b");
        assert_eq!(a.entry_count(), 1);
        assert_eq!(b.entry_count(), 1);
    }

    #[test]
    fn config_copies_drift_independently() {
        let original = inconsistent_config::AppConfig::load();
        let mut copy = original.clone();
        copy.debug_mode = true;
        copy.max_connections = 10;
        assert!(!original.debug_mode);
        assert_eq!(original.max_connections, 100);
        assert!(copy.debug_mode);
        assert_eq!(copy.max_connections, 10);
    }

    #[test]
    fn cache_returns_stored_values() {
        let mut cache = global_cache::CacheManager::new();
        cache.put("user:1", "Alice");
        assert_eq!(cache.get("user:1"), Some(&"Alice".to_string()));
        assert_eq!(cache.get("user:9"), None);
    }
}
