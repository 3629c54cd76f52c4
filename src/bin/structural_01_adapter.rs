//! Adapter: make an old interface fit a new one
//!
//! A legacy payment processor adapted to a modern gateway trait, plus a
//! logger adapter mapping a friendly API onto a numeric-level backend.
//!
//! Run with: cargo run --bin structural_01_adapter

use colored::Colorize;

// ============================================================================
// The legacy code nobody is allowed to touch
// ============================================================================

mod legacy {
    pub struct LegacyPaymentProcessor;

    impl LegacyPaymentProcessor {
        pub fn process_payment_old_way(&self, account: &str, cents: u64) -> bool {
            println!(
                "  [legacy] wiring {} cents from account '{}' through the 2004 codepath",
                cents, account
            );
            true
        }

        pub fn verify_account_old_way(&self, account: &str) -> bool {
            println!("  [legacy] verifying '{}' against the mainframe", account);
            !account.is_empty()
        }
    }
}

// ============================================================================
// Problem: the new checkout cannot call the legacy shape directly
// ============================================================================

mod problem_incompatible {
    use super::legacy::LegacyPaymentProcessor;
    use colored::Colorize;

    pub fn demonstrate() {
        println!("{}", "--- Problem: Incompatible Interfaces ---".yellow().bold());

        // The new code thinks in authorize/charge with dollar amounts. The
        // legacy processor speaks account strings and integer cents. Every
        // call site does its own ad-hoc conversion.
        let processor = LegacyPaymentProcessor;
        let dollars = 49.99_f64;
        let cents = (dollars * 100.0).round() as u64;

        if processor.verify_account_old_way("ACC-1001") {
            processor.process_payment_old_way("ACC-1001", cents);
        }
        println!("  conversion logic duplicated wherever payments happen\n");
    }
}

// ============================================================================
// Solution: an adapter implements the target trait
// ============================================================================

mod payment_adapter {
    use super::legacy::LegacyPaymentProcessor;
    use colored::Colorize;

    /// What the new checkout code expects.
    pub trait PaymentGateway {
        fn authorize(&self, account: &str) -> bool;
        fn charge(&self, account: &str, amount_dollars: f64) -> bool;
    }

    /// Object adapter: owns the legacy processor and translates calls.
    pub struct LegacyProcessorAdapter {
        inner: LegacyPaymentProcessor,
    }

    impl LegacyProcessorAdapter {
        pub fn new(inner: LegacyPaymentProcessor) -> Self {
            LegacyProcessorAdapter { inner }
        }
    }

    impl PaymentGateway for LegacyProcessorAdapter {
        fn authorize(&self, account: &str) -> bool {
            self.inner.verify_account_old_way(account)
        }

        fn charge(&self, account: &str, amount_dollars: f64) -> bool {
            let cents = (amount_dollars * 100.0).round() as u64;
            self.inner.process_payment_old_way(account, cents)
        }
    }

    /// A modern gateway that happens to match the trait natively.
    pub struct StripeGateway;

    impl PaymentGateway for StripeGateway {
        fn authorize(&self, account: &str) -> bool {
            println!("  [stripe] tokenizing account '{}'", account);
            true
        }

        fn charge(&self, account: &str, amount_dollars: f64) -> bool {
            println!("  [stripe] charging '{}' ${:.2}", account, amount_dollars);
            true
        }
    }

    /// Client code written against the trait only.
    pub struct CheckoutService<'a> {
        gateway: &'a dyn PaymentGateway,
    }

    impl<'a> CheckoutService<'a> {
        pub fn new(gateway: &'a dyn PaymentGateway) -> Self {
            CheckoutService { gateway }
        }

        pub fn checkout(&self, account: &str, amount_dollars: f64) -> bool {
            if !self.gateway.authorize(account) {
                println!("  checkout declined: account failed authorization");
                return false;
            }
            self.gateway.charge(account, amount_dollars)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: Payment Adapter ---".green().bold());

        let adapted = LegacyProcessorAdapter::new(LegacyPaymentProcessor);
        let stripe = StripeGateway;

        println!("  checkout against the adapted legacy processor:");
        CheckoutService::new(&adapted).checkout("ACC-1001", 49.99);

        println!("  identical checkout code against a modern gateway:");
        CheckoutService::new(&stripe).checkout("ACC-1001", 49.99);
        println!();
    }
}

// ============================================================================
// Second example: logger adapter
// ============================================================================

mod logger_adapter {
    use colored::Colorize;
    use std::cell::RefCell;

    /// Third-party crate surface we cannot change: one method, numeric levels.
    pub struct ThirdPartyLogger {
        pub written: RefCell<Vec<(u8, String)>>,
    }

    impl ThirdPartyLogger {
        pub fn new() -> Self {
            ThirdPartyLogger {
                written: RefCell::new(Vec::new()),
            }
        }

        pub fn write_log(&self, level: u8, message: &str) {
            self.written.borrow_mut().push((level, message.to_string()));
            println!("  [vendor] level={} {}", level, message);
        }
    }

    /// The API the rest of the application wants.
    pub trait AppLog {
        fn log_info(&self, message: &str);
        fn log_error(&self, message: &str);
    }

    pub struct LoggerAdapter {
        backend: ThirdPartyLogger,
    }

    impl LoggerAdapter {
        pub fn new(backend: ThirdPartyLogger) -> Self {
            LoggerAdapter { backend }
        }

        pub fn backend(&self) -> &ThirdPartyLogger {
            &self.backend
        }
    }

    impl AppLog for LoggerAdapter {
        fn log_info(&self, message: &str) {
            self.backend.write_log(1, message);
        }

        fn log_error(&self, message: &str) {
            self.backend.write_log(3, message);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Second Example: Logger Adapter ---".green().bold());

        let logger = LoggerAdapter::new(ThirdPartyLogger::new());
        logger.log_info("cache warmed in 120ms");
        logger.log_error("payment provider timeout");
        println!("  friendly names in, vendor levels out\n");
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The adapter implements the interface clients want and delegates");
    println!("   to the interface that exists");
    println!("2. Conversion lives in exactly one place");
    println!("3. Adapted legacy code and native implementations are");
    println!("   interchangeable behind the same trait");
}

fn main() {
    println!("{}", "ADAPTER PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    problem_incompatible::demonstrate();
    payment_adapter::demonstrate();
    logger_adapter::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::legacy::LegacyPaymentProcessor;
    use super::logger_adapter::{AppLog, LoggerAdapter, ThirdPartyLogger};
    use super::payment_adapter::{CheckoutService, LegacyProcessorAdapter, PaymentGateway};

    #[test]
    fn adapter_translates_dollars_to_the_legacy_call() {
        let adapter = LegacyProcessorAdapter::new(LegacyPaymentProcessor);
        assert!(adapter.authorize("ACC-1001"));
        assert!(adapter.charge("ACC-1001", 49.99));
    }

    #[test]
    fn checkout_declines_unverifiable_accounts() {
        let adapter = LegacyProcessorAdapter::new(LegacyPaymentProcessor);
        let service = CheckoutService::new(&adapter);
        // The legacy verifier rejects empty account ids.
        assert!(!service.checkout("", 10.0));
        assert!(service.checkout("ACC-7", 10.0));
    }

    #[test]
    fn logger_adapter_maps_levels() {
        let adapter = LoggerAdapter::new(ThirdPartyLogger::new());
        adapter.log_info("hello");
        adapter.log_error("boom");

        let written = adapter.backend().written.borrow();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0], (1, "hello".to_string()));
        assert_eq!(written[1], (3, "boom".to_string()));
    }
}
