//! Decorator: stack behavior onto an object at runtime
//!
//! Coffee condiments that add cost, data-stream wrappers that transform
//! writes, and notifiers that fan out across channels.
//!
//! Run with: cargo run --bin structural_04_decorator

use colored::Colorize;

// ============================================================================
// Coffee: every condiment wraps and adds to the bill
// ============================================================================

mod coffee {
    use colored::Colorize;

    pub trait Beverage {
        fn description(&self) -> String;
        fn cost(&self) -> f64;
    }

    pub struct SimpleCoffee;

    impl Beverage for SimpleCoffee {
        fn description(&self) -> String {
            "Simple coffee".to_string()
        }
        fn cost(&self) -> f64 {
            2.00
        }
    }

    macro_rules! condiment {
        ($name:ident, $label:expr, $price:expr) => {
            pub struct $name {
                inner: Box<dyn Beverage>,
            }

            impl $name {
                pub fn wrap(inner: Box<dyn Beverage>) -> Box<dyn Beverage> {
                    Box::new($name { inner })
                }
            }

            impl Beverage for $name {
                fn description(&self) -> String {
                    format!("{} + {}", self.inner.description(), $label)
                }
                fn cost(&self) -> f64 {
                    self.inner.cost() + $price
                }
            }
        };
    }

    condiment!(Milk, "milk", 0.50);
    condiment!(Sugar, "sugar", 0.20);
    condiment!(WhippedCream, "whipped cream", 0.70);
    condiment!(Caramel, "caramel", 0.60);

    pub fn demonstrate() {
        println!("{}", "--- Coffee Condiments ---".green().bold());

        let plain: Box<dyn Beverage> = Box::new(SimpleCoffee);
        println!("  {} -> ${:.2}", plain.description(), plain.cost());

        let latte = Milk::wrap(Box::new(SimpleCoffee));
        println!("  {} -> ${:.2}", latte.description(), latte.cost());

        let dessert = Caramel::wrap(WhippedCream::wrap(Sugar::wrap(Milk::wrap(Box::new(
            SimpleCoffee,
        )))));
        println!("  {} -> ${:.2}", dessert.description(), dessert.cost());
        println!("  each layer adds its own price; no subclass per combination\n");
    }
}

// ============================================================================
// Data streams: writes pass through transforming layers
// ============================================================================

mod streams {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub trait DataStream {
        fn write(&mut self, data: &str);
    }

    /// Terminal stream: records what finally "hits disk".
    pub struct FileStream {
        pub written: Rc<RefCell<Vec<String>>>,
    }

    impl FileStream {
        pub fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
            let written = Rc::new(RefCell::new(Vec::new()));
            (
                FileStream {
                    written: Rc::clone(&written),
                },
                written,
            )
        }
    }

    impl DataStream for FileStream {
        fn write(&mut self, data: &str) {
            println!("  [file] writing {} bytes", data.len());
            self.written.borrow_mut().push(data.to_string());
        }
    }

    pub struct CompressionStream {
        inner: Box<dyn DataStream>,
    }

    impl CompressionStream {
        pub fn new(inner: Box<dyn DataStream>) -> Self {
            CompressionStream { inner }
        }
    }

    impl DataStream for CompressionStream {
        fn write(&mut self, data: &str) {
            let compressed = format!("[COMPRESSED:{}]", data);
            println!("  [compress] {} -> {} bytes", data.len(), compressed.len());
            self.inner.write(&compressed);
        }
    }

    pub struct EncryptionStream {
        inner: Box<dyn DataStream>,
    }

    impl EncryptionStream {
        pub fn new(inner: Box<dyn DataStream>) -> Self {
            EncryptionStream { inner }
        }
    }

    impl DataStream for EncryptionStream {
        fn write(&mut self, data: &str) {
            let encrypted = format!("[ENCRYPTED:{}]", data);
            println!("  [encrypt] sealing {} bytes", data.len());
            self.inner.write(&encrypted);
        }
    }

    /// Buffers writes and flushes once 100 bytes accumulate.
    pub struct BufferingStream {
        inner: Box<dyn DataStream>,
        buffer: String,
    }

    impl BufferingStream {
        pub fn new(inner: Box<dyn DataStream>) -> Self {
            BufferingStream {
                inner,
                buffer: String::new(),
            }
        }

        pub fn flush(&mut self) {
            if !self.buffer.is_empty() {
                println!("  [buffer] flushing {} bytes", self.buffer.len());
                let pending = std::mem::take(&mut self.buffer);
                self.inner.write(&pending);
            }
        }
    }

    impl DataStream for BufferingStream {
        fn write(&mut self, data: &str) {
            self.buffer.push_str(data);
            println!("  [buffer] holding {} bytes", self.buffer.len());
            if self.buffer.len() >= 100 {
                self.flush();
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Data Stream Layers ---".green().bold());

        let (file, written) = FileStream::new();
        let mut pipeline = EncryptionStream::new(Box::new(CompressionStream::new(Box::new(file))));

        pipeline.write("quarterly sales figures");
        println!(
            "  stored on disk: {}",
            written.borrow().first().map(String::as_str).unwrap_or("")
        );

        let (file2, _written2) = FileStream::new();
        let mut buffered = BufferingStream::new(Box::new(file2));
        buffered.write(&"x".repeat(40));
        buffered.write(&"y".repeat(40));
        buffered.write(&"z".repeat(40)); // crosses the 100-byte threshold
        println!();
    }
}

// ============================================================================
// Notifiers: each decorator adds a channel
// ============================================================================

mod notifiers {
    use colored::Colorize;

    pub trait Notifier {
        fn send(&self, message: &str) -> Vec<String>;
    }

    pub struct BasicNotifier;

    impl Notifier for BasicNotifier {
        fn send(&self, message: &str) -> Vec<String> {
            println!("  [inbox] {}", message);
            vec!["inbox".to_string()]
        }
    }

    macro_rules! channel {
        ($name:ident, $label:expr) => {
            pub struct $name {
                inner: Box<dyn Notifier>,
            }

            impl $name {
                pub fn wrap(inner: Box<dyn Notifier>) -> Box<dyn Notifier> {
                    Box::new($name { inner })
                }
            }

            impl Notifier for $name {
                fn send(&self, message: &str) -> Vec<String> {
                    let mut channels = self.inner.send(message);
                    println!("  [{}] {}", $label, message);
                    channels.push($label.to_string());
                    channels
                }
            }
        };
    }

    channel!(EmailNotifier, "email");
    channel!(SmsNotifier, "sms");
    channel!(SlackNotifier, "slack");

    pub fn demonstrate() {
        println!("{}", "--- Notifier Stacking ---".green().bold());

        let all_channels =
            SlackNotifier::wrap(SmsNotifier::wrap(EmailNotifier::wrap(Box::new(BasicNotifier))));
        let reached = all_channels.send("production deploy finished");
        println!("  delivered via: {}\n", reached.join(", "));
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Decorators implement the component trait and hold a boxed inner");
    println!("2. Cost, formatting, and channels compose layer by layer, in order");
    println!("3. Combinations are built at runtime; no type per combination exists");
}

fn main() {
    println!("{}", "DECORATOR PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    coffee::demonstrate();
    streams::demonstrate();
    notifiers::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::coffee::{Beverage, Caramel, Milk, SimpleCoffee, Sugar, WhippedCream};
    use super::notifiers::{BasicNotifier, EmailNotifier, Notifier, SlackNotifier, SmsNotifier};
    use super::streams::{
        BufferingStream, CompressionStream, DataStream, EncryptionStream, FileStream,
    };

    #[test]
    fn condiment_costs_accumulate_linearly() {
        let drink = Caramel::wrap(WhippedCream::wrap(Sugar::wrap(Milk::wrap(Box::new(
            SimpleCoffee,
        )))));
        // 2.00 + 0.50 + 0.20 + 0.70 + 0.60
        assert!((drink.cost() - 4.00).abs() < 1e-9);
    }

    #[test]
    fn description_reflects_wrapping_order() {
        let drink = Sugar::wrap(Milk::wrap(Box::new(SimpleCoffee)));
        assert_eq!(drink.description(), "Simple coffee + milk + sugar");
    }

    #[test]
    fn stream_layers_apply_inside_out() {
        let (file, written) = FileStream::new();
        let mut pipeline =
            EncryptionStream::new(Box::new(CompressionStream::new(Box::new(file))));
        pipeline.write("data");

        let stored = written.borrow();
        assert_eq!(stored.as_slice(), ["[COMPRESSED:[ENCRYPTED:data]]"]);
    }

    #[test]
    fn buffering_flushes_at_threshold() {
        let (file, written) = FileStream::new();
        let mut buffered = BufferingStream::new(Box::new(file));

        buffered.write(&"a".repeat(60));
        assert!(written.borrow().is_empty());

        buffered.write(&"b".repeat(60)); // 120 bytes total, crosses 100
        assert_eq!(written.borrow().len(), 1);
        assert_eq!(written.borrow()[0].len(), 120);
    }

    #[test]
    fn explicit_flush_drains_the_buffer() {
        let (file, written) = FileStream::new();
        let mut buffered = BufferingStream::new(Box::new(file));
        buffered.write("short");
        buffered.flush();
        assert_eq!(written.borrow().as_slice(), ["short"]);
    }

    #[test]
    fn every_notifier_layer_fires() {
        let stack =
            SlackNotifier::wrap(SmsNotifier::wrap(EmailNotifier::wrap(Box::new(BasicNotifier))));
        let channels = stack.send("hello");
        assert_eq!(channels, ["inbox", "email", "sms", "slack"]);
    }
}
