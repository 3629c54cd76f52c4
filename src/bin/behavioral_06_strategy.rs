//! Strategy: swap the algorithm without touching the caller
//!
//! Sorting strategies picked at runtime, payment methods behind one checkout
//! flow, and compression formats behind one archiver.
//!
//! Run with: cargo run --bin behavioral_06_strategy

use colored::Colorize;

// ============================================================================
// Sorting: the context runs whichever strategy it holds
// ============================================================================

mod sorting {
    use colored::Colorize;

    pub trait SortStrategy {
        fn name(&self) -> &'static str;

        /// Returns the number of comparisons performed.
        fn sort(&self, data: &mut [i32]) -> usize;
    }

    pub struct QuickSort;

    impl QuickSort {
        fn quicksort(data: &mut [i32], comparisons: &mut usize) {
            if data.len() <= 1 {
                return;
            }
            let pivot_index = Self::partition(data, comparisons);
            let (left, right) = data.split_at_mut(pivot_index);
            Self::quicksort(left, comparisons);
            Self::quicksort(&mut right[1..], comparisons);
        }

        fn partition(data: &mut [i32], comparisons: &mut usize) -> usize {
            let pivot = data[data.len() - 1];
            let mut store = 0;
            for i in 0..data.len() - 1 {
                *comparisons += 1;
                if data[i] <= pivot {
                    data.swap(i, store);
                    store += 1;
                }
            }
            data.swap(store, data.len() - 1);
            store
        }
    }

    impl SortStrategy for QuickSort {
        fn name(&self) -> &'static str {
            "QuickSort"
        }

        fn sort(&self, data: &mut [i32]) -> usize {
            let mut comparisons = 0;
            Self::quicksort(data, &mut comparisons);
            comparisons
        }
    }

    pub struct MergeSort;

    impl MergeSort {
        fn mergesort(data: &mut Vec<i32>, comparisons: &mut usize) {
            if data.len() <= 1 {
                return;
            }
            let mid = data.len() / 2;
            let mut left: Vec<i32> = data[..mid].to_vec();
            let mut right: Vec<i32> = data[mid..].to_vec();
            Self::mergesort(&mut left, comparisons);
            Self::mergesort(&mut right, comparisons);

            let (mut i, mut j) = (0, 0);
            data.clear();
            while i < left.len() && j < right.len() {
                *comparisons += 1;
                if left[i] <= right[j] {
                    data.push(left[i]);
                    i += 1;
                } else {
                    data.push(right[j]);
                    j += 1;
                }
            }
            data.extend_from_slice(&left[i..]);
            data.extend_from_slice(&right[j..]);
        }
    }

    impl SortStrategy for MergeSort {
        fn name(&self) -> &'static str {
            "MergeSort"
        }

        fn sort(&self, data: &mut [i32]) -> usize {
            let mut comparisons = 0;
            let mut buffer = data.to_vec();
            Self::mergesort(&mut buffer, &mut comparisons);
            data.copy_from_slice(&buffer);
            comparisons
        }
    }

    pub struct SortContext {
        strategy: Option<Box<dyn SortStrategy>>,
        data: Vec<i32>,
    }

    impl SortContext {
        pub fn new() -> Self {
            SortContext {
                strategy: None,
                data: Vec::new(),
            }
        }

        pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
            println!("  strategy set to {}", strategy.name());
            self.strategy = Some(strategy);
        }

        pub fn add_data(&mut self, values: &[i32]) {
            self.data.extend_from_slice(values);
        }

        pub fn data(&self) -> &[i32] {
            &self.data
        }

        pub fn sort(&mut self) -> Option<usize> {
            match &self.strategy {
                Some(strategy) => {
                    let comparisons = strategy.sort(&mut self.data);
                    println!("  {} used {} comparisons", strategy.name(), comparisons);
                    Some(comparisons)
                }
                None => {
                    println!("{}", "  ERROR: No sorting strategy set".red());
                    None
                }
            }
        }

        pub fn print(&self, label: &str) {
            println!("  {}: {:?}", label, self.data);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Sorting Strategies ---".green().bold());

        let mut context = SortContext::new();
        context.add_data(&[64, 34, 25, 12, 22, 11, 90]);
        context.print("input");

        context.sort(); // no strategy yet

        context.set_strategy(Box::new(QuickSort));
        context.sort();
        context.print("sorted");

        // Same context, different algorithm, no client changes.
        let mut context = SortContext::new();
        context.add_data(&[64, 34, 25, 12, 22, 11, 90]);
        context.set_strategy(Box::new(MergeSort));
        context.sort();
        context.print("sorted");
        println!();
    }
}

// ============================================================================
// Payments: one checkout, many methods
// ============================================================================

mod payments {
    use colored::Colorize;

    pub trait PaymentStrategy {
        fn pay(&self, amount: f64) -> String;
    }

    pub struct CreditCard {
        number: String,
        cvv: String,
    }

    impl CreditCard {
        pub fn new(number: &str, cvv: &str) -> Self {
            CreditCard {
                number: number.to_string(),
                cvv: cvv.to_string(),
            }
        }

        fn masked(&self) -> String {
            let last4: String = self
                .number
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect::<String>()
                .chars()
                .rev()
                .take(4)
                .collect::<String>()
                .chars()
                .rev()
                .collect();
            format!("****-****-****-{}", last4)
        }
    }

    impl PaymentStrategy for CreditCard {
        fn pay(&self, amount: f64) -> String {
            let receipt = format!(
                "${:.2} charged to card {} (cvv {} verified)",
                amount,
                self.masked(),
                "*".repeat(self.cvv.len())
            );
            println!("  [card] {}", receipt);
            receipt
        }
    }

    pub struct PayPal {
        email: String,
    }

    impl PayPal {
        pub fn new(email: &str) -> Self {
            PayPal {
                email: email.to_string(),
            }
        }
    }

    impl PaymentStrategy for PayPal {
        fn pay(&self, amount: f64) -> String {
            let receipt = format!("${:.2} sent via PayPal account {}", amount, self.email);
            println!("  [paypal] {}", receipt);
            receipt
        }
    }

    pub struct Bitcoin {
        wallet: String,
    }

    impl Bitcoin {
        /// Demo exchange rate, not market data.
        pub const USD_PER_BTC: f64 = 45_000.0;

        pub fn new(wallet: &str) -> Self {
            Bitcoin {
                wallet: wallet.to_string(),
            }
        }
    }

    impl PaymentStrategy for Bitcoin {
        fn pay(&self, amount: f64) -> String {
            let btc = amount / Self::USD_PER_BTC;
            let receipt = format!("{:.6} BTC sent to wallet {}", btc, self.wallet);
            println!("  [bitcoin] {}", receipt);
            receipt
        }
    }

    pub struct ShoppingCart {
        items: Vec<(String, f64)>,
    }

    impl ShoppingCart {
        pub fn new() -> Self {
            ShoppingCart { items: Vec::new() }
        }

        pub fn add_item(&mut self, name: &str, price: f64) {
            self.items.push((name.to_string(), price));
        }

        pub fn total(&self) -> f64 {
            self.items.iter().map(|(_, price)| price).sum()
        }

        pub fn checkout(&self, method: &dyn PaymentStrategy) -> String {
            println!("  checking out {} item(s), total ${:.2}", self.items.len(), self.total());
            method.pay(self.total())
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Payment Methods ---".green().bold());

        let mut cart = ShoppingCart::new();
        cart.add_item("mechanical keyboard", 29.99);
        cart.add_item("ergonomic mouse", 49.99);

        cart.checkout(&CreditCard::new("4532-1234-5678-9010", "123"));
        cart.checkout(&PayPal::new("user@example.com"));
        cart.checkout(&Bitcoin::new("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"));
        println!();
    }
}

// ============================================================================
// Compression: formats behind one archiver
// ============================================================================

mod compression {
    use colored::Colorize;

    pub trait CompressionStrategy {
        fn label(&self) -> &'static str;
        fn compress(&self, file: &str) -> String;
    }

    pub struct Zip;

    impl CompressionStrategy for Zip {
        fn label(&self) -> &'static str {
            "ZIP"
        }

        fn compress(&self, file: &str) -> String {
            format!("{}.zip", file)
        }
    }

    pub struct Gzip;

    impl CompressionStrategy for Gzip {
        fn label(&self) -> &'static str {
            "GZIP"
        }

        fn compress(&self, file: &str) -> String {
            format!("{}.gz", file)
        }
    }

    pub struct FileArchiver {
        strategy: Box<dyn CompressionStrategy>,
    }

    impl FileArchiver {
        pub fn new(strategy: Box<dyn CompressionStrategy>) -> Self {
            FileArchiver { strategy }
        }

        pub fn set_strategy(&mut self, strategy: Box<dyn CompressionStrategy>) {
            self.strategy = strategy;
        }

        pub fn archive(&self, file: &str) -> String {
            let output = self.strategy.compress(file);
            println!("  [{}] {} -> {}", self.strategy.label(), file, output);
            output
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Compression Formats ---".green().bold());

        let mut archiver = FileArchiver::new(Box::new(Zip));
        archiver.archive("document.pdf");

        archiver.set_strategy(Box::new(Gzip));
        archiver.archive("data.csv");
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The context delegates to a trait object and never branches on kind");
    println!("2. Strategies swap at runtime; the missing-strategy case is explicit");
    println!("3. New algorithms are new types, not new arms in an if/else ladder");
}

fn main() {
    println!("{}", "STRATEGY PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    sorting::demonstrate();
    payments::demonstrate();
    compression::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::compression::{CompressionStrategy, FileArchiver, Gzip, Zip};
    use super::payments::{Bitcoin, CreditCard, PayPal, PaymentStrategy, ShoppingCart};
    use super::sorting::{MergeSort, QuickSort, SortContext, SortStrategy};

    #[test]
    fn both_sorts_agree_on_the_result() {
        let input = [64, 34, 25, 12, 22, 11, 90];
        let expected = vec![11, 12, 22, 25, 34, 64, 90];

        let mut quick = input.to_vec();
        QuickSort.sort(&mut quick);
        assert_eq!(quick, expected);

        let mut merge = input.to_vec();
        MergeSort.sort(&mut merge);
        assert_eq!(merge, expected);
    }

    #[test]
    fn context_refuses_to_sort_without_a_strategy() {
        let mut context = SortContext::new();
        context.add_data(&[3, 1, 2]);
        assert_eq!(context.sort(), None);
        assert_eq!(context.data(), &[3, 1, 2]);

        context.set_strategy(Box::new(QuickSort));
        assert!(context.sort().is_some());
        assert_eq!(context.data(), &[1, 2, 3]);
    }

    #[test]
    fn credit_card_receipt_masks_all_but_the_last_four() {
        let receipt = CreditCard::new("4532-1234-5678-9010", "123").pay(10.0);
        assert!(receipt.contains("****-****-****-9010"));
        assert!(!receipt.contains("4532"));
        assert!(!receipt.contains("123"));
    }

    #[test]
    fn bitcoin_converts_at_the_fixed_rate() {
        let receipt = Bitcoin::new("wallet").pay(45_000.0);
        assert!(receipt.contains("1.000000 BTC"));
    }

    #[test]
    fn cart_totals_and_checks_out_with_any_method() {
        let mut cart = ShoppingCart::new();
        cart.add_item("a", 29.99);
        cart.add_item("b", 49.99);
        assert!((cart.total() - 79.98).abs() < 1e-9);

        let receipt = cart.checkout(&PayPal::new("user@example.com"));
        assert!(receipt.contains("$79.98"));
        assert!(receipt.contains("user@example.com"));
    }

    #[test]
    fn archiver_swaps_formats_at_runtime() {
        let mut archiver = FileArchiver::new(Box::new(Zip));
        assert_eq!(archiver.archive("document.pdf"), "document.pdf.zip");

        archiver.set_strategy(Box::new(Gzip));
        assert_eq!(archiver.archive("data.csv"), "data.csv.gz");
    }

    #[test]
    fn strategies_name_themselves() {
        assert_eq!(Zip.label(), "ZIP");
        assert_eq!(Gzip.label(), "GZIP");
    }
}
