//! Visitor: new operations over a fixed object structure
//!
//! Tax and deduction calculators visit a portfolio of income sources, and a
//! size calculator walks a file tree. The element types stay closed while
//! operations keep arriving.
//!
//! Run with: cargo run --bin behavioral_09_visitor

use colored::Colorize;

// ============================================================================
// Income sources: double dispatch picks the right visit method
// ============================================================================

mod incomes {
    use colored::Colorize;

    pub struct SalaryIncome {
        pub annual: f64,
    }

    pub struct InvestmentIncome {
        pub gains: f64,
    }

    pub struct BusinessIncome {
        pub profit: f64,
    }

    pub trait IncomeVisitor {
        fn visit_salary(&mut self, income: &SalaryIncome);
        fn visit_investment(&mut self, income: &InvestmentIncome);
        fn visit_business(&mut self, income: &BusinessIncome);
    }

    pub trait Income {
        fn accept(&self, visitor: &mut dyn IncomeVisitor);
    }

    impl Income for SalaryIncome {
        fn accept(&self, visitor: &mut dyn IncomeVisitor) {
            visitor.visit_salary(self);
        }
    }

    impl Income for InvestmentIncome {
        fn accept(&self, visitor: &mut dyn IncomeVisitor) {
            visitor.visit_investment(self);
        }
    }

    impl Income for BusinessIncome {
        fn accept(&self, visitor: &mut dyn IncomeVisitor) {
            visitor.visit_business(self);
        }
    }

    /// Flat demo brackets, one rate per income kind.
    #[derive(Default)]
    pub struct TaxCalculator {
        pub total_tax: f64,
    }

    impl IncomeVisitor for TaxCalculator {
        fn visit_salary(&mut self, income: &SalaryIncome) {
            let tax = income.annual * 0.20;
            println!("  salary ${:.0} taxed at 20% = ${:.0}", income.annual, tax);
            self.total_tax += tax;
        }

        fn visit_investment(&mut self, income: &InvestmentIncome) {
            let tax = income.gains * 0.15;
            println!("  investment ${:.0} taxed at 15% = ${:.0}", income.gains, tax);
            self.total_tax += tax;
        }

        fn visit_business(&mut self, income: &BusinessIncome) {
            let tax = income.profit * 0.25;
            println!("  business ${:.0} taxed at 25% = ${:.0}", income.profit, tax);
            self.total_tax += tax;
        }
    }

    /// A second operation added without touching the income types.
    #[derive(Default)]
    pub struct DeductionCalculator {
        pub total_deduction: f64,
    }

    impl IncomeVisitor for DeductionCalculator {
        fn visit_salary(&mut self, income: &SalaryIncome) {
            let deduction = income.annual * 0.05;
            println!("  salary deduction 5% = ${:.0}", deduction);
            self.total_deduction += deduction;
        }

        fn visit_investment(&mut self, income: &InvestmentIncome) {
            let deduction = income.gains * 0.03;
            println!("  investment deduction 3% = ${:.0}", deduction);
            self.total_deduction += deduction;
        }

        fn visit_business(&mut self, income: &BusinessIncome) {
            let deduction = income.profit * 0.10;
            println!("  business deduction 10% = ${:.0}", deduction);
            self.total_deduction += deduction;
        }
    }

    pub fn sample_portfolio() -> Vec<Box<dyn Income>> {
        vec![
            Box::new(SalaryIncome { annual: 100_000.0 }),
            Box::new(InvestmentIncome { gains: 50_000.0 }),
            Box::new(BusinessIncome { profit: 200_000.0 }),
        ]
    }

    pub fn demonstrate() {
        println!("{}", "--- Income Portfolio ---".green().bold());

        let portfolio = sample_portfolio();

        let mut taxes = TaxCalculator::default();
        for income in &portfolio {
            income.accept(&mut taxes);
        }
        println!("  total tax: ${:.0}", taxes.total_tax);

        let mut deductions = DeductionCalculator::default();
        for income in &portfolio {
            income.accept(&mut deductions);
        }
        println!("  total deductions: ${:.0}\n", deductions.total_deduction);
    }
}

// ============================================================================
// File tree: one visitor walks files and directories
// ============================================================================

mod file_tree {
    use colored::Colorize;

    pub enum Entry {
        File { name: String, size: u64 },
        Directory { name: String, children: Vec<Entry> },
    }

    impl Entry {
        pub fn file(name: &str, size: u64) -> Self {
            Entry::File {
                name: name.to_string(),
                size,
            }
        }

        pub fn dir(name: &str, children: Vec<Entry>) -> Self {
            Entry::Directory {
                name: name.to_string(),
                children,
            }
        }

        pub fn accept(&self, visitor: &mut dyn TreeVisitor, depth: usize) {
            match self {
                Entry::File { name, size } => visitor.visit_file(name, *size, depth),
                Entry::Directory { name, children } => {
                    visitor.visit_directory(name, depth);
                    for child in children {
                        child.accept(visitor, depth + 1);
                    }
                }
            }
        }
    }

    pub trait TreeVisitor {
        fn visit_file(&mut self, name: &str, size: u64, depth: usize);
        fn visit_directory(&mut self, name: &str, depth: usize);
    }

    #[derive(Default)]
    pub struct SizeCalculator {
        pub total_bytes: u64,
    }

    impl TreeVisitor for SizeCalculator {
        fn visit_file(&mut self, name: &str, size: u64, depth: usize) {
            println!("  {}{} ({} bytes)", "  ".repeat(depth), name, size);
            self.total_bytes += size;
        }

        fn visit_directory(&mut self, name: &str, depth: usize) {
            println!("  {}{}/", "  ".repeat(depth), name);
        }
    }

    #[derive(Default)]
    pub struct FileCounter {
        pub files: usize,
        pub directories: usize,
    }

    impl TreeVisitor for FileCounter {
        fn visit_file(&mut self, _name: &str, _size: u64, _depth: usize) {
            self.files += 1;
        }

        fn visit_directory(&mut self, _name: &str, _depth: usize) {
            self.directories += 1;
        }
    }

    pub fn sample_tree() -> Entry {
        Entry::dir(
            "root",
            vec![
                Entry::dir(
                    "documents",
                    vec![
                        Entry::file("report.doc", 5_000),
                        Entry::file("notes.txt", 2_000),
                    ],
                ),
                Entry::dir(
                    "images",
                    vec![
                        Entry::file("photo1.jpg", 2_000_000),
                        Entry::file("photo2.jpg", 1_800_000),
                    ],
                ),
                Entry::file("readme.txt", 3_000),
            ],
        )
    }

    pub fn demonstrate() {
        println!("{}", "--- File Tree Size ---".green().bold());

        let tree = sample_tree();

        let mut sizes = SizeCalculator::default();
        tree.accept(&mut sizes, 0);
        println!("  total: {} bytes", sizes.total_bytes);

        let mut counter = FileCounter::default();
        tree.accept(&mut counter, 0);
        println!(
            "  {} file(s) in {} directorie(s)\n",
            counter.files, counter.directories
        );
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. accept() turns the element's concrete type into the right visit call");
    println!("2. New operations are new visitors; element types never change");
    println!("3. Visitors carry their own accumulator state between visits");
    println!("4. With a closed element set, a Rust enum plus match is often simpler");
}

fn main() {
    println!("{}", "VISITOR PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    incomes::demonstrate();
    file_tree::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::file_tree::{sample_tree, FileCounter, SizeCalculator};
    use super::incomes::{sample_portfolio, DeductionCalculator, Income, TaxCalculator};

    #[test]
    fn tax_visitor_applies_the_per_kind_rates() {
        let mut taxes = TaxCalculator::default();
        for income in &sample_portfolio() {
            income.accept(&mut taxes);
        }
        // 20% of 100k + 15% of 50k + 25% of 200k
        assert_eq!(taxes.total_tax, 77_500.0);
    }

    #[test]
    fn deduction_visitor_runs_over_the_same_portfolio() {
        let mut deductions = DeductionCalculator::default();
        for income in &sample_portfolio() {
            income.accept(&mut deductions);
        }
        // 5% of 100k + 3% of 50k + 10% of 200k
        assert_eq!(deductions.total_deduction, 26_500.0);
    }

    #[test]
    fn size_visitor_totals_every_file() {
        let mut sizes = SizeCalculator::default();
        sample_tree().accept(&mut sizes, 0);
        assert_eq!(sizes.total_bytes, 3_810_000);
    }

    #[test]
    fn counter_visitor_sees_files_and_directories() {
        let mut counter = FileCounter::default();
        sample_tree().accept(&mut counter, 0);
        assert_eq!(counter.files, 5);
        assert_eq!(counter.directories, 3);
    }
}
