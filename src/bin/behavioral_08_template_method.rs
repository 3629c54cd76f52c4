//! Template Method: fix the skeleton, vary the steps
//!
//! A data pipeline that reads, parses, validates, transforms, and writes;
//! report generators sharing one assembly order; and game characters whose
//! turns always analyze, calculate, execute, update.
//!
//! Run with: cargo run --bin behavioral_08_template_method

use colored::Colorize;

// ============================================================================
// Data pipeline: the trait's default method is the template
// ============================================================================

mod pipeline {
    use colored::Colorize;

    pub trait DataProcessor {
        fn format_name(&self) -> &'static str;

        // Steps subclasses must supply.
        fn parse(&self, raw: &str) -> Vec<String>;
        fn transform(&self, records: Vec<String>) -> Vec<String>;

        // Steps with sensible defaults.
        fn read(&self, source: &str) -> String {
            println!("  [{}] reading {}", self.format_name(), source);
            source.to_string()
        }

        fn validate(&self, records: &[String]) -> bool {
            println!("  [{}] validating {} record(s)", self.format_name(), records.len());
            !records.is_empty()
        }

        fn output(&self, records: &[String]) {
            for record in records {
                println!("  [{}] out: {}", self.format_name(), record);
            }
        }

        /// Optional hook; runs before parsing, does nothing by default.
        fn before_parse(&self) {}

        /// The template. Callers only ever invoke this.
        fn process(&self, source: &str) -> Option<Vec<String>> {
            let raw = self.read(source);
            self.before_parse();
            let records = self.parse(&raw);
            if !self.validate(&records) {
                println!("{}", format!("  [{}] validation failed, aborting", self.format_name()).red());
                return None;
            }
            let transformed = self.transform(records);
            self.output(&transformed);
            Some(transformed)
        }
    }

    pub struct CsvProcessor;

    impl DataProcessor for CsvProcessor {
        fn format_name(&self) -> &'static str {
            "CSV"
        }

        fn before_parse(&self) {
            println!("  [CSV] checking for BOM marker");
        }

        fn parse(&self, raw: &str) -> Vec<String> {
            raw.split(',').map(|f| f.trim().to_string()).collect()
        }

        fn transform(&self, records: Vec<String>) -> Vec<String> {
            records.into_iter().map(|r| r.to_uppercase()).collect()
        }
    }

    pub struct JsonProcessor;

    impl DataProcessor for JsonProcessor {
        fn format_name(&self) -> &'static str {
            "JSON"
        }

        fn parse(&self, raw: &str) -> Vec<String> {
            raw.trim_matches(|c| c == '[' || c == ']')
                .split(',')
                .map(|f| f.trim().trim_matches('"').to_string())
                .collect()
        }

        fn transform(&self, records: Vec<String>) -> Vec<String> {
            records
                .into_iter()
                .map(|r| format!("{{\"value\": \"{}\"}}", r))
                .collect()
        }
    }

    pub struct XmlProcessor;

    impl DataProcessor for XmlProcessor {
        fn format_name(&self) -> &'static str {
            "XML"
        }

        fn before_parse(&self) {
            println!("  [XML] validating DTD");
        }

        fn parse(&self, raw: &str) -> Vec<String> {
            raw.split("</item>")
                .filter_map(|chunk| chunk.split("<item>").nth(1))
                .map(|s| s.to_string())
                .collect()
        }

        fn transform(&self, records: Vec<String>) -> Vec<String> {
            records
                .into_iter()
                .map(|r| format!("<record>{}</record>", r))
                .collect()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Data Pipeline ---".green().bold());

        CsvProcessor.process("alice, bob, carol");
        JsonProcessor.process("[\"alice\", \"bob\"]");
        XmlProcessor.process("<item>alice</item><item>bob</item>");
        println!();
    }
}

// ============================================================================
// Reports: header, content, footer in a fixed order
// ============================================================================

mod reports {
    use colored::Colorize;

    pub trait Report {
        fn header(&self, title: &str) -> String;
        fn content(&self, body: &str) -> String;
        fn footer(&self) -> String;

        fn generate(&self, title: &str, body: &str) -> String {
            // Assembly order never varies.
            format!("{}\n{}\n{}", self.header(title), self.content(body), self.footer())
        }
    }

    pub struct HtmlReport;

    impl Report for HtmlReport {
        fn header(&self, title: &str) -> String {
            format!("<html><head><title>{}</title></head><body>", title)
        }

        fn content(&self, body: &str) -> String {
            format!("<p>{}</p>", body)
        }

        fn footer(&self) -> String {
            "</body></html>".to_string()
        }
    }

    pub struct PdfReport;

    impl Report for PdfReport {
        fn header(&self, title: &str) -> String {
            format!("%PDF | Title: {}", title)
        }

        fn content(&self, body: &str) -> String {
            format!("| {}", body)
        }

        fn footer(&self) -> String {
            "| end of document".to_string()
        }
    }

    pub struct PlainTextReport;

    impl Report for PlainTextReport {
        fn header(&self, title: &str) -> String {
            format!("{}\n{}", title, "=".repeat(title.len()))
        }

        fn content(&self, body: &str) -> String {
            body.to_string()
        }

        fn footer(&self) -> String {
            "-- end --".to_string()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Report Generators ---".green().bold());

        let title = "Sales Report Q1";
        let body = "Total revenue: $100,000";

        for (label, report) in [
            ("html", Box::new(HtmlReport) as Box<dyn Report>),
            ("pdf", Box::new(PdfReport)),
            ("text", Box::new(PlainTextReport)),
        ] {
            println!("  {} version:", label);
            for line in report.generate(title, body).lines() {
                println!("    {}", line);
            }
        }
        println!();
    }
}

// ============================================================================
// Game AI: every turn runs the same four phases
// ============================================================================

mod game_ai {
    use colored::Colorize;

    pub trait Character {
        fn name(&self) -> &'static str;

        fn analyze(&self) {
            println!("  [{}] scanning the battlefield", self.name());
        }

        fn calculate(&self) -> String;

        fn execute(&self, action: &str) {
            println!("  [{}] {}", self.name(), action);
        }

        fn update(&self) {
            println!("  [{}] awaiting next turn", self.name());
        }

        fn take_turn(&self) -> String {
            self.analyze();
            let action = self.calculate();
            self.execute(&action);
            self.update();
            action
        }
    }

    pub struct Goblin;

    impl Character for Goblin {
        fn name(&self) -> &'static str {
            "Goblin"
        }

        fn calculate(&self) -> String {
            "slashes wildly at the nearest enemy".to_string()
        }
    }

    pub struct Wizard {
        pub mana: u32,
    }

    impl Wizard {
        pub const FIREBALL_COST: u32 = 30;
    }

    impl Character for Wizard {
        fn name(&self) -> &'static str {
            "Wizard"
        }

        fn calculate(&self) -> String {
            if self.mana >= Self::FIREBALL_COST {
                format!("casts Fireball ({} mana remaining)", self.mana - Self::FIREBALL_COST)
            } else {
                "swings a staff, out of mana".to_string()
            }
        }
    }

    pub struct Dragon;

    impl Character for Dragon {
        fn name(&self) -> &'static str {
            "Dragon"
        }

        fn calculate(&self) -> String {
            "breathes fire across the whole field".to_string()
        }

        fn update(&self) {
            println!("  [Dragon] Recovering from fire breath");
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Game AI Turns ---".green().bold());

        Goblin.take_turn();
        Wizard { mana: 50 }.take_turn();
        Wizard { mana: 10 }.take_turn();
        Dragon.take_turn();
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The template lives in a default trait method; callers invoke only it");
    println!("2. Required steps are abstract, optional ones default, hooks do nothing");
    println!("3. The step order is fixed in one place and cannot drift per format");
}

fn main() {
    println!("{}", "TEMPLATE METHOD PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    pipeline::demonstrate();
    reports::demonstrate();
    game_ai::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::game_ai::{Character, Dragon, Goblin, Wizard};
    use super::pipeline::{CsvProcessor, DataProcessor, JsonProcessor, XmlProcessor};
    use super::reports::{HtmlReport, PlainTextReport, Report};

    #[test]
    fn csv_pipeline_runs_every_step() {
        let result = CsvProcessor.process("alice, bob, carol");
        assert_eq!(
            result,
            Some(vec![
                "ALICE".to_string(),
                "BOB".to_string(),
                "CAROL".to_string()
            ])
        );
    }

    #[test]
    fn json_pipeline_wraps_records() {
        let result = JsonProcessor.process("[\"alice\", \"bob\"]");
        assert_eq!(
            result,
            Some(vec![
                "{\"value\": \"alice\"}".to_string(),
                "{\"value\": \"bob\"}".to_string()
            ])
        );
    }

    #[test]
    fn xml_pipeline_extracts_items() {
        let result = XmlProcessor.process("<item>alice</item><item>bob</item>");
        assert_eq!(
            result,
            Some(vec![
                "<record>alice</record>".to_string(),
                "<record>bob</record>".to_string()
            ])
        );
    }

    #[test]
    fn empty_input_fails_validation() {
        assert_eq!(XmlProcessor.process("no items here"), None);
    }

    #[test]
    fn reports_assemble_in_header_content_footer_order() {
        let html = HtmlReport.generate("Sales Report Q1", "Total revenue: $100,000");
        assert!(html.starts_with("<html><head><title>Sales Report Q1"));
        assert!(html.contains("<p>Total revenue: $100,000</p>"));
        assert!(html.ends_with("</body></html>"));

        let text = PlainTextReport.generate("Sales Report Q1", "Total revenue: $100,000");
        let underline = "=".repeat("Sales Report Q1".len());
        assert!(text.starts_with(&format!("Sales Report Q1\n{}", underline)));
        assert!(text.ends_with("-- end --"));
    }

    #[test]
    fn wizard_falls_back_when_out_of_mana() {
        assert!(Wizard { mana: 50 }.take_turn().contains("Fireball"));
        assert!(Wizard { mana: 10 }.take_turn().contains("out of mana"));
    }

    #[test]
    fn every_character_completes_a_turn() {
        assert!(!Goblin.take_turn().is_empty());
        assert!(Dragon.take_turn().contains("fire"));
    }
}
