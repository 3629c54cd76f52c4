//! Composite: treat single objects and groups uniformly
//!
//! A file-system tree, a UI widget tree propagating render calls, and an
//! org chart summing payroll recursively.
//!
//! Run with: cargo run --bin structural_03_composite

use colored::Colorize;

// ============================================================================
// File system: files and directories behind one trait
// ============================================================================

mod file_system {
    use colored::Colorize;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    pub enum CompositeError {
        #[error("'{0}' is a file and cannot contain children")]
        NotAContainer(String),
    }

    pub trait FsComponent {
        fn name(&self) -> &str;
        fn size_kb(&self) -> u64;
        fn display(&self, indent: usize);

        /// Leaves reject children; only Directory overrides this.
        fn add(&mut self, child: Box<dyn FsComponent>) -> Result<(), CompositeError> {
            drop(child);
            Err(CompositeError::NotAContainer(self.name().to_string()))
        }
    }

    pub struct File {
        name: String,
        size_kb: u64,
    }

    impl File {
        pub fn new(name: &str, size_kb: u64) -> Self {
            File {
                name: name.to_string(),
                size_kb,
            }
        }
    }

    impl FsComponent for File {
        fn name(&self) -> &str {
            &self.name
        }

        fn size_kb(&self) -> u64 {
            self.size_kb
        }

        fn display(&self, indent: usize) {
            println!("{}{} ({} KB)", "  ".repeat(indent), self.name, self.size_kb);
        }
    }

    pub struct Directory {
        name: String,
        children: Vec<Box<dyn FsComponent>>,
    }

    impl Directory {
        pub fn new(name: &str) -> Self {
            Directory {
                name: name.to_string(),
                children: Vec::new(),
            }
        }
    }

    impl FsComponent for Directory {
        fn name(&self) -> &str {
            &self.name
        }

        fn size_kb(&self) -> u64 {
            self.children.iter().map(|c| c.size_kb()).sum()
        }

        fn display(&self, indent: usize) {
            println!("{}[{}]", "  ".repeat(indent), self.name);
            for child in &self.children {
                child.display(indent + 1);
            }
        }

        fn add(&mut self, child: Box<dyn FsComponent>) -> Result<(), CompositeError> {
            self.children.push(child);
            Ok(())
        }
    }

    pub fn build_sample_tree() -> Result<Directory, CompositeError> {
        let mut documents = Directory::new("documents");
        documents.add(Box::new(File::new("resume.pdf", 120)))?;
        documents.add(Box::new(File::new("notes.txt", 4)))?;

        let mut photos = Directory::new("photos");
        photos.add(Box::new(File::new("beach.jpg", 2048)))?;
        photos.add(Box::new(File::new("mountain.jpg", 3072)))?;

        let mut home = Directory::new("home");
        home.add(Box::new(documents))?;
        home.add(Box::new(photos))?;
        home.add(Box::new(File::new("todo.md", 1)))?;
        Ok(home)
    }

    pub fn demonstrate() {
        println!("{}", "--- File System Composite ---".green().bold());

        match build_sample_tree() {
            Ok(home) => {
                home.display(1);
                println!("  total size: {} KB", home.size_kb());
            }
            Err(e) => println!("  failed to build tree: {}", e),
        }

        // Structural misuse is an error value, not a crash.
        let mut file = File::new("plain.txt", 1);
        if let Err(e) = file.add(Box::new(File::new("child.txt", 1))) {
            println!("  rejected: {}", e);
        }
        println!();
    }
}

// ============================================================================
// UI tree: events propagate through composites
// ============================================================================

mod ui_tree {
    use colored::Colorize;

    pub trait Widget {
        fn render(&self, indent: usize);
        fn count_leaves(&self) -> usize;
    }

    pub struct Button {
        pub label: String,
    }

    pub struct TextBox {
        pub placeholder: String,
    }

    pub struct Panel {
        pub title: String,
        children: Vec<Box<dyn Widget>>,
    }

    impl Widget for Button {
        fn render(&self, indent: usize) {
            println!("{}<button> {}", "  ".repeat(indent), self.label);
        }
        fn count_leaves(&self) -> usize {
            1
        }
    }

    impl Widget for TextBox {
        fn render(&self, indent: usize) {
            println!("{}<textbox> {}", "  ".repeat(indent), self.placeholder);
        }
        fn count_leaves(&self) -> usize {
            1
        }
    }

    impl Panel {
        pub fn new(title: &str) -> Self {
            Panel {
                title: title.to_string(),
                children: Vec::new(),
            }
        }

        pub fn add(&mut self, child: Box<dyn Widget>) {
            self.children.push(child);
        }
    }

    impl Widget for Panel {
        fn render(&self, indent: usize) {
            println!("{}<panel> {}", "  ".repeat(indent), self.title);
            for child in &self.children {
                child.render(indent + 1);
            }
        }

        fn count_leaves(&self) -> usize {
            self.children.iter().map(|c| c.count_leaves()).sum()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- UI Widget Tree ---".green().bold());

        let mut login_panel = Panel::new("login");
        login_panel.add(Box::new(TextBox {
            placeholder: "username".to_string(),
        }));
        login_panel.add(Box::new(TextBox {
            placeholder: "password".to_string(),
        }));
        login_panel.add(Box::new(Button {
            label: "Sign in".to_string(),
        }));

        let mut window = Panel::new("main window");
        window.add(Box::new(login_panel));
        window.add(Box::new(Button {
            label: "Help".to_string(),
        }));

        // One render call walks the whole tree.
        window.render(1);
        println!("  leaf widgets rendered: {}\n", window.count_leaves());
    }
}

// ============================================================================
// Org chart: payroll over a hierarchy
// ============================================================================

mod org_chart {
    use colored::Colorize;

    pub trait OrgMember {
        fn describe(&self, indent: usize);
        fn total_payroll(&self) -> u64;
    }

    pub struct IndividualContributor {
        pub name: String,
        pub title: String,
        pub salary: u64,
    }

    pub struct Manager {
        pub name: String,
        pub title: String,
        pub salary: u64,
        reports: Vec<Box<dyn OrgMember>>,
    }

    impl IndividualContributor {
        pub fn new(name: &str, title: &str, salary: u64) -> Self {
            IndividualContributor {
                name: name.to_string(),
                title: title.to_string(),
                salary,
            }
        }
    }

    impl Manager {
        pub fn new(name: &str, title: &str, salary: u64) -> Self {
            Manager {
                name: name.to_string(),
                title: title.to_string(),
                salary,
                reports: Vec::new(),
            }
        }

        pub fn add_report(&mut self, report: Box<dyn OrgMember>) {
            self.reports.push(report);
        }
    }

    impl OrgMember for IndividualContributor {
        fn describe(&self, indent: usize) {
            println!(
                "{}{} - {} (${})",
                "  ".repeat(indent),
                self.name,
                self.title,
                self.salary
            );
        }

        fn total_payroll(&self) -> u64 {
            self.salary
        }
    }

    impl OrgMember for Manager {
        fn describe(&self, indent: usize) {
            println!(
                "{}{} - {} (${}), manages {}",
                "  ".repeat(indent),
                self.name,
                self.title,
                self.salary,
                self.reports.len()
            );
            for report in &self.reports {
                report.describe(indent + 1);
            }
        }

        fn total_payroll(&self) -> u64 {
            self.salary + self.reports.iter().map(|r| r.total_payroll()).sum::<u64>()
        }
    }

    pub fn build_company() -> Manager {
        let mut cto = Manager::new("Bob", "CTO", 150_000);
        cto.add_report(Box::new(IndividualContributor::new(
            "Charlie",
            "Senior Developer",
            120_000,
        )));
        cto.add_report(Box::new(IndividualContributor::new(
            "Diana",
            "Developer",
            90_000,
        )));

        let mut cfo = Manager::new("Eve", "CFO", 150_000);
        cfo.add_report(Box::new(IndividualContributor::new(
            "Frank",
            "Accountant",
            70_000,
        )));

        let mut ceo = Manager::new("Alice", "CEO", 200_000);
        ceo.add_report(Box::new(cto));
        ceo.add_report(Box::new(cfo));
        ceo
    }

    pub fn demonstrate() {
        println!("{}", "--- Org Chart Payroll ---".green().bold());

        let company = build_company();
        company.describe(1);
        println!("  total payroll: ${}\n", company.total_payroll());
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Leaves and composites share one trait; clients never branch on which");
    println!("2. Recursive operations (size, render, payroll) fall out of the shape");
    println!("3. Adding a child to a leaf returns an error rather than panicking");
}

fn main() {
    println!("{}", "COMPOSITE PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    file_system::demonstrate();
    ui_tree::demonstrate();
    org_chart::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::file_system::{build_sample_tree, CompositeError, File, FsComponent};
    use super::org_chart::{build_company, OrgMember};
    use super::ui_tree::{Button, Panel, Widget};

    #[test]
    fn directory_size_is_recursive_sum() {
        let home = build_sample_tree().expect("tree");
        // 120 + 4 + 2048 + 3072 + 1
        assert_eq!(home.size_kb(), 5245);
    }

    #[test]
    fn adding_to_a_file_is_an_error() {
        let mut file = File::new("plain.txt", 1);
        let err = file.add(Box::new(File::new("child.txt", 1))).unwrap_err();
        assert_eq!(err, CompositeError::NotAContainer("plain.txt".to_string()));
    }

    #[test]
    fn panel_counts_nested_leaves() {
        let mut inner = Panel::new("inner");
        inner.add(Box::new(Button {
            label: "a".to_string(),
        }));
        inner.add(Box::new(Button {
            label: "b".to_string(),
        }));

        let mut outer = Panel::new("outer");
        outer.add(Box::new(inner));
        outer.add(Box::new(Button {
            label: "c".to_string(),
        }));

        assert_eq!(outer.count_leaves(), 3);
    }

    #[test]
    fn payroll_sums_the_whole_hierarchy() {
        let company = build_company();
        // 200k + 150k + 120k + 90k + 150k + 70k
        assert_eq!(company.total_payroll(), 780_000);
    }
}
