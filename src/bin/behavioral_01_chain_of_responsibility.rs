//! Chain of Responsibility: pass a request along until someone handles it
//!
//! Support tickets escalate through tiers, log records fan through a chain
//! of sinks, and expense reports climb the approval ladder.
//!
//! Run with: cargo run --bin behavioral_01_chain_of_responsibility

use colored::Colorize;

// ============================================================================
// Support tickets: each tier handles one severity
// ============================================================================

mod support {
    use colored::Colorize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Severity {
        Low,
        Medium,
        High,
        Critical,
    }

    pub struct Ticket {
        pub id: String,
        pub severity: Severity,
        pub summary: String,
    }

    pub trait SupportHandler {
        fn handler_name(&self) -> &'static str;
        fn handles(&self) -> Severity;

        fn handle(&self, ticket: &Ticket, rest: &[Box<dyn SupportHandler>]) -> Option<&'static str> {
            if ticket.severity == self.handles() {
                println!(
                    "  [{}] resolving {} ({:?}): {}",
                    self.handler_name(),
                    ticket.id,
                    ticket.severity,
                    ticket.summary
                );
                return Some(self.handler_name());
            }
            match rest.split_first() {
                Some((next, remaining)) => {
                    println!(
                        "  [{}] escalating {} to {}",
                        self.handler_name(),
                        ticket.id,
                        next.handler_name()
                    );
                    next.handle(ticket, remaining)
                }
                None => {
                    println!("  [{}] nobody left to handle {}", self.handler_name(), ticket.id);
                    None
                }
            }
        }
    }

    macro_rules! tier {
        ($name:ident, $label:expr, $severity:expr) => {
            pub struct $name;
            impl SupportHandler for $name {
                fn handler_name(&self) -> &'static str {
                    $label
                }
                fn handles(&self) -> Severity {
                    $severity
                }
            }
        };
    }

    tier!(TierOne, "Tier 1", Severity::Low);
    tier!(TierTwo, "Tier 2", Severity::Medium);
    tier!(TierThree, "Tier 3", Severity::High);
    tier!(Director, "Director", Severity::Critical);

    pub struct SupportDesk {
        chain: Vec<Box<dyn SupportHandler>>,
    }

    impl SupportDesk {
        pub fn standard() -> Self {
            SupportDesk {
                chain: vec![
                    Box::new(TierOne),
                    Box::new(TierTwo),
                    Box::new(TierThree),
                    Box::new(Director),
                ],
            }
        }

        pub fn submit(&self, ticket: &Ticket) -> Option<&'static str> {
            let (first, rest) = self.chain.split_first()?;
            first.handle(ticket, rest)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Support Ticket Escalation ---".green().bold());

        let desk = SupportDesk::standard();
        let tickets = [
            Ticket {
                id: "T001".to_string(),
                severity: Severity::Low,
                summary: "password reset".to_string(),
            },
            Ticket {
                id: "T002".to_string(),
                severity: Severity::Medium,
                summary: "billing discrepancy".to_string(),
            },
            Ticket {
                id: "T003".to_string(),
                severity: Severity::High,
                summary: "data sync failing".to_string(),
            },
            Ticket {
                id: "T004".to_string(),
                severity: Severity::Critical,
                summary: "production outage".to_string(),
            },
        ];

        for ticket in &tickets {
            desk.submit(ticket);
        }
        println!();
    }
}

// ============================================================================
// Log sinks: every link writes if the level clears its threshold
// ============================================================================

mod log_chain {
    use colored::Colorize;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Level {
        Debug,
        Info,
        Warning,
        Error,
    }

    pub struct Sink {
        pub name: &'static str,
        pub threshold: Level,
        pub written: RefCell<Vec<String>>,
    }

    impl Sink {
        pub fn new(name: &'static str, threshold: Level) -> Self {
            Sink {
                name,
                threshold,
                written: RefCell::new(Vec::new()),
            }
        }
    }

    pub struct LoggerChain {
        sinks: Vec<Sink>,
    }

    impl LoggerChain {
        pub fn new(sinks: Vec<Sink>) -> Self {
            LoggerChain { sinks }
        }

        /// Unlike the ticket chain, every sink sees every record; each one
        /// decides to write, then passes it on regardless.
        pub fn log(&self, level: Level, message: &str) {
            for sink in &self.sinks {
                if level >= sink.threshold {
                    println!("  [{}] {:?}: {}", sink.name, level, message);
                    sink.written.borrow_mut().push(message.to_string());
                }
            }
        }

        pub fn sinks(&self) -> &[Sink] {
            &self.sinks
        }
    }

    pub fn standard_chain() -> LoggerChain {
        LoggerChain::new(vec![
            Sink::new("console", Level::Debug),
            Sink::new("file", Level::Warning),
            Sink::new("email", Level::Error),
        ])
    }

    pub fn demonstrate() {
        println!("{}", "--- Logger Chain ---".green().bold());

        let chain = standard_chain();
        chain.log(Level::Debug, "cache warm took 80ms");
        chain.log(Level::Warning, "disk 85% full");
        chain.log(Level::Error, "replication halted");

        for sink in chain.sinks() {
            println!(
                "  {} captured {} record(s)",
                sink.name,
                sink.written.borrow().len()
            );
        }
        println!();
    }
}

// ============================================================================
// Expense approval: authority limits decide who signs off
// ============================================================================

mod approvals {
    use colored::Colorize;

    pub struct Expense {
        pub id: String,
        pub amount: f64,
        pub purpose: String,
    }

    pub struct Approver {
        pub title: &'static str,
        pub limit: f64,
    }

    pub struct ApprovalChain {
        approvers: Vec<Approver>,
    }

    impl ApprovalChain {
        pub fn corporate() -> Self {
            ApprovalChain {
                approvers: vec![
                    Approver {
                        title: "Supervisor",
                        limit: 1_000.0,
                    },
                    Approver {
                        title: "Manager",
                        limit: 10_000.0,
                    },
                    Approver {
                        title: "Director",
                        limit: 50_000.0,
                    },
                    Approver {
                        title: "CFO",
                        limit: 1_000_000.0,
                    },
                ],
            }
        }

        pub fn approve(&self, expense: &Expense) -> Option<&'static str> {
            for approver in &self.approvers {
                if expense.amount <= approver.limit {
                    println!(
                        "  [{}] approved {} (${:.2}) for {}",
                        approver.title, expense.id, expense.amount, expense.purpose
                    );
                    return Some(approver.title);
                }
                println!(
                    "  [{}] ${:.2} exceeds my ${:.0} limit, passing up",
                    approver.title, expense.amount, approver.limit
                );
            }
            println!("  {} rejected: beyond every approval limit", expense.id);
            None
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Expense Approvals ---".green().bold());

        let chain = ApprovalChain::corporate();
        let expenses = [
            Expense {
                id: "EXP001".to_string(),
                amount: 500.0,
                purpose: "office supplies".to_string(),
            },
            Expense {
                id: "EXP002".to_string(),
                amount: 7_500.0,
                purpose: "team offsite".to_string(),
            },
            Expense {
                id: "EXP003".to_string(),
                amount: 45_000.0,
                purpose: "conference sponsorship".to_string(),
            },
            Expense {
                id: "EXP004".to_string(),
                amount: 2_000_000.0,
                purpose: "acquire a competitor".to_string(),
            },
        ];

        for expense in &expenses {
            chain.approve(expense);
        }
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Senders know the chain's head, never who will handle the request");
    println!("2. Links may consume (tickets, expenses) or observe-and-forward (logs)");
    println!("3. A request can fall off the end; callers get that as None, not a panic");
}

fn main() {
    println!("{}", "CHAIN OF RESPONSIBILITY PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    support::demonstrate();
    log_chain::demonstrate();
    approvals::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::approvals::{ApprovalChain, Expense};
    use super::log_chain::{standard_chain, Level};
    use super::support::{Severity, SupportDesk, Ticket};

    fn ticket(severity: Severity) -> Ticket {
        Ticket {
            id: "T".to_string(),
            severity,
            summary: "s".to_string(),
        }
    }

    #[test]
    fn tickets_reach_the_matching_tier() {
        let desk = SupportDesk::standard();
        assert_eq!(desk.submit(&ticket(Severity::Low)), Some("Tier 1"));
        assert_eq!(desk.submit(&ticket(Severity::Medium)), Some("Tier 2"));
        assert_eq!(desk.submit(&ticket(Severity::High)), Some("Tier 3"));
        assert_eq!(desk.submit(&ticket(Severity::Critical)), Some("Director"));
    }

    #[test]
    fn every_sink_at_or_below_the_level_writes() {
        let chain = standard_chain();
        chain.log(Level::Error, "boom");
        for sink in chain.sinks() {
            assert_eq!(sink.written.borrow().len(), 1, "sink {}", sink.name);
        }

        chain.log(Level::Debug, "quiet");
        let counts: Vec<usize> = chain
            .sinks()
            .iter()
            .map(|s| s.written.borrow().len())
            .collect();
        // Only the console (Debug threshold) took the second record.
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn approvals_stop_at_the_first_sufficient_limit() {
        let chain = ApprovalChain::corporate();
        let approve = |amount: f64| {
            chain.approve(&Expense {
                id: "E".to_string(),
                amount,
                purpose: "p".to_string(),
            })
        };
        assert_eq!(approve(500.0), Some("Supervisor"));
        assert_eq!(approve(7_500.0), Some("Manager"));
        assert_eq!(approve(45_000.0), Some("Director"));
        assert_eq!(approve(200_000.0), Some("CFO"));
        assert_eq!(approve(2_000_000.0), None);
    }
}
