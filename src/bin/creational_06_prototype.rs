//! Prototype: clone configured objects instead of rebuilding them
//!
//! Expensive-construction problem, document cloning, a character registry
//! stamping out preconfigured game characters, and a look at what "shallow
//! copy" means under Rust ownership.
//!
//! Run with: cargo run --bin creational_06_prototype

use colored::Colorize;

// ============================================================================
// Problem: rebuilding an expensive object from scratch every time
// ============================================================================

mod problem_expensive_creation {
    use colored::Colorize;

    pub struct DatabaseRecord {
        pub table: String,
        pub schema: Vec<String>,
    }

    impl DatabaseRecord {
        pub fn load(table: &str) -> Self {
            // Stands in for schema discovery, permission checks, cache
            // warming: work nobody wants to repeat per record.
            println!("  (expensive) fetching schema and defaults for '{}'", table);
            DatabaseRecord {
                table: table.to_string(),
                schema: vec!["id".into(), "name".into(), "created_at".into()],
            }
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Problem: Expensive Construction ---".yellow().bold()
        );

        // Three records, three full initializations for the same table.
        let a = DatabaseRecord::load("users");
        let b = DatabaseRecord::load("users");
        let c = DatabaseRecord::load("users");

        println!(
            "  created {} records, each with {} schema columns, paying full cost thrice\n",
            3,
            a.schema.len().max(b.schema.len()).max(c.schema.len())
        );
    }
}

// ============================================================================
// Solution: clone a prototype
// ============================================================================

mod document_prototype {
    use colored::Colorize;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Document {
        pub title: String,
        pub content: String,
        pub tags: Vec<String>,
    }

    impl Document {
        pub fn new(title: &str, content: &str) -> Self {
            Document {
                title: title.to_string(),
                content: content.to_string(),
                tags: Vec::new(),
            }
        }

        pub fn add_tag(&mut self, tag: &str) {
            self.tags.push(tag.to_string());
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: Document Prototype ---".green().bold());

        let mut template = Document::new("Weekly Report", "## Summary\n\n## Details\n");
        template.add_tag("report");
        template.add_tag("weekly");

        // Clone the configured template, then specialize the copy.
        let mut week12 = template.clone();
        week12.title = "Weekly Report - W12".to_string();
        week12.add_tag("2026");

        println!("  template: '{}' tags {:?}", template.title, template.tags);
        println!("  clone:    '{}' tags {:?}", week12.title, week12.tags);
        println!("  mutating the clone left the template untouched\n");
    }
}

// ============================================================================
// Second example: game character registry
// ============================================================================

mod game_characters {
    use colored::Colorize;
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    #[derive(Clone, Debug, PartialEq)]
    pub struct Weapon {
        pub name: String,
        pub damage: u32,
    }

    #[derive(Clone, Debug, PartialEq)]
    pub struct Armor {
        pub name: String,
        pub defense: u32,
    }

    #[derive(Clone, Debug)]
    pub struct Character {
        pub name: String,
        pub class_name: String,
        pub health: u32,
        pub weapon: Weapon,
        pub armor: Armor,
        pub abilities: Vec<String>,
    }

    impl Character {
        pub fn spawn_as(&self, name: &str) -> Character {
            let mut instance = self.clone();
            instance.name = name.to_string();
            instance
        }

        pub fn describe(&self) {
            println!(
                "  {} the {} ({} hp) wielding {} ({} dmg), {} ({} def), abilities {:?}",
                self.name,
                self.class_name,
                self.health,
                self.weapon.name,
                self.weapon.damage,
                self.armor.name,
                self.armor.defense,
                self.abilities
            );
        }
    }

    fn warrior_prototype() -> Character {
        Character {
            name: "<prototype>".to_string(),
            class_name: "Warrior".to_string(),
            health: 150,
            weapon: Weapon {
                name: "Iron Sword".to_string(),
                damage: 25,
            },
            armor: Armor {
                name: "Steel Armor".to_string(),
                defense: 40,
            },
            abilities: vec!["Power Strike".to_string(), "Shield Bash".to_string()],
        }
    }

    fn mage_prototype() -> Character {
        Character {
            name: "<prototype>".to_string(),
            class_name: "Mage".to_string(),
            health: 80,
            weapon: Weapon {
                name: "Magic Staff".to_string(),
                damage: 15,
            },
            armor: Armor {
                name: "Cloth Robe".to_string(),
                defense: 10,
            },
            abilities: vec![
                "Fireball".to_string(),
                "Ice Blast".to_string(),
                "Teleport".to_string(),
            ],
        }
    }

    fn archer_prototype() -> Character {
        Character {
            name: "<prototype>".to_string(),
            class_name: "Archer".to_string(),
            health: 100,
            weapon: Weapon {
                name: "Longbow".to_string(),
                damage: 20,
            },
            armor: Armor {
                name: "Leather Armor".to_string(),
                defense: 20,
            },
            abilities: vec!["Multi-shot".to_string(), "Snipe".to_string()],
        }
    }

    lazy_static! {
        static ref REGISTRY: HashMap<&'static str, Character> = {
            let mut registry = HashMap::new();
            registry.insert("warrior", warrior_prototype());
            registry.insert("mage", mage_prototype());
            registry.insert("archer", archer_prototype());
            registry
        };
    }

    pub fn spawn(class_key: &str, name: &str) -> Option<Character> {
        REGISTRY.get(class_key).map(|proto| proto.spawn_as(name))
    }

    pub fn demonstrate() {
        println!("{}", "--- Second Example: Character Registry ---".green().bold());

        let party: Vec<Character> = [
            ("warrior", "Thorin"),
            ("warrior", "Gimli"),
            ("mage", "Gandalf"),
            ("archer", "Legolas"),
        ]
        .iter()
        .filter_map(|(class_key, name)| spawn(class_key, name))
        .collect();

        for member in &party {
            member.describe();
        }

        println!("  four characters spawned from three registered prototypes\n");
    }
}

// ============================================================================
// Third example: what shallow copy means here
// ============================================================================

mod copy_semantics {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    pub struct Inventory {
        pub items: Vec<String>,
    }

    pub fn demonstrate() {
        println!("{}", "--- Shallow vs Deep, the Rust Version ---".green().bold());

        // "Shallow copy" in Rust is explicit: both handles share one
        // allocation through Rc. No double free is possible, but shared
        // mutation is visible through every handle.
        let shared = Rc::new(RefCell::new(Inventory {
            items: vec!["potion".to_string()],
        }));
        let alias = Rc::clone(&shared);
        alias.borrow_mut().items.push("rope".to_string());
        println!(
            "  shared inventory seen through first handle: {:?} (rc count {})",
            shared.borrow().items,
            Rc::strong_count(&shared)
        );

        // A deep copy duplicates the data; the copies diverge.
        let independent = Inventory {
            items: shared.borrow().items.clone(),
        };
        shared.borrow_mut().items.push("torch".to_string());
        println!("  deep copy kept: {:?}", independent.items);
        println!("  original grew:  {:?}", shared.borrow().items);
        println!("  ownership makes the choice explicit instead of accidental\n");
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Clone a configured prototype instead of repeating costly setup");
    println!("2. A registry of prototypes turns creation into a lookup plus clone");
    println!("3. #[derive(Clone)] gives the deep copy; Rc::clone is the shallow one");
    println!("4. Clones are independent: mutating one never touches the source");
}

fn main() {
    println!("{}", "PROTOTYPE PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    problem_expensive_creation::demonstrate();
    document_prototype::demonstrate();
    game_characters::demonstrate();
    copy_semantics::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::document_prototype::Document;
    use super::game_characters::spawn;

    #[test]
    fn cloned_document_diverges_from_template() {
        let mut template = Document::new("T", "body");
        template.add_tag("a");

        let mut copy = template.clone();
        copy.add_tag("b");
        copy.title = "T2".to_string();

        assert_eq!(template.tags, vec!["a"]);
        assert_eq!(copy.tags, vec!["a", "b"]);
        assert_eq!(template.title, "T");
    }

    #[test]
    fn registry_spawns_configured_characters() {
        let thorin = spawn("warrior", "Thorin").expect("warrior prototype");
        assert_eq!(thorin.name, "Thorin");
        assert_eq!(thorin.health, 150);
        assert_eq!(thorin.weapon.damage, 25);
        assert_eq!(thorin.abilities, vec!["Power Strike", "Shield Bash"]);

        let gandalf = spawn("mage", "Gandalf").expect("mage prototype");
        assert_eq!(gandalf.health, 80);
        assert_eq!(gandalf.abilities.len(), 3);
    }

    #[test]
    fn unknown_class_key_spawns_nothing() {
        assert!(spawn("necromancer", "Kel").is_none());
    }

    #[test]
    fn spawned_clones_are_independent() {
        let mut thorin = spawn("warrior", "Thorin").expect("warrior");
        thorin.health -= 50;

        let gimli = spawn("warrior", "Gimli").expect("warrior");
        assert_eq!(gimli.health, 150);
    }
}
