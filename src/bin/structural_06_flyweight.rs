//! Flyweight: share the heavy, duplicate only the light
//!
//! A particle system sharing sprite data, a text editor sharing character
//! formats, a chess board sharing piece types, and a string interning pool.
//!
//! Run with: cargo run --bin structural_06_flyweight

use colored::Colorize;

// ============================================================================
// Particle system: intrinsic type shared, extrinsic motion per particle
// ============================================================================

mod particles {
    use colored::Colorize;
    use rand::Rng;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Intrinsic state: identical for every particle of a kind, shared.
    #[derive(Debug)]
    pub struct ParticleType {
        pub name: String,
        pub sprite: String,
        pub color: u32,
    }

    #[derive(Default)]
    pub struct ParticleTypeFactory {
        types: HashMap<String, Rc<ParticleType>>,
    }

    impl ParticleTypeFactory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get(&mut self, name: &str, sprite: &str, color: u32) -> Rc<ParticleType> {
            if let Some(existing) = self.types.get(name) {
                return Rc::clone(existing);
            }
            println!("  loading sprite '{}' for particle type '{}'", sprite, name);
            let created = Rc::new(ParticleType {
                name: name.to_string(),
                sprite: sprite.to_string(),
                color,
            });
            self.types.insert(name.to_string(), Rc::clone(&created));
            created
        }

        pub fn type_count(&self) -> usize {
            self.types.len()
        }
    }

    /// Extrinsic state: unique per particle, cheap.
    pub struct Particle {
        pub kind: Rc<ParticleType>,
        pub x: f64,
        pub y: f64,
        pub velocity: f64,
    }

    pub struct ParticleSystem {
        factory: ParticleTypeFactory,
        particles: Vec<Particle>,
    }

    impl ParticleSystem {
        pub fn new() -> Self {
            ParticleSystem {
                factory: ParticleTypeFactory::new(),
                particles: Vec::new(),
            }
        }

        pub fn spawn(&mut self, name: &str, sprite: &str, color: u32, x: f64, y: f64, velocity: f64) {
            let kind = self.factory.get(name, sprite, color);
            self.particles.push(Particle {
                kind,
                x,
                y,
                velocity,
            });
        }

        pub fn particle_count(&self) -> usize {
            self.particles.len()
        }

        pub fn shared_type_count(&self) -> usize {
            self.factory.type_count()
        }

        pub fn render(&self) {
            for particle in &self.particles {
                println!(
                    "  {} at ({:.1}, {:.1}) v={:.1} color=#{:06X} sprite={}",
                    particle.kind.name,
                    particle.x,
                    particle.y,
                    particle.velocity,
                    particle.kind.color,
                    particle.kind.sprite
                );
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Particle System ---".green().bold());

        let mut system = ParticleSystem::new();
        let mut rng = rand::thread_rng();

        for _ in 0..5 {
            system.spawn(
                "bullet",
                "bullet.png",
                0xFF0000,
                rng.gen_range(0.0..800.0),
                rng.gen_range(0.0..600.0),
                rng.gen_range(5.0..15.0),
            );
        }
        for _ in 0..3 {
            system.spawn(
                "missile",
                "missile.png",
                0x00FF00,
                rng.gen_range(0.0..800.0),
                rng.gen_range(0.0..600.0),
                rng.gen_range(1.0..5.0),
            );
        }

        system.render();
        println!(
            "  {} particles backed by {} shared types\n",
            system.particle_count(),
            system.shared_type_count()
        );
    }
}

// ============================================================================
// Text editor: character formats deduplicated
// ============================================================================

mod text_formats {
    use colored::Colorize;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, PartialEq, Eq, Hash, Clone)]
    pub struct CharacterFormat {
        pub font: String,
        pub size: u8,
        pub bold: bool,
    }

    #[derive(Default)]
    pub struct FormatFactory {
        formats: HashMap<CharacterFormat, Rc<CharacterFormat>>,
    }

    impl FormatFactory {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn get(&mut self, font: &str, size: u8, bold: bool) -> Rc<CharacterFormat> {
            let key = CharacterFormat {
                font: font.to_string(),
                size,
                bold,
            };
            if let Some(existing) = self.formats.get(&key) {
                return Rc::clone(existing);
            }
            let created = Rc::new(key.clone());
            self.formats.insert(key, Rc::clone(&created));
            created
        }

        pub fn format_count(&self) -> usize {
            self.formats.len()
        }
    }

    pub struct StyledChar {
        pub ch: char,
        pub format: Rc<CharacterFormat>,
    }

    pub struct Document {
        factory: FormatFactory,
        chars: Vec<StyledChar>,
    }

    impl Document {
        pub fn new() -> Self {
            Document {
                factory: FormatFactory::new(),
                chars: Vec::new(),
            }
        }

        pub fn append(&mut self, ch: char, font: &str, size: u8, bold: bool) {
            let format = self.factory.get(font, size, bold);
            self.chars.push(StyledChar { ch, format });
        }

        pub fn char_count(&self) -> usize {
            self.chars.len()
        }

        pub fn format_count(&self) -> usize {
            self.factory.format_count()
        }

        pub fn chars(&self) -> &[StyledChar] {
            &self.chars
        }
    }

    pub fn build_hello_world() -> Document {
        let mut doc = Document::new();
        for (i, ch) in "Hello World".chars().enumerate() {
            // 'H' and 'W' are bold headings; the rest is plain.
            let bold = i == 0 || i == 6;
            doc.append(ch, "Arial", 12, bold);
        }
        doc
    }

    pub fn demonstrate() {
        println!("{}", "--- Text Editor Formats ---".green().bold());

        let doc = build_hello_world();
        for styled in doc.chars() {
            if styled.format.bold {
                println!("  '{}' {} {}pt bold", styled.ch, styled.format.font, styled.format.size);
            }
        }
        println!(
            "  {} characters share {} format objects\n",
            doc.char_count(),
            doc.format_count()
        );
    }
}

// ============================================================================
// Chess board: one type object per piece kind and color
// ============================================================================

mod chess {
    use colored::Colorize;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug)]
    pub struct PieceType {
        pub name: String,
        pub color: String,
        pub mesh: String,
    }

    pub struct Board {
        types: HashMap<(String, String), Rc<PieceType>>,
        placements: Vec<(Rc<PieceType>, &'static str)>,
    }

    impl Board {
        pub fn new() -> Self {
            Board {
                types: HashMap::new(),
                placements: Vec::new(),
            }
        }

        pub fn place(&mut self, name: &str, color: &str, square: &'static str) {
            let key = (name.to_string(), color.to_string());
            let piece_type = Rc::clone(self.types.entry(key).or_insert_with(|| {
                Rc::new(PieceType {
                    name: name.to_string(),
                    color: color.to_string(),
                    mesh: format!("{}_{}.obj", color, name),
                })
            }));
            self.placements.push((piece_type, square));
        }

        pub fn piece_count(&self) -> usize {
            self.placements.len()
        }

        pub fn type_count(&self) -> usize {
            self.types.len()
        }

        pub fn show(&self) {
            for (piece_type, square) in &self.placements {
                println!(
                    "  {} {} on {} (mesh {})",
                    piece_type.color, piece_type.name, square, piece_type.mesh
                );
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Chess Piece Types ---".green().bold());

        let mut board = Board::new();
        board.place("rook", "white", "a1");
        board.place("rook", "white", "h1");
        board.place("rook", "black", "a8");
        board.place("rook", "black", "h8");
        board.place("king", "white", "e1");
        board.place("king", "black", "e8");

        board.show();
        println!(
            "  {} pieces on the board, {} type objects in memory\n",
            board.piece_count(),
            board.type_count()
        );
    }
}

// ============================================================================
// String interning
// ============================================================================

mod interning {
    use colored::Colorize;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    pub struct StringPool {
        pool: HashMap<String, Rc<str>>,
    }

    impl StringPool {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn intern(&mut self, s: &str) -> Rc<str> {
            if let Some(existing) = self.pool.get(s) {
                return Rc::clone(existing);
            }
            let created: Rc<str> = Rc::from(s);
            self.pool.insert(s.to_string(), Rc::clone(&created));
            created
        }

        pub fn unique_count(&self) -> usize {
            self.pool.len()
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- String Interning ---".green().bold());

        let mut pool = StringPool::new();
        let first_hello = pool.intern("Hello");
        let second_hello = pool.intern("Hello");
        let world = pool.intern("World");

        println!(
            "  'Hello' interned twice, same allocation: {}",
            Rc::ptr_eq(&first_hello, &second_hello)
        );
        println!(
            "  'Hello' and 'World' distinct: {}",
            !Rc::ptr_eq(&first_hello, &world)
        );
        println!("  pool holds {} unique strings\n", pool.unique_count());
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Split state: intrinsic (shared, immutable) vs extrinsic (per object)");
    println!("2. A factory hands out Rc handles and never builds the same type twice");
    println!("3. Rc::ptr_eq makes the sharing observable, not just believed");
}

fn main() {
    println!("{}", "FLYWEIGHT PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    particles::demonstrate();
    text_formats::demonstrate();
    chess::demonstrate();
    interning::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::interning::StringPool;
    use super::particles::ParticleSystem;
    use super::text_formats::build_hello_world;
    use std::rc::Rc;

    #[test]
    fn particle_types_are_deduplicated() {
        let mut system = ParticleSystem::new();
        for i in 0..5 {
            system.spawn("bullet", "bullet.png", 0xFF0000, i as f64, 0.0, 10.0);
        }
        for i in 0..3 {
            system.spawn("missile", "missile.png", 0x00FF00, i as f64, 0.0, 3.0);
        }
        assert_eq!(system.particle_count(), 8);
        assert_eq!(system.shared_type_count(), 2);
    }

    #[test]
    fn hello_world_shares_two_formats() {
        let doc = build_hello_world();
        assert_eq!(doc.char_count(), 11);
        // bold Arial 12 and regular Arial 12
        assert_eq!(doc.format_count(), 2);
    }

    #[test]
    fn equal_characters_share_the_same_format_object() {
        let doc = build_hello_world();
        let chars = doc.chars();
        // 'e' (index 1) and 'l' (index 2) are both regular.
        assert!(Rc::ptr_eq(&chars[1].format, &chars[2].format));
        // 'H' (index 0) is bold, so it uses the other flyweight.
        assert!(!Rc::ptr_eq(&chars[0].format, &chars[1].format));
    }

    #[test]
    fn interning_returns_pointer_identical_strings() {
        let mut pool = StringPool::new();
        let a = pool.intern("Hello");
        let b = pool.intern("Hello");
        let c = pool.intern("World");
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));
        assert_eq!(pool.unique_count(), 2);
    }
}
