//! Facade: one simple front for a tangle of subsystems
//!
//! A home theater, a computer boot sequence, an order pipeline, and an API
//! client, each hidden behind a couple of intent-level methods.
//!
//! Run with: cargo run --bin structural_05_facade

use colored::Colorize;

// ============================================================================
// Home theater
// ============================================================================

mod home_theater {
    use colored::Colorize;

    pub struct Amplifier;
    pub struct MoviePlayer;
    pub struct Projector;
    pub struct Lights;
    pub struct Screen;
    pub struct PopcornMaker;

    impl Amplifier {
        pub fn on(&self) {
            println!("  amplifier on");
        }
        pub fn set_volume(&self, level: u8) {
            println!("  amplifier volume set to {}", level);
        }
        pub fn off(&self) {
            println!("  amplifier off");
        }
    }

    impl MoviePlayer {
        pub fn on(&self) {
            println!("  player on");
        }
        pub fn play(&self, movie: &str) {
            println!("  playing \"{}\"", movie);
        }
        pub fn stop(&self) {
            println!("  playback stopped");
        }
        pub fn off(&self) {
            println!("  player off");
        }
    }

    impl Projector {
        pub fn on(&self) {
            println!("  projector on");
        }
        pub fn wide_screen_mode(&self) {
            println!("  projector in widescreen mode");
        }
        pub fn off(&self) {
            println!("  projector off");
        }
    }

    impl Lights {
        pub fn dim(&self, level: u8) {
            println!("  lights dimmed to {}%", level);
        }
        pub fn on(&self) {
            println!("  lights up");
        }
    }

    impl Screen {
        pub fn down(&self) {
            println!("  screen lowered");
        }
        pub fn up(&self) {
            println!("  screen raised");
        }
    }

    impl PopcornMaker {
        pub fn on(&self) {
            println!("  popcorn maker on");
        }
        pub fn pop(&self) {
            println!("  popping corn");
        }
        pub fn off(&self) {
            println!("  popcorn maker off");
        }
    }

    pub struct HomeTheaterFacade {
        amplifier: Amplifier,
        player: MoviePlayer,
        projector: Projector,
        lights: Lights,
        screen: Screen,
        popcorn: PopcornMaker,
    }

    impl HomeTheaterFacade {
        pub fn new() -> Self {
            HomeTheaterFacade {
                amplifier: Amplifier,
                player: MoviePlayer,
                projector: Projector,
                lights: Lights,
                screen: Screen,
                popcorn: PopcornMaker,
            }
        }

        pub fn watch_movie(&self, movie: &str) {
            println!("  Get ready to watch a movie...");
            self.popcorn.on();
            self.popcorn.pop();
            self.lights.dim(10);
            self.screen.down();
            self.projector.on();
            self.projector.wide_screen_mode();
            self.amplifier.on();
            self.amplifier.set_volume(5);
            self.player.on();
            self.player.play(movie);
        }

        pub fn end_movie(&self) {
            println!("  Shutting the theater down...");
            self.player.stop();
            self.player.off();
            self.amplifier.off();
            self.projector.off();
            self.screen.up();
            self.lights.on();
            self.popcorn.off();
        }

        pub fn listen_to_music(&self) {
            println!("  Switching to music mode...");
            self.lights.dim(40);
            self.amplifier.on();
            self.amplifier.set_volume(3);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Home Theater Facade ---".green().bold());

        let theater = HomeTheaterFacade::new();
        theater.watch_movie("Inception");
        theater.end_movie();
        theater.listen_to_music();
        println!("  six subsystems, three verbs\n");
    }
}

// ============================================================================
// Computer boot
// ============================================================================

mod computer {
    use colored::Colorize;

    pub struct Cpu;
    pub struct Memory;
    pub struct HardDrive;

    impl Cpu {
        pub fn freeze(&self) {
            println!("  cpu: freeze");
        }
        pub fn jump(&self, address: u64) {
            println!("  cpu: jump to {:#x}", address);
        }
        pub fn execute(&self) {
            println!("  cpu: execute");
        }
    }

    impl Memory {
        pub fn load(&self, address: u64, data: &[u8]) {
            println!("  memory: load {} bytes at {:#x}", data.len(), address);
        }
    }

    impl HardDrive {
        pub fn read(&self, lba: u64, size: usize) -> Vec<u8> {
            println!("  drive: read {} bytes from LBA {}", size, lba);
            vec![0; size]
        }
    }

    pub struct ComputerFacade {
        cpu: Cpu,
        memory: Memory,
        drive: HardDrive,
    }

    const BOOT_ADDRESS: u64 = 0x7c00;
    const BOOT_SECTOR: u64 = 0;
    const SECTOR_SIZE: usize = 512;

    impl ComputerFacade {
        pub fn new() -> Self {
            ComputerFacade {
                cpu: Cpu,
                memory: Memory,
                drive: HardDrive,
            }
        }

        pub fn start(&self) {
            self.cpu.freeze();
            let boot_sector = self.drive.read(BOOT_SECTOR, SECTOR_SIZE);
            self.memory.load(BOOT_ADDRESS, &boot_sector);
            self.cpu.jump(BOOT_ADDRESS);
            self.cpu.execute();
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Computer Boot Facade ---".green().bold());
        ComputerFacade::new().start();
        println!("  the caller pressed one power button\n");
    }
}

// ============================================================================
// Order pipeline
// ============================================================================

mod orders {
    use colored::Colorize;

    pub struct Inventory;
    pub struct Payment;
    pub struct Shipping;
    pub struct Notification;

    impl Inventory {
        pub fn reserve(&self, sku: &str) -> bool {
            println!("  inventory: reserving {}", sku);
            true
        }
    }

    impl Payment {
        pub fn charge(&self, amount: f64) -> bool {
            println!("  payment: charging ${:.2}", amount);
            amount > 0.0
        }
    }

    impl Shipping {
        pub fn schedule(&self, sku: &str) -> String {
            println!("  shipping: scheduling pickup for {}", sku);
            "ORD123456".to_string()
        }
    }

    impl Notification {
        pub fn confirm(&self, order_id: &str) {
            println!("  notification: order {} confirmed", order_id);
        }
    }

    pub struct OrderFacade {
        inventory: Inventory,
        payment: Payment,
        shipping: Shipping,
        notification: Notification,
    }

    impl OrderFacade {
        pub fn new() -> Self {
            OrderFacade {
                inventory: Inventory,
                payment: Payment,
                shipping: Shipping,
                notification: Notification,
            }
        }

        pub fn place_order(&self, sku: &str, amount: f64) -> Option<String> {
            if !self.inventory.reserve(sku) {
                println!("  order failed: out of stock");
                return None;
            }
            if !self.payment.charge(amount) {
                println!("  order failed: payment declined");
                return None;
            }
            let order_id = self.shipping.schedule(sku);
            self.notification.confirm(&order_id);
            Some(order_id)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Order Facade ---".green().bold());
        let facade = OrderFacade::new();
        if let Some(order_id) = facade.place_order("SKU-4411", 99.99) {
            println!("  order placed: {}", order_id);
        }
        println!();
    }
}

// ============================================================================
// API client
// ============================================================================

mod api_client {
    use colored::Colorize;

    pub struct HttpClient;
    pub struct JsonParser;
    pub struct Authentication;

    impl HttpClient {
        pub fn request(&self, method: &str, url: &str, token: &str) -> String {
            println!("  http: {} {} (bearer {})", method, url, token);
            format!("{{\"url\": \"{}\"}}", url)
        }
    }

    impl JsonParser {
        pub fn parse(&self, raw: &str) -> String {
            println!("  json: parsing {} bytes", raw.len());
            raw.to_string()
        }
    }

    impl Authentication {
        pub fn token(&self) -> String {
            println!("  auth: issuing short-lived token");
            "tok_abc123".to_string()
        }
    }

    pub struct ApiClientFacade {
        http: HttpClient,
        json: JsonParser,
        auth: Authentication,
    }

    impl ApiClientFacade {
        pub fn new() -> Self {
            ApiClientFacade {
                http: HttpClient,
                json: JsonParser,
                auth: Authentication,
            }
        }

        pub fn get(&self, url: &str) -> String {
            let token = self.auth.token();
            let raw = self.http.request("GET", url, &token);
            self.json.parse(&raw)
        }

        pub fn post(&self, url: &str, _body: &str) -> String {
            let token = self.auth.token();
            let raw = self.http.request("POST", url, &token);
            self.json.parse(&raw)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- API Client Facade ---".green().bold());
        let client = ApiClientFacade::new();
        let response = client.get("https://api.example.com/users/42");
        println!("  response: {}", response);
        client.post("https://api.example.com/users", "{\"name\": \"Grace\"}");
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The facade owns the subsystems and the correct call order");
    println!("2. Clients speak in intent (watch_movie, place_order), not mechanics");
    println!("3. Subsystems stay reachable for power users; the facade adds, not hides");
}

fn main() {
    println!("{}", "FACADE PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    home_theater::demonstrate();
    computer::demonstrate();
    orders::demonstrate();
    api_client::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::api_client::ApiClientFacade;
    use super::orders::OrderFacade;

    #[test]
    fn successful_order_returns_an_id() {
        let facade = OrderFacade::new();
        assert_eq!(
            facade.place_order("SKU-4411", 99.99),
            Some("ORD123456".to_string())
        );
    }

    #[test]
    fn zero_amount_payment_is_declined() {
        let facade = OrderFacade::new();
        assert_eq!(facade.place_order("SKU-4411", 0.0), None);
    }

    #[test]
    fn api_get_returns_parsed_body() {
        let client = ApiClientFacade::new();
        let response = client.get("https://api.example.com/users/42");
        assert!(response.contains("users/42"));
    }
}
