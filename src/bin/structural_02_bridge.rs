//! Bridge: split an abstraction from its implementation
//!
//! Shapes drawn by interchangeable renderers, messages delivered by
//! interchangeable senders, and remote controls driving different devices.
//!
//! Run with: cargo run --bin structural_02_bridge

use colored::Colorize;

// ============================================================================
// Problem sketch: the class explosion
// ============================================================================

fn print_problem() {
    println!("{}", "--- Problem: Class Explosion ---".yellow().bold());
    println!("  Without a bridge, every shape x renderer pair is its own type:");
    println!("  VectorCircle, RasterCircle, VectorSquare, RasterSquare, ...");
    println!("  Two axes of variation multiply; four types today, twelve tomorrow\n");
}

// ============================================================================
// Shapes over renderers
// ============================================================================

mod shapes {
    use colored::Colorize;

    /// Implementation side of the bridge.
    pub trait Renderer {
        fn render_circle(&self, radius: f64);
        fn render_square(&self, side: f64);
    }

    pub struct VectorRenderer;
    pub struct RasterRenderer;

    impl Renderer for VectorRenderer {
        fn render_circle(&self, radius: f64) {
            println!("  [vector] circle of radius {} as a path", radius);
        }
        fn render_square(&self, side: f64) {
            println!("  [vector] square of side {} as four lines", side);
        }
    }

    impl Renderer for RasterRenderer {
        fn render_circle(&self, radius: f64) {
            println!("  [raster] circle of radius {} as pixels", radius);
        }
        fn render_square(&self, side: f64) {
            println!("  [raster] square of side {} as a filled block", side);
        }
    }

    /// Abstraction side: shapes hold a renderer and delegate drawing.
    pub trait Shape {
        fn draw(&self);
        fn resize(&mut self, factor: f64);
    }

    pub struct Circle<'a> {
        pub radius: f64,
        renderer: &'a dyn Renderer,
    }

    pub struct Square<'a> {
        pub side: f64,
        renderer: &'a dyn Renderer,
    }

    impl<'a> Circle<'a> {
        pub fn new(radius: f64, renderer: &'a dyn Renderer) -> Self {
            Circle { radius, renderer }
        }
    }

    impl<'a> Square<'a> {
        pub fn new(side: f64, renderer: &'a dyn Renderer) -> Self {
            Square { side, renderer }
        }
    }

    impl Shape for Circle<'_> {
        fn draw(&self) {
            self.renderer.render_circle(self.radius);
        }
        fn resize(&mut self, factor: f64) {
            self.radius *= factor;
        }
    }

    impl Shape for Square<'_> {
        fn draw(&self) {
            self.renderer.render_square(self.side);
        }
        fn resize(&mut self, factor: f64) {
            self.side *= factor;
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Shapes over Renderers ---".green().bold());

        let vector = VectorRenderer;
        let raster = RasterRenderer;

        let mut circle = Circle::new(5.0, &vector);
        let mut square = Square::new(4.0, &raster);

        circle.draw();
        square.draw();

        circle.resize(2.0);
        square.resize(0.5);
        println!("  after resizing:");
        circle.draw();
        square.draw();

        // Same shape type, other implementation.
        Circle::new(3.0, &raster).draw();
        println!();
    }
}

// ============================================================================
// Messages over senders
// ============================================================================

mod messages {
    use colored::Colorize;

    pub trait MessageSender {
        fn send(&self, text: &str);
    }

    pub struct EmailSender;
    pub struct SmsSender;
    pub struct SlackSender;

    impl MessageSender for EmailSender {
        fn send(&self, text: &str) {
            println!("  [email] sending {} chars: {}", text.len(), text);
        }
    }

    impl MessageSender for SmsSender {
        fn send(&self, text: &str) {
            println!("  [sms] {}", text);
        }
    }

    impl MessageSender for SlackSender {
        fn send(&self, text: &str) {
            println!("  [slack] #alerts: {}", text);
        }
    }

    pub trait Message {
        fn formatted(&self) -> String;

        fn deliver(&self, sender: &dyn MessageSender) {
            sender.send(&self.formatted());
        }
    }

    pub struct UrgentMessage {
        pub body: String,
    }

    pub struct ScheduledMessage {
        pub body: String,
        pub send_at: String,
    }

    impl Message for UrgentMessage {
        fn formatted(&self) -> String {
            format!("[URGENT] {}", self.body)
        }
    }

    impl Message for ScheduledMessage {
        fn formatted(&self) -> String {
            format!("[Scheduled for {}] {}", self.send_at, self.body)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Messages over Senders ---".green().bold());

        let urgent = UrgentMessage {
            body: "Database replica lagging".to_string(),
        };
        let scheduled = ScheduledMessage {
            body: "Maintenance window opens".to_string(),
            send_at: "02:00".to_string(),
        };

        urgent.deliver(&EmailSender);
        urgent.deliver(&SmsSender);
        scheduled.deliver(&SlackSender);
        println!("  message kinds and transports vary independently\n");
    }
}

// ============================================================================
// Remotes over devices
// ============================================================================

mod remotes {
    use colored::Colorize;
    use std::cell::RefCell;

    pub trait Device {
        fn name(&self) -> &'static str;
        fn set_power(&self, on: bool);
        fn set_volume(&self, volume: u8);
        fn volume(&self) -> u8;
    }

    pub struct Tv {
        state: RefCell<(bool, u8)>,
    }

    pub struct Radio {
        state: RefCell<(bool, u8)>,
    }

    impl Tv {
        pub fn new() -> Self {
            Tv {
                state: RefCell::new((false, 30)),
            }
        }
    }

    impl Radio {
        pub fn new() -> Self {
            Radio {
                state: RefCell::new((false, 50)),
            }
        }
    }

    impl Device for Tv {
        fn name(&self) -> &'static str {
            "TV"
        }
        fn set_power(&self, on: bool) {
            self.state.borrow_mut().0 = on;
            println!("  [TV] power {}", if on { "on" } else { "off" });
        }
        fn set_volume(&self, volume: u8) {
            self.state.borrow_mut().1 = volume;
            println!("  [TV] volume {}", volume);
        }
        fn volume(&self) -> u8 {
            self.state.borrow().1
        }
    }

    impl Device for Radio {
        fn name(&self) -> &'static str {
            "Radio"
        }
        fn set_power(&self, on: bool) {
            self.state.borrow_mut().0 = on;
            println!("  [Radio] power {}", if on { "on" } else { "off" });
        }
        fn set_volume(&self, volume: u8) {
            self.state.borrow_mut().1 = volume;
            println!("  [Radio] volume {}", volume);
        }
        fn volume(&self) -> u8 {
            self.state.borrow().1
        }
    }

    pub struct RemoteControl<'a> {
        pub device: &'a dyn Device,
    }

    impl<'a> RemoteControl<'a> {
        pub fn new(device: &'a dyn Device) -> Self {
            RemoteControl { device }
        }

        pub fn turn_on(&self) {
            self.device.set_power(true);
        }

        pub fn turn_off(&self) {
            self.device.set_power(false);
        }

        pub fn volume_up(&self) {
            let volume = self.device.volume().saturating_add(10).min(100);
            self.device.set_volume(volume);
        }
    }

    /// A refined abstraction: extra behavior built on the same bridge.
    pub struct AdvancedRemote<'a> {
        pub basic: RemoteControl<'a>,
    }

    impl<'a> AdvancedRemote<'a> {
        pub fn new(device: &'a dyn Device) -> Self {
            AdvancedRemote {
                basic: RemoteControl::new(device),
            }
        }

        pub fn mute(&self) {
            println!("  muting the {}", self.basic.device.name());
            self.basic.device.set_volume(0);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Remotes over Devices ---".green().bold());

        let tv = Tv::new();
        let radio = Radio::new();

        let tv_remote = RemoteControl::new(&tv);
        tv_remote.turn_on();
        tv_remote.volume_up();

        let radio_remote = AdvancedRemote::new(&radio);
        radio_remote.basic.turn_on();
        radio_remote.mute();
        radio_remote.basic.turn_off();
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Two trait hierarchies: abstraction holds a &dyn implementation");
    println!("2. Shapes, messages, remotes grow without touching renderers,");
    println!("   senders, devices, and vice versa");
    println!("3. Refined abstractions (AdvancedRemote) reuse the same bridge");
}

fn main() {
    println!("{}", "BRIDGE PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    print_problem();
    shapes::demonstrate();
    messages::demonstrate();
    remotes::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::messages::{Message, ScheduledMessage, UrgentMessage};
    use super::remotes::{AdvancedRemote, Device, RemoteControl, Tv};
    use super::shapes::{Circle, RasterRenderer, Shape, VectorRenderer};

    #[test]
    fn resize_scales_the_abstraction_not_the_renderer() {
        let renderer = VectorRenderer;
        let mut circle = Circle::new(5.0, &renderer);
        circle.resize(2.0);
        assert!((circle.radius - 10.0).abs() < 1e-9);
    }

    #[test]
    fn a_shape_accepts_any_renderer() {
        let vector = VectorRenderer;
        let raster = RasterRenderer;
        Circle::new(1.0, &vector).draw();
        Circle::new(1.0, &raster).draw();
    }

    #[test]
    fn message_formatting_is_independent_of_transport() {
        let urgent = UrgentMessage {
            body: "disk full".to_string(),
        };
        assert_eq!(urgent.formatted(), "[URGENT] disk full");

        let scheduled = ScheduledMessage {
            body: "deploy".to_string(),
            send_at: "02:00".to_string(),
        };
        assert_eq!(scheduled.formatted(), "[Scheduled for 02:00] deploy");
    }

    #[test]
    fn volume_up_caps_at_one_hundred() {
        let tv = Tv::new();
        let remote = RemoteControl::new(&tv);
        for _ in 0..20 {
            remote.volume_up();
        }
        assert_eq!(tv.volume(), 100);
    }

    #[test]
    fn mute_sets_volume_to_zero() {
        let tv = Tv::new();
        let remote = AdvancedRemote::new(&tv);
        remote.basic.volume_up();
        remote.mute();
        assert_eq!(tv.volume(), 0);
    }
}
