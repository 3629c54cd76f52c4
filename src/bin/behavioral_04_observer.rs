//! Observer: publish state changes instead of being polled for them
//!
//! A weather station pushes measurements to display observers the moment
//! they change. Starts with the polling version to show what the pattern
//! removes.
//!
//! Run with: cargo run --bin behavioral_04_observer

use colored::Colorize;

// ============================================================================
// PROBLEM: displays poll the station on a timer
// ============================================================================

mod polling_problem {
    use colored::Colorize;

    pub struct WeatherStation {
        pub temperature: f64,
        pub humidity: f64,
    }

    pub fn demonstrate() {
        println!("{}", "--- Problem: Polling ---".yellow().bold());

        let mut station = WeatherStation {
            temperature: 22.0,
            humidity: 60.0,
        };

        // Each display asks on its own schedule, wasting reads when nothing
        // changed and lagging behind when something did.
        for tick in 1..=3 {
            println!("  tick {}: display polls -> {:.1}C {:.0}%",
                tick, station.temperature, station.humidity);
            if tick == 2 {
                station.temperature = 28.0;
                println!("    (temperature jumped to 28.0 between polls)");
            }
        }

        println!("{}", "  Displays either poll too often or react too late".red());
        println!();
    }
}

// ============================================================================
// SOLUTION: the station notifies registered observers on every change
// ============================================================================

mod weather {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct Measurements {
        pub temperature: f64,
        pub humidity: f64,
        pub pressure: f64,
    }

    pub trait WeatherObserver {
        fn name(&self) -> &'static str;
        fn update(&mut self, measurements: Measurements);
    }

    pub struct WeatherStation {
        observers: Vec<Rc<RefCell<dyn WeatherObserver>>>,
        current: Option<Measurements>,
    }

    impl WeatherStation {
        pub fn new() -> Self {
            WeatherStation {
                observers: Vec::new(),
                current: None,
            }
        }

        pub fn attach(&mut self, observer: Rc<RefCell<dyn WeatherObserver>>) {
            println!("  [station] attached {}", observer.borrow().name());
            self.observers.push(observer);
        }

        pub fn detach(&mut self, name: &str) {
            self.observers.retain(|o| {
                let keep = o.borrow().name() != name;
                if !keep {
                    println!("  [station] detached {}", name);
                }
                keep
            });
        }

        pub fn observer_count(&self) -> usize {
            self.observers.len()
        }

        /// Setting measurements is the change; notification rides along.
        pub fn set_measurements(&mut self, temperature: f64, humidity: f64, pressure: f64) {
            let measurements = Measurements {
                temperature,
                humidity,
                pressure,
            };
            self.current = Some(measurements);
            self.notify(measurements);
        }

        fn notify(&self, measurements: Measurements) {
            for observer in &self.observers {
                observer.borrow_mut().update(measurements);
            }
        }
    }

    // Concrete observers.

    #[derive(Default)]
    pub struct CurrentConditionsDisplay {
        pub last: Option<Measurements>,
    }

    impl WeatherObserver for CurrentConditionsDisplay {
        fn name(&self) -> &'static str {
            "current conditions"
        }

        fn update(&mut self, measurements: Measurements) {
            self.last = Some(measurements);
            println!(
                "  [current] {:.1}C, {:.0}% humidity",
                measurements.temperature, measurements.humidity
            );
        }
    }

    #[derive(Default)]
    pub struct StatisticsDisplay {
        pub temperatures: Vec<f64>,
    }

    impl StatisticsDisplay {
        pub fn average(&self) -> f64 {
            if self.temperatures.is_empty() {
                return 0.0;
            }
            self.temperatures.iter().sum::<f64>() / self.temperatures.len() as f64
        }

        pub fn max(&self) -> f64 {
            self.temperatures.iter().copied().fold(f64::MIN, f64::max)
        }

        pub fn min(&self) -> f64 {
            self.temperatures.iter().copied().fold(f64::MAX, f64::min)
        }
    }

    impl WeatherObserver for StatisticsDisplay {
        fn name(&self) -> &'static str {
            "statistics"
        }

        fn update(&mut self, measurements: Measurements) {
            self.temperatures.push(measurements.temperature);
            println!(
                "  [stats] avg {:.1}C, max {:.1}C, min {:.1}C",
                self.average(),
                self.max(),
                self.min()
            );
        }
    }

    pub struct ForecastDisplay {
        pub last_pressure: f64,
    }

    impl Default for ForecastDisplay {
        fn default() -> Self {
            // Standard sea-level pressure as the starting baseline.
            ForecastDisplay {
                last_pressure: 1013.0,
            }
        }
    }

    impl ForecastDisplay {
        pub fn outlook(&self, pressure: f64) -> &'static str {
            if pressure > self.last_pressure {
                "improving weather on the way"
            } else if pressure < self.last_pressure {
                "cooler, rainy weather ahead"
            } else {
                "more of the same"
            }
        }
    }

    impl WeatherObserver for ForecastDisplay {
        fn name(&self) -> &'static str {
            "forecast"
        }

        fn update(&mut self, measurements: Measurements) {
            println!("  [forecast] {}", self.outlook(measurements.pressure));
            self.last_pressure = measurements.pressure;
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: Push Notifications ---".green().bold());

        let mut station = WeatherStation::new();
        let current = Rc::new(RefCell::new(CurrentConditionsDisplay::default()));
        let stats = Rc::new(RefCell::new(StatisticsDisplay::default()));
        let forecast = Rc::new(RefCell::new(ForecastDisplay::default()));

        station.attach(current.clone());
        station.attach(stats.clone());
        station.attach(forecast.clone());

        println!("  first reading:");
        station.set_measurements(25.0, 65.0, 1013.0);

        println!("  second reading:");
        station.set_measurements(27.0, 70.0, 1015.0);

        // The forecast display unsubscribes; it stops receiving updates
        // without the station or other displays changing at all.
        station.detach("forecast");

        println!("  third reading:");
        station.set_measurements(23.0, 90.0, 1008.0);
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The subject owns the observer list; observers own their reaction");
    println!("2. State change and notification are one operation, so nobody lags");
    println!("3. Attach and detach at runtime without touching the subject's code");
    println!("4. Rc<RefCell<..>> lets the demo inspect observers after updates;");
    println!("   a real system would reach for channels or a broadcast type");
}

fn main() {
    println!("{}", "OBSERVER PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    polling_problem::demonstrate();
    weather::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::weather::{
        CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay, WeatherObserver,
        WeatherStation,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn observers_receive_the_pushed_measurements() {
        let mut station = WeatherStation::new();
        let current = Rc::new(RefCell::new(CurrentConditionsDisplay::default()));
        station.attach(current.clone());

        station.set_measurements(25.0, 65.0, 1013.0);

        let last = current.borrow().last.expect("update received");
        assert_eq!(last.temperature, 25.0);
        assert_eq!(last.humidity, 65.0);
    }

    #[test]
    fn statistics_accumulate_across_updates() {
        let mut station = WeatherStation::new();
        let stats = Rc::new(RefCell::new(StatisticsDisplay::default()));
        station.attach(stats.clone());

        station.set_measurements(20.0, 50.0, 1010.0);
        station.set_measurements(30.0, 50.0, 1010.0);

        let stats = stats.borrow();
        assert_eq!(stats.average(), 25.0);
        assert_eq!(stats.max(), 30.0);
        assert_eq!(stats.min(), 20.0);
    }

    #[test]
    fn forecast_tracks_the_pressure_trend() {
        let mut forecast = ForecastDisplay::default();
        assert_eq!(forecast.outlook(1015.0), "improving weather on the way");

        forecast.update(super::weather::Measurements {
            temperature: 25.0,
            humidity: 65.0,
            pressure: 1015.0,
        });
        assert_eq!(forecast.outlook(1008.0), "cooler, rainy weather ahead");
        assert_eq!(forecast.outlook(1015.0), "more of the same");
    }

    #[test]
    fn detached_observers_stop_receiving_updates() {
        let mut station = WeatherStation::new();
        let stats = Rc::new(RefCell::new(StatisticsDisplay::default()));
        station.attach(stats.clone());
        assert_eq!(station.observer_count(), 1);

        station.set_measurements(20.0, 50.0, 1010.0);
        station.detach("statistics");
        assert_eq!(station.observer_count(), 0);

        station.set_measurements(30.0, 50.0, 1010.0);
        assert_eq!(stats.borrow().temperatures.len(), 1);
    }
}
