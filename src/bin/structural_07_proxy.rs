//! Proxy: a stand-in that controls access to the real thing
//!
//! Six flavors: lazy loading, permission checks, caching, audit logging,
//! remote-call plumbing, and smart references.
//!
//! Run with: cargo run --bin structural_07_proxy

use colored::Colorize;

// ============================================================================
// Virtual proxy: defer the expensive load
// ============================================================================

mod virtual_proxy {
    use colored::Colorize;
    use std::cell::RefCell;

    pub trait Image {
        fn display(&self);
    }

    pub struct RealImage {
        filename: String,
    }

    impl RealImage {
        pub fn load(filename: &str) -> Self {
            println!("  loading '{}' from disk (slow)", filename);
            RealImage {
                filename: filename.to_string(),
            }
        }
    }

    impl Image for RealImage {
        fn display(&self) {
            println!("  displaying '{}'", self.filename);
        }
    }

    pub struct ImageProxy {
        filename: String,
        real: RefCell<Option<RealImage>>,
        loads: RefCell<u32>,
    }

    impl ImageProxy {
        pub fn new(filename: &str) -> Self {
            ImageProxy {
                filename: filename.to_string(),
                real: RefCell::new(None),
                loads: RefCell::new(0),
            }
        }

        pub fn load_count(&self) -> u32 {
            *self.loads.borrow()
        }
    }

    impl Image for ImageProxy {
        fn display(&self) {
            if self.real.borrow().is_none() {
                *self.real.borrow_mut() = Some(RealImage::load(&self.filename));
                *self.loads.borrow_mut() += 1;
            }
            if let Some(real) = self.real.borrow().as_ref() {
                real.display();
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Virtual Proxy: Lazy Image ---".green().bold());

        let image = ImageProxy::new("vacation_photo.raw");
        println!("  proxy created, nothing loaded yet");

        image.display(); // triggers the load
        image.display(); // served from the cached RealImage
        println!("  disk was touched {} time(s)\n", image.load_count());
    }
}

// ============================================================================
// Protection proxy: permissions gate every operation
// ============================================================================

mod protection_proxy {
    use colored::Colorize;
    use thiserror::Error;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Permission {
        Read,
        Write,
        Delete,
    }

    #[derive(Debug, Error, PartialEq)]
    #[error("user '{user}' needs {required:?} access but holds {granted:?}")]
    pub struct AccessDenied {
        pub user: String,
        pub required: Permission,
        pub granted: Permission,
    }

    pub struct SecretDocument {
        pub content: String,
    }

    impl SecretDocument {
        fn read(&self) -> &str {
            &self.content
        }

        fn write(&mut self, content: &str) {
            self.content = content.to_string();
        }
    }

    pub struct DocumentProxy {
        document: SecretDocument,
        user: String,
        granted: Permission,
    }

    impl DocumentProxy {
        pub fn new(document: SecretDocument, user: &str, granted: Permission) -> Self {
            DocumentProxy {
                document,
                user: user.to_string(),
                granted,
            }
        }

        fn check(&self, required: Permission) -> Result<(), AccessDenied> {
            if self.granted >= required {
                Ok(())
            } else {
                Err(AccessDenied {
                    user: self.user.clone(),
                    required,
                    granted: self.granted,
                })
            }
        }

        pub fn read(&self) -> Result<&str, AccessDenied> {
            self.check(Permission::Read)?;
            Ok(self.document.read())
        }

        pub fn write(&mut self, content: &str) -> Result<(), AccessDenied> {
            self.check(Permission::Write)?;
            self.document.write(content);
            Ok(())
        }

        pub fn delete(&mut self) -> Result<(), AccessDenied> {
            self.check(Permission::Delete)?;
            self.document.write("");
            Ok(())
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Protection Proxy ---".green().bold());

        let mut reader_view = DocumentProxy::new(
            SecretDocument {
                content: "launch codes".to_string(),
            },
            "intern",
            Permission::Read,
        );

        match reader_view.read() {
            Ok(content) => println!("  intern read: {}", content),
            Err(e) => println!("  {}", e),
        }
        if let Err(e) = reader_view.write("my edits") {
            println!("  {}", e);
        }
        if let Err(e) = reader_view.delete() {
            println!("  {}", e);
        }
        println!();
    }
}

// ============================================================================
// Caching proxy: answer repeats without asking the subject
// ============================================================================

mod caching_proxy {
    use colored::Colorize;
    use std::cell::RefCell;
    use std::collections::HashMap;

    pub trait WeatherService {
        fn forecast(&self, city: &str) -> String;
    }

    pub struct RemoteWeatherService {
        pub calls: RefCell<u32>,
    }

    impl RemoteWeatherService {
        pub fn new() -> Self {
            RemoteWeatherService {
                calls: RefCell::new(0),
            }
        }
    }

    impl WeatherService for RemoteWeatherService {
        fn forecast(&self, city: &str) -> String {
            *self.calls.borrow_mut() += 1;
            println!("  [remote] querying forecast for {}", city);
            format!("Sunny, 25°C in {}", city)
        }
    }

    pub struct CachingWeatherProxy<S: WeatherService> {
        service: S,
        cache: RefCell<HashMap<String, String>>,
    }

    impl<S: WeatherService> CachingWeatherProxy<S> {
        pub fn new(service: S) -> Self {
            CachingWeatherProxy {
                service,
                cache: RefCell::new(HashMap::new()),
            }
        }

        pub fn service(&self) -> &S {
            &self.service
        }
    }

    impl<S: WeatherService> WeatherService for CachingWeatherProxy<S> {
        fn forecast(&self, city: &str) -> String {
            if let Some(cached) = self.cache.borrow().get(city) {
                println!("  [cache] hit for {}", city);
                return cached.clone();
            }
            let fresh = self.service.forecast(city);
            self.cache
                .borrow_mut()
                .insert(city.to_string(), fresh.clone());
            fresh
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Caching Proxy ---".green().bold());

        let proxy = CachingWeatherProxy::new(RemoteWeatherService::new());
        println!("  {}", proxy.forecast("London")); // miss
        println!("  {}", proxy.forecast("London")); // hit
        println!(
            "  remote service called {} time(s) for two requests\n",
            proxy.service().calls.borrow()
        );
    }
}

// ============================================================================
// Logging proxy: audit every query
// ============================================================================

mod logging_proxy {
    use colored::Colorize;
    use std::cell::RefCell;

    pub trait Database {
        fn execute(&self, sql: &str) -> usize;
    }

    pub struct ProductionDatabase;

    impl Database for ProductionDatabase {
        fn execute(&self, sql: &str) -> usize {
            // Pretend row count.
            sql.len() % 7
        }
    }

    pub struct AuditingDatabase<D: Database> {
        inner: D,
        username: String,
        pub audit_log: RefCell<Vec<String>>,
    }

    impl<D: Database> AuditingDatabase<D> {
        pub fn new(inner: D, username: &str) -> Self {
            AuditingDatabase {
                inner,
                username: username.to_string(),
                audit_log: RefCell::new(Vec::new()),
            }
        }
    }

    impl<D: Database> Database for AuditingDatabase<D> {
        fn execute(&self, sql: &str) -> usize {
            let entry = format!("user={} sql={}", self.username, sql);
            println!("  [audit] {}", entry);
            self.audit_log.borrow_mut().push(entry);
            self.inner.execute(sql)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Logging Proxy ---".green().bold());

        let db = AuditingDatabase::new(ProductionDatabase, "alice");
        db.execute("SELECT * FROM accounts");
        db.execute("UPDATE accounts SET balance = 0 WHERE id = 7");
        println!("  {} entries in the audit trail\n", db.audit_log.borrow().len());
    }
}

// ============================================================================
// Remote proxy: hide the wire
// ============================================================================

mod remote_proxy {
    use colored::Colorize;

    pub trait ReportService {
        fn generate(&self, name: &str) -> String;
    }

    /// Stands in for a service living in another process. The proxy owns
    /// connect/serialize/disconnect; the caller sees a plain method call.
    pub struct RemoteReportProxy {
        pub endpoint: String,
    }

    impl ReportService for RemoteReportProxy {
        fn generate(&self, name: &str) -> String {
            println!("  [remote] connecting to {}", self.endpoint);
            println!("  [remote] serializing request for '{}'", name);
            let response = format!("report:{}", name);
            println!("  [remote] disconnecting");
            response
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Remote Proxy ---".green().bold());

        let service = RemoteReportProxy {
            endpoint: "reports.internal:9090".to_string(),
        };
        let report = service.generate("q3-revenue");
        println!("  received {}\n", report);
    }
}

// ============================================================================
// Smart reference: observe the handle count
// ============================================================================

mod smart_reference {
    use colored::Colorize;
    use std::rc::Rc;

    pub struct HeavyResource {
        pub name: String,
    }

    impl Drop for HeavyResource {
        fn drop(&mut self) {
            println!("  releasing resource '{}'", self.name);
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Smart Reference ---".green().bold());

        // Rc is the smart-reference proxy built into the language: it
        // counts handles and frees the subject when the last one drops.
        let resource = Rc::new(HeavyResource {
            name: "texture_atlas".to_string(),
        });
        println!("  handles: {}", Rc::strong_count(&resource));

        let second = Rc::clone(&resource);
        let third = Rc::clone(&resource);
        println!("  handles after sharing: {}", Rc::strong_count(&resource));

        drop(second);
        drop(third);
        println!("  handles after dropping two: {}", Rc::strong_count(&resource));
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. The proxy implements the subject's trait; clients cannot tell");
    println!("2. What it adds varies: laziness, permissions, caching, auditing,");
    println!("   marshalling, or lifetime management");
    println!("3. Denied access is a typed error, not a silent no-op");
}

fn main() {
    println!("{}", "PROXY PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    virtual_proxy::demonstrate();
    protection_proxy::demonstrate();
    caching_proxy::demonstrate();
    logging_proxy::demonstrate();
    remote_proxy::demonstrate();
    smart_reference::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::caching_proxy::{CachingWeatherProxy, RemoteWeatherService, WeatherService};
    use super::logging_proxy::{AuditingDatabase, Database, ProductionDatabase};
    use super::protection_proxy::{DocumentProxy, Permission, SecretDocument};
    use super::virtual_proxy::{Image, ImageProxy};

    #[test]
    fn image_loads_once_no_matter_how_often_displayed() {
        let proxy = ImageProxy::new("big.raw");
        assert_eq!(proxy.load_count(), 0);
        proxy.display();
        proxy.display();
        proxy.display();
        assert_eq!(proxy.load_count(), 1);
    }

    #[test]
    fn permissions_are_ordered() {
        assert!(Permission::Delete > Permission::Write);
        assert!(Permission::Write > Permission::Read);
    }

    #[test]
    fn read_only_user_cannot_write_or_delete() {
        let mut proxy = DocumentProxy::new(
            SecretDocument {
                content: "secret".to_string(),
            },
            "intern",
            Permission::Read,
        );
        assert_eq!(proxy.read().expect("read allowed"), "secret");
        assert!(proxy.write("x").is_err());
        assert!(proxy.delete().is_err());
    }

    #[test]
    fn write_permission_implies_read() {
        let mut proxy = DocumentProxy::new(
            SecretDocument {
                content: "v1".to_string(),
            },
            "editor",
            Permission::Write,
        );
        proxy.write("v2").expect("write allowed");
        assert_eq!(proxy.read().expect("read allowed"), "v2");
        assert!(proxy.delete().is_err());
    }

    #[test]
    fn second_identical_request_is_served_from_cache() {
        let proxy = CachingWeatherProxy::new(RemoteWeatherService::new());
        let first = proxy.forecast("London");
        let second = proxy.forecast("London");
        assert_eq!(first, second);
        assert_eq!(*proxy.service().calls.borrow(), 1);

        proxy.forecast("Oslo");
        assert_eq!(*proxy.service().calls.borrow(), 2);
    }

    #[test]
    fn audit_log_records_user_and_query() {
        let db = AuditingDatabase::new(ProductionDatabase, "alice");
        db.execute("SELECT 1");
        let log = db.audit_log.borrow();
        assert_eq!(log.len(), 1);
        assert!(log[0].contains("alice"));
        assert!(log[0].contains("SELECT 1"));
    }
}
