//! Builder: assemble complex objects step by step
//!
//! The telescoping-constructor problem, a validating HTTP request builder,
//! a pizza builder with price calculation, and a fluent SQL query builder.
//!
//! Run with: cargo run --bin creational_05_builder

use colored::Colorize;

// ============================================================================
// Problem: telescoping constructors
// ============================================================================

mod problem_telescoping {
    use colored::Colorize;

    pub struct HttpRequest {
        pub url: String,
        pub method: String,
        pub body: Option<String>,
        pub timeout_secs: u32,
        pub follow_redirects: bool,
    }

    // One constructor per parameter combination. Callers must memorize
    // positions, and every new option doubles the overload count.
    impl HttpRequest {
        pub fn with_url(url: &str) -> Self {
            Self::with_url_method(url, "GET")
        }

        pub fn with_url_method(url: &str, method: &str) -> Self {
            Self::with_url_method_body(url, method, None)
        }

        pub fn with_url_method_body(url: &str, method: &str, body: Option<&str>) -> Self {
            Self::with_url_method_body_timeout(url, method, body, 30)
        }

        pub fn with_url_method_body_timeout(
            url: &str,
            method: &str,
            body: Option<&str>,
            timeout_secs: u32,
        ) -> Self {
            Self::full(url, method, body, timeout_secs, true)
        }

        pub fn full(
            url: &str,
            method: &str,
            body: Option<&str>,
            timeout_secs: u32,
            follow_redirects: bool,
        ) -> Self {
            HttpRequest {
                url: url.to_string(),
                method: method.to_string(),
                body: body.map(str::to_string),
                timeout_secs,
                follow_redirects,
            }
        }
    }

    pub fn demonstrate() {
        println!(
            "{}",
            "--- Problem: Telescoping Constructors ---".yellow().bold()
        );

        let simple = HttpRequest::with_url("https://api.example.com/users");
        // Which argument is which? The call site gives no hint.
        let complex = HttpRequest::full("https://api.example.com/users", "POST", Some("{}"), 60, false);

        println!("  {} {} (timeout {}s)", simple.method, simple.url, simple.timeout_secs);
        println!(
            "  {} {} (timeout {}s, redirects: {})",
            complex.method, complex.url, complex.timeout_secs, complex.follow_redirects
        );
        println!("  Five constructors already, and no validation anywhere\n");
    }
}

// ============================================================================
// Solution: fluent builder with validation
// ============================================================================

mod request_builder {
    use colored::Colorize;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    pub enum BuildError {
        #[error("request URL must not be empty")]
        EmptyUrl,
        #[error("unsupported HTTP method: {0}")]
        InvalidMethod(String),
        #[error("timeout must be positive, got {0}")]
        InvalidTimeout(i64),
    }

    #[derive(Debug)]
    pub struct HttpRequest {
        pub url: String,
        pub method: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<String>,
        pub timeout_secs: u32,
    }

    #[derive(Default)]
    pub struct HttpRequestBuilder {
        url: String,
        method: Option<String>,
        headers: Vec<(String, String)>,
        body: Option<String>,
        timeout_secs: i64,
    }

    impl HttpRequestBuilder {
        pub fn new(url: &str) -> Self {
            HttpRequestBuilder {
                url: url.to_string(),
                timeout_secs: 30,
                ..Default::default()
            }
        }

        pub fn method(mut self, method: &str) -> Self {
            self.method = Some(method.to_string());
            self
        }

        pub fn header(mut self, name: &str, value: &str) -> Self {
            self.headers.push((name.to_string(), value.to_string()));
            self
        }

        pub fn body(mut self, body: &str) -> Self {
            self.body = Some(body.to_string());
            self
        }

        pub fn timeout_secs(mut self, secs: i64) -> Self {
            self.timeout_secs = secs;
            self
        }

        /// All validation happens in one place, at the end.
        pub fn build(self) -> Result<HttpRequest, BuildError> {
            if self.url.is_empty() {
                return Err(BuildError::EmptyUrl);
            }
            let method = self.method.unwrap_or_else(|| "GET".to_string());
            if !matches!(method.as_str(), "GET" | "POST" | "PUT" | "DELETE") {
                return Err(BuildError::InvalidMethod(method));
            }
            if self.timeout_secs <= 0 {
                return Err(BuildError::InvalidTimeout(self.timeout_secs));
            }
            Ok(HttpRequest {
                url: self.url,
                method,
                headers: self.headers,
                body: self.body,
                timeout_secs: self.timeout_secs as u32,
            })
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Solution: Request Builder ---".green().bold());

        match HttpRequestBuilder::new("https://api.example.com/users")
            .method("POST")
            .header("Content-Type", "application/json")
            .body("{\"name\": \"Alice\"}")
            .timeout_secs(60)
            .build()
        {
            Ok(request) => println!(
                "  built {} {} with {} header(s), timeout {}s",
                request.method,
                request.url,
                request.headers.len(),
                request.timeout_secs
            ),
            Err(e) => println!("  build failed: {}", e),
        }

        // The builder rejects nonsense instead of constructing it.
        if let Err(e) = HttpRequestBuilder::new("").build() {
            println!("  rejected: {}", e);
        }
        if let Err(e) = HttpRequestBuilder::new("https://x.dev").method("FETCH").build() {
            println!("  rejected: {}", e);
        }
        if let Err(e) = HttpRequestBuilder::new("https://x.dev").timeout_secs(-5).build() {
            println!("  rejected: {}", e);
        }
        println!();
    }
}

// ============================================================================
// Second example: pizza builder with pricing
// ============================================================================

mod pizza_builder {
    use colored::Colorize;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Size {
        Small,
        Medium,
        Large,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Crust {
        Thin,
        Regular,
        Stuffed,
    }

    pub struct Pizza {
        pub size: Size,
        pub crust: Crust,
        pub toppings: Vec<String>,
        pub extra_sauce: bool,
    }

    impl Pizza {
        pub fn price(&self) -> f64 {
            let base = match self.size {
                Size::Small => 8.99,
                Size::Medium => 12.99,
                Size::Large => 16.99,
            };
            let mut total = base + 1.50 * self.toppings.len() as f64;
            if self.extra_sauce {
                total += 0.99;
            }
            if self.crust == Crust::Stuffed {
                total += 2.99;
            }
            total
        }
    }

    pub struct PizzaBuilder {
        size: Size,
        crust: Crust,
        toppings: Vec<String>,
        extra_sauce: bool,
    }

    impl PizzaBuilder {
        pub fn new(size: Size) -> Self {
            PizzaBuilder {
                size,
                crust: Crust::Regular,
                toppings: Vec::new(),
                extra_sauce: false,
            }
        }

        pub fn crust(mut self, crust: Crust) -> Self {
            self.crust = crust;
            self
        }

        pub fn topping(mut self, topping: &str) -> Self {
            self.toppings.push(topping.to_string());
            self
        }

        pub fn extra_sauce(mut self) -> Self {
            self.extra_sauce = true;
            self
        }

        pub fn build(self) -> Pizza {
            Pizza {
                size: self.size,
                crust: self.crust,
                toppings: self.toppings,
                extra_sauce: self.extra_sauce,
            }
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Second Example: Pizza Builder ---".green().bold());

        let lunch = PizzaBuilder::new(Size::Small).topping("mushrooms").build();
        let dinner = PizzaBuilder::new(Size::Large)
            .crust(Crust::Stuffed)
            .topping("pepperoni")
            .topping("olives")
            .topping("onions")
            .extra_sauce()
            .build();

        println!(
            "  {:?} {:?} pizza with {:?}: ${:.2}",
            lunch.size, lunch.crust, lunch.toppings, lunch.price()
        );
        println!(
            "  {:?} {:?} pizza with {:?}: ${:.2}",
            dinner.size, dinner.crust, dinner.toppings, dinner.price()
        );
        println!();
    }
}

// ============================================================================
// Third example: SQL query builder
// ============================================================================

mod query_builder {
    use colored::Colorize;
    use itertools::Itertools;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    pub enum QueryError {
        #[error("query requires a FROM table")]
        MissingFrom,
    }

    #[derive(Default)]
    pub struct SqlQueryBuilder {
        columns: Vec<String>,
        from: Option<String>,
        joins: Vec<String>,
        conditions: Vec<String>,
        order_by: Vec<String>,
        limit: Option<u64>,
        offset: Option<u64>,
    }

    impl SqlQueryBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn select(mut self, column: &str) -> Self {
            self.columns.push(column.to_string());
            self
        }

        pub fn from(mut self, table: &str) -> Self {
            self.from = Some(table.to_string());
            self
        }

        pub fn join(mut self, clause: &str) -> Self {
            self.joins.push(format!("JOIN {}", clause));
            self
        }

        pub fn left_join(mut self, clause: &str) -> Self {
            self.joins.push(format!("LEFT JOIN {}", clause));
            self
        }

        pub fn where_clause(mut self, condition: &str) -> Self {
            self.conditions.push(condition.to_string());
            self
        }

        pub fn order_by(mut self, clause: &str) -> Self {
            self.order_by.push(clause.to_string());
            self
        }

        pub fn limit(mut self, n: u64) -> Self {
            self.limit = Some(n);
            self
        }

        pub fn offset(mut self, n: u64) -> Self {
            self.offset = Some(n);
            self
        }

        pub fn build(self) -> Result<String, QueryError> {
            let table = self.from.ok_or(QueryError::MissingFrom)?;

            let columns = if self.columns.is_empty() {
                "*".to_string()
            } else {
                self.columns.iter().join(", ")
            };

            let mut query = format!("SELECT {} FROM {}", columns, table);
            for join in &self.joins {
                query.push(' ');
                query.push_str(join);
            }
            if !self.conditions.is_empty() {
                query.push_str(" WHERE ");
                query.push_str(&self.conditions.iter().join(" AND "));
            }
            if !self.order_by.is_empty() {
                query.push_str(" ORDER BY ");
                query.push_str(&self.order_by.iter().join(", "));
            }
            if let Some(limit) = self.limit {
                query.push_str(&format!(" LIMIT {}", limit));
            }
            if let Some(offset) = self.offset {
                query.push_str(&format!(" OFFSET {}", offset));
            }
            Ok(query)
        }
    }

    pub fn demonstrate() {
        println!("{}", "--- Third Example: SQL Query Builder ---".green().bold());

        match SqlQueryBuilder::new()
            .select("users.name")
            .select("orders.total")
            .from("users")
            .left_join("orders ON orders.user_id = users.id")
            .where_clause("users.active = true")
            .where_clause("orders.total > 100")
            .order_by("orders.total DESC")
            .limit(10)
            .offset(20)
            .build()
        {
            Ok(query) => println!("  {}", query),
            Err(e) => println!("  build failed: {}", e),
        }

        if let Err(e) = SqlQueryBuilder::new().select("name").build() {
            println!("  rejected: {}", e);
        }
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Builders replace constructor overloads with named, chainable steps");
    println!("2. Validation belongs in build(), returning Result instead of panicking");
    println!("3. Ownership-taking `self` methods make the chain cheap and misuse hard");
    println!("4. Optional parts default sensibly; only build() commits the object");
}

fn main() {
    println!("{}", "BUILDER PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    problem_telescoping::demonstrate();
    request_builder::demonstrate();
    pizza_builder::demonstrate();
    query_builder::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::pizza_builder::{Crust, PizzaBuilder, Size};
    use super::query_builder::{QueryError, SqlQueryBuilder};
    use super::request_builder::{BuildError, HttpRequestBuilder};

    #[test]
    fn builder_produces_a_valid_request() {
        let request = HttpRequestBuilder::new("https://api.example.com")
            .method("POST")
            .body("{}")
            .build()
            .expect("valid request");
        assert_eq!(request.method, "POST");
        assert_eq!(request.timeout_secs, 30);
    }

    #[test]
    fn builder_rejects_empty_url() {
        assert_eq!(
            HttpRequestBuilder::new("").build().unwrap_err(),
            BuildError::EmptyUrl
        );
    }

    #[test]
    fn builder_rejects_unknown_method() {
        let err = HttpRequestBuilder::new("https://x.dev")
            .method("FETCH")
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidMethod("FETCH".to_string()));
    }

    #[test]
    fn builder_rejects_non_positive_timeout() {
        let err = HttpRequestBuilder::new("https://x.dev")
            .timeout_secs(0)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::InvalidTimeout(0));
    }

    #[test]
    fn pizza_prices_follow_the_menu() {
        let plain_small = PizzaBuilder::new(Size::Small).build();
        assert!((plain_small.price() - 8.99).abs() < 1e-9);

        let loaded = PizzaBuilder::new(Size::Large)
            .crust(Crust::Stuffed)
            .topping("pepperoni")
            .topping("olives")
            .topping("onions")
            .extra_sauce()
            .build();
        // 16.99 + 3 * 1.50 + 0.99 + 2.99
        assert!((loaded.price() - 25.47).abs() < 1e-9);
    }

    #[test]
    fn query_builder_assembles_clauses_in_order() {
        let query = SqlQueryBuilder::new()
            .select("name")
            .from("users")
            .where_clause("active = true")
            .where_clause("age > 21")
            .order_by("name")
            .limit(5)
            .build()
            .expect("valid query");
        assert_eq!(
            query,
            "SELECT name FROM users WHERE active = true AND age > 21 ORDER BY name LIMIT 5"
        );
    }

    #[test]
    fn query_builder_defaults_to_star_and_requires_from() {
        let query = SqlQueryBuilder::new().from("users").build().expect("query");
        assert_eq!(query, "SELECT * FROM users");

        assert_eq!(
            SqlQueryBuilder::new().select("name").build().unwrap_err(),
            QueryError::MissingFrom
        );
    }
}
