//! Interpreter: a tiny language as an object tree
//!
//! Arithmetic expressions over a variable context, then boolean access
//! rules built from And/Or/Not nodes. Each node type knows how to evaluate
//! itself; composing nodes composes the grammar.
//!
//! Run with: cargo run --bin behavioral_11_interpreter

use colored::Colorize;

// ============================================================================
// Arithmetic expressions
// ============================================================================

mod arithmetic {
    use colored::Colorize;
    use std::collections::HashMap;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    pub enum EvalError {
        #[error("undefined variable '{0}'")]
        UndefinedVariable(String),
    }

    #[derive(Default)]
    pub struct Context {
        variables: HashMap<String, i64>,
    }

    impl Context {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set(&mut self, name: &str, value: i64) {
            self.variables.insert(name.to_string(), value);
        }

        pub fn get(&self, name: &str) -> Result<i64, EvalError> {
            self.variables
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
        }
    }

    pub trait Expression {
        fn interpret(&self, context: &Context) -> Result<i64, EvalError>;
        fn to_text(&self) -> String;
    }

    pub struct Number(pub i64);

    impl Expression for Number {
        fn interpret(&self, _context: &Context) -> Result<i64, EvalError> {
            Ok(self.0)
        }

        fn to_text(&self) -> String {
            self.0.to_string()
        }
    }

    pub struct Variable(pub String);

    impl Variable {
        pub fn new(name: &str) -> Self {
            Variable(name.to_string())
        }
    }

    impl Expression for Variable {
        fn interpret(&self, context: &Context) -> Result<i64, EvalError> {
            context.get(&self.0)
        }

        fn to_text(&self) -> String {
            self.0.clone()
        }
    }

    macro_rules! binary_op {
        ($name:ident, $symbol:expr, $op:tt) => {
            pub struct $name {
                pub left: Box<dyn Expression>,
                pub right: Box<dyn Expression>,
            }

            impl $name {
                pub fn new(left: Box<dyn Expression>, right: Box<dyn Expression>) -> Self {
                    $name { left, right }
                }
            }

            impl Expression for $name {
                fn interpret(&self, context: &Context) -> Result<i64, EvalError> {
                    Ok(self.left.interpret(context)? $op self.right.interpret(context)?)
                }

                fn to_text(&self) -> String {
                    format!("({} {} {})", self.left.to_text(), $symbol, self.right.to_text())
                }
            }
        };
    }

    binary_op!(Add, "+", +);
    binary_op!(Subtract, "-", -);
    binary_op!(Multiply, "*", *);

    pub fn demonstrate() {
        println!("{}", "--- Arithmetic Expressions ---".green().bold());

        let mut context = Context::new();
        context.set("x", 10);
        context.set("y", 5);

        let expressions: Vec<Box<dyn Expression>> = vec![
            Box::new(Add::new(
                Box::new(Number(10)),
                Box::new(Multiply::new(Box::new(Number(5)), Box::new(Number(2)))),
            )),
            Box::new(Add::new(
                Box::new(Variable::new("x")),
                Box::new(Variable::new("y")),
            )),
            Box::new(Subtract::new(
                Box::new(Variable::new("x")),
                Box::new(Variable::new("y")),
            )),
        ];

        for expression in &expressions {
            match expression.interpret(&context) {
                Ok(value) => println!("  {} = {}", expression.to_text(), value),
                Err(e) => println!("{}", format!("  {} failed: {}", expression.to_text(), e).red()),
            }
        }

        let bad: Box<dyn Expression> = Box::new(Variable::new("z"));
        if let Err(e) = bad.interpret(&context) {
            println!("{}", format!("  z failed: {}", e).red());
        }
        println!();
    }
}

// ============================================================================
// Boolean access rules
// ============================================================================

mod access_rules {
    use colored::Colorize;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct UserContext {
        flags: HashMap<String, bool>,
    }

    impl UserContext {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set(&mut self, flag: &str, value: bool) {
            self.flags.insert(flag.to_string(), value);
        }

        /// Missing flags read as false rather than erroring; absence of a
        /// permission is a denial.
        pub fn get(&self, flag: &str) -> bool {
            self.flags.get(flag).copied().unwrap_or(false)
        }
    }

    pub trait Rule {
        fn evaluate(&self, context: &UserContext) -> bool;
        fn to_text(&self) -> String;
    }

    pub struct Flag(pub String);

    impl Flag {
        pub fn new(name: &str) -> Self {
            Flag(name.to_string())
        }
    }

    impl Rule for Flag {
        fn evaluate(&self, context: &UserContext) -> bool {
            context.get(&self.0)
        }

        fn to_text(&self) -> String {
            self.0.clone()
        }
    }

    pub struct And(pub Box<dyn Rule>, pub Box<dyn Rule>);

    impl Rule for And {
        fn evaluate(&self, context: &UserContext) -> bool {
            self.0.evaluate(context) && self.1.evaluate(context)
        }

        fn to_text(&self) -> String {
            format!("({} AND {})", self.0.to_text(), self.1.to_text())
        }
    }

    pub struct Or(pub Box<dyn Rule>, pub Box<dyn Rule>);

    impl Rule for Or {
        fn evaluate(&self, context: &UserContext) -> bool {
            self.0.evaluate(context) || self.1.evaluate(context)
        }

        fn to_text(&self) -> String {
            format!("({} OR {})", self.0.to_text(), self.1.to_text())
        }
    }

    pub struct Not(pub Box<dyn Rule>);

    impl Rule for Not {
        fn evaluate(&self, context: &UserContext) -> bool {
            !self.0.evaluate(context)
        }

        fn to_text(&self) -> String {
            format!("(NOT {})", self.0.to_text())
        }
    }

    /// (is_admin AND is_active) AND (NOT is_locked)
    pub fn can_access_admin_panel() -> Box<dyn Rule> {
        Box::new(And(
            Box::new(And(
                Box::new(Flag::new("is_admin")),
                Box::new(Flag::new("is_active")),
            )),
            Box::new(Not(Box::new(Flag::new("is_locked")))),
        ))
    }

    pub fn demonstrate() {
        println!("{}", "--- Access Rules ---".green().bold());

        let rule = can_access_admin_panel();
        println!("  rule: {}", rule.to_text());

        let mut admin = UserContext::new();
        admin.set("is_admin", true);
        admin.set("is_active", true);
        admin.set("is_locked", false);
        println!("  active admin -> {}", rule.evaluate(&admin));

        let mut locked = UserContext::new();
        locked.set("is_admin", true);
        locked.set("is_active", true);
        locked.set("is_locked", true);
        println!("  locked admin -> {}", rule.evaluate(&locked));

        let visitor = UserContext::new();
        println!("  anonymous visitor -> {}", rule.evaluate(&visitor));
        println!();
    }
}

fn print_key_points() {
    println!("{}", "=== Key Points ===".cyan().bold());
    println!("1. Each grammar rule is a type; composing values composes the language");
    println!("2. The context carries variable bindings separately from the tree");
    println!("3. Undefined arithmetic variables are a Result, not a crash; missing");
    println!("   permission flags simply read as false");
}

fn main() {
    println!("{}", "INTERPRETER PATTERN".cyan().bold());
    println!("{}", "=".repeat(70));

    arithmetic::demonstrate();
    access_rules::demonstrate();

    print_key_points();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::access_rules::{can_access_admin_panel, Flag, Not, Rule, UserContext};
    use super::arithmetic::{
        Add, Context, EvalError, Expression, Multiply, Number, Subtract, Variable,
    };

    fn sample_context() -> Context {
        let mut context = Context::new();
        context.set("x", 10);
        context.set("y", 5);
        context
    }

    #[test]
    fn literals_and_nesting_evaluate() {
        let expr = Add::new(
            Box::new(Number(10)),
            Box::new(Multiply::new(Box::new(Number(5)), Box::new(Number(2)))),
        );
        assert_eq!(expr.interpret(&sample_context()), Ok(20));
        assert_eq!(expr.to_text(), "(10 + (5 * 2))");
    }

    #[test]
    fn variables_resolve_through_the_context() {
        let context = sample_context();
        let sum = Add::new(Box::new(Variable::new("x")), Box::new(Variable::new("y")));
        let diff = Subtract::new(Box::new(Variable::new("x")), Box::new(Variable::new("y")));
        assert_eq!(sum.interpret(&context), Ok(15));
        assert_eq!(diff.interpret(&context), Ok(5));
    }

    #[test]
    fn undefined_variables_are_an_error() {
        let expr = Variable::new("z");
        assert_eq!(
            expr.interpret(&sample_context()),
            Err(EvalError::UndefinedVariable("z".to_string()))
        );
    }

    #[test]
    fn admin_rule_requires_all_three_conditions() {
        let rule = can_access_admin_panel();

        let mut user = UserContext::new();
        user.set("is_admin", true);
        user.set("is_active", true);
        user.set("is_locked", false);
        assert!(rule.evaluate(&user));

        user.set("is_locked", true);
        assert!(!rule.evaluate(&user));

        user.set("is_locked", false);
        user.set("is_active", false);
        assert!(!rule.evaluate(&user));
    }

    #[test]
    fn missing_flags_read_as_false() {
        let rule = can_access_admin_panel();
        assert!(!rule.evaluate(&UserContext::new()));

        // NOT of a missing flag is true.
        let unlocked = Not(Box::new(Flag::new("is_locked")));
        assert!(unlocked.evaluate(&UserContext::new()));
    }
}
