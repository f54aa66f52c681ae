//! # Interactive Shell
//!
//! Reads one command per line, runs it against the owned state, prints the
//! resulting screen.
//!
//! ## Loop
//! ```text
//! stdin line ──► Command::from_str ──► Shell::execute ──► view::* ──► stdout
//!                      │                     │
//!                      └──── ApiError ───────┴──► "error: ..." (loop continues)
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info, warn};
use verdant_core::payment::PaymentForm;
use verdant_core::{Catalog, ProductId};

use crate::commands::{cart, payment, product};
use crate::error::{ApiError, AppError};
use crate::state::{CartStore, ConfigState};
use crate::view;

const PROMPT: &str = "verdant> ";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products,
    Show(ProductId),
    Cart,
    Add(ProductId),
    Set(ProductId, i64),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Clear,
    Pay(PaymentForm),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(ApiError::validation("empty command"));
        };

        match (name.to_ascii_lowercase().as_str(), args) {
            ("products" | "shop", []) => Ok(Command::Products),
            ("show", [id]) => Ok(Command::Show(parse_id(id)?)),
            ("cart", []) => Ok(Command::Cart),
            ("add", [id]) => Ok(Command::Add(parse_id(id)?)),
            ("set", [id, qty]) => Ok(Command::Set(parse_id(id)?, parse_quantity(qty)?)),
            ("inc" | "+", [id]) => Ok(Command::Increment(parse_id(id)?)),
            ("dec" | "-", [id]) => Ok(Command::Decrement(parse_id(id)?)),
            ("remove" | "rm", [id]) => Ok(Command::Remove(parse_id(id)?)),
            ("clear", []) => Ok(Command::Clear),
            ("pay", [holder @ .., number, expiry, cvv]) if !holder.is_empty() => {
                Ok(Command::Pay(PaymentForm {
                    card_holder: holder.join(" "),
                    card_number: number.to_string(),
                    expiry: expiry.to_string(),
                    cvv: cvv.to_string(),
                }))
            }
            ("pay", _) => Err(ApiError::validation(
                "usage: pay <holder> <number> <MM/YY> <cvv>",
            )),
            ("help" | "?", _) => Ok(Command::Help),
            ("quit" | "exit", _) => Ok(Command::Quit),
            (
                "products" | "shop" | "show" | "cart" | "add" | "set" | "inc" | "+" | "dec" | "-"
                | "remove" | "rm" | "clear",
                _,
            ) => Err(ApiError::validation(format!(
                "wrong number of arguments for `{}`, see `help`",
                name
            ))),
            _ => Err(ApiError::validation(format!(
                "unknown command `{}`, see `help`",
                name
            ))),
        }
    }
}

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse::<u32>().map(ProductId).map_err(|_| {
        ApiError::validation(format!("product id must be a whole number, got `{}`", raw))
    })
}

fn parse_quantity(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        ApiError::validation(format!("quantity must be a whole number, got `{}`", raw))
    })
}

/// What the loop should do after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// The host: owns the catalog, configuration and the single cart store.
#[derive(Debug)]
pub struct Shell {
    catalog: Catalog,
    config: ConfigState,
    store: CartStore,
}

impl Shell {
    /// Creates a shell with an empty cart.
    pub fn new(catalog: Catalog, config: ConfigState) -> Self {
        Shell {
            catalog,
            config,
            store: CartStore::new(),
        }
    }

    /// The cart store, for inspection.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// Runs one command.
    pub fn execute(&mut self, command: Command) -> Result<Reply, ApiError> {
        let config = &self.config;
        let output = match command {
            Command::Products => {
                view::products(&product::list_products(&self.catalog, &self.store), config)
            }
            Command::Show(id) => {
                let found = product::get_product(&self.catalog, id)?;
                view::product(&found, &self.store.cart().button_label(id), config)
            }
            Command::Cart => view::cart(&cart::get_cart(&self.store), config),
            Command::Add(id) => {
                let response = cart::add_to_cart(&self.catalog, &mut self.store, id)?;
                let label = self.store.cart().button_label(id);
                format!("{}\n{}", label, view::cart(&response, config))
            }
            Command::Set(id, qty) => {
                view::cart(&cart::update_cart_item(&mut self.store, id, qty), config)
            }
            Command::Increment(id) => {
                view::cart(&cart::increment_item(&mut self.store, id)?, config)
            }
            Command::Decrement(id) => {
                view::cart(&cart::decrement_item(&mut self.store, id)?, config)
            }
            Command::Remove(id) => view::cart(&cart::remove_from_cart(&mut self.store, id), config),
            Command::Clear => view::cart(&cart::clear_cart(&mut self.store), config),
            Command::Pay(form) => view::payment(
                &payment::submit_payment(&mut self.store, config, &form)?,
                config,
            ),
            Command::Help => view::HELP.to_string(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }

    /// Parses and runs one input line. Errors become inline messages.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Output(String::new());
        }

        match line.parse::<Command>().and_then(|command| self.execute(command)) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "command failed");
                Reply::Output(format!("error: {}", err.message))
            }
        }
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), AppError> {
        info!(products = self.catalog.len(), "shell started");
        writeln!(output, "{}", view::banner(&self.config, self.catalog.len()))?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("end of input");
                writeln!(output)?;
                break;
            };

            match self.handle_line(&line?) {
                Reply::Output(text) if text.is_empty() => {}
                Reply::Output(text) => writeln!(output, "{}", text)?,
                Reply::Quit => break,
            }
        }

        writeln!(output, "Goodbye!")?;
        info!("shell stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn shell() -> Shell {
        let catalog = Catalog::from_json(
            r#"{"gardening_items": [
                {"id": 1, "name": "Hand Trowel", "price": 10},
                {"id": 2, "name": "Pruning Shears", "price": 5.5}
            ]}"#,
        )
        .unwrap();
        Shell::new(catalog, ConfigState::default())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("products".parse::<Command>().unwrap(), Command::Products);
        assert_eq!("  ADD 3 ".parse::<Command>().unwrap(), Command::Add(ProductId(3)));
        assert_eq!(
            "set 3 -2".parse::<Command>().unwrap(),
            Command::Set(ProductId(3), -2)
        );
        assert_eq!("dec 4".parse::<Command>().unwrap(), Command::Decrement(ProductId(4)));
        assert_eq!("show 2".parse::<Command>().unwrap(), Command::Show(ProductId(2)));
        assert_eq!("quit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_pay() {
        let command = "pay Jane Q Gardener 4000123412341234 11/28 987"
            .parse::<Command>()
            .unwrap();
        assert_eq!(
            command,
            Command::Pay(PaymentForm {
                card_holder: "Jane Q Gardener".to_string(),
                card_number: "4000123412341234".to_string(),
                expiry: "11/28".to_string(),
                cvv: "987".to_string(),
            })
        );

        let err = "pay 4000123412341234 11/28 987".parse::<Command>().unwrap_err();
        assert!(err.message.starts_with("usage: pay"));
    }

    #[test]
    fn test_parse_errors() {
        let err = "add one".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "product id must be a whole number, got `one`");

        let err = "add".parse::<Command>().unwrap_err();
        assert!(err.message.starts_with("wrong number of arguments"));

        let err = "water 1".parse::<Command>().unwrap_err();
        assert_eq!(err.message, "unknown command `water`, see `help`");

        assert!("set 1 1.5".parse::<Command>().is_err());
    }

    #[test]
    fn test_handle_line_scenario() {
        let mut shell = shell();

        shell.handle_line("add 1");
        shell.handle_line("add 1");
        assert_eq!(shell.store().cart().button_label(ProductId(1)), "Added (2)");

        shell.handle_line("set 1 5");
        assert_eq!(shell.store().cart().line(ProductId(1)).unwrap().quantity, 5);

        shell.handle_line("remove 1");
        assert!(shell.store().cart().is_empty());
    }

    #[test]
    fn test_errors_are_inline() {
        let mut shell = shell();

        assert_eq!(
            shell.handle_line("add 42"),
            Reply::Output("error: Product not found: 42".to_string())
        );
        assert_eq!(
            shell.handle_line("pay Jane 4000123412341234 11/28 987"),
            Reply::Output("error: Cart is empty, nothing to pay for".to_string())
        );
        assert_eq!(shell.handle_line("   "), Reply::Output(String::new()));
    }

    #[test]
    fn test_show_product() {
        let mut shell = shell();
        shell.handle_line("add 2");

        let Reply::Output(text) = shell.handle_line("show 2") else {
            panic!("expected output");
        };
        assert!(text.starts_with("#2 Pruning Shears\n  Price: $5.50"));
        assert!(text.ends_with("[Added (1)]"));

        assert_eq!(
            shell.handle_line("show 9"),
            Reply::Output("error: Product not found: 9".to_string())
        );
    }

    #[test]
    fn test_huge_quantity_keeps_totals_defined() {
        let mut shell = shell();
        shell.handle_line("add 1");

        let Reply::Output(text) = shell.handle_line("set 1 9223372036854775807") else {
            panic!("expected output");
        };
        assert!(text.contains("Total: $92233720368547758.07 (9223372036854775807 items)"));

        shell.handle_line("add 2");
        assert_eq!(shell.store().cart().total_quantity(), i64::MAX);
        assert_eq!(
            shell.store().cart().button_label(ProductId(1)),
            "Added (9223372036854775807)"
        );
    }

    #[test]
    fn test_add_reports_button_label() {
        let mut shell = shell();
        let Reply::Output(text) = shell.handle_line("add 2") else {
            panic!("expected output");
        };
        assert!(text.starts_with("Added (1)\n"));
        assert!(text.contains("Total: $5.50 (1 items)"));
    }

    #[test]
    fn test_run_until_quit() {
        let mut shell = shell();
        let input = b"add 1\nadd 2\nset 1 2\ncart\nquit\nadd 1\n" as &[u8];
        let mut output = Vec::new();

        shell.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Welcome to Verdant Garden Supply!"));
        assert!(text.contains("Total: $25.50 (3 items)"));
        assert!(text.ends_with("Goodbye!\n"));
        // Lines after `quit` are not executed.
        assert_eq!(shell.store().cart().line(ProductId(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_run_until_end_of_input() {
        let mut shell = shell();
        let mut output = Vec::new();

        shell.run(b"add 2\n" as &[u8], &mut output).unwrap();

        assert_eq!(shell.store().cart().item_count(), 1);
        assert!(String::from_utf8(output).unwrap().ends_with("Goodbye!\n"));
    }
}
