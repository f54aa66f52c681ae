//! Text rendering for the shell screens.

use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

use crate::commands::cart::CartResponse;
use crate::commands::payment::PaymentResponse;
use crate::commands::product::ProductListing;
use crate::state::ConfigState;
use verdant_core::Product;

/// Shell usage.
pub const HELP: &str = "\
Commands:
  products                          list the catalog
  show <id>                         one product's details
  cart                              show the cart
  add <id>                          add one unit of a product
  set <id> <qty>                    set a line's quantity (negative becomes 0)
  inc <id> | dec <id>               the cart screen's +/- buttons
  remove <id>                       remove a line
  clear                             empty the cart
  pay <holder> <number> <MM/YY> <cvv>
                                    mock checkout (card number without spaces)
  help                              this text
  quit                              leave the shop";

/// Greeting printed once at startup.
pub fn banner(config: &ConfigState, product_count: usize) -> String {
    format!(
        "Welcome to {}! {} products in stock. Type `help` for commands.",
        config.store_name, product_count
    )
}

/// The shop screen.
pub fn products(listings: &[ProductListing], config: &ConfigState) -> String {
    if listings.is_empty() {
        return "The catalog is empty.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["ID", "Product", "Description", "Price", ""]);
    for listing in listings {
        let product = &listing.product;
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.description.clone(),
            config.format_money(product.price),
            format!("[{}]", listing.button_label),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..4), Alignment::right());
    table.to_string()
}

/// A single product card.
pub fn product(product: &Product, button_label: &str, config: &ConfigState) -> String {
    let mut out = format!(
        "#{} {}\n  Price: {}",
        product.id,
        product.name,
        config.format_money(product.price)
    );
    if !product.description.is_empty() {
        out.push_str(&format!("\n  {}", product.description));
    }
    if !product.image.is_empty() {
        out.push_str(&format!("\n  Image: {}", product.image));
    }
    out.push_str(&format!("\n  [{}]", button_label));
    out
}

/// The cart screen.
pub fn cart(response: &CartResponse, config: &ConfigState) -> String {
    let mut out = String::new();

    if response.items.is_empty() {
        out.push_str("Your cart is empty.");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["ID", "Item", "Price", "Qty", "Line total"]);
        for line in &response.items {
            builder.push_record([
                line.id.to_string(),
                line.name.clone(),
                config.format_money(line.price),
                line.quantity.to_string(),
                config.format_money(line.line_total()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..5), Alignment::right());
        out.push_str(&table.to_string());
    }

    out.push_str(&format!(
        "\nTotal: {} ({} items)",
        config.format_money(response.totals.total),
        response.totals.total_quantity
    ));
    out
}

/// The confirmation modal.
pub fn payment(response: &PaymentResponse, config: &ConfigState) -> String {
    let confirmation = &response.confirmation;
    let mut out = format!(
        "Payment confirmed.\n  Reference: {}\n  Charged:   {} to card ending {}\n  Holder:    {}",
        confirmation.reference,
        config.format_money(confirmation.amount),
        confirmation.card_last_four,
        confirmation.card_holder,
    );
    if response.cart_cleared {
        out.push_str("\nYour cart has been emptied.");
    }
    out
}
