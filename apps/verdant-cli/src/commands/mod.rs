//! # Commands Module
//!
//! Everything the shell can ask of the application.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog listing
//! ├── cart.rs     ◄─── Cart manipulation
//! └── payment.rs  ◄─── Mock checkout
//! ```
//!
//! ## State Injection
//! Each handler declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(store: &CartStore)
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &Catalog, store: &mut CartStore, product_id: ProductId)
//!
//! // Needs cart and config
//! fn submit_payment(store: &mut CartStore, config: &ConfigState, form: &PaymentForm)
//! ```

pub mod cart;
pub mod payment;
pub mod product;
