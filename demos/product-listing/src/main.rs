//! Product listing demo - walks the cart through a shopping session.
//!
//! Renders the catalog, adds products to the cart (including one refused
//! duplicate), adjusts quantities, prints the resulting cart summary, then
//! clears the cart. Pass `--json` to get the session's final cart as JSON
//! instead of HTML.

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use shopfront_store::{CartAction, CartState, CartStore, Product, ProductId};
use shopfront_ui::{render_cart_summary, render_product_list, ProductList};

/// Shopfront demo - product listing and cart walkthrough
#[derive(Parser)]
#[command(name = "product-listing")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the final state as JSON instead of HTML
    #[arg(long)]
    json: bool,
}

/// Final state report for `--json` output.
#[derive(Serialize)]
struct Report<'a> {
    products: &'a [Product],
    cart: &'a CartState,
}

/// Output handler for demo messages.
struct Output {
    json: bool,
}

impl Output {
    fn new(json: bool) -> Self {
        Self { json }
    }

    fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    fn fragment(&self, html: &str) {
        if self.json {
            return;
        }
        println!("{}", html);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let out = Output::new(cli.json);
    let mut store = CartStore::new();
    let mut list = ProductList::new();

    store.subscribe(|state| {
        tracing::info!(
            items = state.item_count(),
            subtotal = %state.subtotal_display(),
            "cart changed"
        );
    });

    out.header("Catalog");
    out.fragment(&render_product_list(&list));

    out.header("Adding products");
    for id in [ProductId::new(1), ProductId::new(2)] {
        add_product(&mut list, &mut store, id, &out);
    }
    // Second click on an already-added product is refused.
    add_product(&mut list, &mut store, ProductId::new(1), &out);

    out.header("Catalog after adding");
    out.fragment(&render_product_list(&list));

    out.header("Adjusting quantities");
    store.dispatch(CartAction::IncreaseQuantity(ProductId::new(1)));
    out.success("increased Product A to quantity 2");

    store.dispatch(CartAction::DecreaseQuantity(ProductId::new(2)));
    out.success("decreased Product B, quantity stays at 1");

    store.dispatch(CartAction::RemoveItem(ProductId::new(2)));
    out.success("removed Product B");

    out.header("Cart");
    out.fragment(&render_cart_summary(store.state()));

    if cli.json {
        let report = Report {
            products: list.products(),
            cart: store.state(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    out.header("Ending the session");
    store.dispatch(CartAction::Clear);
    out.success("cleared the cart");
    out.fragment(&render_cart_summary(store.state()));

    Ok(())
}

fn add_product(list: &mut ProductList, store: &mut CartStore, id: ProductId, out: &Output) {
    let name = match list.get(id) {
        Some(product) => product.name.clone(),
        None => id.to_string(),
    };

    if list.add_to_cart(id, store) {
        out.success(&format!("added {} to cart", name));
    } else {
        out.warn(&format!("{} already in cart, button disabled", name));
    }
}
