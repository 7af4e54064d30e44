//! HTML fragment renderers for the product listing and cart summary.

use crate::product_list::ProductList;
use shopfront_store::CartState;

/// Render the product listing section.
pub fn render_product_list(list: &ProductList) -> String {
    let items: String = list
        .products()
        .iter()
        .map(|product| {
            let disabled = if list.is_disabled(product.id) {
                " disabled"
            } else {
                ""
            };
            format!(
                r#"<li class="product-card" data-product-id="{id}">
        <h2 class="product-name">{name}</h2>
        <p class="product-price">{price}</p>
        <button class="add-to-cart" data-product-id="{id}"{disabled}>Add to Cart</button>
    </li>"#,
                id = product.id,
                name = escape_html(&product.name),
                price = product.price_display(),
                disabled = disabled
            )
        })
        .collect();

    format!(
        r#"<section class="product-list" data-section="products">
    <ul class="product-grid">{items}</ul>
</section>"#,
        items = items
    )
}

/// Render the cart summary section.
pub fn render_cart_summary(state: &CartState) -> String {
    if state.is_empty() {
        return r#"<section class="cart-summary cart-summary--empty" data-section="cart">
    <p class="cart-empty">Your cart is empty.</p>
</section>"#
            .to_string();
    }

    let lines: String = state
        .cart_items
        .iter()
        .map(|item| {
            format!(
                r#"<li class="cart-line" data-product-id="{id}">
        <span class="cart-line-name">{name}</span>
        <span class="cart-line-quantity">{price} x {quantity}</span>
        <span class="cart-line-subtotal">{subtotal}</span>
    </li>"#,
                id = item.id,
                name = escape_html(&item.name),
                price = item.price_display(),
                quantity = item.quantity,
                subtotal = item.subtotal_display()
            )
        })
        .collect();

    format!(
        r#"<section class="cart-summary" data-section="cart">
    <ul class="cart-lines">{lines}</ul>
    <p class="cart-total">Total ({count} items): {total}</p>
</section>"#,
        lines = lines,
        count = state.item_count(),
        total = state.subtotal_display()
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
