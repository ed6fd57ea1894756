//! Cart page: line list and order summary.

use bazaar_commerce::cart::{Cart, CartLine};

/// Render the cart page.
pub fn render_cart_page(cart: &Cart) -> String {
    if cart.is_empty() {
        return render_cart_empty();
    }

    let lines: String = cart.items().iter().map(render_cart_line).collect();
    let totals = cart.totals();

    format!(
        r#"<div class="cart-page" data-section="cart">
    <h1>Shopping Cart</h1>
    <ul class="cart-lines">
        {lines}
    </ul>
    <aside class="order-summary">
        <h2>Order Summary</h2>
        <div class="summary-row"><span>Subtotal</span><span>{subtotal}</span></div>
        <div class="summary-row"><span>Delivery Charges</span><span>{delivery}</span></div>
        <div class="summary-row summary-total"><span>Total</span><span>{total}</span></div>
        <button class="checkout-button">Proceed to Checkout</button>
        <button class="clear-cart-button">Clear Cart</button>
    </aside>
</div>"#,
        lines = lines,
        subtotal = totals.subtotal.display(),
        delivery = totals.delivery_total.display(),
        total = totals.grand_total.display()
    )
}

fn render_cart_line(line: &CartLine) -> String {
    let product = &line.product;
    let image = product.image_url.as_deref().unwrap_or("/images/placeholder.svg");

    // Deal lines show the deal price with the list price struck through;
    // otherwise the effective (variant or base) price stands alone.
    let pricing = if product.is_deal_of_the_day {
        let mrp = product
            .mrp
            .map(|m| format!(r#"<span class="line-mrp">{}</span>"#, m.display()))
            .unwrap_or_default();
        format!(
            r#"<span class="line-price line-price--deal">{}</span>{}"#,
            line.unit_price().display(),
            mrp
        )
    } else {
        format!(
            r#"<span class="line-price">{}</span>"#,
            line.unit_price().display()
        )
    };

    let variant_chips = line
        .variant
        .as_ref()
        .map(|variant| {
            let color = variant
                .color
                .as_ref()
                .map(|c| format!(r#"<span class="variant-chip">Color: {}</span>"#, html_escape(c)))
                .unwrap_or_default();
            let size = variant
                .size
                .as_ref()
                .map(|s| format!(r#"<span class="variant-chip">Size: {}</span>"#, html_escape(s)))
                .unwrap_or_default();
            format!(r#"<div class="variant-chips">{}{}</div>"#, color, size)
        })
        .unwrap_or_default();

    format!(
        r#"<li class="cart-line" data-line-id="{line_id}">
        <img src="{image}" alt="{name}" class="line-image">
        <div class="line-details">
            <h3><a href="/product/{product_id}">{name}</a></h3>
            <p class="line-category">{category}</p>
            {variants}
            {pricing}
        </div>
        <div class="line-quantity">
            <button class="quantity-decrease" data-line-id="{line_id}"{decrease_disabled}>-</button>
            <span class="quantity-value">{quantity}</span>
            <button class="quantity-increase" data-line-id="{line_id}">+</button>
            <button class="line-remove" data-line-id="{line_id}">Remove</button>
        </div>
    </li>"#,
        line_id = line.id,
        image = html_escape(image),
        name = html_escape(&product.name),
        product_id = product.id,
        category = html_escape(&product.category),
        variants = variant_chips,
        pricing = pricing,
        quantity = line.quantity,
        decrease_disabled = if line.quantity <= 1 { " disabled" } else { "" }
    )
}

/// Render the empty-cart state.
pub fn render_cart_empty() -> String {
    r#"<div class="cart-page cart-page--empty" data-section="cart">
    <h2>Your cart is empty</h2>
    <p>Looks like you haven't added any items to your cart yet.</p>
    <a href="/" class="continue-shopping">Continue Shopping</a>
</div>"#
        .to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
