//! Text renderings of the menu, detail, cart and orders screens.
//!
//! Each view borrows the data it shows and implements `Display`, so callers
//! can write it to any sink.

use core::fmt;

use food_order_core::{CartStore, Catalog, FoodItem};

/// The menu list ("Food Menu"), 1-indexed.
pub struct MenuView<'a>(pub &'a Catalog);

impl fmt::Display for MenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Food Menu")?;
        for (index, item) in self.0.items().iter().enumerate() {
            write_line(f, index + 1, item)?;
        }
        Ok(())
    }
}

/// A single menu item.
pub struct DetailView<'a>(pub &'a FoodItem);

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let item = self.0;
        writeln!(f, "{}", item.name())?;
        writeln!(f, "  Image: {}", item.image())?;
        writeln!(f, "  Price: {}", item.price())
    }
}

/// The current cart with its total ("Your Cart").
pub struct CartView<'a>(pub &'a CartStore);

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.0;
        writeln!(f, "Your Cart")?;
        if store.is_cart_empty() {
            writeln!(f, "  (empty)")?;
        }
        for (index, item) in store.cart_items().iter().enumerate() {
            write_line(f, index + 1, item)?;
        }
        writeln!(f, "Total: {}", store.total_price())
    }
}

/// Order history ("My Orders"), one "Order #N" section per order.
pub struct OrdersView<'a>(pub &'a CartStore);

impl fmt::Display for OrdersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let orders = self.0.orders();
        writeln!(f, "My Orders")?;
        if orders.is_empty() {
            writeln!(f, "  (no orders yet)")?;
        }
        for (index, order) in orders.iter().enumerate() {
            writeln!(
                f,
                "Order #{} ({})",
                index + 1,
                order.placed_at().format("%Y-%m-%d %H:%M UTC")
            )?;
            for item in order.items() {
                writeln!(f, "  {:<20} {}", item.name(), item.price())?;
            }
            writeln!(f, "  {:<20} {}", "Total", order.total_price())?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, position: usize, item: &FoodItem) -> fmt::Result {
    writeln!(f, "  {position:>2}. {:<20} {}", item.name(), item.price())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_view() {
        let catalog = Catalog::sample();
        let text = MenuView(&catalog).to_string();
        assert!(text.starts_with("Food Menu\n"));
        assert!(text.contains(" 1. Burger"));
        assert!(text.contains("$12.99"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_detail_view() {
        let catalog = Catalog::sample();
        let pasta = catalog.get_by_position(4).expect("pasta");
        let text = DetailView(pasta).to_string();
        assert_eq!(text, "Pasta\n  Image: pasta\n  Price: $8.99\n");
    }

    #[test]
    fn test_cart_view_empty() {
        let store = CartStore::new();
        assert_eq!(
            CartView(&store).to_string(),
            "Your Cart\n  (empty)\nTotal: $0.00\n"
        );
    }

    #[test]
    fn test_cart_view_total() {
        let catalog = Catalog::sample();
        let mut store = CartStore::new();
        for item in catalog.items().iter().take(2) {
            store.add_to_cart(item.clone());
        }
        let text = CartView(&store).to_string();
        assert!(text.contains(" 2. Pizza"));
        assert!(text.ends_with("Total: $13.98\n"));
    }

    #[test]
    fn test_orders_view() {
        let catalog = Catalog::sample();
        let mut store = CartStore::new();
        assert!(OrdersView(&store).to_string().contains("(no orders yet)"));

        for item in catalog.items() {
            store.add_to_cart(item.clone());
            store.checkout();
        }
        let text = OrdersView(&store).to_string();
        assert!(text.contains("Order #1"));
        assert!(text.contains("Order #4"));
        assert!(!text.contains("Order #5"));
    }
}
