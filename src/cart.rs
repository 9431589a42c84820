//! Cart Operations
//!
//! Pure mutation helpers for the in-progress cart. Lines are keyed by menu
//! item identity; customization never affects merging.

use crate::api::ApiError;
use crate::models::{CartLine, MenuItem, OrderLine};

/// Add one of `item`. An existing line for the same item gains quantity,
/// a new item gets a fresh uncustomized line.
pub fn add(cart: &mut Vec<CartLine>, item: &MenuItem) {
    if let Some(line) = cart.iter_mut().find(|l| l.item.id == item.id) {
        line.quantity += 1;
    } else {
        cart.push(CartLine {
            item: item.clone(),
            quantity: 1,
            removed_ingredients: Vec::new(),
            special_request: None,
        });
    }
}

/// Add a customized variant. Replaces any existing line for the same item
/// wholesale, resetting quantity to 1.
pub fn add_customized(
    cart: &mut Vec<CartLine>,
    item: &MenuItem,
    removed_ingredients: Vec<String>,
    special_request: Option<String>,
) {
    let line = CartLine {
        item: item.clone(),
        quantity: 1,
        removed_ingredients,
        special_request,
    };
    if let Some(existing) = cart.iter_mut().find(|l| l.item.id == item.id) {
        *existing = line;
    } else {
        cart.push(line);
    }
}

/// Set the quantity on the matching line. Values below 1 are ignored.
pub fn update_quantity(cart: &mut Vec<CartLine>, item_id: u32, quantity: u32) {
    if quantity < 1 {
        return;
    }
    if let Some(line) = cart.iter_mut().find(|l| l.item.id == item_id) {
        line.quantity = quantity;
    }
}

/// Delete the matching line.
pub fn remove(cart: &mut Vec<CartLine>, item_id: u32) {
    cart.retain(|l| l.item.id != item_id);
}

/// Sum of price × quantity over all lines.
pub fn total(cart: &[CartLine]) -> f64 {
    cart.iter().map(|l| l.line_total()).sum()
}

/// Project the cart into the shape the order endpoint expects.
pub fn order_lines(cart: &[CartLine]) -> Vec<OrderLine> {
    cart.iter()
        .map(|l| OrderLine {
            item_id: l.item.id,
            name: l.item.name.clone(),
            quantity: l.quantity,
            price: l.item.price,
            removed_ingredients: l.removed_ingredients.clone(),
            special_request: l.special_request.clone(),
        })
        .collect()
}

/// Why a submit attempt is rejected before any request goes out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlock {
    EmptyCart,
    NotLoggedIn,
}

/// Local gate in front of order submission. A blocked cart must never
/// reach the network.
pub fn check_submit(cart: &[CartLine], has_token: bool) -> Result<(), SubmitBlock> {
    if cart.is_empty() {
        return Err(SubmitBlock::EmptyCart);
    }
    if !has_token {
        return Err(SubmitBlock::NotLoggedIn);
    }
    Ok(())
}

/// What the cart panel should do after a failed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// 400 naming unavailable items: show the message and offer pruning
    ItemUnavailable { message: String },
    /// Any other 400: show the server's validation message
    Rejected { message: String },
    /// 401: clear the token and send the user back to login
    SessionExpired,
    /// 404: the menu changed under us, refetch it
    StaleMenu,
    /// Everything else: generic failure, cart untouched
    Other { message: String },
}

pub fn classify_submit_failure(err: &ApiError) -> SubmitFailure {
    match err {
        ApiError::Status { status: 400, message } => {
            if message.to_lowercase().contains("unavailable") {
                SubmitFailure::ItemUnavailable {
                    message: message.clone(),
                }
            } else {
                SubmitFailure::Rejected {
                    message: message.clone(),
                }
            }
        }
        err if err.is_unauthorized() => SubmitFailure::SessionExpired,
        err if err.is_not_found() => SubmitFailure::StaleMenu,
        other => SubmitFailure::Other {
            message: other.to_string(),
        },
    }
}

/// Drop the lines whose item names the server's unavailable-message mentions.
/// Matching is case-insensitive and on word boundaries, so a short item name
/// inside an unrelated word does not count.
pub fn prune_named(cart: &mut Vec<CartLine>, message: &str) {
    let message = message.to_lowercase();
    cart.retain(|l| !mentions_name(&message, &l.item.name.to_lowercase()));
}

fn mentions_name(message: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = message[from..].find(name) {
        let begin = from + pos;
        let end = begin + name.len();
        let bounded_left = message[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_right = message[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if bounded_left && bounded_right {
            return true;
        }
        from = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            category: "Mains".to_string(),
            ingredients: vec!["onion".to_string(), "cheese".to_string()],
            image_url: None,
            available: true,
        }
    }

    #[test]
    fn adding_same_item_twice_merges_into_one_line() {
        let mut cart = Vec::new();
        let burger = make_item(1, "Burger", 4.5);

        add(&mut cart, &burger);
        add(&mut cart, &burger);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
        assert!(cart[0].removed_ingredients.is_empty());
    }

    #[test]
    fn adding_customized_variant_replaces_line_and_resets_quantity() {
        let mut cart = Vec::new();
        let burger = make_item(1, "Burger", 4.5);

        add(&mut cart, &burger);
        add(&mut cart, &burger);
        add_customized(
            &mut cart,
            &burger,
            vec!["onion".to_string()],
            Some("extra crispy".to_string()),
        );

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);
        assert_eq!(cart[0].removed_ingredients, vec!["onion".to_string()]);
        assert_eq!(cart[0].special_request.as_deref(), Some("extra crispy"));
    }

    #[test]
    fn customized_add_of_new_item_inserts_line() {
        let mut cart = Vec::new();
        let salad = make_item(2, "Salad", 3.0);

        add_customized(&mut cart, &salad, vec!["cheese".to_string()], None);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn update_quantity_below_one_leaves_cart_unchanged() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));
        let before = cart.clone();

        update_quantity(&mut cart, 1, 0);

        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_replaces_matching_line_quantity() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));

        update_quantity(&mut cart, 1, 5);
        assert_eq!(cart[0].quantity, 5);

        // unknown id is a no-op
        update_quantity(&mut cart, 99, 3);
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn remove_deletes_only_the_matching_line() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));
        add(&mut cart, &make_item(2, "Salad", 3.0));

        remove(&mut cart, 1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].item.id, 2);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));
        add(&mut cart, &make_item(1, "Burger", 4.5));
        add(&mut cart, &make_item(2, "Salad", 3.0));

        assert_eq!(total(&cart), 4.5 * 2.0 + 3.0);
    }

    #[test]
    fn empty_cart_total_is_zero() {
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn submit_gate_blocks_empty_cart_before_any_request() {
        assert_eq!(check_submit(&[], true), Err(SubmitBlock::EmptyCart));
        assert_eq!(check_submit(&[], false), Err(SubmitBlock::EmptyCart));
    }

    #[test]
    fn submit_gate_blocks_missing_token() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));

        assert_eq!(check_submit(&cart, false), Err(SubmitBlock::NotLoggedIn));
        assert_eq!(check_submit(&cart, true), Ok(()));
    }

    #[test]
    fn order_lines_carry_customization_and_price() {
        let mut cart = Vec::new();
        let burger = make_item(1, "Burger", 4.5);
        add_customized(&mut cart, &burger, vec!["onion".to_string()], None);
        update_quantity(&mut cart, 1, 3);

        let lines = order_lines(&cart);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item_id, 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(lines[0].price, 4.5);
        assert_eq!(lines[0].removed_ingredients, vec!["onion".to_string()]);
    }

    #[test]
    fn unavailable_400_offers_pruning() {
        let err = ApiError::Status {
            status: 400,
            message: "Burger is currently unavailable".to_string(),
        };
        assert_eq!(
            classify_submit_failure(&err),
            SubmitFailure::ItemUnavailable {
                message: "Burger is currently unavailable".to_string()
            }
        );
    }

    #[test]
    fn plain_400_is_a_rejection() {
        let err = ApiError::Status {
            status: 400,
            message: "total mismatch".to_string(),
        };
        assert_eq!(
            classify_submit_failure(&err),
            SubmitFailure::Rejected {
                message: "total mismatch".to_string()
            }
        );
    }

    #[test]
    fn status_401_expires_the_session() {
        let err = ApiError::Status {
            status: 401,
            message: "token expired".to_string(),
        };
        assert_eq!(classify_submit_failure(&err), SubmitFailure::SessionExpired);
    }

    #[test]
    fn status_404_marks_the_menu_stale() {
        let err = ApiError::Status {
            status: 404,
            message: "unknown item".to_string(),
        };
        assert_eq!(classify_submit_failure(&err), SubmitFailure::StaleMenu);
    }

    #[test]
    fn network_errors_fall_back_to_generic_failure() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(
            classify_submit_failure(&err),
            SubmitFailure::Other {
                message: "network error: connection refused".to_string()
            }
        );
    }

    #[test]
    fn prune_drops_lines_named_in_the_message() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Burger", 4.5));
        add(&mut cart, &make_item(2, "Salad", 3.0));

        prune_named(&mut cart, "Sorry, BURGER is currently unavailable");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].item.id, 2);
    }

    #[test]
    fn prune_ignores_names_embedded_in_other_words() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Ice", 1.5));

        prune_named(&mut cart, "Sorry, table service is unavailable right now");
        assert_eq!(cart.len(), 1);

        prune_named(&mut cart, "Sorry, Ice is unavailable right now");
        assert!(cart.is_empty());
    }

    #[test]
    fn prune_matches_multi_word_names() {
        let mut cart = Vec::new();
        add(&mut cart, &make_item(1, "Caesar Salad", 6.0));
        add(&mut cart, &make_item(2, "Salad", 3.0));

        prune_named(&mut cart, "Caesar Salad is unavailable");

        // "salad" is itself a bounded word inside the message, so both match
        assert!(cart.is_empty());
    }
}
