//! Order assembly
//!
//! Converts the current cart lines plus customer/contact metadata into
//! the wire payload for order submission. Validation happens here,
//! before any network call, so a rejected order never causes a partial
//! submission. Assembly never mutates the cart; the caller clears it
//! only after the submission endpoint reports success.

use crate::error::{CartError, CartResult};
use crate::pricing;
use regex::Regex;
use shared::models::{CartLine, CustomerContact, OrderLine, OrderPayload};
use shared::util::now_millis;
use std::sync::OnceLock;

/// Minimal phone shape: optional leading `+`, digits with optional
/// space/dash/dot separators
fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9 .\-]*$").expect("valid phone regex"))
}

/// Minimal `local@domain.tld` shape
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("valid email regex"))
}

/// Minimum digit count for a plausible phone number
const MIN_PHONE_DIGITS: usize = 7;

/// Builds order payloads for one restaurant
#[derive(Debug, Clone)]
pub struct OrderAssembler {
    restaurant_id: String,
}

impl OrderAssembler {
    pub fn new(restaurant_id: impl Into<String>) -> Self {
        Self {
            restaurant_id: restaurant_id.into(),
        }
    }

    /// Assemble the submission payload from the current cart lines.
    ///
    /// Validation order: restaurant context, non-empty cart, contact
    /// fields (required only when no table number is supplied), email
    /// shape. `total_amount` equals the cart subtotal at assembly
    /// time; each payload line is a faithful snapshot of its cart
    /// line.
    pub fn assemble(
        &self,
        lines: &[CartLine],
        table_number: Option<&str>,
        customer: Option<&CustomerContact>,
        notes: Option<&str>,
    ) -> CartResult<OrderPayload> {
        if self.restaurant_id.trim().is_empty() {
            return Err(CartError::MissingRestaurantContext);
        }
        if lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        // Counter/pickup orders need a reachable customer; with a
        // table number the staff can find the diner, so contact
        // fields are optional.
        if table_number.is_none() {
            let contact = customer.ok_or(CartError::MissingContactInfo)?;
            if contact.name.trim().is_empty() {
                return Err(CartError::MissingContactInfo);
            }
            validate_phone(&contact.phone)?;
        }

        if let Some(contact) = customer {
            validate_email(contact.email.as_deref())?;
        }

        let payload_lines: Vec<OrderLine> = lines
            .iter()
            .map(|l| OrderLine {
                item_id: l.item.id.clone(),
                name: l.item.name.clone(),
                quantity: l.quantity,
                unit_price: l.unit_price,
                selected_components: l.selected_components.clone(),
                selected_extras: l.selected_extras.clone(),
                line_total: pricing::line_total(l.unit_price, l.quantity),
            })
            .collect();

        Ok(OrderPayload {
            restaurant_id: self.restaurant_id.clone(),
            table_number: table_number.map(str::to_string),
            client_request_id: uuid::Uuid::new_v4().to_string(),
            lines: payload_lines,
            customer: customer.cloned(),
            notes: notes.map(str::to_string),
            total_amount: pricing::cart_subtotal(lines),
            created_at: now_millis(),
        })
    }
}

fn validate_phone(phone: &str) -> CartResult<()> {
    let trimmed = phone.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    if trimmed.is_empty() || digits < MIN_PHONE_DIGITS || !phone_regex().is_match(trimmed) {
        return Err(CartError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> CartResult<()> {
    // Absent or empty email is always accepted
    let Some(email) = email else { return Ok(()) };
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    if !email_regex().is_match(trimmed) {
        return Err(CartError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ExtraOption, MenuItemSnapshot};

    fn line(key: &str, unit: f64, quantity: i32) -> CartLine {
        CartLine {
            configuration_key: key.to_string(),
            item: MenuItemSnapshot {
                id: "item:burger".to_string(),
                name: "Burger".to_string(),
                base_price: 8.0,
                image: String::new(),
                components: vec!["Lettuce".to_string()],
            },
            quantity,
            selected_components: vec!["Lettuce".to_string()],
            selected_extras: vec![ExtraOption {
                name: "Cheese".to_string(),
                price: 1.0,
            }],
            unit_price: unit,
            added_at: 0,
        }
    }

    fn contact(name: &str, phone: &str, email: Option<&str>) -> CustomerContact {
        CustomerContact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_assemble_table_order() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 2), line("b", 8.0, 1)];

        let payload = assembler
            .assemble(&lines, Some("12"), None, Some("no ice"))
            .unwrap();

        assert_eq!(payload.restaurant_id, "restaurant:1");
        assert_eq!(payload.table_number.as_deref(), Some("12"));
        assert_eq!(payload.lines.len(), 2);
        assert_eq!(payload.lines[0].line_total, 18.0);
        assert_eq!(payload.total_amount, 26.0);
        assert_eq!(payload.notes.as_deref(), Some("no ice"));
        assert!(!payload.client_request_id.is_empty());
    }

    #[test]
    fn test_assemble_preserves_configuration() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 1)];

        let payload = assembler.assemble(&lines, Some("3"), None, None).unwrap();

        assert_eq!(payload.lines[0].selected_components, vec!["Lettuce"]);
        assert_eq!(payload.lines[0].selected_extras[0].name, "Cheese");
        assert_eq!(payload.lines[0].unit_price, 9.0);
    }

    #[test]
    fn test_missing_restaurant_context() {
        let assembler = OrderAssembler::new("  ");
        let err = assembler
            .assemble(&[line("a", 9.0, 1)], Some("1"), None, None)
            .unwrap_err();
        assert!(matches!(err, CartError::MissingRestaurantContext));
    }

    #[test]
    fn test_empty_cart_rejected() {
        let assembler = OrderAssembler::new("restaurant:1");
        let err = assembler.assemble(&[], Some("1"), None, None).unwrap_err();
        assert!(matches!(err, CartError::EmptyCart));
    }

    #[test]
    fn test_pickup_requires_contact() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 1)];

        let err = assembler.assemble(&lines, None, None, None).unwrap_err();
        assert!(matches!(err, CartError::MissingContactInfo));

        // Empty name with short phone: name is checked first
        let err = assembler
            .assemble(&lines, None, Some(&contact("", "123", None)), None)
            .unwrap_err();
        assert!(matches!(err, CartError::MissingContactInfo));

        // Valid name, phone too short
        let err = assembler
            .assemble(&lines, None, Some(&contact("Ana", "123", None)), None)
            .unwrap_err();
        assert!(matches!(err, CartError::InvalidPhone(_)));
    }

    #[test]
    fn test_pickup_accepts_valid_contact() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 1)];

        for phone in ["+34 612 345 678", "612-345-678", "6123456", "612.34.56.78"] {
            let payload = assembler
                .assemble(&lines, None, Some(&contact("Ana", phone, None)), None)
                .unwrap();
            assert!(payload.table_number.is_none());
        }
    }

    #[test]
    fn test_phone_rejects_letters_and_misplaced_plus() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 1)];

        for phone in ["612345a78", "612+345678", "call me"] {
            let err = assembler
                .assemble(&lines, None, Some(&contact("Ana", phone, None)), None)
                .unwrap_err();
            assert!(matches!(err, CartError::InvalidPhone(_)), "{phone}");
        }
    }

    #[test]
    fn test_table_order_contact_optional() {
        let assembler = OrderAssembler::new("restaurant:1");
        let payload = assembler
            .assemble(&[line("a", 9.0, 1)], Some("7"), None, None)
            .unwrap();
        assert!(payload.customer.is_none());
    }

    #[test]
    fn test_email_validation() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 1)];

        // Invalid email rejected even on a table order
        let err = assembler
            .assemble(
                &lines,
                Some("7"),
                Some(&contact("Ana", "6123456", Some("not-an-email"))),
                None,
            )
            .unwrap_err();
        assert!(matches!(err, CartError::InvalidEmail(_)));

        // Empty email always accepted
        assembler
            .assemble(
                &lines,
                Some("7"),
                Some(&contact("Ana", "6123456", Some(""))),
                None,
            )
            .unwrap();

        assembler
            .assemble(
                &lines,
                None,
                Some(&contact("Ana", "6123456", Some("ana@example.com"))),
                None,
            )
            .unwrap();
    }

    #[test]
    fn test_assemble_does_not_mutate_lines() {
        let assembler = OrderAssembler::new("restaurant:1");
        let lines = vec![line("a", 9.0, 2)];
        let before = lines.clone();

        assembler.assemble(&lines, Some("1"), None, None).unwrap();
        assert_eq!(lines, before);
    }
}
