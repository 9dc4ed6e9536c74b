//! Configuration key generation
//!
//! A configuration key identifies one specific selection of components
//! and extras for a base menu item, so that repeated additions of an
//! identical configuration merge into a single cart line while any
//! differing configuration of the same item stays a separate line.

use shared::models::ExtraOption;

/// Field separator; ASCII unit separator cannot occur in item ids,
/// component names or extra names.
const SEP: char = '\u{1F}';

/// Derive the identity string for an item + selection combination.
///
/// Deterministic and order-independent: components are sorted
/// lexicographically, extras are sorted by name. Extras are keyed by
/// name only, on the assumption that the same extra always carries the
/// same price within one menu snapshot.
pub fn configuration_key(
    item_id: &str,
    selected_components: &[String],
    selected_extras: &[ExtraOption],
) -> String {
    let mut components: Vec<&str> = selected_components.iter().map(String::as_str).collect();
    components.sort_unstable();

    let mut extras: Vec<&str> = selected_extras.iter().map(|e| e.name.as_str()).collect();
    extras.sort_unstable();

    let mut parts = Vec::with_capacity(2 + components.len() + extras.len());
    parts.push(item_id);
    parts.extend(components);
    parts.push(""); // boundary between component and extra sections
    parts.extend(extras);
    parts.join(&SEP.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(name: &str, price: f64) -> ExtraOption {
        ExtraOption {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn test_key_invariant_under_permutation() {
        let components_a = vec!["Lettuce".to_string(), "Tomato".to_string()];
        let components_b = vec!["Tomato".to_string(), "Lettuce".to_string()];
        let extras_a = vec![extra("Cheese", 1.0), extra("Bacon", 1.5)];
        let extras_b = vec![extra("Bacon", 1.5), extra("Cheese", 1.0)];

        assert_eq!(
            configuration_key("item:burger", &components_a, &extras_a),
            configuration_key("item:burger", &components_b, &extras_b),
        );
    }

    #[test]
    fn test_key_differs_by_one_component() {
        let full = vec!["Lettuce".to_string(), "Tomato".to_string()];
        let no_tomato = vec!["Lettuce".to_string()];

        assert_ne!(
            configuration_key("item:burger", &full, &[]),
            configuration_key("item:burger", &no_tomato, &[]),
        );
    }

    #[test]
    fn test_key_differs_by_one_extra() {
        assert_ne!(
            configuration_key("item:burger", &[], &[]),
            configuration_key("item:burger", &[], &[extra("Cheese", 1.0)]),
        );
    }

    #[test]
    fn test_key_differs_by_item() {
        assert_ne!(
            configuration_key("item:burger", &[], &[]),
            configuration_key("item:pizza", &[], &[]),
        );
    }

    #[test]
    fn test_component_and_extra_sections_do_not_collide() {
        // "Cheese" as a deselectable component vs. "Cheese" as a paid
        // extra must produce different keys
        assert_ne!(
            configuration_key("item:burger", &["Cheese".to_string()], &[]),
            configuration_key("item:burger", &[], &[extra("Cheese", 1.0)]),
        );
    }

    #[test]
    fn test_extras_keyed_by_name_not_price() {
        assert_eq!(
            configuration_key("item:burger", &[], &[extra("Cheese", 1.0)]),
            configuration_key("item:burger", &[], &[extra("Cheese", 2.0)]),
        );
    }
}
