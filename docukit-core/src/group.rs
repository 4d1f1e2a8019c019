//! Grouping of delivery line items by article id and reconciliation of
//! declared totals against scheduled delivery quantities.

use std::collections::HashMap;

use crate::model::{ItemGroup, LineItem};

/// Groups line items by id, preserving order of first appearance.
///
/// Items sharing an id are appended to the same group in input order; the
/// groups themselves come out in the order their id was first seen. Empty
/// input yields empty output.
pub fn group_items(items: &[LineItem]) -> Vec<ItemGroup> {
    let mut position: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<ItemGroup> = Vec::new();

    for item in items {
        match position.get(&item.id) {
            Some(&idx) => groups[idx].items.push(item.clone()),
            None => {
                position.insert(item.id, groups.len());
                groups.push(ItemGroup {
                    id: item.id,
                    items: vec![item.clone()],
                });
            }
        }
    }

    groups
}

/// Declared vs. scheduled quantity for one article group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTally {
    pub id: i64,
    /// Declared total quantity, parsed from the group's first item.
    pub declared: i64,
    /// Sum of the per-date delivery quantities across the group.
    pub delivered: i64,
}

impl GroupTally {
    pub fn balanced(&self) -> bool {
        self.declared == self.delivered
    }
}

/// Tallies every group's declared total against its scheduled deliveries.
pub fn tally_groups(items: &[LineItem]) -> Vec<GroupTally> {
    group_items(items)
        .iter()
        .map(|group| GroupTally {
            id: group.id,
            declared: parse_quantity(&group.first().total_quantity),
            delivered: group
                .items
                .iter()
                .map(|item| parse_quantity(&item.quantity_to_delivery))
                .sum(),
        })
        .collect()
}

/// True iff every article's scheduled deliveries sum to its declared total.
///
/// Vacuously true for no items. Unparseable quantities count as 0, so two
/// garbage fields can cancel out; callers that need to surface that should
/// inspect [`tally_groups`] instead.
pub fn quantities_reconcile(items: &[LineItem]) -> bool {
    tally_groups(items).iter().all(GroupTally::balanced)
}

/// Parses the leading integer of a quantity string; anything unparseable
/// is 0. Mirrors the lenient parsing the upload format has always had:
/// optional sign, then decimal digits, trailing junk ignored.
fn parse_quantity(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits: &str = {
        let end = rest
            .as_bytes()
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: i64, total: &str, qty: &str) -> LineItem {
        LineItem {
            id,
            particulars: format!("Article {id}"),
            total_quantity: total.to_string(),
            delivery_date: "2/3/25".to_string(),
            quantity_to_delivery: qty.to_string(),
        }
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let items = vec![
            item(3, "10", "10"),
            item(1, "20", "20"),
            item(3, "10", "0"),
            item(2, "5", "5"),
        ];
        let groups = group_items(&items);
        let ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(groups[0].items.len(), 2);
    }

    #[test]
    fn grouping_is_a_partition_of_the_input() {
        let items = vec![
            item(1, "400", "100"),
            item(2, "100", "50"),
            item(1, "400", "200"),
            item(1, "400", "100"),
        ];
        let groups = group_items(&items);
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, items.len());
        // Per-group order matches per-id input order.
        let qtys: Vec<&str> = groups[0]
            .items
            .iter()
            .map(|i| i.quantity_to_delivery.as_str())
            .collect();
        assert_eq!(qtys, vec!["100", "200", "100"]);
    }

    #[test]
    fn empty_input_yields_empty_groups_and_reconciles() {
        assert!(group_items(&[]).is_empty());
        assert!(quantities_reconcile(&[]));
    }

    #[test]
    fn split_deliveries_summing_to_total_reconcile() {
        let items = vec![
            item(1, "400", "100"),
            item(1, "400", "200"),
            item(1, "400", "100"),
        ];
        assert!(quantities_reconcile(&items));
    }

    #[test]
    fn any_short_group_fails_reconciliation() {
        let items = vec![item(1, "400", "400"), item(2, "100", "50")];
        assert!(!quantities_reconcile(&items));
        let tallies = tally_groups(&items);
        assert_eq!(tallies[1].declared, 100);
        assert_eq!(tallies[1].delivered, 50);
        assert!(!tallies[1].balanced());
    }

    #[test]
    fn non_numeric_quantities_count_as_zero() {
        let items = vec![item(1, "abc", ""), item(1, "abc", "xyz")];
        // Both sides parse to 0, so the group balances.
        assert!(quantities_reconcile(&items));
        assert_eq!(tally_groups(&items)[0].declared, 0);
    }

    #[test]
    fn leading_digits_parse_like_the_upload_format() {
        assert_eq!(super::parse_quantity("400"), 400);
        assert_eq!(super::parse_quantity("  400 units"), 400);
        assert_eq!(super::parse_quantity("-25"), -25);
        assert_eq!(super::parse_quantity("+7"), 7);
        assert_eq!(super::parse_quantity(""), 0);
        assert_eq!(super::parse_quantity("units"), 0);
    }
}
