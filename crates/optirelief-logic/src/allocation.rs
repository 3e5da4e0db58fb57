//! Capacity-constrained supply selection — exact 0/1 knapsack.
//!
//! Dynamic programming over an (items+1) × (capacity+1) table, then a
//! backtracking walk to recover the chosen subset. Each item is a single
//! indivisible unit: the `quantity` field on a [`SupplyItem`] is
//! informational stock data and is never expanded or decremented here.
//!
//! Time and space are O(items × capacity). Capacity is an array dimension,
//! so a hard ceiling ([`MAX_CAPACITY`]) rejects inputs that would make the
//! table unreasonable; callers with larger capacities need coarser weight
//! units or a different algorithm.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Largest accepted capacity.
pub const MAX_CAPACITY: usize = 1_000_000;

/// A stockpiled supply item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyItem {
    pub name: String,
    /// Load cost of carrying the item. Must be positive.
    pub weight: u32,
    /// Relief value of the item.
    pub utility: u32,
    /// On-hand stock. Informational only — allocation treats the item as
    /// one unit regardless.
    pub quantity: u32,
}

/// Result of a capacity-constrained selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Chosen items, in input order.
    pub selected: Vec<SupplyItem>,
    pub total_utility: u32,
    pub total_weight: u32,
    /// Share of all offered utility that was captured, in percent.
    pub efficiency_pct: f64,
}

/// Select the utility-maximizing subset of `items` with total weight ≤
/// `capacity`.
///
/// Zero capacity or zero items yield an empty selection with utility 0 —
/// valid boundary cases, not errors. Zero-weight items and capacities over
/// [`MAX_CAPACITY`] are rejected.
pub fn allocate(items: &[SupplyItem], capacity: usize) -> Result<Allocation, InputError> {
    if capacity > MAX_CAPACITY {
        return Err(InputError::CapacityTooLarge(capacity, MAX_CAPACITY));
    }
    if let Some(bad) = items.iter().find(|i| i.weight == 0) {
        return Err(InputError::ZeroWeightItem(bad.name.clone()));
    }

    let n = items.len();
    let mut table = vec![vec![0u32; capacity + 1]; n + 1];
    for i in 1..=n {
        let weight = items[i - 1].weight as usize;
        let utility = items[i - 1].utility;
        for w in 1..=capacity {
            table[i][w] = if weight <= w {
                table[i - 1][w].max(table[i - 1][w - weight].saturating_add(utility))
            } else {
                table[i - 1][w]
            };
        }
    }

    // Walk back from table[n][capacity]: row i differing from row i-1 at the
    // working weight means item i-1 was taken.
    let mut selected = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if table[i][w] != table[i - 1][w] {
            selected.push(items[i - 1].clone());
            w -= items[i - 1].weight as usize;
        }
    }
    selected.reverse(); // reconstruction visits items last-to-first

    let total_utility = table[n][capacity];
    let total_weight = selected.iter().map(|i| i.weight).sum();
    let offered: u32 = items.iter().map(|i| i.utility).sum();
    let efficiency_pct = if offered == 0 {
        0.0
    } else {
        total_utility as f64 / offered as f64 * 100.0
    };

    Ok(Allocation {
        selected,
        total_utility,
        total_weight,
        efficiency_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, weight: u32, utility: u32) -> SupplyItem {
        SupplyItem {
            name: name.to_string(),
            weight,
            utility,
            quantity: 1,
        }
    }

    #[test]
    fn test_prefers_pair_over_heavy_single() {
        // {w:2,u:9} + {w:3,u:7} = 16 beats the single {w:5,u:10}.
        let items = vec![item("a", 2, 9), item("b", 5, 10), item("c", 3, 7)];
        let alloc = allocate(&items, 5).unwrap();
        assert_eq!(alloc.total_utility, 16);
        assert_eq!(alloc.total_weight, 5);
        let names: Vec<&str> = alloc.selected.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_zero_capacity() {
        let items = vec![item("a", 1, 5)];
        let alloc = allocate(&items, 0).unwrap();
        assert!(alloc.selected.is_empty());
        assert_eq!(alloc.total_utility, 0);
        assert_eq!(alloc.total_weight, 0);
    }

    #[test]
    fn test_no_items() {
        let alloc = allocate(&[], 100).unwrap();
        assert!(alloc.selected.is_empty());
        assert_eq!(alloc.total_utility, 0);
        assert_eq!(alloc.efficiency_pct, 0.0);
    }

    #[test]
    fn test_weight_never_exceeds_capacity() {
        let items = vec![
            item("a", 4, 10),
            item("b", 6, 11),
            item("c", 3, 7),
            item("d", 5, 9),
        ];
        for capacity in 0..=20 {
            let alloc = allocate(&items, capacity).unwrap();
            assert!(
                alloc.total_weight as usize <= capacity,
                "capacity {} produced weight {}",
                capacity,
                alloc.total_weight
            );
        }
    }

    #[test]
    fn test_utility_monotone_in_capacity() {
        let items = vec![item("a", 2, 9), item("b", 5, 10), item("c", 3, 7)];
        let mut previous = 0;
        for capacity in 0..=12 {
            let alloc = allocate(&items, capacity).unwrap();
            assert!(
                alloc.total_utility >= previous,
                "utility dropped from {} to {} at capacity {}",
                previous,
                alloc.total_utility,
                capacity
            );
            previous = alloc.total_utility;
        }
        // Everything fits at capacity 10.
        assert_eq!(allocate(&items, 10).unwrap().total_utility, 26);
    }

    #[test]
    fn test_optimality_against_brute_force() {
        let items = vec![
            item("a", 3, 4),
            item("b", 4, 5),
            item("c", 2, 3),
            item("d", 5, 8),
            item("e", 1, 1),
        ];
        let capacity = 8;
        // Exhaustive check over all 2^5 subsets.
        let mut best = 0u32;
        for mask in 0u32..32 {
            let (weight, utility) = items.iter().enumerate().fold((0u32, 0u32), |acc, (i, it)| {
                if mask & (1 << i) != 0 {
                    (acc.0 + it.weight, acc.1 + it.utility)
                } else {
                    acc
                }
            });
            if weight as usize <= capacity {
                best = best.max(utility);
            }
        }
        let alloc = allocate(&items, capacity).unwrap();
        assert_eq!(alloc.total_utility, best);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let items = vec![item("ghost", 0, 99)];
        assert_eq!(
            allocate(&items, 10).unwrap_err(),
            InputError::ZeroWeightItem("ghost".to_string())
        );
    }

    #[test]
    fn test_capacity_ceiling_rejected() {
        assert!(matches!(
            allocate(&[], MAX_CAPACITY + 1),
            Err(InputError::CapacityTooLarge(_, MAX_CAPACITY))
        ));
    }

    #[test]
    fn test_quantity_is_untouched() {
        let items = vec![SupplyItem {
            name: "Water Bottles".to_string(),
            weight: 2,
            utility: 9,
            quantity: 100,
        }];
        let alloc = allocate(&items, 5).unwrap();
        assert_eq!(alloc.selected[0].quantity, 100);
    }

    #[test]
    fn test_efficiency_percentage() {
        let items = vec![item("a", 2, 9), item("b", 5, 10), item("c", 3, 7)];
        let alloc = allocate(&items, 5).unwrap();
        // 16 of 26 offered utility.
        assert!((alloc.efficiency_pct - 16.0 / 26.0 * 100.0).abs() < 1e-9);
    }
}
