//! Session-local delivery-receipt cart.
//!
//! Plain data structure; the reactive wrapper lives in
//! [`crate::layout::context::CartContext`]. Items are keyed by `(kind, id)`
//! so an equipment and a misc object sharing a numeric id never collide.

use contracts::domain::equipment::Equipment;
use contracts::domain::misc_object::MiscObject;
use contracts::domain::receipt::ReceiptItems;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartKind {
    Equipo,
    Objeto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub kind: CartKind,
    pub id: i64,
    /// Display line in the cart panel.
    pub label: String,
}

impl CartItem {
    pub fn equipo(eq: &Equipment) -> Self {
        let detalle = [eq.marca.as_deref(), eq.modelo.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let label = if detalle.is_empty() {
            eq.display_name()
        } else {
            format!("{} - {}", eq.display_name(), detalle)
        };
        Self {
            kind: CartKind::Equipo,
            id: eq.id,
            label,
        }
    }

    pub fn objeto(obj: &MiscObject) -> Self {
        Self {
            kind: CartKind::Objeto,
            id: obj.id,
            label: format!("{} - {}", obj.nombre, obj.unidad),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Idempotent on `(kind, id)`; insertion order is preserved.
    pub fn add(&mut self, item: CartItem) -> bool {
        if self.contains(item.kind, item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, kind: CartKind, id: i64) {
        self.items.retain(|i| !(i.kind == kind && i.id == id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, kind: CartKind, id: i64) -> bool {
        self.items.iter().any(|i| i.kind == kind && i.id == id)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Split the current contents into the combined-acta request body.
    pub fn partition(&self) -> ReceiptItems {
        let mut items = ReceiptItems::default();
        for item in &self.items {
            match item.kind {
                CartKind::Equipo => items.equipos_ids.push(item.id),
                CartKind::Objeto => items.objetos_ids.push(item.id),
            }
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: CartKind, id: i64) -> CartItem {
        CartItem {
            kind,
            id,
            label: format!("item {}", id),
        }
    }

    #[test]
    fn add_is_idempotent_per_kind_and_id() {
        let mut cart = Cart::default();
        assert!(cart.add(item(CartKind::Equipo, 1)));
        assert!(!cart.add(item(CartKind::Equipo, 1)));
        assert_eq!(cart.len(), 1);

        // Same id, different kind: a distinct item.
        assert!(cart.add(item(CartKind::Objeto, 1)));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::default();
        cart.add(item(CartKind::Equipo, 3));
        cart.add(item(CartKind::Objeto, 1));
        cart.add(item(CartKind::Equipo, 2));
        let ids: Vec<i64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn remove_targets_only_the_matching_kind() {
        let mut cart = Cart::default();
        cart.add(item(CartKind::Equipo, 1));
        cart.add(item(CartKind::Objeto, 1));
        cart.remove(CartKind::Equipo, 1);
        assert!(!cart.contains(CartKind::Equipo, 1));
        assert!(cart.contains(CartKind::Objeto, 1));
    }

    #[test]
    fn partition_splits_by_kind() {
        let mut cart = Cart::default();
        cart.add(item(CartKind::Equipo, 10));
        cart.add(item(CartKind::Objeto, 20));
        cart.add(item(CartKind::Equipo, 11));
        let items = cart.partition();
        assert_eq!(items.equipos_ids, vec![10, 11]);
        assert_eq!(items.objetos_ids, vec![20]);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::default();
        cart.add(item(CartKind::Equipo, 1));
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.partition().is_empty());
    }
}
