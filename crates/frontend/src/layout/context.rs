//! App-wide reactive contexts, provided once at the root and reached with
//! `expect_context` anywhere below it.

use contracts::domain::equipment::Equipment;
use contracts::domain::misc_object::MiscObject;
use contracts::domain::receipt::StaffProfile;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::receipt::api as receipt_api;
use crate::shared::cart::{Cart, CartItem, CartKind};
use crate::shared::error::UiError;

/// Staff member plus the avatar shown in the floating selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub icono: &'static str,
    pub perfil: StaffProfile,
}

fn default_entry() -> ProfileEntry {
    ProfileEntry {
        icono: "👩‍💻",
        perfil: StaffProfile {
            nombre: "PAOLA GUERRA CHANAY".to_string(),
            cargo: "Jefa de Informática".to_string(),
        },
    }
}

/// Fixed roster; there is no authentication, the selection only decides whose
/// name and title the acta carries.
pub fn roster() -> Vec<ProfileEntry> {
    vec![
        default_entry(),
        ProfileEntry {
            icono: "👨‍💻",
            perfil: StaffProfile {
                nombre: "Patricio".to_string(),
                cargo: "Técnico".to_string(),
            },
        },
        ProfileEntry {
            icono: "👨‍🔧",
            perfil: StaffProfile {
                nombre: "Alejandro Fuentes".to_string(),
                cargo: "Tecnico".to_string(),
            },
        },
    ]
}

#[derive(Clone, Copy)]
pub struct ProfileContext {
    pub selected: RwSignal<ProfileEntry>,
}

impl ProfileContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(default_entry()),
        }
    }
}

impl Default for ProfileContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery-receipt cart shared by the equipment cards, the misc-object rows
/// and the navbar panel.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
    pub open: RwSignal<bool>,
    pub generating: RwSignal<bool>,
    pub error: RwSignal<Option<UiError>>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::default()),
            open: RwSignal::new(false),
            generating: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Returns false when the item was already present.
    pub fn add_equipo(&self, equipo: &Equipment) -> bool {
        let item = CartItem::equipo(equipo);
        self.cart.try_update(|c| c.add(item)).unwrap_or(false)
    }

    pub fn add_objeto(&self, objeto: &MiscObject) -> bool {
        let item = CartItem::objeto(objeto);
        self.cart.try_update(|c| c.add(item)).unwrap_or(false)
    }

    pub fn remove(&self, kind: CartKind, id: i64) {
        self.cart.update(|c| c.remove(kind, id));
    }

    pub fn clear(&self) {
        self.cart.update(|c| c.clear());
    }

    pub fn count(&self) -> usize {
        self.cart.with(|c| c.len())
    }

    /// Generate the combined acta for the current contents. Re-entrant calls
    /// while a generation is in flight are dropped. The cart is cleared only
    /// after the document download succeeded.
    pub fn generate_receipt(&self, perfil: StaffProfile) {
        if self.generating.get_untracked() {
            return;
        }
        let items = self.cart.with_untracked(|c| c.partition());
        if items.is_empty() {
            self.error.set(Some(UiError::Validation(
                "El carrito está vacío".to_string(),
            )));
            return;
        }

        self.error.set(None);
        self.generating.set(true);

        let ctx = *self;
        spawn_local(async move {
            match receipt_api::generar_acta_multiple(&items, &perfil).await {
                Ok(()) => {
                    ctx.cart.update(|c| c.clear());
                    ctx.open.set(false);
                }
                Err(e) => {
                    log::error!("Receipt generation failed: {}", e);
                    ctx.error.set(Some(UiError::transport(e)));
                }
            }
            ctx.generating.set(false);
        });
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipo_entregado(id: i64) -> Equipment {
        Equipment {
            id,
            estado: Some("entregado".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_cart_receipt_is_rejected_before_any_request() {
        let ctx = CartContext::new();
        ctx.generate_receipt(default_entry().perfil);

        let error = ctx.error.get_untracked();
        assert!(matches!(error, Some(UiError::Validation(_))));
        assert!(!ctx.generating.get_untracked());
    }

    #[test]
    fn in_flight_generation_drops_reentrant_calls() {
        let ctx = CartContext::new();
        assert!(ctx.add_equipo(&equipo_entregado(1)));
        ctx.generating.set(true);

        ctx.generate_receipt(default_entry().perfil);

        assert_eq!(ctx.count(), 1);
        assert!(ctx.error.get_untracked().is_none());
    }
}
