/// Canonical lifecycle state derived from the free-text `estado` field.
///
/// The backend stores status as free text, not an enum. Classification is the
/// single place that text is interpreted; everything downstream (badges,
/// action gating) works on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentState {
    Delivered,
    InRepair,
    AwaitingParts,
}

impl EquipmentState {
    /// Substring-based, case-insensitive classification. "proceso" wins over
    /// "espera" when both appear; anything unrecognized counts as delivered.
    pub fn classify(estado: &str) -> Self {
        let lower = estado.to_lowercase();
        if lower.contains("proceso") {
            EquipmentState::InRepair
        } else if lower.contains("espera") {
            EquipmentState::AwaitingParts
        } else {
            EquipmentState::Delivered
        }
    }

    /// Badge text shown on the equipment card.
    pub fn badge_label(&self) -> &'static str {
        match self {
            EquipmentState::Delivered => "Entregado",
            EquipmentState::InRepair => "En reparación",
            EquipmentState::AwaitingParts => "En espera de repuestos",
        }
    }

    /// CSS modifier for the badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EquipmentState::Delivered => "badge--entregado",
            EquipmentState::InRepair => "badge--proceso",
            EquipmentState::AwaitingParts => "badge--espera",
        }
    }

    /// Repair can be started or continued while the unit is in custody.
    pub fn can_start_repair(&self) -> bool {
        matches!(
            self,
            EquipmentState::InRepair | EquipmentState::AwaitingParts
        )
    }

    /// Only delivered units can go on a delivery receipt. The cart
    /// additionally requires the item not to be in it already.
    pub fn deliverable(&self) -> bool {
        matches!(self, EquipmentState::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proceso_anywhere_means_in_repair() {
        assert_eq!(
            EquipmentState::classify("ABC proceso XYZ"),
            EquipmentState::InRepair
        );
        assert_eq!(
            EquipmentState::classify("en proceso de reparacion"),
            EquipmentState::InRepair
        );
    }

    #[test]
    fn proceso_wins_over_espera() {
        // Both substrings present: "proceso" is checked first.
        assert_eq!(
            EquipmentState::classify("proceso en espera"),
            EquipmentState::InRepair
        );
    }

    #[test]
    fn espera_alone_means_awaiting_parts() {
        assert_eq!(
            EquipmentState::classify("listo espera"),
            EquipmentState::AwaitingParts
        );
    }

    #[test]
    fn anything_else_defaults_to_delivered() {
        assert_eq!(EquipmentState::classify(""), EquipmentState::Delivered);
        assert_eq!(
            EquipmentState::classify("entregado"),
            EquipmentState::Delivered
        );
        assert_eq!(
            EquipmentState::classify("texto cualquiera"),
            EquipmentState::Delivered
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(
            EquipmentState::classify("EN PROCESO"),
            EquipmentState::InRepair
        );
        assert_eq!(
            EquipmentState::classify("En Espera"),
            EquipmentState::AwaitingParts
        );
    }

    #[test]
    fn action_gating_follows_state() {
        assert!(EquipmentState::InRepair.can_start_repair());
        assert!(EquipmentState::AwaitingParts.can_start_repair());
        assert!(!EquipmentState::Delivered.can_start_repair());
        assert!(EquipmentState::Delivered.deliverable());
        assert!(!EquipmentState::InRepair.deliverable());
    }
}
