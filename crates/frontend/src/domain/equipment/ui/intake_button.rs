use contracts::domain::equipment::{EquipmentState, ESTADO_EN_PROCESO};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::api as equipment_api;

/// "Marcar ingreso" button: appends an intake event and flips the unit into
/// repair. Disabled once the unit is already in custody.
#[component]
pub fn IntakeButton(
    equipo_id: i64,
    #[prop(into)] state: Signal<EquipmentState>,
    on_registered: Callback<()>,
) -> impl IntoView {
    let loading = RwSignal::new(false);

    let en_proceso = move || state.get() == EquipmentState::InRepair;

    let handle_click = move |_| {
        if en_proceso() || loading.get_untracked() {
            return;
        }
        loading.set(true);
        spawn_local(async move {
            match equipment_api::registrar_ingreso(equipo_id, ESTADO_EN_PROCESO).await {
                Ok(_) => on_registered.run(()),
                Err(e) => log::error!("Intake registration failed: {}", e),
            }
            loading.set(false);
        });
    };

    view! {
        <button
            class="button button--intake"
            disabled=move || loading.get() || en_proceso()
            title=move || {
                if en_proceso() {
                    "Ingreso registrado"
                } else {
                    "Marcar como en proceso"
                }
            }
            on:click=handle_click
        >
            {move || {
                if loading.get() {
                    "Registrando..."
                } else if en_proceso() {
                    "✅ En proceso"
                } else {
                    "🟢 Marcar ingreso"
                }
            }}
        </button>
    }
}
