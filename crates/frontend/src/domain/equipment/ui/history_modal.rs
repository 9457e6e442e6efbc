//! Service-history modal: fetches the two-source history, reconciles it into
//! paired cycles and renders them newest-first.

use contracts::domain::repair::{reconcile, ReconciledHistory, ServiceCycle};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::repair::api as repair_api;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;

#[component]
pub fn HistoryModal(id_equipo: i64, on_close: Callback<()>) -> impl IntoView {
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let historia = RwSignal::new(ReconciledHistory::default());

    spawn_local(async move {
        match repair_api::obtener_historial(id_equipo).await {
            Ok(respuesta) => {
                historia.set(reconcile(
                    &respuesta.historial_reparaciones,
                    &respuesta.historial_ingresos,
                ));
            }
            Err(e) => {
                log::error!("History fetch failed: {}", e);
                error.set(Some("Error al cargar historial".to_string()));
                historia.set(ReconciledHistory::default());
            }
        }
        loading.set(false);
    });

    view! {
        <Modal title="🛠️ Historial de Servicios".to_string() on_close=on_close>
            {move || {
                if loading.get() {
                    view! { <div class="history-modal__loading">"Cargando..."</div> }.into_any()
                } else if let Some(msg) = error.get() {
                    view! { <div class="history-modal__error">{msg}</div> }.into_any()
                } else if historia.with(|h| h.cycles.is_empty()) {
                    view! {
                        <p class="history-modal__empty">
                            "No hay ciclos de servicio registrados para este equipo."
                        </p>
                    }
                    .into_any()
                } else {
                    let mismatch = historia.with(|h| h.pairing_mismatch);
                    let ciclos = historia.with(|h| h.cycles.clone());
                    view! {
                        <>
                            <Show when=move || mismatch>
                                <p class="history-modal__note">
                                    "Algunos ingresos no pudieron emparejarse con una reparación."
                                </p>
                            </Show>
                            <ul class="history-modal__cycles">
                                {ciclos
                                    .into_iter()
                                    .map(cycle_view)
                                    .collect_view()}
                            </ul>
                        </>
                    }
                    .into_any()
                }
            }}
        </Modal>
    }
}

fn cycle_view(ciclo: ServiceCycle) -> impl IntoView {
    let entrada = ciclo
        .fecha_ingreso
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "—".to_string());
    let salida = format_datetime(&ciclo.fecha_salida);
    let dias = ciclo.elapsed().to_string();
    let obs = if ciclo.obs.trim().is_empty() {
        "—".to_string()
    } else {
        ciclo.obs.clone()
    };

    view! {
        <li class="history-cycle">
            <div class="history-cycle__dates">
                <div>
                    <span class="history-cycle__label history-cycle__label--in">
                        "ENTRADA (Ingreso):"
                    </span>
                    <span>{entrada}</span>
                </div>
                <div>
                    <span class="history-cycle__label history-cycle__label--out">
                        "SALIDA (Entrega):"
                    </span>
                    <span>{salida}</span>
                </div>
                <div>
                    <span class="history-cycle__label">"Días en reparación:"</span>
                    <span class="history-cycle__days">{dias}</span>
                </div>
            </div>

            <div class="history-cycle__meta">
                <span class="history-cycle__label">"ID Reparación:"</span>
                <span class="history-cycle__id">{ciclo.id.clone()}</span>
            </div>
            <div class="history-cycle__obs">
                <span class="history-cycle__label">"Observaciones Técnicas:"</span>
                <p>{obs}</p>
            </div>

            <Show when={
                let tiene_cambios = !ciclo.cambios.is_empty();
                move || tiene_cambios
            }>
                <div class="history-cycle__changes">
                    <span class="history-cycle__label">"Cambios realizados:"</span>
                    <ul>
                        {ciclo
                            .cambios
                            .iter()
                            .map(|(campo, cambio)| {
                                view! {
                                    <li>
                                        <strong>{campo.clone()}</strong>
                                        ": "
                                        <span>{cambio.antes.clone()}</span>
                                        " → "
                                        <span>{cambio.despues.clone()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </li>
    }
}
