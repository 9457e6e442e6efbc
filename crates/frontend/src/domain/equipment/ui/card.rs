//! Equipment card: attributes, lifecycle badge and the per-unit actions.
//! Which actions render is gated by the classified state, so a unit can never
//! be e.g. delivered twice or added to the cart while in repair.

use std::collections::BTreeMap;

use contracts::domain::equipment::{CategorySpecs, Equipment, ESTADO_ENTREGADO};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::api as equipment_api;
use crate::domain::equipment::ui::history_modal::HistoryModal;
use crate::domain::equipment::ui::repair_modal::RepairModal;
use crate::domain::equipment::ui::intake_button::IntakeButton;
use crate::domain::receipt::api as receipt_api;
use crate::layout::context::{CartContext, ProfileContext};
use crate::shared::cart::CartKind;

fn detail_row(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <p class="equipment-card__row">
            <span class="equipment-card__label">{label}</span>
            {value.unwrap_or_else(|| "—".to_string())}
        </p>
    }
}

#[component]
pub fn EquipmentCard(
    equipo: Equipment,
    on_eliminar: Callback<Equipment>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let cart_ctx = expect_context::<CartContext>();
    let profile_ctx = expect_context::<ProfileContext>();

    let equipo = StoredValue::new(equipo);
    let id = equipo.with_value(|e| e.id);
    let state = Signal::derive(move || equipo.with_value(|e| e.state()));

    let mostrar_reparacion = RwSignal::new(false);
    let mostrar_historial = RwSignal::new(false);
    let entregando = RwSignal::new(false);
    let generando_acta = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let en_carrito = move || cart_ctx.cart.with(|c| c.contains(CartKind::Equipo, id));

    let handle_entregar = move |_| {
        if entregando.get_untracked() {
            return;
        }
        entregando.set(true);
        error.set(None);
        spawn_local(async move {
            let mut changes = BTreeMap::new();
            changes.insert("estado".to_string(), ESTADO_ENTREGADO.to_string());
            match equipment_api::actualizar_campos(id, &changes).await {
                Ok(()) => on_refresh.run(()),
                Err(e) => {
                    log::error!("Delivery update failed: {}", e);
                    error.set(Some("No se pudo marcar la entrega".to_string()));
                }
            }
            entregando.set(false);
        });
    };

    let handle_acta = move |_| {
        if generando_acta.get_untracked() {
            return;
        }
        generando_acta.set(true);
        error.set(None);
        let perfil = profile_ctx.selected.get_untracked().perfil;
        spawn_local(async move {
            if let Err(e) = receipt_api::generar_acta(id, &perfil).await {
                log::error!("Receipt generation failed: {}", e);
                error.set(Some("No se pudo generar el acta".to_string()));
            }
            generando_acta.set(false);
        });
    };

    let specs_view = move || {
        equipo.with_value(|e| e.specs()).map(|specs| match specs {
            CategorySpecs::Computer {
                usuario,
                windows,
                ver_win,
                antivirus,
                cpu,
                ram,
                almacenamiento,
                tipo_almacenamiento,
            } => {
                let windows_full = match (windows, ver_win) {
                    (Some(w), Some(v)) => Some(format!("{} {}", w, v)),
                    (Some(w), None) => Some(w),
                    (None, Some(v)) => Some(v),
                    (None, None) => None,
                };
                let storage = almacenamiento.map(|a| match &tipo_almacenamiento {
                    Some(t) => format!("{} ({})", a, t),
                    None => a.to_string(),
                });
                view! {
                    <>
                        {detail_row("Usuario:", usuario)}
                        {detail_row("Windows:", windows_full)}
                        {detail_row("Antivirus:", antivirus)}
                        {detail_row("CPU:", cpu)}
                        {detail_row("RAM:", ram.map(|r| r.to_string()))}
                        {detail_row("Almacenamiento:", storage)}
                    </>
                }
                .into_any()
            }
            CategorySpecs::Printer {
                toner,
                drum,
                conexion,
            } => view! {
                <>
                    {detail_row("Toner:", toner)}
                    {detail_row("Drum:", drum)}
                    {detail_row("Conexión:", conexion)}
                </>
            }
            .into_any(),
        })
    };

    view! {
        <div class="equipment-card">
            <div class="equipment-card__header">
                <h2 class="equipment-card__title">
                    {equipo.with_value(|e| e.display_name())}
                </h2>
                <span class=move || format!("badge {}", state.get().badge_class())>
                    {move || state.get().badge_label()}
                </span>
            </div>

            {detail_row("Marca:", equipo.with_value(|e| e.marca.clone()))}
            {detail_row("Modelo:", equipo.with_value(|e| e.modelo.clone()))}
            {detail_row("Serie:", equipo.with_value(|e| e.serie.clone()))}
            {detail_row("Num Inv:", equipo.with_value(|e| e.num_inv.clone()))}
            {detail_row("Unidad:", equipo.with_value(|e| e.nombre_unidad.clone()))}
            {detail_row("IP:", equipo.with_value(|e| e.ip.clone()))}
            {specs_view}

            {move || {
                error.get().map(|msg| view! {
                    <p class="equipment-card__error">{msg}</p>
                })
            }}

            <div class="equipment-card__actions">
                <Show when=move || state.get().can_start_repair()>
                    <button
                        class="button button--repair"
                        on:click=move |_| mostrar_reparacion.set(true)
                    >
                        "Reparación"
                    </button>
                    <button
                        class="button button--deliver"
                        disabled=move || entregando.get()
                        on:click=handle_entregar
                    >
                        {move || if entregando.get() { "Entregando..." } else { "Entregar" }}
                    </button>
                </Show>

                <IntakeButton
                    equipo_id=id
                    state=state
                    on_registered=Callback::new(move |_| on_refresh.run(()))
                />

                <button
                    class="button button--history"
                    on:click=move |_| mostrar_historial.set(true)
                >
                    "Historial"
                </button>

                <Show when=move || state.get().deliverable()>
                    <button
                        class="button button--cart"
                        disabled=en_carrito
                        on:click=move |_| {
                            equipo.with_value(|e| cart_ctx.add_equipo(e));
                        }
                    >
                        {move || if en_carrito() { "✓ En Carrito" } else { "+ Carrito" }}
                    </button>
                    <button
                        class="button button--acta"
                        disabled=move || generando_acta.get()
                        on:click=handle_acta
                    >
                        {move || if generando_acta.get() { "Generando..." } else { "📄 Acta" }}
                    </button>
                </Show>

                <button
                    class="button button--danger"
                    on:click=move |_| on_eliminar.run(equipo.get_value())
                >
                    "Eliminar"
                </button>
            </div>

            <Show when=move || mostrar_reparacion.get()>
                <RepairModal
                    equipo=equipo.get_value()
                    on_close=Callback::new(move |_| mostrar_reparacion.set(false))
                    on_success=Callback::new(move |_| {
                        mostrar_reparacion.set(false);
                        on_refresh.run(());
                    })
                />
            </Show>

            <Show when=move || mostrar_historial.get()>
                <HistoryModal
                    id_equipo=id
                    on_close=Callback::new(move |_| mostrar_historial.set(false))
                />
            </Show>
        </div>
    }
}
