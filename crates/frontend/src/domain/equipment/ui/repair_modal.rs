//! Repair form. The technician edits a copy of the unit's attributes; on
//! submit only the fields that actually changed against the snapshot taken
//! when the modal opened are sent, as explicit before/after pairs.


use contracts::domain::equipment::Equipment;
use contracts::domain::repair::{compute_changes, validate_submission, StartRepairRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::repair::api as repair_api;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::modal::Modal;

// Placeholder until technicians authenticate individually.
const DEFAULT_RUT: &str = "12345678-9";

fn field_label(campo: &str) -> &'static str {
    match campo {
        "marca" => "Marca",
        "modelo" => "Modelo",
        "serie" => "Serie",
        "num_inv" => "Num Inv",
        "ip" => "IP",
        "nombre_equipo" => "Nombre Equipo",
        "nombre_usuario" => "Usuario",
        "windows" => "Windows",
        "ver_win" => "Versión Windows",
        "antivirus" => "Antivirus",
        "cpu" => "CPU",
        "ram" => "RAM",
        "almacenamiento" => "Almacenamiento",
        "tipo_almacenamiento" => "Tipo almacenamiento",
        "toner" => "Toner",
        "drum" => "Drum",
        "conexion" => "Conexión",
        _ => "Campo",
    }
}

#[component]
pub fn RepairModal(
    equipo: Equipment,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let id_equipo = equipo.id;
    let subtitle = format!(
        "Equipo: {} — Serie: {}",
        equipo.display_name(),
        equipo.serie.as_deref().unwrap_or("—")
    );

    // Snapshot at open time; the diff is computed against this, not against
    // whatever the list shows later.
    let original = StoredValue::new(equipo.field_snapshot());
    let edited = RwSignal::new(original.get_value());
    let obs = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let campos: Vec<String> = original.with_value(|o| o.keys().cloned().collect());

    let handle_submit = move |_| {
        if loading.get_untracked() {
            return;
        }
        let cambios = compute_changes(
            &original.get_value(),
            &edited.get_untracked(),
        );
        let nota = obs.get_untracked();
        if let Err(msg) = validate_submission(&cambios, &nota) {
            error.set(Some(msg.to_string()));
            return;
        }

        loading.set(true);
        error.set(None);
        let payload = StartRepairRequest {
            id_equipo,
            cambios,
            obs: nota,
            rut: DEFAULT_RUT.to_string(),
        };
        spawn_local(async move {
            match repair_api::iniciar_reparacion(&payload).await {
                Ok(_) => on_success.run(()),
                Err(e) => {
                    log::error!("Repair submission failed: {}", e);
                    error.set(Some("Error al generar reparación".to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <Modal title="Generar Reparación".to_string() on_close=on_close>
            <p class="repair-modal__subtitle">{subtitle}</p>

            {move || {
                error.get().map(|msg| view! {
                    <div class="repair-modal__error">{msg}</div>
                })
            }}

            <div class="repair-modal__fields">
                {campos
                    .into_iter()
                    .map(|campo| {
                        let value_key = campo.clone();
                        let input_key = campo.clone();
                        let label = field_label(&campo);
                        let value = Signal::derive(move || {
                            edited.with(|e| e.get(&value_key).cloned().unwrap_or_default())
                        });
                        view! {
                            <Input
                                label=label.to_string()
                                value=value
                                on_input=Callback::new(move |v: String| {
                                    edited.update(|e| {
                                        e.insert(input_key.clone(), v);
                                    });
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <Textarea
                label="Observaciones".to_string()
                value=Signal::derive(move || obs.get())
                on_input=Callback::new(move |v: String| obs.set(v))
                rows=4
            />

            <div class="repair-modal__footer">
                <button
                    class="button button--primary"
                    disabled=move || loading.get()
                    on:click=handle_submit
                >
                    {move || if loading.get() { "Guardando..." } else { "Generar Reparación" }}
                </button>
                <button
                    class="button"
                    disabled=move || loading.get()
                    on:click=move |_| on_close.run(())
                >
                    "Cancelar"
                </button>
            </div>
        </Modal>
    }
}
