//! Create/edit form for a misc object. Name and unit are required; the same
//! modal serves both flows, keyed on whether an existing object was passed in.

use contracts::domain::misc_object::{CreateMiscObject, MiscObject, UpdateMiscObject};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::misc_object::api as misc_api;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::modal::Modal;

#[component]
pub fn MiscObjectModal(
    objeto: Option<MiscObject>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = objeto.as_ref().map(|o| o.id);
    let titulo = if editing_id.is_some() {
        "Editar Objeto"
    } else {
        "Nuevo Objeto"
    };

    let nombre = RwSignal::new(
        objeto.as_ref().map(|o| o.nombre.clone()).unwrap_or_default(),
    );
    let unidad = RwSignal::new(
        objeto.as_ref().map(|o| o.unidad.clone()).unwrap_or_default(),
    );
    let comentarios = RwSignal::new(
        objeto
            .as_ref()
            .and_then(|o| o.comentarios.clone())
            .unwrap_or_default(),
    );
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let handle_submit = move |_| {
        if loading.get_untracked() {
            return;
        }
        let nombre_val = nombre.get_untracked();
        let unidad_val = unidad.get_untracked();
        if nombre_val.trim().is_empty() || unidad_val.trim().is_empty() {
            error.set(Some("Nombre y unidad son campos obligatorios".to_string()));
            return;
        }
        let comentarios_val = comentarios.get_untracked();
        let comentarios_opt = if comentarios_val.trim().is_empty() {
            None
        } else {
            Some(comentarios_val)
        };

        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let resultado = match editing_id {
                Some(id) => {
                    let cambios = UpdateMiscObject {
                        nombre: Some(nombre_val),
                        unidad: Some(unidad_val),
                        comentarios: comentarios_opt,
                    };
                    misc_api::actualizar_objeto(id, &cambios).await.map(|_| ())
                }
                None => {
                    let nuevo = CreateMiscObject {
                        nombre: nombre_val,
                        unidad: unidad_val,
                        comentarios: comentarios_opt,
                    };
                    misc_api::crear_objeto(&nuevo).await.map(|_| ())
                }
            };
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Object save failed: {}", e);
                    error.set(Some("Error al guardar el objeto".to_string()));
                }
            }
            loading.set(false);
        });
    };

    view! {
        <Modal title=titulo.to_string() on_close=on_close>
            {move || {
                error.get().map(|msg| view! {
                    <div class="misc-modal__error">{msg}</div>
                })
            }}

            <Input
                label="Nombre *".to_string()
                value=Signal::derive(move || nombre.get())
                on_input=Callback::new(move |v: String| nombre.set(v))
                placeholder="Ej: Router WiFi, Switch, Proyector..."
                required=true
            />
            <Input
                label="Unidad *".to_string()
                value=Signal::derive(move || unidad.get())
                on_input=Callback::new(move |v: String| unidad.set(v))
                required=true
            />
            <Textarea
                label="Comentarios".to_string()
                value=Signal::derive(move || comentarios.get())
                on_input=Callback::new(move |v: String| comentarios.set(v))
                rows=3
            />

            <div class="misc-modal__footer">
                <button
                    class="button button--primary"
                    disabled=move || loading.get()
                    on:click=handle_submit
                >
                    {move || if loading.get() { "Guardando..." } else { "Guardar" }}
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
