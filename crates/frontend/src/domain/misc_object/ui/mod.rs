//! Misc-object catalog page: filters, card grid, create/edit modal and the
//! cart hookup. Unlike equipment, misc objects have no lifecycle and are
//! always eligible for a delivery receipt.

pub mod modal;

use contracts::domain::misc_object::{MiscObject, MiscObjectFilters, Pagination};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::api as equipment_api;
use crate::domain::misc_object::api as misc_api;
use crate::layout::context::CartContext;
use crate::shared::cart::CartKind;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Input, Select};
use crate::shared::date_utils::format_date;
use crate::shared::debounce;
use crate::shared::modal::ConfirmDialog;
use modal::MiscObjectModal;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ObjectFilterForm {
    unidad: String,
    buscar: String,
    usar_rango: bool,
    fecha_inicio: String,
    fecha_fin: String,
    pagina: usize,
    limit: usize,
}

impl Default for ObjectFilterForm {
    fn default() -> Self {
        Self {
            unidad: String::new(),
            buscar: String::new(),
            usar_rango: false,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            pagina: 1,
            limit: 10,
        }
    }
}

impl ObjectFilterForm {
    fn to_filters(&self) -> MiscObjectFilters {
        let non_empty = |v: &str| {
            let t = v.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        };
        let mut filtros = MiscObjectFilters {
            unidad: non_empty(&self.unidad),
            buscar: non_empty(&self.buscar),
            pagina: self.pagina,
            limit: self.limit,
            ..Default::default()
        };
        if self.usar_rango {
            filtros.fecha_inicio = non_empty(&self.fecha_inicio);
            filtros.fecha_fin = non_empty(&self.fecha_fin);
        } else if let Some(dia) = non_empty(&self.fecha_inicio) {
            filtros.fecha_inicio = Some(dia.clone());
            filtros.fecha_fin = Some(dia);
        }
        filtros
    }
}

#[component]
pub fn MiscObjectsPage() -> impl IntoView {
    let cart_ctx = expect_context::<CartContext>();

    let form = RwSignal::new(ObjectFilterForm::default());
    let objetos = RwSignal::new(Vec::<MiscObject>::new());
    let paginacion = RwSignal::new(Pagination::default());
    let unidades = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u64);
    let search_seq = StoredValue::new(0u64);
    let last_query = StoredValue::new(String::new());

    let mostrar_modal = RwSignal::new(false);
    let en_edicion = RwSignal::new(None::<MiscObject>);
    let a_eliminar = RwSignal::new(None::<MiscObject>);

    spawn_local(async move {
        match equipment_api::obtener_unidades().await {
            Ok(nombres) => unidades.set(nombres),
            Err(e) => log::error!("Units fetch failed: {}", e),
        }
    });

    Effect::new(move |_| {
        let form_now = form.get();
        reload.track();

        let seq = search_seq.get_value() + 1;
        search_seq.set_value(seq);
        let delay =
            last_query.with_value(|prev| debounce::query_delay(prev, &form_now.buscar));
        last_query.set_value(form_now.buscar.clone());

        spawn_local(async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            if search_seq.get_value() != seq {
                return;
            }
            loading.set(true);
            let resultado = misc_api::obtener_objetos(&form_now.to_filters()).await;
            if search_seq.get_value() != seq {
                return;
            }
            match resultado {
                Ok(respuesta) => {
                    objetos.set(respuesta.data);
                    paginacion.set(respuesta.paginacion);
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Objects fetch failed: {}", e);
                    objetos.set(Vec::new());
                    error.set(Some("Error al cargar los objetos varios".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let confirmar_eliminar = Callback::new(move |_: ()| {
        let Some(objeto) = a_eliminar.get_untracked() else {
            return;
        };
        a_eliminar.set(None);
        spawn_local(async move {
            match misc_api::eliminar_objeto(objeto.id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => {
                    log::error!("Object delete failed: {}", e);
                    error.set(Some("Error al eliminar el objeto".to_string()));
                }
            }
        });
    });

    view! {
        <div class="misc-page">
            <div class="misc-page__header">
                <h1>"Gestión de Objetos Varios"</h1>
                <p>"Administra los objetos varios del sistema"</p>
            </div>

            <div class="misc-page__filters">
                <Select
                    label="Unidad".to_string()
                    value=Signal::derive(move || form.with(|f| f.unidad.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.unidad = v;
                        f.pagina = 1;
                    }))
                    options=Signal::derive(move || {
                        let mut opts =
                            vec![(String::new(), "Todas las unidades".to_string())];
                        opts.extend(unidades.get().into_iter().map(|u| (u.clone(), u)));
                        opts
                    })
                />

                <Input
                    label="Buscar".to_string()
                    value=Signal::derive(move || form.with(|f| f.buscar.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.buscar = v;
                        f.pagina = 1;
                    }))
                    placeholder="Nombre, comentarios..."
                />

                <label class="misc-page__range-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.usar_rango)
                        on:change=move |ev| {
                            let activo = event_target_checked(&ev);
                            form.update(|f| {
                                f.usar_rango = activo;
                                if !activo {
                                    f.fecha_fin.clear();
                                }
                                f.pagina = 1;
                            });
                        }
                    />
                    <span>"Buscar por rango de fechas"</span>
                </label>

                <Input
                    label=Signal::derive(move || {
                        if form.with(|f| f.usar_rango) {
                            "Fecha desde"
                        } else {
                            "Fecha específica"
                        }
                        .to_string()
                    })
                    value=Signal::derive(move || form.with(|f| f.fecha_inicio.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| {
                        f.fecha_inicio = v;
                        f.pagina = 1;
                    }))
                    input_type="date"
                />

                <Show when=move || form.with(|f| f.usar_rango)>
                    <Input
                        label="Fecha hasta".to_string()
                        value=Signal::derive(move || form.with(|f| f.fecha_fin.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| {
                            f.fecha_fin = v;
                            f.pagina = 1;
                        }))
                        input_type="date"
                    />
                </Show>

                <div class="misc-page__actions">
                    <span class="misc-page__total">
                        {move || format!("Total: {} objeto(s)", paginacion.with(|p| p.total))}
                    </span>
                    <button
                        class="button"
                        on:click=move |_| form.set(ObjectFilterForm::default())
                    >
                        "Limpiar filtros"
                    </button>
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            en_edicion.set(None);
                            mostrar_modal.set(true);
                        }
                    >
                        "+ Nuevo objeto"
                    </button>
                </div>
            </div>

            {move || {
                error.get().map(|msg| view! {
                    <div class="misc-page__error">{msg}</div>
                })
            }}

            <div class="misc-page__grid">
                <For
                    each=move || objetos.get()
                    key=|objeto: &MiscObject| objeto.id
                    children=move |objeto: MiscObject| {
                        let objeto = StoredValue::new(objeto);
                        let id = objeto.with_value(|o| o.id);
                        let en_carrito = move || {
                            cart_ctx.cart.with(|c| c.contains(CartKind::Objeto, id))
                        };
                        view! {
                            <div class="misc-card">
                                <div class="misc-card__header">
                                    <h3>{objeto.with_value(|o| o.nombre.clone())}</h3>
                                    <span class="misc-card__date">
                                        {objeto.with_value(|o| {
                                            o.created_at
                                                .as_deref()
                                                .map(format_date)
                                                .unwrap_or_else(|| "Sin fecha".to_string())
                                        })}
                                    </span>
                                </div>
                                <p>
                                    <span class="misc-card__label">"Unidad: "</span>
                                    {objeto.with_value(|o| o.unidad.clone())}
                                </p>
                                <p>
                                    <span class="misc-card__label">"ID: "</span>
                                    {id}
                                </p>
                                {objeto.with_value(|o| o.comentarios.clone()).map(|c| {
                                    view! {
                                        <p>
                                            <span class="misc-card__label">"Comentarios: "</span>
                                            {c}
                                        </p>
                                    }
                                })}

                                <div class="misc-card__actions">
                                    <button
                                        class="button"
                                        on:click=move |_| {
                                            en_edicion.set(Some(objeto.get_value()));
                                            mostrar_modal.set(true);
                                        }
                                    >
                                        "Editar"
                                    </button>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| {
                                            a_eliminar.set(Some(objeto.get_value()));
                                        }
                                    >
                                        "Eliminar"
                                    </button>
                                </div>
                                <button
                                    class="button button--cart misc-card__cart"
                                    disabled=en_carrito
                                    on:click=move |_| {
                                        objeto.with_value(|o| cart_ctx.add_objeto(o));
                                    }
                                >
                                    {move || {
                                        if en_carrito() {
                                            "✓ En Carrito"
                                        } else {
                                            "+ Agregar al Carrito"
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || !loading.get() && objetos.with(|o| o.is_empty())>
                <div class="misc-page__empty">
                    <p>"No se encontraron objetos varios"</p>
                </div>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || form.with(|f| f.pagina))
                total_pages=Signal::derive(move || paginacion.with(|p| p.total_paginas.max(1)))
                page_size=Signal::derive(move || form.with(|f| f.limit))
                on_page_change=Callback::new(move |p: usize| form.update(|f| f.pagina = p))
                on_page_size_change=Callback::new(move |s: usize| form.update(|f| {
                    f.limit = s;
                    f.pagina = 1;
                }))
                page_size_options=vec![10, 20, 50]
            />

            <Show when=move || mostrar_modal.get()>
                <MiscObjectModal
                    objeto=en_edicion.get_untracked()
                    on_close=Callback::new(move |_| mostrar_modal.set(false))
                    on_saved=Callback::new(move |_| {
                        mostrar_modal.set(false);
                        reload.update(|n| *n += 1);
                    })
                />
            </Show>

            <Show when=move || a_eliminar.with(|o| o.is_some())>
                <ConfirmDialog
                    message=Signal::derive(move || {
                        a_eliminar
                            .with(|o| o.as_ref().map(|obj| obj.nombre.clone()))
                            .map(|nombre| format!("¿Estás seguro de eliminar \"{}\"?", nombre))
                            .unwrap_or_default()
                    })
                    on_confirm=confirmar_eliminar
                    on_cancel=Callback::new(move |_| a_eliminar.set(None))
                />
            </Show>
        </div>
    }
}
