//! Equipment search page: category tabs, debounced free-text search, common
//! and category-specific filters, a card grid and windowed pagination.

pub mod state;

use contracts::domain::equipment::{Equipment, EquipmentCategory};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::api as equipment_api;
use crate::domain::equipment::ui::card::EquipmentCard;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::{Input, Select};
use crate::shared::debounce;
use crate::shared::modal::ConfirmDialog;
use state::FilterForm;

fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

fn options_with_blank(blank_label: &str, values: &[String]) -> Vec<(String, String)> {
    let mut opts = vec![(String::new(), blank_label.to_string())];
    opts.extend(values.iter().map(|v| (v.clone(), v.clone())));
    opts
}

#[component]
pub fn EquipmentSearchPage() -> impl IntoView {
    let form = RwSignal::new(FilterForm::default());
    let equipos = RwSignal::new(Vec::<Equipment>::new());
    let total_paginas = RwSignal::new(1usize);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let unidades = RwSignal::new(Vec::<String>::new());
    let a_eliminar = RwSignal::new(None::<Equipment>);
    let reload = RwSignal::new(0u64);

    // Monotonic sequence per issued search; a response is applied only if no
    // newer search has been issued since, so a slow early response can never
    // overwrite a later one.
    let search_seq = StoredValue::new(0u64);
    let last_query = StoredValue::new(String::new());

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

        // Free-text typing is debounced; everything else fires immediately.
        let delay =
            last_query.with_value(|prev| debounce::query_delay(prev, &form_now.query));
        last_query.set_value(form_now.query.clone());

        spawn_local(async move {
            if delay > 0 {
                TimeoutFuture::new(delay).await;
            }
            if search_seq.get_value() != seq {
                return;
            }
            loading.set(true);
            let resultado = equipment_api::buscar_equipos(&form_now.to_filters()).await;
            if search_seq.get_value() != seq {
                return;
            }
            match resultado {
                Ok(respuesta) => {
                    equipos.set(respuesta.equipos);
                    total_paginas.set(respuesta.total_paginas.max(1));
                    error.set(None);
                }
                Err(e) => {
                    log::error!("Equipment search failed: {}", e);
                    equipos.set(Vec::new());
                    error.set(Some("Error al obtener equipos".to_string()));
                }
            }
            loading.set(false);
        });
    });

    let refresh = Callback::new(move |_: ()| reload.update(|n| *n += 1));

    let confirmar_eliminar = Callback::new(move |_: ()| {
        let Some(eq) = a_eliminar.get_untracked() else {
            return;
        };
        a_eliminar.set(None);
        spawn_local(async move {
            match equipment_api::eliminar_equipo(eq.id).await {
                Ok(()) => {
                    // Deleting the last card of a page lands on the previous one.
                    let ultimo = equipos.with_untracked(|e| e.len() <= 1);
                    let pagina = form.with_untracked(|f| f.pagina);
                    if ultimo && pagina > 1 {
                        form.update(|f| f.pagina -= 1);
                    } else {
                        reload.update(|n| *n += 1);
                    }
                }
                Err(e) => {
                    log::error!("Equipment delete failed: {}", e);
                    error.set(Some("No se pudo eliminar el equipo".to_string()));
                }
            }
        });
    });

    let es_computador = move || {
        form.with(|f| f.categoria.map(|c| c.is_computer()).unwrap_or(false))
    };
    let es_impresora = move || {
        form.with(|f| f.categoria == Some(EquipmentCategory::Impresora))
    };

    view! {
        <div class="search-page">
            <div class="search-page__tabs">
                <button
                    class=move || {
                        if form.with(|f| f.categoria.is_none()) {
                            "tab tab--active"
                        } else {
                            "tab"
                        }
                    }
                    on:click=move |_| form.update(|f| {
                        f.categoria = None;
                        f.pagina = 1;
                    })
                >
                    "TODOS"
                </button>
                {EquipmentCategory::ALL
                    .into_iter()
                    .map(|cat| {
                        view! {
                            <button
                                class=move || {
                                    if form.with(|f| f.categoria == Some(cat)) {
                                        "tab tab--active"
                                    } else {
                                        "tab"
                                    }
                                }
                                on:click=move |_| form.update(|f| {
                                    f.categoria = Some(cat);
                                    f.pagina = 1;
                                })
                            >
                                {cat.label().to_uppercase()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Input
                value=Signal::derive(move || form.with(|f| f.query.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| {
                    f.query = v;
                    f.pagina = 1;
                }))
                placeholder="Buscar por número de inventario, serie, IP o nombre..."
                class="search-page__query"
            />

            <div class="search-page__filters">
                <Select
                    value=Signal::derive(move || form.with(|f| f.marca.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.marca = v;
                        f.pagina = 1;
                    }))
                    options=Signal::derive(move || {
                        let mut opts = vec![(String::new(), "Marca (Todos)".to_string())];
                        opts.extend(options(&["Otros", "Dell", "HP", "Lenovo"]));
                        opts
                    })
                />

                <Select
                    value=Signal::derive(move || form.with(|f| f.unidad.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| {
                        f.unidad = v;
                        f.pagina = 1;
                    }))
                    options=Signal::derive(move || {
                        let mut opts =
                            options_with_blank("Unidad (Todos)", &unidades.get());
                        opts.push(("Otros".to_string(), "Otros".to_string()));
                        opts
                    })
                />

                <label class="search-page__range-toggle">
                    <span>"Rango de fechas"</span>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.usar_rango)
                        on:change=move |ev| {
                            let activo = event_target_checked(&ev);
                            form.update(|f| {
                                f.usar_rango = activo;
                                f.fecha_inicio.clear();
                                f.fecha_fin.clear();
                                f.pagina = 1;
                            });
                        }
                    />
                </label>

                <Input
                    label=Signal::derive(move || {
                        if form.with(|f| f.usar_rango) { "Desde" } else { "Fecha" }.to_string()
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
                        label="Hasta".to_string()
                        value=Signal::derive(move || form.with(|f| f.fecha_fin.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| {
                            f.fecha_fin = v;
                            f.pagina = 1;
                        }))
                        input_type="date"
                    />
                </Show>

                <button
                    class="button search-page__clear"
                    on:click=move |_| form.update(|f| f.reset())
                >
                    "Limpiar"
                </button>
            </div>

            <Show when=es_computador>
                <div class="search-page__subfilters">
                    <Select
                        value=Signal::derive(move || form.with(|f| f.ram.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| {
                            f.ram = v;
                            f.pagina = 1;
                        }))
                        options=Signal::derive(move || {
                            options_with_blank(
                                "RAM",
                                &["2", "4", "6", "8", "10", "12", "16", "Otros"]
                                    .map(String::from),
                            )
                        })
                    />
                    <Select
                        value=Signal::derive(move || form.with(|f| f.cpu.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| {
                            f.cpu = v;
                            f.pagina = 1;
                        }))
                        options=Signal::derive(move || {
                            options_with_blank("CPU", &["i3", "i5", "i7", "Otros"].map(String::from))
                        })
                    />
                    <Select
                        value=Signal::derive(move || form.with(|f| f.almacenamiento.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| {
                            f.almacenamiento = v;
                            f.pagina = 1;
                        }))
                        options=Signal::derive(move || {
                            options_with_blank(
                                "Almacenamiento",
                                &["250", "256", "500", "512", "1000", "Otros"].map(String::from),
                            )
                        })
                    />
                    <Select
                        value=Signal::derive(move || form.with(|f| f.tipo_almacenamiento.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| {
                            f.tipo_almacenamiento = v;
                            f.pagina = 1;
                        }))
                        options=Signal::derive(move || {
                            options_with_blank(
                                "Tipo almacenamiento",
                                &["SSD", "HDD", "NVMe"].map(String::from),
                            )
                        })
                    />
                </div>
            </Show>

            <Show when=es_impresora>
                <div class="search-page__subfilters">
                    <Input
                        value=Signal::derive(move || form.with(|f| f.toner.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| {
                            f.toner = v;
                            f.pagina = 1;
                        }))
                        placeholder="Toner"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.drum.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| {
                            f.drum = v;
                            f.pagina = 1;
                        }))
                        placeholder="Drum"
                    />
                    <Select
                        value=Signal::derive(move || form.with(|f| f.conexion.clone()))
                        on_change=Callback::new(move |v: String| form.update(|f| {
                            f.conexion = v;
                            f.pagina = 1;
                        }))
                        options=Signal::derive(move || {
                            vec![
                                (String::new(), "Conexión".to_string()),
                                ("wifi".to_string(), "WiFi".to_string()),
                                ("ethernet".to_string(), "Ethernet".to_string()),
                                ("usb".to_string(), "USB".to_string()),
                            ]
                        })
                    />
                </div>
            </Show>

            <div class="search-page__results">
                {move || {
                    if loading.get() {
                        view! { <div class="search-page__loading">"Cargando..."</div> }
                            .into_any()
                    } else if let Some(msg) = error.get() {
                        view! { <div class="search-page__error">{msg}</div> }.into_any()
                    } else if equipos.with(|e| e.is_empty()) {
                        view! {
                            <div class="search-page__empty">"No se encontraron equipos."</div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="search-page__grid">
                                <For
                                    each=move || equipos.get()
                                    key=|eq: &Equipment| eq.id
                                    children=move |eq: Equipment| {
                                        view! {
                                            <EquipmentCard
                                                equipo=eq
                                                on_eliminar=Callback::new(move |eq| {
                                                    a_eliminar.set(Some(eq));
                                                })
                                                on_refresh=refresh
                                            />
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>

            <PaginationControls
                current_page=Signal::derive(move || form.with(|f| f.pagina))
                total_pages=Signal::derive(move || total_paginas.get())
                page_size=Signal::derive(move || form.with(|f| f.limit))
                on_page_change=Callback::new(move |p: usize| form.update(|f| f.pagina = p))
                on_page_size_change=Callback::new(move |s: usize| form.update(|f| {
                    f.limit = s;
                    f.pagina = 1;
                }))
            />

            <Show when=move || a_eliminar.with(|e| e.is_some())>
                <ConfirmDialog
                    message=Signal::derive(move || {
                        a_eliminar
                            .with(|e| e.as_ref().map(|eq| eq.display_name()))
                            .map(|nombre| format!("¿Eliminar el equipo {}?", nombre))
                            .unwrap_or_default()
                    })
                    on_confirm=confirmar_eliminar
                    on_cancel=Callback::new(move |_| a_eliminar.set(None))
                />
            </Show>
        </div>
    }
}
