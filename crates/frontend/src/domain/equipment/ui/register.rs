//! Equipment registration. New units always enter the inventory in repair,
//! with one seeded intake event dated at submission time.

use contracts::domain::equipment::{EquipmentCategory, NewEquipment};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::equipment::api as equipment_api;
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::date_utils::now_iso;

pub fn marcas_por_tipo(tipo: EquipmentCategory) -> &'static [&'static str] {
    match tipo {
        EquipmentCategory::Pc => &["HP", "Dell", "Lenovo", "Asus", "Acer", "Generico"],
        EquipmentCategory::Notebook => &["Apple", "Samsung", "HP", "Lenovo", "Dell"],
        EquipmentCategory::Impresora => &["Brother", "Epson", "Canon", "HP"],
    }
}

/// Keep only digits and single dots, never leading, at most 15 characters.
pub fn sanitize_ip(value: &str) -> String {
    let mut out = String::new();
    for c in value.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !out.is_empty() && !out.ends_with('.') => out.push(c),
            _ => {}
        }
        if out.len() == 15 {
            break;
        }
    }
    out
}

/// Raw form state; [`RegisterForm::to_payload`] turns it into the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub tipo: EquipmentCategory,
    pub num_inv: String,
    pub serie: String,
    pub nombre_unidad: String,
    pub marca: String,
    pub modelo: String,
    pub ip: String,
    pub comentarios: String,

    pub nombre_equipo: String,
    pub nombre_usuario: String,
    pub windows: String,
    pub ver_win: String,
    pub antivirus: bool,
    pub cpu: String,
    pub ram: String,
    pub almacenamiento: String,
    pub tipo_almacenamiento: String,

    pub toner: String,
    pub drum: String,
    pub conexion: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            tipo: EquipmentCategory::Pc,
            num_inv: String::new(),
            serie: String::new(),
            nombre_unidad: String::new(),
            marca: String::new(),
            modelo: String::new(),
            ip: String::new(),
            comentarios: String::new(),
            nombre_equipo: String::new(),
            nombre_usuario: String::new(),
            windows: "Windows 10".to_string(),
            ver_win: "22H2".to_string(),
            antivirus: true,
            cpu: String::new(),
            ram: String::new(),
            almacenamiento: String::new(),
            tipo_almacenamiento: String::new(),
            toner: String::new(),
            drum: String::new(),
            conexion: String::new(),
        }
    }
}

impl RegisterForm {
    /// Build the creation payload. Category-specific fields are attached only
    /// for the matching category; printers never carry an equipment name.
    pub fn to_payload(&self, now_iso: String) -> Result<NewEquipment, String> {
        if self.marca.trim().is_empty() {
            return Err("Selecciona una marca".to_string());
        }

        let mut nuevo = NewEquipment::seeded(self.tipo, now_iso);
        nuevo.marca = self.marca.trim().to_string();
        nuevo.modelo = self.modelo.trim().to_string();
        nuevo.serie = self.serie.trim().to_string();
        nuevo.num_inv = self.num_inv.trim().to_string();
        nuevo.ip = sanitize_ip(&self.ip);
        nuevo.nombre_unidad = self.nombre_unidad.clone();
        nuevo.comentarios = self.comentarios.trim().to_string();

        if self.tipo.is_computer() {
            nuevo.nombre_equipo = Some(self.nombre_equipo.trim().to_string());
            nuevo.nombre_usuario = Some(self.nombre_usuario.trim().to_string());
            nuevo.windows = Some(self.windows.trim().to_string());
            nuevo.ver_win = Some(self.ver_win.trim().to_string());
            nuevo.antivirus = Some(if self.antivirus { "Sí" } else { "No" }.to_string());
            nuevo.cpu = Some(self.cpu.trim().to_string());
            nuevo.ram = Some(self.ram.trim().parse().unwrap_or(0));
            nuevo.almacenamiento = Some(self.almacenamiento.trim().parse().unwrap_or(0));
            nuevo.tipo_almacenamiento = Some(self.tipo_almacenamiento.clone());
        } else {
            nuevo.toner = Some(self.toner.trim().to_string());
            nuevo.drum = Some(self.drum.trim().to_string());
            nuevo.conexion = Some(self.conexion.clone());
        }

        Ok(nuevo)
    }
}

#[component]
pub fn RegisterEquipmentPage() -> impl IntoView {
    let form = RwSignal::new(RegisterForm::default());
    let unidades = RwSignal::new(Vec::<String>::new());
    let enviando = RwSignal::new(false);
    let mensaje = RwSignal::new(None::<String>);
    let exito = RwSignal::new(false);

    spawn_local(async move {
        match equipment_api::obtener_unidades().await {
            Ok(nombres) => unidades.set(nombres),
            Err(e) => log::error!("Units fetch failed: {}", e),
        }
    });

    let es_computador = move || form.with(|f| f.tipo.is_computer());
    let es_impresora = move || form.with(|f| f.tipo == EquipmentCategory::Impresora);

    let handle_submit = move |_| {
        if enviando.get_untracked() {
            return;
        }
        let payload = match form.with_untracked(|f| f.to_payload(now_iso())) {
            Ok(p) => p,
            Err(msg) => {
                mensaje.set(Some(msg));
                return;
            }
        };
        enviando.set(true);
        mensaje.set(None);
        spawn_local(async move {
            match equipment_api::crear_equipo(&payload).await {
                Ok(()) => {
                    exito.set(true);
                    form.set(RegisterForm::default());
                }
                Err(e) => {
                    log::error!("Equipment creation failed: {}", e);
                    mensaje.set(Some("Error al crear el equipo.".to_string()));
                }
            }
            enviando.set(false);
        });
    };

    view! {
        <div class="register-page">
            <h2 class="register-page__title">"Registrar Equipo"</h2>

            {move || {
                mensaje.get().map(|msg| view! {
                    <p class="register-page__error">{msg}</p>
                })
            }}

            <Select
                label="Tipo de Equipo".to_string()
                value=Signal::derive(move || form.with(|f| f.tipo.as_str().to_string()))
                on_change=Callback::new(move |v: String| {
                    let tipo = EquipmentCategory::ALL
                        .into_iter()
                        .find(|c| c.as_str() == v)
                        .unwrap_or(EquipmentCategory::Pc);
                    form.update(|f| {
                        f.tipo = tipo;
                        f.marca.clear();
                    });
                })
                options=Signal::derive(move || {
                    EquipmentCategory::ALL
                        .into_iter()
                        .map(|c| (c.as_str().to_string(), c.label().to_uppercase()))
                        .collect()
                })
            />

            <div class="register-page__grid">
                <Input
                    value=Signal::derive(move || form.with(|f| f.num_inv.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.num_inv = v))
                    placeholder="Número de Inventario"
                />
                <Input
                    value=Signal::derive(move || form.with(|f| f.serie.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.serie = v))
                    placeholder="Serie"
                />

                <Select
                    value=Signal::derive(move || form.with(|f| f.nombre_unidad.clone()))
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.nombre_unidad = v)
                    })
                    options=Signal::derive(move || {
                        let mut opts =
                            vec![(String::new(), "Selecciona Unidad".to_string())];
                        opts.extend(unidades.get().into_iter().map(|u| (u.clone(), u)));
                        opts.push(("Otros".to_string(), "Otros".to_string()));
                        opts
                    })
                />

                <Select
                    value=Signal::derive(move || form.with(|f| f.marca.clone()))
                    on_change=Callback::new(move |v: String| form.update(|f| f.marca = v))
                    options=Signal::derive(move || {
                        let tipo = form.with(|f| f.tipo);
                        let mut opts =
                            vec![(String::new(), "Selecciona Marca".to_string())];
                        opts.extend(
                            marcas_por_tipo(tipo)
                                .iter()
                                .map(|m| (m.to_string(), m.to_string())),
                        );
                        opts
                    })
                />

                <Input
                    value=Signal::derive(move || form.with(|f| f.modelo.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.modelo = v))
                    placeholder="Modelo"
                />

                <Show when=es_computador>
                    <Input
                        value=Signal::derive(move || form.with(|f| f.ip.clone()))
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.ip = sanitize_ip(&v))
                        })
                        placeholder="Dirección IP (ej: 192.168.1.100)"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.nombre_equipo.clone()))
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.nombre_equipo = v)
                        })
                        placeholder="Nombre de Equipo"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.nombre_usuario.clone()))
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.nombre_usuario = v)
                        })
                        placeholder="Nombre de Usuario"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.windows.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.windows = v))
                        placeholder="Windows"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.ver_win.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.ver_win = v))
                        placeholder="Versión Windows"
                    />

                    <label class="register-page__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.antivirus)
                            on:change=move |ev| {
                                let marcado = event_target_checked(&ev);
                                form.update(|f| f.antivirus = marcado);
                            }
                        />
                        <span>"Antivirus instalado"</span>
                    </label>

                    <Input
                        value=Signal::derive(move || form.with(|f| f.ram.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.ram = v))
                        placeholder="RAM (ej: 8)"
                        input_type="number"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.cpu.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.cpu = v))
                        placeholder="CPU"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.almacenamiento.clone()))
                        on_input=Callback::new(move |v: String| {
                            form.update(|f| f.almacenamiento = v)
                        })
                        placeholder="Almacenamiento (ej: 256)"
                        input_type="number"
                    />
                    <Select
                        value=Signal::derive(move || {
                            form.with(|f| f.tipo_almacenamiento.clone())
                        })
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.tipo_almacenamiento = v)
                        })
                        options=Signal::derive(move || {
                            let mut opts = vec![(
                                String::new(),
                                "Selecciona Tipo de Almacenamiento".to_string(),
                            )];
                            opts.extend(
                                ["SSD", "HDD", "NVMe"]
                                    .iter()
                                    .map(|t| (t.to_string(), t.to_string())),
                            );
                            opts
                        })
                    />
                </Show>

                <Show when=es_impresora>
                    <Select
                        value=Signal::derive(move || form.with(|f| f.conexion.clone()))
                        on_change=Callback::new(move |v: String| {
                            form.update(|f| f.conexion = v)
                        })
                        options=Signal::derive(move || {
                            vec![
                                (String::new(), "Tipo de Conexión".to_string()),
                                ("WiFi".to_string(), "WiFi".to_string()),
                                ("Ethernet".to_string(), "Ethernet".to_string()),
                                ("USB".to_string(), "USB".to_string()),
                            ]
                        })
                    />
                    <Show when=move || {
                        form.with(|f| !f.conexion.eq_ignore_ascii_case("usb"))
                    }>
                        <Input
                            value=Signal::derive(move || form.with(|f| f.ip.clone()))
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.ip = sanitize_ip(&v))
                            })
                            placeholder="IP"
                        />
                    </Show>
                    <Input
                        value=Signal::derive(move || form.with(|f| f.toner.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.toner = v))
                        placeholder="Toner"
                    />
                    <Input
                        value=Signal::derive(move || form.with(|f| f.drum.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.drum = v))
                        placeholder="Drum"
                    />
                </Show>
            </div>

            <Textarea
                label="Comentarios".to_string()
                value=Signal::derive(move || form.with(|f| f.comentarios.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.comentarios = v))
                placeholder="Comentarios adicionales..."
                rows=4
            />

            <div class="register-page__submit">
                <button
                    class="button button--primary"
                    disabled=move || enviando.get()
                    on:click=handle_submit
                >
                    {move || if enviando.get() { "Guardando..." } else { "Registrar Equipo" }}
                </button>
            </div>

            <Show when=move || exito.get()>
                <div class="modal-overlay">
                    <div class="register-page__success">
                        <h3>"¡Equipo registrado!"</h3>
                        <p>"El equipo se ha registrado correctamente."</p>
                        <button
                            class="button button--primary"
                            on:click=move |_| exito.set(false)
                        >
                            "Cerrar"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::equipment::ESTADO_EN_PROCESO;

    #[test]
    fn sanitize_ip_strips_invalid_characters() {
        assert_eq!(sanitize_ip("192.168.1.100"), "192.168.1.100");
        assert_eq!(sanitize_ip("abc192.168x"), "192.168");
        assert_eq!(sanitize_ip(".192"), "192");
        assert_eq!(sanitize_ip("10..0.1"), "10.0.1");
        assert_eq!(sanitize_ip("123.456.789.012.345"), "123.456.789.012");
    }

    #[test]
    fn payload_requires_a_brand() {
        let form = RegisterForm::default();
        assert!(form.to_payload("2024-01-05T10:00:00.000Z".to_string()).is_err());
    }

    #[test]
    fn new_computer_enters_in_repair_with_computer_fields() {
        let form = RegisterForm {
            marca: "HP".to_string(),
            ram: "8".to_string(),
            ..Default::default()
        };
        let payload = form
            .to_payload("2024-01-05T10:00:00.000Z".to_string())
            .unwrap();
        assert_eq!(payload.estado, ESTADO_EN_PROCESO);
        assert_eq!(payload.historial_ingresos.len(), 1);
        assert_eq!(payload.ram, Some(8));
        assert_eq!(payload.antivirus.as_deref(), Some("Sí"));
        assert!(payload.toner.is_none());
    }

    #[test]
    fn printers_never_carry_an_equipment_name() {
        let form = RegisterForm {
            tipo: EquipmentCategory::Impresora,
            marca: "Brother".to_string(),
            nombre_equipo: "no-debe-salir".to_string(),
            toner: "TN-1060".to_string(),
            ..Default::default()
        };
        let payload = form
            .to_payload("2024-01-05T10:00:00.000Z".to_string())
            .unwrap();
        assert!(payload.nombre_equipo.is_none());
        assert_eq!(payload.toner.as_deref(), Some("TN-1060"));
        assert!(payload.ram.is_none());
    }

    #[test]
    fn blank_numeric_fields_default_to_zero() {
        let form = RegisterForm {
            marca: "Dell".to_string(),
            ..Default::default()
        };
        let payload = form
            .to_payload("2024-01-05T10:00:00.000Z".to_string())
            .unwrap();
        assert_eq!(payload.ram, Some(0));
        assert_eq!(payload.almacenamiento, Some(0));
    }
}
