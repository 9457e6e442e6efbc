//! Floating staff-profile selector, bottom-right corner. The selection only
//! feeds the acta signature line.

use leptos::prelude::*;

use crate::layout::context::{roster, ProfileContext, ProfileEntry};

fn first_name(nombre: &str) -> String {
    nombre.split(' ').next().unwrap_or(nombre).to_string()
}

#[component]
pub fn ProfileSelector() -> impl IntoView {
    let profile_ctx = expect_context::<ProfileContext>();
    let expanded = RwSignal::new(false);

    view! {
        <div
            class="profile-selector"
            on:mouseenter=move |_| expanded.set(true)
            on:mouseleave=move |_| expanded.set(false)
        >
            <div class="profile-selector__current">
                <span class="profile-selector__icon">
                    {move || profile_ctx.selected.get().icono}
                </span>
                <div>
                    <p class="profile-selector__name">
                        {move || first_name(&profile_ctx.selected.get().perfil.nombre)}
                    </p>
                    <p class="profile-selector__role">
                        {move || profile_ctx.selected.get().perfil.cargo}
                    </p>
                </div>
            </div>

            <Show when=move || expanded.get()>
                <div class="profile-selector__options">
                    <h3>"Cambiar perfil"</h3>
                    <For
                        each=move || {
                            let current = profile_ctx.selected.get();
                            roster()
                                .into_iter()
                                .filter(|entry| entry.perfil != current.perfil)
                                .collect::<Vec<_>>()
                        }
                        key=|entry: &ProfileEntry| entry.perfil.nombre.clone()
                        children=move |entry: ProfileEntry| {
                            let select = entry.clone();
                            let title = format!("{} - {}", entry.perfil.nombre, entry.perfil.cargo);
                            view! {
                                <button
                                    class="profile-selector__option"
                                    title=title
                                    on:click=move |_| profile_ctx.selected.set(select.clone())
                                >
                                    <span>{entry.icono}</span>
                                    <div>
                                        <p class="profile-selector__name">
                                            {first_name(&entry.perfil.nombre)}
                                        </p>
                                        <p class="profile-selector__role">
                                            {entry.perfil.cargo.clone()}
                                        </p>
                                    </div>
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
