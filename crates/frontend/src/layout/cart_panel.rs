//! Dropdown panel for the delivery-receipt cart.

use leptos::prelude::*;

use crate::layout::context::{CartContext, ProfileContext};
use crate::shared::cart::CartItem;

#[component]
pub fn CartPanel() -> impl IntoView {
    let cart_ctx = expect_context::<CartContext>();
    let profile_ctx = expect_context::<ProfileContext>();

    let items = move || cart_ctx.cart.with(|c| c.items().to_vec());
    let count = move || cart_ctx.cart.with(|c| c.len());

    view! {
        <div class="cart-panel">
            <div class="cart-panel__header">
                <h3>{move || format!("🛒 Carrito ({})", count())}</h3>
                <div class="cart-panel__header-actions">
                    <button
                        class="cart-panel__clear"
                        on:click=move |_| cart_ctx.clear()
                    >
                        "Limpiar"
                    </button>
                    <button
                        class="cart-panel__close"
                        on:click=move |_| cart_ctx.open.set(false)
                    >
                        "✕"
                    </button>
                </div>
            </div>

            <Show
                when={move || count() > 0}
                fallback=|| view! {
                    <div class="cart-panel__empty">
                        <p>"Carrito vacío"</p>
                        <p class="cart-panel__hint">"Agrega equipos desde las tarjetas"</p>
                    </div>
                }
            >
                <ul class="cart-panel__items">
                    <For
                        each=items
                        key=|item: &CartItem| (item.kind, item.id)
                        children=move |item: CartItem| {
                            let kind = item.kind;
                            let id = item.id;
                            view! {
                                <li class="cart-panel__item">
                                    <span class="cart-panel__item-label">{item.label.clone()}</span>
                                    <button
                                        class="cart-panel__item-remove"
                                        on:click=move |_| cart_ctx.remove(kind, id)
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>

                <div class="cart-panel__profile">
                    <h4>"Encargado de Entrega"</h4>
                    <div class="cart-panel__profile-row">
                        <span class="cart-panel__profile-icon">
                            {move || profile_ctx.selected.get().icono}
                        </span>
                        <div>
                            <p class="cart-panel__profile-name">
                                {move || profile_ctx.selected.get().perfil.nombre}
                            </p>
                            <p class="cart-panel__profile-role">
                                {move || profile_ctx.selected.get().perfil.cargo}
                            </p>
                        </div>
                    </div>
                </div>

                {move || {
                    cart_ctx.error.get().map(|err| view! {
                        <div class="cart-panel__error">{err.message().to_string()}</div>
                    })
                }}

                <button
                    class="cart-panel__generate"
                    disabled=move || cart_ctx.generating.get()
                    on:click=move |_| {
                        let perfil = profile_ctx.selected.get_untracked().perfil;
                        cart_ctx.generate_receipt(perfil);
                    }
                >
                    {move || {
                        if cart_ctx.generating.get() {
                            "Generando...".to_string()
                        } else {
                            format!("📄 Generar Acta ({})", count())
                        }
                    }}
                </button>
            </Show>
        </div>
    }
}
