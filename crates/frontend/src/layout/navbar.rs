use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::cart_panel::CartPanel;
use crate::layout::context::CartContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let cart_ctx = expect_context::<CartContext>();

    let link_class = move |path: &'static str| {
        if location.pathname.get() == path {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__links">
                <A href="/" attr:class=move || link_class("/")>
                    "Búsqueda"
                </A>
                <A href="/registro" attr:class=move || link_class("/registro")>
                    "Registrar Equipo"
                </A>
                <A href="/objetos-varios" attr:class=move || link_class("/objetos-varios")>
                    "Objetos Varios"
                </A>
            </div>

            <div class="navbar__cart">
                <button
                    class="navbar__cart-button"
                    on:click=move |_| cart_ctx.open.update(|o| *o = !*o)
                >
                    "🛒 Carrito"
                    <span class="navbar__cart-count">
                        {move || cart_ctx.cart.with(|c| c.len())}
                    </span>
                </button>
                <Show when=move || cart_ctx.open.get()>
                    <CartPanel />
                </Show>
            </div>
        </nav>
    }
}
