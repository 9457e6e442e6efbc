use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::domain::equipment::ui::list::EquipmentSearchPage;
use crate::domain::equipment::ui::register::RegisterEquipmentPage;
use crate::domain::misc_object::ui::MiscObjectsPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
            <Route path=path!("/") view=EquipmentSearchPage />
            <Route path=path!("/busqueda") view=EquipmentSearchPage />
            <Route path=path!("/registro") view=RegisterEquipmentPage />
            <Route path=path!("/objetos-varios") view=MiscObjectsPage />
        </Routes>
    }
}
