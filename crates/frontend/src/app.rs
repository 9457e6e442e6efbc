use leptos::prelude::*;
use leptos_router::components::Router;

use crate::layout::context::{CartContext, ProfileContext};
use crate::layout::navbar::Navbar;
use crate::layout::profile_selector::ProfileSelector;
use crate::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_context(CartContext::new());
    provide_context(ProfileContext::new());

    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <AppRoutes />
            </main>
            <ProfileSelector />
        </Router>
    }
}
