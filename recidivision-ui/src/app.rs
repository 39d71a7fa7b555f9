//! App Root Component
//!
//! Routing and global providers. Every route goes through the same guard:
//! the session decides whether the path renders or redirects.

use leptos::*;
use leptos_router::*;
use recidivision::session::{Route as AppRoute, RouteDecision};

use crate::components::Nav;
use crate::pages::{LoginPage, PredictPage};
use crate::state::{provide_app_state, use_app_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    let state = use_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                {move || state.is_authenticated().then(|| view! { <Nav /> })}

                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/login" view=Guarded />
                        <Route path="/predict" view=Guarded />
                        <Route path="/*any" view=Guarded />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Render the current path or redirect, per the session
#[component]
fn Guarded() -> impl IntoView {
    let state = use_app_state();
    let location = use_location();

    move || match state.resolve(&location.pathname.get()) {
        RouteDecision::Render(AppRoute::Login) => view! { <LoginPage /> }.into_view(),
        RouteDecision::Render(AppRoute::Predict) => view! { <PredictPage /> }.into_view(),
        RouteDecision::Redirect(target) => view! { <Redirect path=target.path() /> }.into_view(),
    }
}
