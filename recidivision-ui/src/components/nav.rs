//! Navigation Component
//!
//! Header bar with brand and logout.

use leptos::*;
use leptos_router::*;
use recidivision::session::Route as AppRoute;

use crate::state::use_app_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    // No confirmation step
    let on_logout = move |_| {
        state.logout();
        navigate(AppRoute::Login.path(), Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=AppRoute::Predict.path() class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-white">"RecidiVision"</span>
                    </A>

                    <button
                        on:click=on_logout
                        class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </nav>
    }
}
