//! Login Page
//!
//! Credential form. Inputs and the submit button are disabled while the
//! request is outstanding; failures show a banner above the form.

use leptos::*;
use leptos_router::*;
use recidivision::login::LoginForm;
use recidivision::session::Route as AppRoute;

use crate::api;
use crate::components::InlineLoading;
use crate::state::use_app_state;

#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginForm::new());

    let busy = move || form.with(|f| f.is_busy());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(credentials) = form.try_update(|f| f.begin()).flatten() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&credentials).await {
                Ok(response) => match state.login(&response.token) {
                    Ok(()) => {
                        form.update(|f| f.succeed());
                        navigate(AppRoute::Predict.path(), Default::default());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to store token: {}", e).into());
                        form.update(|f| f.fail_to_persist(&e));
                    }
                },
                Err(e) => form.update(|f| f.fail(&e)),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-16 bg-gray-800 rounded-xl p-8">
            <h1 class="text-3xl font-bold mb-6 text-center">"Login"</h1>

            {move || form.with(|f| f.error().map(str::to_string)).map(|msg| view! {
                <div class="mb-4 bg-red-900/50 border border-red-600 text-red-200 px-4 py-3 rounded-lg">
                    {msg}
                </div>
            })}

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="username" class="block text-sm text-gray-400 mb-2">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.credentials.username.clone())
                        on:input=move |ev| form.update(|f| f.set_username(event_target_value(&ev)))
                        disabled=busy
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label for="password" class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.credentials.password.clone())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        disabled=busy
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 border border-gray-600 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=busy
                    class="w-full flex items-center justify-center space-x-2 px-4 py-3 bg-blue-600 hover:bg-blue-700
                           disabled:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    {move || busy().then(|| view! { <InlineLoading /> })}
                    <span>{move || form.with(|f| f.submit_label())}</span>
                </button>
            </form>
        </div>
    }
}
