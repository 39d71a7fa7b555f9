//! Predict Page
//!
//! The seven-field prediction form, the results modal and the failure
//! toast.

use leptos::*;
use recidivision::form::FieldName;
use recidivision::prediction::PredictionPanel;

use crate::api;
use crate::components::{FormField, InlineLoading, Loading, ResultModal, Toast};
use crate::state::use_app_state;

/// How long the failure toast stays up
const ERROR_TOAST_MS: u32 = 5000;

#[component]
pub fn PredictPage() -> impl IntoView {
    let state = use_app_state();
    let panel = create_rw_signal(PredictionPanel::new());

    let busy = move || panel.with(|p| p.is_busy());
    let can_submit = move || panel.with(|p| p.can_submit());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = panel.try_update(|p| p.begin_submit()).flatten() else {
            return;
        };
        let token = state.token();

        spawn_local(async move {
            let outcome = api::predict(&request, token.as_deref()).await;
            if let Err(e) = &outcome {
                web_sys::console::error_1(&format!("Error making prediction: {}", e).into());
            }
            panel.update(|p| p.finish(outcome));

            if panel.with_untracked(|p| p.error().is_some()) {
                gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
                    panel.update(|p| p.dismiss_error());
                })
                .forget();
            }
        });
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Recidivism Prediction"</h1>
                <p class="text-gray-400 mt-1">"Enter the case details to get a prediction"</p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                {FieldName::ALL
                    .into_iter()
                    .map(|field| view! { <FormField field=field panel=panel /> })
                    .collect_view()}

                <button
                    type="submit"
                    disabled=move || !can_submit()
                    class="w-full flex items-center justify-center space-x-2 px-4 py-3 bg-blue-600 hover:bg-blue-700
                           disabled:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    {move || busy().then(|| view! { <InlineLoading /> })}
                    <span>{move || if busy() { "Predicting..." } else { "Predict" }}</span>
                </button>
            </form>

            {move || busy().then(|| view! { <Loading /> })}

            <ResultModal panel=panel />

            <Toast
                message=Signal::derive(move || panel.with(|p| p.error().map(str::to_string)))
                on_dismiss=move |_| panel.update(|p| p.dismiss_error())
            />
        </div>
    }
}
