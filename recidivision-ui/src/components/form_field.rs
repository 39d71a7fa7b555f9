//! Prediction Form Field
//!
//! One input of the prediction form: a select for closed-set fields, a
//! text input for numeric ones. The raw text always goes to the form; the
//! message under the input is whatever the form's validation recorded.

use leptos::*;
use recidivision::form::FieldName;
use recidivision::prediction::PredictionPanel;

#[component]
pub fn FormField(field: FieldName, panel: RwSignal<PredictionPanel>) -> impl IntoView {
    let value = move || panel.with(|p| p.form.value(field).to_string());
    let error = move || panel.with(|p| p.form.error_message(field));
    let disabled = move || panel.with(|p| p.is_busy());
    let on_edit = move |ev| panel.update(|p| p.edit(field, event_target_value(&ev)));

    let input_class = move || {
        let base = "w-full bg-gray-700 rounded-lg px-4 py-3 border focus:outline-none";
        if error().is_some() {
            format!("{} border-red-500", base)
        } else {
            format!("{} border-gray-600 focus:border-blue-500", base)
        }
    };

    let input = match field.options() {
        Some(options) => view! {
            <select
                id=field.as_str()
                prop:value=value
                on:change=on_edit
                disabled=disabled
                class=input_class
            >
                <option value="" disabled=true>"Select..."</option>
                {options
                    .iter()
                    .map(|o| view! { <option value=o.value>{o.display}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        None => view! {
            <input
                id=field.as_str()
                type="text"
                inputmode="decimal"
                prop:value=value
                on:input=on_edit
                disabled=disabled
                class=input_class
            />
        }
        .into_view(),
    };

    view! {
        <div>
            <label for=field.as_str() class="block text-sm text-gray-400 mb-2">
                {field.label()}
                <span class="ml-1 cursor-help text-gray-500" title=field.help()>"ⓘ"</span>
            </label>
            {input}
            {move || error().map(|msg| view! {
                <p class="text-red-400 text-sm mt-1">{msg}</p>
            })}
        </div>
    }
}
