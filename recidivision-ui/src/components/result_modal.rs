//! Results Modal
//!
//! Headline, probability chart and collapsible explanation of the last
//! prediction.

use leptos::*;
use recidivision::prediction::PredictionPanel;

use crate::components::ProbabilityChart;

#[component]
pub fn ResultModal(panel: RwSignal<PredictionPanel>) -> impl IntoView {
    let result = create_memo(move |_| panel.with(|p| p.visible_result().cloned()));
    let explanation_shown = create_memo(move |_| panel.with(|p| p.is_explanation_shown()));

    move || {
        result.get().map(|result| {
            let lines: Vec<String> = result
                .explanation_lines()
                .into_iter()
                .map(String::from)
                .collect();

            view! {
                <div class="fixed inset-0 bg-black/60 flex items-center justify-center z-40">
                    <div class="bg-gray-800 rounded-xl p-6 w-full max-w-lg space-y-4">
                        <h2 class="text-2xl font-bold">{result.headline()}</h2>

                        {result.chart().map(|chart| view! { <ProbabilityChart chart=chart /> })}

                        {move || {
                            if explanation_shown.get() {
                                view! {
                                    <ul class="list-disc list-inside space-y-1 text-gray-300">
                                        {lines
                                            .iter()
                                            .map(|line| view! { <li>{line.clone()}</li> })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <button
                                        on:click=move |_| panel.update(|p| p.reveal_explanation())
                                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                                    >
                                        "Show Explanation"
                                    </button>
                                }
                                .into_view()
                            }
                        }}

                        <div class="flex justify-end">
                            <button
                                on:click=move |_| panel.update(|p| p.close_modal())
                                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium transition-colors"
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
