use client::Insights;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub insights: Insights,
}

#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body">
                <h2 class="card-title">{"Insights"}</h2>
                <ul class="flex flex-col gap-2">
                    { for props.insights.lines().into_iter().map(|(badge, text)| html! {
                        <li key={badge}>
                            <span class="badge badge-outline mr-2">{badge}</span>
                            {text.to_string()}
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
