use yew::prelude::*;

use crate::common::loading::Skeleton;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[prop_or_default]
    pub sub: Option<String>,
    #[prop_or_default]
    pub hint: Option<String>,
    #[prop_or_default]
    pub loading: bool,
}

/// KPI tile. While loading only the value is replaced by a placeholder.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{&props.title}</div>
                <div class="stat-value">
                    if props.loading {
                        <Skeleton />
                    } else {
                        {&props.value}
                    }
                </div>
                if let Some(sub) = &props.sub {
                    <div class="stat-desc">{sub}</div>
                }
                if let Some(hint) = &props.hint {
                    <div class="stat-desc opacity-60">{hint}</div>
                }
            </div>
        </div>
    }
}
