use client::view::{NO_CLASSES_TEXT, NO_EQUIPMENT_TEXT};
use client::{kpi_cards, Insights};
use common::chart::trend_points;
use common::table::{class_columns, equipment_columns};
use common::RankedRow;
use yew::prelude::*;

use super::header::Header;
use super::insights::InsightsPanel;
use crate::common::error::ErrorPanel;
use crate::components::stat_card::StatCard;
use crate::components::top_table::TopTable;
use crate::components::trend_chart::TrendChart;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let dashboard = use_dashboard();
    let state = &dashboard.state;
    let loading = state.is_loading();
    let data = state.data();

    let last_updated = state
        .last_updated()
        .map(|t| t.format("%H:%M:%S").to_string());

    let cards = kpi_cards(data.map(|d| &d.kpis));
    let trend = data.map(|d| trend_points(&d.trend)).unwrap_or_default();
    let top_classes: Vec<RankedRow> = data.map(|d| d.top_classes.clone()).unwrap_or_default();
    let top_equipment: Vec<RankedRow> = data.map(|d| d.top_equipment.clone()).unwrap_or_default();

    html! {
        <>
            <Header
                filters={*state.filters()}
                loading={loading}
                has_error={state.error().is_some()}
                last_updated={last_updated}
                on_start={dashboard.on_start.clone()}
                on_end={dashboard.on_end.clone()}
                on_frequency={dashboard.on_frequency.clone()}
                on_reset={dashboard.on_reset.clone()}
                on_refresh={dashboard.on_refresh.clone()}
            />

            if let Some(error) = state.error() {
                <ErrorPanel message={error.clone()} on_retry={Some(dashboard.on_refresh.clone())} />
            } else {
                <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4 mt-6">
                    { for cards.into_iter().map(|card| html! {
                        <StatCard
                            key={card.title}
                            title={card.title}
                            value={card.value}
                            sub={Some(card.sub)}
                            hint={Some(card.hint.to_string())}
                            loading={loading}
                        />
                    }) }
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mt-6">
                    <div class="lg:col-span-3">
                        <TrendChart
                            title="Check-ins Over Time"
                            points={trend}
                            y_label={Some("Check-ins per period".to_string())}
                        />
                    </div>
                    <TopTable<RankedRow>
                        title="Top Classes"
                        rows={top_classes}
                        columns={class_columns()}
                        empty_text={Some(NO_CLASSES_TEXT.to_string())}
                    />
                    <TopTable<RankedRow>
                        title="Top Equipment"
                        rows={top_equipment}
                        columns={equipment_columns()}
                        empty_text={Some(NO_EQUIPMENT_TEXT.to_string())}
                    />
                </div>
            }

            <InsightsPanel insights={Insights::from_data(data)} />

            <div class="text-sm opacity-60 mt-6">
                {"Tip: In dev, the frontend calls "}
                <span class="badge badge-outline">{"/api"}</span>
                {" and the dev proxy forwards to your API server. For deployment, build with "}
                <span class="badge badge-outline">{"GYMOPS_API_BASE"}</span>
                {" set to your API URL."}
            </div>
        </>
    }
}
