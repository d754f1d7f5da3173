use chrono::NaiveDate;
use client::Filters;
use client::view::api_status_label;
use common::Frequency;
use common::format::{iso_date, parse_iso_date};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub filters: Filters,
    pub loading: bool,
    pub has_error: bool,
    /// Local time of the last successful load, already formatted
    #[prop_or_default]
    pub last_updated: Option<String>,
    pub on_start: Callback<String>,
    pub on_end: Callback<String>,
    pub on_frequency: Callback<Frequency>,
    pub on_reset: Callback<()>,
    pub on_refresh: Callback<()>,
}

/// Title, status chips and the range/frequency controls.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let range = props.filters.range;

    let on_start = {
        let cb = props.on_start.clone();
        let current = range.start;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if let Some(restored) = rejected_date_reset(&value, current) {
                input.set_value(&restored);
            }
            cb.emit(value);
        })
    };

    let on_end = {
        let cb = props.on_end.clone();
        let current = range.end;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if let Some(restored) = rejected_date_reset(&value, current) {
                input.set_value(&restored);
            }
            cb.emit(value);
        })
    };

    let on_frequency = {
        let cb = props.on_frequency.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Frequency>() {
                Ok(frequency) => cb.emit(frequency),
                Err(err) => log::warn!("{}", err),
            }
        })
    };

    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let on_refresh = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let dot_class = if props.has_error { "badge badge-error badge-xs" } else { "badge badge-success badge-xs" };

    html! {
        <div class="flex flex-wrap justify-between items-end gap-4">
            <div>
                <h1 class="text-2xl font-bold">{"Gym Operations Dashboard"}</h1>
                <div class="flex flex-wrap items-center gap-2 mt-1 text-sm">
                    <span class="opacity-70">{"KPIs + trends from check-ins, classes, equipment, and spend."}</span>
                    <span class="badge badge-ghost gap-1">
                        <span class={dot_class}></span>
                        {api_status_label(props.has_error)}
                    </span>
                    <span class="badge badge-ghost">{format!("Range: {}", range)}</span>
                    if let Some(updated) = &props.last_updated {
                        <span class="badge badge-ghost">{format!("Updated {}", updated)}</span>
                    }
                </div>
            </div>

            <div class="flex flex-wrap items-end gap-2">
                <label class="form-control">
                    <span class="label-text">{"Start"}</span>
                    <input type="date" class="input input-bordered input-sm"
                        value={range.start_iso()} onchange={on_start} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"End"}</span>
                    <input type="date" class="input input-bordered input-sm"
                        value={range.end_iso()} onchange={on_end} />
                </label>
                <label class="form-control">
                    <span class="label-text">{"Trend"}</span>
                    <select class="select select-bordered select-sm" onchange={on_frequency}>
                        { for [Frequency::Day, Frequency::Week].iter().map(|f| html! {
                            <option value={f.as_str()} selected={*f == props.filters.frequency}>{f.label()}</option>
                        }) }
                    </select>
                </label>
                <button class="btn btn-secondary btn-sm" onclick={on_reset}>{"Reset"}</button>
                <button class="btn btn-primary btn-sm" onclick={on_refresh}>
                    {if props.loading { "Loading…" } else { "Refresh" }}
                </button>
            </div>
        </div>
    }
}

/// Value to write back into a date input whose new value will be rejected.
///
/// The `value` prop does not change in that case, so the DOM would otherwise
/// keep showing the cleared or invalid text.
fn rejected_date_reset(value: &str, current: NaiveDate) -> Option<String> {
    parse_iso_date(value).err().map(|_| iso_date(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_30() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_cleared_date_input_is_restored() {
        assert_eq!(rejected_date_reset("", june_30()), Some("2024-06-30".to_string()));
        assert_eq!(rejected_date_reset("2024-13-01", june_30()), Some("2024-06-30".to_string()));
    }

    #[test]
    fn test_valid_date_input_is_kept() {
        assert_eq!(rejected_date_reset("2024-06-01", june_30()), None);
    }
}
