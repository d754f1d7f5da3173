use std::rc::Rc;

use chrono::Local;
use client::{BatchRequest, Completion, DashboardState, load_dashboard};
use common::Frequency;
use yew::prelude::*;

use crate::api_client::dashboard_client;
use crate::settings;

/// Snapshot of the dashboard state plus the actions the controls can fire.
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: DashboardState,
    pub on_refresh: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_start: Callback<String>,
    pub on_end: Callback<String>,
    pub on_frequency: Callback<Frequency>,
}

/// Owns the dashboard load cycle: loads once on mount, then on Refresh/Reset.
///
/// The state lives in a `RefCell` so a batch finishing after newer clicks can
/// check its sequence number against the latest state, not a stale capture.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let state = use_mut_ref(|| {
        let today = Local::now().date_naive();
        DashboardState::with_rank_limit(today, settings::get_settings().rank_limit)
    });
    let update = use_force_update();

    let run_batch = {
        let state = state.clone();
        let update = update.clone();
        Rc::new(move |request: BatchRequest| {
            let state = state.clone();
            let update = update.clone();

            wasm_bindgen_futures::spawn_local(async move {
                log::debug!("Dashboard batch {} started", request.seq);
                let client = dashboard_client();
                let result = load_dashboard(&client, &request).await;

                let completion = state.borrow_mut().complete(request.seq, result, Local::now());
                match completion {
                    Completion::Applied => update.force_update(),
                    Completion::Superseded => {
                        log::debug!("Dashboard batch {} superseded, result dropped", request.seq)
                    }
                }
            });
        })
    };

    let on_refresh = {
        let state = state.clone();
        let update = update.clone();
        let run_batch = run_batch.clone();
        Callback::from(move |_: ()| {
            log::debug!("Dashboard refresh triggered");
            let request = state.borrow_mut().begin_load();
            update.force_update();
            run_batch(request);
        })
    };

    let on_reset = {
        let state = state.clone();
        let update = update.clone();
        let run_batch = run_batch.clone();
        Callback::from(move |_: ()| {
            log::debug!("Dashboard reset triggered");
            let request = state.borrow_mut().reset();
            update.force_update();
            run_batch(request);
        })
    };

    let on_start = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |value: String| {
            if state.borrow_mut().set_start_input(&value) {
                update.force_update();
            }
        })
    };

    let on_end = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |value: String| {
            if state.borrow_mut().set_end_input(&value) {
                update.force_update();
            }
        })
    };

    let on_frequency = {
        let state = state.clone();
        let update = update.clone();
        Callback::from(move |frequency: Frequency| {
            state.borrow_mut().set_frequency(frequency);
            update.force_update();
        })
    };

    // Load on mount
    {
        let on_refresh = on_refresh.clone();
        use_effect_with((), move |_| {
            on_refresh.emit(());
            || ()
        });
    }

    let snapshot = state.borrow().clone();
    DashboardHandle {
        state: snapshot,
        on_refresh,
        on_reset,
        on_start,
        on_end,
        on_frequency,
    }
}
