use client::view::{BACKEND_DOCS_URL, ERROR_TITLE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Replaces the KPI grid when a dashboard batch fails.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="card bg-base-100 shadow mt-6">
            <div class="card-body gap-3">
                <h2 class="card-title text-error">{ERROR_TITLE}</h2>
                <div class="text-sm opacity-70">{&props.message}</div>
                <div class="text-sm opacity-70">
                    {"Make sure your API is running: "}
                    <span class="badge badge-outline">{"uvicorn main:app --reload"}</span>
                    {" and you can open "}
                    <span class="badge badge-outline">{BACKEND_DOCS_URL}</span>
                    {"."}
                </div>
                {if let Some(on_retry) = &props.on_retry {
                    let on_retry = on_retry.clone();
                    html! {
                        <div class="card-actions">
                            <button
                                class="btn btn-primary btn-sm"
                                onclick={Callback::from(move |_| {
                                    log::debug!("User clicked retry button");
                                    on_retry.emit(());
                                })}
                            >
                                {"Try Again"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
