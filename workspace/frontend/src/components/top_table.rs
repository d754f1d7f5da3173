use common::{TableColumn, TableRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TopTableProps<R: TableRow + Clone + PartialEq + 'static> {
    pub title: String,
    pub rows: Vec<R>,
    pub columns: Vec<TableColumn>,
    #[prop_or_default]
    pub empty_text: Option<String>,
}

/// Ranked list rendered through the given columns.
#[function_component(TopTable)]
pub fn top_table<R>(props: &TopTableProps<R>) -> Html
where
    R: TableRow + Clone + PartialEq + 'static,
{
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{&props.title}</h2>
                if props.rows.is_empty() {
                    <div class="text-sm opacity-70">
                        {props.empty_text.clone().unwrap_or_else(|| "No data".to_string())}
                    </div>
                } else {
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                { for props.columns.iter().map(|c| html! { <th key={c.key.clone()}>{&c.label}</th> }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for props.rows.iter().enumerate().map(|(idx, row)| html! {
                                <tr key={idx.to_string()}>
                                    { for props.columns.iter().map(|c| html! {
                                        <td key={c.key.clone()}>{c.render_cell(row)}</td>
                                    }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
