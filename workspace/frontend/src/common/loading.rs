use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// CSS width of the placeholder bar
    #[prop_or(AttrValue::Static("72%"))]
    pub width: AttrValue,
}

/// Grey placeholder bar shown in place of a value while it loads.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    html! {
        <div class="skeleton h-8" style={format!("width: {};", props.width)}></div>
    }
}
