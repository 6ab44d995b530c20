use yew::prelude::*;

/// Props for the FailureBanner component.
#[derive(Properties, PartialEq)]
pub struct FailureBannerProps {
    pub message: AttrValue,
    pub on_dismiss: Callback<()>,
}

/// Banner for a join that still failed after a password was supplied.
#[function_component(FailureBanner)]
pub fn failure_banner(props: &FailureBannerProps) -> Html {
    let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class="error-overlay failure-banner">
            <p class="error-message">{ "Failed to join room" }</p>
            <p class="error-detail">{ props.message.clone() }</p>
            <button class="btn btn-secondary" onclick={on_dismiss}>{ "Dismiss" }</button>
        </div>
    }
}
