//! Common modal component.

use yew::prelude::*;

/// Props for the Modal component.
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    /// Modal content.
    pub children: Children,
    /// Optional modal title (displayed in header).
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Fired on overlay click.
    pub onclose: Callback<()>,
    /// Additional CSS classes for the modal container.
    #[prop_or_default]
    pub class: Classes,
}

/// Modal dialog. Clicking the overlay closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let on_overlay_click = props.onclose.reform(|_: MouseEvent| ());

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let modal_classes = classes!("modal", props.class.clone());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class={modal_classes} onclick={on_modal_click}>
                if let Some(title) = &props.title {
                    <div class="modal-header modal-header-no-close">
                        <h2>{ title.clone() }</h2>
                    </div>
                }
                <div class="modal-content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
