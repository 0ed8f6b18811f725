use yew::prelude::*;

use crate::reveal::context::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Stagger for siblings that latch in the same batch.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// A block that fades up the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(props.id.clone(), node.clone());

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then_some("revealed"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrackedSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A top-level page section. Gets the `visited` class once it has been on
/// screen; descendants with `.fade-up` animate off that class.
#[function_component(TrackedSection)]
pub fn tracked_section(props: &TrackedSectionProps) -> Html {
    let node = use_node_ref();
    let visited = use_reveal(props.id.clone(), node.clone());

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("tracked-section", props.class.clone(), visited.then_some("visited"))}
        >
            { for props.children.iter() }
        </section>
    }
}
