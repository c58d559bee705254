use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Added as a css transition delay, to stagger sibling reveals
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(Reveal)]
pub fn reveal(p: &RevealProps) -> Html {
    let revealed = use_state(|| false);
    let node = use_node_ref();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watch = None;
                if !*revealed {
                    if let Some(elt) = node.cast::<web_sys::Element>() {
                        let reveal = revealed.clone();
                        match util::on_first_intersection(&elt, 0.1, "0px", move || reveal.set(true)) {
                            Ok(w) => watch = Some(w),
                            Err(_) => revealed.set(true),
                        }
                    }
                }
                move || std::mem::drop(watch)
            },
            node.clone(),
        );
    }

    let style = (p.delay_ms > 0).then(|| format!("transition-delay: {}ms;", p.delay_ms));
    html! {
        <div
            ref={ node }
            class={ classes!("reveal", revealed.then(|| "revealed"), p.class.clone()) }
            style={ style }
        >
            { for p.children.iter() }
        </div>
    }
}
