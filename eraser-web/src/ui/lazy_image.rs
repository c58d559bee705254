use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that only starts downloading once it gets close to the viewport
#[function_component(LazyImage)]
pub fn lazy_image(p: &LazyImageProps) -> Html {
    let in_view = use_state(|| false);
    let loaded = use_state(|| false);
    let container = use_node_ref();

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let mut watch = None;
                if !*in_view {
                    if let Some(elt) = container.cast::<web_sys::Element>() {
                        let show = in_view.clone();
                        match util::on_first_intersection(&elt, 0.0, "200px", move || show.set(true)) {
                            Ok(w) => watch = Some(w),
                            Err(err) => {
                                tracing::debug!(?err, "no IntersectionObserver, loading image now");
                                in_view.set(true);
                            }
                        }
                    }
                }
                move || std::mem::drop(watch)
            },
            container.clone(),
        );
    }

    let image = in_view.then(|| {
        let class = classes!("lazy-image", loaded.then(|| "loaded"));
        let loaded = loaded.clone();
        html! {
            <img
                src={ p.src.clone() }
                alt={ p.alt.clone() }
                class={ class }
                onload={ Callback::from(move |_| loaded.set(true)) }
            />
        }
    });
    html! {
        <div
            ref={ container }
            class={ classes!("lazy-image-container", p.class.clone()) }
            role={ (!*in_view).then(|| "img") }
            aria-label={ (!*in_view).then(|| p.alt.clone()) }
        >
            { for image }
        </div>
    }
}
