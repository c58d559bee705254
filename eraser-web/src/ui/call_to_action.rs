use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CallToActionProps {
    #[prop_or(AttrValue::from("Erase with proof, not hope"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("Start a free trial and get a verified erasure certificate for every drive."))]
    pub text: AttrValue,
}

#[function_component(CallToAction)]
pub fn call_to_action(p: &CallToActionProps) -> Html {
    html! {
        <section id="get-started" class="call-to-action text-center py-5 px-4">
            <h2>{ p.title.clone() }</h2>
            <p class="lead">{ p.text.clone() }</p>
            <a class="btn btn-primary btn-lg mx-2" href="/#get-started">{ "Start Free Trial" }</a>
            <a class="btn btn-outline-primary btn-lg mx-2" href="mailto:sales@eraser.example.com">
                { "Talk to Sales" }
            </a>
        </section>
    }
}
