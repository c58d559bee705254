use yew::prelude::*;

use crate::ui;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <ui::Seo title="Page not found" description="This page does not exist." />
            <section class="not-found text-center py-5 px-4">
                <h1>{ "Page not found" }</h1>
                <p class="lead">{ "The page you are looking for has been moved, or erased." }</p>
                <a class="btn btn-primary" href="/">{ "Back to home" }</a>
            </section>
        </>
    }
}
