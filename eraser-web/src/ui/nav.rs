use yew::prelude::*;

use crate::config::SITE_NAME;

#[function_component(Nav)]
pub fn nav() -> Html {
    html! {
        <nav class="site-nav d-flex align-items-center px-4 py-3">
            <a class="site-logo fw-bold fs-4 me-auto" href="/">{ SITE_NAME }</a>
            <a class="nav-link mx-3" href="/#features">{ "Features" }</a>
            <a class="nav-link mx-3" href="/#blog">{ "Blog" }</a>
            <a class="btn btn-primary ms-3" href="/#get-started">{ "Free Trial" }</a>
        </nav>
    }
}
