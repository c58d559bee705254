use yew::prelude::*;

use crate::{articles::ARTICLES, config::SITE_NAME};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer px-4 py-5">
            <div class="row">
                <div class="col-md-6">
                    <p class="fw-bold">{ SITE_NAME }</p>
                    <p class="text-muted">
                        { "Certified data erasure for drives, laptops, servers and mobile devices." }
                    </p>
                </div>
                <div class="col-md-6">
                    <p class="fw-bold">{ "Latest articles" }</p>
                    <ul class="list-unstyled">
                        { for ARTICLES.iter().map(|a| html! {
                            <li><a href={ a.path() }>{ a.title }</a></li>
                        }) }
                    </ul>
                </div>
            </div>
        </footer>
    }
}
