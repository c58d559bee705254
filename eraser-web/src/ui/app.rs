use yew::prelude::*;

use crate::{pages, route::Route, ui};

#[function_component(App)]
pub fn app() -> Html {
    let route = Route::current();
    tracing::debug!(?route, "rendering page");
    let page = match route {
        Route::Home => html! { <pages::Home /> },
        Route::Article(article) => html! { <pages::ArticlePage article={ article } /> },
        Route::NotFound => html! { <pages::NotFound /> },
    };
    html! {
        <>
            <ui::Nav />
            <main>{ page }</main>
            <ui::Footer />
        </>
    }
}
