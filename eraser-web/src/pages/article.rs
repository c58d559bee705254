use yew::prelude::*;

use crate::{
    articles::{Article, Section},
    config, ui,
};

#[derive(Clone, PartialEq, Properties)]
pub struct ArticlePageProps {
    pub article: &'static Article,
}

#[function_component(ArticlePage)]
pub fn article_page(p: &ArticlePageProps) -> Html {
    let a = p.article;
    let site = config::site();
    html! {
        <>
            <ui::Seo
                title={ a.title }
                description={ a.description }
                keywords={ a.keywords.to_vec() }
                canonical={ site.canonical(&a.path()) }
                image={ site.canonical(a.hero_image) }
            />
            <article class="article container py-5">
                <header class="article-hero mb-5">
                    <h1>{ a.title }</h1>
                    <p class="text-muted">
                        { format!("Published {} · {} min read", a.published, a.read_minutes) }
                    </p>
                    <ui::LazyImage src={ a.hero_image } alt={ a.hero_alt } class={ classes!("article-hero-image") } />
                </header>
                { for a.sections.iter().map(section) }
            </article>
            <ui::CallToAction />
            <div class="container">
                <ui::CommentSection content_id={ a.content_id() } />
            </div>
        </>
    }
}

fn section(s: &Section) -> Html {
    let table = s.table.as_ref().map(|t| {
        html! {
            <div class="table-responsive">
                <table class="table">
                    <thead>
                        <tr>{ for t.headers.iter().map(|h| html! { <th scope="col">{ *h }</th> }) }</tr>
                    </thead>
                    <tbody>
                        { for t.rows.iter().map(|r| html! {
                            <tr>{ for r.iter().map(|c| html! { <td>{ *c }</td> }) }</tr>
                        }) }
                    </tbody>
                </table>
            </div>
        }
    });
    html! {
        <ui::Reveal class={ classes!("article-section", "mb-4") }>
            <h2>{ s.heading }</h2>
            { for s.paragraphs.iter().map(|par| html! { <p>{ *par }</p> }) }
            { for table }
        </ui::Reveal>
    }
}
