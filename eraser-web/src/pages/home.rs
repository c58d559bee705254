use yew::prelude::*;

use crate::{articles::ARTICLES, config, ui};

const FEATURES: &[(&str, &str)] = &[
    (
        "Certified erasure",
        "Every wipe follows NIST 800-88 and produces a tamper-evident certificate.",
    ),
    (
        "Every kind of media",
        "Hard drives, SSDs, NVMe, laptops, servers and mobile devices from one console.",
    ),
    (
        "Reuse, don't shred",
        "Sanitized devices keep their resale value and stay out of landfills.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <ui::Seo
                title=""
                description="Certified, auditable data erasure for every drive and device you retire."
                keywords={ vec!["data erasure", "disk wiping", "NIST 800-88", "GDPR"] }
                canonical={ config::site().canonical("/") }
            />
            <section class="hero text-center py-5 px-4">
                <h1 class="display-4">{ "Erase data. Keep the proof." }</h1>
                <p class="lead">
                    { "Wipe drives to recognized standards and hand auditors a certificate for each one." }
                </p>
                <a class="btn btn-primary btn-lg" href="#get-started">{ "Start Free Trial" }</a>
            </section>
            <section id="features" class="features container py-5">
                <div class="row">
                    { for FEATURES.iter().enumerate().map(|(i, (title, text))| html! {
                        <ui::Reveal class={ classes!("col-md-4") } delay_ms={ 100 * i as u32 }>
                            <h3>{ *title }</h3>
                            <p>{ *text }</p>
                        </ui::Reveal>
                    }) }
                </div>
            </section>
            <section id="blog" class="blog-list container py-5">
                <h2 class="mb-4">{ "From the blog" }</h2>
                <div class="row">
                    { for ARTICLES.iter().map(|a| html! {
                        <ui::Reveal class={ classes!("col-md-6", "mb-4") }>
                            <a class="article-card d-block" href={ a.path() }>
                                <ui::LazyImage src={ a.hero_image } alt={ a.hero_alt } class={ classes!("card-img-top") } />
                                <h3 class="mt-3">{ a.title }</h3>
                                <p class="text-muted">{ a.description }</p>
                                <small>{ format!("{} · {} min read", a.published, a.read_minutes) }</small>
                            </a>
                        </ui::Reveal>
                    }) }
                </div>
            </section>
            <ui::CallToAction />
        </>
    }
}
