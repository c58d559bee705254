use wasm_bindgen::JsValue;
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct SeoProps {
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub keywords: Vec<&'static str>,
    /// Absolute url of the page, used for the canonical link and og:url
    #[prop_or_default]
    pub canonical: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
}

/// Writes the page's title and search-engine metadata into `<head>`, renders nothing
#[function_component(Seo)]
pub fn seo(p: &SeoProps) -> Html {
    use_effect_with_deps(
        |p| {
            if let Err(err) = apply(p) {
                tracing::warn!(?err, "failed updating head metadata");
            }
            || ()
        },
        p.clone(),
    );
    Html::default()
}

fn apply(p: &SeoProps) -> Result<(), JsValue> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return Ok(()),
    };
    let title = util::page_title(&p.title);
    document.set_title(&title);
    upsert_meta(&document, "name", "description", &p.description)?;
    upsert_meta(&document, "property", "og:title", &title)?;
    upsert_meta(&document, "property", "og:description", &p.description)?;
    upsert_meta(&document, "property", "og:type", "article")?;
    if !p.keywords.is_empty() {
        upsert_meta(&document, "name", "keywords", &p.keywords.join(", "))?;
    }
    if let Some(url) = &p.canonical {
        upsert_meta(&document, "property", "og:url", url)?;
        let link = upsert_head_element(&document, "link", "rel", "canonical")?;
        link.set_attribute("href", url)?;
    }
    if let Some(image) = &p.image {
        upsert_meta(&document, "property", "og:image", image)?;
    }
    Ok(())
}

fn upsert_meta(
    document: &web_sys::Document,
    attr: &str,
    key: &str,
    content: &str,
) -> Result<(), JsValue> {
    upsert_head_element(document, "meta", attr, key)?.set_attribute("content", content)
}

/// Returns the `<tag attr="key">` element of `<head>`, creating it if needed
fn upsert_head_element(
    document: &web_sys::Document,
    tag: &str,
    attr: &str,
    key: &str,
) -> Result<web_sys::Element, JsValue> {
    let selector = format!("{tag}[{attr}=\"{key}\"]");
    if let Some(elt) = document.query_selector(&selector)? {
        return Ok(elt);
    }
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let elt = document.create_element(tag)?;
    elt.set_attribute(attr, key)?;
    head.append_child(&elt)?;
    Ok(elt)
}
