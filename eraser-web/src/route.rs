use crate::articles::{self, Article};

#[derive(Debug, Eq, PartialEq)]
pub enum Route {
    Home,
    Article(&'static Article),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.trim_end_matches('/');
        if path.is_empty() || path == "/index.html" {
            return Route::Home;
        }
        match path.strip_prefix("/blog/") {
            Some(slug) if !slug.contains('/') => match articles::find(slug) {
                Some(a) => Route::Article(a),
                None => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// Route of the page the browser is currently showing
    pub fn current() -> Route {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Route::parse(&path)
    }
}
