mod article;
pub use article::ArticlePage;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;
