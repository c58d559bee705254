mod app;
pub use app::App;

mod call_to_action;
pub use call_to_action::CallToAction;

mod comment_form;
pub use comment_form::CommentForm;

mod comment_item;
pub use comment_item::CommentItem;

mod comment_section;
pub use comment_section::CommentSection;

mod footer;
pub use footer::Footer;

mod lazy_image;
pub use lazy_image::LazyImage;

mod nav;
pub use nav::Nav;

mod reveal;
pub use reveal::Reveal;

mod seo;
pub use seo::Seo;
