use eraser_client::api::NewComment;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentFormProps {
    pub on_submit: Callback<NewComment>,
    #[prop_or(AttrValue::from("Post Comment"))]
    pub submit_label: AttrValue,
    /// Smaller layout, used for the reply form under a comment
    #[prop_or(false)]
    pub compact: bool,
}

pub struct CommentForm {
    author: String,
    email: String,
    content: String,
    error: Option<&'static str>,
}

pub enum CommentFormMsg {
    AuthorChanged(String),
    EmailChanged(String),
    ContentChanged(String),
    SubmitClicked,
}

impl CommentForm {
    fn new_comment(&self) -> NewComment {
        NewComment {
            author: self.author.clone(),
            content: self.content.clone(),
            email: Some(self.email.clone()).filter(|e| !e.trim().is_empty()),
        }
    }
}

impl Component for CommentForm {
    type Message = CommentFormMsg;
    type Properties = CommentFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            author: String::new(),
            email: String::new(),
            content: String::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CommentFormMsg::AuthorChanged(a) => self.author = a,
            CommentFormMsg::EmailChanged(e) => self.email = e,
            CommentFormMsg::ContentChanged(c) => self.content = c,
            CommentFormMsg::SubmitClicked => {
                let new = self.new_comment();
                match new.validate() {
                    Err(err) => self.error = Some(err.user_message()),
                    Ok(()) => {
                        self.error = None;
                        // keep name and email around for the next comment
                        self.content.clear();
                        ctx.props().on_submit.emit(new);
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        macro_rules! input_callback {
            ($msg:ident, $elt:ty) => {
                ctx.link().callback(|e: InputEvent| {
                    let input: $elt = e.target_unchecked_into();
                    CommentFormMsg::$msg(input.value())
                })
            };
        }
        let compact = ctx.props().compact;
        let rows = if compact { "3" } else { "5" };
        html! {
            <form
                class={ classes!("comment-form", compact.then(|| "comment-form-compact")) }
                onsubmit={ ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    CommentFormMsg::SubmitClicked
                }) }
            >
                <div class="row g-2 mb-2">
                    <div class="col-md-6">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Name"
                            aria-label="Name"
                            value={ self.author.clone() }
                            oninput={ input_callback!(AuthorChanged, web_sys::HtmlInputElement) }
                        />
                    </div>
                    <div class="col-md-6">
                        <input
                            type="email"
                            class="form-control"
                            placeholder="Email (optional, never shown)"
                            aria-label="Email"
                            value={ self.email.clone() }
                            oninput={ input_callback!(EmailChanged, web_sys::HtmlInputElement) }
                        />
                    </div>
                </div>
                <textarea
                    class="form-control mb-2"
                    placeholder="Share your thoughts"
                    aria-label="Comment"
                    rows={ rows }
                    value={ self.content.clone() }
                    oninput={ input_callback!(ContentChanged, web_sys::HtmlTextAreaElement) }
                />
                { for self.error.map(|err| html! {
                    <div class="comment-form-error text-danger mb-2" role="alert">{ err }</div>
                }) }
                <button type="submit" class="btn btn-primary">
                    { ctx.props().submit_label.clone() }
                </button>
            </form>
        }
    }
}
