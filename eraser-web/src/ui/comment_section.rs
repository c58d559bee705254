use eraser_client::{
    api::{CommentId, ContentId, NewComment},
    CommentStore, Mutation, ReplyBox, Storage, Thread,
};
use yew::prelude::*;

use crate::{config, storage::BrowserStorage, ui, util};

const NOT_SAVED: &str =
    "Your comment is shown below but could not be saved in this browser, it will be gone after a reload.";

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
    pub content_id: ContentId,
}

pub enum CommentSectionMsg {
    Post(NewComment),
    Reply(CommentId, NewComment),
    Like(CommentId),
    ToggleReply(CommentId),
}

/// What the comment section displays for one content id
pub struct SectionState<S> {
    store: CommentStore<S>,
    content_id: ContentId,
    thread: Thread,
    reply_box: ReplyBox,
    notice: Option<&'static str>,
}

impl<S: Storage> SectionState<S> {
    pub fn new(store: CommentStore<S>, content_id: ContentId) -> SectionState<S> {
        let thread = store.load(&content_id);
        SectionState {
            store,
            content_id,
            thread,
            reply_box: ReplyBox::closed(),
            notice: None,
        }
    }

    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    pub fn reply_box(&self) -> ReplyBox {
        self.reply_box
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Reloads everything if `content_id` differs from the current one
    pub fn set_content(&mut self, content_id: ContentId) -> bool {
        if content_id == self.content_id {
            return false;
        }
        self.thread = self.store.load(&content_id);
        self.content_id = content_id;
        self.reply_box.close();
        self.notice = None;
        true
    }

    pub fn handle(&mut self, msg: CommentSectionMsg) {
        match msg {
            CommentSectionMsg::Post(new) => {
                match self
                    .store
                    .add_top_level_comment(&self.content_id, &self.thread, new)
                {
                    Ok(m) => self.apply(m),
                    Err(err) => self.notice = Some(err.user_message()),
                }
            }
            CommentSectionMsg::Reply(parent, new) => {
                match self
                    .store
                    .add_reply(&self.content_id, &self.thread, &parent, new)
                {
                    Ok(m) => {
                        if m.changed {
                            self.reply_box.close();
                        }
                        self.apply(m);
                    }
                    Err(err) => self.notice = Some(err.user_message()),
                }
            }
            CommentSectionMsg::Like(id) => {
                let m = self.store.like(&self.content_id, &self.thread, &id);
                self.apply(m);
            }
            CommentSectionMsg::ToggleReply(id) => self.reply_box.toggle(id),
        }
    }

    fn apply(&mut self, m: Mutation) {
        self.notice = m.persist_error.as_ref().map(|_| NOT_SAVED);
        self.thread = m.thread;
    }
}

pub struct CommentSection {
    state: SectionState<BrowserStorage>,
}

impl Component for CommentSection {
    type Message = CommentSectionMsg;
    type Properties = CommentSectionProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = CommentStore::with_config(BrowserStorage, config::site().comments.clone());
        Self {
            state: SectionState::new(store, ctx.props().content_id.clone()),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state.set_content(ctx.props().content_id.clone())
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.state.handle(msg);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let thread = self.state.thread();
        let reply_box = self.state.reply_box();
        let on_like = ctx.link().callback(CommentSectionMsg::Like);
        let on_toggle_reply = ctx.link().callback(CommentSectionMsg::ToggleReply);
        let on_reply = ctx
            .link()
            .callback(|(parent, new): (CommentId, NewComment)| {
                CommentSectionMsg::Reply(parent, new)
            });
        let notice = self.state.notice().map(|n| {
            html! {
                <div class="alert alert-warning" role="alert">{ n }</div>
            }
        });
        let empty = thread.is_empty().then(|| {
            html! {
                <p class="text-muted">{ "No comments yet. Be the first to share your thoughts." }</p>
            }
        });
        html! {
            <section id="comments" class="comment-section py-5">
                <h2 class="mb-4">{ util::comment_count_label(thread.total()) }</h2>
                { for notice }
                <ui::CommentForm on_submit={ ctx.link().callback(CommentSectionMsg::Post) } />
                { for empty }
                <ul class="comment-list list-unstyled mt-4">
                    { for thread.iter().map(|c| html! {
                        <ui::CommentItem
                            key={ c.id.to_string() }
                            comment={ c.clone() }
                            depth=0
                            reply_box={ reply_box }
                            on_like={ on_like.clone() }
                            on_toggle_reply={ on_toggle_reply.clone() }
                            on_reply={ on_reply.clone() }
                        />
                    }) }
                </ul>
            </section>
        }
    }
}
