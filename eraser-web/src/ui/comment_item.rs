use chrono::Local;
use eraser_client::{
    api::{Comment, CommentId, NewComment},
    ReplyBox,
};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct CommentItemProps {
    pub comment: Comment,
    /// 0 for root comments
    pub depth: usize,
    pub reply_box: ReplyBox,
    pub on_like: Callback<CommentId>,
    pub on_toggle_reply: Callback<CommentId>,
    pub on_reply: Callback<(CommentId, NewComment)>,
}

// Never renders the email
#[function_component(CommentItem)]
pub fn comment_item(p: &CommentItemProps) -> Html {
    let c = &p.comment;
    let id = c.id;
    let reply_open = p.reply_box.is_open_for(&id);
    let toggle_label = if reply_open { "Cancel" } else { "Reply" };

    let reply_form = reply_open.then(|| {
        html! {
            <div class="comment-reply-form mt-2">
                <ui::CommentForm
                    submit_label="Post Reply"
                    compact=true
                    on_submit={ p.on_reply.reform(move |new: NewComment| (id, new)) }
                />
            </div>
        }
    });

    // Only the first level of replies is visually indented
    let replies = (!c.replies.is_empty()).then(|| {
        html! {
            <ul class={ classes!("comment-replies", "list-unstyled", (p.depth == 0).then(|| "ms-5")) }>
                { for c.replies.iter().map(|r| html! {
                    <CommentItem
                        key={ r.id.to_string() }
                        comment={ r.clone() }
                        depth={ p.depth + 1 }
                        reply_box={ p.reply_box }
                        on_like={ p.on_like.clone() }
                        on_toggle_reply={ p.on_toggle_reply.clone() }
                        on_reply={ p.on_reply.clone() }
                    />
                }) }
            </ul>
        }
    });

    html! {
        <li class="comment py-3">
            <div class="comment-header d-flex align-items-baseline">
                <span class="comment-author fw-bold me-3">{ c.author.clone() }</span>
                <time class="comment-date text-muted small" datetime={ c.date.to_rfc3339() }>
                    { util::format_date(&c.date, &Local) }
                </time>
            </div>
            <p class="comment-content my-2">{ c.content.clone() }</p>
            <div class="comment-actions d-flex">
                <button
                    type="button"
                    class="btn btn-sm btn-link comment-like"
                    aria-label="Like this comment"
                    onclick={ p.on_like.reform(move |_: MouseEvent| id) }
                >
                    <span class="bi-heart me-1" aria-hidden="true"></span>
                    { c.likes.to_string() }
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-link comment-reply-toggle"
                    onclick={ p.on_toggle_reply.reform(move |_: MouseEvent| id) }
                >
                    { toggle_label }
                </button>
            </div>
            { for reply_form }
            { for replies }
        </li>
    }
}
