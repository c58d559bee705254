use anyhow::Context;
use eraser_client::{
    api::{CommentId, ContentId, NewComment},
    CommentStore, MemoryStorage, Storage, StoreConfig, Thread,
};
use rand::{seq::SliceRandom, Rng};

const AUTHORS: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

#[derive(structopt::StructOpt)]
struct Opt {
    /// Content id the thread is attached to, eg. an article slug
    #[structopt(default_value = "nist-800-88-explained")]
    content: String,

    /// Number of top-level comments
    #[structopt(short, long, default_value = "5")]
    comments: usize,

    /// Number of replies, each attached to a random earlier comment
    #[structopt(short, long, default_value = "10")]
    replies: usize,

    /// Number of likes, each given to a random comment
    #[structopt(short, long, default_value = "20")]
    likes: usize,

    /// Storage key prefix, as configured on the site
    #[structopt(long)]
    key_prefix: Option<String>,
}

fn gen_comment(rng: &mut impl Rng) -> NewComment {
    let author = AUTHORS.choose(rng).copied().unwrap_or("Anonymous");
    let words = rng.gen_range(3..40);
    let new = NewComment::new(author, lipsum::lipsum_words(words));
    match rng.gen_bool(0.3) {
        true => new.with_email(format!("{}@example.com", author.to_lowercase())),
        false => new,
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    }
    let opt = <Opt as structopt::StructOpt>::from_args();
    let mut rng = rand::thread_rng();

    let content = ContentId::new(opt.content);
    let config = StoreConfig::with_prefix(opt.key_prefix.as_deref());
    let mut store = CommentStore::with_config(MemoryStorage::new(), config);
    let mut thread = Thread::new();
    let mut ids: Vec<CommentId> = Vec::new();

    for _ in 0..opt.comments {
        thread = store
            .add_top_level_comment(&content, &thread, gen_comment(&mut rng))
            .context("generating a top-level comment")?
            .thread;
        ids.push(thread.roots()[0].id);
    }
    for _ in 0..opt.replies {
        let parent = match ids.choose(&mut rng) {
            Some(p) => *p,
            None => break,
        };
        thread = store
            .add_reply(&content, &thread, &parent, gen_comment(&mut rng))
            .context("generating a reply")?
            .thread;
        let reply = thread
            .find(&parent)
            .and_then(|p| p.replies.last())
            .context("generated reply is missing from the thread")?;
        ids.push(reply.id);
    }
    for _ in 0..opt.likes {
        let id = match ids.choose(&mut rng) {
            Some(id) => *id,
            None => break,
        };
        thread = store.like(&content, &thread, &id).thread;
    }
    tracing::info!(total = thread.total(), "generated comment thread");

    let key = store.key_for(&content);
    let value = store
        .storage()
        .get(&key)
        .context("generated thread was not saved")?;
    println!("{key}");
    println!("{value}");
    Ok(())
}
