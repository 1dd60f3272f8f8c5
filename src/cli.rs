//! Command-line interface.
//!
//! Without a subcommand the terminal view runs. Subcommands perform a single
//! store operation and print the resulting collection.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::api::PostApi;
use crate::config::{Config, ConfigError};
use crate::post::{Draft, Post, PostId};
use crate::store::{PostStore, PostsSnapshot, RequestState};

#[derive(Debug, Parser)]
#[command(name = "post-manager", version, about = "Create, edit and delete posts on a REST API")]
pub struct Cli {
    /// Config file (default: ~/.config/post-manager/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override api.base_url from the config file
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List all posts
    List,
    /// Create a post
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace the title and description of a post
    Update {
        id: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a post
    Delete { id: String },
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

/// Run a one-shot command and print the outcome to `out`.
///
/// The collection is fetched first so output shows the full list and
/// update/delete can check that the id exists.
pub async fn run_command<A: PostApi, W: Write>(
    store: &PostStore<A>,
    command: Command,
    out: &mut W,
) -> io::Result<RequestState> {
    let fetched = store.fetch_all().await;
    let outcome = if fetched.error().is_some() {
        fetched
    } else {
        match command {
            Command::List => fetched,
            Command::Create { title, description } => {
                store.create(Draft { title, description }).await
            }
            Command::Update {
                id,
                title,
                description,
            } => {
                let id = resolve_id(&store.snapshot(), &id);
                let draft = Draft { title, description };
                store.update(Post::from_draft(id, draft)).await
            }
            Command::Delete { id } => store.delete(resolve_id(&store.snapshot(), &id)).await,
        }
    };

    match &outcome {
        RequestState::Failed(message) => writeln!(out, "error: {}", message)?,
        _ => print_posts(out, &store.snapshot())?,
    }
    Ok(outcome)
}

/// Find the fetched post whose id prints as `raw`, keeping the server's id
/// form. `"1"` matches both the number 1 and the string "1".
fn resolve_id(snapshot: &PostsSnapshot, raw: &str) -> PostId {
    snapshot
        .posts
        .iter()
        .find(|post| post.id.to_string() == raw)
        .map(|post| post.id.clone())
        .unwrap_or_else(|| PostId::parse(raw))
}

/// Tab-separated `id title description` rows.
pub fn print_posts<W: Write>(out: &mut W, snapshot: &PostsSnapshot) -> io::Result<()> {
    if snapshot.posts.is_empty() {
        writeln!(out, "(no posts)")?;
        return Ok(());
    }
    for post in &snapshot.posts {
        writeln!(
            out,
            "{}\t{}\t{}",
            post.id,
            post.title,
            post.description.replace('\n', " ")
        )?;
    }
    Ok(())
}
