//! The demonstration query: does a user's post mention a tag?

use movelog_core::store::MovelogStore;

use crate::{Error, Result};

pub const DEFAULT_USERNAME: &str = "Chipollino";
pub const DEFAULT_TAG: &str = "переезд";

/// Look up `username`'s first post and, if its text contains `tag` verbatim,
/// return the line to print.
///
/// A missing user, a user without posts and a post without text all yield
/// `Ok(None)`.
pub async fn select_user_posts<S: MovelogStore>(
  store: &S,
  username: &str,
  tag: &str,
) -> Result<Option<String>> {
  let users = store.fetch_all_users().await.map_err(Error::store)?;
  tracing::debug!(count = users.len(), "fetched users");

  let Some(user) = store
    .find_user_by_username(username)
    .await
    .map_err(Error::store)?
  else {
    tracing::warn!(username, "no such user");
    return Ok(None);
  };

  let Some(post) = store
    .find_post_by_user_id(user.id)
    .await
    .map_err(Error::store)?
  else {
    tracing::info!(%user, "user has no posts");
    return Ok(None);
  };

  if !post.mentions(tag) {
    tracing::debug!(%post, tag, "tag not mentioned");
    return Ok(None);
  }

  let text = post.description.as_deref().unwrap_or_default();
  Ok(Some(format!("Пост от {username} с тегом '{tag}': {text}")))
}
