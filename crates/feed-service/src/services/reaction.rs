//! Reaction toggle controller
//!
//! Decides whether activating a category means *set* or *remove*, picks
//! the backend code to submit, and recomputes the post's reaction state
//! from the confirmed server response. There is no optimistic update: a
//! failed mutation leaves the previous state untouched.

use serde_json::json;
use tracing::{debug, info, instrument};

use feed_core::{
    EntityId, Post, ReactionKind, ReactionState, ReactionVocabulary,
};

use crate::dto::requests::ReactRequest;
use crate::dto::responses::PostPayload;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// What the toggle decided to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleAction {
    /// Submitted (or replaced with) a reaction using this backend code
    Set { code: String },
    /// Removed the viewer's existing reaction
    Removed,
}

/// Result of a completed toggle: the refreshed post and its new state
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub action: ToggleAction,
    pub post: Post,
    pub state: ReactionState,
}

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Normalized reaction state of a post under the standard vocabulary
    pub fn state(&self, post: &Post) -> ReactionState {
        ReactionState::of_post(ReactionVocabulary::standard(), post)
    }

    /// Pick the backend code to submit for a category
    ///
    /// Prefers the category's default code when this post has shown it,
    /// then the first alias the post has shown, then the default code
    /// unconditionally (the server may accept a code never observed on
    /// this post, e.g. when it has no reactions yet). The returned code
    /// is always inside the category's alias set.
    pub fn choose_code(&self, kind: ReactionKind, state: &ReactionState) -> &'static str {
        let vocab = ReactionVocabulary::standard();
        let default = vocab.default_code(kind);
        if state.supports(default) {
            return default;
        }
        for alias in vocab.aliases(kind) {
            if state.supports(alias) {
                return alias;
            }
        }
        default
    }

    /// Toggle the viewer's reaction on a post
    ///
    /// Activating the category the viewer already holds removes it;
    /// anything else sets (or replaces) it — the server keeps at most one
    /// reaction per viewer per post. While a toggle for this post is in
    /// flight, further toggles on it fail fast with
    /// [`ServiceError::RequestInFlight`].
    #[instrument(skip(self, post), fields(post_id = %post.id))]
    pub async fn toggle(&self, post: &Post, kind: ReactionKind) -> ServiceResult<ToggleOutcome> {
        let state = self.state(post);
        let _guard = self
            .ctx
            .begin_toggle(post.id)
            .ok_or(ServiceError::RequestInFlight { post: post.id })?;

        let (action, response) = if state.viewer_holds(kind) {
            let response = self
                .ctx
                .gateway()
                .post(&format!("posts/{}/unreact/", post.id), &json!({}))
                .await;
            (ToggleAction::Removed, response)
        } else {
            let code = self.choose_code(kind, &state);
            let body = serde_json::to_value(ReactRequest {
                code: code.to_string(),
            })?;
            let response = self
                .ctx
                .gateway()
                .post(&format!("posts/{}/react/", post.id), &body)
                .await;
            (
                ToggleAction::Set {
                    code: code.to_string(),
                },
                response,
            )
        };

        // A decode failure here still means the mutation got a 2xx; older
        // backends answer with a bare reaction row or no body at all
        // instead of the updated post. Anything else is a real failure
        // and the previous state stands.
        let refreshed = match response {
            Ok(value) => serde_json::from_value::<PostPayload>(value).ok().map(Post::from),
            Err(feed_core::FetchError::Decode(reason)) => {
                debug!(%reason, "mutation response was not a post payload");
                None
            }
            Err(err) => return Err(err.into()),
        };

        let refreshed = match refreshed {
            Some(post) => post,
            None => self.fetch(post.id).await?,
        };
        let new_state = self.state(&refreshed);

        info!(
            post_id = %refreshed.id,
            action = ?action,
            viewer = ?new_state.viewer_kind(),
            "reaction toggled"
        );

        Ok(ToggleOutcome {
            action,
            post: refreshed,
            state: new_state,
        })
    }

    /// Fetch a single post and its reaction data
    #[instrument(skip(self))]
    pub async fn fetch(&self, id: EntityId) -> ServiceResult<Post> {
        let value = self.ctx.gateway().get(&format!("posts/{id}/")).await?;
        let payload: PostPayload = serde_json::from_value(value)?;
        Ok(Post::from(payload))
    }
}
