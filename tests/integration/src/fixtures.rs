//! Test fixtures and payload builders
//!
//! Builds the JSON shapes the backend actually ships, including the
//! quirks: a `total` pseudo-key inside `reaction_counts`, reaction rows
//! whose `user` is sometimes a bare id, and listings that arrive either
//! as a bare array or inside a paginated envelope.

use serde_json::{json, Map, Value};

/// An embedded author object
pub fn author(id: i64, username: &str) -> Value {
    json!({"id": id, "username": username, "role": "student", "avatar": null})
}

/// Builder for a post payload
pub struct PostFixture {
    id: i64,
    content: String,
    counts: Option<Vec<(String, i64)>>,
    reactions: Vec<Value>,
    my_reaction: Option<String>,
    me_id: Option<i64>,
}

impl PostFixture {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            content: "hello".to_string(),
            counts: None,
            reactions: Vec::new(),
            my_reaction: None,
            me_id: None,
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    /// Add an entry to `reaction_counts` (the field is present once any
    /// entry is added, even a lone `total`)
    pub fn count(mut self, code: &str, n: i64) -> Self {
        self.counts
            .get_or_insert_with(Vec::new)
            .push((code.to_string(), n));
        self
    }

    /// Include an empty `reaction_counts` map
    pub fn empty_counts(mut self) -> Self {
        self.counts.get_or_insert_with(Vec::new);
        self
    }

    /// Add a raw reaction row with `user` as a bare id
    pub fn reaction(mut self, user_id: i64, code: &str) -> Self {
        self.reactions.push(json!({"user": user_id, "type": code}));
        self
    }

    pub fn my_reaction(mut self, code: &str) -> Self {
        self.my_reaction = Some(code.to_string());
        self
    }

    pub fn me_id(mut self, id: i64) -> Self {
        self.me_id = Some(id);
        self
    }

    pub fn build(self) -> Value {
        let mut post = json!({
            "id": self.id,
            "author": author(100, "author"),
            "content": self.content,
            "created_at": "2025-03-01T12:00:00Z",
            "updated_at": "2025-03-01T12:00:00Z",
            "images": [],
            "reactions": self.reactions,
        });
        let obj = post.as_object_mut().unwrap();
        if let Some(counts) = self.counts {
            let map: Map<String, Value> = counts
                .into_iter()
                .map(|(code, n)| (code, Value::from(n)))
                .collect();
            obj.insert("reaction_counts".to_string(), Value::Object(map));
        }
        if let Some(code) = self.my_reaction {
            obj.insert("my_reaction".to_string(), Value::from(code));
        }
        if let Some(id) = self.me_id {
            obj.insert("me_id".to_string(), Value::from(id));
        }
        post
    }
}

/// A comment node with nested replies
pub fn comment_node(
    id: i64,
    post: i64,
    author_id: i64,
    parent: Option<i64>,
    content: &str,
    replies: Vec<Value>,
) -> Value {
    json!({
        "id": id,
        "post": post,
        "author": author(author_id, &format!("user{author_id}")),
        "parent": parent,
        "content": content,
        "created_at": "2025-03-01T12:00:00Z",
        "replies": replies,
    })
}

/// A bare-array listing
pub fn plain_list(items: Vec<Value>) -> Value {
    Value::Array(items)
}

/// A paginated listing envelope
pub fn paginated_list(items: Vec<Value>) -> Value {
    json!({"count": items.len(), "next": null, "previous": null, "results": items})
}
