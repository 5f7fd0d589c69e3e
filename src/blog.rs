//! Blog Rules
//!
//! Form validation and who may edit or delete what.

use crate::error::FormError;
use crate::models::{Blog, Comment, CurrentUser};

/// Validated post form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub is_private: bool,
}

impl PostDraft {
    pub fn validate(title: &str, content: &str, is_private: bool) -> Result<Self, FormError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(FormError::MissingPostFields);
        }
        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
            is_private,
        })
    }
}

/// Only the author edits or deletes a post
pub fn can_manage_post(viewer: &CurrentUser, blog: &Blog) -> bool {
    viewer.id == blog.user_id
}

/// Comment author or post author may delete a comment
pub fn can_delete_comment(viewer: &CurrentUser, blog: &Blog, comment: &Comment) -> bool {
    comment.user_id == viewer.id || blog.user_id == viewer.id
}

/// Trimmed comment text, `None` when blank
pub fn prepare_comment(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}

pub const PREVIEW_CHARS: usize = 200;

/// First `PREVIEW_CHARS` characters of a post body, ellipsized when cut
pub fn preview(content: &str) -> String {
    let content = content.trim();
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", content[..cut].trim_end()),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32) -> CurrentUser {
        CurrentUser { id, username: format!("u{}", id), is_admin: false }
    }

    fn blog(author: u32) -> Blog {
        Blog {
            id: 1,
            user_id: author,
            username: String::new(),
            title: "t".to_string(),
            content: "c".to_string(),
            is_private: false,
            created_at: String::new(),
            updated_at: String::new(),
            comments: Vec::new(),
        }
    }

    fn comment(author: u32) -> Comment {
        Comment {
            id: 10,
            blog_id: 1,
            user_id: author,
            username: String::new(),
            content: "nice".to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_post_requires_title_and_content() {
        assert_eq!(PostDraft::validate(" ", "body", false), Err(FormError::MissingPostFields));
        assert_eq!(PostDraft::validate("title", "\n", true), Err(FormError::MissingPostFields));
        let draft = PostDraft::validate(" Hello ", " World ", true).unwrap();
        assert_eq!(draft.title, "Hello");
        assert_eq!(draft.content, "World");
        assert!(draft.is_private);
    }

    #[test]
    fn test_only_author_manages_post() {
        assert!(can_manage_post(&user(2), &blog(2)));
        assert!(!can_manage_post(&user(3), &blog(2)));
    }

    #[test]
    fn test_comment_delete_permission() {
        // comment author
        assert!(can_delete_comment(&user(5), &blog(2), &comment(5)));
        // post author
        assert!(can_delete_comment(&user(2), &blog(2), &comment(5)));
        // bystander
        assert!(!can_delete_comment(&user(7), &blog(2), &comment(5)));
    }

    #[test]
    fn test_preview_cuts_on_char_boundary() {
        assert_eq!(preview("  short "), "short");
        let long = "é".repeat(PREVIEW_CHARS + 5);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), PREVIEW_CHARS + 1);
        assert!(cut.ends_with('…'));
        assert_eq!(preview(&"a".repeat(PREVIEW_CHARS)), "a".repeat(PREVIEW_CHARS));
    }

    #[test]
    fn test_prepare_comment() {
        assert_eq!(prepare_comment("  hi "), Some("hi"));
        assert_eq!(prepare_comment(" \t "), None);
    }
}
