//! State for the post form.

use crate::mvi::State;
use crate::post::{Draft, Post, PostId};
use crate::store::StoreCommand;

/// Form input that receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Title,
    Description,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Title => Field::Description,
            Field::Description => Field::Title,
        }
    }
}

/// What the form is doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Composing a new post.
    Creating { draft: Draft, field: Field },

    /// Changing the post with the given id.
    Editing {
        id: PostId,
        draft: Draft,
        field: Field,
    },
}

impl Default for EditorState {
    fn default() -> Self {
        EditorState::Creating {
            draft: Draft::default(),
            field: Field::Title,
        }
    }
}

impl State for EditorState {}

impl EditorState {
    pub fn draft(&self) -> &Draft {
        match self {
            EditorState::Creating { draft, .. } | EditorState::Editing { draft, .. } => draft,
        }
    }

    pub fn field(&self) -> Field {
        match self {
            EditorState::Creating { field, .. } | EditorState::Editing { field, .. } => *field,
        }
    }

    pub fn editing_id(&self) -> Option<&PostId> {
        match self {
            EditorState::Editing { id, .. } => Some(id),
            EditorState::Creating { .. } => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    /// Heading of the form card.
    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Post"
        } else {
            "Create Post"
        }
    }

    /// Label of the submit action.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Post"
        } else {
            "Create Post"
        }
    }

    /// Store command that submitting the form issues.
    pub fn command(&self) -> StoreCommand {
        match self {
            EditorState::Creating { draft, .. } => StoreCommand::Create(draft.clone()),
            EditorState::Editing { id, draft, .. } => {
                StoreCommand::Update(Post::from_draft(id.clone(), draft.clone()))
            }
        }
    }
}
