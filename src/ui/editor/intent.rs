//! Intents for the post form.

use crate::mvi::Intent;
use crate::post::Post;

/// Intents that can be dispatched to the editor.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Type a character into the focused field.
    Insert(char),

    /// Bracketed paste into the focused field.
    Paste(String),

    /// Delete the last character of the focused field.
    Backspace,

    /// Move focus between title and description.
    NextField,

    /// Load an existing post into the form for editing.
    BeginEdit(Post),

    /// Abandon the current edit and clear the form.
    Cancel,

    /// The form was submitted; reset to an empty create form.
    Submitted,
}

impl Intent for EditorIntent {}
