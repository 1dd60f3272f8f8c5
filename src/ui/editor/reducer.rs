//! Reducer for the post form.

use crate::mvi::Reducer;
use crate::post::Draft;

use super::intent::EditorIntent;
use super::state::{EditorState, Field};

/// Reducer for editor state transitions.
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Insert(ch) => edit_focused(state, |text| text.push(ch)),

            EditorIntent::Paste(pasted) => edit_focused(state, |text| text.push_str(&pasted)),

            EditorIntent::Backspace => edit_focused(state, |text| {
                text.pop();
            }),

            EditorIntent::NextField => match state {
                EditorState::Creating { draft, field } => EditorState::Creating {
                    draft,
                    field: field.next(),
                },
                EditorState::Editing { id, draft, field } => EditorState::Editing {
                    id,
                    draft,
                    field: field.next(),
                },
            },

            EditorIntent::BeginEdit(post) => EditorState::Editing {
                draft: Draft::from(&post),
                id: post.id,
                field: Field::Title,
            },

            EditorIntent::Cancel | EditorIntent::Submitted => EditorState::default(),
        }
    }
}

fn edit_focused(mut state: EditorState, edit: impl FnOnce(&mut String)) -> EditorState {
    let (draft, field) = match &mut state {
        EditorState::Creating { draft, field } | EditorState::Editing { draft, field, .. } => {
            (draft, *field)
        }
    };
    match field {
        Field::Title => edit(&mut draft.title),
        Field::Description => edit(&mut draft.description),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Post;

    fn typed(state: EditorState, text: &str) -> EditorState {
        text.chars()
            .fold(state, |s, ch| EditorReducer::reduce(s, EditorIntent::Insert(ch)))
    }

    #[test]
    fn typing_fills_focused_field() {
        let state = typed(EditorState::default(), "Hi");
        let state = EditorReducer::reduce(state, EditorIntent::NextField);
        let state = typed(state, "there");
        assert_eq!(state.draft(), &Draft::new("Hi", "there"));
        assert_eq!(state.field(), Field::Description);
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let state = EditorReducer::reduce(EditorState::default(), EditorIntent::Backspace);
        assert_eq!(state, EditorState::default());
    }

    #[test]
    fn begin_edit_switches_to_editing() {
        let post = Post::new(4, "Old", "body");
        let state = EditorReducer::reduce(EditorState::default(), EditorIntent::BeginEdit(post));
        assert!(state.is_editing());
        assert_eq!(state.heading(), "Edit Post");
        assert_eq!(state.submit_label(), "Update Post");
        assert_eq!(state.draft(), &Draft::new("Old", "body"));
    }

    #[test]
    fn submitted_resets_to_empty_create_form() {
        let post = Post::new(4, "Old", "body");
        let state = EditorReducer::reduce(EditorState::default(), EditorIntent::BeginEdit(post));
        let state = EditorReducer::reduce(state, EditorIntent::Submitted);
        assert_eq!(state, EditorState::default());
        assert_eq!(state.heading(), "Create Post");
    }
}
