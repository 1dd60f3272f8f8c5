use crate::api::PostApi;
use crate::mvi::Reducer;
use crate::post::Post;
use crate::store::{PostStore, PostsSnapshot, RequestId, StoreCommand};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState, Field};

/// Which part of the screen receives keystrokes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    Table,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// View model for the post manager screen.
///
/// Owns the editor and table selection; reads posts only through store
/// snapshots and changes them only by dispatching store commands.
pub struct App<A> {
    store: PostStore<A>,
    snapshot: PostsSnapshot,
    editor: EditorState,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl<A: PostApi> App<A> {
    pub fn new(store: PostStore<A>) -> Self {
        let snapshot = store.snapshot();
        Self {
            store,
            snapshot,
            editor: EditorState::default(),
            focus: Focus::Form,
            selected: 0,
            should_quit: false,
        }
    }

    /// Initial load, issued once when the screen opens.
    pub fn start(&mut self) -> RequestId {
        self.dispatch(StoreCommand::FetchAll)
    }

    pub fn snapshot(&self) -> &PostsSnapshot {
        &self.snapshot
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.snapshot.posts.get(self.selected)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Adopt a snapshot published by the store.
    pub fn on_store_changed(&mut self, snapshot: PostsSnapshot) {
        self.snapshot = snapshot;
        self.clamp_selection();
    }

    /// Pull the latest snapshot directly from the store.
    pub fn sync_snapshot(&mut self) {
        let snapshot = self.store.snapshot();
        self.on_store_changed(snapshot);
    }

    pub fn edit(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Send the form to the store and clear it.
    pub fn submit(&mut self) -> RequestId {
        let command = self.editor.command();
        let request = self.dispatch(command);
        self.edit(EditorIntent::Submitted);
        self.focus = Focus::Form;
        request
    }

    /// Load the selected row into the form.
    pub fn edit_selected(&mut self) -> bool {
        let Some(post) = self.selected_post().cloned() else {
            return false;
        };
        self.edit(EditorIntent::BeginEdit(post));
        self.focus = Focus::Form;
        true
    }

    pub fn delete_selected(&mut self) -> Option<RequestId> {
        let id = self.selected_post()?.id.clone();
        Some(self.dispatch(StoreCommand::Delete(id)))
    }

    pub fn refresh(&mut self) -> RequestId {
        self.dispatch(StoreCommand::FetchAll)
    }

    /// Title → Description → Table → Title.
    pub fn cycle_focus(&mut self) {
        match (self.focus, self.editor.field()) {
            (Focus::Form, Field::Title) => self.edit(EditorIntent::NextField),
            (Focus::Form, Field::Description) => {
                self.edit(EditorIntent::NextField);
                self.focus = Focus::Table;
            }
            (Focus::Table, _) => self.focus = Focus::Form,
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.snapshot.posts.len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected.saturating_add_signed(delta);
        self.selected = next.min(len - 1);
    }

    fn dispatch(&mut self, command: StoreCommand) -> RequestId {
        let (request, _handle) = self.store.dispatch(command);
        // Loading is already set; show it without waiting for the watcher.
        self.sync_snapshot();
        request
    }

    fn clamp_selection(&mut self) {
        let len = self.snapshot.posts.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
