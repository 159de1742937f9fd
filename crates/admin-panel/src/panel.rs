//! Panel state machine: cached list, search, modal form, and mutations.
//!
//! Every successful mutation is followed by a full [`AdminPanel::refresh`];
//! the cached list is only ever replaced wholesale. A failed operation is
//! returned to the caller and also kept as the panel's notice, leaving the
//! list, and for submits the open form, untouched.

use tracing::{debug, info, warn};

use crate::api::UsersApi;
use crate::error::PanelError;
use crate::form::UserForm;
use crate::search::filter_users;
use crate::user::User;

const ADD_TITLE: &str = "Add User";
const EDIT_TITLE: &str = "Edit User";

/// Client-side state of the user administration panel.
pub struct AdminPanel<A> {
    api: A,
    users: Vec<User>,
    is_modal_visible: bool,
    current_user: Option<User>,
    search_term: String,
    form: UserForm,
    notice: Option<String>,
}

impl<A: UsersApi> AdminPanel<A> {
    /// Create an empty panel; call [`Self::refresh`] to load users.
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            is_modal_visible: false,
            current_user: None,
            search_term: String::new(),
            form: UserForm::default(),
            notice: None,
        }
    }

    /// Every cached user, in storage order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Cached users matching the current search term.
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search_term)
    }

    /// Whether the create/edit modal is open.
    pub const fn is_modal_visible(&self) -> bool {
        self.is_modal_visible
    }

    /// The user being edited; `None` in create mode.
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// The active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The form as currently typed.
    pub const fn form(&self) -> &UserForm {
        &self.form
    }

    /// Mutable access for input bindings.
    pub const fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    /// Last failure to show the operator, cleared by the next success.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Title of the modal for the current mode.
    pub const fn modal_title(&self) -> &'static str {
        if self.current_user.is_some() {
            EDIT_TITLE
        } else {
            ADD_TITLE
        }
    }

    /// Set the search term; filtering happens locally.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Refetch the full list from the backend.
    ///
    /// # Errors
    /// Returns [`PanelError::Api`] and keeps the previous list on failure.
    pub async fn refresh(&mut self) -> Result<(), PanelError> {
        match self.api.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "user list refreshed");
                self.users = users;
                self.notice = None;
                Ok(())
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    /// Open an empty form in create mode.
    pub fn open_create(&mut self) {
        self.current_user = None;
        self.form.clear();
        self.is_modal_visible = true;
    }

    /// Open the form in edit mode, pre-populated from a cached user.
    ///
    /// # Errors
    /// Returns [`PanelError::UnknownUser`] when `id` is not in the cached list.
    pub fn open_edit(&mut self, id: i32) -> Result<(), PanelError> {
        let Some(user) = self.users.iter().find(|user| user.id == id).cloned() else {
            return Err(self.fail(PanelError::UnknownUser { id }));
        };
        self.form = UserForm::from_user(&user);
        self.current_user = Some(user);
        self.is_modal_visible = true;
        Ok(())
    }

    /// Close the modal and discard the form.
    pub fn cancel(&mut self) {
        self.close_modal();
    }

    /// Validate and send the form, then refetch.
    ///
    /// In edit mode the existing id is merged with the form values and sent
    /// as a full replace; otherwise a new user is created.
    ///
    /// # Errors
    /// Returns [`PanelError::Validation`] with every unmet rule, or
    /// [`PanelError::Api`] when the backend call fails. In both cases the
    /// modal stays open with the form intact.
    pub async fn submit(&mut self) -> Result<(), PanelError> {
        let payload = self.form.validate().map_err(PanelError::Validation)?;
        let result = match &self.current_user {
            Some(existing) => self.api.update_user(&existing.replaced_with(payload)).await,
            None => self.api.create_user(&payload).await,
        };
        match result {
            Ok(saved) => {
                info!(id = saved.id, "user saved");
                self.close_modal();
                self.refresh().await
            }
            Err(error) => Err(self.fail(error.into())),
        }
    }

    /// Delete a user, then refetch.
    ///
    /// # Errors
    /// Returns [`PanelError::Api`] and keeps the cached list on failure.
    pub async fn delete(&mut self, id: i32) -> Result<(), PanelError> {
        if let Err(error) = self.api.delete_user(id).await {
            return Err(self.fail(error.into()));
        }
        info!(id, "user deleted");
        self.refresh().await
    }

    fn close_modal(&mut self) {
        self.is_modal_visible = false;
        self.current_user = None;
        self.form.clear();
    }

    fn fail(&mut self, error: PanelError) -> PanelError {
        warn!(%error, "panel operation failed");
        self.notice = Some(error.to_string());
        error
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
