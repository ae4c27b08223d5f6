//! Server-side model of the user form.
//!
//! `UserFormView` decides which fields are visible, where the form submits
//! and where each validation message goes. The HTML it renders carries the
//! same decisions as `data-*` attributes for `assets/user_form.js`.

use maud::{Markup, html};

use crate::domain::{LANGUAGE_CHOICES, UserField, UserFields, UserId, ValidationErrors};

/// Path of the list view, the navigation target after a successful save.
pub const USERS_PATH: &str = "/users";

/// Whether the form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(UserId),
}

/// Where the script sends the JSON payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub method: &'static str,
    pub url: String,
}

/// Form state: mode, the values shown in the inputs and the messages
/// attached to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormView {
    mode: FormMode,
    values: UserFields,
    errors: ValidationErrors,
}

impl UserFormView {
    /// Blank form for a new user.
    pub fn new_user() -> Self {
        Self {
            mode: FormMode::New,
            values: UserFields::default(),
            errors: ValidationErrors::default(),
        }
    }

    /// Form for an existing user; values arrive later from `GET /users/:id`.
    pub fn edit_user(id: UserId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            ..Self::new_user()
        }
    }

    /// Show these values in the inputs.
    #[must_use]
    pub fn with_values(mut self, values: UserFields) -> Self {
        self.values = values;
        self
    }

    /// Attach validation messages to their fields.
    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }

    /// The free-text input is shown iff `other` is selected.
    pub fn other_language_visible(&self) -> bool {
        self.values.uses_other_language()
    }

    pub fn submission(&self) -> Submission {
        match self.mode {
            FormMode::New => Submission {
                method: "POST",
                url: USERS_PATH.to_owned(),
            },
            FormMode::Edit(id) => Submission {
                method: "PATCH",
                url: format!("{USERS_PATH}/{id}"),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::New => "New user",
            FormMode::Edit(_) => "Edit user",
        }
    }

    /// Target of the plain HTML form when scripting is unavailable.
    pub fn fallback_action(&self) -> String {
        match self.mode {
            FormMode::New => USERS_PATH.to_owned(),
            FormMode::Edit(id) => format!("{USERS_PATH}/{id}"),
        }
    }

    /// Record endpoint used to populate the edit form.
    pub fn fetch_url(&self) -> Option<String> {
        match self.mode {
            FormMode::New => None,
            FormMode::Edit(id) => Some(format!("{USERS_PATH}/{id}")),
        }
    }

    pub fn render(&self) -> Markup {
        let submission = self.submission();
        html! {
            form id="user-form" action=(self.fallback_action()) method="post"
                data-submit-method=(submission.method)
                data-submit-url=(submission.url)
                data-fetch-url=[self.fetch_url()]
                data-list-url=(USERS_PATH) {
                div class="field" {
                    label for="user_name" { "Name" }
                    input id="user_name" type="text" name="user[name]" value=(self.values.name);
                    (self.messages(UserField::Name))
                }
                fieldset class="field" {
                    legend { "Language" }
                    @for choice in &LANGUAGE_CHOICES {
                        label {
                            input type="radio" name="user[language]" value=(choice.value)
                                checked[self.values.language == choice.value];
                            " " (choice.label)
                        }
                    }
                    (self.messages(UserField::Language))
                }
                div id="other-language-field" class="field" hidden[!self.other_language_visible()] {
                    label for="user_other_language" { "Other language" }
                    input id="user_other_language" type="text" name="user[other_language]"
                        value=(self.values.other_language);
                    (self.messages(UserField::OtherLanguage))
                }
                p id="form-error" class="errors" role="alert" hidden {}
                button type="submit" { "Save" }
            }
        }
    }

    /// Message list for one field; `data-label` lets the script prefix
    /// messages the same way.
    fn messages(&self, field: UserField) -> Markup {
        let label = field_label(field);
        html! {
            ul class="errors" data-field=(field.as_str()) data-label=(label) {
                @for message in self.errors.messages(field) {
                    li { (label) " " (message) }
                }
            }
        }
    }
}

fn field_label(field: UserField) -> &'static str {
    match field {
        UserField::Name => "Name",
        UserField::Language => "Language",
        UserField::OtherLanguage => "Other language",
    }
}
