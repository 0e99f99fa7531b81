//! Account menu state (login / register form behind the navbar's account control)

use crate::auth::{AuthRequest, Credentials, Registration};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountForm {
    #[default]
    Login,
    Register,
}

impl AccountForm {
    pub fn title(&self) -> &'static str {
        match self {
            AccountForm::Login => "Log in",
            AccountForm::Register => "Register",
        }
    }

    /// Editable fields, in focus order.
    pub fn fields(&self) -> &'static [AccountField] {
        match self {
            AccountForm::Login => &[AccountField::Username, AccountField::Password],
            AccountForm::Register => &[
                AccountField::Username,
                AccountField::Email,
                AccountField::Password,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    Username,
    Email,
    Password,
}

impl AccountField {
    pub fn label(&self) -> &'static str {
        match self {
            AccountField::Username => "Username",
            AccountField::Email => "Email",
            AccountField::Password => "Password",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountMenuState {
    pub form: AccountForm,
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: AccountField,
    /// A request is in flight
    pub pending: bool,
    /// Why the last submit was refused locally
    pub hint: Option<&'static str>,
}

impl AccountMenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: AccountField) -> &str {
        match field {
            AccountField::Username => &self.username,
            AccountField::Email => &self.email,
            AccountField::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: AccountField) -> &mut String {
        match field {
            AccountField::Username => &mut self.username,
            AccountField::Email => &mut self.email,
            AccountField::Password => &mut self.password,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if self.pending {
            return;
        }
        self.hint = None;
        let field = self.focus;
        self.value_mut(field).push(c);
    }

    /// Replace a whole field, as a browser input does on every keystroke.
    pub fn set_value(&mut self, field: AccountField, value: String) {
        if self.pending {
            return;
        }
        self.hint = None;
        self.focus = field;
        *self.value_mut(field) = value;
    }

    pub fn backspace(&mut self) {
        if self.pending {
            return;
        }
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        let fields = self.form.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.form.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Flip between login and register. Register is only reachable when
    /// `show_registration` is set; returns whether the form changed.
    pub fn switch_form(&mut self, show_registration: bool) -> bool {
        let next = match self.form {
            AccountForm::Login if show_registration => AccountForm::Register,
            AccountForm::Login => return false,
            AccountForm::Register => AccountForm::Login,
        };
        self.form = next;
        if !next.fields().contains(&self.focus) {
            self.focus = AccountField::Username;
        }
        self.hint = None;
        true
    }

    /// Build the request for the current form, or `None` with a hint set
    /// when a required field is blank.
    pub fn request(&mut self) -> Option<AuthRequest> {
        let blank = self
            .form
            .fields()
            .iter()
            .any(|field| self.value(*field).trim().is_empty());
        if blank {
            self.hint = Some("Fill in every field");
            return None;
        }
        self.hint = None;
        Some(match self.form {
            AccountForm::Login => AuthRequest::Login(Credentials {
                username: self.username.trim().to_string(),
                password: self.password.clone(),
            }),
            AccountForm::Register => AuthRequest::Register(Registration {
                username: self.username.trim().to_string(),
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            }),
        })
    }

    /// Password rendered as bullets.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_login() -> AccountMenuState {
        let mut state = AccountMenuState::new();
        "glen".chars().for_each(|c| state.input_char(c));
        state.focus_next();
        "pw".chars().for_each(|c| state.input_char(c));
        state
    }

    #[test]
    fn test_login_request() {
        let mut state = filled_login();
        assert_eq!(
            state.request(),
            Some(AuthRequest::Login(Credentials {
                username: "glen".into(),
                password: "pw".into(),
            }))
        );
    }

    #[test]
    fn test_blank_field_refused() {
        let mut state = AccountMenuState::new();
        state.input_char('g');
        assert!(state.request().is_none());
        assert!(state.hint.is_some());
    }

    #[test]
    fn test_register_hidden_without_flag() {
        let mut state = AccountMenuState::new();
        assert!(!state.switch_form(false));
        assert_eq!(state.form, AccountForm::Login);

        assert!(state.switch_form(true));
        assert_eq!(state.form, AccountForm::Register);
        assert!(state.switch_form(false));
        assert_eq!(state.form, AccountForm::Login);
    }

    #[test]
    fn test_focus_cycles_through_form_fields() {
        let mut state = AccountMenuState::new();
        state.switch_form(true);
        state.focus_next();
        assert_eq!(state.focus, AccountField::Email);
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, AccountField::Username);
        state.focus_prev();
        assert_eq!(state.focus, AccountField::Password);
    }

    #[test]
    fn test_leaving_register_moves_focus_off_email() {
        let mut state = AccountMenuState::new();
        state.switch_form(true);
        state.focus = AccountField::Email;
        state.switch_form(true);
        assert_eq!(state.focus, AccountField::Username);
    }

    #[test]
    fn test_pending_ignores_input() {
        let mut state = filled_login();
        state.pending = true;
        state.input_char('x');
        state.backspace();
        assert_eq!(state.password, "pw");
        assert_eq!(state.masked_password(), "••");
    }

    #[test]
    fn test_set_value_replaces_field_and_focuses() {
        let mut state = AccountMenuState::new();
        state.input_char('x');
        state.set_value(AccountField::Password, "secret".into());
        assert_eq!(state.password, "secret");
        assert_eq!(state.focus, AccountField::Password);
        state.set_value(AccountField::Username, "glen".into());
        assert_eq!(state.username, "glen");
    }
}
