//! Contact and login forms.
//!
//! Neither form talks to a backend: a valid contact submission is logged and
//! the form reset, and a valid login simply lets the shell navigate on.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::content::CAPTCHA_SITE_KEY;

/// Why a form refused to submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please verify that you're not a robot.")]
    CaptchaUnverified,
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

impl TextField {
    fn new(label: &'static str, required: bool) -> Self {
        Self {
            label,
            value: String::new(),
            required,
        }
    }

    fn check(&self) -> Result<(), FormError> {
        if self.required && self.value.trim().is_empty() {
            return Err(FormError::MissingField(self.label));
        }
        Ok(())
    }
}

/// Ordered text inputs with one focused at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    fields: Vec<TextField>,
    focus: usize,
}

impl Fields {
    fn new(fields: Vec<TextField>) -> Self {
        Self { fields, focus: 0 }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextField> {
        self.fields.iter()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Move focus to the field with `label`, if there is one.
    pub fn focus_label(&mut self, label: &str) {
        if let Some(i) = self.fields.iter().position(|f| f.label == label) {
            self.focus = i;
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push(&mut self, c: char) {
        if let Some(f) = self.fields.get_mut(self.focus) {
            f.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        if let Some(f) = self.fields.get_mut(self.focus) {
            f.value.pop();
        }
    }

    fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or_default()
    }

    fn set(&mut self, index: usize, value: &str) {
        if let Some(f) = self.fields.get_mut(index) {
            f.value = value.to_string();
        }
    }

    fn check(&self) -> Result<(), FormError> {
        self.fields.iter().try_for_each(TextField::check)
    }

    fn clear(&mut self) {
        for f in self.fields.iter_mut() {
            f.value.clear();
        }
        self.focus = 0;
    }
}

const NAME: usize = 0;
const EMAIL: usize = 1;
const COMPANY: usize = 2;
const MESSAGE: usize = 3;

/// What a successful contact submission produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

/// Contact form with a CAPTCHA checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: Fields,
    captcha: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: Fields::new(vec![
                TextField::new("Name", true),
                TextField::new("Email", true),
                TextField::new("Company", false),
                TextField::new("Message", true),
            ]),
            captcha: false,
        }
    }

    pub fn site_key(&self) -> &'static str {
        CAPTCHA_SITE_KEY
    }

    pub fn captcha_verified(&self) -> bool {
        self.captcha
    }

    pub fn toggle_captcha(&mut self) {
        self.captcha = !self.captcha;
    }

    /// Validate, log, and reset. On error the form keeps its input.
    pub fn submit(&mut self) -> Result<ContactSubmission, FormError> {
        if let Err(e) = self.fields.check().and_then(|_| self.check_captcha()) {
            warn!(error = %e, "contact form rejected");
            return Err(e);
        }
        let submission = ContactSubmission {
            name: self.fields.value(NAME).to_string(),
            email: self.fields.value(EMAIL).to_string(),
            company: self.fields.value(COMPANY).to_string(),
            message: self.fields.value(MESSAGE).to_string(),
        };
        info!(
            name = %submission.name,
            email = %submission.email,
            company = %submission.company,
            "contact form submitted"
        );
        self.fields.clear();
        self.captcha = false;
        Ok(submission)
    }

    fn check_captcha(&self) -> Result<(), FormError> {
        if self.captcha {
            Ok(())
        } else {
            Err(FormError::CaptchaUnverified)
        }
    }
}

/// Login form. Any non-empty email and password are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub fields: Fields,
    pub remember_me: bool,
    pub show_password: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            fields: Fields::new(vec![TextField::new("Email", true), TextField::new("Password", true)]),
            remember_me: false,
            show_password: false,
        }
    }

    pub fn email(&self) -> &str {
        self.fields.value(0)
    }

    pub fn password(&self) -> &str {
        self.fields.value(1)
    }

    /// Password as it should be drawn.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password().to_string()
        } else {
            "•".repeat(self.password().chars().count())
        }
    }

    pub fn fill(&mut self, email: &str, password: &str) {
        self.fields.set(0, email);
        self.fields.set(1, password);
    }

    pub fn submit(&self) -> Result<(), FormError> {
        match self.fields.check() {
            Ok(()) => {
                info!(email = %self.email(), remember_me = self.remember_me, "signed in");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "login rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(fields: &mut Fields, s: &str) {
        s.chars().for_each(|c| fields.push(c));
    }

    fn filled_contact() -> ContactForm {
        let mut form = ContactForm::new();
        type_str(&mut form.fields, "Ada");
        form.fields.focus_next();
        type_str(&mut form.fields, "ada@example.com");
        form.fields.focus_next();
        form.fields.focus_next();
        type_str(&mut form.fields, "Hello");
        form
    }

    #[test]
    fn test_contact_requires_captcha() {
        let mut form = filled_contact();
        assert_eq!(form.submit(), Err(FormError::CaptchaUnverified));
        assert_eq!(
            FormError::CaptchaUnverified.to_string(),
            "Please verify that you're not a robot."
        );
        // Input is kept after a rejected submit
        assert_eq!(form.fields.value(NAME), "Ada");
    }

    #[test]
    fn test_contact_requires_message() {
        let mut form = filled_contact();
        form.fields.pop();
        form.fields.pop();
        form.fields.pop();
        form.fields.pop();
        form.fields.pop();
        form.toggle_captcha();
        assert_eq!(form.submit(), Err(FormError::MissingField("Message")));
    }

    #[test]
    fn test_contact_success_resets() {
        let mut form = filled_contact();
        form.toggle_captcha();
        let sent = form.submit().unwrap();
        assert_eq!(sent.email, "ada@example.com");
        assert_eq!(sent.company, "");
        assert!(form.fields.iter().all(|f| f.value.is_empty()));
        assert!(!form.captcha_verified());
        assert_eq!(form.fields.focus(), 0);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = ContactForm::new();
        form.fields.focus_prev();
        assert_eq!(form.fields.focus(), MESSAGE);
        form.fields.focus_next();
        assert_eq!(form.fields.focus(), NAME);
    }

    #[test]
    fn test_login_accepts_any_non_empty() {
        let mut form = LoginForm::new();
        assert_eq!(form.submit(), Err(FormError::MissingField("Email")));
        form.fill("x", "");
        assert_eq!(form.submit(), Err(FormError::MissingField("Password")));
        form.fill("x", "y");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_password_masking() {
        let mut form = LoginForm::new();
        form.fill("a@b.c", "secret");
        assert_eq!(form.password_display(), "••••••");
        form.show_password = true;
        assert_eq!(form.password_display(), "secret");
    }
}
