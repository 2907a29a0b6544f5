//! # Form drafts and validation
//!
//! Each form is described by a static list of [`FieldSpec`]s and edited
//! through a [`FormDraft`], which holds the typed values, which fields have
//! been touched, their error messages, the in-flight flag, and a single
//! form-level status message.
//!
//! ## Validation
//!
//! Rules run in order and the first failure is the field's message. A field
//! is validated when it loses focus ([`FormDraft::blur`]), when it changes
//! after having been touched, and for every field on submit. Errors are only
//! reported for touched fields, so an untouched form shows no red.
//!
//! | Form | Field | Rules |
//! |------|-------|-------|
//! | [`LOGIN_FORM`] | `email` | required, email |
//! | | `password` | required |
//! | [`REGISTER_FORM`] | `name` | required |
//! | | `email` | required, email |
//! | | `password` | required |
//! | [`ADD_PROMPT_FORM`] | `title` | required, at most 50 characters |
//! | | `prompt` | required, at least 10 characters |
//!
//! ## Submission
//!
//! [`FormDraft::begin_submit`] hands out the values only for a valid draft
//! with nothing in flight; invalid drafts never reach the network.
//! [`FormDraft::finish_submit`] clears the in-flight flag and records the
//! failure message, if any.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Maximum title length of a new prompt, in characters.
pub const TITLE_MAX_CHARS: usize = 50;
/// Minimum body length of a new prompt, in characters.
pub const BODY_MIN_CHARS: usize = 10;

/// One validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Non-blank, with the message to show otherwise.
    Required(&'static str),
    Email,
    MinChars(usize),
    MaxChars(usize),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), String> {
        let ok = match self {
            Rule::Required(_) => !value.trim().is_empty(),
            Rule::Email => EMAIL.is_match(value.trim()),
            Rule::MinChars(min) => value.chars().count() >= *min,
            Rule::MaxChars(max) => value.chars().count() <= *max,
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            Rule::Required(message) => message.to_string(),
            Rule::Email => "Invalid email".to_string(),
            Rule::MinChars(min) => format!("Must be at least {min} characters"),
            Rule::MaxChars(max) => format!("Must be {max} characters or less"),
        })
    }
}

/// A named field and its rules.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

pub const LOGIN_FORM: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        rules: &[Rule::Required("Required"), Rule::Email],
    },
    FieldSpec {
        name: "password",
        rules: &[Rule::Required("Required")],
    },
];

pub const REGISTER_FORM: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        rules: &[Rule::Required("Required")],
    },
    FieldSpec {
        name: "email",
        rules: &[Rule::Required("Required"), Rule::Email],
    },
    FieldSpec {
        name: "password",
        rules: &[Rule::Required("Required")],
    },
];

pub const ADD_PROMPT_FORM: &[FieldSpec] = &[
    FieldSpec {
        name: "title",
        rules: &[
            Rule::Required("Title is required"),
            Rule::MaxChars(TITLE_MAX_CHARS),
        ],
    },
    FieldSpec {
        name: "prompt",
        rules: &[
            Rule::Required("Prompt content is required"),
            Rule::MinChars(BODY_MIN_CHARS),
        ],
    },
];

/// A field that failed validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Why [`FormDraft::begin_submit`] refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),
}

/// Values of a draft at the moment it was submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or_default()
    }
}

/// Transient state of one form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormDraft {
    spec: &'static [FieldSpec],
    values: BTreeMap<&'static str, String>,
    errors: BTreeMap<&'static str, String>,
    touched: BTreeSet<&'static str>,
    submitting: bool,
    status: Option<String>,
}

impl FormDraft {
    pub fn new(spec: &'static [FieldSpec]) -> Self {
        Self {
            spec,
            values: spec.iter().map(|f| (f.name, String::new())).collect(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submitting: false,
            status: None,
        }
    }

    fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.spec.iter().find(|f| f.name == name)
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    /// Update a field. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let Some(spec) = self.field(field) else {
            return;
        };
        self.values.insert(spec.name, value.into());
        if self.touched.contains(spec.name) {
            self.validate_field(spec);
        }
    }

    /// The field lost focus: mark it touched and validate it.
    pub fn blur(&mut self, field: &str) {
        let Some(spec) = self.field(field) else {
            return;
        };
        self.touched.insert(spec.name);
        self.validate_field(spec);
    }

    fn validate_field(&mut self, spec: &'static FieldSpec) {
        let value = self.value(spec.name);
        match spec.rules.iter().try_for_each(|rule| rule.check(value)) {
            Ok(()) => {
                self.errors.remove(spec.name);
            }
            Err(message) => {
                self.errors.insert(spec.name, message);
            }
        }
    }

    /// Error to display for `field`, if it has been touched.
    pub fn error(&self, field: &str) -> Option<&str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.errors.get(field).map(String::as_str)
    }

    /// Validate every field, marking all of them touched.
    pub fn validate(&mut self) -> Result<(), Vec<ValidationError>> {
        for spec in self.spec {
            self.touched.insert(spec.name);
            self.validate_field(spec);
        }
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(self
            .errors
            .iter()
            .map(|(field, message)| ValidationError {
                field: *field,
                message: message.clone(),
            })
            .collect())
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Form-level message from the last failed submission.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Start a submission, or say why it may not start.
    pub fn begin_submit(&mut self) -> Result<FormValues, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.validate().map_err(SubmitBlocked::Invalid)?;
        self.submitting = true;
        self.status = None;
        Ok(FormValues(self.values.clone()))
    }

    /// End the submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit<T>(&mut self, outcome: &Result<T, String>) {
        self.submitting = false;
        self.status = outcome.as_ref().err().cloned();
    }
}
