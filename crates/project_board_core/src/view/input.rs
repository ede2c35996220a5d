//! Project input form view.
//!
//! # Responsibility
//! - Read the three form fields on submit and validate them.
//! - Forward accepted input to the project store and clear the form.
//!
//! # Invariants
//! - A rejected submit changes neither the store nor the field contents.
//! - Validation failures surface as one generic alert; the failing field is
//!   only logged.

use crate::config::{ConfigError, FormRules};
use crate::logging::sanitize_user_text;
use crate::model::project::Project;
use crate::state::project_state::ProjectState;
use crate::validation::{Validatable, ValidationError};
use crate::view::component::{Component, InsertPosition};
use crate::view::host::{FormField, FormHost};
use log::{info, warn};

/// Alert text shown for every rejected submit.
pub const INVALID_INPUT_ALERT: &str = "Invalid input!";

const FORM_ELEMENT_ID: &str = "user-input";

/// Submit event delivered by the host.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the host's default form navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Project),
    Rejected,
}

/// Form component writing validated projects into a `ProjectState`.
pub struct ProjectInput<H: FormHost> {
    host: H,
    state: ProjectState,
    rules: FormRules,
}

impl<H: FormHost> ProjectInput<H> {
    /// Creates the form with default rules and attaches it to `host`.
    pub fn new(host: H, state: ProjectState) -> Self {
        Self::build(host, state, FormRules::default())
    }

    /// Creates the form with custom rules.
    ///
    /// Rules are checked before the host is touched; an inconsistent set
    /// (e.g. `people_min > people_max`) is returned as an error.
    pub fn with_rules(
        host: H,
        state: ProjectState,
        rules: FormRules,
    ) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::build(host, state, rules))
    }

    fn build(host: H, state: ProjectState, rules: FormRules) -> Self {
        let mut input = Self { host, state, rules };
        let (element_id, position) = (input.element_id(), input.insert_position());
        input.host.attach(&element_id, position);
        input.configure();
        input.render_content();
        input
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Handles one form submit.
    pub fn submit_handler(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();
        let Some((title, description, people)) = self.gather_user_input() else {
            self.host.alert(INVALID_INPUT_ALERT);
            return SubmitOutcome::Rejected;
        };

        info!(
            "event=form_submit module=view status=ok title={} people={}",
            sanitize_user_text(&title),
            people
        );
        let project = self.state.add_project(title, description, people);
        self.clear_inputs();
        SubmitOutcome::Added(project)
    }

    fn gather_user_input(&self) -> Option<(String, String, u32)> {
        let title = self.host.field_value(FormField::Title);
        let description = self.host.field_value(FormField::Description);
        let people = coerce_number(&self.host.field_value(FormField::People));

        let mut title_spec = Validatable::text(title.as_str());
        title_spec.required = self.rules.title_required;
        let description_spec = Validatable::text(description.as_str())
            .required()
            .min_length(self.rules.description_min_length);
        let people_spec = Validatable::number(people)
            .required()
            .min(f64::from(self.rules.people_min))
            .max(f64::from(self.rules.people_max));

        let checks = [
            (FormField::Title, title_spec.check()),
            (FormField::Description, description_spec.check()),
            (FormField::People, people_spec.check()),
        ];
        for (field, result) in checks {
            if let Err(err) = result {
                log_rejection(field, &err);
                return None;
            }
        }

        if people.fract() != 0.0 {
            warn!(
                "event=form_rejected module=view status=invalid field={} reason=fractional_people",
                FormField::People.id()
            );
            return None;
        }

        // Range check above keeps the value within the u32 rule bounds.
        Some((title, description, people as u32))
    }

    fn clear_inputs(&mut self) {
        for field in FormField::ALL {
            self.host.set_field_value(field, "");
        }
    }
}

impl<H: FormHost> Component for ProjectInput<H> {
    fn element_id(&self) -> String {
        FORM_ELEMENT_ID.to_string()
    }

    fn insert_position(&self) -> InsertPosition {
        InsertPosition::AfterBegin
    }
}

fn log_rejection(field: FormField, err: &ValidationError) {
    warn!(
        "event=form_rejected module=view status=invalid field={} reason=\"{}\"",
        field.id(),
        err
    );
}

/// Coerces raw field text to a number like a browser's `Number(text)`.
///
/// Blank text is `0` and unparsable text is NaN. `0x`, `0o` and `0b`
/// prefixes read an unsigned integer in that radix, and `Infinity` may carry
/// a sign. Rust-only spellings such as `inf`, `nan` or `1_000` are NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&trimmed[2..], radix);
    }

    let decimal_chars = |c: char| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-');
    if !trimmed.chars().all(decimal_chars) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}
