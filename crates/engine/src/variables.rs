//! Default placeholder values for a compose request.
//!
//! Layering, lowest priority first: built-in defaults, config overrides,
//! per-request overrides. `{date}` and `{time}` come from the clock passed
//! in, so callers (and tests) control them.

use chrono::NaiveDateTime;
use std::fmt::Write;
use mailweave_config::VariablesConfig;
use mailweave_core::variables::VariableMap;
use tracing::warn;

const FALLBACK_DATE_FORMAT: &str = "%B %-d";
const FALLBACK_TIME_FORMAT: &str = "%I:%M %p";

/// Builds the [`VariableMap`] for one request.
#[derive(Debug, Clone)]
pub struct VariableBuilder {
    default_recipient: String,
    sender: String,
    date_format: String,
    time_format: String,
    overrides: VariableMap,
}

impl VariableBuilder {
    pub fn from_config(config: &VariablesConfig) -> Self {
        Self {
            default_recipient: config.default_recipient.clone(),
            sender: config.sender.clone(),
            date_format: checked_format(&config.date_format, FALLBACK_DATE_FORMAT),
            time_format: checked_format(&config.time_format, FALLBACK_TIME_FORMAT),
            overrides: config.overrides.clone().into(),
        }
    }

    /// Variables for `recipient` at `now`, with `request_overrides` applied last.
    pub fn build(
        &self,
        recipient: Option<&str>,
        now: NaiveDateTime,
        request_overrides: &VariableMap,
    ) -> VariableMap {
        let name = recipient
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(self.default_recipient.as_str());

        let mut vars = VariableMap::new()
            .with("name", name)
            .with("topic", "your request")
            .with("date", render(now, &self.date_format).unwrap_or_default())
            .with("time", render(now, &self.time_format).unwrap_or_default())
            .with("company", "your company")
            .with("product", "our product")
            .with("amount", "$100")
            .with("location", "the office")
            .with("your_name", self.sender.as_str())
            .with("greeting", "Hi")
            .with("action", "completed the task");

        vars.extend_from(&self.overrides);
        vars.extend_from(request_overrides);
        vars
    }

    /// [`build`](Self::build) with the local wall clock.
    pub fn build_now(&self, recipient: Option<&str>, request_overrides: &VariableMap) -> VariableMap {
        self.build(
            recipient,
            chrono::Local::now().naive_local(),
            request_overrides,
        )
    }
}

impl Default for VariableBuilder {
    fn default() -> Self {
        Self::from_config(&VariablesConfig::default())
    }
}

/// A strftime string chrono can render for a naive timestamp, or `fallback`.
///
/// Unknown specifiers and timezone ones (`%Z`, `%z`) both fail here, since
/// there is no offset to print.
fn checked_format(format: &str, fallback: &str) -> String {
    if render(NaiveDateTime::default(), format).is_some() {
        format.to_string()
    } else {
        warn!(format, fallback, "Invalid date/time format, using fallback");
        fallback.to_string()
    }
}

/// `now` formatted with `format`; `None` where `to_string()` would panic.
fn render(now: NaiveDateTime, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", now.format(format)).ok()?;
    Some(out)
}
