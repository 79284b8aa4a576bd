// src/forms/mod.rs
//
// Form/query parsing (urlencoded and multipart) and the validation rules each
// page applies before anything is sent upstream.

pub mod agent_form;
pub mod auth_forms;
pub mod listing_forms;
pub mod upload;

use crate::errors::ServerError;
use astra::Request;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

/// Request bodies above this are rejected. Leaves room for a 5 MB image,
/// uploaded as a file or re-posted from the preview as a base64 data URL.
pub const MAX_FORM_BYTES: u64 = 8 * 1024 * 1024;

/// Submitted fields, by name. Missing fields read as "".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn from_urlencoded(raw: &str) -> Self {
        let fields = url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { fields }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn trimmed(&self, name: &str) -> String {
        self.get(name).trim().to_string()
    }

    pub fn is_set(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }
}

/// Query string of the request as a map (last value wins).
pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Read and decode an `application/x-www-form-urlencoded` or
/// `multipart/form-data` body.
pub fn read_form(req: &mut Request) -> Result<FormData, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form submission is too large".into()));
    }

    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if upload::is_multipart(content_type) {
        return upload::parse_multipart(raw, content_type);
    }

    Ok(FormData::from_urlencoded(&String::from_utf8_lossy(&raw)))
}

/// Per-field validation messages, rendered next to the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message per field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    pub(crate) fn require(&mut self, form: &FormData, field: &'static str, message: &str) -> String {
        let v = form.trimmed(field);
        if v.is_empty() {
            self.add(field, message);
        }
        v
    }

    pub(crate) fn min_chars(
        &mut self,
        form: &FormData,
        field: &'static str,
        min: usize,
        message: &str,
    ) -> String {
        let v = form.trimmed(field);
        if v.chars().count() < min {
            self.add(field, message);
        }
        v
    }

    pub(crate) fn email(&mut self, form: &FormData, field: &'static str) -> String {
        let v = form.trimmed(field);
        if !is_valid_email(&v) {
            self.add(field, "Invalid email address");
        }
        v
    }

    pub(crate) fn one_of(
        &mut self,
        form: &FormData,
        field: &'static str,
        options: &[&str],
        message: &str,
    ) -> String {
        let v = form.trimmed(field);
        if !options.contains(&v.as_str()) {
            self.add(field, message);
        }
        v
    }
}

/// Shape check only: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty() && !tail.ends_with('.'))
}
