// Form controls that re-render submitted values and show per-field errors.

use crate::forms::{FormData, FormErrors};
use maud::{html, Markup};

pub struct Field<'a> {
    pub form: &'a FormData,
    pub errors: &'a FormErrors,
}

impl<'a> Field<'a> {
    pub fn new(form: &'a FormData, errors: &'a FormErrors) -> Self {
        Self { form, errors }
    }

    pub fn input(&self, label: &str, name: &str, kind: &str, placeholder: &str) -> Markup {
        // Passwords are never echoed back.
        let value = if kind == "password" { "" } else { self.form.get(name) };
        html! {
            div class="field" {
                label for=(name) { (label) }
                input type=(kind) id=(name) name=(name) value=(value) placeholder=(placeholder);
                (self.error(name))
            }
        }
    }

    pub fn textarea(&self, label: &str, name: &str, placeholder: &str) -> Markup {
        html! {
            div class="field" {
                label for=(name) { (label) }
                textarea id=(name) name=(name) placeholder=(placeholder) { (self.form.get(name)) }
                (self.error(name))
            }
        }
    }

    /// `<select>`. With `any_label` set, an extra first option sends "all".
    pub fn select(&self, label: &str, name: &str, options: &[&str], any_label: Option<&str>) -> Markup {
        let current = self.form.get(name);
        html! {
            div class="field" {
                label for=(name) { (label) }
                select id=(name) name=(name) {
                    @if let Some(any) = any_label {
                        option value="all" selected[current.is_empty() || current == "all"] { (any) }
                    } @else {
                        option value="" disabled selected[current.is_empty()] { "Select…" }
                    }
                    @for opt in options {
                        option value=(opt) selected[current == *opt] { (opt) }
                    }
                }
                (self.error(name))
            }
        }
    }

    pub fn error(&self, name: &str) -> Markup {
        html! {
            @if let Some(msg) = self.errors.get(name) {
                p class="field-error" { (msg) }
            }
        }
    }
}

/// Carry submitted values through a preview step.
pub fn hidden_fields(form: &FormData, names: &[&str]) -> Markup {
    html! {
        @for name in names {
            @if form.is_set(name) {
                input type="hidden" name=(name) value=(form.get(name));
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

pub fn notice(kind: NoticeKind, message: &str) -> Markup {
    let class = match kind {
        NoticeKind::Success => "notice success",
        NoticeKind::Error => "notice error",
        NoticeKind::Info => "notice info",
    };
    html! {
        div class=(class) role="status" { pre { (message) } }
    }
}
