pub mod templates;

use crate::config::PromptTemplates;
use std::fmt;

const CODE_PLACEHOLDER: &str = "{code}";
const LANGUAGE_PLACEHOLDER: &str = "{language}";

/// The task a prompt asks the model to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Convert,
    Debug,
    CheckQuality,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Convert => "convert",
            Mode::Debug => "debug",
            Mode::CheckQuality => "check_quality",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    templates: PromptTemplates,
}

impl PromptBuilder {
    pub fn new(templates: PromptTemplates) -> Self {
        Self { templates }
    }

    /// Builds the full instruction text for `mode`. The code is embedded as-is;
    /// `target_language` is only meaningful for [`Mode::Convert`].
    pub fn build(&self, code: &str, target_language: Option<&str>, mode: Mode) -> String {
        let template = match mode {
            Mode::Convert => &self.templates.convert,
            Mode::Debug => &self.templates.debug,
            Mode::CheckQuality => &self.templates.check_quality,
        };

        render(template, code, target_language.unwrap_or_default())
    }
}

/// Builds a prompt from the built-in templates.
pub fn build_prompt(code: &str, target_language: Option<&str>, mode: Mode) -> String {
    PromptBuilder::default().build(code, target_language, mode)
}

// Single pass so substituted text is never scanned for placeholders again.
fn render(template: &str, code: &str, language: &str) -> String {
    let mut out = String::with_capacity(template.len() + code.len() + language.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(CODE_PLACEHOLDER) {
            out.push_str(code);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LANGUAGE_PLACEHOLDER) {
            out.push_str(language);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
