//! Prompt templates with `{{name}}` placeholder substitution.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A prompt template parsed once and rendered against variable bindings.
///
/// Placeholders are written `{{name}}`. Rendering is strict: every
/// placeholder must have a binding, while surplus bindings are ignored.
/// A `{{` with no closing `}}` is kept as literal text.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse a template. Never fails: malformed markers degrade to literals.
    pub fn new(template: impl Into<String>) -> Self {
        let source = template.into();
        let segments = parse_segments(&source);
        Self { source, segments }
    }

    /// The original template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names, in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder with its binding.
    ///
    /// Returns [`Error::MissingVariable`] naming the first unbound
    /// placeholder, in template order.
    pub fn render(&self, variables: &HashMap<String, String>) -> Result<String> {
        let mut rendered = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => match variables.get(name) {
                    Some(value) => rendered.push_str(value),
                    None => return Err(Error::MissingVariable(name.clone())),
                },
            }
        }
        Ok(rendered)
    }
}

fn parse_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        let Some(end) = rest[start + 2..].find("}}") else {
            // Unterminated marker: the remainder is literal text.
            break;
        };
        if start > 0 {
            segments.push(Segment::Literal(rest[..start].to_string()));
        }
        let name = rest[start + 2..start + 2 + end].trim().to_string();
        segments.push(Segment::Placeholder(name));
        rest = &rest[start + 2 + end + 2..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }
    segments
}
