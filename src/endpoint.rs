//! URL templating for REST endpoints.
//!
//! Templates carry `{name}` placeholders that are filled with path parameters,
//! and query parameters are appended after substitution. Values are inserted
//! verbatim: no percent-encoding is applied, so callers must pass values that
//! are already URL-safe.

use std::collections::HashMap;
use std::fmt;

use crate::error::TemplateError;

/// Builds a URL from a template such as `/api/users/{userId}/posts`.
///
/// ```
/// use rest_builder::EndpointBuilder;
///
/// let url = EndpointBuilder::new("/api/users/{userId}")
///     .path_param("userId", 7)
///     .unwrap()
///     .query_param("page", 2)
///     .build();
/// assert_eq!(url, "/api/users/7?page=2");
/// ```
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    template: String,
    path_params: HashMap<String, String>,
    query_params: Vec<(String, String)>,
}

impl EndpointBuilder {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            path_params: HashMap::new(),
            query_params: Vec::new(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Records a value for the `{key}` placeholder.
    ///
    /// Fails if the template has no such placeholder.
    pub fn path_param(
        mut self,
        key: &str,
        value: impl fmt::Display,
    ) -> Result<Self, TemplateError> {
        let placeholder = format!("{{{key}}}");
        if !self.template.contains(&placeholder) {
            return Err(TemplateError::MissingPlaceholder { placeholder });
        }

        self.path_params.insert(key.to_string(), value.to_string());
        Ok(self)
    }

    /// Records a query parameter. A key added twice keeps its first position
    /// and takes the latest value.
    pub fn query_param(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.query_params.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.query_params.push((key, value)),
        }
        self
    }

    pub fn build(&self) -> String {
        let mut url = self.substitute_path_params();

        if !self.query_params.is_empty() {
            let query = self
                .query_params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        url
    }

    // Single left-to-right pass over the template, so substituted values are
    // never scanned for placeholders themselves. Recorded placeholders are
    // matched literally, longest first, so keys may contain braces.
    fn substitute_path_params(&self) -> String {
        let mut placeholders: Vec<(String, &str)> = self
            .path_params
            .iter()
            .map(|(key, value)| (format!("{{{key}}}"), value.as_str()))
            .collect();
        placeholders.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let mut url = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            url.push_str(&rest[..open]);
            rest = &rest[open..];

            match placeholders.iter().find(|(p, _)| rest.starts_with(p.as_str())) {
                Some((placeholder, value)) => {
                    url.push_str(value);
                    rest = &rest[placeholder.len()..];
                }
                None => {
                    // Not a recorded placeholder; keep the brace and rescan after it.
                    url.push('{');
                    rest = &rest[1..];
                }
            }
        }

        url.push_str(rest);
        url
    }
}

impl fmt::Display for EndpointBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
