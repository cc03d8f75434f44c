use std::fmt;

use crate::error::BindingError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Path text copied as is, e.g. `/travelers/`
    Literal(String),
    /// Current value of the input element with this id
    Param(String),
}

/// Endpoint path relative to the API base, with optional path parameters
///
/// ```rust
/// use contracts::binding::EndpointTemplate;
///
/// let trips = EndpointTemplate::literal("/travelers/")
///     .param("getTripsPesel")
///     .then("/trips");
/// assert_eq!(trips.to_string(), "/travelers/{getTripsPesel}/trips");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EndpointTemplate {
    segments: Vec<Segment>,
}

impl EndpointTemplate {
    pub fn literal(path: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Literal(path.into())],
        }
    }

    pub fn then(mut self, path: impl Into<String>) -> Self {
        self.segments.push(Segment::Literal(path.into()));
        self
    }

    pub fn param(mut self, input_id: impl Into<String>) -> Self {
        self.segments.push(Segment::Param(input_id.into()));
        self
    }

    /// Ids of the input elements this template reads
    pub fn param_ids(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(id) => Some(id.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Build the absolute URL for `base`
    ///
    /// `lookup` returns the current value of an input by id, or `None` when
    /// the element is missing. Values are percent-encoded as a single path
    /// segment; an empty value leaves an empty segment (`/countries/`).
    pub fn resolve<F>(&self, base: &str, mut lookup: F) -> Result<String, BindingError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut url = base.trim_end_matches('/').to_string();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Param(id) => {
                    let value = lookup(id.as_str())
                        .ok_or_else(|| BindingError::MissingParam(id.clone()))?;
                    url.push_str(&urlencoding::encode(&value));
                }
            }
        }
        Ok(url)
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Param(id) => write!(f, "{{{}}}", id)?,
            }
        }
        Ok(())
    }
}
