use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
        }
    }
}

/// Method, path (relative to the base URL) and query pairs of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

impl fmt::Display for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// Decoded JSON body. Results conventionally live under `data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseEnvelope(pub Value);

impl ResponseEnvelope {
    /// The `data` array, or nothing when it is absent or not an array.
    pub fn items(&self) -> &[Value] {
        match self.0.get("data") {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Renders the value at a JSON pointer (e.g. `/provider/businessName`).
/// Null and missing fields yield `None`.
pub fn item_text(item: &Value, pointer: &str) -> Option<String> {
    match item.pointer(pointer)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// What a passing check prints: `✅ <headline>: <count>` followed by detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub headline: String,
    pub count: usize,
    pub details: Vec<String>,
}

impl Summary {
    pub fn new(headline: impl Into<String>, count: usize) -> Self {
        Self {
            headline: headline.into(),
            count,
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

pub type Summarizer = Arc<dyn Fn(&ResponseEnvelope) -> Summary + Send + Sync>;

#[derive(Clone)]
pub struct Check {
    pub name: String,
    pub title: String,
    pub request: RequestSpec,
    pub summarize: Summarizer,
}

impl Check {
    pub fn new<F>(name: &str, request: RequestSpec, summarize: F) -> Self
    where
        F: Fn(&ResponseEnvelope) -> Summary + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            title: format!("{} {}", request.method, request.path),
            request,
            summarize: Arc::new(summarize),
        }
    }

    /// Overrides the progress label, which defaults to `METHOD /path`.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    Passed {
        count: usize,
    },
    Failed {
        message: String,
        status: Option<u16>,
        body: Option<Value>,
    },
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    pub outcomes: Vec<CheckOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Passed { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Skipped))
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.outcomes.len()
    }

    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    fn count(&self, pred: impl Fn(&CheckStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
