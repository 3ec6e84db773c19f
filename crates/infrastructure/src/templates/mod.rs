//! Template engine for the web pages
//!
//! Uses Tera with templates embedded at compile time. HTML auto-escaping is
//! always on, so place names typed by users are rendered inert.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{StopPageData, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_error("Page not found.")?;
//! ```

use domain::value_objects::StopResult;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Data for the result page
#[derive(Debug, Clone, Serialize)]
pub struct StopPageData {
    /// Place name as entered
    pub place_name: String,
    /// Nearest stop name
    pub stop_name: String,
    /// Derived accessibility flag
    pub wheelchair_accessible: bool,
    /// Label of the three-valued boarding status
    pub wheelchair_boarding: String,
}

impl StopPageData {
    /// Build page data from a lookup result
    #[must_use]
    pub fn new(place_name: &str, stop: &StopResult) -> Self {
        Self {
            place_name: place_name.to_string(),
            stop_name: stop.stop_name().to_string(),
            wheelchair_accessible: stop.wheelchair_accessible(),
            wheelchair_boarding: stop.wheelchair_boarding().label().to_string(),
        }
    }
}

/// Embedded template sources
mod embedded {
    pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}Nearest MBTA Stop{% endblock title %}</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 3rem auto; padding: 0 1rem; }
        .error { color: #a00; }
        .accessible { color: #060; }
        .not-accessible { color: #a00; }
    </style>
</head>
<body>
{% block content %}{% endblock content %}
</body>
</html>
"#;

    pub const INDEX: &str = r#"{% extends "base.html" %}
{% block content %}
<h1>Find the nearest MBTA stop</h1>
<form action="/nearest_mbta" method="post">
    <label for="place_name">Place name or address</label>
    <input type="text" id="place_name" name="place_name" placeholder="Boston Common" required>
    <button type="submit">Search</button>
</form>
{% endblock content %}
"#;

    pub const STOP: &str = r#"{% extends "base.html" %}
{% block title %}{{ stop_name }} - Nearest MBTA Stop{% endblock title %}
{% block content %}
<h1>Nearest MBTA stop</h1>
<p>Closest stop to <strong>{{ place_name }}</strong>:</p>
<h2>{{ stop_name }}</h2>
{% if wheelchair_accessible %}
<p class="accessible">Wheelchair accessible</p>
{% else %}
<p class="not-accessible">Not wheelchair accessible ({{ wheelchair_boarding }})</p>
{% endif %}
<p><a href="/">Search again</a></p>
{% endblock content %}
"#;

    pub const ERROR: &str = r#"{% extends "base.html" %}
{% block title %}Error - Nearest MBTA Stop{% endblock title %}
{% block content %}
<h1>Something went wrong</h1>
<p class="error">{{ error_message }}</p>
<p><a href="/">Back to search</a></p>
{% endblock content %}
"#;
}

/// Template engine for rendering the web pages
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("base.html", embedded::BASE),
            ("index.html", embedded::INDEX),
            ("stop.html", embedded::STOP),
            ("error.html", embedded::ERROR),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!("Template engine initialized");
        Ok(Self { tera })
    }

    /// Render a template by name
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render the search form
    pub fn render_index(&self) -> Result<String, TemplateError> {
        self.render("index.html", &TemplateContext::new())
    }

    /// Render the result page
    pub fn render_stop(&self, data: &StopPageData) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("place_name", &data.place_name);
        ctx.insert("stop_name", &data.stop_name);
        ctx.insert("wheelchair_accessible", &data.wheelchair_accessible);
        ctx.insert("wheelchair_boarding", &data.wheelchair_boarding);
        self.render("stop.html", &ctx)
    }

    /// Render the error page with `message`
    pub fn render_error(&self, message: &str) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("error_message", message);
        self.render("error.html", &ctx)
    }
}
