//! # EduBot Message Rendering
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns conversation messages into terminal text using the Tera templating
//! engine. Templates are compiled once when the renderer is built; rendering
//! a message only evaluates the compiled template against a context holding
//! the message, its level badge and its formatted timestamp.
//!
//! Autoescaping is off. Output is plain terminal text, so quotes and
//! apostrophes in answers are printed as-is.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let renderer = MessageRenderer::new(&config.display)?;
//! for message in session.store().messages() {
//!     println!("{}", renderer.render(message)?);
//! }
//! ```
//!
//! A bot message renders as:
//!
//! ```text
//! EduBot Assistant [High Level]
//! Here's what I found for you:
//!
//!   Explanation: Gravity is a force that pulls objects toward each other. ...
//!   Example: When you drop a ball, gravity pulls it down to Earth. ...
//!   Key Takeaway: Gravity is everywhere in the universe ...
//!   Next Step: Want to explore why astronauts float in space ...
//!   (14:03:27)
//! ```
//!
use crate::conversation::Message;
use crate::core::config::DisplayConfig;
use crate::core::error::{EdubotError, Result};
use anyhow::anyhow;
use tera::{Context, Tera};
use tracing::trace;

const MESSAGE_TEMPLATE_NAME: &str = "message";

const MESSAGE_TEMPLATE: &str = r#"{% if message.role == "student" %}You: {{ message.content }}{% else %}{{ assistant_name }}{% if level_label %} [{{ level_label }}]{% endif %}
{{ message.content }}{% if message.sections %}

  Explanation: {{ message.sections.explanation }}{% if message.sections.example %}
  Example: {{ message.sections.example }}{% endif %}
  Key Takeaway: {{ message.sections.key_takeaway }}
  Next Step: {{ message.sections.next_step }}{% endif %}{% endif %}{% if time %}
  ({{ time }}){% endif %}"#;

/// Timestamp format, matching a locale time string such as `14:03:27`.
const TIME_FORMAT: &str = "%H:%M:%S";

/// Compiled templates plus the display settings they are rendered with.
#[derive(Debug)]
pub struct MessageRenderer {
    tera: Tera,
    assistant_name: String,
    show_timestamps: bool,
}

impl MessageRenderer {
    pub fn new(display: &DisplayConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(MESSAGE_TEMPLATE_NAME, MESSAGE_TEMPLATE)
            .map_err(|e| {
                anyhow!(EdubotError::Template { source: e })
                    .context("Failed to compile the message template")
            })?;
        Ok(Self {
            tera,
            assistant_name: display.assistant_name.clone(),
            show_timestamps: display.show_timestamps,
        })
    }

    /// Renders a single message.
    pub fn render(&self, message: &Message) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", message);
        context.insert("assistant_name", &self.assistant_name);
        context.insert(
            "level_label",
            message.level().map(|level| level.label()).unwrap_or(""),
        );
        let time = if self.show_timestamps {
            message.timestamp().format(TIME_FORMAT).to_string()
        } else {
            String::new()
        };
        context.insert("time", &time);

        trace!("Rendering message #{}", message.id());
        self.tera
            .render(MESSAGE_TEMPLATE_NAME, &context)
            .map_err(|e| {
                anyhow!(EdubotError::Template { source: e })
                    .context(format!("Failed to render message #{}", message.id()))
            })
    }

    /// Renders every message, separated by blank lines.
    pub fn render_all(&self, messages: &[Message]) -> Result<String> {
        let rendered = messages
            .iter()
            .map(|message| self.render(message))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join("\n\n"))
    }
}
