use dialoguer::console::{style, Style, StyledObject};
use dialoguer::theme::Theme;
use std::fmt;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt as tracing_fmt,
    prelude::*,
};

use base::MUSICFLOW_LOGLEVEL;

/// Log lines go to stderr so they never interleave with a rendered page.
pub fn init_logger() {
    let tracing_builder = tracing_subscriber::registry()
        .with(tracing_fmt::layer().with_writer(std::io::stderr));
    if std::env::var(MUSICFLOW_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(MUSICFLOW_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::WARN.into()))
    }
    .init();
}

pub struct DialoguerTheme {
    /// The style for default values
    pub defaults_style: Style,
    /// The style for prompt
    pub prompt_style: Style,
    /// The style for prompt after the answer has been given
    pub prompt_selection_style: Style,
    /// Prompt prefix value and style
    pub prompt_prefix: StyledObject<String>,
    /// Prompt on success prefix value and style
    pub success_prefix: StyledObject<String>,
    /// The style for hints
    pub hint_style: Style,
    /// The style for values on prompt success
    pub values_style: Style,
    /// The style for the highlighted menu entry
    pub active_item_style: Style,
    pub inactive_item_style: Style,
    pub active_item_prefix: StyledObject<String>,
    pub inactive_item_prefix: StyledObject<String>,
}

impl Default for DialoguerTheme {
    fn default() -> Self {
        Self {
            defaults_style: Style::new().for_stderr().cyan(),
            prompt_style: Style::new().for_stderr().bold(),
            prompt_selection_style: Style::new().for_stderr(),
            prompt_prefix: style("  ?".to_string()).for_stderr().magenta(),
            success_prefix: style("  ✓".to_string()).for_stderr().green(),
            hint_style: Style::new().for_stderr().black().bright(),
            values_style: Style::new().for_stderr().green(),
            active_item_style: Style::new().for_stderr().magenta().bold(),
            inactive_item_style: Style::new().for_stderr(),
            active_item_prefix: style("  ▶".to_string()).for_stderr().magenta(),
            inactive_item_prefix: style("   ".to_string()).for_stderr(),
        }
    }
}

impl DialoguerTheme {
    fn prefixed(
        &self,
        f: &mut dyn fmt::Write,
        prefix: &StyledObject<String>,
        style: &Style,
        prompt: &str,
    ) -> fmt::Result {
        if prompt.is_empty() {
            return Ok(());
        }
        write!(f, "{} {} ", prefix, style.apply_to(prompt))
    }
}

impl Theme for DialoguerTheme {
    fn format_prompt(&self, f: &mut dyn fmt::Write, prompt: &str) -> fmt::Result {
        self.prefixed(f, &self.prompt_prefix, &self.prompt_style, prompt)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<&str>,
    ) -> fmt::Result {
        self.prefixed(f, &self.prompt_prefix, &self.prompt_style, prompt)?;
        match default {
            Some(default) => write!(
                f,
                "{} ",
                self.hint_style.apply_to(&format!("({})", default)),
            ),
            None => Ok(()),
        }
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        default: Option<bool>,
    ) -> fmt::Result {
        self.prefixed(f, &self.prompt_prefix, &self.prompt_style, prompt)?;
        write!(f, "{}", self.hint_style.apply_to("(y/n)"))?;
        match default {
            Some(true) => write!(f, " {}", self.defaults_style.apply_to("yes")),
            Some(false) => write!(f, " {}", self.defaults_style.apply_to("no")),
            None => Ok(()),
        }
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        selection: Option<bool>,
    ) -> fmt::Result {
        self.prefixed(
            f,
            &self.success_prefix,
            &self.prompt_selection_style,
            prompt,
        )?;
        match selection {
            Some(b) => write!(
                f,
                "{}",
                self.values_style.apply_to(if b { "yes" } else { "no" })
            ),
            None => Ok(()),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.prefixed(
            f,
            &self.success_prefix,
            &self.prompt_selection_style,
            prompt,
        )?;
        write!(f, "{}", self.values_style.apply_to(sel))
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        self.format_input_prompt_selection(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn fmt::Write,
        text: &str,
        active: bool,
    ) -> fmt::Result {
        if active {
            write!(
                f,
                "{} {}",
                self.active_item_prefix,
                self.active_item_style.apply_to(text)
            )
        } else {
            write!(
                f,
                "{} {}",
                self.inactive_item_prefix,
                self.inactive_item_style.apply_to(text)
            )
        }
    }
}
