use anstyle::AnsiColor;
use anstyle::Style;
use colog::format::CologStyle;
use log::Level;
use prismscpfe_lib::constants::style_from_fg;

/// The `colog` tokens of `prismscpfe`.
///
/// In script mode the output usually ends up in a job log, so the levels
/// are written without any colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTokens {
    /// Never emit ANSI escapes.
    pub plain: bool,
}

impl LogTokens {
    /// The style of a level, or no style at all for plain output.
    fn style(&self, level: &Level) -> Style {
        if self.plain {
            return Style::new();
        }

        match level {
            Level::Error => style_from_fg(AnsiColor::Red).bold(),
            Level::Warn => style_from_fg(AnsiColor::Yellow),
            Level::Info => style_from_fg(AnsiColor::Green),
            Level::Debug => style_from_fg(AnsiColor::Blue),
            Level::Trace => style_from_fg(AnsiColor::Magenta),
        }
    }
}

impl CologStyle for LogTokens {
    fn level_token(&self, level: &Level) -> &str {
        match *level {
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }

    fn prefix_token(&self, level: &Level) -> String {
        format!("{}:", self.level_color(level, self.level_token(level)))
    }

    fn level_color(&self, level: &Level, msg: &str) -> String {
        let style = self.style(level);

        format!("{style}{msg}{style:#}")
    }
}

#[cfg(test)]
#[path = "tests/log.rs"]
mod tests;
