//! Visual theme and styling.

use console::Style;

/// Styles for scan output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for repository paths (bold).
    pub path: Style,
    /// Style for failure text (red bold).
    pub error: Style,
    /// Style for the scan banner (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            path: Style::new().bold(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            path: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_terminal(no_color: bool) -> Self {
        if !no_color && should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the per-repository output block.
    ///
    /// Failures and plain output share one shape: `<root>: [<error> ]<text>`.
    pub fn format_repo_block(&self, root: &str, text: &str, failure: Option<&str>) -> String {
        let text = text.trim_end();
        match failure {
            Some(err) if text.is_empty() => {
                format!("{}: {}", self.path.apply_to(root), self.error.apply_to(err))
            }
            Some(err) => format!(
                "{}: {} {}",
                self.path.apply_to(root),
                self.error.apply_to(err),
                text
            ),
            None => format!("{}: {}", self.path.apply_to(root), text),
        }
    }
}

/// Check whether colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_block_without_failure() {
        let theme = Theme::plain();
        let block = theme.format_repo_block("/src/app", "On branch main\n\n", None);
        assert_eq!(block, "/src/app: On branch main");
    }

    #[test]
    fn repo_block_with_failure_and_output() {
        let theme = Theme::plain();
        let block = theme.format_repo_block(
            "/src/app",
            "fatal: no remote\n",
            Some("exit status 128"),
        );
        assert_eq!(block, "/src/app: exit status 128 fatal: no remote");
    }

    #[test]
    fn repo_block_with_failure_only() {
        let theme = Theme::plain();
        let block = theme.format_repo_block("/src/app", "", Some("spawn failed"));
        assert_eq!(block, "/src/app: spawn failed");
    }

    #[test]
    fn for_terminal_respects_no_color_flag() {
        let theme = Theme::for_terminal(true);
        assert_eq!(theme.path.apply_to("x").to_string(), "x");
    }
}
