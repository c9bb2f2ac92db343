//! Terminal detection for UI decisions.

use std::io::IsTerminal;

use super::mode::OutputMode;

#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from the environment and CLI flags.
    ///
    /// Color is off when stdout is not a TTY, `NO_COLOR` is set,
    /// `--no-color` was passed or `TERM=dumb`.
    pub fn from_env(
        json_flag: bool,
        format_flag: Option<&str>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = term_is_dumb();
        let color = is_tty
            && !no_color_flag
            && std::env::var_os("NO_COLOR").is_none()
            && !term_is_dumb;

        Self {
            color,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format_flag, is_tty, term_is_dumb),
        }
    }

    /// Context for messages written to stderr before flags are known.
    pub fn for_stderr() -> Self {
        let is_tty = std::io::stderr().is_terminal();
        let term_is_dumb = term_is_dumb();
        Self {
            color: is_tty && std::env::var_os("NO_COLOR").is_none() && !term_is_dumb,
            unicode: true,
            width: 80,
            mode: OutputMode::resolve(false, None, is_tty, term_is_dumb),
        }
    }

    /// Whether prompts may be shown.
    pub fn is_interactive() -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

fn term_is_dumb() -> bool {
    std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false)
}

fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize.
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
