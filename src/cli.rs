//! Command-line surface for xvbox.
//!
//! Window IDs are matched against the canonical form the program itself
//! generates (lowercase hex with a `0x` prefix), so callers should supply
//! them that way, e.g. as printed by `xwininfo` or `xdotool`.

use clap::Parser;

/// xvbox - stack existing X11 windows into a vertical container
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Window IDs to reparent, as 0x-prefixed lowercase hex (e.g. 0x3e00001)
    #[arg(value_name = "WINDOW_ID")]
    pub windows: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_window_ids_parse() {
        // The usage error for an empty list is reported by main() after the
        // container window exists, not by the parser.
        let cli = Cli::try_parse_from(["xvbox"]).unwrap();
        assert!(cli.windows.is_empty());
    }

    #[test]
    fn test_window_ids_keep_argument_order() {
        let cli = Cli::try_parse_from(["xvbox", "0x3e00002", "0x3e00001"]).unwrap();
        assert_eq!(cli.windows, vec!["0x3e00002", "0x3e00001"]);
    }
}
