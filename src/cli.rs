use clap::Parser;

use crate::constants::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::logging::Verbosity;

/// Step through the PLDM firmware update explainer.
///
/// Right/Left arrow keys or the on-screen buttons move between slides,
/// wrapping around at either end. Escape or closing the window quits.
#[derive(Debug, Parser)]
#[command(name = "pldm-explainer", version, about, long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(i32).range(320..))]
    pub width: i32,

    /// Window height in pixels
    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(i32).range(240..))]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Slide to open on (1-based)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub start: Option<u16>,

    /// Print the numbered slide titles and exit
    #[arg(long)]
    pub list: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }

    /// 0-based index of the requested start slide.
    pub fn start_index(&self) -> Option<usize> {
        self.start.map(|n| usize::from(n) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pldm-explainer"]).unwrap();
        assert_eq!(cli.width, WINDOW_WIDTH);
        assert_eq!(cli.height, WINDOW_HEIGHT);
        assert_eq!(cli.fps, FPS);
        assert_eq!(cli.start_index(), None);
        assert!(!cli.list);
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_start_is_one_based() {
        let cli = Cli::try_parse_from(["pldm-explainer", "--start", "3"]).unwrap();
        assert_eq!(cli.start_index(), Some(2));
    }

    #[test]
    fn test_start_zero_is_rejected() {
        assert!(Cli::try_parse_from(["pldm-explainer", "--start", "0"]).is_err());
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["pldm-explainer", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Verbose);
        let cli = Cli::try_parse_from(["pldm-explainer", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Trace);
        let cli = Cli::try_parse_from(["pldm-explainer", "--quiet"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pldm-explainer", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_window_size_lower_bound() {
        assert!(Cli::try_parse_from(["pldm-explainer", "--width", "100"]).is_err());
    }
}
