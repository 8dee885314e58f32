use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("winctl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find, focus, move, and resize desktop windows")
        .long_about("winctl exposes the desktop's top-level windows to scripts: list visible windows, focus one by title pattern or handle, read the foreground window, and move or resize by handle. Every call queries the OS at the moment it runs; nothing is cached between invocations.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List all visible top-level windows with titles")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("focus")
                .about("Focus the first window whose title matches a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("Title pattern (case-insensitive substring by default)")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("regex")
                        .long("regex")
                        .short('r')
                        .help("Treat the pattern as a case-insensitive regular expression")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("focus-handle")
                .about("Focus a window by its handle")
                .arg(
                    Arg::new("handle")
                        .help("Window handle from 'list' or 'active'")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(u64))
                )
        )
        .subcommand(
            Command::new("active")
                .about("Show the current foreground window")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("move")
                .about("Move a window's top-left corner to (x, y) in screen coordinates")
                .arg(
                    Arg::new("handle")
                        .help("Window handle from 'list' or 'active'")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(u64))
                )
                .arg(
                    Arg::new("x")
                        .help("New x coordinate (may be negative on multi-monitor setups)")
                        .required(true)
                        .index(2)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(i32))
                )
                .arg(
                    Arg::new("y")
                        .help("New y coordinate")
                        .required(true)
                        .index(3)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(i32))
                )
        )
        .subcommand(
            Command::new("resize")
                .about("Set a window's outer size, preserving its position")
                .arg(
                    Arg::new("handle")
                        .help("Window handle from 'list' or 'active'")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(u64))
                )
                .arg(
                    Arg::new("width")
                        .help("New outer width (passed to the OS uninterpreted)")
                        .required(true)
                        .index(2)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(i32))
                )
                .arg(
                    Arg::new("height")
                        .help("New outer height")
                        .required(true)
                        .index(3)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(i32))
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}
