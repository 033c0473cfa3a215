use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("arc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Control Arc browser windows from the command line")
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
            Command::new("window")
                .about("Manage windows")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("create")
                        .visible_alias("new")
                        .about("Create a new window")
                        .arg(
                            Arg::new("url")
                                .help("URL to open in the new window")
                                .index(1),
                        )
                        .arg(
                            Arg::new("incognito")
                                .long("incognito")
                                .help("Open in incognito mode")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("focus")
                                .long("focus")
                                .value_name("SUBSTRING")
                                .help("Focus the tab whose title contains this string (case-insensitive)"),
                        ),
                )
                .subcommand(
                    Command::new("close")
                        .visible_aliases(["remove", "rm"])
                        .about("Close windows by id, or the front window when no id is given")
                        .arg(
                            Arg::new("ids")
                                .help("Window ids as shown by 'arc window list'")
                                .num_args(0..)
                                .allow_hyphen_values(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .visible_alias("ls")
                        .about("List windows")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(clap_complete::Shell))
                        .index(1),
                ),
        )
}
