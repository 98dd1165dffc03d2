use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "cli-ui")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Colored terminal messages, prompts and tables", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (also enables debug messages)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Hide everything except warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ModeArg::Auto, global = true)]
    pub color: ModeArg,

    /// When to update the terminal title
    #[arg(long, value_enum, default_value_t = ModeArg::Auto, global = true)]
    pub title: ModeArg,

    /// Prefix every message with a time stamp
    #[arg(long, global = true)]
    pub timestamp: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every message style, then ask for a fruit
    Demo {
        /// Pause between messages, in milliseconds
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },

    /// Print every named color
    TestColors,

    /// Count up and down from two threads sharing one UI
    Threads {
        /// Where to start counting down (and stop counting up)
        #[arg(long, default_value_t = 4)]
        count: u32,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Auto,
    Always,
    Never,
}

impl From<ModeArg> for cliui::Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => Self::Auto,
            ModeArg::Always => Self::Always,
            ModeArg::Never => Self::Never,
        }
    }
}
