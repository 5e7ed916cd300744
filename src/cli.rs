use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Georgian Sport Backgammon Federation Portal
///
/// A terminal client for the federation's content API. Each subcommand
/// renders one page: tournaments, calendar, news, champions, leaderboard,
/// partners, federations and the static text pages.
///
/// Content is bilingual; pass `--lang en` for one invocation or persist a
/// preference with `nardi-portal lang en`. Unset or unrecognized
/// preferences fall back to Georgian.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Override the display language for this invocation (en or ka-GE)
    #[arg(long = "lang", global = true, value_name = "TAG")]
    pub lang: Option<String>,

    /// Log to the terminal as well as the log file
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Write logs to a custom file instead of the default location
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Front page: hero banners, latest news and the current leaderboard
    Home,

    /// Current (non-archived) tournaments, newest first
    Tournaments,

    /// Archived tournaments grouped by year
    Archive,

    /// One tournament by its document id
    Tournament { document_id: String },

    /// All calendar events across tournaments
    Calendar {
        /// Keep only events whose name contains this text
        #[arg(long)]
        search: Option<String>,
        /// Show only finished events
        #[arg(long, conflicts_with = "upcoming")]
        finished: bool,
        /// Show only upcoming events
        #[arg(long)]
        upcoming: bool,
        /// Search events as you type instead of printing once
        #[arg(short, long, conflicts_with = "search")]
        interactive: bool,
    },

    /// One calendar event with its results link
    Event { id: i64 },

    /// The news feed, newest first
    News {
        /// Keep only posts whose title contains this text
        #[arg(long)]
        search: Option<String>,
        /// Show only posts published on this day (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        day: Option<String>,
        /// Search posts as you type instead of printing once
        #[arg(short, long, conflicts_with = "search")]
        interactive: bool,
    },

    /// One news post by its document id
    Post { document_id: String },

    /// Champions history, contestants by year
    Champions,

    /// Top standings of a tournament (latest by default)
    Leaderboard {
        /// Document id of the tournament to rank
        #[arg(long, value_name = "DOCUMENT_ID")]
        tournament: Option<String>,
    },

    /// Partner organizations
    Partners,

    /// Member federations
    Federations,

    /// One member federation by its document id
    Federation { document_id: String },

    /// Hero banner image URLs
    Heroes,

    /// Photo gallery image URLs
    Gallery,

    /// Game rules (pass --long for the extended version)
    Rules {
        #[arg(long = "long")]
        long_version: bool,
    },

    /// How tournament points are scored
    Points,

    /// International activities
    International,

    /// Contact details from the site footer
    Footer,

    /// Send a message to the federation
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },

    /// Print the content manager console URL
    Admin,

    /// Show or persist the display language preference
    Lang {
        /// Language tag to persist (en or ka-GE); omit to show the current one
        tag: Option<String>,
    },

    /// Inspect or update configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the current configuration and where it lives
    Show,
    /// Set the content API base URL
    SetUrl { url: String },
    /// Set a persistent custom log file path
    SetLogFile { path: String },
    /// Clear the custom log file path
    ClearLogFile,
}
