use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use memoriter::{Level, LineLayout};
use versetype::book::Book;
use versetype::config::Settings;
use versetype::location::Range;
use versetype::session::{Session, SessionStore, Strategy};
use versetype::source::SourceDescription;

/// Verse-memorization typing practice sessions
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// override the configuration directory
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// manage practice sessions
    #[clap(subcommand)]
    Session(SessionCommand),

    /// lay out passage text from stdin and print the line spans
    Preview {
        /// maximum characters per line
        #[clap(short, long)]
        width: Option<usize>,
    },

    /// list the available passage sources
    Sources,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// create a session for one chapter
    New {
        name: String,

        /// book short name, e.g. "Phil"
        #[clap(short, long)]
        book: String,

        #[clap(short, long)]
        chapter: u16,

        /// difficulty level, 0 (guided) to 4 (full recall)
        #[clap(short, long, default_value_t = 0)]
        level: u8,

        /// practice strategy
        #[clap(short, long, default_value = "simple")]
        strategy: String,
    },

    /// list stored sessions
    List,

    /// delete a session by name
    Delete { name: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = Settings::get(cli.config)?;

    match cli.command {
        Command::Session(command) => run_session_command(command, &settings)?,
        Command::Preview { width } => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            preview(&text, width.unwrap_or(settings.line_width));
        }
        Command::Sources => {
            for SourceDescription { name, url } in available_sources() {
                match url {
                    Some(url) => println!("{name} ({url})"),
                    None => println!("{name}"),
                }
            }
        }
    }

    Ok(())
}

fn run_session_command(command: SessionCommand, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let store = match &settings.data_dir {
        Some(dir) => SessionStore::open(dir),
        None => SessionStore::open_default()?,
    };

    match command {
        SessionCommand::New {
            name,
            book,
            chapter,
            level,
            strategy,
        } => {
            let session = Session {
                name,
                range: Range::chapter(&settings.translation, Book::from_short_name(&book)?, chapter),
                level: Level::try_from(level)?,
                strategy: Strategy::from_str(&strategy)?,
            };
            store.create(session)?;
        }
        SessionCommand::List => {
            for session in store.list()? {
                let start = &session.range.start;
                println!(
                    "{}: {} {} ({}) level {} strategy {}",
                    session.name,
                    start.book,
                    start.chapter,
                    start.translation,
                    session.level,
                    session.strategy,
                );
            }
        }
        SessionCommand::Delete { name } => store.delete(&name)?,
    }

    Ok(())
}

/// Prints each computed line span followed by its text, so layout changes
/// can be inspected without a frontend.
fn preview(text: &str, width: usize) {
    let chars: Vec<char> = text.chars().collect();
    for line in LineLayout::new(width).layout(text) {
        let content: String = chars[line.index..line.end()].iter().collect();
        println!("{:>4} {:>3} |{}", line.index, line.length, content.trim_end());
    }
}

fn available_sources() -> Vec<SourceDescription> {
    vec![
        SourceDescription {
            name: "In-memory corpus",
            url: None,
        },
        SourceDescription {
            name: "Blue Letter Bible",
            url: Some("https://www.blueletterbible.org/tools/MultiVerse.cfm"),
        },
    ]
}
