//! Command-line presentation adapter for the note store.
//!
//! # Responsibility
//! - Translate user intent (subcommands) into store operations.
//! - Re-render the full note sequence after every mutation.
//!
//! # Invariants
//! - All rendering stays on this side of the boundary; the core never prints.
//! - Mutations never fail user-visibly; unknown ids render the unchanged list.

use clap::{Parser, Subcommand};
use notekeep_core::{default_log_level, init_logging, ColorTag, Note, NoteId, NoteStore, PALETTE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notekeep", version, about = "Sticky notes on the command line")]
struct Cli {
    /// Directory holding the persisted note blob.
    #[arg(long, default_value = ".")]
    store_dir: PathBuf,

    /// Enable rolling file logs in the given directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a note. Skipped when both title and text are empty.
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Replace title and text of an existing note.
    Edit {
        id: NoteId,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Change the color tag of an existing note.
    Recolor {
        id: NoteId,
        #[arg(value_parser = parse_color)]
        color: ColorTag,
    },
    /// Remove a note.
    Delete { id: NoteId },
    /// Show all notes.
    List,
}

fn parse_color(value: &str) -> Result<ColorTag, String> {
    ColorTag::from_name(value).ok_or_else(|| {
        let palette = PALETTE
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join("|");
        format!("unknown color `{value}`; expected one of {palette}")
    })
}

fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
            eprintln!("warning: {err}");
        }
    }

    let mut store = NoteStore::open(&cli.store_dir);

    match cli.command {
        Commands::Add { title, text } => {
            if store.create(&title, &text).is_none() {
                eprintln!("nothing to add: both title and text are empty");
            }
        }
        Commands::Edit { id, title, text } => store.update(id, &title, &text),
        Commands::Recolor { id, color } => store.recolor(id, color),
        Commands::Delete { id } => store.delete(id),
        Commands::List => {}
    }

    render(store.notes());
}

/// Full re-draw of the note grid, one card per line.
fn render(notes: &[Note]) {
    if notes.is_empty() {
        println!("no notes yet");
        return;
    }
    for note in notes {
        if note.title.is_empty() {
            println!("[{}] ({}) {}", note.id, note.color, note.text);
        } else {
            println!("[{}] ({}) {}: {}", note.id, note.color, note.title, note.text);
        }
    }
}
