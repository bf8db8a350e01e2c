//! Line-oriented front-end for the tracker.
//!
//! Thin by design: parses one command per line, calls the session, and
//! reprints the tally. Key formatting, sort order, and merge semantics
//! all live in the engine.

use crate::error::Result;
use binder_engine::{CardLookup, Error, Session, Variant};
use std::io::{self, BufRead, Write};

/// The interactive command loop.
pub struct Ui<L> {
    session: Session<L>,
    current_set: String,
}

impl<L: CardLookup> Ui<L> {
    /// Create a UI over a session, starting on the given set code.
    pub fn new(session: Session<L>, default_set: String) -> Self {
        Self {
            session,
            current_set: default_set,
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        self.print_help();
        loop {
            write!(stdout, "binder [{}]> ", self.current_set)?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // end of input
            }
            if !self.dispatch(line.trim()) {
                break;
            }
        }
        Ok(())
    }

    /// Handle one command line. Returns false when the loop should end.
    fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "add" => self.cmd_add(rest),
            "remove" | "rm" => self.cmd_remove(rest),
            "list" | "ls" => self.render(),
            "set" => self.cmd_set(rest),
            "sets" => self.cmd_sets(),
            "export" => self.cmd_export(rest),
            "import" => self.cmd_import(rest),
            "help" => self.print_help(),
            "quit" | "exit" => return false,
            other => println!("Unknown command '{}'. Try 'help'.", other),
        }
        true
    }

    fn cmd_add(&mut self, args: &str) {
        let mut parts = args.split_whitespace();
        let number = match parts.next() {
            Some(number) => number,
            None => return, // ignore empty input
        };
        let variant = match parts.next() {
            None => Variant::Standard,
            Some(raw) => match parse_variant(raw) {
                Some(variant) => variant,
                None => {
                    println!(
                        "Unknown variant '{}'. Choose Holo, Reverse or Standard.",
                        raw
                    );
                    return;
                }
            },
        };

        match self.session.add_entry(&self.current_set, number, variant) {
            Ok((key, count)) => {
                println!("{}: {}", key, count);
                self.render();
            }
            Err(Error::NotFound { id }) => {
                println!("Could not find card ID {}.", id);
            }
            Err(e) => println!("Card lookup failed: {}", e),
        }
    }

    fn cmd_remove(&mut self, args: &str) {
        let index: usize = match args.parse() {
            Ok(index) if index >= 1 => index,
            _ => {
                println!("Usage: remove <line number>");
                return;
            }
        };

        let labels: Vec<String> = self
            .session
            .snapshot()
            .map(|(key, _)| key.canonical())
            .collect();
        match labels.get(index - 1) {
            Some(label) => {
                self.session.remove_entry(label);
                self.render();
            }
            None => println!("No line {} in the listing.", index),
        }
    }

    fn cmd_set(&mut self, args: &str) {
        if args.is_empty() {
            println!("Current set: {}", self.current_set);
            return;
        }
        match self.session.catalog().code_for(args) {
            Some(code) => {
                let code = code.to_string();
                println!("Set changed to {} ({}).", args, code);
                self.current_set = code;
            }
            None => {
                // Not a catalog name; take the input as a raw set code.
                self.current_set = args.to_string();
                println!("Using '{}' as a set code.", self.current_set);
            }
        }
    }

    fn cmd_sets(&self) {
        if self.session.catalog().is_empty() {
            println!("Set catalog is not available.");
            return;
        }
        for name in self.session.catalog().names() {
            println!("{}", name);
        }
    }

    fn cmd_export(&self, path: &str) {
        if path.is_empty() {
            return; // no path chosen, nothing to do
        }
        if self.session.inventory().is_empty() {
            println!("No data to export.");
            return;
        }
        match self.session.export_to(path) {
            Ok(()) => println!("Exported to {}", path),
            Err(e) => println!("Export failed: {}", e),
        }
    }

    fn cmd_import(&mut self, path: &str) {
        if path.is_empty() {
            return; // no path chosen, nothing to do
        }
        match self.session.import_from(path) {
            Ok(report) => {
                println!("Imported {} rows from {}", report.imported, path);
                for skipped in &report.skipped {
                    println!(
                        "  skipped row {}: {} ({})",
                        skipped.row, skipped.content, skipped.reason
                    );
                }
                self.render();
            }
            Err(e) => println!("Import failed: {}", e),
        }
    }

    fn render(&self) {
        for (index, (key, count)) in self.session.snapshot().enumerate() {
            println!("{:>3}. {}: {}", index + 1, key, count);
        }
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  add <number> [holo|reverse|standard]   tally a card (default standard)");
        println!("  remove <line>                          drop one copy of a listed entry");
        println!("  list                                   show the tally");
        println!("  set [name or code]                     show or change the current set");
        println!("  sets                                   list known sets");
        println!("  export <path>                          write the tally as CSV");
        println!("  import <path>                          merge a CSV file into the tally");
        println!("  quit                                   leave");
    }
}

/// Map user input onto a variant, case-insensitively.
fn parse_variant(raw: &str) -> Option<Variant> {
    Variant::ALL
        .into_iter()
        .find(|variant| variant.as_str().eq_ignore_ascii_case(raw))
}
