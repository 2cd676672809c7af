//! Script driver: reads a command script line by line, keeps a current
//! position into the album tree and dispatches to the tree operations.

use std::io::{BufRead, Write};

use generational_arena::Index;
use tracing::{debug, instrument, warn};

use crate::album::{AlbumTree, Removal};
use crate::config::Settings;
use crate::errors::{ScriptError, ScriptResult};
use crate::render::render_markers;
use crate::script::{parse_line, Command};

/// Executes a command script against a single album tree.
///
/// Stdout discipline: the output writer receives only the echo of every
/// raw input line (prefixed with `echo_tabs` tab characters) and the
/// `Display` dumps. Diagnostics go through tracing to stderr, so captured
/// output stays byte-stable.
pub struct ScriptRunner {
    tree: AlbumTree,
    current: Index,
    settings: Settings,
}

impl ScriptRunner {
    /// Create a runner over a fresh tree whose root set is `root_name`,
    /// with default settings.
    pub fn new(root_name: &str) -> Self {
        Self::with_settings(root_name, Settings::default())
    }

    pub fn with_settings(root_name: &str, settings: Settings) -> Self {
        let tree = AlbumTree::new(root_name);
        let current = tree.root();
        Self {
            tree,
            current,
            settings,
        }
    }

    pub fn tree(&self) -> &AlbumTree {
        &self.tree
    }

    /// The driver's current position: where Add operations attach and
    /// where Remove starts searching.
    pub fn current(&self) -> Index {
        self.current
    }

    /// Read commands from `input` until `Quit`, writing echoes and
    /// `Display` dumps to `out`.
    ///
    /// Malformed lines and illegal structural operations are warned about
    /// and skipped; the tree and current position are untouched by them.
    /// Running out of input before `Quit` is an error.
    #[instrument(level = "debug", skip(self, input, out))]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> ScriptResult<()> {
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            writeln!(out, "{}{}", "\t".repeat(self.settings.echo_tabs), line)?;

            let command = match parse_line(&line, idx + 1) {
                Ok(command) => command,
                Err(e) => {
                    warn!("{}", e);
                    continue;
                }
            };
            debug!(?command, "dispatch");

            match command {
                Command::Quit => return Ok(()),
                other => self.execute(other, out)?,
            }
        }
        Err(ScriptError::MissingQuit)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> ScriptResult<()> {
        match command {
            Command::AddSet(name) => match self.tree.add_set(self.current, &name) {
                // A new set becomes the current position
                Ok(idx) => self.current = idx,
                Err(e) => warn!("AddSet {}: {}", name, e),
            },
            Command::AddPhoto(name) => {
                if let Err(e) = self.tree.add_photo(self.current, &name) {
                    warn!("AddPhoto {}: {}", name, e);
                }
            }
            Command::Remove(name) => {
                // Matches below the current position win; the rest of the
                // tree is searched from the root when there is none.
                let root = self.tree.root();
                let outcome = self
                    .tree
                    .remove_from(self.current, &name)
                    .and_then(|removal| match removal {
                        Removal::NotFound if self.current != root => {
                            self.tree.remove_from(root, &name)
                        }
                        other => Ok(other),
                    });
                match outcome {
                    Ok(Removal::Removed { parent }) => self.current = parent,
                    Ok(Removal::NotFound) => warn!("Remove {}: no such node", name),
                    Err(e) => warn!("Remove {}: {}", name, e),
                }
            }
            Command::Find(name) => {
                // Find always searches from the root
                self.current = match self.tree.find(&name) {
                    Some(m) => m.node,
                    None => {
                        warn!("Find {}: no such node, back to root", name);
                        self.tree.root()
                    }
                };
            }
            Command::Display => {
                write!(out, "{}", render_markers(&self.tree, &self.settings))?;
                writeln!(out)?;
            }
            Command::Quit => unreachable!("Quit terminates the loop in run()"),
        }
        Ok(())
    }
}
