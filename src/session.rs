//! Line-oriented interactive query session.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::SearchTree;

/// One parsed input line. The whole line is lowercased before the prefix is
/// interpreted, so `<Apple` and `<apple` ask the same question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Empty line: end the session
    Quit,
    /// Plain membership test
    Lookup(String),
    /// `<word`: predecessor of `word`
    Predecessor(String),
    /// `>word`: successor of `word`
    Successor(String),
    /// `-word`: remove `word`
    Delete(String),
}

impl Query {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
        if line.is_empty() {
            Query::Quit
        } else if let Some(rest) = line.strip_prefix('<') {
            Query::Predecessor(rest.to_string())
        } else if let Some(rest) = line.strip_prefix('>') {
            Query::Successor(rest.to_string())
        } else if let Some(rest) = line.strip_prefix('-') {
            Query::Delete(rest.to_string())
        } else {
            Query::Lookup(line)
        }
    }
}

/// Answers queries against a tree until an empty line (or end of input) is
/// read. Generic over reader and writer so tests can script a whole session.
pub struct Session<'a> {
    tree: &'a mut SearchTree<String>,
}

impl<'a> Session<'a> {
    pub fn new(tree: &'a mut SearchTree<String>) -> Self {
        Self { tree }
    }

    /// Run the query loop: one response line per query.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "Please enter a word, or hit enter to quit:")?;
        for line in input.lines() {
            let line = line?;
            let query = Query::parse(&line);
            debug!(?query, "answering");
            if query == Query::Quit {
                break;
            }
            self.answer(&query, &mut output)?;
        }
        writeln!(output, "Goodbye!")?;
        Ok(())
    }

    /// Predecessor, successor and delete requests check membership first and
    /// short-circuit to the not-a-valid-word message for absent keys; the
    /// tree's own none-result only ever shows up for present words.
    fn answer<W: Write>(&mut self, query: &Query, output: &mut W) -> std::io::Result<()> {
        match query {
            Query::Quit => Ok(()),
            Query::Lookup(word) => {
                if self.tree.contains(word) {
                    writeln!(output, "\"{word}\" is a valid word.")
                } else {
                    writeln!(output, "\"{word}\" is NOT a valid word.")
                }
            }
            Query::Predecessor(word) => {
                if !self.tree.contains(word) {
                    writeln!(output, "\"{word}\" is NOT a valid word.")
                } else {
                    match self.tree.predecessor(word) {
                        Some(pred) => {
                            writeln!(output, "The predecessor of \"{word}\" is \"{pred}\".")
                        }
                        None => writeln!(output, "\"{word}\" has no predecessor."),
                    }
                }
            }
            Query::Successor(word) => {
                if !self.tree.contains(word) {
                    writeln!(output, "\"{word}\" is NOT a valid word.")
                } else {
                    match self.tree.successor(word) {
                        Some(succ) => {
                            writeln!(output, "The successor of \"{word}\" is \"{succ}\".")
                        }
                        None => writeln!(output, "\"{word}\" has no successor."),
                    }
                }
            }
            Query::Delete(word) => {
                if self.tree.contains(word) && self.tree.remove(word) {
                    writeln!(output, "\"{word}\" was successfully deleted from the tree.")
                } else {
                    writeln!(output, "\"{word}\" is NOT a valid word.")
                }
            }
        }
    }
}
