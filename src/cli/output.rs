//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{FriendNetArgs, OutputFormat};
use crate::edits::generator::EditKind;
use crate::error::Result;

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Render for people.
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Render one value per line.
    fn write_plain<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

/// Result structure for closure runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClosureReport {
    pub seed: String,
    pub dictionary_size: usize,
    pub friend_count: usize,
    pub expansions: usize,
    pub candidates: usize,
    pub dictionary_hits: usize,
    pub max_queue_depth: usize,
    pub duration_ms: u64,
    pub workers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<String>>,
}

/// A single candidate line.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateEntry {
    pub kind: EditKind,
    pub position: usize,
    pub word: String,
}

/// Result structure for candidate listings.
#[derive(Debug, Serialize, Deserialize)]
pub struct EditsReport {
    pub word: String,
    pub alphabet: String,
    pub dictionary_filtered: bool,
    pub candidates: Vec<CandidateEntry>,
}

/// Result structure for friendship checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckReport {
    pub first: String,
    pub second: String,
    pub friends: bool,
    pub distance: usize,
}

impl Report for ClosureReport {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Friend Network of '{}':", self.seed)?;
        writeln!(out, "════════════════════")?;
        writeln!(out, "Friends found: {}", self.friend_count)?;
        writeln!(out, "Dictionary size: {}", self.dictionary_size)?;
        writeln!(out, "Expansions: {}", self.expansions)?;
        writeln!(out, "Candidates generated: {}", self.candidates)?;
        writeln!(out, "Dictionary hits: {}", self.dictionary_hits)?;
        writeln!(out, "Max queue depth: {}", self.max_queue_depth)?;
        if self.workers > 1 {
            writeln!(out, "Workers: {}", self.workers)?;
        }
        writeln!(out, "Time: {}ms", self.duration_ms)?;

        if let Some(friends) = &self.friends {
            writeln!(out)?;
            writeln!(out, "Friends:")?;
            writeln!(out, "───────")?;
            for word in friends {
                writeln!(out, "  {word}")?;
            }
        }
        Ok(())
    }

    fn write_plain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.friends {
            Some(friends) => {
                for word in friends {
                    writeln!(out, "{word}")?;
                }
            }
            None => writeln!(out, "{}", self.friend_count)?,
        }
        Ok(())
    }
}

impl Report for EditsReport {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let label = if self.dictionary_filtered {
            "Friends"
        } else {
            "Candidates"
        };
        writeln!(out, "{label} of '{}' ({}):", self.word, self.candidates.len())?;
        for entry in &self.candidates {
            writeln!(
                out,
                "  {:<12} @{:<3} {}",
                format!("{:?}", entry.kind).to_lowercase(),
                entry.position,
                entry.word
            )?;
        }
        Ok(())
    }

    fn write_plain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for entry in &self.candidates {
            writeln!(out, "{}", entry.word)?;
        }
        Ok(())
    }
}

impl Report for CheckReport {
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.friends {
            writeln!(out, "'{}' and '{}' are friends", self.first, self.second)
        } else {
            writeln!(
                out,
                "'{}' and '{}' are not friends (edit distance {})",
                self.first, self.second, self.distance
            )
        }
    }

    fn write_plain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.friends)
    }
}

/// Output a result to stdout in the format selected on the command line.
pub fn output_result<T: Report>(result: &T, args: &FriendNetArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)
}

/// Write a result in the given format.
pub fn write_result<T: Report, W: Write>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Plain => result.write_plain(out)?,
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *out, result)?;
            } else {
                serde_json::to_writer(&mut *out, result)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
