use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use super::list::{InsertOutcome, SkipList};

/// Separator between the key and value tokens of a persisted record.
///
/// The textual encodings of keys and values must not contain this character;
/// the format has no escaping.
pub const DELIMITER: char = ':';

/// What a [`SkipList::load`] call did, line by line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Records inserted as new entries
    pub inserted: usize,
    /// Records whose key was already present (left untouched)
    pub duplicates: usize,
    /// Lines that were empty, missing the delimiter, or failed to parse
    pub skipped: usize,
}

/// Parses one persisted line into a key and value.
///
/// A line is accepted only if it is non-empty and contains [`DELIMITER`];
/// it is split on the first occurrence, and both tokens must parse.
fn parse_record<K: FromStr, V: FromStr>(line: &str) -> Option<(K, V)> {
    if line.is_empty() {
        return None;
    }
    let (key_token, value_token) = line.split_once(DELIMITER)?;
    let key = key_token.parse().ok()?;
    let value = value_token.parse().ok()?;
    Some((key, value))
}

impl<K, V> SkipList<K, V>
where
    K: Ord + Display + FromStr,
    V: Display + FromStr,
{
    /// Writes every entry to `writer` as `<key>:<value>` lines, in ascending
    /// key order (a level-0 traversal). Returns the number of records
    /// written.
    ///
    /// The stream carries no header, checksum or end marker; it is exactly
    /// one line per entry.
    pub fn dump<W: Write>(&self, mut writer: W) -> io::Result<usize> {
        let mut written = 0;
        for (key, value) in self.iter() {
            writeln!(writer, "{}{}{}", key, DELIMITER, value)?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }

    /// Reads `<key>:<value>` lines from `reader` and inserts each record.
    ///
    /// Loading is purely additive: existing entries are never cleared and a
    /// record whose key is already present is a no-op, so loading the same
    /// snapshot twice leaves the list unchanged. Malformed lines are skipped
    /// and counted, not surfaced as errors; only real I/O failures propagate.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<LoadStats> {
        let mut stats = LoadStats::default();
        for line in reader.lines() {
            let line = line?;
            match parse_record(&line) {
                Some((key, value)) => match self.insert(key, value) {
                    InsertOutcome::Inserted => stats.inserted += 1,
                    InsertOutcome::AlreadyExists => stats.duplicates += 1,
                },
                None => stats.skipped += 1,
            }
        }
        Ok(stats)
    }

    /// Dumps the list to the file at `path`, truncating any previous
    /// contents.
    pub fn dump_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<usize> {
        let file = File::create(path)?;
        self.dump(BufWriter::new(file))
    }

    /// Loads records from the file at `path`.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> io::Result<LoadStats> {
        let file = File::open(path)?;
        self.load(BufReader::new(file))
    }
}
