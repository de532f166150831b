use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use atomicwrites::{AtomicFile, OverwriteBehavior};
use log::{debug, error, warn};

use crate::common::ScoreType;
use crate::core::posting_list::{PostingList, PostingListError};
use crate::RowId;

/// Upper bound for the reservation made from the header, the list grows past it while reading.
const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Plain-text posting list layout:
///
/// ```text
/// 3          <- number of postings
/// 2 5        <- <row_id><whitespace><score>, row_id strictly increasing
/// 3 1
/// 6 2
/// ```
///
/// Reading stops after the declared number of postings, anything after them is ignored with a
/// warning. Blank lines are skipped.
impl PostingList {
    /// Reads a posting list from `path` and attaches the sentinel.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<PostingList, PostingListError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            error!("Couldn't open posting list file {:?}: {}", path, e);
            PostingListError::Io(e)
        })?;
        let posting = Self::read_from(BufReader::new(file))?;
        debug!("Read posting list {:?}, size: {}", path, posting.size());
        Ok(posting)
    }

    /// Reads a posting list from any buffered source and attaches the sentinel.
    pub fn read_from<R: BufRead>(reader: R) -> Result<PostingList, PostingListError> {
        Self::parse(reader).map_err(|e| {
            error!("Failed to read posting list: {}", e);
            e
        })
    }

    /// Writes the live postings (never the sentinel), replacing `path` atomically.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), PostingListError> {
        let path = path.as_ref();
        let af = AtomicFile::new(path, OverwriteBehavior::AllowOverwrite);
        af.write(|f| self.write_to(BufWriter::new(f))).map_err(|e| {
            error!("Failed to write posting list {:?}: {}", path, e);
            match e {
                atomicwrites::Error::Internal(io_error) => PostingListError::Io(io_error),
                atomicwrites::Error::User(posting_error) => posting_error,
            }
        })
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), PostingListError> {
        writeln!(writer, "{}", self.size())?;
        for posting in self.postings() {
            writeln!(writer, "{} {}", posting.row_id, posting.score)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn parse<R: BufRead>(reader: R) -> Result<PostingList, PostingListError> {
        let mut lines = reader.lines().enumerate().map(|(idx, line)| (idx + 1, line));

        let declared = loop {
            match lines.next() {
                None => return Err(PostingListError::MissingHeader),
                Some((line_no, line)) => {
                    let line = line?;
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    break trimmed.parse::<usize>().map_err(|e| PostingListError::MalformedLine {
                        line: line_no,
                        reason: format!("invalid posting count '{}': {}", trimmed, e),
                    })?;
                }
            }
        };

        let mut posting = PostingList::with_capacity(declared.min(MAX_INITIAL_CAPACITY));
        while posting.size() < declared {
            let (line_no, line) = match lines.next() {
                Some((line_no, line)) => (line_no, line?),
                None => return Err(PostingListError::TruncatedInput { declared, read: posting.size() }),
            };
            let mut fields = line.split_whitespace();
            let (row_id, score) = match (fields.next(), fields.next(), fields.next()) {
                (None, _, _) => continue,
                (Some(row_id), Some(score), None) => (parse_field::<RowId>(row_id, "row_id", line_no)?, parse_field::<ScoreType>(score, "score", line_no)?),
                (Some(_), None, _) => {
                    return Err(PostingListError::MalformedLine { line: line_no, reason: "expected '<row_id> <score>', score is missing".to_string() })
                }
                (Some(_), Some(_), Some(extra)) => {
                    return Err(PostingListError::MalformedLine { line: line_no, reason: format!("unexpected trailing field '{}'", extra) })
                }
            };
            if let Some(last) = posting.postings().last() {
                if last.row_id >= row_id {
                    return Err(PostingListError::NotSorted { index: posting.size(), previous: last.row_id, current: row_id });
                }
            }
            posting.add_posting(row_id, score);
        }

        if let Some((line_no, _)) = lines.find(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty())) {
            warn!("Ignoring content after the declared {} postings, starting at line {}", declared, line_no);
        }
        posting.append_sentinel();
        Ok(posting)
    }
}

fn parse_field<T>(raw: &str, name: &str, line_no: usize) -> Result<T, PostingListError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|e| PostingListError::MalformedLine { line: line_no, reason: format!("invalid {} '{}': {}", name, raw, e) })
}
