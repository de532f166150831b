use super::Posting;
use crate::RowId;

/// Read-only cursor over the live postings of a [`PostingList`](super::PostingList).
#[derive(Debug, Clone)]
pub struct PostingListIterator<'a> {
    pub posting: &'a [Posting],
    pub cursor: usize,
}

impl<'a> PostingListIterator<'a> {
    pub fn new(posting: &'a [Posting]) -> PostingListIterator<'a> {
        PostingListIterator { posting, cursor: 0 }
    }

    /// Returns the element under the cursor without moving it.
    pub fn peek(&self) -> Option<Posting> {
        self.posting.get(self.cursor).copied()
    }

    pub fn last_id(&self) -> Option<RowId> {
        self.posting.last().map(|e| e.row_id)
    }

    /// Moves the cursor to the first element with `row_id >= target`.
    /// Returns the element only when its `row_id` equals `target`.
    pub fn skip_to(&mut self, row_id: RowId) -> Option<Posting> {
        if self.cursor >= self.posting.len() {
            return None;
        }

        match self.posting[self.cursor..].binary_search_by(|e| e.row_id.cmp(&row_id)) {
            Ok(found_offset) => {
                self.cursor += found_offset;
                Some(self.posting[self.cursor])
            }
            Err(insert_offset) => {
                self.cursor += insert_offset;
                None
            }
        }
    }

    pub fn skip_to_end(&mut self) {
        self.cursor = self.posting.len();
    }

    /// Number of elements not yet consumed.
    pub fn remains(&self) -> usize {
        self.posting.len() - self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for PostingListIterator<'a> {
    type Item = Posting;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.peek()?;
        self.cursor += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remains(), Some(self.remains()))
    }
}

impl<'a> ExactSizeIterator for PostingListIterator<'a> {}
