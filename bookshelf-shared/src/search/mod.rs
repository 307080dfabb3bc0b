//! State of the book search page
//!
//! Every search gets a sequence number. Only the answer to the most recently issued search may
//! replace the result list, so a slow answer to an older search can never overwrite a newer one.

use crate::{ApiError, Book, EditionFilter};

#[cfg(test)]
mod test;

/// A search that should be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub subject: String,
}

/// What happened to the result list when an answer came in
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The list now holds exactly this many books
    Replaced(usize),
    /// The answer belongs to an older search and was dropped
    Stale,
    /// The search failed, the previous list is still shown
    Failed(ApiError),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookSearch {
    subject: String,
    books: Vec<Book>,
    /// sequence number of the last issued search
    issued: u64,
}
impl BookSearch {
    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    /// Issue a search for the current subject
    pub fn search(&mut self) -> SearchRequest {
        self.issued += 1;
        SearchRequest {
            seq: self.issued,
            subject: self.subject.clone(),
        }
    }

    /// Feed the answer to the search with sequence number `seq` into the state
    pub fn apply(&mut self, seq: u64, result: Result<Vec<Book>, ApiError>) -> SearchOutcome {
        if seq != self.issued {
            return SearchOutcome::Stale;
        }
        match result {
            Ok(books) => {
                self.books = books;
                SearchOutcome::Replaced(self.books.len())
            }
            Err(e) => SearchOutcome::Failed(e),
        }
    }

    /// All books from the last successful search
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// The books that should be rendered with the given policy
    pub fn visible_books(&self, filter: EditionFilter) -> impl Iterator<Item = &Book> {
        self.books.iter().filter(move |book| filter.admits(book))
    }
}
