//! Collection wrapper types for displaying groups of domain objects.
//!
//! These newtypes format collections with consistent structure and handle
//! the empty case gracefully.

use std::{fmt, ops::Index};

use crate::models::{DocumentSummary, Step};

/// Newtype wrapper for displaying collections of document summaries.
///
/// Titles are left to the consumer so the same wrapper serves inbox and
/// drafts listings.
pub struct DocumentSummaries(pub Vec<DocumentSummary>);

impl DocumentSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the summary at the given index.
    pub fn get(&self, index: usize) -> Option<&DocumentSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentSummary> {
        self.0.iter()
    }
}

impl Index<usize> for DocumentSummaries {
    type Output = DocumentSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DocumentSummaries {
    type Item = DocumentSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentSummaries {
    type Item = &'a DocumentSummary;
    type IntoIter = std::slice::Iter<'a, DocumentSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for DocumentSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No documents found.")
        } else {
            for document in &self.0 {
                write!(f, "{}", document)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying an approval chain on its own.
pub struct Steps(pub Vec<Step>);

impl Steps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }
}

impl Index<usize> for Steps {
    type Output = Step;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Steps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                write!(f, "{}", step)?;
            }
            Ok(())
        }
    }
}
