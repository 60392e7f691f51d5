//! Source record types for bibliographic data.
//!
//! The wire format is JSON with kebab-case field names and an internally
//! tagged `"type"` discriminator, e.g. `{"type": "book", ...}`.

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Book {
    /// Preformatted author list, e.g. `"Иванов И.М., Петров С.Н."`.
    pub authors: String,
    pub title: String,
    /// Edition label without the "изд." suffix, e.g. `"3-е"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    pub city: String,
    pub publishing_house: String,
    pub year: i32,
    pub pages: i32,
}

/// An internet resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InternetResource {
    pub article: String,
    pub website: String,
    pub link: String,
    /// Access date as a preformatted string, e.g. `"01.01.2021"`.
    pub access_date: String,
}

/// An article from a collection of articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ArticlesCollection {
    pub authors: String,
    pub article_title: String,
    pub collection_title: String,
    pub city: String,
    pub publishing_house: String,
    pub year: i32,
    /// Page range within the collection, e.g. `"25-30"`.
    pub pages: String,
}

/// A dissertation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dissertation {
    pub authors: String,
    pub dissertation_title: String,
    /// Degree abbreviation, `"канд."` or `"д-р"`.
    pub canddoc: String,
    /// Branch of science abbreviation, e.g. `"экон."`.
    pub science: String,
    /// Specialty code, e.g. `"01.01.01"`.
    pub code: String,
    pub city: String,
    pub year: i32,
    pub pages: i32,
}

/// An article from a magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MagazineArticle {
    pub authors: String,
    pub article_title: String,
    pub magazine_title: String,
    pub year: i32,
    pub magazine_number: i32,
    /// Page range within the magazine issue, e.g. `"25-30"`.
    pub pages: String,
}

/// A bibliographic source record of any supported type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Record {
    Book(Book),
    InternetResource(InternetResource),
    ArticlesCollection(ArticlesCollection),
    Dissertation(Dissertation),
    MagazineArticle(MagazineArticle),
}

/// The type tag of a [`Record`], without its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Book,
    InternetResource,
    ArticlesCollection,
    Dissertation,
    MagazineArticle,
}

impl RecordKind {
    /// Every supported record kind.
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Book,
        RecordKind::InternetResource,
        RecordKind::ArticlesCollection,
        RecordKind::Dissertation,
        RecordKind::MagazineArticle,
    ];

    /// The wire-format tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Book => "book",
            RecordKind::InternetResource => "internet-resource",
            RecordKind::ArticlesCollection => "articles-collection",
            RecordKind::Dissertation => "dissertation",
            RecordKind::MagazineArticle => "magazine-article",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn positive(kind: RecordKind, field: &'static str, value: i32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(ValidationError::NonPositive { kind, field, value })
    }
}

impl Book {
    /// Check the numeric validity constraints.
    pub fn validate(&self) -> Result<()> {
        positive(RecordKind::Book, "year", self.year)?;
        positive(RecordKind::Book, "pages", self.pages)
    }
}

impl InternetResource {
    /// Internet resources carry no numeric fields; always valid.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl ArticlesCollection {
    /// Check the numeric validity constraints.
    pub fn validate(&self) -> Result<()> {
        positive(RecordKind::ArticlesCollection, "year", self.year)
    }
}

impl Dissertation {
    /// Check the numeric validity constraints.
    pub fn validate(&self) -> Result<()> {
        positive(RecordKind::Dissertation, "year", self.year)?;
        positive(RecordKind::Dissertation, "pages", self.pages)
    }
}

impl MagazineArticle {
    /// Check the numeric validity constraints.
    pub fn validate(&self) -> Result<()> {
        positive(RecordKind::MagazineArticle, "year", self.year)?;
        positive(RecordKind::MagazineArticle, "magazine-number", self.magazine_number)
    }
}

impl Record {
    /// The type tag of this record.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Book(_) => RecordKind::Book,
            Record::InternetResource(_) => RecordKind::InternetResource,
            Record::ArticlesCollection(_) => RecordKind::ArticlesCollection,
            Record::Dissertation(_) => RecordKind::Dissertation,
            Record::MagazineArticle(_) => RecordKind::MagazineArticle,
        }
    }

    /// Check the numeric validity constraints of the wrapped record.
    ///
    /// Must pass before the record reaches a formatter.
    pub fn validate(&self) -> Result<()> {
        match self {
            Record::Book(book) => book.validate(),
            Record::InternetResource(resource) => resource.validate(),
            Record::ArticlesCollection(collection) => collection.validate(),
            Record::Dissertation(dissertation) => dissertation.validate(),
            Record::MagazineArticle(article) => article.validate(),
        }
    }
}
