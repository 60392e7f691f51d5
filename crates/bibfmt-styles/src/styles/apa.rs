//! APA 7th edition formatting.

use bibfmt_records::{Record, RecordKind};

use crate::error::{Error, Result};
use crate::registry::RenderFn;
use crate::template::{Fields, Template};

/// The render function for `kind` under APA.
///
/// Exhaustive over [`RecordKind`], so a new record type cannot be added
/// without choosing its APA rendering.
pub fn renderer(kind: RecordKind) -> RenderFn {
    match kind {
        RecordKind::Book => book,
        RecordKind::InternetResource => internet_resource,
        RecordKind::ArticlesCollection => articles_collection,
        RecordKind::Dissertation => dissertation,
        RecordKind::MagazineArticle => magazine_article,
    }
}

/// Format a book.
pub fn book(record: &Record) -> Result<String> {
    let Record::Book(book) = record else {
        return Err(Error::MismatchedRecord {
            expected: RecordKind::Book,
            found: record.kind(),
        });
    };

    tracing::debug!(title = %book.title, "formatting book");

    let mut fields = Fields::new();
    fields.set("authors", &book.authors);
    fields.set("year", book.year);
    fields.set("title", &book.title);
    fields.set("publishing_house", &book.publishing_house);

    Template::new("$authors ($year). $title. $publishing_house.").render(&fields)
}

/// Format an internet resource. APA prints `(n.d.)` since access dates carry
/// no publication year.
pub fn internet_resource(record: &Record) -> Result<String> {
    let Record::InternetResource(resource) = record else {
        return Err(Error::MismatchedRecord {
            expected: RecordKind::InternetResource,
            found: record.kind(),
        });
    };

    tracing::debug!(article = %resource.article, "formatting internet resource");

    let mut fields = Fields::new();
    fields.set("article", &resource.article);
    fields.set("website", &resource.website);
    fields.set("link", &resource.link);

    Template::new("$article (n.d.) $website $link").render(&fields)
}

/// Format an article from a collection.
pub fn articles_collection(record: &Record) -> Result<String> {
    let Record::ArticlesCollection(collection) = record else {
        return Err(Error::MismatchedRecord {
            expected: RecordKind::ArticlesCollection,
            found: record.kind(),
        });
    };

    tracing::debug!(article_title = %collection.article_title, "formatting collection article");

    let mut fields = Fields::new();
    fields.set("authors", &collection.authors);
    fields.set("year", collection.year);
    fields.set("article_title", &collection.article_title);
    fields.set("collection_title", &collection.collection_title);
    fields.set("pages", &collection.pages);

    Template::new("$authors ($year). $article_title. $collection_title, $pages.").render(&fields)
}

/// Format a dissertation.
pub fn dissertation(record: &Record) -> Result<String> {
    let Record::Dissertation(dissertation) = record else {
        return Err(Error::MismatchedRecord {
            expected: RecordKind::Dissertation,
            found: record.kind(),
        });
    };

    tracing::debug!(dissertation_title = %dissertation.dissertation_title, "formatting dissertation");

    let mut fields = Fields::new();
    fields.set("authors", &dissertation.authors);
    fields.set("year", dissertation.year);
    fields.set("dissertation_title", &dissertation.dissertation_title);
    fields.set("canddoc", &dissertation.canddoc);

    Template::new("$authors ($year). $dissertation_title [$canddoc диссертация]").render(&fields)
}

/// Format an article from a magazine.
pub fn magazine_article(record: &Record) -> Result<String> {
    let Record::MagazineArticle(article) = record else {
        return Err(Error::MismatchedRecord {
            expected: RecordKind::MagazineArticle,
            found: record.kind(),
        });
    };

    tracing::debug!(article_title = %article.article_title, "formatting magazine article");

    let mut fields = Fields::new();
    fields.set("authors", &article.authors);
    fields.set("year", article.year);
    fields.set("article_title", &article.article_title);
    fields.set("magazine_title", &article.magazine_title);
    fields.set("magazine_number", article.magazine_number);
    fields.set("pages", &article.pages);

    Template::new("$authors ($year). $article_title. $magazine_title, $magazine_number, $pages.")
        .render(&fields)
}
