//! GOST R 7.0.5-2008 formatting.

use bibfmt_records::{Book, Record, RecordKind};

use crate::error::{Error, Result};
use crate::registry::RenderFn;
use crate::template::{Fields, Template};

/// The render function for `kind` under GOST.
///
/// Exhaustive over [`RecordKind`], so a new record type cannot be added
/// without choosing its GOST rendering.
pub fn renderer(kind: RecordKind) -> RenderFn {
    match kind {
        RecordKind::Book => book,
        RecordKind::InternetResource => internet_resource,
        RecordKind::ArticlesCollection => articles_collection,
        RecordKind::Dissertation => dissertation,
        RecordKind::MagazineArticle => magazine_article,
    }
}

/// Edition fragment with its trailing separator, e.g. `"3-е изд. – "`.
/// Empty when the record carries no edition, so the template shows no
/// leftover punctuation.
fn edition_suffix(book: &Book) -> String {
    match &book.edition {
        Some(edition) => format!("{edition} изд. – "),
        None => String::new(),
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
    fields.set("title", &book.title);
    fields.set("edition", edition_suffix(book));
    fields.set("city", &book.city);
    fields.set("publishing_house", &book.publishing_house);
    fields.set("year", book.year);
    fields.set("pages", book.pages);

    Template::new("$authors $title. – $edition$city: $publishing_house, $year. – $pages с.")
        .render(&fields)
}

/// Format an internet resource.
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
    fields.set("access_date", &resource.access_date);

    Template::new("$article // $website URL: $link (дата обращения: $access_date).")
        .render(&fields)
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
    fields.set("article_title", &collection.article_title);
    fields.set("collection_title", &collection.collection_title);
    fields.set("city", &collection.city);
    fields.set("publishing_house", &collection.publishing_house);
    fields.set("year", collection.year);
    fields.set("pages", &collection.pages);

    Template::new(
        "$authors $article_title // $collection_title. – $city: $publishing_house, $year. – С. $pages.",
    )
    .render(&fields)
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
    fields.set("dissertation_title", &dissertation.dissertation_title);
    fields.set("canddoc", &dissertation.canddoc);
    fields.set("science", &dissertation.science);
    fields.set("code", &dissertation.code);
    fields.set("city", &dissertation.city);
    fields.set("year", dissertation.year);
    fields.set("pages", dissertation.pages);

    Template::new(
        "$authors, $dissertation_title [Текст]: дис. ... $canddoc $science наук: $code / $authors - $city, $year. - $pages с.",
    )
    .render(&fields)
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
    fields.set("article_title", &article.article_title);
    fields.set("magazine_title", &article.magazine_title);
    fields.set("year", article.year);
    fields.set("magazine_number", article.magazine_number);
    fields.set("pages", &article.pages);

    Template::new("$authors $article_title // $magazine_title – $year. - №$magazine_number, $pages.")
        .render(&fields)
}
