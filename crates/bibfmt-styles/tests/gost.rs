//! GOST R 7.0.5-2008 rendering tests.
//!
//! Expected strings are byte-exact: punctuation and field order are part of
//! the style's contract.

mod common;

use bibfmt_records::{Record, RecordKind};
use bibfmt_styles::styles::gost;
use bibfmt_styles::{Bibliography, Style, StyleRegistry};

#[test]
fn test_book() {
    let record = Record::Book(common::book());
    assert_eq!(
        gost::book(&record).unwrap(),
        "Иванов И.М., Петров С.Н. Наука как искусство. – 3-е изд. – СПб.: Просвещение, 2020. – 999 с."
    );
}

#[test]
fn test_book_without_edition_omits_edition_fragment() {
    let mut book = common::book();
    book.edition = None;
    let record = Record::Book(book);

    assert_eq!(
        gost::book(&record).unwrap(),
        "Иванов И.М., Петров С.Н. Наука как искусство. – СПб.: Просвещение, 2020. – 999 с."
    );
}

#[test]
fn test_internet_resource() {
    let record = Record::InternetResource(common::internet_resource());
    assert_eq!(
        gost::internet_resource(&record).unwrap(),
        "Наука как искусство // Ведомости URL: https://www.vedomosti.ru (дата обращения: 01.01.2021)."
    );
}

#[test]
fn test_articles_collection() {
    let record = Record::ArticlesCollection(common::articles_collection());
    assert_eq!(
        gost::articles_collection(&record).unwrap(),
        "Иванов И.М., Петров С.Н. Наука как искусство // Сборник научных трудов. – СПб.: АСТ, 2020. – С. 25-30."
    );
}

#[test]
fn test_magazine_article() {
    let record = Record::MagazineArticle(common::magazine_article());
    assert_eq!(
        gost::magazine_article(&record).unwrap(),
        "Иванов И.М., Петров С.Н. Наука как искусство // Образование и наука – 2020. - №10, 25-30."
    );
}

#[test]
fn test_dissertation() {
    let record = Record::Dissertation(common::dissertation());
    assert_eq!(
        gost::dissertation(&record).unwrap(),
        "Иванов И.М., Наука как искусство [Текст]: дис. ... канд. экон. наук: 01.01.01 / Иванов И.М. - СПб., 2020. - 199 с."
    );
}

#[test]
fn test_formatting_is_deterministic() {
    let record = Record::Dissertation(common::dissertation());
    assert_eq!(
        gost::dissertation(&record).unwrap(),
        gost::dissertation(&record).unwrap()
    );
}

#[test]
fn test_citation_run_sorts_by_rendered_string() {
    let registry = StyleRegistry::default();
    let records = vec![
        Record::Book(common::book()),
        Record::InternetResource(common::internet_resource()),
        Record::ArticlesCollection(common::articles_collection()),
        Record::MagazineArticle(common::magazine_article()),
        Record::Dissertation(common::dissertation()),
    ];

    let entries = registry.entries(Style::Gost, records).unwrap();
    let bibliography = Bibliography::from_entries(entries);

    let kinds: Vec<RecordKind> = bibliography
        .iter()
        .map(|entry| entry.record().kind())
        .collect();
    assert_eq!(
        kinds,
        [
            RecordKind::Dissertation,
            RecordKind::MagazineArticle,
            RecordKind::ArticlesCollection,
            RecordKind::Book,
            RecordKind::InternetResource,
        ]
    );
}
