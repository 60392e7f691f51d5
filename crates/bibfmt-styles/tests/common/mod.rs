//! Shared record fixtures for style tests.

use bibfmt_records::{ArticlesCollection, Book, Dissertation, InternetResource, MagazineArticle};

pub fn book() -> Book {
    Book {
        authors: "Иванов И.М., Петров С.Н.".to_string(),
        title: "Наука как искусство".to_string(),
        edition: Some("3-е".to_string()),
        city: "СПб.".to_string(),
        publishing_house: "Просвещение".to_string(),
        year: 2020,
        pages: 999,
    }
}

pub fn internet_resource() -> InternetResource {
    InternetResource {
        article: "Наука как искусство".to_string(),
        website: "Ведомости".to_string(),
        link: "https://www.vedomosti.ru".to_string(),
        access_date: "01.01.2021".to_string(),
    }
}

pub fn articles_collection() -> ArticlesCollection {
    ArticlesCollection {
        authors: "Иванов И.М., Петров С.Н.".to_string(),
        article_title: "Наука как искусство".to_string(),
        collection_title: "Сборник научных трудов".to_string(),
        city: "СПб.".to_string(),
        publishing_house: "АСТ".to_string(),
        year: 2020,
        pages: "25-30".to_string(),
    }
}

pub fn dissertation() -> Dissertation {
    Dissertation {
        authors: "Иванов И.М.".to_string(),
        dissertation_title: "Наука как искусство".to_string(),
        canddoc: "канд.".to_string(),
        science: "экон.".to_string(),
        code: "01.01.01".to_string(),
        city: "СПб.".to_string(),
        year: 2020,
        pages: 199,
    }
}

pub fn magazine_article() -> MagazineArticle {
    MagazineArticle {
        authors: "Иванов И.М., Петров С.Н.".to_string(),
        article_title: "Наука как искусство".to_string(),
        magazine_title: "Образование и наука".to_string(),
        year: 2020,
        magazine_number: 10,
        pages: "25-30".to_string(),
    }
}
