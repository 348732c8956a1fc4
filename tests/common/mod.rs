#![allow(dead_code)]

use book_catalog::application::services::BookService;
use book_catalog::domain::entities::NewBook;
use book_catalog::domain::repositories::BookRepository;
use book_catalog::infrastructure::persistence::PgBookRepository;
use book_catalog::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository: Arc<dyn BookRepository> = Arc::new(PgBookRepository::new(Arc::new(pool)));
    AppState::new(Arc::new(BookService::new(repository)))
}

pub fn lean_in() -> NewBook {
    NewBook {
        title: "Lean In".to_string(),
        author: "Sheryl Sandberg".to_string(),
        published_year: 2012,
        genre: vec!["Non-fiction".to_string(), "Business".to_string()],
        language: Some("English".to_string()),
        country: Some("United States".to_string()),
        rating: 4.1,
        summary: Some(
            "A book about empowering women in the workplace and achieving leadership roles."
                .to_string(),
        ),
        cover_image_url: Some("https://example.com/lean_in.jpg".to_string()),
    }
}

pub fn shoe_dog() -> NewBook {
    NewBook {
        title: "Shoe Dog".to_string(),
        author: "Phil Knight".to_string(),
        published_year: 2016,
        genre: vec!["Autobiography".to_string(), "Business".to_string()],
        language: Some("English".to_string()),
        country: Some("United States".to_string()),
        rating: 4.5,
        summary: Some(
            "An inspiring memoir by the co-founder of Nike, detailing the journey of building a global athletic brand."
                .to_string(),
        ),
        cover_image_url: Some("https://example.com/shoe_dog.jpg".to_string()),
    }
}

pub fn lean_in_payload() -> Value {
    json!({
        "title": "Lean In",
        "author": "Sheryl Sandberg",
        "publishedYear": 2012,
        "genre": ["Non-fiction", "Business"],
        "language": "English",
        "country": "United States",
        "rating": 4.1,
        "summary": "A book about empowering women in the workplace and achieving leadership roles.",
        "coverImageUrl": "https://example.com/lean_in.jpg"
    })
}

pub async fn insert_book(pool: &PgPool, book: NewBook) -> String {
    let id: uuid::Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO books (title, author, published_year, genre, rating)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(book.title)
    .bind(book.author)
    .bind(book.published_year)
    .bind(book.genre)
    .bind(book.rating)
    .fetch_one(pool)
    .await
    .unwrap();

    id.to_string()
}

pub async fn count_books(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}
