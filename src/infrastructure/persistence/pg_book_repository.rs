//! PostgreSQL implementation of book repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::BookRepository;
use crate::error::AppError;

/// Row shape of the `books` table.
#[derive(Debug, FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    published_year: i32,
    genre: Vec<String>,
    language: Option<String>,
    country: Option<String>,
    rating: f64,
    summary: Option<String>,
    cover_image_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            author: row.author,
            published_year: row.published_year,
            genre: row.genre,
            language: row.language,
            country: row.country,
            rating: row.rating,
            summary: row.summary,
            cover_image_url: row.cover_image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const RETURNING_COLUMNS: &str = " RETURNING id, title, author, published_year, genre, language, \
     country, rating, summary, cover_image_url, created_at, updated_at";

/// PostgreSQL repository for book storage and retrieval.
///
/// All values are bound as parameters. Partial updates build their `SET`
/// list with [`QueryBuilder`] so that only patched columns are written.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Starts an `UPDATE books` statement carrying every patched column.
    ///
    /// `updated_at` is always refreshed, so an empty patch is still a valid
    /// statement.
    fn update_statement(patch: BookPatch) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("UPDATE books SET updated_at = NOW()");

        if let Some(title) = patch.title {
            builder.push(", title = ").push_bind(title);
        }
        if let Some(author) = patch.author {
            builder.push(", author = ").push_bind(author);
        }
        if let Some(year) = patch.published_year {
            builder.push(", published_year = ").push_bind(year);
        }
        if let Some(genre) = patch.genre {
            builder.push(", genre = ").push_bind(genre);
        }
        if let Some(language) = patch.language {
            builder.push(", language = ").push_bind(language);
        }
        if let Some(country) = patch.country {
            builder.push(", country = ").push_bind(country);
        }
        if let Some(rating) = patch.rating {
            builder.push(", rating = ").push_bind(rating);
        }
        if let Some(summary) = patch.summary {
            builder.push(", summary = ").push_bind(summary);
        }
        if let Some(url) = patch.cover_image_url {
            builder.push(", cover_image_url = ").push_bind(url);
        }

        builder
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn create(&self, new_book: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (
                title, author, published_year, genre, language,
                country, rating, summary, cover_image_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, author, published_year, genre, language,
                      country, rating, summary, cover_image_url, created_at, updated_at
            "#,
        )
        .bind(new_book.title)
        .bind(new_book.author)
        .bind(new_book.published_year)
        .bind(new_book.genre)
        .bind(new_book.language)
        .bind(new_book.country)
        .bind(new_book.rating)
        .bind(new_book.summary)
        .bind(new_book.cover_image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_year, genre, language,
                   country, rating, summary, cover_image_url, created_at, updated_at
            FROM books
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_year, genre, language,
                   country, rating, summary, cover_image_url, created_at, updated_at
            FROM books
            WHERE title = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_year, genre, language,
                   country, rating, summary, cover_image_url, created_at, updated_at
            FROM books
            WHERE author = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(author)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_year, genre, language,
                   country, rating, summary, cover_image_url, created_at, updated_at
            FROM books
            WHERE $1 = ANY(genre)
            ORDER BY created_at, id
            "#,
        )
        .bind(genre)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_published_year(&self, year: i32) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, published_year, genre, language,
                   country, rating, summary, cover_image_url, created_at, updated_at
            FROM books
            WHERE published_year = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(year)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn update_by_id(&self, id: Uuid, patch: BookPatch) -> Result<Option<Book>, AppError> {
        let mut builder = Self::update_statement(patch);
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<BookRow>()
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Book::from))
    }

    async fn update_by_title(
        &self,
        title: &str,
        patch: BookPatch,
    ) -> Result<Option<Book>, AppError> {
        let mut builder = Self::update_statement(patch);
        builder
            .push(" WHERE id = (SELECT id FROM books WHERE title = ")
            .push_bind(title.to_string())
            .push(" ORDER BY created_at, id LIMIT 1)");
        builder.push(RETURNING_COLUMNS);

        let row = builder
            .build_query_as::<BookRow>()
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Book::from))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            DELETE FROM books
            WHERE id = $1
            RETURNING id, title, author, published_year, genre, language,
                      country, rating, summary, cover_image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
