//! Legacy SQLite fixtures shared by the integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;
use uuid::Uuid;

pub const CREATED: &str = "2021-06-16 20:14:09.221838+00";
pub const MODIFIED: &str = "2021-06-16 20:14:09.221855+00";

const LEGACY_SCHEMA: &[&str] = &[
    "CREATE TABLE genre (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT,
        created_at timestamp with time zone,
        updated_at timestamp with time zone
    )",
    "CREATE TABLE film_work (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT,
        creation_date DATE,
        file_path TEXT,
        rating FLOAT,
        type TEXT NOT NULL,
        created_at timestamp with time zone,
        updated_at timestamp with time zone
    )",
    "CREATE TABLE person (
        id TEXT PRIMARY KEY,
        full_name TEXT NOT NULL,
        created_at timestam with time zone,
        updated_at timestam with time zone
    )",
    "CREATE TABLE genre_film_work (
        id TEXT PRIMARY KEY,
        film_work_id TEXT NOT NULL,
        genre_id TEXT NOT NULL,
        created_at timestamp with time zone
    )",
    "CREATE TABLE person_film_work (
        id TEXT PRIMARY KEY,
        film_work_id TEXT NOT NULL,
        person_id TEXT NOT NULL,
        role TEXT NOT NULL,
        created_at timestamp with time zone
    )",
];

/// A legacy database file living in its own temporary directory.
pub struct LegacyDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl LegacyDb {
    /// Creates an empty database with the legacy schema.
    pub async fn create() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        for statement in LEGACY_SCHEMA {
            sqlx::query(statement).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();

        Self { _dir: dir, path }
    }

    pub async fn connect(&self) -> SqliteConnection {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .connect()
            .await
            .unwrap()
    }

    pub async fn execute(&self, sql: &str) {
        let mut conn = self.connect().await;
        sqlx::query(sql).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
    }

    pub async fn insert_genre(&self, id: Uuid, name: &str, description: Option<&str>) {
        let mut conn = self.connect().await;
        sqlx::query("INSERT INTO genre VALUES (?1, ?2, ?3, ?4, ?5)")
            .bind(id.to_string())
            .bind(name)
            .bind(description)
            .bind(CREATED)
            .bind(MODIFIED)
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }

    pub async fn insert_genres(&self, count: usize) -> Vec<Uuid> {
        let mut conn = self.connect().await;
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let id = Uuid::new_v4();
            sqlx::query("INSERT INTO genre VALUES (?1, ?2, NULL, ?3, ?4)")
                .bind(id.to_string())
                .bind(format!("Genre {i}"))
                .bind(CREATED)
                .bind(MODIFIED)
                .execute(&mut conn)
                .await
                .unwrap();
            ids.push(id);
        }
        conn.close().await.unwrap();
        ids
    }

    pub async fn insert_person(&self, id: Uuid, full_name: &str) {
        let mut conn = self.connect().await;
        sqlx::query("INSERT INTO person VALUES (?1, ?2, ?3, ?4)")
            .bind(id.to_string())
            .bind(full_name)
            .bind(CREATED)
            .bind(MODIFIED)
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }

    pub async fn insert_film_work(&self, id: Uuid, title: &str, rating: Option<f64>, film_type: &str) {
        let mut conn = self.connect().await;
        sqlx::query(
            "INSERT INTO film_work (id, title, description, creation_date, rating, type, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )
        .bind(id.to_string())
        .bind(title)
        .bind("A film about films")
        .bind("2021-06-16")
        .bind(rating)
        .bind(film_type)
        .bind(CREATED)
        .bind(MODIFIED)
        .execute(&mut conn)
        .await
        .unwrap();
        conn.close().await.unwrap();
    }

    pub async fn insert_genre_film_work(&self, id: Uuid, film_work_id: Uuid, genre_id: Uuid) {
        let mut conn = self.connect().await;
        sqlx::query("INSERT INTO genre_film_work VALUES (?1, ?2, ?3, ?4)")
            .bind(id.to_string())
            .bind(film_work_id.to_string())
            .bind(genre_id.to_string())
            .bind(CREATED)
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }

    pub async fn insert_person_film_work(
        &self,
        id: Uuid,
        film_work_id: Uuid,
        person_id: Uuid,
        role: &str,
    ) {
        let mut conn = self.connect().await;
        sqlx::query("INSERT INTO person_film_work VALUES (?1, ?2, ?3, ?4, ?5)")
            .bind(id.to_string())
            .bind(film_work_id.to_string())
            .bind(person_id.to_string())
            .bind(role)
            .bind(CREATED)
            .execute(&mut conn)
            .await
            .unwrap();
        conn.close().await.unwrap();
    }
}

/// A small but complete catalogue: two genres, two people, one film linked to both.
pub struct Catalogue {
    pub genres: Vec<Uuid>,
    pub people: Vec<Uuid>,
    pub film_work: Uuid,
}

pub async fn seed_catalogue(db: &LegacyDb) -> Catalogue {
    let genres = vec![Uuid::new_v4(), Uuid::new_v4()];
    db.insert_genre(genres[0], "Action", Some("Loud")).await;
    db.insert_genre(genres[1], "Drama", None).await;

    let people = vec![Uuid::new_v4(), Uuid::new_v4()];
    db.insert_person(people[0], "Ann Director").await;
    db.insert_person(people[1], "Bob Actor").await;

    let film_work = Uuid::new_v4();
    db.insert_film_work(film_work, "Star Wars", Some(8.6), "movie").await;

    for genre in &genres {
        db.insert_genre_film_work(Uuid::new_v4(), film_work, *genre).await;
    }
    db.insert_person_film_work(Uuid::new_v4(), film_work, people[0], "director")
        .await;
    db.insert_person_film_work(Uuid::new_v4(), film_work, people[1], "actor")
        .await;

    Catalogue {
        genres,
        people,
        film_work,
    }
}
