//! Legacy catalogue fixture for the end-to-end tests.
#![allow(dead_code)]

use std::path::PathBuf;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

pub const GENRES: i64 = 3;
pub const PEOPLE: i64 = 3;
pub const FILM_WORKS: i64 = 2;
pub const GENRE_LINKS: i64 = 3;
pub const PERSON_LINKS: i64 = 4;

const LEGACY_CATALOGUE: &[&str] = &[
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
    "INSERT INTO genre VALUES
        ('3d8d9bf5-0d90-4353-88ba-4ccc5d2c07ff', 'Action', NULL, '2021-06-16 20:14:09.309735+00', '2021-06-16 20:14:09.309751+00'),
        ('120a21cf-9097-479e-904a-13dd7198c1dd', 'Adventure', NULL, '2021-06-16 20:14:09.309776+00', '2021-06-16 20:14:09.309788+00'),
        ('b92ef010-5e4c-4fd0-99d6-41b6456272cd', 'Fantasy', 'Dragons and wizards', '2021-06-16 20:14:09.309811+00', '2021-06-16 20:14:09.309822+00')",
    "INSERT INTO person VALUES
        ('26e83050-29ef-4163-a99d-b546cac208f8', 'Mark Hamill', '2021-06-16 20:14:09.221838+00', '2021-06-16 20:14:09.221855+00'),
        ('5b4bf1bc-3397-4e83-9b17-8b10c6544ed1', 'Harrison Ford', '2021-06-16 20:14:09.221958+00', '2021-06-16 20:14:09.221970+00'),
        ('a5a8f573-3cee-4ccc-8a2b-91cb9f55250a', 'George Lucas', '2021-06-16 20:14:09.222062+00', '2021-06-16 20:14:09.222074+00')",
    "INSERT INTO film_work (id, title, description, creation_date, rating, type, created_at, updated_at) VALUES
        ('3d825f60-9fff-4dfe-b294-1a45fa1e115d', 'Star Wars: Episode IV - A New Hope', 'The Imperial Forces hold Princess Leia hostage.', '1977-05-25', 86, 'movie', '2021-06-16 20:14:09.310000+00', '2021-06-16 20:14:09.310011+00'),
        ('0312ed51-8833-413f-bff5-0e139c11264a', 'Star Wars: Clone Wars', NULL, NULL, NULL, 'tv_show', '2021-06-16 20:14:09.310100+00', '2021-06-16 20:14:09.310111+00')",
    "INSERT INTO genre_film_work VALUES
        ('3f41fc4d-4e5a-4f4b-b1ad-aa6d3a1e9c50', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', '3d8d9bf5-0d90-4353-88ba-4ccc5d2c07ff', '2021-06-16 20:14:09.311000+00'),
        ('71c8a8c7-d0f2-4f0e-a0d7-54c4c1f6a8a3', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', '120a21cf-9097-479e-904a-13dd7198c1dd', '2021-06-16 20:14:09.311100+00'),
        ('c9e1b4c5-7a8b-4a9f-8f1b-1f2e3d4c5b6a', '0312ed51-8833-413f-bff5-0e139c11264a', 'b92ef010-5e4c-4fd0-99d6-41b6456272cd', '2021-06-16 20:14:09.311200+00')",
    "INSERT INTO person_film_work VALUES
        ('6a4c1fd0-5bd8-4f0e-9f5c-0b3f5d6e7a8b', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', '26e83050-29ef-4163-a99d-b546cac208f8', 'actor', '2021-06-16 20:14:09.312000+00'),
        ('8d2e3f4a-5b6c-4d7e-8f9a-0b1c2d3e4f5a', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', '5b4bf1bc-3397-4e83-9b17-8b10c6544ed1', 'actor', '2021-06-16 20:14:09.312100+00'),
        ('9e3f4a5b-6c7d-4e8f-9a0b-1c2d3e4f5a6b', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', 'a5a8f573-3cee-4ccc-8a2b-91cb9f55250a', 'director', '2021-06-16 20:14:09.312200+00'),
        ('af405b6c-7d8e-4f9a-8b1c-2d3e4f5a6b7c', '3d825f60-9fff-4dfe-b294-1a45fa1e115d', 'a5a8f573-3cee-4ccc-8a2b-91cb9f55250a', 'writer', '2021-06-16 20:14:09.312300+00')",
];

/// A legacy database seeded with a small, fully linked catalogue.
pub struct LegacyCatalogue {
    _dir: TempDir,
    pub path: PathBuf,
}

impl LegacyCatalogue {
    pub async fn create() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.sqlite");

        let mut conn = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .connect()
            .await
            .unwrap();
        for statement in LEGACY_CATALOGUE {
            sqlx::query(statement).execute(&mut conn).await.unwrap();
        }
        conn.close().await.unwrap();

        Self { _dir: dir, path }
    }

    pub async fn execute(&self, sql: &str) {
        let mut conn = SqliteConnectOptions::new()
            .filename(&self.path)
            .connect()
            .await
            .unwrap();
        sqlx::query(sql).execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
    }
}
