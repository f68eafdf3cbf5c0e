// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

pub mod ingest;
mod tags;

#[derive(Debug)]
pub enum GalleryError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    LockPoisoned,
    MissingField(&'static str),
    FileTooLarge { limit_mb: u64 },
    Multipart(String),
}

impl std::fmt::Display for GalleryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GalleryError::Io(err) => write!(f, "I/O error: {}", err),
            GalleryError::Sql(err) => write!(f, "Database error: {}", err),
            GalleryError::LockPoisoned => write!(f, "Gallery store lock poisoned"),
            GalleryError::MissingField(name) => write!(f, "{} field is required", name),
            GalleryError::FileTooLarge { limit_mb } => {
                write!(f, "Uploaded file exceeds the {} MB limit", limit_mb)
            }
            GalleryError::Multipart(msg) => write!(f, "Multipart error: {}", msg),
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GalleryError::Io(err) => Some(err),
            GalleryError::Sql(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        GalleryError::Io(err)
    }
}

impl From<rusqlite::Error> for GalleryError {
    fn from(err: rusqlite::Error) -> Self {
        GalleryError::Sql(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: i64,
    pub path: String,
    pub created_at: String,
    pub prompt: String,
    pub tags: Vec<String>,
}

pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    path TEXT NOT NULL,
    created_at TEXT NOT NULL,
    prompt TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    tag TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS image_tags (
    image_id INTEGER NOT NULL,
    tag_id INTEGER NOT NULL,
    UNIQUE (image_id, tag_id),
    FOREIGN KEY (image_id) REFERENCES images(id),
    FOREIGN KEY (tag_id) REFERENCES tags(id)
);
"#;

/// SQLite-backed image metadata store.
///
/// One connection guarded by a mutex serializes all statements, so tag
/// find-or-create never races with itself even under concurrent uploads.
pub struct GalleryStore {
    conn: Mutex<Connection>,
}

impl GalleryStore {
    pub fn open(db_path: &Path) -> Result<Self, GalleryError> {
        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, GalleryError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, GalleryError> {
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Stores the image row and links every tag label inside one transaction.
    /// Either the row and all of its associations land together, or none do.
    ///
    /// Labels are taken verbatim; the returned record echoes them in request
    /// order even when several resolve to the same tag row.
    pub fn create_image(
        &self,
        path: &str,
        prompt: &str,
        labels: &[String],
    ) -> Result<ImageRecord, GalleryError> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO images (path, created_at, prompt) VALUES (?1, ?2, ?3)",
            params![path, created_at, prompt],
        )?;
        let image_id = tx.last_insert_rowid();

        for label in labels {
            let tag_id = tags::resolve_tag(&tx, label)?;
            tags::link_tag(&tx, image_id, tag_id)?;
        }

        tx.commit()?;

        Ok(ImageRecord {
            id: image_id,
            path: path.to_string(),
            created_at,
            prompt: prompt.to_string(),
            tags: labels.to_vec(),
        })
    }

    /// All stored images, newest first. Images created in the same second
    /// keep a stable order through the id tiebreaker.
    pub fn list_images(&self) -> Result<Vec<ImageRecord>, GalleryError> {
        let conn = self.lock_conn()?;

        let mut records = Vec::new();
        {
            let mut stmt = conn.prepare(
                "SELECT id, path, created_at, prompt FROM images ORDER BY created_at DESC, id DESC",
            )?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                records.push(ImageRecord {
                    id: row.get(0)?,
                    path: row.get(1)?,
                    created_at: row.get(2)?,
                    prompt: row.get(3)?,
                    tags: Vec::new(),
                });
            }
        }

        for record in &mut records {
            record.tags = tags::tags_for_image(&conn, record.id)?;
        }

        Ok(records)
    }

    /// Find-or-create for a single tag label.
    pub fn resolve_tag(&self, label: &str) -> Result<i64, GalleryError> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        let tag_id = tags::resolve_tag(&tx, label)?;
        tx.commit()?;
        Ok(tag_id)
    }

    /// Links an image to every tag id. All links commit together.
    pub fn link_tags(&self, image_id: i64, tag_ids: &[i64]) -> Result<(), GalleryError> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        for tag_id in tag_ids {
            tags::link_tag(&tx, image_id, *tag_id)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, GalleryError> {
        self.conn.lock().map_err(|_| GalleryError::LockPoisoned)
    }

    #[cfg(test)]
    fn count_rows(&self, table: &str) -> i64 {
        let conn = self.conn.lock().unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .unwrap()
    }
}
