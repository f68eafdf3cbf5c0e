// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::GalleryError;
use rusqlite::{Connection, Transaction, params};

/// Find-or-create for one tag label inside the caller's transaction.
///
/// The label is matched byte for byte. Whitespace and case are significant,
/// and the empty string is a valid label.
pub(super) fn resolve_tag(tx: &Transaction<'_>, label: &str) -> Result<i64, GalleryError> {
    tx.execute(
        "INSERT INTO tags (tag) VALUES (?1) ON CONFLICT(tag) DO NOTHING",
        params![label],
    )?;
    let tag_id = tx.query_row(
        "SELECT id FROM tags WHERE tag = ?1",
        params![label],
        |row| row.get(0),
    )?;
    Ok(tag_id)
}

/// Associates an image with a tag. Re-linking an existing pair is a no-op.
pub(super) fn link_tag(
    tx: &Transaction<'_>,
    image_id: i64,
    tag_id: i64,
) -> Result<(), GalleryError> {
    tx.execute(
        "INSERT INTO image_tags (image_id, tag_id) VALUES (?1, ?2) ON CONFLICT(image_id, tag_id) DO NOTHING",
        params![image_id, tag_id],
    )?;
    Ok(())
}

/// Tag labels for one image, in the order the links were first created.
pub(super) fn tags_for_image(conn: &Connection, image_id: i64) -> Result<Vec<String>, GalleryError> {
    let mut stmt = conn.prepare(
        "SELECT t.tag FROM tags t JOIN image_tags it ON it.tag_id = t.id WHERE it.image_id = ?1 ORDER BY it.rowid",
    )?;
    let mut rows = stmt.query(params![image_id])?;

    let mut labels = Vec::new();
    while let Some(row) = rows.next()? {
        labels.push(row.get(0)?);
    }
    Ok(labels)
}
