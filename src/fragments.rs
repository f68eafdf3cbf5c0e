// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub id: i64,
    pub text: String,
    pub created_at: String,
}

#[derive(Debug)]
struct RegistryData {
    next_id: i64,
    fragments: Vec<Fragment>,
}

impl RegistryData {
    fn new() -> Self {
        Self {
            next_id: 1,
            fragments: Vec::new(),
        }
    }
}

/// In-memory collection of text fragments.
///
/// Every access path goes through one mutex, so concurrent handlers never
/// observe a half-applied edit and ids are never handed out twice.
#[derive(Debug)]
pub struct FragmentRegistry {
    data: Mutex<RegistryData>,
}

impl FragmentRegistry {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(RegistryData::new()),
        }
    }

    /// Stores a new fragment and returns it with its assigned id.
    pub fn create(&self, text: String) -> Fragment {
        let mut data = self.lock_data();
        let fragment = Fragment {
            id: data.next_id,
            text,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        data.next_id += 1;
        data.fragments.push(fragment.clone());
        fragment
    }

    pub fn get(&self, id: i64) -> Option<Fragment> {
        let data = self.lock_data();
        data.fragments.iter().find(|f| f.id == id).cloned()
    }

    /// Replaces the text of an existing fragment. The creation timestamp is
    /// kept as it was.
    pub fn update(&self, id: i64, text: String) -> Option<Fragment> {
        let mut data = self.lock_data();
        let fragment = data.fragments.iter_mut().find(|f| f.id == id)?;
        fragment.text = text;
        Some(fragment.clone())
    }

    /// Removes a fragment. Returns false when the id was never assigned or
    /// was already deleted.
    pub fn delete(&self, id: i64) -> bool {
        let mut data = self.lock_data();
        let len_before = data.fragments.len();
        data.fragments.retain(|f| f.id != id);
        data.fragments.len() != len_before
    }

    /// Snapshot of all fragments in insertion order.
    pub fn list(&self) -> Vec<Fragment> {
        self.lock_data().fragments.clone()
    }

    fn lock_data(&self) -> MutexGuard<'_, RegistryData> {
        match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                log::error!("FragmentRegistry lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }
}

impl Default for FragmentRegistry {
    fn default() -> Self {
        Self::new()
    }
}
