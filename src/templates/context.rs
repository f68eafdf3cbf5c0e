// This file is part of the product Voyage.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::fragments::Fragment;
use crate::gallery::ImageRecord;
use minijinja::{Value, context};

const STYLE_CSS: &str = "/static/style.css";
const MARKDOWN_CSS: &str = "/static/github-markdown-light.css";

#[derive(Debug, Clone)]
pub struct ErrorPageContext {
    app_name: String,
}

impl ErrorPageContext {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name
        }
    }
}

#[derive(Debug, Clone)]
pub struct IndexPageContext {
    app_name: String,
    fragments: Vec<Fragment>,
}

impl IndexPageContext {
    pub fn new(app_name: &str, fragments: Vec<Fragment>) -> Self {
        Self {
            app_name: app_name.to_string(),
            fragments,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name,
            fragments => &self.fragments
        }
    }
}

/// Context shared by the single-fragment view and the edit form.
#[derive(Debug, Clone)]
pub struct FragmentPageContext {
    app_name: String,
    fragment: Fragment,
}

impl FragmentPageContext {
    pub fn new(app_name: &str, fragment: Fragment) -> Self {
        Self {
            app_name: app_name.to_string(),
            fragment,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name,
            fragment => &self.fragment
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryPageContext {
    app_name: String,
    images: Vec<ImageRecord>,
}

impl GalleryPageContext {
    pub fn new(app_name: &str, images: Vec<ImageRecord>) -> Self {
        Self {
            app_name: app_name.to_string(),
            images,
        }
    }

    pub fn to_value(&self) -> Value {
        context! {
            style_css => STYLE_CSS,
            app_name => &self.app_name,
            images => &self.images
        }
    }
}

/// Carries already-rendered HTML; the template inserts it unescaped.
#[derive(Debug, Clone)]
pub struct MarkdownPageContext {
    content_html: String,
}

impl MarkdownPageContext {
    pub fn new(content_html: String) -> Self {
        Self { content_html }
    }

    pub fn to_value(&self) -> Value {
        context! {
            markdown_css => MARKDOWN_CSS,
            content => &self.content_html
        }
    }
}
