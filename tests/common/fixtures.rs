//! Test fixtures for integration tests.

#![allow(dead_code)]

use serde_json::Value;
use verdict::document::{
    CREATION_DATE_KEY, DISPLAY_NAME_KEY, FILENAME_KEY, MOD_DATE_KEY, SOURCE_PATH_KEY,
};
use verdict::{Fragment, Metadata};

pub const RABIN_QUESTION: &str = "יצחק רבין";

pub const BROAD_QUESTION: &str = "איזה פסקי דין יש לך במאגר?";

#[derive(Default)]
pub struct FragmentBuilder {
    content: String,
    filename: Option<String>,
    display_name: Option<String>,
    source_path: Option<String>,
    mod_date: Option<Value>,
    creation_date: Option<Value>,
}

impl FragmentBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn source_path(mut self, path: impl Into<String>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub fn mod_date(mut self, date: impl Into<Value>) -> Self {
        self.mod_date = Some(date.into());
        self
    }

    pub fn creation_date(mut self, date: impl Into<Value>) -> Self {
        self.creation_date = Some(date.into());
        self
    }

    pub fn build(self) -> Fragment {
        let mut metadata = Metadata::new();
        if let Some(name) = self.filename {
            metadata.insert(FILENAME_KEY, name);
        }
        if let Some(name) = self.display_name {
            metadata.insert(DISPLAY_NAME_KEY, name);
        }
        if let Some(path) = self.source_path {
            metadata.insert(SOURCE_PATH_KEY, path);
        }
        if let Some(date) = self.mod_date {
            metadata.insert(MOD_DATE_KEY, date);
        }
        if let Some(date) = self.creation_date {
            metadata.insert(CREATION_DATE_KEY, date);
        }
        Fragment::new(self.content, metadata)
    }
}

pub fn named(name: &str, content: &str) -> Fragment {
    FragmentBuilder::new(content).filename(name).build()
}

/// A: adjacent "יצחק רבין"; B: only the reversed second token.
pub fn rabin_candidates() -> Vec<Fragment> {
    vec![
        named("a.pdf", "רצח ראש הממשלה יצחק רבין בשנת 1995"),
        named("b.pdf", "נאום בכיכר, ןיבר דיבר על שלום"),
    ]
}

/// `count` fragments from `docs` distinct documents, interleaved.
pub fn interleaved_candidates(docs: usize, count: usize) -> Vec<Fragment> {
    (0..count)
        .map(|i| named(&format!("doc-{}.pdf", i % docs), &format!("קטע מספר {i}")))
        .collect()
}
