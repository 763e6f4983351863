//! Fixed-position record view over a tokenized catalogue line

use super::tokenizer::tokenize;

/// Column positions in the catalogue export.
pub mod columns {
    pub const APP_ID: usize = 1;
    pub const CATEGORY: usize = 2;
    pub const INSTALLS: usize = 5;
    pub const FREE: usize = 8;
    pub const PRICE: usize = 9;
    pub const DEVELOPER_ID: usize = 13;
    pub const DEVELOPER_EMAIL: usize = 14;
}

/// One app row. Fields missing from a short line are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub app_id: String,
    pub category: String,
    pub installs_raw: String,
    pub free_raw: String,
    pub price_raw: String,
    pub developer_id: String,
    pub developer_email: String,
}

impl Record {
    /// Tokenize a raw line and pick out the known columns.
    pub fn parse(line: &str) -> Self {
        Self::from_fields(&tokenize(line))
    }

    pub fn from_fields(fields: &[String]) -> Self {
        let column = |index: usize| fields.get(index).cloned().unwrap_or_default();

        Self {
            app_id: column(columns::APP_ID),
            category: column(columns::CATEGORY),
            installs_raw: column(columns::INSTALLS),
            free_raw: column(columns::FREE),
            price_raw: column(columns::PRICE),
            developer_id: column(columns::DEVELOPER_ID),
            developer_email: column(columns::DEVELOPER_EMAIL),
        }
    }

    /// Whether the free flag reads as `true` (case-insensitive).
    pub fn is_free(&self) -> bool {
        self.free_raw.trim().eq_ignore_ascii_case("true")
    }
}
