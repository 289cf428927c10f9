//! Input validation for catalog and inventory requests.
//!
//! Both artifacts need a base label and at least one photo; a catalog also
//! needs a title. Strings are trimmed before checking, so a title of `"  "`
//! is missing. Validation runs before codes are generated or any file is
//! touched.

use crate::catalog::CatalogInput;
use crate::codes::generate_codes;
use crate::types::ImageRef;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// A required request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    BaseCode,
    Photos,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::BaseCode => "base code",
            Field::Photos => "photos",
        })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required input: {0}")]
    MissingInput(Field),
}

fn required(value: &str, field: Field) -> Result<String, RequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(RequestError::MissingInput(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// A request for one catalog document.
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    pub title: String,
    pub base: String,
    pub photos: Vec<ImageRef>,
}

impl CatalogRequest {
    /// Validate the request, then generate one code per photo.
    pub fn into_input(self, date: NaiveDate) -> Result<CatalogInput, RequestError> {
        let title = required(&self.title, Field::Title)?;
        let base = required(&self.base, Field::BaseCode)?;
        if self.photos.is_empty() {
            return Err(RequestError::MissingInput(Field::Photos));
        }
        let codes = generate_codes(&base, self.photos.len());
        Ok(CatalogInput {
            title,
            images: self.photos,
            codes,
            date,
        })
    }
}

/// A request for one inventory sheet.
#[derive(Debug, Clone)]
pub struct InventoryRequest {
    pub base: String,
    pub photos: Vec<ImageRef>,
    pub stock: u32,
}

impl InventoryRequest {
    /// Validate and return the trimmed base label.
    pub fn validate(&self) -> Result<String, RequestError> {
        let base = required(&self.base, Field::BaseCode)?;
        if self.photos.is_empty() {
            return Err(RequestError::MissingInput(Field::Photos));
        }
        Ok(base)
    }
}
