//! Product loading.
//!
//! Reads product JSON from a file or stdin and decodes it with error
//! context.

use crate::error::{self, ParseErrorKind, TransparencyError};
use crate::model::Product;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// A loaded product together with its source text
#[derive(Debug, Clone)]
pub struct ParsedProduct {
    /// The decoded product
    pub product: Product,
    /// Original input, kept for diagnostics
    pub raw_content: String,
}

impl ParsedProduct {
    /// Get a reference to the product
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Consume and return the inner product
    #[must_use]
    pub fn into_product(self) -> Product {
        self.product
    }
}

/// Decode a product from JSON text.
///
/// # Errors
///
/// Returns a parse error when the input is blank, is not valid JSON, or
/// does not match the product shape.
pub fn parse_product_str(content: &str) -> error::Result<Product> {
    if content.trim().is_empty() {
        return Err(TransparencyError::parse(
            "product input",
            ParseErrorKind::EmptyInput,
        ));
    }
    let product: Product =
        error::ErrorContext::context(serde_json::from_str(content), "decoding product JSON")?;
    if product.name.trim().is_empty() {
        return Err(TransparencyError::parse(
            "product input",
            ParseErrorKind::InvalidValue {
                field: "name".to_string(),
                message: "product name must not be empty".to_string(),
            },
        ));
    }
    Ok(product)
}

/// Read the raw product text from `path`, or from stdin for `-`.
///
/// # Errors
///
/// Returns an IO error carrying the path when the source cannot be read.
pub fn read_product_source(path: &Path) -> error::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        error::ErrorContext::context(
            std::io::stdin().read_to_string(&mut buffer),
            "reading product from stdin",
        )?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(|e| TransparencyError::io(path, e))
}

/// Read and decode a product; `-` reads from stdin.
pub fn load_product(path: &Path, quiet: bool) -> Result<ParsedProduct> {
    let from_stdin = path.as_os_str() == "-";
    if !quiet {
        if from_stdin {
            tracing::info!("Reading product from stdin");
        } else {
            tracing::info!("Reading product: {:?}", path);
        }
    }

    let raw_content = read_product_source(path)
        .with_context(|| format!("Failed to read product file: {}", path.display()))?;

    let product = parse_product_str(&raw_content)
        .with_context(|| format!("Failed to parse product: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded product '{}' with {} metadata fields and {} questions",
            product.name,
            product.metadata.len(),
            product.questions.len()
        );
    }

    Ok(ParsedProduct {
        product,
        raw_content,
    })
}
