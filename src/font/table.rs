//! The serialized math table: the MATH data of a font, exported once to JSON and keyed by glyph names.
//!
//! ```json
//! {
//!   "version": "1.3",
//!   "constants":  { "AxisHeight": 250, "ScriptPercentScaleDown": 70, ... },
//!   "v_variants": { "parenleft": ["parenleft", "parenleft.size1", ...] },
//!   "h_variants": { ... },
//!   "italic":     { "f": 52 },
//!   "accents":    { "a": 250 },
//!   "v_assembly": { "parenleft": { "italic": 0, "parts": [
//!       { "startConnector": 0, "endConnector": 150, "advance": 1000, "extender": false, "glyph": "parenleft.bot" }, ...
//!   ] } }
//! }
//! ```
//!
//! The version is checked before anything else is read.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{FontError, FontResult};

/// The only schema version this crate reads
pub const SUPPORTED_VERSION : &str = "1.3";

/// Math data of a font, in design units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathTable {
    /// schema version, always [`SUPPORTED_VERSION`] once parsed
    pub version : String,
    /// MATH constants by name (percent constants are plain integers)
    pub constants : HashMap<String, i32>,
    /// glyph name -> names of the vertical variants, by increasing size
    #[serde(default)]
    pub v_variants : HashMap<String, Vec<String>>,
    /// glyph name -> names of the horizontal variants, by increasing size
    #[serde(default)]
    pub h_variants : HashMap<String, Vec<String>>,
    /// glyph name -> italic correction
    #[serde(default)]
    pub italic : HashMap<String, i32>,
    /// glyph name -> top accent attachment
    #[serde(default)]
    pub accents : HashMap<String, i32>,
    /// glyph name -> vertical assembly
    #[serde(default)]
    pub v_assembly : HashMap<String, Assembly>,
}

/// Recipe for an arbitrarily tall version of a glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assembly {
    /// italic correction of the assembled glyph
    #[serde(default)]
    pub italic : i32,
    /// parts, from bottom to top
    pub parts : Vec<AssemblyPart>,
}

/// One part of an [`Assembly`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyPart {
    /// length of the connector at the start (bottom) of the part
    pub start_connector : i32,
    /// length of the connector at the end (top) of the part
    pub end_connector : i32,
    /// full advance of the part in the direction of extension
    pub advance : i32,
    /// whether the part may be skipped or repeated
    pub extender : bool,
    /// name of the glyph for this part
    pub glyph : String,
}

impl Default for MathTable {
    fn default() -> Self {
        Self {
            version : SUPPORTED_VERSION.to_string(),
            constants : HashMap::new(),
            v_variants : HashMap::new(),
            h_variants : HashMap::new(),
            italic : HashMap::new(),
            accents : HashMap::new(),
            v_assembly : HashMap::new(),
        }
    }
}

impl MathTable {
    /// Parses a JSON math table.
    pub fn from_json(source : &str) -> FontResult<Self> {
        let document : Value = serde_json::from_str(source)?;
        Self::from_value(document)
    }

    /// Reads a math table from an already parsed JSON document.
    pub fn from_value(document : Value) -> FontResult<Self> {
        check_version(&document)?;
        Ok(serde_json::from_value(document)?)
    }

    /// Serializes back to JSON
    pub fn to_json(&self) -> FontResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// A constant in design units, `None` if the table lacks it
    pub fn constant(&self, name : &str) -> Option<i32> {
        self.constants.get(name).copied()
    }
}

fn check_version(document : &Value) -> FontResult<()> {
    match document.get("version") {
        None => Err(FontError::MissingVersion),
        Some(Value::String(version)) if version == SUPPORTED_VERSION => Ok(()),
        Some(Value::String(version)) => Err(FontError::InvalidVersion(version.clone())),
        Some(other) => Err(FontError::InvalidVersion(other.to_string())),
    }
}
