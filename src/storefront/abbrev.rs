//! Size abbreviation for text attribute labels.
//!
//! The label lookup is a collaborator of the selector: hosts may plug in their own table
//! through [`SizeAbbreviator`]. [`StandardSizes`] covers the usual apparel sizes and passes
//! anything else through unchanged.

pub trait SizeAbbreviator {
    fn abbreviate(&self, display_value: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSizes;

const SIZE_TABLE: &[(&str, &str)] = &[
    ("extra small", "XS"),
    ("small", "S"),
    ("medium", "M"),
    ("large", "L"),
    ("extra large", "XL"),
];

impl SizeAbbreviator for StandardSizes {
    fn abbreviate(&self, display_value: &str) -> String {
        let key = display_value.trim().to_lowercase();
        SIZE_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, short)| short.to_string())
            .unwrap_or_else(|| display_value.to_string())
    }
}

/// Leaves every label as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl SizeAbbreviator for Verbatim {
    fn abbreviate(&self, display_value: &str) -> String {
        display_value.to_string()
    }
}
