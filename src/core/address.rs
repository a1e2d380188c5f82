//=========================================================================
// Scene Address
//=========================================================================
//
// Composite (package, asset) identity of a loadable scene.
//
// Addresses are plain values: structural equality, hashable, used as
// keys in every scene map. The empty address is a sentinel meaning
// "no candidate" and is never a valid key.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== SceneAddress ========================================================

/// Identifies a scene by the package it ships in and its asset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SceneAddress {
    package_name: String,
    asset_name: String,
}

impl SceneAddress {
    /// The "no scene" sentinel. Never valid, never stored.
    pub const EMPTY: SceneAddress = SceneAddress {
        package_name: String::new(),
        asset_name: String::new(),
    };

    /// Creates an address from a package name and an asset name.
    pub fn new(package_name: impl Into<String>, asset_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            asset_name: asset_name.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    /// Returns true for the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.package_name.is_empty() && self.asset_name.is_empty()
    }

    /// An address is valid when it names an asset.
    ///
    /// The package may be left empty (the loader's default package), but
    /// an address without an asset name can never be loaded.
    pub fn is_valid(&self) -> bool {
        !self.asset_name.is_empty()
    }
}

impl fmt::Display for SceneAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package_name.is_empty() {
            write!(f, "{}", self.asset_name)
        } else {
            write!(f, "{}:{}", self.package_name, self.asset_name)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
