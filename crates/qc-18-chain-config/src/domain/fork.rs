//! # Fork Catalogue
//!
//! Every protocol change the schedule models, in canonical protocol order.

use std::fmt;

/// A modelled hard fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fork {
    /// Homestead.
    Homestead,
    /// The DAO recovery fork.
    DaoFork,
    /// EIP-150 gas repricing.
    Eip150,
    /// EIP-155 replay protection.
    Eip155,
    /// EIP-158 state clearing.
    Eip158,
    /// Byzantium.
    Byzantium,
    /// Constantinople.
    Constantinople,
    /// Petersburg (unset means "same as Constantinople").
    Petersburg,
    /// Istanbul.
    Istanbul,
    /// Muir Glacier difficulty bomb delay.
    MuirGlacier,
    /// Berlin.
    Berlin,
    /// YOLOv3 test network repricings, folded into Berlin.
    YoloV3,
    /// EWASM.
    Ewasm,
    /// Ishikari: validator contract upgrade for the PoSA engine.
    Ishikari,
    /// First Ishikari patch.
    IshikariPatch001,
    /// Second Ishikari patch.
    IshikariPatch002,
    /// Execution-time fix for the historical CVE-2021-39137 block.
    ///
    /// Excluded from fork ordering and compatibility checks.
    Cve2021_39137,
}

impl Fork {
    /// All forks in canonical protocol order.
    pub const ALL: [Fork; 17] = [
        Fork::Homestead,
        Fork::DaoFork,
        Fork::Eip150,
        Fork::Eip155,
        Fork::Eip158,
        Fork::Byzantium,
        Fork::Constantinople,
        Fork::Petersburg,
        Fork::Istanbul,
        Fork::MuirGlacier,
        Fork::Berlin,
        Fork::YoloV3,
        Fork::Ewasm,
        Fork::Ishikari,
        Fork::IshikariPatch001,
        Fork::IshikariPatch002,
        Fork::Cve2021_39137,
    ];

    /// Field name in the serialized chain config.
    pub fn field_name(&self) -> &'static str {
        match self {
            Fork::Homestead => "homesteadBlock",
            Fork::DaoFork => "daoForkBlock",
            Fork::Eip150 => "eip150Block",
            Fork::Eip155 => "eip155Block",
            Fork::Eip158 => "eip158Block",
            Fork::Byzantium => "byzantiumBlock",
            Fork::Constantinople => "constantinopleBlock",
            Fork::Petersburg => "petersburgBlock",
            Fork::Istanbul => "istanbulBlock",
            Fork::MuirGlacier => "muirGlacierBlock",
            Fork::Berlin => "berlinBlock",
            Fork::YoloV3 => "yoloV3Block",
            Fork::Ewasm => "ewasmBlock",
            Fork::Ishikari => "ishikariBlock",
            Fork::IshikariPatch001 => "ishikariPatch001Block",
            Fork::IshikariPatch002 => "ishikariPatch002Block",
            Fork::Cve2021_39137 => "cve_2021_39137Block",
        }
    }

    /// Human-readable label, used in compatibility diagnostics.
    ///
    /// The CVE-2021-39137 label is for display only: that fork never takes
    /// part in a compatibility check, so no conflict carries it.
    pub fn label(&self) -> &'static str {
        match self {
            Fork::Homestead => "Homestead fork block",
            Fork::DaoFork => "DAO fork block",
            Fork::Eip150 => "EIP150 fork block",
            Fork::Eip155 => "EIP155 fork block",
            Fork::Eip158 => "EIP158 fork block",
            Fork::Byzantium => "Byzantium fork block",
            Fork::Constantinople => "Constantinople fork block",
            Fork::Petersburg => "Petersburg fork block",
            Fork::Istanbul => "Istanbul fork block",
            Fork::MuirGlacier => "Muir Glacier fork block",
            Fork::Berlin => "Berlin fork block",
            Fork::YoloV3 => "YOLOv3 fork block",
            Fork::Ewasm => "ewasm fork block",
            Fork::Ishikari => "Ishikari fork block",
            Fork::IshikariPatch001 => "IshikariPatch001 fork block",
            Fork::IshikariPatch002 => "IshikariPatch002 fork block",
            Fork::Cve2021_39137 => "cve_2021_39137 fork block",
        }
    }
}

impl fmt::Display for Fork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_canonically() {
        let mut sorted = Fork::ALL;
        sorted.sort();
        assert_eq!(sorted, Fork::ALL);
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut names: Vec<_> = Fork::ALL.iter().map(Fork::field_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Fork::ALL.len());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Fork::ALL.iter().map(Fork::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Fork::ALL.len());
        assert_eq!(Fork::Cve2021_39137.label(), "cve_2021_39137 fork block");
    }

    #[test]
    fn test_display_uses_field_name() {
        assert_eq!(Fork::Istanbul.to_string(), "istanbulBlock");
    }
}
