//! Fusion method catalogue and family classification
//!
//! The catalogue is closed: every method the external engine understands is
//! listed here, and every method belongs to exactly one family. The family
//! decides which parameter axes a sweep varies and in which order their
//! flags are handed to the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A rank-fusion method understood by the external fusion engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FusionMethod {
    Borda,
    CombAnz,
    CombMax,
    CombMed,
    CombMin,
    CombMnz,
    CombSum,
    Isr,
    LogIsr,
    Rbc,
    Rrf,
}

impl FusionMethod {
    /// Every method in the catalogue, in canonical (alphabetical) order
    pub const ALL: [FusionMethod; 11] = [
        FusionMethod::Borda,
        FusionMethod::CombAnz,
        FusionMethod::CombMax,
        FusionMethod::CombMed,
        FusionMethod::CombMin,
        FusionMethod::CombMnz,
        FusionMethod::CombSum,
        FusionMethod::Isr,
        FusionMethod::LogIsr,
        FusionMethod::Rbc,
        FusionMethod::Rrf,
    ];

    /// The name the engine (and the output filename) uses for this method
    pub fn name(self) -> &'static str {
        match self {
            FusionMethod::Borda => "borda",
            FusionMethod::CombAnz => "combanz",
            FusionMethod::CombMax => "combmax",
            FusionMethod::CombMed => "combmed",
            FusionMethod::CombMin => "combmin",
            FusionMethod::CombMnz => "combmnz",
            FusionMethod::CombSum => "combsum",
            FusionMethod::Isr => "isr",
            FusionMethod::LogIsr => "logisr",
            FusionMethod::Rbc => "rbc",
            FusionMethod::Rrf => "rrf",
        }
    }

    /// Classify this method into its parameter family
    pub fn family(self) -> MethodFamily {
        match self {
            FusionMethod::Rrf => MethodFamily::Rrf,
            FusionMethod::Rbc => MethodFamily::Rbc,
            FusionMethod::CombAnz
            | FusionMethod::CombMax
            | FusionMethod::CombMed
            | FusionMethod::CombMin
            | FusionMethod::CombMnz
            | FusionMethod::CombSum => MethodFamily::ScoreNormalized,
            FusionMethod::Borda | FusionMethod::Isr | FusionMethod::LogIsr => {
                MethodFamily::DepthOnly
            }
        }
    }
}

impl fmt::Display for FusionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FusionMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FusionMethod::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| ConfigError::UnknownMethod(s.to_string()))
    }
}

/// Behavioral grouping of fusion methods; decides the swept parameter axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodFamily {
    /// Reciprocal rank fusion: depth x rrf-k
    Rrf,
    /// Rank-biased centroid: depth x rbc-p
    Rbc,
    /// Score-based `comb*` methods: depth x score normalization
    ScoreNormalized,
    /// Rank-only methods (borda, isr, logisr): depth alone
    DepthOnly,
}

impl MethodFamily {
    /// The axes this family sweeps, in engine flag order (depth first)
    pub fn axes(self) -> &'static [AxisId] {
        match self {
            MethodFamily::Rrf => &[AxisId::Depth, AxisId::RrfK],
            MethodFamily::Rbc => &[AxisId::Depth, AxisId::RbcP],
            MethodFamily::ScoreNormalized => &[AxisId::Depth, AxisId::ScoreNorm],
            MethodFamily::DepthOnly => &[AxisId::Depth],
        }
    }
}

/// A parameter dimension of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisId {
    Depth,
    RrfK,
    RbcP,
    ScoreNorm,
}

impl AxisId {
    /// The engine command-line flag carrying values on this axis
    pub fn flag(self) -> &'static str {
        match self {
            AxisId::Depth => "-d",
            AxisId::RrfK => "-k",
            AxisId::RbcP => "-p",
            AxisId::ScoreNorm => "-n",
        }
    }

    /// The segment label used in output filenames
    pub fn label(self) -> &'static str {
        match self {
            AxisId::Depth => "depth",
            AxisId::RrfK => "k",
            AxisId::RbcP => "p",
            AxisId::ScoreNorm => "norm",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisId::Depth => f.write_str("depth"),
            AxisId::RrfK => f.write_str("rrf-k"),
            AxisId::RbcP => f.write_str("rbc-p"),
            AxisId::ScoreNorm => f.write_str("score-norm"),
        }
    }
}

/// Pre-fusion score normalization scheme for score-based methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreNorm {
    MinMax,
    Std,
    Sum,
    MinSum,
}

impl ScoreNorm {
    pub const ALL: [ScoreNorm; 4] = [
        ScoreNorm::MinMax,
        ScoreNorm::Std,
        ScoreNorm::Sum,
        ScoreNorm::MinSum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScoreNorm::MinMax => "minmax",
            ScoreNorm::Std => "std",
            ScoreNorm::Sum => "sum",
            ScoreNorm::MinSum => "minsum",
        }
    }
}

impl fmt::Display for ScoreNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScoreNorm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreNorm::ALL
            .into_iter()
            .find(|n| n.name() == s)
            .ok_or_else(|| ConfigError::UnknownNorm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classification_is_total_and_exclusive() {
        let mut rrf = 0;
        let mut rbc = 0;
        let mut score = 0;
        let mut depth_only = 0;

        for method in FusionMethod::ALL {
            match method.family() {
                MethodFamily::Rrf => rrf += 1,
                MethodFamily::Rbc => rbc += 1,
                MethodFamily::ScoreNormalized => score += 1,
                MethodFamily::DepthOnly => depth_only += 1,
            }
        }

        assert_eq!(rrf, 1);
        assert_eq!(rbc, 1);
        assert_eq!(score, 6);
        assert_eq!(depth_only, 3);
        assert_eq!(rrf + rbc + score + depth_only, FusionMethod::ALL.len());
    }

    #[test]
    fn test_comb_prefix_means_score_normalized() {
        for method in FusionMethod::ALL {
            let is_comb = method.name().starts_with("comb");
            let is_score = method.family() == MethodFamily::ScoreNormalized;
            assert_eq!(is_comb, is_score, "{method} misclassified");
        }
    }

    #[test]
    fn test_every_family_sweeps_depth_first() {
        for method in FusionMethod::ALL {
            let axes = method.family().axes();
            assert_eq!(axes[0], AxisId::Depth, "{method} does not lead with depth");
            assert!(axes.len() <= 2);
        }
    }

    #[test]
    fn test_method_name_round_trip() {
        for method in FusionMethod::ALL {
            assert_eq!(method.name().parse::<FusionMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_method_reports_token() {
        let err = "bm25".parse::<FusionMethod>().unwrap_err();
        assert!(err.to_string().contains("bm25"));
    }

    #[test]
    fn test_norm_round_trip_and_rejection() {
        for norm in ScoreNorm::ALL {
            assert_eq!(norm.name().parse::<ScoreNorm>().unwrap(), norm);
        }
        let err = "zscore".parse::<ScoreNorm>().unwrap_err();
        assert!(err.to_string().contains("zscore"));
    }
}
