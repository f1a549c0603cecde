//! Technical word categories.
//!
//! ASD-STE100 admits technical nouns (`TN1`..`TN22`) and technical verbs
//! (`TV1`..`TV4`) by category. Words from the general dictionary use the
//! [`WordCategory::Default`] category (code `0`).

use std::{cmp::Ordering, fmt, str::FromStr};

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use super::InvalidCodeError;

/// The technical category of a word.
///
/// Categories order by their wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WordCategory {
    /// Dictionary noun or verb.
    #[default]
    #[serde(rename = "0")]
    Default,
    /// Official parts information.
    #[serde(rename = "TN1")]
    OfficialParts,
    /// Vehicles and machines, and locations on them.
    #[serde(rename = "TN2")]
    VehiclesMachines,
    /// Tools and support equipment, their parts, and locations on them.
    #[serde(rename = "TN3")]
    ToolsEquipment,
    /// Materials, consumables, and unwanted material.
    #[serde(rename = "TN4")]
    Materials,
    /// Facilities, infrastructure, and logistic procedures.
    #[serde(rename = "TN5")]
    FacilitiesInfrastructure,
    /// Systems, components and circuits.
    #[serde(rename = "TN6")]
    SystemsComponents,
    /// Mathematical, scientific, engineering terms, and formulas.
    #[serde(rename = "TN7")]
    MathematicalScience,
    /// Navigation and geographic terms.
    #[serde(rename = "TN8")]
    Navigation,
    /// Numbers, units of measurement and time.
    #[serde(rename = "TN9")]
    NumbersUnits,
    /// Quoted text.
    #[serde(rename = "TN10")]
    QuotedText,
    /// Professional roles, individuals, groups and organizations.
    #[serde(rename = "TN11")]
    RolesGroups,
    /// Parts of the body.
    #[serde(rename = "TN12")]
    BodyTerms,
    /// Common personal effects, food, and beverages.
    #[serde(rename = "TN13")]
    EffectsFoodBeverage,
    /// Medical terms.
    #[serde(rename = "TN14")]
    MedicalTerms,
    /// Official documents, parts of documentation, standards, and guidelines.
    #[serde(rename = "TN15")]
    Documentation,
    /// Environmental and operational conditions.
    #[serde(rename = "TN16")]
    EnvironmentalTerms,
    /// Colors.
    #[serde(rename = "TN17")]
    Colors,
    /// Damage terms.
    #[serde(rename = "TN18")]
    DamageTerms,
    /// Computer science, information and communication technology.
    #[serde(rename = "TN19")]
    IctTerms,
    /// Civil and military operations.
    #[serde(rename = "TN20")]
    CivilMilitaryTerms,
    /// Law and regulations (technical nouns).
    #[serde(rename = "TN21")]
    LawRegulations,
    /// Animals, plants, and other life forms.
    #[serde(rename = "TN22")]
    AnimalsPlants,
    /// Manufacturing processes.
    #[serde(rename = "TV1")]
    ManufacturingProcesses,
    /// Computer processes and applications.
    #[serde(rename = "TV2")]
    ComputerProcesses,
    /// Instructions and information for applicable subject fields.
    #[serde(rename = "TV3")]
    InstructionsInformation,
    /// Law and regulations (technical verbs).
    #[serde(rename = "TV4")]
    VerbLawRegulations,
}

impl WordCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 27] = [
        Self::Default,
        Self::OfficialParts,
        Self::VehiclesMachines,
        Self::ToolsEquipment,
        Self::Materials,
        Self::FacilitiesInfrastructure,
        Self::SystemsComponents,
        Self::MathematicalScience,
        Self::Navigation,
        Self::NumbersUnits,
        Self::QuotedText,
        Self::RolesGroups,
        Self::BodyTerms,
        Self::EffectsFoodBeverage,
        Self::MedicalTerms,
        Self::Documentation,
        Self::EnvironmentalTerms,
        Self::Colors,
        Self::DamageTerms,
        Self::IctTerms,
        Self::CivilMilitaryTerms,
        Self::LawRegulations,
        Self::AnimalsPlants,
        Self::ManufacturingProcesses,
        Self::ComputerProcesses,
        Self::InstructionsInformation,
        Self::VerbLawRegulations,
    ];

    /// The code used in vocabulary files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "0",
            Self::OfficialParts => "TN1",
            Self::VehiclesMachines => "TN2",
            Self::ToolsEquipment => "TN3",
            Self::Materials => "TN4",
            Self::FacilitiesInfrastructure => "TN5",
            Self::SystemsComponents => "TN6",
            Self::MathematicalScience => "TN7",
            Self::Navigation => "TN8",
            Self::NumbersUnits => "TN9",
            Self::QuotedText => "TN10",
            Self::RolesGroups => "TN11",
            Self::BodyTerms => "TN12",
            Self::EffectsFoodBeverage => "TN13",
            Self::MedicalTerms => "TN14",
            Self::Documentation => "TN15",
            Self::EnvironmentalTerms => "TN16",
            Self::Colors => "TN17",
            Self::DamageTerms => "TN18",
            Self::IctTerms => "TN19",
            Self::CivilMilitaryTerms => "TN20",
            Self::LawRegulations => "TN21",
            Self::AnimalsPlants => "TN22",
            Self::ManufacturingProcesses => "TV1",
            Self::ComputerProcesses => "TV2",
            Self::InstructionsInformation => "TV3",
            Self::VerbLawRegulations => "TV4",
        }
    }

    /// The descriptive text of the category.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Default => "Dictionary noun or verb",
            Self::OfficialParts => "Official parts information",
            Self::VehiclesMachines => "Vehicles and machines, and locations on them",
            Self::ToolsEquipment => {
                "Tools and support equipment, their parts, and locations on them"
            }
            Self::Materials => "Materials, consumables, and unwanted material",
            Self::FacilitiesInfrastructure => {
                "Facilities, infrastructure, and logistic procedures"
            }
            Self::SystemsComponents => {
                "Systems, components and circuits, their functions, configurations, and parts"
            }
            Self::MathematicalScience => {
                "Mathematical, scientific, engineering terms, and formulas"
            }
            Self::Navigation => "Navigation and geographic terms",
            Self::NumbersUnits => "Numbers, units of measurement and time (and their symbols)",
            Self::QuotedText => "Quoted text",
            Self::RolesGroups => {
                "Professional roles, individuals, groups, organizations, and geopolitical entities"
            }
            Self::BodyTerms => "Parts of the body",
            Self::EffectsFoodBeverage => "Common personal effects, food, and beverages",
            Self::MedicalTerms => "Medical terms",
            Self::Documentation => {
                "Official documents, parts of documentation, standards, and guidelines"
            }
            Self::EnvironmentalTerms => "Environmental and operational conditions",
            Self::Colors => "Colors",
            Self::DamageTerms => "Damage terms",
            Self::IctTerms => "Computer science, information and communication technology",
            Self::CivilMilitaryTerms => "Civil and military operations",
            Self::LawRegulations | Self::VerbLawRegulations => "Law and regulations",
            Self::AnimalsPlants => "Animals, plants, and other life forms",
            Self::ManufacturingProcesses => "Manufacturing processes",
            Self::ComputerProcesses => "Computer processes and applications",
            Self::InstructionsInformation => {
                "Instructions and information for applicable subject fields"
            }
        }
    }

    /// Returns every category whose description matches `pattern`.
    ///
    /// The pattern is a regular expression matched case-insensitively
    /// anywhere in the description. Categories are returned in declaration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn matching(pattern: &str) -> Result<Vec<Self>, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;

        Ok(Self::ALL
            .into_iter()
            .filter(|category| regex.is_match(category.description()))
            .collect())
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordCategory {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| InvalidCodeError::new("category", s))
    }
}

impl PartialOrd for WordCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}
