//! Add-on kind taxonomy.
//!
//! Flat mapping between the published kind strings and an enum. Unknown
//! strings map to [`AddonKind::Unknown`] rather than failing; the kind is
//! advisory metadata, not a validated invariant.

use std::fmt;

/// Classification of a distributable add-on package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddonKind {
    Unknown,
    Core,
    Campaign,
    Scenario,
    CampaignSpMp,
    CampaignMp,
    ScenarioMp,
    MapPack,
    Era,
    Faction,
    ModMp,
    Media,
    Other,
}

impl AddonKind {
    /// All kinds, in wire order.
    pub const ALL: [AddonKind; 13] = [
        AddonKind::Unknown,
        AddonKind::Core,
        AddonKind::Campaign,
        AddonKind::Scenario,
        AddonKind::CampaignSpMp,
        AddonKind::CampaignMp,
        AddonKind::ScenarioMp,
        AddonKind::MapPack,
        AddonKind::Era,
        AddonKind::Faction,
        AddonKind::ModMp,
        AddonKind::Media,
        AddonKind::Other,
    ];

    /// The published string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            AddonKind::Unknown => "unknown",
            AddonKind::Core => "core",
            AddonKind::Campaign => "campaign",
            AddonKind::Scenario => "scenario",
            AddonKind::CampaignSpMp => "campaign_sp_mp",
            AddonKind::CampaignMp => "campaign_mp",
            AddonKind::ScenarioMp => "scenario_mp",
            AddonKind::MapPack => "map_pack",
            AddonKind::Era => "era",
            AddonKind::Faction => "faction",
            AddonKind::ModMp => "mod_mp",
            AddonKind::Media => "media",
            AddonKind::Other => "other",
        }
    }

    /// Parse a published kind string. Anything unrecognized, including
    /// the literal "unknown", is [`AddonKind::Unknown`].
    pub fn from_str(s: &str) -> AddonKind {
        AddonKind::ALL[1..]
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .unwrap_or(AddonKind::Unknown)
    }
}

impl fmt::Display for AddonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
