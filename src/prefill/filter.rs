use super::provider::SourceGroup;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// External visibility flag for the presented catalog.
///
/// Purely a display mask over provider groups, independent of the
/// direct/transitive classification itself. Unrecognized or missing values
/// parse to [`VisibilityMode::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisibilityMode {
    /// Show only direct-dependency groups.
    Direct,
    /// Show only transitive-dependency groups.
    Transitive,
    /// Show only global groups.
    Global,
    /// Hide nothing.
    #[default]
    All,
}

impl VisibilityMode {
    /// Parses an optional request parameter, defaulting to `All` when the
    /// value is missing or unrecognized.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("direct") => VisibilityMode::Direct,
            Some("transitive") => VisibilityMode::Transitive,
            Some("global") => VisibilityMode::Global,
            _ => VisibilityMode::All,
        }
    }

    fn hides(self, kind: SectionKind) -> bool {
        match self {
            VisibilityMode::All => false,
            VisibilityMode::Direct => kind != SectionKind::Direct,
            VisibilityMode::Transitive => kind != SectionKind::Transitive,
            VisibilityMode::Global => kind != SectionKind::Global,
        }
    }
}

impl FromStr for VisibilityMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_param(Some(s)))
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VisibilityMode::Direct => "direct",
            VisibilityMode::Transitive => "transitive",
            VisibilityMode::Global => "global",
            VisibilityMode::All => "all",
        };
        write!(f, "{}", name)
    }
}

/// Which section of the catalog a group belongs to, derived from its title.
/// Anything that is neither a direct- nor a transitive-dependency group
/// counts as global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Direct,
    Transitive,
    Global,
}

impl SectionKind {
    fn of_title(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("direct dependency") {
            SectionKind::Direct
        } else if title.contains("transitive dependency") {
            SectionKind::Transitive
        } else {
            SectionKind::Global
        }
    }
}

/// Applies the visibility mask to a catalog.
///
/// Empty groups are always dropped, and a non-`All` mode keeps only groups
/// of its own section. Surviving groups and their items keep their order.
pub fn visible_groups(groups: Vec<SourceGroup>, mode: VisibilityMode) -> Vec<SourceGroup> {
    groups
        .into_iter()
        .filter(|group| {
            !group.items.is_empty() && !mode.hides(SectionKind::of_title(&group.title))
        })
        .collect()
}
