use std::{collections::BTreeSet, fmt, str::FromStr};

use super::CatalogError;

/// A keyword describing one attribute of a cataloged motor.
///
/// Tags group into families: application (`Aero`, `Auto`), rotor layout
/// (`OutRunner`, `InRunner`, `Dual`), flux path (`Axial`, `Radial`), cooling
/// (`AirCool`, `LiquidCool`), maturity (`Development`, `Commercial`), and
/// manufacturer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Aero,
    Auto,
    OutRunner,
    InRunner,
    Dual,
    Axial,
    Radial,
    AirCool,
    LiquidCool,
    Development,
    Commercial,
    Bmw,
    Brusa,
    Emrax,
    Joby,
    Launchpoint,
    Magicall,
    MagniX,
    Magnax,
    McLaren,
    NeuMotor,
    Rotex,
    Siemens,
    ThinGap,
    Uqm,
    Yasa,
}

impl Tag {
    /// All tags, in declaration order.
    pub const ALL: [Tag; 26] = [
        Tag::Aero,
        Tag::Auto,
        Tag::OutRunner,
        Tag::InRunner,
        Tag::Dual,
        Tag::Axial,
        Tag::Radial,
        Tag::AirCool,
        Tag::LiquidCool,
        Tag::Development,
        Tag::Commercial,
        Tag::Bmw,
        Tag::Brusa,
        Tag::Emrax,
        Tag::Joby,
        Tag::Launchpoint,
        Tag::Magicall,
        Tag::MagniX,
        Tag::Magnax,
        Tag::McLaren,
        Tag::NeuMotor,
        Tag::Rotex,
        Tag::Siemens,
        Tag::ThinGap,
        Tag::Uqm,
        Tag::Yasa,
    ];

    /// Returns the keyword spelling of this tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Aero => "Aero",
            Tag::Auto => "Auto",
            Tag::OutRunner => "OutRunner",
            Tag::InRunner => "InRunner",
            Tag::Dual => "Dual",
            Tag::Axial => "Axial",
            Tag::Radial => "Radial",
            Tag::AirCool => "AirCool",
            Tag::LiquidCool => "LiquidCool",
            Tag::Development => "Development",
            Tag::Commercial => "Commercial",
            Tag::Bmw => "BMW",
            Tag::Brusa => "Brusa",
            Tag::Emrax => "Emrax",
            Tag::Joby => "Joby",
            Tag::Launchpoint => "Launchpoint",
            Tag::Magicall => "Magicall",
            Tag::MagniX => "MagniX",
            Tag::Magnax => "Magnax",
            Tag::McLaren => "McLaren",
            Tag::NeuMotor => "NeuMotor",
            Tag::Rotex => "Rotex",
            Tag::Siemens => "Siemens",
            Tag::ThinGap => "ThinGap",
            Tag::Uqm => "UQM",
            Tag::Yasa => "YASA",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a keyword, ignoring ASCII case.
impl FromStr for Tag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownKeyword(s.to_owned()))
    }
}

/// A set of tags that every selected motor must carry.
///
/// A record matches when the query is a subset of its tags; the record may
/// carry additional tags. The empty query matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeywordQuery(BTreeSet<Tag>);

impl KeywordQuery {
    /// Parses a query from keyword strings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownKeyword`] for the first unrecognized keyword.
    pub fn parse<'s>(keywords: impl IntoIterator<Item = &'s str>) -> Result<Self, CatalogError> {
        keywords
            .into_iter()
            .map(str::parse::<Tag>)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Returns `true` if every queried tag appears in `tags`.
    #[must_use]
    pub fn is_subset_of(&self, tags: &[Tag]) -> bool {
        self.0.iter().all(|tag| tags.contains(tag))
    }

    /// Iterates over the queried tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    /// Returns `true` if no tags are queried.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tag> for KeywordQuery {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Tag; N]> for KeywordQuery {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Display for KeywordQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tag}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("LiquidCool".parse::<Tag>().unwrap(), Tag::LiquidCool);
        assert_eq!("liquidcool".parse::<Tag>().unwrap(), Tag::LiquidCool);
        assert_eq!(" bmw ".parse::<Tag>().unwrap(), Tag::Bmw);
    }

    #[test]
    fn display_round_trips_every_tag() {
        for tag in Tag::ALL {
            assert_eq!(tag.to_string().parse::<Tag>().unwrap(), tag);
        }
    }

    #[test]
    fn unknown_keyword() {
        let err = KeywordQuery::parse(["Axial", "GearBox"]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownKeyword(ref word) if word == "GearBox"));
    }

    #[test]
    fn subset_semantics() {
        let query = KeywordQuery::from([Tag::Axial, Tag::Aero]);

        assert!(query.is_subset_of(&[Tag::Aero, Tag::OutRunner, Tag::Axial]));
        assert!(!query.is_subset_of(&[Tag::Aero, Tag::Radial]));
        assert!(KeywordQuery::default().is_subset_of(&[]));
    }

    #[test]
    fn duplicates_collapse_and_display_is_sorted() {
        let query = KeywordQuery::parse(["OutRunner", "Aero", "aero"]).unwrap();
        assert_eq!(query.to_string(), "{Aero, OutRunner}");
    }
}
