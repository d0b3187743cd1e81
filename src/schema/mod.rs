//! Funding category schemas
//!
//! Every funding category the Aarly API serves has a fixed, ordered field
//! schema. The same table drives template generation, spreadsheet import and
//! export, so column order is defined in exactly one place.

mod registry;

use clap::ValueEnum;

/// The delimiter used to pack multiple values into one spreadsheet cell.
pub const LIST_DELIMITER: char = '&';

/// A funding category. The kebab-case name of each variant is also the
/// route segment on the admin API, so these strings must match the server
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    AngelInvestors,
    VentureCapital,
    MicroVcs,
    Incubators,
    Accelerators,
    GovtGrants,
    InvestorMatches,
}

impl Category {
    /// API route segment (e.g. "angel-investors").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AngelInvestors => "angel-investors",
            Category::VentureCapital => "venture-capital",
            Category::MicroVcs => "micro-vcs",
            Category::Incubators => "incubators",
            Category::Accelerators => "accelerators",
            Category::GovtGrants => "govt-grants",
            Category::InvestorMatches => "investor-matches",
        }
    }

    /// Human-readable label, used in prompts and template filenames.
    pub fn label(&self) -> &'static str {
        match self {
            Category::AngelInvestors => "Angel Investors",
            Category::VentureCapital => "Venture Capital",
            Category::MicroVcs => "Micro VCs",
            Category::Incubators => "Incubators",
            Category::Accelerators => "Accelerators",
            Category::GovtGrants => "Govt Grants",
            Category::InvestorMatches => "Investor Matches",
        }
    }

    /// The ordered field schema for this category. Table order is the
    /// column order for templates, import and export.
    pub fn schema(&self) -> &'static [FieldDef] {
        match self {
            Category::AngelInvestors => registry::ANGEL_INVESTORS,
            Category::VentureCapital => registry::VENTURE_CAPITAL,
            Category::MicroVcs => registry::MICRO_VCS,
            Category::Incubators => registry::INCUBATORS,
            Category::Accelerators => registry::ACCELERATORS,
            Category::GovtGrants => registry::GOVT_GRANTS,
            Category::InvestorMatches => registry::INVESTOR_MATCHES,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a spreadsheet cell for a field is coerced into a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Trimmed string.
    Text,
    /// Parsed as a number; unparseable input coerces to 0.
    Number,
    /// Split on [`LIST_DELIMITER`], parts trimmed, empties dropped.
    List,
    /// Single-valued field that tolerates accidental delimited input by
    /// keeping only the first segment.
    Choice,
}

/// One field of a category schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// JSON key on the API, also the template header.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Required fields must be non-blank (non-empty list, non-zero number)
    /// after coercion for the row to be accepted.
    pub required: bool,
    pub kind: FieldKind,
    /// Sample value written into the downloadable template.
    pub example: &'static str,
}

impl FieldDef {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        example: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            required: false,
            kind,
            example,
        }
    }

    pub const fn required(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        example: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            required: true,
            kind,
            example,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_categories() -> &'static [Category] {
        Category::value_variants()
    }

    #[test]
    fn test_route_segments_match_server_contract() {
        let expected = [
            "angel-investors",
            "venture-capital",
            "micro-vcs",
            "incubators",
            "accelerators",
            "govt-grants",
            "investor-matches",
        ];
        assert_eq!(all_categories().len(), expected.len());
        for (category, expected) in all_categories().iter().zip(expected) {
            assert_eq!(category.as_str(), expected);
        }
    }

    #[test]
    fn test_clap_value_enum_names_match_route_segments() {
        for category in all_categories() {
            let value = category
                .to_possible_value()
                .expect("every category is a CLI value");
            assert_eq!(value.get_name(), category.as_str());
        }
    }

    #[test]
    fn test_every_schema_has_required_name_field() {
        for category in all_categories() {
            let name = category
                .schema()
                .iter()
                .find(|f| f.name == "name")
                .unwrap_or_else(|| panic!("{} schema has no name field", category));
            assert!(name.required, "{} name field must be required", category);
        }
    }

    #[test]
    fn test_field_names_are_unique_per_schema() {
        for category in all_categories() {
            let schema = category.schema();
            for (i, field) in schema.iter().enumerate() {
                assert!(
                    schema[i + 1..].iter().all(|other| other.name != field.name),
                    "{} schema repeats field '{}'",
                    category,
                    field.name
                );
            }
        }
    }

    #[test]
    fn test_every_field_has_an_example() {
        for category in all_categories() {
            for field in category.schema() {
                assert!(
                    !field.example.trim().is_empty(),
                    "{} field '{}' has no template example",
                    category,
                    field.name
                );
            }
        }
    }
}
