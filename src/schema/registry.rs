//! Static field tables for each funding category.
//!
//! Table order is the column order everywhere: generated templates, import
//! parsing and export all follow it. Multi-valued cells use the `&`
//! delimiter (e.g. "Fintech&SaaS").

use super::{FieldDef, FieldKind};

pub(super) const ANGEL_INVESTORS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "Rajesh Sharma"),
    FieldDef::required("city", "City", FieldKind::Text, "Mumbai"),
    FieldDef::required("country", "Country", FieldKind::Text, "India"),
    FieldDef::required("ticketSize", "Ticket Size", FieldKind::Number, "500000"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "rajesh@angelmail.com"),
    FieldDef::new(
        "linkedin",
        "LinkedIn",
        FieldKind::Text,
        "https://linkedin.com/in/rajesh-sharma",
    ),
    FieldDef::new(
        "investmentCategories",
        "Investment Categories",
        FieldKind::List,
        "Fintech&SaaS",
    ),
    FieldDef::new("stages", "Stages", FieldKind::List, "Pre-Seed&Seed"),
    FieldDef::new(
        "about",
        "About",
        FieldKind::Text,
        "Operator angel backing early-stage Indian founders",
    ),
];

pub(super) const VENTURE_CAPITAL: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "Peak Ventures"),
    FieldDef::required("city", "City", FieldKind::Text, "Bengaluru"),
    FieldDef::required("country", "Country", FieldKind::Text, "India"),
    FieldDef::new("fundSize", "Fund Size", FieldKind::Number, "50000000"),
    FieldDef::new("ticketSize", "Ticket Size", FieldKind::Number, "2000000"),
    FieldDef::new("website", "Website", FieldKind::Text, "https://peak.vc"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "deals@peak.vc"),
    FieldDef::new("sectors", "Sectors", FieldKind::List, "Fintech&Healthtech"),
    FieldDef::new("stages", "Stages", FieldKind::List, "Seed&Series A"),
    FieldDef::new(
        "about",
        "About",
        FieldKind::Text,
        "Sector-agnostic fund focused on South Asia",
    ),
];

pub(super) const MICRO_VCS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "First Cheque Capital"),
    FieldDef::required("city", "City", FieldKind::Text, "Delhi"),
    FieldDef::required("country", "Country", FieldKind::Text, "India"),
    FieldDef::new("fundSize", "Fund Size", FieldKind::Number, "5000000"),
    FieldDef::new("ticketSize", "Ticket Size", FieldKind::Number, "100000"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "hello@firstcheque.in"),
    FieldDef::new("sectors", "Sectors", FieldKind::List, "Consumer&D2C"),
    FieldDef::new("stages", "Stages", FieldKind::List, "Pre-Seed"),
    FieldDef::new(
        "about",
        "About",
        FieldKind::Text,
        "Micro fund writing first cheques into pre-seed rounds",
    ),
];

pub(super) const INCUBATORS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "NSRCEL"),
    FieldDef::required("city", "City", FieldKind::Text, "Bengaluru"),
    FieldDef::required("country", "Country", FieldKind::Text, "India"),
    FieldDef::new("website", "Website", FieldKind::Text, "https://nsrcel.org"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "apply@nsrcel.org"),
    FieldDef::new("sectors", "Sectors", FieldKind::List, "Deeptech&Social Impact"),
    FieldDef::new(
        "programDuration",
        "Program Duration",
        FieldKind::Text,
        "12 months",
    ),
    FieldDef::new("equityTaken", "Equity Taken (%)", FieldKind::Number, "0"),
    FieldDef::new(
        "about",
        "About",
        FieldKind::Text,
        "Academic incubator with zero-equity cohorts",
    ),
];

pub(super) const ACCELERATORS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "Surge"),
    FieldDef::required("city", "City", FieldKind::Text, "Singapore"),
    FieldDef::required("country", "Country", FieldKind::Text, "Singapore"),
    FieldDef::new("website", "Website", FieldKind::Text, "https://surgeahead.com"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "team@surgeahead.com"),
    FieldDef::new("sectors", "Sectors", FieldKind::List, "SaaS&Fintech"),
    FieldDef::new(
        "batchFrequency",
        "Batch Frequency",
        FieldKind::Text,
        "Twice a year",
    ),
    FieldDef::new(
        "fundingOffered",
        "Funding Offered",
        FieldKind::Number,
        "3000000",
    ),
    FieldDef::new("equityTaken", "Equity Taken (%)", FieldKind::Number, "7"),
];

pub(super) const GOVT_GRANTS: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "Startup India Seed Fund"),
    FieldDef::required("authority", "Authority", FieldKind::Text, "DPIIT"),
    FieldDef::required("country", "Country", FieldKind::Text, "India"),
    FieldDef::required("grantSize", "Grant Size", FieldKind::Number, "2000000"),
    FieldDef::new("sectors", "Sectors", FieldKind::List, "All Sectors"),
    FieldDef::new(
        "documentsRequired",
        "Documents Required",
        FieldKind::List,
        "DPIIT Certificate&Pitch Deck&Incorporation Certificate",
    ),
    FieldDef::new(
        "applicationLink",
        "Application Link",
        FieldKind::Text,
        "https://seedfund.startupindia.gov.in",
    ),
    FieldDef::new("deadline", "Deadline", FieldKind::Text, "Rolling"),
];

pub(super) const INVESTOR_MATCHES: &[FieldDef] = &[
    FieldDef::required("name", "Name", FieldKind::Text, "Anita Desai"),
    // stage and traction are single-valued but spreadsheets frequently
    // arrive with "Seed&Series A" in them, so they keep the first segment.
    FieldDef::required("stage", "Stage", FieldKind::Choice, "Seed"),
    FieldDef::required("traction", "Traction", FieldKind::Choice, "10K MRR"),
    FieldDef::required("sector", "Sector", FieldKind::Text, "Fintech"),
    FieldDef::new("ticketSize", "Ticket Size", FieldKind::Number, "750000"),
    FieldDef::required("contact", "Contact", FieldKind::Text, "anita@matchmail.com"),
    FieldDef::new("city", "City", FieldKind::Text, "Pune"),
    FieldDef::new("country", "Country", FieldKind::Text, "India"),
];
