use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of CRM modules known to the bridge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegacyModule {
    Home,
    Calendar,
    Accounts,
    Contacts,
    Leads,
    Opportunities,
    Cases,
    Calls,
    Meetings,
    Tasks,
    Notes,
    Documents,
    Campaigns,
    Prospects,
    ProspectLists,
    Project,
    Quotes,
    Contracts,
    Invoices,
    Products,
    Emails,
    Users,
    Employees,
}

impl LegacyModule {
    pub const ALL: [LegacyModule; 23] = [
        LegacyModule::Home,
        LegacyModule::Calendar,
        LegacyModule::Accounts,
        LegacyModule::Contacts,
        LegacyModule::Leads,
        LegacyModule::Opportunities,
        LegacyModule::Cases,
        LegacyModule::Calls,
        LegacyModule::Meetings,
        LegacyModule::Tasks,
        LegacyModule::Notes,
        LegacyModule::Documents,
        LegacyModule::Campaigns,
        LegacyModule::Prospects,
        LegacyModule::ProspectLists,
        LegacyModule::Project,
        LegacyModule::Quotes,
        LegacyModule::Contracts,
        LegacyModule::Invoices,
        LegacyModule::Products,
        LegacyModule::Emails,
        LegacyModule::Users,
        LegacyModule::Employees,
    ];

    /// Module identifier used by the legacy application.
    pub fn legacy_name(&self) -> &'static str {
        match self {
            LegacyModule::Home => "Home",
            LegacyModule::Calendar => "Calendar",
            LegacyModule::Accounts => "Accounts",
            LegacyModule::Contacts => "Contacts",
            LegacyModule::Leads => "Leads",
            LegacyModule::Opportunities => "Opportunities",
            LegacyModule::Cases => "Cases",
            LegacyModule::Calls => "Calls",
            LegacyModule::Meetings => "Meetings",
            LegacyModule::Tasks => "Tasks",
            LegacyModule::Notes => "Notes",
            LegacyModule::Documents => "Documents",
            LegacyModule::Campaigns => "Campaigns",
            LegacyModule::Prospects => "Prospects",
            LegacyModule::ProspectLists => "ProspectLists",
            LegacyModule::Project => "Project",
            LegacyModule::Quotes => "AOS_Quotes",
            LegacyModule::Contracts => "AOS_Contracts",
            LegacyModule::Invoices => "AOS_Invoices",
            LegacyModule::Products => "AOS_Products",
            LegacyModule::Emails => "Emails",
            LegacyModule::Users => "Users",
            LegacyModule::Employees => "Employees",
        }
    }

    /// Slug used in front-end routes.
    pub fn front_end_name(&self) -> &'static str {
        match self {
            LegacyModule::Home => "home",
            LegacyModule::Calendar => "calendar",
            LegacyModule::Accounts => "accounts",
            LegacyModule::Contacts => "contacts",
            LegacyModule::Leads => "leads",
            LegacyModule::Opportunities => "opportunities",
            LegacyModule::Cases => "cases",
            LegacyModule::Calls => "calls",
            LegacyModule::Meetings => "meetings",
            LegacyModule::Tasks => "tasks",
            LegacyModule::Notes => "notes",
            LegacyModule::Documents => "documents",
            LegacyModule::Campaigns => "campaigns",
            LegacyModule::Prospects => "prospects",
            LegacyModule::ProspectLists => "prospect-lists",
            LegacyModule::Project => "project",
            LegacyModule::Quotes => "quotes",
            LegacyModule::Contracts => "contracts",
            LegacyModule::Invoices => "invoices",
            LegacyModule::Products => "products",
            LegacyModule::Emails => "emails",
            LegacyModule::Users => "users",
            LegacyModule::Employees => "employees",
        }
    }

    pub fn from_legacy_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.legacy_name() == name)
    }

    pub fn from_front_end_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.front_end_name() == name)
    }
}

impl fmt::Display for LegacyModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.legacy_name())
    }
}
