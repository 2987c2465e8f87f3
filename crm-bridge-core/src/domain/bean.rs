use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::module::LegacyModule;

/// How a searchable field is matched by the search form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Enum,
    Number,
    Date,
    Bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFieldDef {
    pub name: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListFieldDef {
    pub name: String,
    pub default: bool,
}

/// Static description of a module entity: the list-view and search defs the
/// legacy layer would load from its metadata files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeanDefinition {
    pub module: LegacyModule,
    pub object_name: String,
    pub table_name: String,
    pub list_fields: Vec<ListFieldDef>,
    pub search_fields: Vec<SearchFieldDef>,
}

impl BeanDefinition {
    pub fn new(module: LegacyModule, object_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            module,
            object_name: object_name.into(),
            table_name: table_name.into(),
            list_fields: Vec::new(),
            search_fields: Vec::new(),
        }
    }

    /// Adds default list-view columns.
    pub fn with_list_fields(mut self, fields: &[&str]) -> Self {
        self.list_fields.extend(fields.iter().map(|name| ListFieldDef {
            name: name.to_string(),
            default: true,
        }));
        self
    }

    /// Adds a column that is available but hidden by default.
    pub fn with_optional_list_field(mut self, name: &str) -> Self {
        self.list_fields.push(ListFieldDef {
            name: name.to_string(),
            default: false,
        });
        self
    }

    pub fn with_search_fields(mut self, fields: &[(&str, FieldKind)]) -> Self {
        self.search_fields.extend(fields.iter().map(|(name, kind)| SearchFieldDef {
            name: name.to_string(),
            kind: *kind,
        }));
        self
    }

    pub fn module_name(&self) -> &'static str {
        self.module.legacy_name()
    }

    /// Visible fields for a list query: `id` first, then default columns.
    pub fn filter_fields(&self) -> Vec<String> {
        let mut fields = vec!["id".to_string()];
        fields.extend(
            self.list_fields
                .iter()
                .filter(|f| f.default && f.name != "id")
                .map(|f| f.name.clone()),
        );
        fields
    }
}

/// Registry of instantiable module entities.
#[derive(Debug, Clone, Default)]
pub struct BeanRegistry {
    beans: HashMap<LegacyModule, BeanDefinition>,
}

impl BeanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, bean: BeanDefinition) {
        self.beans.insert(bean.module, bean);
    }

    pub fn with(mut self, bean: BeanDefinition) -> Self {
        self.register(bean);
        self
    }

    pub fn get(&self, module: LegacyModule) -> Option<&BeanDefinition> {
        self.beans.get(&module)
    }

    pub fn contains(&self, module: LegacyModule) -> bool {
        self.beans.contains_key(&module)
    }

    pub fn len(&self) -> usize {
        self.beans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    /// Entities shipped with the legacy application. `Home` and `Calendar`
    /// are valid modules without a backing entity.
    pub fn builtin() -> Self {
        use FieldKind::*;

        let person_search = [
            ("first_name", Text),
            ("last_name", Text),
            ("email1", Text),
            ("phone_work", Text),
            ("account_name", Text),
            ("lead_source", Enum),
            ("assigned_user_id", Enum),
            ("date_entered", Date),
        ];
        let activity_search = [
            ("name", Text),
            ("status", Enum),
            ("parent_name", Text),
            ("assigned_user_id", Enum),
            ("date_start", Date),
            ("date_entered", Date),
        ];

        Self::new()
            .with(
                BeanDefinition::new(LegacyModule::Accounts, "Account", "accounts")
                    .with_list_fields(&[
                        "name",
                        "billing_address_city",
                        "billing_address_country",
                        "phone_office",
                        "assigned_user_name",
                        "date_entered",
                    ])
                    .with_optional_list_field("account_type")
                    .with_search_fields(&[
                        ("name", Text),
                        ("website", Text),
                        ("phone_office", Text),
                        ("billing_address_city", Text),
                        ("billing_address_country", Text),
                        ("account_type", Enum),
                        ("industry", Enum),
                        ("annual_revenue", Number),
                        ("assigned_user_id", Enum),
                        ("date_entered", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Contacts, "Contact", "contacts")
                    .with_list_fields(&[
                        "first_name",
                        "last_name",
                        "title",
                        "account_name",
                        "email1",
                        "phone_work",
                        "assigned_user_name",
                        "date_entered",
                    ])
                    .with_search_fields(&person_search),
            )
            .with(
                BeanDefinition::new(LegacyModule::Leads, "Lead", "leads")
                    .with_list_fields(&[
                        "first_name",
                        "last_name",
                        "status",
                        "account_name",
                        "email1",
                        "assigned_user_name",
                        "date_entered",
                    ])
                    .with_search_fields(&person_search)
                    .with_search_fields(&[("status", Enum)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Opportunities, "Opportunity", "opportunities")
                    .with_list_fields(&[
                        "name",
                        "account_name",
                        "sales_stage",
                        "amount_usdollar",
                        "date_closed",
                        "assigned_user_name",
                        "date_entered",
                    ])
                    .with_search_fields(&[
                        ("name", Text),
                        ("account_name", Text),
                        ("sales_stage", Enum),
                        ("amount", Number),
                        ("date_closed", Date),
                        ("assigned_user_id", Enum),
                        ("date_entered", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Cases, "aCase", "cases")
                    .with_list_fields(&[
                        "case_number",
                        "name",
                        "account_name",
                        "priority",
                        "status",
                        "assigned_user_name",
                        "date_entered",
                    ])
                    .with_search_fields(&[
                        ("name", Text),
                        ("case_number", Number),
                        ("account_name", Text),
                        ("priority", Enum),
                        ("status", Enum),
                        ("state", Enum),
                        ("assigned_user_id", Enum),
                        ("date_entered", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Calls, "Call", "calls")
                    .with_list_fields(&["name", "direction", "status", "parent_name", "date_start", "assigned_user_name"])
                    .with_search_fields(&activity_search),
            )
            .with(
                BeanDefinition::new(LegacyModule::Meetings, "Meeting", "meetings")
                    .with_list_fields(&["name", "status", "parent_name", "date_start", "assigned_user_name"])
                    .with_search_fields(&activity_search),
            )
            .with(
                BeanDefinition::new(LegacyModule::Tasks, "Task", "tasks")
                    .with_list_fields(&["name", "status", "priority", "parent_name", "date_due", "assigned_user_name"])
                    .with_search_fields(&activity_search)
                    .with_search_fields(&[("priority", Enum), ("date_due", Date)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Notes, "Note", "notes")
                    .with_list_fields(&["name", "parent_name", "filename", "date_modified"])
                    .with_search_fields(&[("name", Text), ("parent_name", Text), ("date_entered", Date)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Documents, "Document", "documents")
                    .with_list_fields(&["document_name", "category_id", "status_id", "active_date"])
                    .with_search_fields(&[
                        ("document_name", Text),
                        ("category_id", Enum),
                        ("status_id", Enum),
                        ("active_date", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Campaigns, "Campaign", "campaigns")
                    .with_list_fields(&["name", "status", "campaign_type", "end_date", "assigned_user_name"])
                    .with_search_fields(&[
                        ("name", Text),
                        ("status", Enum),
                        ("campaign_type", Enum),
                        ("end_date", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Prospects, "Prospect", "prospects")
                    .with_list_fields(&["first_name", "last_name", "title", "email1", "phone_work", "date_entered"])
                    .with_search_fields(&person_search),
            )
            .with(
                BeanDefinition::new(LegacyModule::ProspectLists, "ProspectList", "prospect_lists")
                    .with_list_fields(&["name", "list_type", "assigned_user_name", "date_entered"])
                    .with_search_fields(&[("name", Text), ("list_type", Enum)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Project, "Project", "project")
                    .with_list_fields(&["name", "estimated_start_date", "estimated_end_date", "status", "priority"])
                    .with_search_fields(&[("name", Text), ("status", Enum), ("priority", Enum)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Quotes, "AOS_Quotes", "aos_quotes")
                    .with_list_fields(&["number", "name", "stage", "billing_account", "total_amount", "expiration"])
                    .with_search_fields(&[
                        ("name", Text),
                        ("number", Number),
                        ("stage", Enum),
                        ("total_amount", Number),
                        ("expiration", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Contracts, "AOS_Contracts", "aos_contracts")
                    .with_list_fields(&["name", "contract_account", "status", "start_date", "end_date", "total_contract_value"])
                    .with_search_fields(&[("name", Text), ("status", Enum), ("start_date", Date), ("end_date", Date)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Invoices, "AOS_Invoices", "aos_invoices")
                    .with_list_fields(&["number", "name", "billing_account", "status", "total_amount", "due_date"])
                    .with_search_fields(&[
                        ("name", Text),
                        ("number", Number),
                        ("status", Enum),
                        ("total_amount", Number),
                        ("due_date", Date),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Products, "AOS_Products", "aos_products")
                    .with_list_fields(&["name", "part_number", "cost", "price", "type"])
                    .with_search_fields(&[("name", Text), ("part_number", Text), ("type", Enum), ("price", Number)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Emails, "Email", "emails")
                    .with_list_fields(&["name", "from_addr_name", "status", "date_sent_received"])
                    .with_search_fields(&[("name", Text), ("status", Enum), ("date_sent_received", Date)]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Users, "User", "users")
                    .with_list_fields(&["user_name", "first_name", "last_name", "email1", "status", "is_admin"])
                    .with_search_fields(&[
                        ("user_name", Text),
                        ("first_name", Text),
                        ("last_name", Text),
                        ("status", Enum),
                        ("is_admin", Bool),
                    ]),
            )
            .with(
                BeanDefinition::new(LegacyModule::Employees, "Employee", "users")
                    .with_list_fields(&["first_name", "last_name", "department", "title", "employee_status"])
                    .with_search_fields(&[
                        ("first_name", Text),
                        ("last_name", Text),
                        ("department", Text),
                        ("employee_status", Enum),
                    ]),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_skips_non_entity_modules() {
        let registry = BeanRegistry::builtin();
        assert!(registry.contains(LegacyModule::Contacts));
        assert!(!registry.contains(LegacyModule::Home));
        assert!(!registry.contains(LegacyModule::Calendar));
        assert_eq!(registry.len(), LegacyModule::ALL.len() - 2);
    }

    #[test]
    fn test_filter_fields_starts_with_id_and_skips_hidden_columns() {
        let registry = BeanRegistry::builtin();
        let accounts = registry.get(LegacyModule::Accounts).unwrap();
        let fields = accounts.filter_fields();

        assert_eq!(fields[0], "id");
        assert!(fields.contains(&"name".to_string()));
        assert!(!fields.contains(&"account_type".to_string()));
        assert!(accounts.list_fields.iter().any(|f| f.name == "account_type"));
    }

    #[test]
    fn test_module_name_comes_from_module() {
        let registry = BeanRegistry::builtin();
        let quotes = registry.get(LegacyModule::Quotes).unwrap();
        assert_eq!(quotes.module_name(), "AOS_Quotes");
        assert_eq!(quotes.object_name, "AOS_Quotes");
    }
}
