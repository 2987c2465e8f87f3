use crate::domain::{LegacyRequest, RouteIntent};
use crate::error::{CoreError, Result};
use crate::traits::RouteConverter;

use super::action_name_mapper::{ActionNameMapper, DETAIL_VIEW_ACTION};
use super::module_name_mapper::ModuleNameMapper;

/// Rewrites legacy `index.php?module=..&action=..` requests into front-end hash routes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteConverterHandler {
    module_name_mapper: ModuleNameMapper,
    action_name_mapper: ActionNameMapper,
}

impl RouteConverterHandler {
    pub fn new(module_name_mapper: ModuleNameMapper, action_name_mapper: ActionNameMapper) -> Self {
        Self {
            module_name_mapper,
            action_name_mapper,
        }
    }

    /// Converts a raw request target such as `/index.php?module=Contacts`.
    pub fn convert_uri(&self, uri: &str) -> Result<String> {
        self.convert(&LegacyRequest::from_uri(uri))
    }

    fn build_route(&self, intent: &RouteIntent) -> Result<String> {
        if !self.module_name_mapper.is_valid_module(&intent.module) {
            return Err(CoreError::invalid_argument(format!(
                "Invalid module name: {}",
                intent.module
            )));
        }

        let module = self.module_name_mapper.to_front_end(&intent.module)?;
        let mut route = format!("./#/{}", module);

        let action = match (&intent.action, &intent.record) {
            (Some(action), _) => Some(action.as_str()),
            (None, Some(_)) => Some(DETAIL_VIEW_ACTION),
            (None, None) => None,
        };

        if let Some(action) = action {
            route.push('/');
            route.push_str(&self.action_name_mapper.to_front_end(action));
        }

        if let Some(record) = &intent.record {
            route.push('/');
            route.extend(url::form_urlencoded::byte_serialize(record.as_bytes()));
        }

        Ok(route)
    }
}

impl RouteConverter for RouteConverterHandler {
    fn is_legacy_view_route(&self, request: &LegacyRequest) -> bool {
        if !request.targets_entry_point() {
            return false;
        }

        let Some(intent) = RouteIntent::from_request(request) else {
            return false;
        };

        if !self.module_name_mapper.is_valid_module(&intent.module) {
            return false;
        }

        match &intent.action {
            Some(action) => self.action_name_mapper.is_valid_action(action),
            None => true,
        }
    }

    fn convert(&self, request: &LegacyRequest) -> Result<String> {
        let intent = RouteIntent::from_request(request)
            .ok_or_else(|| CoreError::invalid_argument("No module defined"))?;

        let route = self.build_route(&intent)?;
        tracing::debug!(
            module = %intent.module,
            action = ?intent.action,
            route = %route,
            "Converted legacy route"
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_action_is_a_detail_view() {
        let converter = RouteConverterHandler::default();
        let request = LegacyRequest::new("/")
            .with_query("module", "Accounts")
            .with_query("record", "42");

        assert_eq!(converter.convert(&request).unwrap(), "./#/accounts/record/42");
    }

    #[test]
    fn test_record_segment_is_escaped() {
        let converter = RouteConverterHandler::default();

        let route = converter
            .convert_uri("/index.php?module=Accounts&action=DetailView&record=a%2Fb%0D%0A")
            .unwrap();
        assert_eq!(route, "./#/accounts/record/a%2Fb%0D%0A");

        let route = converter
            .convert_uri("/index.php?module=Accounts&record=7f3c-41d2_x.1")
            .unwrap();
        assert_eq!(route, "./#/accounts/record/7f3c-41d2_x.1");
    }

    #[test]
    fn test_convert_uri() {
        let converter = RouteConverterHandler::default();
        let route = converter
            .convert_uri("/index.php?module=AOS_Quotes&action=EditView&record=q-1")
            .unwrap();

        assert_eq!(route, "./#/quotes/edit/q-1");
    }

    #[test]
    fn test_front_end_slug_is_not_a_legacy_module() {
        let converter = RouteConverterHandler::default();
        let request = LegacyRequest::new("/").with_query("module", "contacts");

        assert!(!converter.is_legacy_view_route(&request));
        assert!(converter.convert(&request).is_err());
    }
}
