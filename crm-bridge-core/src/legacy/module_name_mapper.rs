use crate::domain::LegacyModule;
use crate::error::{CoreError, Result};

/// Translates between front-end module slugs and legacy module names.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleNameMapper;

impl ModuleNameMapper {
    pub fn new() -> Self {
        Self
    }

    /// Legacy name for a front-end slug. Unknown names pass through unchanged.
    pub fn to_legacy(&self, name: &str) -> String {
        LegacyModule::from_front_end_name(name)
            .map(|module| module.legacy_name().to_string())
            .unwrap_or_else(|| name.to_string())
    }

    /// Front-end slug for a legacy module name.
    pub fn to_front_end(&self, name: &str) -> Result<String> {
        LegacyModule::from_legacy_name(name)
            .map(|module| module.front_end_name().to_string())
            .ok_or_else(|| CoreError::invalid_argument(format!("Invalid module name: {}", name)))
    }

    pub fn is_valid_module(&self, name: &str) -> bool {
        LegacyModule::from_legacy_name(name).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_legacy() {
        let mapper = ModuleNameMapper::new();
        assert_eq!(mapper.to_legacy("contacts"), "Contacts");
        assert_eq!(mapper.to_legacy("quotes"), "AOS_Quotes");
        assert_eq!(mapper.to_legacy("Contacts"), "Contacts");
        assert_eq!(mapper.to_legacy("unknown"), "unknown");
    }

    #[test]
    fn test_to_front_end_rejects_unknown_modules() {
        let mapper = ModuleNameMapper::new();
        assert_eq!(mapper.to_front_end("ProspectLists").unwrap(), "prospect-lists");
        assert!(mapper.to_front_end("FakeModule").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_is_valid_module_expects_legacy_names() {
        let mapper = ModuleNameMapper::new();
        assert!(mapper.is_valid_module("Accounts"));
        assert!(!mapper.is_valid_module("accounts"));
        assert!(!mapper.is_valid_module(""));
    }
}
