use std::fmt;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Identity of the module being generated or edited.
///
/// Invariant: the vendor prefix and module name passed the naming rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleInfo {
    vendor_prefix: String,
    module_name: String,
}

impl ModuleInfo {
    pub fn new(
        vendor_prefix: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let vendor_prefix = vendor_prefix.into();
        let module_name = module_name.into();

        if !DomainValidator::validate_vendor_prefix(&vendor_prefix) {
            return Err(DomainError::InvalidVendorPrefix {
                prefix: vendor_prefix,
            });
        }
        if !DomainValidator::validate_camel_case_name(&module_name) {
            return Err(DomainError::InvalidModuleName { name: module_name });
        }

        Ok(Self {
            vendor_prefix,
            module_name,
        })
    }

    /// Module id for an unvalidated vendor/name pair.
    pub fn compose_id(vendor_prefix: &str, module_name: &str) -> String {
        format!("{vendor_prefix}{module_name}")
    }

    pub fn vendor_prefix(&self) -> &str {
        &self.vendor_prefix
    }

    pub fn name(&self) -> &str {
        &self.module_name
    }

    pub fn id(&self) -> String {
        Self::compose_id(&self.vendor_prefix, &self.module_name)
    }

    /// Human readable title, e.g. `"Product Feed"` for `ProductFeed`.
    pub fn title(&self) -> String {
        DomainValidator::camel_case_to_human_readable(&self.module_name)
    }

    /// Module root relative to the shop's modules directory.
    pub fn relative_dir(&self) -> String {
        format!("{}/{}/", self.vendor_prefix, self.module_name)
    }

    /// A class or setting name namespaced with the module id.
    pub fn prefixed(&self, short_name: &str) -> String {
        format!("{}{}", self.id(), short_name)
    }
}

impl fmt::Display for ModuleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.vendor_prefix, self.module_name)
    }
}
