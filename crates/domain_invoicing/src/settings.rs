//! Company settings printed on invoices
//!
//! Stored settings may be partial. [`CompanySettingsPatch`] models that
//! shape explicitly and [`merge_with_defaults`] turns it into a complete
//! record. [`CompanySettingsStore`] keeps them behind the storage port.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{KeyValueStore, StoreError};

use crate::error::InvoicingError;

/// Store key holding the saved company settings
pub const COMPANY_SETTINGS_KEY: &str = "fee-calculator-company-settings";

/// Company postal address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for CompanyAddress {
    fn default() -> Self {
        Self {
            street: "123 Business St".to_string(),
            city: "City".to_string(),
            state: "State".to_string(),
            zip_code: "12345".to_string(),
            country: "Country".to_string(),
        }
    }
}

/// Complete company settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: Option<String>,
    pub address: CompanyAddress,
    /// Base64 image data or URL
    pub logo: Option<String>,
    pub tax_id: Option<String>,
    pub registration_number: Option<String>,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: "Your Company Name".to_string(),
            email: "billing@yourcompany.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            website: None,
            address: CompanyAddress::default(),
            logo: None,
            tax_id: None,
            registration_number: None,
        }
    }
}

/// Address fields that may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyAddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Settings fields that may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanySettingsPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<CompanyAddressPatch>,
    pub logo: Option<String>,
    pub tax_id: Option<String>,
    pub registration_number: Option<String>,
}

impl CompanySettings {
    /// Overlays every present field of `patch` onto `self`
    pub fn merge(self, patch: CompanySettingsPatch) -> Self {
        let address = match patch.address {
            Some(a) => CompanyAddress {
                street: a.street.unwrap_or(self.address.street),
                city: a.city.unwrap_or(self.address.city),
                state: a.state.unwrap_or(self.address.state),
                zip_code: a.zip_code.unwrap_or(self.address.zip_code),
                country: a.country.unwrap_or(self.address.country),
            },
            None => self.address,
        };

        Self {
            name: patch.name.unwrap_or(self.name),
            email: patch.email.unwrap_or(self.email),
            phone: patch.phone.unwrap_or(self.phone),
            website: patch.website.or(self.website),
            address,
            logo: patch.logo.or(self.logo),
            tax_id: patch.tax_id.or(self.tax_id),
            registration_number: patch.registration_number.or(self.registration_number),
        }
    }

    /// Parses exported settings, requiring a name and an email
    pub fn import_json(json: &str) -> Result<Self, InvoicingError> {
        let patch: CompanySettingsPatch = serde_json::from_str(json)?;

        let has = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());
        if !has(&patch.name) || !has(&patch.email) {
            return Err(InvoicingError::validation(
                "invalid settings: name and email are required",
            ));
        }

        Ok(merge_with_defaults(patch))
    }

    /// Serializes as pretty-printed JSON
    pub fn export_json(&self) -> Result<String, InvoicingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Multi-line address block for invoice headers
    pub fn formatted_address(&self) -> String {
        format_company_address(&self.address)
    }
}

/// Saved company settings over a [`KeyValueStore`]
#[derive(Debug)]
pub struct CompanySettingsStore<S> {
    store: S,
}

impl<S: KeyValueStore> CompanySettingsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the saved settings, filling gaps from the defaults
    ///
    /// Nothing saved and an undecodable value both yield the defaults.
    pub fn load(&self) -> Result<CompanySettings, InvoicingError> {
        match self.store.get_json::<CompanySettingsPatch>(COMPANY_SETTINGS_KEY) {
            Ok(Some(patch)) => Ok(merge_with_defaults(patch)),
            Ok(None) => Ok(CompanySettings::default()),
            Err(StoreError::Corrupt { message, .. }) => {
                warn!(%message, "Saved company settings are corrupt, using defaults");
                Ok(CompanySettings::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, settings: &CompanySettings) -> Result<(), InvoicingError> {
        self.store.set_json(COMPANY_SETTINGS_KEY, settings)?;
        debug!(company = %settings.name, "Saved company settings");
        Ok(())
    }

    /// Forgets the saved settings and returns the defaults
    pub fn reset(&self) -> Result<CompanySettings, InvoicingError> {
        self.store.remove(COMPANY_SETTINGS_KEY)?;
        Ok(CompanySettings::default())
    }

    /// Validates exported settings and saves them
    pub fn import_json(&self, json: &str) -> Result<CompanySettings, InvoicingError> {
        let settings = CompanySettings::import_json(json)?;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Exports the currently saved settings
    pub fn export_json(&self) -> Result<String, InvoicingError> {
        self.load()?.export_json()
    }
}

/// Fills every absent field from [`CompanySettings::default`]
pub fn merge_with_defaults(patch: CompanySettingsPatch) -> CompanySettings {
    CompanySettings::default().merge(patch)
}

/// Formats as street / "city, state, zip" / country, skipping empty parts
pub fn format_company_address(address: &CompanyAddress) -> String {
    let locality = [&address.city, &address.state, &address.zip_code]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    [address.street.as_str(), locality.as_str(), address.country.as_str()]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_gives_defaults() {
        assert_eq!(
            merge_with_defaults(CompanySettingsPatch::default()),
            CompanySettings::default()
        );
    }

    #[test]
    fn test_format_address_skips_blanks() {
        let address = CompanyAddress {
            street: String::new(),
            city: "Lyon".to_string(),
            state: String::new(),
            zip_code: "69001".to_string(),
            country: "France".to_string(),
        };
        assert_eq!(format_company_address(&address), "Lyon, 69001\nFrance");
    }
}
