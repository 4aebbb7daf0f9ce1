//! Browser side effects of the booking form: query string, logo files, logging

use contracts::domain::a001_booking_request::{FormTab, SubmissionReceipt};
use contracts::shared::config::config;
use contracts::shared::logo::{validate_logo, LogoError, LogoInfo};
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;
use web_sys::{window, File, Url};

const TAB_PARAM: &str = "tab";

fn query_params(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Tab encoded in a query string; unknown or missing values give the first tab
pub fn tab_from_search(search: &str) -> FormTab {
    query_params(search)
        .get(TAB_PARAM)
        .and_then(|code| FormTab::from_code(code))
        .unwrap_or_default()
}

/// Query string with `tab` replaced, other parameters kept
pub fn search_with_tab(search: &str, tab: FormTab) -> String {
    let mut params = query_params(search);
    params.insert(TAB_PARAM.to_string(), tab.as_str().to_string());
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_tab_from_query() -> FormTab {
    tab_from_search(&current_search())
}

pub fn write_tab_to_query(tab: FormTab) {
    let current = current_search();
    let new_search = search_with_tab(&current, tab);
    if current == new_search {
        return;
    }
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_search));
        }
    }
}

/// Accepted logo file with its preview URL
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLogo {
    pub info: LogoInfo,
    pub preview_url: Option<String>,
}

/// Check the file against the configured limits and create a preview URL
pub fn read_logo(file: &File) -> Result<SelectedLogo, LogoError> {
    let info = LogoInfo {
        name: file.name(),
        size: file.size() as u64,
        mime_type: file.type_(),
    };
    validate_logo(&info, &config().logo)?;

    let preview_url = match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(err) => {
            log::warn!("Failed to create logo preview: {:?}", err);
            None
        }
    };
    Ok(SelectedLogo { info, preview_url })
}

pub fn release_logo(logo: &SelectedLogo) {
    if let Some(url) = &logo.preview_url {
        let _ = Url::revoke_object_url(url);
    }
}

/// Write the receipt to the log and, as an object, to the browser console
pub fn log_submission(receipt: &SubmissionReceipt) {
    match serde_json::to_string(receipt) {
        Ok(json) => log::info!("Booking request submitted: {}", json),
        Err(err) => log::warn!("Failed to serialize receipt {}: {}", receipt.id, err),
    }

    match serde_wasm_bindgen::to_value(receipt) {
        Ok(value) => web_sys::console::log_2(&JsValue::from_str("Booking request:"), &value),
        Err(err) => log::warn!("Failed to convert receipt {}: {}", receipt.id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_search() {
        assert_eq!(tab_from_search(""), FormTab::Business);
        assert_eq!(tab_from_search("?tab=plans"), FormTab::Plans);
        assert_eq!(tab_from_search("tab=agreement&x=1"), FormTab::Agreement);
        assert_eq!(tab_from_search("?tab=pricing"), FormTab::Business);
    }

    #[test]
    fn test_search_with_tab_keeps_other_params() {
        assert_eq!(search_with_tab("", FormTab::Plans), "?tab=plans");
        assert_eq!(
            search_with_tab("?ref=ad&tab=business", FormTab::Availability),
            "?ref=ad&tab=availability"
        );
    }
}
