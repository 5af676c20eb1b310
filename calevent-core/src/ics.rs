//! Options for server-side ICS generation.

use serde::{Deserialize, Serialize};

/// iTIP method written into the generated calendar object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IcsMethod {
    Request,
    Publish,
    Reply,
    Add,
    Cancel,
    Refresh,
    Counter,
    DeclineCounter,
}

impl std::str::FromStr for IcsMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
            .map_err(|_| format!("Unknown ICS method '{}'", s))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IcsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ical_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<IcsMethod>,
    #[serde(rename = "prodid", default, skip_serializing_if = "Option::is_none")]
    pub prod_id: Option<String>,
}

/// Body returned by the ICS endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct IcsResponse {
    pub ics: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_options_wire_names() {
        let options = IcsOptions {
            ical_uid: Some("aaa".to_string()),
            method: Some(IcsMethod::Request),
            prod_id: Some("prodId".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"ical_uid": "aaa", "method": "request", "prodid": "prodId"})
        );
        assert_eq!(serde_json::to_value(IcsOptions::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_method_from_str_is_case_insensitive() {
        assert_eq!("DeclineCounter".parse::<IcsMethod>(), Ok(IcsMethod::DeclineCounter));
        assert_eq!("CANCEL".parse::<IcsMethod>(), Ok(IcsMethod::Cancel));
        assert!("subscribe".parse::<IcsMethod>().is_err());
    }
}
