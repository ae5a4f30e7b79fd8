use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use checkpoints::{Error, Result, TxtResolver, TxtResponse};

const TXT_RECORD_TYPE: u16 = 16;
const NOERROR: u32 = 0;

/// Answer of the DNS-over-HTTPS JSON API
#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "Status")]
    status: u32,
    /// Set when the resolver validated the answer with DNSSEC
    #[serde(rename = "AD", default)]
    authenticated_data: bool,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohRecord>,
}

#[derive(Debug, Deserialize)]
struct DohRecord {
    #[serde(rename = "type")]
    record_type: u16,
    data: String,
}

impl DohAnswer {
    fn into_txt_response(self, domain: &str) -> Result<TxtResponse> {
        if self.status != NOERROR {
            return Err(Error::Resolve {
                domain: domain.to_string(),
                reason: format!("DNS status {}", self.status),
            });
        }
        Ok(TxtResponse {
            records: self
                .answer
                .into_iter()
                .filter(|record| record.record_type == TXT_RECORD_TYPE)
                .map(|record| txt_data(&record.data))
                .collect(),
            dnssec_valid: self.authenticated_data,
        })
    }
}

/// Joins the quoted character strings of a TXT record's presentation form
fn txt_data(data: &str) -> String {
    if !data.contains('"') {
        return data.to_string();
    }
    data.split('"').skip(1).step_by(2).collect()
}

/// Resolves TXT records through a DNS-over-HTTPS JSON endpoint
pub struct DohResolver {
    client: Client,
    endpoint: String,
}

impl DohResolver {
    pub fn new(endpoint: &str) -> reqwest::Result<Self> {
        Ok(DohResolver {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            endpoint: endpoint.to_string(),
        })
    }
}

impl TxtResolver for DohResolver {
    fn resolve_txt(&self, domain: &str) -> Result<TxtResponse> {
        debug!("Querying {} for TXT records of {}", self.endpoint, domain);
        let to_error = |err: reqwest::Error| Error::Resolve {
            domain: domain.to_string(),
            reason: err.to_string(),
        };

        let answer: DohAnswer = self
            .client
            .get(&self.endpoint)
            .query(&[("name", domain), ("type", "TXT"), ("do", "1")])
            .header(ACCEPT, "application/dns-json")
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(to_error)?;

        answer.into_txt_response(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unquotes_txt_data() {
        assert_eq!(txt_data("\"1600000:abcd\""), "1600000:abcd");
        assert_eq!(txt_data("\"1600000:ab\" \"cd\""), "1600000:abcd");
        assert_eq!(txt_data("1600000:abcd"), "1600000:abcd");
    }

    #[test]
    fn converts_answers() {
        let answer: DohAnswer = serde_json::from_str(
            r#"{
                "Status": 0, "TC": false, "RD": true, "RA": true, "AD": true, "CD": false,
                "Question": [{ "name": "checkpoints.moneropulse.se.", "type": 16 }],
                "Answer": [
                    { "name": "checkpoints.moneropulse.se.", "type": 5, "TTL": 300, "data": "elsewhere.example." },
                    { "name": "checkpoints.moneropulse.se.", "type": 16, "TTL": 300, "data": "\"10:abcd\"" }
                ]
            }"#,
        )
        .unwrap();
        let response = answer.into_txt_response("checkpoints.moneropulse.se").unwrap();
        assert_eq!(response.records, vec!["10:abcd".to_string()]);
        assert!(response.dnssec_valid);
    }

    #[test]
    fn failed_lookups_are_errors() {
        let answer: DohAnswer = serde_json::from_str(r#"{ "Status": 3, "AD": false }"#).unwrap();
        assert!(answer.into_txt_response("nope.example").is_err());

        let answer: DohAnswer = serde_json::from_str(r#"{ "Status": 0 }"#).unwrap();
        let response = answer.into_txt_response("empty.example").unwrap();
        assert!(response.records.is_empty());
        assert!(!response.dnssec_valid);
    }
}
