//! Checkpoints published as DNS TXT records
//!
//! Every network has a set of domains publishing the same `height:hash` records. A record set is
//! only trusted when a majority of the DNSSEC validated answers agree on it

use std::convert::TryFrom;

use log::{debug, info, warn};

use common::NetworkType;
use crypto::Hash256;

use crate::error::{Error, Result};
use crate::Checkpoints;

const MAINNET_DOMAINS: &[&str] = &[
    "checkpoints.moneropulse.se",
    "checkpoints.moneropulse.org",
    "checkpoints.moneropulse.net",
    "checkpoints.moneropulse.co",
];

const TESTNET_DOMAINS: &[&str] = &[
    "testpoints.moneropulse.se",
    "testpoints.moneropulse.org",
    "testpoints.moneropulse.net",
    "testpoints.moneropulse.co",
];

const STAGENET_DOMAINS: &[&str] = &[
    "stagenetpoints.moneropulse.se",
    "stagenetpoints.moneropulse.org",
    "stagenetpoints.moneropulse.net",
    "stagenetpoints.moneropulse.co",
];

/// The domains publishing checkpoints for a network
pub fn dns_domains(network: NetworkType) -> &'static [&'static str] {
    match network {
        NetworkType::Mainnet => MAINNET_DOMAINS,
        NetworkType::Testnet => TESTNET_DOMAINS,
        NetworkType::Stagenet => STAGENET_DOMAINS,
    }
}

/// TXT records returned for a single domain
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxtResponse {
    /// The records, one string per TXT record
    pub records: Vec<String>,
    /// Whether the answer was DNSSEC validated
    pub dnssec_valid: bool,
}

/// Something that can look up TXT records
///
/// Lookups are synchronous; how long one may block is up to the implementor
pub trait TxtResolver {
    /// Gets the TXT records of `domain`
    fn resolve_txt(&self, domain: &str) -> Result<TxtResponse>;
}

/// Splits a `height:hash` record
///
/// # Returns
/// `None` if the record has no separator, the height isn't a decimal integer or the hash isn't
/// 64 hex characters
pub fn parse_record(record: &str) -> Option<(u64, Hash256)> {
    let mut parts = record.splitn(2, ':');
    let height = parts.next()?;
    if !height.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let height = height.parse::<u64>().ok()?;
    let hash = Hash256::try_from(parts.next()?).ok()?;
    Some((height, hash))
}

/// Queries every domain and returns the record set a majority of them agree on
///
/// Answers that fail to resolve or aren't DNSSEC validated are discarded. At least two validated
/// answers are needed, and the winning set must be returned by more than half of them. Record
/// order within an answer doesn't matter
///
/// # Returns
/// `None` if there's no such majority
pub fn load_txt_records<R>(resolver: &R, domains: &[&str]) -> Option<Vec<String>>
where
    R: TxtResolver + ?Sized,
{
    let mut answers: Vec<Vec<String>> = Vec::new();
    for domain in domains {
        match resolver.resolve_txt(domain) {
            Ok(response) if response.dnssec_valid => {
                let mut records = response.records;
                records.sort();
                answers.push(records);
            }
            Ok(_) => warn!("DNSSEC validation failed for {}, skipping", domain),
            Err(err) => warn!("{}", err),
        }
    }

    if answers.len() < 2 {
        warn!("Fewer than two valid checkpoint DNS answers were received");
        return None;
    }

    let (best, matches) = answers
        .iter()
        .map(|answer| (answer, answers.iter().filter(|other| *other == answer).count()))
        .max_by_key(|(_, matches)| *matches)?;

    if matches <= answers.len() / 2 {
        warn!("Checkpoint DNS answers don't agree ({} of {} match)", matches, answers.len());
        return None;
    }
    Some(best.clone())
}

impl Checkpoints {
    /// Adds the checkpoints published over DNS for `network`
    ///
    /// DNS checkpoints are optional: if the domains can't be resolved or don't agree, nothing is
    /// added and the call still succeeds. Malformed records are skipped
    ///
    /// # Errors
    /// If a published checkpoint conflicts with one already pinned. The remaining records are
    /// still added
    pub fn load_checkpoints_from_dns<R>(&mut self, network: NetworkType, resolver: &R) -> Result<()>
    where
        R: TxtResolver + ?Sized,
    {
        let records = match load_txt_records(resolver, dns_domains(network)) {
            Some(records) => records,
            None => {
                warn!("No usable {} DNS checkpoints, continuing without them", network);
                return Ok(());
            }
        };

        let mut first_conflict: Option<Error> = None;
        for record in &records {
            let (height, hash) = match parse_record(record) {
                Some(parsed) => parsed,
                None => {
                    debug!("Skipping malformed DNS checkpoint record {:?}", record);
                    continue;
                }
            };
            if let Err(err) = self.add_checkpoint(height, &hash.to_string(), "") {
                first_conflict.get_or_insert(err);
            }
        }
        info!("Processed {} {} DNS checkpoint records", records.len(), network);

        first_conflict.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const HASH_A: &str = "1111111111111111111111111111111111111111111111111111111111111111";
    const HASH_B: &str = "2222222222222222222222222222222222222222222222222222222222222222";

    /// Answers from a fixed table, unknown domains fail to resolve
    #[derive(Default)]
    struct StaticResolver {
        answers: HashMap<String, TxtResponse>,
    }

    impl StaticResolver {
        fn answer(mut self, domain: &str, records: &[&str], dnssec_valid: bool) -> Self {
            self.answers.insert(
                domain.to_string(),
                TxtResponse { records: records.iter().map(|r| r.to_string()).collect(), dnssec_valid },
            );
            self
        }
        fn all(network: NetworkType, records: &[&str]) -> Self {
            dns_domains(network)
                .iter()
                .fold(StaticResolver::default(), |resolver, domain| resolver.answer(domain, records, true))
        }
    }

    impl TxtResolver for StaticResolver {
        fn resolve_txt(&self, domain: &str) -> Result<TxtResponse> {
            self.answers.get(domain).cloned().ok_or_else(|| Error::Resolve {
                domain: domain.to_string(),
                reason: "NXDOMAIN".to_string(),
            })
        }
    }

    fn record(height: u64, hash: &str) -> String {
        format!("{}:{}", height, hash)
    }

    #[test]
    fn every_network_has_distinct_domains() {
        let mainnet = dns_domains(NetworkType::Mainnet);
        let testnet = dns_domains(NetworkType::Testnet);
        let stagenet = dns_domains(NetworkType::Stagenet);
        assert_eq!(mainnet.len(), 4);
        assert!(mainnet.iter().all(|d| !testnet.contains(d) && !stagenet.contains(d)));
        assert!(testnet.iter().all(|d| !stagenet.contains(d)));
    }

    #[test]
    fn parses_records() {
        assert_eq!(parse_record(&record(42, HASH_A)), Some((42, Hash256::try_from(HASH_A).unwrap())));
        assert_eq!(parse_record(HASH_A), None);
        assert_eq!(parse_record(&record(42, "abcd")), None);
        assert_eq!(parse_record(&format!("forty two:{}", HASH_A)), None);
        assert_eq!(parse_record(&format!("-1:{}", HASH_A)), None);
        assert_eq!(parse_record(&format!("+5:{}", HASH_A)), None);
        assert_eq!(parse_record(&format!(" 5:{}", HASH_A)), None);
        assert_eq!(parse_record(&format!(":{}", HASH_A)), None);
        // Only the first separator splits
        assert_eq!(parse_record(&format!("1:{}:", HASH_A)), None);
    }

    #[test]
    fn adds_agreed_records_and_skips_malformed_ones() {
        let records = [record(10, HASH_A), "garbage".to_string(), record(20, "zz"), record(30, HASH_B)];
        let records = records.iter().map(String::as_str).collect::<Vec<_>>();
        let resolver = StaticResolver::all(NetworkType::Mainnet, &records);

        let mut c = Checkpoints::new();
        c.load_checkpoints_from_dns(NetworkType::Mainnet, &resolver).unwrap();
        assert_eq!(c.get_points().keys().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn record_order_does_not_matter() {
        let (a, b) = (record(10, HASH_A), record(30, HASH_B));
        let domains = dns_domains(NetworkType::Testnet);
        let resolver = StaticResolver::default()
            .answer(domains[0], &[a.as_str(), b.as_str()], true)
            .answer(domains[1], &[b.as_str(), a.as_str()], true);

        assert_eq!(load_txt_records(&resolver, domains), Some(vec![a, b]));
    }

    #[test]
    fn unreachable_domains_are_not_an_error() {
        let mut c = Checkpoints::for_network(NetworkType::Stagenet).unwrap();
        let before = c.get_points().clone();

        c.load_checkpoints_from_dns(NetworkType::Stagenet, &StaticResolver::default()).unwrap();
        assert_eq!(&before, c.get_points());
    }

    #[test]
    fn requires_a_validated_majority() {
        let domains = dns_domains(NetworkType::Mainnet);
        let (a, b) = (record(10, HASH_A), record(10, HASH_B));

        // Only one validated answer
        let resolver = StaticResolver::default()
            .answer(domains[0], &[a.as_str()], true)
            .answer(domains[1], &[a.as_str()], false)
            .answer(domains[2], &[a.as_str()], false);
        assert_eq!(load_txt_records(&resolver, domains), None);

        // Two against two
        let resolver = StaticResolver::default()
            .answer(domains[0], &[a.as_str()], true)
            .answer(domains[1], &[a.as_str()], true)
            .answer(domains[2], &[b.as_str()], true)
            .answer(domains[3], &[b.as_str()], true);
        assert_eq!(load_txt_records(&resolver, domains), None);

        // Three against one
        let resolver = StaticResolver::default()
            .answer(domains[0], &[a.as_str()], true)
            .answer(domains[1], &[b.as_str()], true)
            .answer(domains[2], &[a.as_str()], true)
            .answer(domains[3], &[a.as_str()], true);
        assert_eq!(load_txt_records(&resolver, domains), Some(vec![a]));
    }

    #[test]
    fn conflicting_records_fail_the_load() {
        let mut c = Checkpoints::new();
        c.add_checkpoint(10, HASH_A, "").unwrap();

        let records = [record(10, HASH_B), record(11, HASH_B)];
        let records = records.iter().map(String::as_str).collect::<Vec<_>>();
        let resolver = StaticResolver::all(NetworkType::Mainnet, &records);

        let err = c.load_checkpoints_from_dns(NetworkType::Mainnet, &resolver).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(c.get_points()[&10], Hash256::try_from(HASH_A).unwrap());
        assert!(c.get_points().contains_key(&11));
    }

    #[test]
    fn load_new_checkpoints_runs_both_loaders() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::file::CHECKPOINTS_FILE_NAME);
        std::fs::write(&path, "not json").unwrap();

        let records = [record(5_000_000, HASH_B)];
        let records = records.iter().map(String::as_str).collect::<Vec<_>>();
        let resolver = StaticResolver::all(NetworkType::Mainnet, &records);

        let mut c = Checkpoints::for_network(NetworkType::Mainnet).unwrap();
        // The broken file is reported but DNS checkpoints are still added
        assert!(c.load_new_checkpoints(&path, NetworkType::Mainnet, Some(&resolver)).is_err());
        assert_eq!(c.get_max_height(), 5_000_000);

        // Without a resolver only the file is consulted
        let mut c = Checkpoints::for_network(NetworkType::Mainnet).unwrap();
        std::fs::write(&path, r#"{"hashlines": [{"height": 6000000, "hash": "1111111111111111111111111111111111111111111111111111111111111111"}]}"#).unwrap();
        c.load_new_checkpoints(&path, NetworkType::Mainnet, None).unwrap();
        assert_eq!(c.get_max_height(), 6_000_000);

        // A good file is kept even when DNS then reports a conflict
        let mut c = Checkpoints::for_network(NetworkType::Mainnet).unwrap();
        let records = [record(6_000_000, HASH_B), record(6_000_001, HASH_B)];
        let records = records.iter().map(String::as_str).collect::<Vec<_>>();
        let resolver = StaticResolver::all(NetworkType::Mainnet, &records);

        let err = c.load_new_checkpoints(&path, NetworkType::Mainnet, Some(&resolver)).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(c.get_points()[&6_000_000], Hash256::try_from(HASH_A).unwrap());
        assert!(c.get_points().contains_key(&6_000_001));
    }
}
