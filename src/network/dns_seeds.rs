// DNS Seeds - Named seed hosts handed to the external resolver
//
// Resolution itself happens elsewhere; a profile only carries the list.
use serde::Serialize;

/// One DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeedData {
    /// Operator-facing label
    pub name: String,

    /// Hostname or literal address to resolve
    pub host: String,
}

impl DnsSeedData {
    pub fn new(name: &str, host: &str) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

/// Main network DNS seeds (single-node addresses)
pub fn main_dns_seeds() -> Vec<DnsSeedData> {
    vec![
        DnsSeedData::new("Ethos", "104.248.17.117"),
        DnsSeedData::new("Pathos", "165.227.145.72"),
        DnsSeedData::new("Logos", "104.248.27.37"),
    ]
}
