//! Cross-server corroboration of A records.
//!
//! For one domain, every IPv4 address returned by any configured server is
//! counted once per distinct server that reported it. Addresses seen on at
//! least [`MIN_CORROBORATING_SERVERS`] servers get a color derived from the
//! address text alone, so the same address is painted identically in every
//! view and every session.

use crate::a_record::{clean_a_record_value, is_likely_ipv4, is_placeholder};
use crate::record_set::ServerResponse;
use crate::RecordType;
use std::collections::{HashMap, HashSet};
use std::fmt;

pub const MIN_CORROBORATING_SERVERS: usize = 2;

const SATURATION: u8 = 85;
const LIGHTNESS: u8 = 62;

/// Display color for a corroborated address, `hsl(hue, 85%, 62%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorroborationColor {
    hue: u16,
}

impl CorroborationColor {
    /// Hashes the UTF-16 code units with `h = h * 31 + unit` (wrapping u32).
    pub fn for_address(address: &str) -> Self {
        let hash = address
            .encode_utf16()
            .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)));
        Self {
            hue: (hash % 360) as u16,
        }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, SATURATION, LIGHTNESS)
    }

    /// sRGB triple for terminals that take 24-bit color.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = f64::from(SATURATION) / 100.0;
        let l = f64::from(LIGHTNESS) / 100.0;
        let h = f64::from(self.hue) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match self.hue / 60 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        (channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for CorroborationColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corroboration {
    pub address: String,
    pub server_count: usize,
    pub color: Option<CorroborationColor>,
}

/// Derived per render; holds nothing beyond what its inputs imply.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyTable {
    entries: Vec<Corroboration>,
    index: HashMap<String, usize>,
}

impl ConsistencyTable {
    /// Builds the table for one domain, walking servers in configured order.
    ///
    /// Servers missing from `results` contribute nothing; they are "not
    /// queried" rather than zero votes.
    pub fn build<S: AsRef<str>>(results: &ServerResponse, servers: &[S]) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut reporters: HashMap<String, HashSet<&str>> = HashMap::new();

        for server in servers {
            let server = server.as_ref();
            let Some(a) = results.get(server).and_then(|r| r.get(RecordType::A)) else {
                continue;
            };

            for raw in a.values() {
                if is_placeholder(raw) {
                    continue;
                }
                let address = clean_a_record_value(raw);
                if !is_likely_ipv4(&address) {
                    continue;
                }
                if !reporters.contains_key(&address) {
                    order.push(address.clone());
                }
                reporters.entry(address).or_default().insert(server);
            }
        }

        let mut table = Self::default();
        for address in order {
            let server_count = reporters.get(&address).map_or(0, HashSet::len);
            let color = (server_count >= MIN_CORROBORATING_SERVERS)
                .then(|| CorroborationColor::for_address(&address));
            table.index.insert(address.clone(), table.entries.len());
            table.entries.push(Corroboration {
                address,
                server_count,
                color,
            });
        }
        table
    }

    pub fn get(&self, address: &str) -> Option<&Corroboration> {
        self.index.get(address).map(|&i| &self.entries[i])
    }

    /// Distinct servers that reported `address`; 0 when unseen.
    pub fn server_count(&self, address: &str) -> usize {
        self.get(address).map_or(0, |c| c.server_count)
    }

    pub fn color(&self, address: &str) -> Option<CorroborationColor> {
        self.get(address).and_then(|c| c.color)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[Corroboration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
