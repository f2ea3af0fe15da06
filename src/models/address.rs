//! Family-tagged address value.

use super::AddressFamily;
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A single IPv4 or IPv6 address held as an unsigned integer.
///
/// Ordering is by family first (IPv4 before IPv6), then by value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: AddressFamily,
    value: u128,
}

impl Address {
    /// Build an address from a raw value, rejecting values wider than the family.
    pub fn new(family: AddressFamily, value: u128) -> Result<Address, CidrError> {
        if value > family.max_value() {
            return Err(CidrError::InvalidAddress(format!(
                "{value:#x} does not fit in {family}"
            )));
        }
        Ok(Address { family, value })
    }

    /// Caller guarantees `value` fits the family.
    pub(crate) fn from_parts(family: AddressFamily, value: u128) -> Address {
        debug_assert!(value <= family.max_value());
        Address { family, value }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    /// Convert back to a [`std::net::IpAddr`].
    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            AddressFamily::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            AddressFamily::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(addr: Ipv4Addr) -> Self {
        Address {
            family: AddressFamily::V4,
            value: u128::from(u32::from(addr)),
        }
    }
}

impl From<Ipv6Addr> for Address {
    fn from(addr: Ipv6Addr) -> Self {
        Address {
            family: AddressFamily::V6,
            value: u128::from(addr),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl FromStr for Address {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| CidrError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ip())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
