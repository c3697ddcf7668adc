//! Typed containers for the lab-net-device configuration model.
//!
//! Pure data, no behavior. Every top-level container is independently
//! optional on [`Config`]: `None` means "not present in this document",
//! while a present container with an empty child list is a distinct, valid
//! state (explicit empty container). Optional leafs are `Option<T>` so that
//! "absent" and "explicit zero" stay distinguishable on the wire.
//!
//! The `xmlns` fields are namespace carriers: they are `None` on values
//! built by callers and are filled in by the generator on its own annotated
//! copy (see [`crate::generate`]). Replies never populate them because the
//! normalizer drops namespace declarations before decoding.

use serde::{Deserialize, Serialize};

/// Base lab-net-device module namespace.
pub const NS_DEVICE: &str = "http://example.com/ns/lab-net-device";
/// QoS augmentation module namespace.
pub const NS_QOS: &str = "http://example.com/ns/lab-net-device-qos";
/// Purpose identity augmentation namespace.
pub const NS_PURPOSE: &str = "http://example.com/ns/lab-net-device-purpose";
/// Identities module namespace, declared on `<interfaces>` for prefixed
/// identity values such as `lndi:uplink`.
pub const NS_IDENTITIES: &str = "http://example.com/ns/lab-net-device-identities";
/// NETCONF base namespace used by request envelopes.
pub const NS_NETCONF_BASE: &str = "urn:ietf:params:xml:ns:netconf:base:1.0";

/// Top-level aggregate for an edit-config `<config>` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "config")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlans: Option<Vlans>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrfs: Option<Vrfs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos: Option<Qos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<Interfaces>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgp: Option<Bgp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<System>,
}

/// `<vlans>` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vlans {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(default, rename = "vlan")]
    pub vlan: Vec<Vlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vlan {
    /// VLAN id, 0-4094 semantically.
    pub id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `<vrfs>` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vrfs {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(default, rename = "vrf")]
    pub vrf: Vec<Vrf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vrf {
    /// VRF name, unique key within a document.
    pub name: String,
    /// Route distinguisher, e.g. `65001:10`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Option<String>,
}

/// `<qos>` container from the QoS augmentation module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Qos {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(default, rename = "policy")]
    pub policy: Vec<QosPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QosPolicy {
    pub name: String,
    /// `ingress` or `egress`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Default DSCP value, 0-63.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dscp_default: Option<u8>,
    #[serde(default, rename = "class")]
    pub class: Vec<QosClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct QosClass {
    pub class_id: u32,
    pub class_name: String,
    /// Guaranteed bandwidth percent, 0-100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bandwidth_percent: Option<u8>,
    /// Either the literal `auto` or a numeric string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policing_rate: Option<String>,
}

/// `<interfaces>` container. Carries a second namespace declaration for the
/// identities module so that prefixed identity values resolve.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interfaces {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "@xmlns:lndi", skip_serializing_if = "Option::is_none")]
    pub xmlns_identities: Option<String>,
    #[serde(default, rename = "interface")]
    pub interface: Vec<Interface>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Interface {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u16>,
    /// Intent tag from the purpose augmentation, e.g. `lndi:uplink`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<Purpose>,
    /// VRF binding by name; no referential enforcement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switchport: Option<Switchport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos: Option<InterfaceQos>,
    // Operational telemetry below: populated only when parsing operational
    // data, never set by callers building config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oper_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phys_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mbps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_present: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counters: Option<InterfaceCounters>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Switchport {
    /// `access` or `trunk`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Access VLAN id when mode is `access`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_vlan: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ipv4 {
    #[serde(default, rename = "address")]
    pub address: Vec<Ipv4Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Address {
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u8>,
}

/// Qualified purpose value from the purpose augmentation module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Purpose {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(default, rename = "$text")]
    pub value: String,
}

impl Purpose {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            xmlns: None,
            value: value.into(),
        }
    }
}

/// Per-interface QoS binding from the QoS augmentation module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceQos {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_applied: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceCounters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_octets: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_octets: Option<u64>,
}

/// `<routing>` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Routing {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_routes: Option<StaticRoutes>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRoutes {
    #[serde(default, rename = "route")]
    pub route: Vec<StaticRoute>,
}

/// A static route. The next-hop choice (`next_hop` vs `out_if` plus
/// `gateway_ip`) is deliberately left structurally permissive; callers own
/// any "exactly one populated" policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StaticRoute {
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
    /// Administrative distance, 0-255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_if: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip: Option<String>,
}

/// `<bgp>` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Bgp {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_as: Option<u32>,
    #[serde(default, rename = "neighbor")]
    pub neighbor: Vec<Neighbor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Neighbor {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_as: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vrf: Option<String>,
}

/// `<system>` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Users>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Users {
    #[serde(default, rename = "user")]
    pub user: Vec<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct User {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    /// `admin`, `operator` or `readonly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
