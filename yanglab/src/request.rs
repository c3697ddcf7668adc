//! Request bodies for the management exchange.
//!
//! The core generates only the `<config>` document; the surrounding
//! edit-config / get / get-config / get-data bodies are a caller concern
//! and live here. Filters use explicit prefixes so the endpoint resolves
//! each top-level container against its own module.

use labnet_model::model::{NS_DEVICE, NS_NETCONF_BASE, NS_QOS};

/// NMDA namespace for `<get-data>` requests.
pub const NS_NMDA: &str = "urn:ietf:params:xml:ns:yang:ietf-netconf-nmda";

/// Subtree filter body covering every lab-net-device top-level container.
fn subtree_filter() -> String {
    format!(
        r#"    <lnd:vlans xmlns:lnd="{ns}"/>
    <lnd:vrfs xmlns:lnd="{ns}"/>
    <lndq:qos xmlns:lndq="{ns_qos}"/>
    <lnd:interfaces xmlns:lnd="{ns}"/>
    <lnd:routing xmlns:lnd="{ns}"/>
    <lnd:bgp xmlns:lnd="{ns}"/>
    <lnd:system xmlns:lnd="{ns}"/>"#,
        ns = NS_DEVICE,
        ns_qos = NS_QOS,
    )
}

/// Build an edit-config body targeting the running datastore, embedding a
/// generated `<config>` document.
pub fn edit_config(config_doc: &str) -> String {
    format!(
        r#"<edit-config xmlns="{NS_NETCONF_BASE}">
  <target><running/></target>
  {config_doc}
</edit-config>"#
    )
}

/// Build a get-config body over the running datastore with a subtree
/// filter for every module container.
pub fn get_config() -> String {
    format!(
        r#"<get-config xmlns="{NS_NETCONF_BASE}">
  <source><running/></source>
  <filter type="subtree">
{filter}
  </filter>
</get-config>"#,
        filter = subtree_filter(),
    )
}

/// Build a get body with a subtree filter for every module container.
pub fn get() -> String {
    format!(
        r#"<get xmlns="{NS_NETCONF_BASE}">
  <filter type="subtree">
{filter}
  </filter>
</get>"#,
        filter = subtree_filter(),
    )
}

/// Build an NMDA get-data body against the operational datastore.
pub fn get_data() -> String {
    format!(
        r#"<get-data xmlns="{NS_NMDA}">
  <datastore>operational</datastore>
  <subtree-filter>
{filter}
  </subtree-filter>
</get-data>"#,
        filter = subtree_filter(),
    )
}
