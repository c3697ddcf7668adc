//! Terminal rendering of a parsed configuration.

use colored::Colorize;
use labnet_model::model::{Config, Interface};

/// Render a parsed [`Config`] for terminal output, one section per present
/// container.
pub fn render_config(config: &Config) -> String {
    let mut out: Vec<String> = Vec::new();

    if let Some(system) = &config.system {
        if let Some(users) = &system.users {
            out.push(header("Users"));
            for user in &users.user {
                out.push(format!(
                    "  - {} ({}) [{}]",
                    user.user_id,
                    user.screen_name.as_deref().unwrap_or(""),
                    user.role.as_deref().unwrap_or(""),
                ));
            }
        }
    }

    if let Some(vlans) = &config.vlans {
        out.push(header("VLANs"));
        for vlan in &vlans.vlan {
            out.push(format!(
                "  - id={} name={}",
                vlan.id,
                vlan.name.as_deref().unwrap_or("-"),
            ));
        }
    }

    if let Some(vrfs) = &config.vrfs {
        out.push(header("VRFs"));
        for vrf in &vrfs.vrf {
            out.push(format!(
                "  - name={} rd={}",
                vrf.name,
                vrf.rd.as_deref().unwrap_or("-"),
            ));
        }
    }

    if let Some(qos) = &config.qos {
        if !qos.policy.is_empty() {
            out.push(header("QoS Policies"));
            for policy in &qos.policy {
                out.push(format!(
                    "  - {} direction={}",
                    policy.name,
                    policy.direction.as_deref().unwrap_or("-"),
                ));
                for class in &policy.class {
                    out.push(format!(
                        "    class {} id={} bandwidth={} policing={}",
                        class.class_name,
                        class.class_id,
                        opt_num(class.bandwidth_percent),
                        class.policing_rate.as_deref().unwrap_or("-"),
                    ));
                }
            }
        }
    }

    if let Some(interfaces) = &config.interfaces {
        out.push(header("Interfaces"));
        for interface in &interfaces.interface {
            render_interface(&mut out, interface);
        }
    }

    if let Some(routing) = &config.routing {
        if let Some(static_routes) = &routing.static_routes {
            out.push(header("Static Routes"));
            for route in &static_routes.route {
                let via = match (&route.next_hop, &route.out_if) {
                    (Some(next_hop), _) => format!("via {next_hop}"),
                    (None, Some(out_if)) => match &route.gateway_ip {
                        Some(gw) => format!("out {out_if} gw {gw}"),
                        None => format!("out {out_if}"),
                    },
                    (None, None) => "via -".to_string(),
                };
                out.push(format!(
                    "  - {} {} distance={} vrf={}",
                    route.prefix,
                    via,
                    opt_num(route.distance),
                    route.vrf.as_deref().unwrap_or("-"),
                ));
            }
        }
    }

    if let Some(bgp) = &config.bgp {
        out.push(header(&format!("BGP (local-as {})", opt_num(bgp.local_as))));
        for neighbor in &bgp.neighbor {
            out.push(format!(
                "  - neighbor {} remote-as={} vrf={}",
                neighbor.address,
                opt_num(neighbor.remote_as),
                neighbor.vrf.as_deref().unwrap_or("-"),
            ));
        }
    }

    if out.is_empty() {
        out.push("(no containers present)".to_string());
    }

    let mut rendered = out.join("\n");
    rendered.push('\n');
    rendered
}

fn render_interface(out: &mut Vec<String>, interface: &Interface) {
    out.push(format!(
        "  - {} enabled={}",
        interface.name,
        match interface.enabled {
            Some(true) => "true",
            Some(false) => "false",
            None => "-",
        },
    ));
    if let Some(purpose) = &interface.purpose {
        out.push(format!("    purpose: {}", purpose.value));
    }
    if let Some(vrf) = &interface.vrf {
        out.push(format!("    vrf: {vrf}"));
    }
    if let Some(switchport) = &interface.switchport {
        out.push(format!(
            "    switchport: mode={} access-vlan={}",
            switchport.mode.as_deref().unwrap_or("-"),
            opt_num(switchport.access_vlan),
        ));
    }
    if let Some(ipv4) = &interface.ipv4 {
        for address in &ipv4.address {
            out.push(format!(
                "    ip: {}/{}",
                address.ip,
                opt_num(address.prefix_length),
            ));
        }
    }
    if let Some(qos) = &interface.qos {
        out.push(format!(
            "    qos: input={} output={}",
            qos.input_policy.as_deref().unwrap_or("-"),
            qos.output_policy.as_deref().unwrap_or("-"),
        ));
    }
    if let Some(oper_status) = &interface.oper_status {
        out.push(format!("    oper-status: {oper_status}"));
    }
    if let Some(last_change) = &interface.last_change {
        out.push(format!("    last-change: {last_change}"));
    }
    if let Some(phys_address) = &interface.phys_address {
        out.push(format!("    phys-address: {phys_address}"));
    }
    if let Some(speed) = interface.speed_mbps {
        out.push(format!("    speed-mbps: {speed}"));
    }
    if let Some(present) = interface.hardware_present {
        out.push(format!("    hardware-present: {present}"));
    }
    if let Some(counters) = &interface.counters {
        out.push(format!(
            "    counters: in={} out={}",
            opt_num(counters.in_octets),
            opt_num(counters.out_octets),
        ));
    }
}

fn header(title: &str) -> String {
    format!("{}:", title.bold().cyan())
}

fn opt_num<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::render_config;
    use labnet_model::model::Config;
    use labnet_model::parse_config;

    #[test]
    fn empty_config_renders_placeholder() {
        let rendered = render_config(&Config::default());
        assert!(rendered.contains("no containers present"));
    }

    #[test]
    fn operational_fields_are_listed() {
        let cfg = parse_config(
            r#"<data><interfaces xmlns="urn:x"><interface>
                <name>GigabitEthernet1/1</name>
                <oper-status>down</oper-status>
                <speed-mbps>1000</speed-mbps>
            </interface></interfaces></data>"#,
        )
        .expect("parse");

        let rendered = render_config(&cfg);
        assert!(rendered.contains("GigabitEthernet1/1"));
        assert!(rendered.contains("oper-status: down"));
        assert!(rendered.contains("speed-mbps: 1000"));
    }

    #[test]
    fn static_route_shows_outgoing_interface_shape() {
        let cfg = parse_config(
            r#"<config><routing xmlns="urn:x"><static-routes><route>
                <prefix>0.0.0.0/0</prefix>
                <out-if>GigabitEthernet0/0</out-if>
                <gateway-ip>192.0.2.9</gateway-ip>
            </route></static-routes></routing></config>"#,
        )
        .expect("parse");

        let rendered = render_config(&cfg);
        assert!(rendered.contains("out GigabitEthernet0/0 gw 192.0.2.9"));
    }
}
