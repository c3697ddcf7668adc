//! Built-in demo configuration covering every module.

use labnet_model::model::{
    Bgp, Config, Interface, InterfaceQos, Interfaces, Ipv4, Ipv4Address, Neighbor, Purpose, Qos,
    QosClass, QosPolicy, Routing, StaticRoute, StaticRoutes, Switchport, System, User, Users, Vlan,
    Vlans, Vrf, Vrfs,
};

/// Build the demo configuration. With `preprov` set, a pre-provisioned
/// interface (hardware not yet inserted) is included.
pub fn demo_config(preprov: bool) -> Config {
    let mut interfaces = vec![
        Interface {
            name: "GigabitEthernet0/0".to_string(),
            enabled: Some(true),
            mtu: Some(1500),
            purpose: Some(Purpose::new("lndi:uplink")),
            vrf: Some("blue".to_string()),
            switchport: Some(Switchport {
                mode: Some("access".to_string()),
                access_vlan: Some(10),
            }),
            ipv4: Some(Ipv4 {
                address: vec![Ipv4Address {
                    ip: "192.0.2.1".to_string(),
                    prefix_length: Some(30),
                }],
            }),
            qos: Some(InterfaceQos {
                xmlns: None,
                input_policy: Some("edge-in".to_string()),
                output_policy: Some("edge-out".to_string()),
                last_applied: None,
            }),
            ..Interface::default()
        },
        Interface {
            name: "Loopback0".to_string(),
            enabled: Some(true),
            vrf: Some("red".to_string()),
            ipv4: Some(Ipv4 {
                address: vec![Ipv4Address {
                    ip: "10.0.0.1".to_string(),
                    prefix_length: Some(32),
                }],
            }),
            ..Interface::default()
        },
    ];

    if preprov {
        interfaces.push(Interface {
            name: "Ethernet1/10".to_string(),
            enabled: Some(false),
            purpose: Some(Purpose::new("lndi:preprovisioned")),
            ..Interface::default()
        });
    }

    Config {
        vlans: Some(Vlans {
            xmlns: None,
            vlan: vec![
                Vlan {
                    id: 10,
                    name: Some("users".to_string()),
                },
                Vlan {
                    id: 20,
                    name: Some("servers".to_string()),
                },
                Vlan {
                    id: 30,
                    name: Some("management".to_string()),
                },
            ],
        }),
        vrfs: Some(Vrfs {
            xmlns: None,
            vrf: vec![
                Vrf {
                    name: "blue".to_string(),
                    rd: Some("65001:10".to_string()),
                },
                Vrf {
                    name: "red".to_string(),
                    rd: Some("65001:20".to_string()),
                },
            ],
        }),
        qos: Some(Qos {
            xmlns: None,
            policy: vec![
                QosPolicy {
                    name: "edge-in".to_string(),
                    direction: Some("ingress".to_string()),
                    dscp_default: Some(0),
                    class: vec![
                        QosClass {
                            class_id: 1,
                            class_name: "voice".to_string(),
                            bandwidth_percent: Some(30),
                            policing_rate: Some("auto".to_string()),
                        },
                        QosClass {
                            class_id: 2,
                            class_name: "best-effort".to_string(),
                            bandwidth_percent: None,
                            policing_rate: Some("2000".to_string()),
                        },
                    ],
                },
                QosPolicy {
                    name: "edge-out".to_string(),
                    direction: Some("egress".to_string()),
                    dscp_default: None,
                    class: vec![QosClass {
                        class_id: 1,
                        class_name: "voice".to_string(),
                        bandwidth_percent: Some(40),
                        policing_rate: None,
                    }],
                },
            ],
        }),
        interfaces: Some(Interfaces {
            xmlns: None,
            xmlns_identities: None,
            interface: interfaces,
        }),
        routing: Some(Routing {
            xmlns: None,
            static_routes: Some(StaticRoutes {
                route: vec![
                    StaticRoute {
                        prefix: "203.0.113.0/24".to_string(),
                        vrf: Some("blue".to_string()),
                        distance: Some(10),
                        next_hop: Some("192.0.2.2".to_string()),
                        out_if: None,
                        gateway_ip: None,
                    },
                    StaticRoute {
                        prefix: "0.0.0.0/0".to_string(),
                        vrf: None,
                        distance: Some(250),
                        next_hop: None,
                        out_if: Some("GigabitEthernet0/0".to_string()),
                        gateway_ip: Some("192.0.2.2".to_string()),
                    },
                ],
            }),
        }),
        bgp: Some(Bgp {
            xmlns: None,
            local_as: Some(65001),
            neighbor: vec![Neighbor {
                address: "192.0.2.2".to_string(),
                remote_as: Some(65002),
                vrf: Some("blue".to_string()),
            }],
        }),
        system: Some(System {
            xmlns: None,
            users: Some(Users {
                user: vec![
                    User {
                        user_id: "netadmin".to_string(),
                        screen_name: Some("Network Admin".to_string()),
                        role: Some("admin".to_string()),
                    },
                    User {
                        user_id: "operator1".to_string(),
                        screen_name: Some("NOC Operator".to_string()),
                        role: Some("operator".to_string()),
                    },
                ],
            }),
        }),
    }
}
