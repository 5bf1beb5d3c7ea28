//! Tests for receiver configuration.

use super::*;

#[test]
fn default_listen_address() {
    let config = ReceiverConfig::from_raw(&serve(&[]), None).unwrap();

    assert_eq!(config.listen.to_string(), "127.0.0.1:3000");
}

#[test]
fn url_is_not_required_for_serve() {
    let result = ReceiverConfig::from_raw(&serve(&[]), None);

    assert!(result.is_ok());
}

#[test]
fn hostname_is_not_a_socket_address() {
    let result = ReceiverConfig::from_raw(&serve(&["--listen", "localhost:3000"]), None);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidListenAddress { .. })
    ));
}

#[test]
fn missing_port_is_rejected() {
    let result = ReceiverConfig::from_raw(&serve(&["--listen", "127.0.0.1"]), None);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidListenAddress { .. })
    ));
}

#[test]
fn ipv6_address_is_accepted() {
    let config = ReceiverConfig::from_raw(&serve(&["--listen", "[::1]:8080"]), None).unwrap();

    assert!(config.listen.is_ipv6());
    assert_eq!(config.to_string(), "Config { listen: [::1]:8080 }");
}
