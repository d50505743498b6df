//! Property tests for run specification building and resolution

use super::*;
use proptest::prelude::*;

const RESERVED: [&str; 4] = ["default", "bridge", "host", "none"];

fn case_variants(word: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #[test]
    fn cmd_validates_iff_it_tokenizes_to_something(cmd in "[a-z '\"\\\\]{0,24}") {
        let spec = RunSpec::builder().cmd(cmd.as_str()).build();
        prop_assert!(spec.cmd().is_some());

        let expected = matches!(shell_words::split(&cmd), Ok(tokens) if !tokens.is_empty());
        prop_assert_eq!(spec.validate_and_resolve().is_ok(), expected);
    }

    #[test]
    fn entrypoint_validates_iff_it_tokenizes_to_something(entrypoint in "[a-z '\"]{0,24}") {
        let spec = RunSpec::builder().entrypoint(entrypoint.as_str()).build();
        prop_assert!(spec.entrypoint().is_some());

        let expected = matches!(shell_words::split(&entrypoint), Ok(tokens) if !tokens.is_empty());
        prop_assert_eq!(spec.validate().is_ok(), expected);
    }

    #[test]
    fn ports_keep_their_order(ports in proptest::collection::vec("[a-z0-9.:]{1,16}", 0..8)) {
        let spec = RunSpec::builder().ports(ports.clone()).build();
        prop_assert_eq!(spec.ports(), &ports[..]);
    }

    #[test]
    fn sequences_round_trip(
        dns in proptest::collection::vec("[0-9.]{1,15}", 0..4),
        caps in proptest::collection::vec("[A-Z_]{1,12}", 0..4),
    ) {
        let spec = RunSpec::builder()
            .dns(dns.clone())
            .cap_add(caps.clone())
            .cap_drop(caps.clone())
            .build();
        prop_assert_eq!(spec.dns(), Some(&dns[..]));
        prop_assert_eq!(spec.cap_add(), Some(&caps[..]));
        prop_assert_eq!(spec.cap_drop(), Some(&caps[..]));
    }

    #[test]
    fn unreserved_network_names_require_custom_network_api(net in "[a-z][a-z0-9-]{0,15}") {
        prop_assume!(!RESERVED.contains(&net.as_str()));
        let spec = RunSpec::builder().net(net.as_str()).build();
        prop_assert_eq!(spec.validate_and_resolve(), Ok(Some(ApiVersion::CUSTOM_NETWORKS)));
    }

    #[test]
    fn container_references_need_no_api_version(name in "[a-z][a-z0-9_-]{0,15}") {
        let token = format!("container:{name}");
        let spec = RunSpec::builder().net(token.as_str()).build();
        let mode = spec.networking_mode();
        prop_assert_eq!(mode.container_name(), Some(name.as_str()));
        prop_assert_eq!(spec.validate_and_resolve(), Ok(None));
    }

    #[test]
    fn skip_never_fails(text in ".{0,12}") {
        let spec = RunSpec::builder().skip(text.as_str()).build();
        prop_assert_eq!(spec.skip(), text.eq_ignore_ascii_case("true"));
    }

    #[test]
    fn naming_strategy_ignores_case(alias in case_variants("alias"), none in case_variants("none")) {
        let spec = RunSpec::builder().naming_strategy(alias.as_str()).unwrap().build();
        prop_assert_eq!(spec.naming_strategy(), NamingStrategy::Alias);

        let spec = RunSpec::builder().naming_strategy(none.as_str()).unwrap().build();
        prop_assert_eq!(spec.naming_strategy(), NamingStrategy::None);
    }
}
