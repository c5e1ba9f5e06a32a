//! Property tests for endpoint classification.
//!
//! Classification must be a pure function of the scheme prefix: strings
//! that do not begin with `root://` are always local, and well-formed
//! remote locators recover exactly the hostname that was embedded.

use endpoint::{Endpoint, REMOTE_SCHEME};
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_prefixed_strings_are_local(spec in "\\PC*") {
        prop_assume!(!spec.starts_with(REMOTE_SCHEME));
        prop_assert_eq!(Endpoint::classify(&spec), Endpoint::Local);
    }

    #[test]
    fn remote_locators_recover_the_host(
        host in "[a-zA-Z0-9.-]{1,64}",
        path in "(/[a-zA-Z0-9._-]{0,16}){0,4}",
    ) {
        let spec = format!("{REMOTE_SCHEME}{host}{path}");
        prop_assert_eq!(
            Endpoint::classify(&spec),
            Endpoint::Remote { host: &host },
        );
    }

    #[test]
    fn port_suffix_never_leaks_into_the_host(
        host in "[a-z0-9.]{1,32}",
        port in 1u16..,
    ) {
        let spec = format!("{REMOTE_SCHEME}{host}:{port}/file");
        prop_assert_eq!(
            Endpoint::classify(&spec),
            Endpoint::Remote { host: &host },
        );
    }
}
