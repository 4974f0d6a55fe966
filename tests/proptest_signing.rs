//! Property-based tests using proptest
//!
//! These tests verify signing, header injection and the action catalog
//! using randomized inputs.

use anchnet::api::client::inject_common;
use anchnet::api::signature::sign;
use anchnet::api::{Action, Credentials, RequestCommon};
use anchnet::types::instance::{InstanceStopType, StopInstancesRequest};
use proptest::prelude::*;

/// Generate an anchnet style resource id, e.g. `i-G74Q69NJ`
fn arb_instance_id() -> impl Strategy<Value = String> {
    "i-[A-Z0-9]{8}"
}

fn arb_stop_request() -> impl Strategy<Value = StopInstancesRequest> {
    (
        prop::collection::vec(arb_instance_id(), 0..10),
        prop_oneof![Just(InstanceStopType::NON_FORCE), Just(InstanceStopType::FORCE)],
    )
        .prop_map(|(instance_ids, force)| StopInstancesRequest {
            instance_ids,
            force,
            ..Default::default()
        })
}

fn arb_action() -> impl Strategy<Value = Action> {
    let actions: Vec<Action> = Action::all().collect();
    prop::sample::select(actions)
}

proptest! {
    /// Signing the same body with the same key is deterministic
    #[test]
    fn sign_is_deterministic(body in prop::collection::vec(any::<u8>(), 0..512), key in ".{0,64}") {
        let first = sign(&body, key.as_bytes());
        let second = sign(&body, key.as_bytes());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), 64);
    }

    /// Changing one byte of the body changes the signature
    #[test]
    fn sign_detects_body_change(
        body in prop::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
        key in "[a-zA-Z0-9]{1,40}",
    ) {
        let mut tampered = body.clone();
        let i = index.index(tampered.len());
        tampered[i] = tampered[i].wrapping_add(1);

        prop_assert_ne!(sign(&body, key.as_bytes()), sign(&tampered, key.as_bytes()));
    }

    /// Different keys produce different signatures for the same body
    #[test]
    fn sign_depends_on_key(body in ".{0,128}", key in "[a-z]{1,20}") {
        let other = format!("{}x", key);
        prop_assert_ne!(sign(body.as_bytes(), key.as_bytes()), sign(body.as_bytes(), other.as_bytes()));
    }

    /// Header injection never touches the caller's request
    #[test]
    fn inject_common_leaves_original_untouched(
        request in arb_stop_request(),
        token in "[A-Z0-9]{20}",
        zone in prop_oneof!["ac1", "ac2"],
        project in "(pro-[A-Z0-9]{8})?",
    ) {
        let before = request.clone();
        let credentials = Credentials::new(&token, "secret").with_project(&project);

        let prepared = inject_common(&request, &credentials, &zone, Action::StopInstances);

        prop_assert_eq!(&request, &before);
        prop_assert_eq!(&request.common, &RequestCommon::default());
        prop_assert_eq!(&prepared.instance_ids, &request.instance_ids);
        prop_assert_eq!(&prepared.force, &request.force);
        prop_assert_eq!(prepared.common.token, token);
        prop_assert_eq!(prepared.common.zone, zone);
        prop_assert_eq!(prepared.common.project, project);
        prop_assert_eq!(prepared.common.action, "StopInstances");
    }

    /// A cloned request shares nothing with the original
    #[test]
    fn clone_is_independent(request in arb_stop_request(), extra in arb_instance_id()) {
        let before = request.clone();
        let mut copy = request.clone();
        copy.instance_ids.push(extra);
        copy.instance_ids.iter_mut().for_each(|id| id.push('X'));
        copy.common.token = "changed".to_string();

        prop_assert_eq!(&request, &before);
        prop_assert_eq!(copy.instance_ids.len(), request.instance_ids.len() + 1);
    }

    /// Every catalog entry resolves back to itself by its wire name
    #[test]
    fn action_name_round_trips(action in arb_action()) {
        prop_assert_eq!(Action::resolve(action.as_str()).unwrap(), action);
        prop_assert_eq!(action.to_string(), action.as_str());
    }

    /// Names that differ from a catalog entry by case are rejected
    #[test]
    fn action_resolve_is_case_sensitive(action in arb_action()) {
        let lower = action.as_str().to_lowercase();
        prop_assert!(Action::resolve(&lower).is_err());
    }
}
